pub(crate) mod joining;
pub(crate) mod persian;
pub(crate) mod persian_table;
