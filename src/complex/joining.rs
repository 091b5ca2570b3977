use crate::CodePoint;
use crate::unicode::{is_ascii_digit, is_pattern_space, is_persian_digit};

/// A joining position of a letter, used as an index into its presentation forms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum ShapeIndex {
    /// Not joined on either side.
    Isolated = 0,
    /// Joined to the preceding letter only.
    Final = 1,
    /// Joined to the following letter only.
    Initial = 2,
    /// Joined on both sides.
    Medial = 3,
}

impl ShapeIndex {
    /// All positions, in form-array order.
    pub const ALL: [ShapeIndex; 4] = [
        ShapeIndex::Isolated,
        ShapeIndex::Final,
        ShapeIndex::Initial,
        ShapeIndex::Medial,
    ];
}

// Punctuation shared by both sides. Sorted.
const BLOCKING_PUNCTUATION: &[CodePoint] = &[
    0x0021, // !
    0x0022, // "
    0x0023, // #
    0x0025, // %
    0x0027, // '
    0x0028, // (
    0x0029, // )
    0x002A, // *
    0x002B, // +
    0x002D, // -
    0x002E, // .
    0x002F, // /
    0x003A, // :
    0x003C, // <
    0x003D, // =
    0x003E, // >
    0x005B, // [
    0x005D, // ]
    0x007B, // {
    0x007D, // }
    0x061B, // ARABIC SEMICOLON
    0x061F, // ARABIC QUESTION MARK
];

// Letters that never extend a join to the character after them. Sorted.
const NON_FORWARD_JOINING: &[CodePoint] = &[
    0x0621, // HAMZA
    0x0622, // ALEF WITH MADDA ABOVE
    0x0627, // ALEF
    0x062F, // DAL
    0x0630, // THAL
    0x0631, // REH
    0x0632, // ZAIN
    0x0648, // WAW
    0x0698, // JEH
];

const HAMZA: CodePoint = 0x0621;
const COMMA: CodePoint = 0x002C;
const ARABIC_COMMA: CodePoint = 0x060C;

#[inline]
fn is_blocking_common(u: CodePoint) -> bool {
    is_ascii_digit(u)
        || is_persian_digit(u)
        || is_pattern_space(u)
        || BLOCKING_PUNCTUATION.binary_search(&u).is_ok()
}

/// Checks that a character, when placed right before a letter,
/// prevents the letter from joining to it.
#[inline]
pub fn blocks_join_from_preceding(u: CodePoint) -> bool {
    u == COMMA || is_blocking_common(u) || NON_FORWARD_JOINING.binary_search(&u).is_ok()
}

/// Checks that a character, when placed right after a letter,
/// prevents the letter from joining to it.
///
/// Unlike the preceding side, only the hamza blocks here: whether
/// a right-joining-only letter accepts a join is decided by its own forms.
#[inline]
pub fn blocks_join_from_following(u: CodePoint) -> bool {
    u == ARABIC_COMMA || u == HAMZA || is_blocking_common(u)
}

/// Picks the joining position of a letter from its neighbors.
///
/// A missing neighbor (start or end of the text) blocks like any other
/// non-joining character.
#[inline]
pub fn classify(prev: Option<CodePoint>, next: Option<CodePoint>) -> ShapeIndex {
    let blocked_before = prev.map_or(true, blocks_join_from_preceding);
    let blocked_after = next.map_or(true, blocks_join_from_following);

    match (blocked_before, blocked_after) {
        (true, true) => ShapeIndex::Isolated,
        (false, true) => ShapeIndex::Final,
        (true, false) => ShapeIndex::Initial,
        (false, false) => ShapeIndex::Medial,
    }
}
