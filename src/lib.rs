/*!
`persianbuzz` converts Persian text from logical order into presentation forms.

Every letter is replaced with its isolated, final, initial or medial
presentation form, depending on whether its neighbors can join with it.
Runs of digits are reversed, so that numbers read left-to-right inside
right-to-left text. The output always has as many code points as the input.

```
let text = persianbuzz::shape_str("\u{0628}\u{0627} 12");
assert_eq!(text, "\u{FE91}\u{FE8E} 21");
```
*/

#![doc(html_root_url = "https://docs.rs/persianbuzz/0.1.0")]
#![warn(missing_docs)]

mod buffer;
mod complex;
mod parser;
mod unicode;

use smallvec::SmallVec;

pub use crate::buffer::{BufferFlags, GlyphBuffer, SerializeFlags, UnicodeBuffer};
pub use crate::complex::joining::{
    blocks_join_from_following, blocks_join_from_preceding, classify, ShapeIndex,
};
pub use crate::complex::persian_table::{is_shapable, letters, presentation_forms, LetterEntry};
pub use crate::parser::{GlyphParser, PersianGlyphParser, StateReader, StateWriter};
pub use crate::unicode::is_decimal_digit;

/// A Unicode code point.
///
/// Not necessarily a valid scalar value: surrogates and out-of-range values
/// are passed through shaping unchanged.
pub type CodePoint = u32;

/// Shapes the buffer content.
///
/// Consumes the buffer. You can then run `GlyphBuffer::clear` to get the `UnicodeBuffer` back
/// without allocating a new one.
pub fn shape(buffer: UnicodeBuffer) -> GlyphBuffer {
    let mut code_points = Vec::with_capacity(buffer.len());
    let stats = complex::persian::shape_into(&buffer.code_points, buffer.flags, &mut code_points);

    log::trace!(
        "shaped {} code points: {} letters, {} digit runs",
        buffer.len(),
        stats.letters,
        stats.digit_runs,
    );

    GlyphBuffer {
        code_points,
        flags: buffer.flags,
    }
}

/// Shapes a slice of code points using default flags.
pub fn shape_code_points(input: &[CodePoint]) -> Vec<CodePoint> {
    let mut output = Vec::with_capacity(input.len());
    complex::persian::shape_into(input, BufferFlags::default(), &mut output);
    output
}

/// Shapes a string using default flags.
pub fn shape_str(text: &str) -> String {
    let input: SmallVec<[CodePoint; 64]> = text.chars().map(|c| c as CodePoint).collect();
    let mut output = Vec::with_capacity(input.len());
    complex::persian::shape_into(&input, BufferFlags::default(), &mut output);

    // Every output value is either an input char or a presentation form.
    output.into_iter().filter_map(char::from_u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_buffer() {
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str("\u{0628}\u{0627}");
        let glyphs = shape(buffer);
        assert_eq!(glyphs.code_points(), &[65169, 65166]);
        assert_eq!(glyphs.len(), 2);
    }

    #[test]
    fn reuse_buffer() {
        let mut buffer = UnicodeBuffer::new();
        buffer.set_flags(BufferFlags::KEEP_DIGIT_ORDER);
        buffer.push_str("12");
        let glyphs = shape(buffer);
        assert_eq!(glyphs.code_points(), &[0x31, 0x32]);

        let mut buffer = glyphs.clear();
        buffer.push_str("34");
        assert_eq!(shape(buffer).code_points(), &[0x33, 0x34]);
    }

    #[test]
    fn shape_str_digits() {
        assert_eq!(shape_str("12"), "21");
        assert_eq!(shape_str("a12b"), "a21b");
        assert_eq!(shape_str(""), "");
        assert_eq!(shape_str("\u{0628}"), "\u{0628}");
    }

    #[test]
    fn shape_code_points_keeps_length() {
        let input = [0x0628, 0x0645, 0x31, 0x32, 0x20, 0xD800, 0x06CC];
        assert_eq!(shape_code_points(&input).len(), input.len());
    }
}
