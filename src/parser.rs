/*!
Glyph parser plugins.

A text renderer holds a `GlyphParser` per font and runs every text run through
it before looking glyphs up. Parsers are saved and loaded together with the
font they belong to, which is why the trait carries `write` and `read` hooks.
*/

use crate::{BufferFlags, CodePoint, UnicodeBuffer};

/// A sink for the persisted state of a plugin, provided by the host.
pub trait StateWriter {
    /// Writes a named integer value.
    fn write_u32(&mut self, name: &str, value: u32) -> std::io::Result<()>;
}

/// A source of the persisted state of a plugin, provided by the host.
pub trait StateReader {
    /// Reads a named integer value, returning `default` when it is missing.
    fn read_u32(&mut self, name: &str, default: u32) -> std::io::Result<u32>;
}

/// A text transform applied before glyph lookup.
pub trait GlyphParser: Send + Sync {
    /// Transforms a run of text.
    ///
    /// The output has exactly as many code points as the input.
    fn parse(&self, text: &[CodePoint]) -> Vec<CodePoint>;

    /// Saves the parser state.
    fn write(&self, writer: &mut dyn StateWriter) -> std::io::Result<()>;

    /// Restores the parser state.
    fn read(&mut self, reader: &mut dyn StateReader) -> std::io::Result<()>;
}

/// A `GlyphParser` for Persian text.
///
/// Replaces letters with their presentation forms and reverses digit runs.
/// The parser is stateless: `write` and `read` do nothing.
#[derive(Clone, Copy, Default, Debug)]
pub struct PersianGlyphParser {
    flags: BufferFlags,
}

impl PersianGlyphParser {
    /// Creates a new parser with default flags.
    pub fn new() -> Self {
        PersianGlyphParser::default()
    }

    /// Creates a new parser that shapes with the provided flags.
    pub fn with_flags(flags: BufferFlags) -> Self {
        PersianGlyphParser { flags }
    }

    /// Returns the flags used for shaping.
    pub fn flags(&self) -> BufferFlags {
        self.flags
    }
}

impl GlyphParser for PersianGlyphParser {
    fn parse(&self, text: &[CodePoint]) -> Vec<CodePoint> {
        let mut buffer = UnicodeBuffer::new();
        buffer.extend_code_points(text);
        buffer.set_flags(self.flags);
        crate::shape(buffer).code_points
    }

    fn write(&self, _: &mut dyn StateWriter) -> std::io::Result<()> {
        log::debug!("PersianGlyphParser has no state to write");
        Ok(())
    }

    fn read(&mut self, _: &mut dyn StateReader) -> std::io::Result<()> {
        log::debug!("PersianGlyphParser has no state to read");
        Ok(())
    }
}
