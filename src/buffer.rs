use std::fmt::Write;

use bitflags::bitflags;

use crate::CodePoint;

bitflags! {
    /// Flags that change how a `UnicodeBuffer` is shaped.
    ///
    /// The default, empty set is the standard behavior.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct BufferFlags: u32 {
        /// Leave digit runs in their logical order.
        const KEEP_DIGIT_ORDER = 1 << 0;
        /// Shape a buffer holding a single letter.
        ///
        /// By default a one-character buffer is returned as is, so a lone
        /// letter keeps its base code point instead of the isolated form.
        const SHAPE_SINGLE_LETTER = 1 << 1;
    }
}

bitflags! {
    /// Flags used for serialization with `GlyphBuffer::serialize`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct SerializeFlags: u32 {
        /// Do not prefix hexadecimal values with `U+`.
        const NO_UNICODE_PREFIX = 1 << 0;
        /// Write decimal values instead of hexadecimal ones.
        const DECIMAL = 1 << 1;
    }
}

/// A buffer that contains an input string ready for shaping.
///
/// The buffer stores raw code points, so text that is not valid UTF-16
/// or UTF-32 (like unpaired surrogates) can be shaped as well.
#[derive(Clone, Default)]
pub struct UnicodeBuffer {
    pub(crate) code_points: Vec<CodePoint>,
    pub(crate) flags: BufferFlags,
}

impl UnicodeBuffer {
    /// Creates a new `UnicodeBuffer`.
    #[inline]
    pub fn new() -> UnicodeBuffer {
        UnicodeBuffer::default()
    }

    /// Returns the number of code points in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Pushes a string to a buffer.
    pub fn push_str(&mut self, str: &str) {
        self.code_points.reserve(str.len());
        self.code_points.extend(str.chars().map(|c| c as CodePoint));
    }

    /// Appends a single code point.
    #[inline]
    pub fn add(&mut self, u: CodePoint) {
        self.code_points.push(u);
    }

    /// Appends raw code points.
    pub fn extend_code_points(&mut self, code_points: &[CodePoint]) {
        self.code_points.extend_from_slice(code_points);
    }

    /// Returns the buffer content.
    #[inline]
    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    /// Sets the shaping flags.
    #[inline]
    pub fn set_flags(&mut self, flags: BufferFlags) {
        self.flags = flags;
    }

    /// Returns the shaping flags.
    #[inline]
    pub fn flags(&self) -> BufferFlags {
        self.flags
    }

    /// Clears the contents of the buffer. Flags are preserved.
    #[inline]
    pub fn clear(&mut self) {
        self.code_points.clear();
    }
}

impl std::fmt::Debug for UnicodeBuffer {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("UnicodeBuffer")
            .field("len", &self.len())
            .field("flags", &self.flags)
            .finish()
    }
}

/// A buffer that contains the results of the shaping process.
///
/// Holds exactly as many code points as the shaped `UnicodeBuffer` did.
#[derive(Clone)]
pub struct GlyphBuffer {
    pub(crate) code_points: Vec<CodePoint>,
    pub(crate) flags: BufferFlags,
}

impl GlyphBuffer {
    /// Returns the number of code points in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.code_points.len()
    }

    /// Returns `true` if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code_points.is_empty()
    }

    /// Returns the shaped code points.
    #[inline]
    pub fn code_points(&self) -> &[CodePoint] {
        &self.code_points
    }

    /// Converts the shaped code points into a string.
    ///
    /// Values that are not Unicode scalar values are replaced with U+FFFD.
    pub fn to_string_lossy(&self) -> String {
        self.code_points
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Clears the content of the glyph buffer and returns an empty
    /// `UnicodeBuffer` reusing the existing allocation.
    pub fn clear(mut self) -> UnicodeBuffer {
        self.code_points.clear();
        UnicodeBuffer {
            code_points: self.code_points,
            flags: self.flags,
        }
    }

    /// Converts the glyph buffer content into a string.
    ///
    /// Code points are separated by `|`.
    pub fn serialize(&self, flags: SerializeFlags) -> String {
        let mut s = String::with_capacity(self.len() * 7);

        for (i, &u) in self.code_points.iter().enumerate() {
            if i != 0 {
                s.push('|');
            }

            if flags.contains(SerializeFlags::DECIMAL) {
                write!(&mut s, "{}", u).unwrap();
            } else if flags.contains(SerializeFlags::NO_UNICODE_PREFIX) {
                write!(&mut s, "{:04X}", u).unwrap();
            } else {
                write!(&mut s, "U+{:04X}", u).unwrap();
            }
        }

        s
    }
}

impl std::fmt::Debug for GlyphBuffer {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("GlyphBuffer")
            .field("code_points", &self.serialize(SerializeFlags::default()))
            .finish()
    }
}

impl std::fmt::Display for GlyphBuffer {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &u in &self.code_points {
            fmt.write_char(char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }

        Ok(())
    }
}
