use crate::CodePoint;
use super::joining::ShapeIndex;

/// A shapable letter and its presentation forms.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LetterEntry {
    /// The logical code point, as it appears in the input text.
    pub base: CodePoint,
    /// Isolated, final, initial and medial forms, in this order.
    ///
    /// Letters that never join forward repeat the isolated and final forms
    /// in the initial and medial slots.
    pub forms: [CodePoint; 4],
}

impl LetterEntry {
    /// Returns the isolated, final, initial and medial forms.
    #[inline]
    pub fn forms(&self) -> &[CodePoint; 4] {
        &self.forms
    }

    /// Returns the presentation form for a joining position.
    #[inline]
    pub fn form(&self, index: ShapeIndex) -> CodePoint {
        self.forms[index as usize]
    }

    /// Checks that the letter has no initial or medial form of its own.
    #[inline]
    pub fn is_right_joining_only(&self) -> bool {
        self.forms[2] == self.forms[0] && self.forms[3] == self.forms[1]
    }
}

const fn letter(base: CodePoint, forms: [CodePoint; 4]) -> LetterEntry {
    LetterEntry { base, forms }
}

// Sorted by `base`.
//
// Keheh and Farsi yeh map onto the Arabic kaf and alef maksura presentation
// forms, which is what fonts for this table are expected to carry.
static LETTERS: &[LetterEntry] = &[
    letter(0x0622, [0x0622, 0xFE82, 0x0622, 0xFE82]), // ALEF WITH MADDA ABOVE
    letter(0x0626, [0x0626, 0xFE8A, 0xFE8B, 0xFE8C]), // YEH WITH HAMZA ABOVE
    letter(0x0627, [0x0627, 0xFE8E, 0x0627, 0xFE8E]), // ALEF
    letter(0x0628, [0x0628, 0xFE90, 0xFE91, 0xFE92]), // BEH
    letter(0x062A, [0x062A, 0xFE96, 0xFE97, 0xFE98]), // TEH
    letter(0x062B, [0x062B, 0xFE9A, 0xFE9B, 0xFE9C]), // THEH
    letter(0x062C, [0x062C, 0xFE9E, 0xFE9F, 0xFEA0]), // JEEM
    letter(0x062D, [0x062D, 0xFEA2, 0xFEA3, 0xFEA4]), // HAH
    letter(0x062E, [0x062E, 0xFEA6, 0xFEA7, 0xFEA8]), // KHAH
    letter(0x062F, [0x062F, 0xFEAA, 0x062F, 0xFEAA]), // DAL
    letter(0x0630, [0x0630, 0xFEAC, 0x0630, 0xFEAC]), // THAL
    letter(0x0631, [0x0631, 0xFEAE, 0x0631, 0xFEAE]), // REH
    letter(0x0632, [0x0632, 0xFEB0, 0x0632, 0xFEB0]), // ZAIN
    letter(0x0633, [0x0633, 0xFEB2, 0xFEB3, 0xFEB4]), // SEEN
    letter(0x0634, [0x0634, 0xFEB6, 0xFEB7, 0xFEB8]), // SHEEN
    letter(0x0635, [0x0635, 0xFEBA, 0xFEBB, 0xFEBC]), // SAD
    letter(0x0636, [0x0636, 0xFEBE, 0xFEBF, 0xFEC0]), // DAD
    letter(0x0637, [0x0637, 0xFEC2, 0xFEC3, 0xFEC4]), // TAH
    letter(0x0638, [0x0638, 0xFEC6, 0xFEC7, 0xFEC8]), // ZAH
    letter(0x0639, [0x0639, 0xFECA, 0xFECB, 0xFECC]), // AIN
    letter(0x063A, [0x063A, 0xFECE, 0xFECF, 0xFED0]), // GHAIN
    letter(0x0641, [0x0641, 0xFED2, 0xFED3, 0xFED4]), // FEH
    letter(0x0642, [0x0642, 0xFED6, 0xFED7, 0xFED8]), // QAF
    letter(0x0644, [0x0644, 0xFEDE, 0xFEDF, 0xFEE0]), // LAM
    letter(0x0645, [0x0645, 0xFEE2, 0xFEE3, 0xFEE4]), // MEEM
    letter(0x0646, [0x0646, 0xFEE6, 0xFEE7, 0xFEE8]), // NOON
    letter(0x0647, [0x0647, 0xFEEA, 0xFEEB, 0xFEEC]), // HEH
    letter(0x0648, [0x0648, 0xFEEE, 0x0648, 0xFEEE]), // WAW
    letter(0x067E, [0x067E, 0xFB57, 0xFB58, 0xFB59]), // PEH
    letter(0x0686, [0x0686, 0xFB7B, 0xFB7C, 0xFB7D]), // TCHEH
    letter(0x0698, [0x0698, 0xFB8B, 0x0698, 0xFB8B]), // JEH
    letter(0x06A9, [0x0643, 0xFB8F, 0xFB90, 0xFB91]), // KEHEH
    letter(0x06AF, [0x06AF, 0xFB93, 0xFB94, 0xFB95]), // GAF
    letter(0x06CC, [0x0649, 0xFBFD, 0xFBFE, 0xFBFF]), // FARSI YEH
];

/// Returns all shapable letters, ordered by their base code point.
pub fn letters() -> &'static [LetterEntry] {
    LETTERS
}

/// Looks up a shapable letter.
#[inline]
pub fn lookup(u: CodePoint) -> Option<&'static LetterEntry> {
    LETTERS
        .binary_search_by_key(&u, |entry| entry.base)
        .ok()
        .map(|idx| &LETTERS[idx])
}

/// Returns the isolated, final, initial and medial forms of a letter.
///
/// Returns `None` when the code point is not a shapable letter.
#[inline]
pub fn presentation_forms(u: CodePoint) -> Option<&'static [CodePoint; 4]> {
    lookup(u).map(LetterEntry::forms)
}

/// Checks that a code point has an entry in the presentation-form table.
#[inline]
pub fn is_shapable(u: CodePoint) -> bool {
    lookup(u).is_some()
}
