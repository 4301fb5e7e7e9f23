// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use icu_normalizer::properties::{CanonicalCombiningClassMapBorrowed, CanonicalCompositionBorrowed};
use icu_properties::CodePointMapData;
use icu_properties::CodePointMapDataBorrowed;
use icu_properties::props::{BidiMirroringGlyph, CanonicalCombiningClass};

/// Characters rendered with the width of a space for justification and
/// word-spacing purposes: space, tab, newline, and no-break space.
pub fn treat_as_space(c: u32) -> bool {
    matches!(c, 0x20 | 0x09 | 0x0A | 0xA0)
}

const fn rounding_hack_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[0x09] = true; // tab
    table[0x0A] = true; // newline
    table[0x20] = true; // space
    table[0x2D] = true; // hyphen-minus
    table[0x3F] = true; // question mark
    table[0xA0] = true; // no-break space
    table
}

static ROUNDING_HACK_TABLE: [bool; 256] = rounding_hack_table();

/// Characters at which word-boundary integer rounding is anchored.
///
/// Membership is fixed for compatibility with integer-based layout: tab,
/// newline, space, hyphen-minus, question mark, no-break space, plus the two
/// bidi control characters U+200E and U+200F. Any change shifts pixel
/// positions of laid-out text.
pub fn is_rounding_hack_char(c: u32) -> bool {
    if c < 0x100 {
        ROUNDING_HACK_TABLE[c as usize]
    } else {
        c == 0x200E || c == 0x200F
    }
}

/// Unicode queries needed while scanning: canonical composition, combining
/// classes, and bidi mirroring.
///
/// Bundles the compiled-data singletons so a scan resolves them once.
/// Construction is free; the data is baked into the binary.
pub struct UnicodeData {
    composition: CanonicalCompositionBorrowed<'static>,
    combining: CanonicalCombiningClassMapBorrowed<'static>,
    mirror: CodePointMapDataBorrowed<'static, BidiMirroringGlyph>,
}

impl UnicodeData {
    /// Binds the compiled Unicode data.
    pub fn new() -> Self {
        Self {
            composition: CanonicalCompositionBorrowed::new(),
            combining: CanonicalCombiningClassMapBorrowed::new(),
            mirror: CodePointMapData::<BidiMirroringGlyph>::new(),
        }
    }

    /// Canonically composes a base character and a combining mark into a
    /// single character, if such a composition exists.
    pub fn compose(&self, base: char, mark: char) -> Option<char> {
        self.composition.compose(base, mark)
    }

    /// Whether `unit` is a kana voiced or semi-voiced sound mark
    /// (canonical combining class 8).
    pub fn is_kana_voicing_mark(&self, unit: u16) -> bool {
        char::from_u32(u32::from(unit))
            .is_some_and(|c| self.combining.get(c) == CanonicalCombiningClass::KanaVoicing)
    }

    /// The bidi-mirrored counterpart of `c` (for example swapping
    /// parentheses), or `c` itself when it has no mirror.
    pub fn mirror(&self, c: u32) -> u32 {
        char::from_u32(c)
            .and_then(|ch| self.mirror.get(ch).mirroring_glyph)
            .map(u32::from)
            .unwrap_or(c)
    }
}

impl Default for UnicodeData {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UnicodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeData").finish_non_exhaustive()
    }
}
