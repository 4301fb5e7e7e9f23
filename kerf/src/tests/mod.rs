// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests driving the public measurement API against mock faces.
//!
//! Advances in these tests are multiples of 0.25 so every accumulated sum
//! is exactly representable and width comparisons can be exact.


use crate::testing::TestFaces;
use crate::{Font, Glyph, GlyphCache, RunStyle, TextMeasurer, TextRun, UnicodeData};

pub(crate) fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// A style with both rounding hacks disabled, for tests that want raw sums.
pub(crate) fn no_rounding() -> RunStyle {
    RunStyle {
        apply_word_rounding: false,
        apply_run_rounding: false,
        ..RunStyle::default()
    }
}

/// Mock faces with the given mappings on the primary face.
pub(crate) fn faces_with(mappings: &[(char, Glyph, f32)]) -> TestFaces {
    let mut faces = TestFaces::new();
    let primary = faces.primary();
    for &(c, glyph, advance) in mappings {
        faces.face_mut(primary).map(c, glyph, advance);
    }
    faces
}

/// Measures `units` with a fresh cache.
pub(crate) fn width_of(faces: &TestFaces, font: &Font, units: &[u16], style: &RunStyle) -> f32 {
    let unicode = UnicodeData::new();
    let mut cache = GlyphCache::new();
    TextMeasurer::new(font, faces, &mut cache, &unicode).width(&TextRun::new(units), style)
}

/// Measures the `[from, to)` sub-range of `units` with a fresh cache.
pub(crate) fn subrange_width_of(
    faces: &TestFaces,
    font: &Font,
    units: &[u16],
    from: usize,
    to: usize,
    style: &RunStyle,
) -> f32 {
    let unicode = UnicodeData::new();
    let mut cache = GlyphCache::new();
    TextMeasurer::new(font, faces, &mut cache, &unicode)
        .width(&TextRun::with_range(units, from, to), style)
}
