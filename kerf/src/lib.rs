// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-exact advance measurement for runs of UTF-16 text.
//!
//! Kerf walks a text run one cluster at a time, pulling glyphs and metrics
//! from caller-provided [`GlyphResolver`]/[`GlyphMetrics`] implementations
//! and accumulating the advance width. It handles surrogate pairs, kana
//! voicing-mark composition, simple Latin diacritic composition, small-caps
//! substitution, per-character font fallback, tab stops, justification
//! padding, word and letter spacing, and the word/run integer-rounding
//! behavior that legacy integer-based layout depends on.
//!
//! The entry point is [`TextMeasurer`], which drives a [`WidthIterator`]
//! over a [`TextRun`] under a [`RunStyle`]. The glyph cache is owned by the
//! caller; nothing in this crate holds global state.
//!
//! ```
//! use kerf::{Font, GlyphCache, RunStyle, TextMeasurer, TextRun, UnicodeData};
//! # use kerf::{FaceId, Glyph, GlyphData, GlyphMetrics, GlyphResolver, SpaceMetrics};
//! # struct OneFace;
//! # impl GlyphResolver for OneFace {
//! #     fn glyph_data_for_char(&self, face: FaceId, c: u32) -> GlyphData {
//! #         GlyphData { glyph: c as Glyph, face }
//! #     }
//! #     fn small_caps_variant(&self, face: FaceId) -> FaceId { face }
//! #     fn face_for_characters(&self, _units: &[u16]) -> Option<FaceId> { None }
//! # }
//! # impl GlyphMetrics for OneFace {
//! #     fn advance_for_glyph(&self, _face: FaceId, _glyph: Glyph) -> f32 { 8.0 }
//! #     fn space_metrics(&self, _face: FaceId) -> SpaceMetrics {
//! #         SpaceMetrics { glyph: 0x20, width: 8.0, adjusted_width: 8.0, fixed_pitch: true }
//! #     }
//! # }
//! # let faces = OneFace;
//! let font = Font::new(kerf::FaceId(0));
//! let unicode = UnicodeData::new();
//! let mut cache = GlyphCache::new();
//! let mut measurer = TextMeasurer::new(&font, &faces, &mut cache, &unicode);
//!
//! let units: Vec<u16> = "hello".encode_utf16().collect();
//! let width = measurer.width(&TextRun::new(&units), &RunStyle::default());
//! assert!(width > 0.0);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod cache;
mod font;
mod glyph;
mod iter;
mod measure;
mod run;
mod style;
mod unicode;

#[cfg(test)]
mod testing;
#[cfg(test)]
mod tests;

pub use cache::GlyphCache;
pub use font::{FaceId, Font, Glyph, GlyphData, GlyphMetrics, GlyphResolver, SpaceMetrics};
pub use glyph::{GlyphBuffer, PlacedGlyph};
pub use iter::WidthIterator;
pub use measure::TextMeasurer;
pub use run::TextRun;
pub use style::RunStyle;
pub use unicode::{UnicodeData, is_rounding_hack_char, treat_as_space};
