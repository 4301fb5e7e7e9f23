// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Per-call configuration for a measurement scan.
///
/// A style is immutable for the duration of a call into
/// [`TextMeasurer`](crate::TextMeasurer) or
/// [`WidthIterator`](crate::WidthIterator).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunStyle {
    /// Scan the run as right-to-left text: code points are bidi-mirrored and
    /// emitted advances carry the previous rounding correction.
    pub rtl: bool,
    /// The direction was forced by the caller rather than derived from the
    /// text. Carried for buffer consumers; has no effect on measurement.
    pub directional_override: bool,
    /// Round word-boundary characters up to integer widths and pin the
    /// cumulative width to an integer before each word boundary.
    pub apply_word_rounding: bool,
    /// Pin the cumulative width of the measured sub-range to an integer at
    /// its final character.
    pub apply_run_rounding: bool,
    /// Justification budget, distributed across space characters in the run.
    pub padding: f32,
    /// Width of the tab grid; zero disables tab alignment.
    pub tab_width: f32,
    /// X position of the run, anchoring the tab grid.
    pub x_pos: f32,
    /// Look for a fallback face when the current face has no glyph for a
    /// character.
    pub attempt_font_substitution: bool,
}

impl Default for RunStyle {
    fn default() -> Self {
        Self {
            rtl: false,
            directional_override: false,
            apply_word_rounding: true,
            apply_run_rounding: true,
            padding: 0.0,
            tab_width: 0.0,
            x_pos: 0.0,
            attempt_font_substitution: true,
        }
    }
}

impl RunStyle {
    /// The style used for the nested one-off measurement of a cluster
    /// against a substitute face.
    ///
    /// Direction and word rounding carry over; run rounding, padding, and
    /// tab state are cleared, and no further substitution is attempted, so
    /// fallback can never recurse past one level.
    pub fn for_substitution(&self) -> Self {
        Self {
            rtl: self.rtl,
            directional_override: self.directional_override,
            apply_word_rounding: self.apply_word_rounding,
            apply_run_rounding: false,
            padding: 0.0,
            tab_width: 0.0,
            x_pos: 0.0,
            attempt_font_substitution: false,
        }
    }
}
