// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use peniko::kurbo::{Point, Rect};

use crate::cache::GlyphCache;
use crate::font::{Font, GlyphMetrics, GlyphResolver};
use crate::glyph::GlyphBuffer;
use crate::iter::WidthIterator;
use crate::run::TextRun;
use crate::style::RunStyle;
use crate::unicode::UnicodeData;

/// Measurement entry points over a font and a glyph source.
///
/// A measurer borrows the font, the caller's glyph source, the caller-owned
/// glyph cache, and the shared Unicode data, and constructs a fresh
/// [`WidthIterator`] per call. It holds no state between calls beyond what
/// accumulates in the cache.
pub struct TextMeasurer<'a, S> {
    font: &'a Font,
    source: &'a S,
    cache: &'a mut GlyphCache,
    unicode: &'a UnicodeData,
}

impl<'a, S: GlyphResolver + GlyphMetrics> TextMeasurer<'a, S> {
    /// Binds a measurer to a font, glyph source, and cache.
    pub fn new(
        font: &'a Font,
        source: &'a S,
        cache: &'a mut GlyphCache,
        unicode: &'a UnicodeData,
    ) -> Self {
        Self {
            font,
            source,
            cache,
            unicode,
        }
    }

    /// The advance width of the run's sub-range.
    pub fn width(&mut self, run: &TextRun<'_>, style: &RunStyle) -> f32 {
        let mut iter =
            WidthIterator::new(self.font, *run, *style, self.source, self.cache, self.unicode);
        iter.advance(run.to(), None);
        iter.run_width_so_far()
    }

    /// The advance width of the run's sub-range, also appending the
    /// resolved glyphs to `buffer` in logical order.
    pub fn width_with_buffer(
        &mut self,
        run: &TextRun<'_>,
        style: &RunStyle,
        buffer: &mut GlyphBuffer,
    ) -> f32 {
        let mut iter =
            WidthIterator::new(self.font, *run, *style, self.source, self.cache, self.unicode);
        iter.advance(run.to(), Some(buffer));
        iter.run_width_so_far()
    }

    /// The advance width rounded to the nearest integer pixel.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "text advances are far below i32 range"
    )]
    pub fn rounded_width(&mut self, run: &TextRun<'_>, style: &RunStyle) -> i32 {
        self.width(run, style).round() as i32
    }

    /// The character offset within the sub-range whose glyph covers the
    /// position `x`, for hit testing.
    ///
    /// With `include_partial_glyphs`, a position past the midpoint of a
    /// glyph resolves to the following character boundary, which is the
    /// behavior expected for caret placement from a click.
    pub fn offset_for_position(
        &mut self,
        run: &TextRun<'_>,
        style: &RunStyle,
        x: f32,
        include_partial_glyphs: bool,
    ) -> usize {
        let mut delta = x;
        let mut buffer = GlyphBuffer::new();
        let mut offset;

        if style.rtl {
            // Right-to-left glyphs accumulate from the right edge.
            delta -= self.width(run, style);
            let mut iter =
                WidthIterator::new(self.font, *run, *style, self.source, self.cache, self.unicode);
            loop {
                offset = iter.current_character();
                let Some(w) = iter.advance_one_character(&mut buffer) else {
                    break;
                };
                delta += w;
                if include_partial_glyphs {
                    if delta - w / 2.0 >= 0.0 {
                        break;
                    }
                } else if delta >= 0.0 {
                    break;
                }
            }
        } else {
            let mut iter =
                WidthIterator::new(self.font, *run, *style, self.source, self.cache, self.unicode);
            loop {
                offset = iter.current_character();
                let Some(w) = iter.advance_one_character(&mut buffer) else {
                    break;
                };
                delta -= w;
                if include_partial_glyphs {
                    if delta + w / 2.0 <= 0.0 {
                        break;
                    }
                } else if delta <= 0.0 {
                    break;
                }
            }
        }

        offset - run.from()
    }

    /// The pixel-snapped rectangle covering the run's sub-range, for
    /// selection highlighting.
    ///
    /// The left edge floors and the right edge rounds, a compromise that
    /// keeps caret positioning consistent with the width rounding applied
    /// during measurement.
    pub fn selection_rect(
        &mut self,
        run: &TextRun<'_>,
        style: &RunStyle,
        origin: Point,
        height: f32,
    ) -> Rect {
        let complete = run.to_complete();
        let mut iter = WidthIterator::new(
            self.font,
            complete,
            *style,
            self.source,
            self.cache,
            self.unicode,
        );
        iter.advance(run.from(), None);
        let before_width = iter.run_width_so_far();
        iter.advance(run.to(), None);
        let after_width = iter.run_width_so_far();

        if style.rtl {
            iter.advance(run.len(), None);
            let total_width = iter.run_width_so_far();
            let left = (total_width - after_width).floor();
            let right = (total_width - before_width).round();
            Rect::new(
                origin.x + f64::from(left),
                origin.y,
                origin.x + f64::from(right),
                origin.y + f64::from(height),
            )
        } else {
            Rect::new(
                origin.x + f64::from(before_width.floor()),
                origin.y,
                origin.x + f64::from(after_width.round()),
                origin.y + f64::from(height),
            )
        }
    }
}

impl<S> fmt::Debug for TextMeasurer<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMeasurer")
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}
