// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::cache::GlyphCache;
use crate::font::{FaceId, Font, GlyphData, GlyphMetrics, GlyphResolver};
use crate::glyph::GlyphBuffer;
use crate::run::TextRun;
use crate::style::RunStyle;
use crate::unicode::{UnicodeData, is_rounding_hack_char, treat_as_space};

fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

fn is_lead_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_trail_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

fn supplementary(lead: u16, trail: u16) -> u32 {
    0x10000 + ((u32::from(lead) - 0xD800) << 10) + (u32::from(trail) - 0xDC00)
}

/// The simple one-to-one uppercase mapping; multi-character expansions
/// (such as ß) keep the original character.
fn simple_uppercase(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

/// The width of the text before a run's sub-range.
///
/// Scanning a sub-range must make the same rounding decisions a full-run
/// scan would make at the same positions, so the prefix is always measured
/// even when its width was not asked for. This is a single bounded forward
/// pass over `[0, run.from())`, not a recursive construction.
pub(crate) fn prefix_width<S: GlyphResolver + GlyphMetrics>(
    font: &Font,
    run: TextRun<'_>,
    style: RunStyle,
    source: &S,
    cache: &mut GlyphCache,
    unicode: &UnicodeData,
) -> f32 {
    let mut iter =
        WidthIterator::raw(font, run.to_complete(), style, source, cache, unicode, None, 0.0);
    iter.advance(run.from(), None);
    iter.run_width_so_far
}

/// A stateful forward scan over a text run, accumulating advance width one
/// cluster at a time.
///
/// An iterator is constructed fresh per measurement call, driven by one or
/// more [`advance`](Self::advance) calls, and discarded once the caller has
/// read [`run_width_so_far`](Self::run_width_so_far). It is not meant to be
/// shared across threads or reused between calls.
///
/// Malformed UTF-16 never panics: an unpaired lead surrogate stops the scan
/// with all accumulated state intact, and callers detect the lack of
/// progress through [`current_character`](Self::current_character).
pub struct WidthIterator<'a, S> {
    font: &'a Font,
    run: TextRun<'a>,
    style: RunStyle,
    source: &'a S,
    cache: &'a mut GlyphCache,
    unicode: &'a UnicodeData,
    substitute_face: Option<FaceId>,
    end: usize,
    current_character: usize,
    run_width_so_far: f32,
    width_to_start: f32,
    padding: f32,
    pad_per_space: f32,
    final_rounding_width: f32,
}

impl<'a, S: GlyphResolver + GlyphMetrics> WidthIterator<'a, S> {
    /// Creates an iterator positioned at the start of the run's sub-range.
    ///
    /// When the sub-range does not begin at 0 this measures the prefix
    /// first; see [`prefix_width`].
    pub fn new(
        font: &'a Font,
        run: TextRun<'a>,
        style: RunStyle,
        source: &'a S,
        cache: &'a mut GlyphCache,
        unicode: &'a UnicodeData,
    ) -> Self {
        let width_to_start = if run.from() == 0 {
            0.0
        } else {
            prefix_width(font, run, style, source, cache, unicode)
        };
        Self::raw(
            font,
            run,
            style,
            source,
            cache,
            unicode,
            None,
            width_to_start,
        )
    }

    fn raw(
        font: &'a Font,
        run: TextRun<'a>,
        style: RunStyle,
        source: &'a S,
        cache: &'a mut GlyphCache,
        unicode: &'a UnicodeData,
        substitute_face: Option<FaceId>,
        width_to_start: f32,
    ) -> Self {
        let end = if style.rtl { run.len() } else { run.to() };

        // Distribute the justification budget over the spaces in range.
        let padding = style.padding;
        let pad_per_space = if padding == 0.0 {
            0.0
        } else {
            let spaces = (run.from()..end)
                .filter(|&i| treat_as_space(u32::from(run.get(i))))
                .count();
            if spaces == 0 {
                0.0
            } else {
                (padding / spaces as f32).ceil()
            }
        };

        Self {
            font,
            run,
            style,
            source,
            cache,
            unicode,
            substitute_face,
            end,
            current_character: run.from(),
            run_width_so_far: 0.0,
            width_to_start,
            padding,
            pad_per_space,
            final_rounding_width: 0.0,
        }
    }

    /// Scans forward to `offset` (clamped to the scan end), accumulating
    /// width and appending to `glyph_buffer` when one is supplied.
    pub fn advance(&mut self, offset: usize, mut glyph_buffer: Option<&mut GlyphBuffer>) {
        let offset = offset.min(self.end);
        let run = self.run;
        let style = self.style;
        let rtl = style.rtl;
        let need_char_transform = rtl || self.font.small_caps;
        let has_extra_spacing =
            self.font.letter_spacing != 0.0 || self.font.word_spacing != 0.0 || self.padding != 0.0;

        let mut current = self.current_character;
        let mut run_width_so_far = self.run_width_so_far;
        let mut last_rounding_width = self.final_rounding_width;

        while current < offset {
            let unit = run.get(current);
            let mut c = u32::from(unit);
            let mut cluster_length = 1;

            if c >= 0x3041 {
                if c <= 0x30FE {
                    // Hiragana and Katakana voiced and semi-voiced syllables:
                    // compose base plus sound mark and look the composed
                    // character up as one cluster.
                    if let Some(composed) = self.normalize_voicing_marks(current) {
                        c = u32::from(composed);
                        cluster_length = 2;
                    }
                } else if is_surrogate(unit) {
                    if !is_lead_surrogate(unit) {
                        break;
                    }
                    // Combine a surrogate pair into the full code point
                    // before glyph lookup. A lead with no valid trail stops
                    // the scan; there is no safe way past it.
                    if current + 1 >= run.len() {
                        break;
                    }
                    let low = run.get(current + 1);
                    if !is_trail_surrogate(low) {
                        break;
                    }
                    c = supplementary(unit, low);
                    cluster_length = 2;
                }
            } else if (0x41..=0x7A).contains(&c) && current + 1 < run.len() {
                // Simple Latin diacriticals.
                let mark = run.get(current + 1);
                if (0x300..=0x36F).contains(&mark) {
                    if let (Some(base), Some(mark)) =
                        (char::from_u32(c), char::from_u32(u32::from(mark)))
                    {
                        if let Some(composed) = self.unicode.compose(base, mark) {
                            c = u32::from(composed);
                            cluster_length = 2;
                        }
                    }
                }
            }

            let mut face = self.substitute_face.unwrap_or(self.font.primary);

            if need_char_transform {
                if rtl {
                    c = self.unicode.mirror(c);
                }

                // Small caps renders lowercase as uppercase glyphs from the
                // reduced-size variant face.
                if self.font.small_caps {
                    if let Some(ch) = char::from_u32(c) {
                        if !ch.is_uppercase() {
                            if let Some(upper) = simple_uppercase(ch) {
                                if upper != ch {
                                    c = u32::from(upper);
                                    face = self.source.small_caps_variant(face);
                                }
                            }
                        }
                    }
                }
            }

            let mut data = match self.cache.get(face, c) {
                Some(data) => data,
                None => {
                    let data = self.source.glyph_data_for_char(face, c);
                    self.cache.insert(face, c, data);
                    data
                }
            };

            // If this face has no glyph for the character, look for a
            // substitute face and measure the cluster against it in
            // isolation. A one-glyph result is cached against the original
            // face so later scans resolve it directly. Without a substitute
            // we measure (and a renderer would draw) the notdef glyph.
            if data.glyph == 0 && self.substitute_face.is_none() && style.attempt_font_substitution
            {
                let cluster = &run.units()[current..current + cluster_length];
                if let Some(substitute) = self.source.face_for_characters(cluster) {
                    let mut local = GlyphBuffer::new();
                    let mut inner = WidthIterator::raw(
                        self.font,
                        TextRun::new(cluster),
                        style.for_substitution(),
                        self.source,
                        &mut *self.cache,
                        self.unicode,
                        Some(substitute),
                        0.0,
                    );
                    inner.advance(cluster.len(), Some(&mut local));
                    if let [placed] = local.glyphs() {
                        data = GlyphData {
                            glyph: placed.glyph,
                            face: substitute,
                        };
                        self.cache.insert(face, c, data);
                    }
                }
            }

            let mut width;
            if c == u32::from(b'\t') && style.tab_width != 0.0 {
                // Tabs align to a fixed grid anchored at the run's position.
                width = style.tab_width - (style.x_pos + run_width_so_far) % style.tab_width;
            } else if c == 0 {
                width = 0.0;
            } else {
                width = self.source.advance_for_glyph(data.face, data.glyph);
                // Spaces are special-cased in two ways under word rounding:
                // the space itself gets the adjusted width, and in
                // fixed-pitch faces every glyph matching the space width
                // shares that adjusted width.
                let space = self.source.space_metrics(data.face);
                if width == space.width
                    && (space.fixed_pitch || data.glyph == space.glyph)
                    && style.apply_word_rounding
                {
                    width = space.adjusted_width;
                }
            }

            if has_extra_spacing {
                if width != 0.0 && self.font.letter_spacing != 0.0 {
                    width += self.font.letter_spacing;
                }

                if treat_as_space(c) {
                    // Justification: spread the padding budget over the
                    // spaces, with the last space absorbing whatever the
                    // integer division left over.
                    if self.padding != 0.0 {
                        if self.padding < self.pad_per_space {
                            width += self.padding;
                            self.padding = 0.0;
                        } else {
                            width += self.pad_per_space;
                            self.padding -= self.pad_per_space;
                        }
                    }

                    // Word spacing applies once per word boundary, not per
                    // space, so only the first space after a non-space gets
                    // it. The test reads the raw previous code unit.
                    if current != 0
                        && !treat_as_space(u32::from(run.get(current - 1)))
                        && self.font.word_spacing != 0.0
                    {
                        width += self.font.word_spacing;
                    }
                }
            }

            current += cluster_length;

            let old_width = width;

            // Word-boundary characters are forced to integer width so the
            // following word starts on an integer boundary.
            if style.apply_word_rounding && is_rounding_hack_char(c) {
                width = width.ceil();
            }

            // When the next character is a word boundary (or this is the
            // last character under run rounding), nudge this glyph so the
            // cumulative total lands exactly on an integer. Already-emitted
            // glyphs are never revisited.
            if (style.apply_word_rounding
                && current < run.len()
                && is_rounding_hack_char(u32::from(run.get(current))))
                || (style.apply_run_rounding && current >= self.end)
            {
                let total_width = self.width_to_start + run_width_so_far + width;
                width += total_width.ceil() - total_width;
            }

            run_width_so_far += width;

            if let Some(buffer) = glyph_buffer.as_deref_mut() {
                // Right-to-left glyphs are laid out in reverse, so the
                // rounding correction from the previous iteration lands on
                // this glyph's emitted advance.
                let advance = if rtl {
                    old_width + last_rounding_width
                } else {
                    width
                };
                buffer.push(data.glyph, data.face, advance);
            }

            last_rounding_width = width - old_width;
        }

        self.current_character = current;
        self.run_width_so_far = run_width_so_far;
        self.final_rounding_width = last_rounding_width;
    }

    /// Scans exactly one cluster, replacing the contents of `glyph_buffer`
    /// with the glyphs it produced.
    ///
    /// Returns the summed emitted advance, or `None` when no glyph could be
    /// produced (end of run, or malformed UTF-16 ahead).
    pub fn advance_one_character(&mut self, glyph_buffer: &mut GlyphBuffer) -> Option<f32> {
        glyph_buffer.clear();
        self.advance(self.current_character + 1, Some(glyph_buffer));
        if glyph_buffer.is_empty() {
            None
        } else {
            Some(glyph_buffer.total_advance())
        }
    }

    fn normalize_voicing_marks(&self, current: usize) -> Option<char> {
        if current + 1 < self.end && self.unicode.is_kana_voicing_mark(self.run.get(current + 1)) {
            let base = char::from_u32(u32::from(self.run.get(current)))?;
            let mark = char::from_u32(u32::from(self.run.get(current + 1)))?;
            self.unicode.compose(base, mark)
        } else {
            None
        }
    }

    /// The cursor position within the full text, in code units.
    pub fn current_character(&self) -> usize {
        self.current_character
    }

    /// The accumulated advance of everything scanned so far.
    pub fn run_width_so_far(&self) -> f32 {
        self.run_width_so_far
    }

    /// The measured width of the text before the run's sub-range.
    pub fn width_to_start(&self) -> f32 {
        self.width_to_start
    }

    /// The rounding correction applied to the most recent glyph, carried
    /// into the next glyph's emitted advance on right-to-left runs.
    pub fn final_rounding_width(&self) -> f32 {
        self.final_rounding_width
    }
}

impl<S> fmt::Debug for WidthIterator<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidthIterator")
            .field("current_character", &self.current_character)
            .field("run_width_so_far", &self.run_width_so_far)
            .field("width_to_start", &self.width_to_start)
            .field("final_rounding_width", &self.final_rounding_width)
            .finish_non_exhaustive()
    }
}
