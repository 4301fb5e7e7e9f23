// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::font::{FaceId, Glyph};

/// A glyph with its owning face and emitted advance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedGlyph {
    /// The glyph index.
    pub glyph: Glyph,
    /// The face the glyph belongs to.
    pub face: FaceId,
    /// The advance emitted for this glyph, in the run's direction.
    pub advance: f32,
}

/// An append-only sequence of glyphs in the order they should be drawn.
///
/// Built incrementally by [`WidthIterator::advance`](crate::WidthIterator::advance)
/// when the caller supplies one. Kerf appends in logical order; consumers of
/// right-to-left runs reverse the buffer with [`GlyphBuffer::swap`] before
/// drawing.
#[derive(Clone, Debug, Default)]
pub struct GlyphBuffer {
    glyphs: Vec<PlacedGlyph>,
}

impl GlyphBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a glyph.
    pub fn push(&mut self, glyph: Glyph, face: FaceId, advance: f32) {
        self.glyphs.push(PlacedGlyph {
            glyph,
            face,
            advance,
        });
    }

    /// Removes all glyphs.
    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    /// Number of glyphs in the buffer.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the buffer holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// All glyphs in draw order.
    pub fn glyphs(&self) -> &[PlacedGlyph] {
        &self.glyphs
    }

    /// The emitted advances in draw order.
    pub fn advances(&self) -> impl Iterator<Item = f32> + '_ {
        self.glyphs.iter().map(|g| g.advance)
    }

    /// Sum of all emitted advances.
    pub fn total_advance(&self) -> f32 {
        self.advances().sum()
    }

    /// Swaps two glyphs, for draw-order reversal of right-to-left runs.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.glyphs.swap(a, b);
    }
}
