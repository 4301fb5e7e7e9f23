// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An immutable view over a sequence of UTF-16 code units with a measured
/// sub-range.
///
/// The run borrows the caller's code units and never copies them. The
/// sub-range `[from, to)` selects the portion being measured; the code units
/// before `from` still participate in rounding decisions so that a sub-range
/// measurement agrees with a full-run scan (see
/// [`WidthIterator`](crate::WidthIterator)).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextRun<'a> {
    units: &'a [u16],
    from: usize,
    to: usize,
}

impl<'a> TextRun<'a> {
    /// Creates a run over all of `units`.
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            from: 0,
            to: units.len(),
        }
    }

    /// Creates a run measuring only `[from, to)` of `units`.
    ///
    /// # Panics
    ///
    /// Panics unless `from <= to <= units.len()`.
    pub fn with_range(units: &'a [u16], from: usize, to: usize) -> Self {
        assert!(
            from <= to && to <= units.len(),
            "text run range out of bounds"
        );
        Self { units, from, to }
    }

    /// The full length of the underlying text in code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Start of the measured sub-range.
    pub fn from(&self) -> usize {
        self.from
    }

    /// End of the measured sub-range (exclusive).
    pub fn to(&self) -> usize {
        self.to
    }

    /// The code unit at `index` within the full text.
    pub fn get(&self, index: usize) -> u16 {
        self.units[index]
    }

    /// The full underlying code units, ignoring the sub-range.
    pub fn units(&self) -> &'a [u16] {
        self.units
    }

    /// The same text with the sub-range widened to the whole run.
    ///
    /// Prefix-width computation and selection rects scan from the start of
    /// the text regardless of the requested sub-range.
    pub fn to_complete(&self) -> Self {
        Self {
            units: self.units,
            from: 0,
            to: self.units.len(),
        }
    }
}
