// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;

use crate::font::{FaceId, GlyphData};

/// Caller-owned cache of character-to-glyph resolutions.
///
/// Keys are `(face, code point)` pairs, where the face is the one a lookup
/// *starts* on; the cached value may point at a different owning face when
/// fallback substitution resolved the character. Each thread measuring text
/// should own its own cache (or guard a shared one externally); the core
/// takes no locks.
#[derive(Clone, Debug, Default)]
pub struct GlyphCache {
    map: HashMap<(FaceId, u32), GlyphData>,
}

impl GlyphCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached resolution of `c` starting from `face`, if any.
    pub fn get(&self, face: FaceId, c: u32) -> Option<GlyphData> {
        self.map.get(&(face, c)).copied()
    }

    /// Records the resolution of `c` starting from `face`.
    pub fn insert(&mut self, face: FaceId, c: u32, data: GlyphData) {
        self.map.insert((face, c), data);
    }

    /// Drops all cached resolutions.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
