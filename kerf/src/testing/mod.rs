// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory glyph source used by the test suite.

use core::cell::Cell;

use hashbrown::HashMap;

use crate::font::{FaceId, Glyph, GlyphData, GlyphMetrics, GlyphResolver, SpaceMetrics};

/// One mock face: explicit character-to-glyph mappings with advances.
pub(crate) struct TestFace {
    glyphs: HashMap<u32, Glyph>,
    advances: HashMap<Glyph, f32>,
    space: SpaceMetrics,
    small_caps: Option<FaceId>,
}

impl Default for TestFace {
    fn default() -> Self {
        Self {
            glyphs: HashMap::new(),
            advances: HashMap::new(),
            // A space width no real advance can equal, so the adjusted-width
            // substitution stays off unless a test opts in.
            space: SpaceMetrics {
                glyph: Glyph::MAX,
                width: -1.0,
                adjusted_width: -1.0,
                fixed_pitch: false,
            },
            small_caps: None,
        }
    }
}

impl TestFace {
    pub(crate) fn map(&mut self, c: char, glyph: Glyph, advance: f32) -> &mut Self {
        self.map_code_point(u32::from(c), glyph, advance)
    }

    pub(crate) fn map_code_point(&mut self, c: u32, glyph: Glyph, advance: f32) -> &mut Self {
        self.glyphs.insert(c, glyph);
        self.advances.insert(glyph, advance);
        self
    }

    /// Gives the notdef glyph a visible width, as a real face would.
    pub(crate) fn set_notdef_advance(&mut self, advance: f32) -> &mut Self {
        self.advances.insert(0, advance);
        self
    }

    pub(crate) fn set_space(&mut self, space: SpaceMetrics) -> &mut Self {
        self.space = space;
        self
    }

    pub(crate) fn set_small_caps_variant(&mut self, face: FaceId) -> &mut Self {
        self.small_caps = Some(face);
        self
    }
}

/// A set of mock faces implementing the glyph source traits.
///
/// Face 0 always exists and acts as the primary face. Fallback queries
/// answer with the configured fallback face when it covers the cluster, and
/// are counted so tests can assert on cache behavior.
pub(crate) struct TestFaces {
    faces: Vec<TestFace>,
    fallback: Option<FaceId>,
    substitution_queries: Cell<usize>,
}

impl TestFaces {
    pub(crate) fn new() -> Self {
        Self {
            faces: vec![TestFace::default()],
            fallback: None,
            substitution_queries: Cell::new(0),
        }
    }

    pub(crate) fn primary(&self) -> FaceId {
        FaceId(0)
    }

    pub(crate) fn add_face(&mut self) -> FaceId {
        self.faces.push(TestFace::default());
        FaceId((self.faces.len() - 1) as u32)
    }

    pub(crate) fn face_mut(&mut self, face: FaceId) -> &mut TestFace {
        &mut self.faces[face.0 as usize]
    }

    pub(crate) fn set_fallback(&mut self, face: FaceId) {
        self.fallback = Some(face);
    }

    pub(crate) fn substitution_queries(&self) -> usize {
        self.substitution_queries.get()
    }

    fn face(&self, face: FaceId) -> &TestFace {
        &self.faces[face.0 as usize]
    }
}

fn first_code_point(units: &[u16]) -> u32 {
    match units {
        [lead @ 0xD800..=0xDBFF, trail @ 0xDC00..=0xDFFF, ..] => {
            0x10000 + ((u32::from(*lead) - 0xD800) << 10) + (u32::from(*trail) - 0xDC00)
        }
        [unit, ..] => u32::from(*unit),
        [] => 0,
    }
}

impl GlyphResolver for TestFaces {
    fn glyph_data_for_char(&self, face: FaceId, c: u32) -> GlyphData {
        let glyph = self.face(face).glyphs.get(&c).copied().unwrap_or(0);
        GlyphData { glyph, face }
    }

    fn small_caps_variant(&self, face: FaceId) -> FaceId {
        self.face(face).small_caps.unwrap_or(face)
    }

    fn face_for_characters(&self, units: &[u16]) -> Option<FaceId> {
        self.substitution_queries
            .set(self.substitution_queries.get() + 1);
        let c = first_code_point(units);
        self.fallback
            .filter(|face| self.face(*face).glyphs.contains_key(&c))
    }
}

impl GlyphMetrics for TestFaces {
    fn advance_for_glyph(&self, face: FaceId, glyph: Glyph) -> f32 {
        self.face(face).advances.get(&glyph).copied().unwrap_or(0.0)
    }

    fn space_metrics(&self, face: FaceId) -> SpaceMetrics {
        self.face(face).space
    }
}
