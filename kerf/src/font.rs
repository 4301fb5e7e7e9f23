// Copyright 2026 the Kerf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A glyph index within a font face. Index 0 is the notdef glyph.
pub type Glyph = u16;

/// Opaque identifier for a font face, issued by the caller's glyph source.
///
/// A face stands for one concrete sized font: the primary face, an entry in
/// its fallback chain, or a lazily built small-caps sibling. Kerf only ever
/// compares and forwards these ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceId(pub u32);

/// The result of resolving one cluster: a glyph and the face that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphData {
    /// The resolved glyph index; 0 when the face has no mapping.
    pub glyph: Glyph,
    /// The face the glyph belongs to, which may differ from the face the
    /// lookup started on.
    pub face: FaceId,
}

/// Precomputed space-glyph fields of a face, used by word rounding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaceMetrics {
    /// The glyph index of the space character.
    pub glyph: Glyph,
    /// The natural advance of the space glyph.
    pub width: f32,
    /// The rounded advance substituted for space-width glyphs under word
    /// rounding.
    pub adjusted_width: f32,
    /// Whether every glyph in the face shares one advance.
    pub fixed_pitch: bool,
}

/// Glyph lookup against a face and its relatives.
///
/// Implementations own the actual font data and fallback policy; kerf drives
/// them one cluster at a time. Shared lookup tables behind an implementation
/// must be protected by the implementation when measuring from multiple
/// threads.
pub trait GlyphResolver {
    /// Resolves `c` against `face`, returning the glyph and its owning face.
    ///
    /// A glyph of 0 signals that no face in the implementation's own chain
    /// covers `c`.
    fn glyph_data_for_char(&self, face: FaceId, c: u32) -> GlyphData;

    /// The small-caps sibling of `face`: a reduced-size variant used to
    /// render lowercase letters as small uppercase glyphs.
    ///
    /// Implementations may build the variant lazily. Returning `face`
    /// itself disables the substitution.
    fn small_caps_variant(&self, face: FaceId) -> FaceId;

    /// Searches the fallback chain for a face covering the given cluster of
    /// code units, or `None` if nothing covers it.
    fn face_for_characters(&self, units: &[u16]) -> Option<FaceId>;
}

/// Advance metrics for resolved glyphs.
pub trait GlyphMetrics {
    /// The natural advance of `glyph` in `face`.
    fn advance_for_glyph(&self, face: FaceId, glyph: Glyph) -> f32;

    /// The cached space-glyph fields of `face`.
    fn space_metrics(&self, face: FaceId) -> SpaceMetrics;
}

/// A font as seen by the measurement core: the primary face plus the
/// spacing and variant settings that affect advances.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    /// The first face consulted for every cluster.
    pub primary: FaceId,
    /// Extra advance added to every nonzero-width glyph.
    pub letter_spacing: f32,
    /// Extra advance added to the first space of each word boundary.
    pub word_spacing: f32,
    /// Render lowercase letters as uppercase glyphs from the small-caps
    /// variant face.
    pub small_caps: bool,
}

impl Font {
    /// A font over `primary` with no extra spacing and small caps disabled.
    pub fn new(primary: FaceId) -> Self {
        Self {
            primary,
            letter_spacing: 0.0,
            word_spacing: 0.0,
            small_caps: false,
        }
    }
}
