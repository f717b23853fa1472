use std::{fmt, sync::Arc};

use crate::{
    font_system::FontSystem,
    glyph::{GlyphBitmap, GlyphId},
};

/// Handle to one parsed font face.
///
/// Clones share the parsed face and the [`FontSystem`] whose glyph cache
/// rasterizes it.
#[derive(Clone)]
pub struct Font {
    id: fontdb::ID,
    face: Arc<fontdue::Font>,
    system: Arc<FontSystem>,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font").field("id", &self.id).finish()
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.system, &other.system)
    }
}

impl Font {
    pub(crate) fn new(id: fontdb::ID, face: Arc<fontdue::Font>, system: Arc<FontSystem>) -> Self {
        Self { id, face, system }
    }

    pub fn id(&self) -> fontdb::ID {
        self.id
    }

    pub fn face(&self) -> &fontdue::Font {
        &self.face
    }

    pub fn line_metrics(&self, size: f32) -> Option<fontdue::LineMetrics> {
        self.face.horizontal_line_metrics(size)
    }

    pub fn glyph_index(&self, ch: char) -> u16 {
        self.face.lookup_glyph_index(ch)
    }

    pub fn glyph_metrics(&self, glyph_index: u16, size: f32) -> fontdue::Metrics {
        self.face.metrics_indexed(glyph_index, size)
    }

    pub fn kerning(&self, left: u16, right: u16, size: f32) -> f32 {
        self.face
            .horizontal_kern_indexed(left, right, size)
            .unwrap_or(0.0)
    }

    /// Rasterized glyph, served from the system's glyph cache.
    pub fn glyph(&self, glyph_index: u16, size: f32) -> Arc<GlyphBitmap> {
        self.system
            .glyph(GlyphId::new(self.id, glyph_index, size), &self.face)
    }

    /// Rasterized glyph grown by `radius` pixels, served from the glyph cache.
    pub fn outline_glyph(&self, glyph_index: u16, size: f32, radius: usize) -> Arc<GlyphBitmap> {
        self.system
            .outline_glyph(GlyphId::new(self.id, glyph_index, size), radius, &self.face)
    }
}
