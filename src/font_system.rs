use std::{path::Path, sync::Arc};

use parking_lot::Mutex;

use crate::{
    Error,
    font::Font,
    font_storage::FontStorage,
    glyph::{GlyphBitmap, GlyphCache, GlyphId},
};

/// Tuning knobs for a [`FontSystem`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSystemConfig {
    /// Approximate memory budget of rasterized glyphs.
    pub glyph_cache_bytes: usize,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            glyph_cache_bytes: 4 * 1024 * 1024,
        }
    }
}

/// Shared font context: the font database and the rasterized glyph cache.
///
/// Styles hold [`Font`] handles that point back here, so a `FontSystem` is
/// always used behind an `Arc`. Both halves sit behind a `Mutex` so handles
/// can be cloned freely into styles and themes.
pub struct FontSystem {
    pub font_storage: Mutex<FontStorage>,
    pub glyph_cache: Mutex<GlyphCache>,
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new(FontSystemConfig::default())
    }
}

impl FontSystem {
    /// Creates a font system without any fonts loaded.
    pub fn new(config: FontSystemConfig) -> Self {
        Self {
            font_storage: Mutex::new(FontStorage::new()),
            glyph_cache: Mutex::new(GlyphCache::new(config.glyph_cache_bytes)),
        }
    }

    /// Creates a font system ready to be shared between widgets.
    pub fn shared(config: FontSystemConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }
}

/// font loading
impl FontSystem {
    /// Loads the fonts installed on this machine.
    pub fn load_system_fonts(&self) {
        self.font_storage.lock().load_system_fonts();
    }

    /// Loads every face in an in-memory font file.
    pub fn load_font_binary(&self, data: impl Into<Vec<u8>>) {
        self.font_storage.lock().load_font_binary(data);
    }

    /// Loads every face in the font file at `path`.
    pub fn load_font_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.font_storage.lock().load_font_file(path)
    }

    /// Loads every font file found under `dir`.
    pub fn load_fonts_dir(&self, dir: impl AsRef<Path>) {
        self.font_storage.lock().load_fonts_dir(dir);
    }

    /// `true` when no font is loaded.
    pub fn is_empty(&self) -> bool {
        self.font_storage.lock().is_empty()
    }
}

/// font lookup
impl FontSystem {
    /// Resolves `query` to a font handle.
    pub fn font(self: &Arc<Self>, query: &fontdb::Query) -> Option<Font> {
        let (id, face) = self.font_storage.lock().query(query)?;
        Some(Font::new(id, face, Arc::clone(self)))
    }

    /// Font handle for the face `id`, if it parses.
    pub fn font_by_id(self: &Arc<Self>, id: fontdb::ID) -> Option<Font> {
        let face = self.font_storage.lock().face(id)?;
        Some(Font::new(id, face, Arc::clone(self)))
    }

    /// A regular sans-serif face, or failing that the first face that parses.
    pub fn default_font(self: &Arc<Self>) -> Option<Font> {
        const FAMILIES: &[fontdb::Family<'_>] = &[fontdb::Family::SansSerif];
        let query = fontdb::Query {
            families: FAMILIES,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        if let Some(font) = self.font(&query) {
            return Some(font);
        }

        let ids = self.font_storage.lock().face_ids();
        ids.into_iter().find_map(|id| self.font_by_id(id))
    }
}

/// glyph rasterization
impl FontSystem {
    /// Plain glyph bitmap from the cache.
    pub(crate) fn glyph(&self, glyph_id: GlyphId, face: &fontdue::Font) -> Arc<GlyphBitmap> {
        self.glyph_cache.lock().get_or_rasterize(glyph_id, face)
    }

    /// Outline glyph bitmap from the cache.
    pub(crate) fn outline_glyph(
        &self,
        glyph_id: GlyphId,
        radius: usize,
        face: &fontdue::Font,
    ) -> Arc<GlyphBitmap> {
        self.glyph_cache.lock().get_or_dilate(glyph_id, radius, face)
    }

    /// Drops every cached glyph.
    pub fn glyph_cache_clear(&self) {
        self.glyph_cache.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_has_no_default_font() {
        let system = FontSystem::shared(FontSystemConfig::default());
        assert!(system.is_empty());
        assert!(system.default_font().is_none());
    }

    #[test]
    fn missing_file_reports_error() {
        let system = FontSystem::default();
        assert!(system.load_font_file("/no/such/font.otf").is_err());
    }
}
