use std::{collections::HashMap, sync::Arc};

use crate::{color, geometry::PixelSize, texture::Texture};

const SIZE_QUANTIZE: f32 = 64.0;

/// Largest outline radius, in pixels, that [`GlyphBitmap::dilated`] applies.
pub const MAX_OUTLINE_RADIUS: usize = 32;

/// Identifies one rasterization of a glyph: face, glyph index and pixel size.
///
/// Face ids are only stable for the lifetime of the database that issued
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlyphId {
    font_id: fontdb::ID,
    glyph_index: u16,
    font_size: u32, // font size * SIZE_QUANTIZE
}

impl GlyphId {
    pub fn new(font_id: fontdb::ID, glyph_index: u16, font_size: f32) -> Self {
        Self {
            font_id,
            glyph_index,
            font_size: (font_size.max(0.0) * SIZE_QUANTIZE).round() as u32,
        }
    }

    pub fn font_id(&self) -> fontdb::ID {
        self.font_id
    }

    pub fn glyph_index(&self) -> u16 {
        self.glyph_index
    }

    pub fn font_size(&self) -> f32 {
        self.font_size as f32 / SIZE_QUANTIZE
    }
}

/// Rasterized glyph: coverage mask plus a white texture carrying it as alpha.
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
    pub texture: Texture,
}

impl GlyphBitmap {
    pub fn new(width: usize, height: usize, coverage: Vec<u8>) -> Self {
        let texture = Texture::from_coverage(
            PixelSize::new(width as u32, height as u32),
            &coverage,
            color::WHITE,
        );
        Self {
            width,
            height,
            coverage,
            texture,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn weight(&self) -> usize {
        // coverage plus the RGBA texture built from it
        self.coverage.len() * 5
    }

    /// Grows the coverage by `radius` pixels in every direction.
    ///
    /// The result is `2 * radius` wider and taller; each pixel takes the
    /// strongest coverage found within a disc of `radius` around it.
    /// `radius` is clamped to [`MAX_OUTLINE_RADIUS`].
    pub fn dilated(&self, radius: usize) -> GlyphBitmap {
        let radius = radius.min(MAX_OUTLINE_RADIUS);
        let grown = |extent: usize| radius.checked_mul(2).and_then(|d| extent.checked_add(d));
        let Some((width, height, area)) = grown(self.width)
            .zip(grown(self.height))
            .and_then(|(w, h)| Some((w, h, w.checked_mul(h)?)))
        else {
            log::warn!("Glyph of {}x{} is too large to outline.", self.width, self.height);
            return GlyphBitmap::new(self.width, self.height, self.coverage.clone());
        };
        if radius == 0 || self.is_empty() {
            return GlyphBitmap::new(self.width, self.height, self.coverage.clone());
        }

        let r = radius as isize;
        let mut out = vec![0u8; area];

        for y in 0..height as isize {
            for x in 0..width as isize {
                let mut strongest = 0u8;
                for dy in -r..=r {
                    for dx in -r..=r {
                        if dx * dx + dy * dy > r * r {
                            continue;
                        }
                        let sx = x - r + dx;
                        let sy = y - r + dy;
                        if sx < 0
                            || sy < 0
                            || sx as usize >= self.width
                            || sy as usize >= self.height
                        {
                            continue;
                        }
                        strongest =
                            strongest.max(self.coverage[sy as usize * self.width + sx as usize]);
                    }
                }
                out[y as usize * width + x as usize] = strongest;
            }
        }

        GlyphBitmap::new(width, height, out)
    }
}

/// Rasterized glyphs kept between frames, bounded by an approximate byte budget.
///
/// When inserting would exceed the budget the whole cache is dropped; text
/// components re-render rarely enough that a full flush is cheap.
/// Plain glyphs are stored with an outline radius of 0.
pub struct GlyphCache {
    glyphs: HashMap<(GlyphId, usize), Arc<GlyphBitmap>, fxhash::FxBuildHasher>,
    used_bytes: usize,
    capacity_bytes: usize,
}

impl GlyphCache {
    pub fn new(capacity_bytes: usize) -> Self {
        Self {
            glyphs: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
            used_bytes: 0,
            capacity_bytes: capacity_bytes.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.used_bytes = 0;
    }

    pub fn get(&self, glyph_id: &GlyphId) -> Option<Arc<GlyphBitmap>> {
        self.get_outline(glyph_id, 0)
    }

    /// Cached dilation of `glyph_id` by `radius`, if present.
    pub fn get_outline(&self, glyph_id: &GlyphId, radius: usize) -> Option<Arc<GlyphBitmap>> {
        self.glyphs.get(&(*glyph_id, radius)).cloned()
    }

    /// Cached bitmap for `glyph_id`, rasterizing it with `face` on a miss.
    pub fn get_or_rasterize(
        &mut self,
        glyph_id: GlyphId,
        face: &fontdue::Font,
    ) -> Arc<GlyphBitmap> {
        if let Some(glyph) = self.get(&glyph_id) {
            return glyph;
        }

        let (metrics, coverage) =
            face.rasterize_indexed(glyph_id.glyph_index(), glyph_id.font_size());
        self.insert(
            (glyph_id, 0),
            GlyphBitmap::new(metrics.width, metrics.height, coverage),
        )
    }

    /// Cached outline of `glyph_id` grown by `radius`, dilating the plain
    /// glyph on a miss.
    pub fn get_or_dilate(
        &mut self,
        glyph_id: GlyphId,
        radius: usize,
        face: &fontdue::Font,
    ) -> Arc<GlyphBitmap> {
        let radius = radius.min(MAX_OUTLINE_RADIUS);
        if let Some(outline) = self.get_outline(&glyph_id, radius) {
            return outline;
        }

        let glyph = self.get_or_rasterize(glyph_id, face);
        if radius == 0 {
            return glyph;
        }
        self.insert((glyph_id, radius), glyph.dilated(radius))
    }

    fn insert(&mut self, key: (GlyphId, usize), glyph: GlyphBitmap) -> Arc<GlyphBitmap> {
        let weight = glyph.weight();
        if self.used_bytes + weight > self.capacity_bytes {
            log::debug!(
                "Glyph cache full ({} glyphs, {} bytes), flushing.",
                self.glyphs.len(),
                self.used_bytes
            );
            self.clear();
        }

        let glyph = Arc::new(glyph);
        self.used_bytes += weight;
        if let Some(previous) = self.glyphs.insert(key, Arc::clone(&glyph)) {
            self.used_bytes -= previous.weight();
        }
        glyph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(index: u16) -> GlyphId {
        GlyphId::new(fontdb::ID::dummy(), index, 12.0)
    }

    #[test]
    fn glyph_id_quantizes_size() {
        let a = GlyphId::new(fontdb::ID::dummy(), 3, 12.0);
        let b = GlyphId::new(fontdb::ID::dummy(), 3, 12.001);
        assert_eq!(a, b);
        assert_eq!(a.font_size(), 12.0);
        assert_ne!(a, GlyphId::new(fontdb::ID::dummy(), 3, 13.0));
    }

    #[test]
    fn insert_then_get() {
        let mut cache = GlyphCache::new(1024);
        cache.insert((key(1), 0), GlyphBitmap::new(2, 2, vec![255; 4]));

        let glyph = cache.get(&key(1));
        assert!(glyph.is_some_and(|g| g.width == 2 && g.coverage == vec![255; 4]));
        assert!(cache.get(&key(2)).is_none());
        assert_eq!(cache.used_bytes(), 20);
    }

    #[test]
    fn reinserting_does_not_leak_budget() {
        let mut cache = GlyphCache::new(1024);
        cache.insert((key(1), 0), GlyphBitmap::new(2, 2, vec![1; 4]));
        cache.insert((key(1), 0), GlyphBitmap::new(2, 2, vec![2; 4]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.used_bytes(), 20);
    }

    #[test]
    fn overflow_flushes_everything() {
        // each 2x2 glyph weighs 20 bytes
        let mut cache = GlyphCache::new(50);
        cache.insert((key(1), 0), GlyphBitmap::new(2, 2, vec![1; 4]));
        cache.insert((key(2), 0), GlyphBitmap::new(2, 2, vec![1; 4]));
        assert_eq!(cache.len(), 2);

        cache.insert((key(3), 0), GlyphBitmap::new(2, 2, vec![1; 4]));
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key(3)).is_some());
        assert_eq!(cache.used_bytes(), 20);
    }

    #[test]
    fn dilation_grows_by_radius() {
        let glyph = GlyphBitmap::new(1, 1, vec![200]);
        let outline = glyph.dilated(1);

        assert_eq!((outline.width, outline.height), (3, 3));
        // the disc of radius 1 excludes the corners
        assert_eq!(outline.coverage, vec![0, 200, 0, 200, 200, 200, 0, 200, 0]);
    }

    #[test]
    fn dilation_radius_is_clamped() {
        let glyph = GlyphBitmap::new(1, 1, vec![255]);
        let outline = glyph.dilated(usize::MAX);

        let side = 1 + MAX_OUTLINE_RADIUS * 2;
        assert_eq!((outline.width, outline.height), (side, side));
        assert_eq!(outline.coverage[MAX_OUTLINE_RADIUS * side + MAX_OUTLINE_RADIUS], 255);
        assert_eq!(outline.coverage[0], 0);
    }

    #[test]
    fn outlines_are_cached_apart_from_plain_glyphs() {
        let mut cache = GlyphCache::new(4096);
        cache.insert((key(1), 0), GlyphBitmap::new(1, 1, vec![255]));
        cache.insert((key(1), 2), GlyphBitmap::new(1, 1, vec![255]).dilated(2));

        assert!(cache.get(&key(1)).is_some_and(|g| g.width == 1));
        assert!(cache.get_outline(&key(1), 2).is_some_and(|g| g.width == 5));
        assert!(cache.get_outline(&key(1), 1).is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn glyph_texture_carries_coverage_as_alpha() {
        let glyph = GlyphBitmap::new(2, 1, vec![0, 128]);
        assert_eq!(glyph.texture.pixel(1, 0).map(|c| c.alpha), Some(128));
        assert!(!glyph.is_empty());
        assert!(GlyphBitmap::new(0, 3, Vec::new()).is_empty());
    }
}
