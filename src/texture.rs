use std::{fmt, sync::Arc};

use crate::{
    Error,
    color::{self, Color},
    geometry::{IntRect, PixelSize, int_rect},
};

struct TextureData {
    size: PixelSize,
    pixels: Vec<Color>,
}

/// Identity of a texture's pixel storage, see [`Texture::id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(usize);

/// Immutable RGBA image shared by sprites.
///
/// Cloning is cheap: every clone refers to the same pixels, which is what lets
/// many sprites cut sub-rectangles out of one sprite sheet.
#[derive(Clone)]
pub struct Texture {
    data: Arc<TextureData>,
}

impl Default for Texture {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.data.size.width)
            .field("height", &self.data.size.height)
            .finish()
    }
}

impl Texture {
    /// A 0x0 texture.
    pub fn empty() -> Self {
        Self::from_pixels(PixelSize::zero(), Vec::new())
    }

    /// Creates a texture from tightly packed RGBA8 bytes in row-major order.
    pub fn from_rgba(size: PixelSize, rgba: &[u8]) -> Result<Self, Error> {
        let expected = size.width as usize * size.height as usize * 4;
        if rgba.len() != expected {
            return Err(Error::PixelBufferSize {
                expected,
                actual: rgba.len(),
            });
        }

        let pixels = rgba
            .chunks_exact(4)
            .map(|px| Color::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self::from_pixels(size, pixels))
    }

    /// A texture filled with a single color.
    pub fn solid(size: PixelSize, color: Color) -> Self {
        let len = size.width as usize * size.height as usize;
        Self::from_pixels(size, vec![color; len])
    }

    /// Turns an 8-bit coverage mask into a texture of `color`, with the
    /// coverage scaling the alpha channel.
    pub fn from_coverage(size: PixelSize, coverage: &[u8], color: Color) -> Self {
        let len = size.width as usize * size.height as usize;
        let pixels = coverage
            .iter()
            .copied()
            .chain(std::iter::repeat(0))
            .take(len)
            .map(|c| color::modulate(color, Color::new(255, 255, 255, c)))
            .collect();
        Self::from_pixels(size, pixels)
    }

    pub(crate) fn from_pixels(size: PixelSize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), size.width as usize * size.height as usize);
        Self {
            data: Arc::new(TextureData { size, pixels }),
        }
    }

    pub fn size(&self) -> PixelSize {
        self.data.size
    }

    pub fn is_empty(&self) -> bool {
        self.data.size.is_empty()
    }

    /// Rectangle covering the whole texture.
    pub fn bounds(&self) -> IntRect {
        let size = self.data.size;
        int_rect(0, 0, size.width as i32, size.height as i32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let size = self.data.size;
        if x >= size.width || y >= size.height {
            return None;
        }
        self.data
            .pixels
            .get(y as usize * size.width as usize + x as usize)
            .copied()
    }

    /// Identity of the shared pixels; equal for clones of one texture.
    ///
    /// Only unique while some handle to the pixels is alive.
    pub fn id(&self) -> TextureId {
        TextureId(Arc::as_ptr(&self.data) as usize)
    }

    /// Whether both handles refer to the same pixels.
    pub fn ptr_eq(a: &Texture, b: &Texture) -> bool {
        Arc::ptr_eq(&a.data, &b.data)
    }

    /// Row-major RGBA8 copy of the pixels.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.data
            .pixels
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue, c.alpha])
            .collect()
    }
}
