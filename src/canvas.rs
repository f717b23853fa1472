use crate::{
    color::{self, Color},
    geometry::{IntRect, PixelSize, Point, Rect, Transform},
    render::RenderTarget,
    texture::Texture,
};

/// Off-screen RGBA surface that components draw into before compositing.
///
/// Pixels are arranged in row-major order with the origin at the top-left.
/// The canvas is only mutated through [`RenderTarget`] and [`Canvas::clear`];
/// [`Canvas::display`] snapshots the current contents into a [`Texture`].
#[derive(Clone, Debug)]
pub struct Canvas {
    size: PixelSize,
    pixels: Vec<Color>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(PixelSize::zero())
    }
}

impl Canvas {
    pub fn new(size: PixelSize) -> Self {
        let len = size.width as usize * size.height as usize;
        Self {
            size,
            pixels: vec![color::TRANSPARENT; len],
        }
    }

    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// Finishes the current frame and returns its contents as a texture.
    pub fn display(&self) -> Texture {
        Texture::from_pixels(self.size, self.pixels.clone())
    }

    /// Row-major RGBA8 copy of the pixels, e.g. for saving to an image file.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue, c.alpha])
            .collect()
    }

    fn blend(&mut self, x: usize, y: usize, src: Color) {
        let idx = y * self.size.width as usize + x;
        if let Some(dst) = self.pixels.get_mut(idx) {
            *dst = color::blend_over(*dst, src);
        }
    }
}

impl RenderTarget for Canvas {
    fn size(&self) -> PixelSize {
        Canvas::size(self)
    }

    fn draw_texture(
        &mut self,
        texture: &Texture,
        source: IntRect,
        tint: Color,
        transform: &Transform,
    ) {
        if source.is_empty() || texture.is_empty() || self.size.is_empty() {
            return;
        }
        let Some(inverse) = transform.inverse() else {
            return;
        };

        let quad = Rect::new(Point::origin(), source.size.to_f32());
        let dest = transform.outer_transformed_rect(&quad);

        let x0 = dest.min_x().floor().max(0.0) as usize;
        let y0 = dest.min_y().floor().max(0.0) as usize;
        let x1 = (dest.max_x().ceil().max(0.0) as usize).min(self.size.width as usize);
        let y1 = (dest.max_y().ceil().max(0.0) as usize).min(self.size.height as usize);

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at pixel centers so adjacent quads never overlap.
                let local = inverse.transform_point(Point::new(x as f32 + 0.5, y as f32 + 0.5));
                if !quad.contains(local) {
                    continue;
                }

                let tx = source.min_x() + local.x.floor() as i32;
                let ty = source.min_y() + local.y.floor() as i32;
                if tx < 0 || ty < 0 {
                    continue;
                }
                let Some(texel) = texture.pixel(tx as u32, ty as u32) else {
                    continue;
                };

                self.blend(x, y, color::modulate(texel, tint));
            }
        }
    }
}
