/// Glyph placement for single-font strings.
pub mod layout;

pub use layout::{PlacedGlyph, TextLayout};

use crate::{
    color::{self, Color},
    font::Font,
    geometry::{Point, Rect, Transform, Transformable},
    glyph::{GlyphBitmap, MAX_OUTLINE_RADIUS},
    render::{Drawable, RenderStates, RenderTarget},
};

/// Default character size in pixels.
pub const DEFAULT_CHARACTER_SIZE: u32 = 30;

/// Thickest outline a [`Text`] accepts, in pixels.
pub const MAX_OUTLINE_THICKNESS: f32 = MAX_OUTLINE_RADIUS as f32;

/// Drawable string in one font, size and color, with an optional outline.
///
/// The layout is recomputed whenever something that affects glyph placement
/// changes, so bounds and character positions are always current.
#[derive(Clone, Debug)]
pub struct Text {
    string: String,
    font: Option<Font>,
    character_size: u32,
    line_spacing: f32,
    fill_color: Color,
    outline_color: Color,
    outline_thickness: f32,
    transformable: Transformable,
    layout: TextLayout,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            string: String::new(),
            font: None,
            character_size: DEFAULT_CHARACTER_SIZE,
            line_spacing: 1.0,
            fill_color: color::WHITE,
            outline_color: color::BLACK,
            outline_thickness: 0.0,
            transformable: Transformable::new(),
            layout: TextLayout::empty(""),
        }
    }
}

impl Text {
    pub fn new(string: impl Into<String>, font: Option<Font>, character_size: u32) -> Self {
        let mut text = Self {
            string: string.into(),
            font,
            character_size,
            ..Self::default()
        };
        text.update_layout();
        text
    }

    pub fn string(&self) -> &str {
        &self.string
    }

    pub fn set_string(&mut self, string: impl Into<String>) {
        let string = string.into();
        if self.string != string {
            self.string = string;
            self.update_layout();
        }
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Option<Font>) {
        if self.font != font {
            self.font = font;
            self.update_layout();
        }
    }

    pub fn character_size(&self) -> u32 {
        self.character_size
    }

    pub fn set_character_size(&mut self, size: u32) {
        if self.character_size != size {
            self.character_size = size;
            self.update_layout();
        }
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Multiplier applied to the font's line height.
    pub fn set_line_spacing(&mut self, factor: f32) {
        if self.line_spacing != factor {
            self.line_spacing = factor;
            self.update_layout();
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn outline_color(&self) -> Color {
        self.outline_color
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.outline_color = color;
    }

    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    /// Sets the outline thickness, clamped to `0..=MAX_OUTLINE_THICKNESS`.
    /// Non-finite values are ignored.
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        if !thickness.is_finite() {
            log::warn!("Ignoring non-finite outline thickness {thickness}.");
            return;
        }
        self.outline_thickness = thickness.clamp(0.0, MAX_OUTLINE_THICKNESS);
    }

    pub fn position(&self) -> Point {
        self.transformable.position()
    }

    pub fn set_position(&mut self, position: Point) {
        self.transformable.set_position(position);
    }

    pub fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    pub fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }

    pub fn layout(&self) -> &TextLayout {
        &self.layout
    }

    /// Ink bounds ignoring the transform, grown by the outline.
    pub fn local_bounds(&self) -> Rect {
        let bounds = self.layout.bounds;
        if bounds.is_empty() || self.outline_thickness <= 0.0 {
            return bounds;
        }
        bounds.inflate(self.outline_thickness, self.outline_thickness)
    }

    pub fn global_bounds(&self) -> Rect {
        self.transformable
            .transform()
            .outer_transformed_rect(&self.local_bounds())
    }

    /// Position of the `index`-th character in the parent's coordinates.
    ///
    /// Out of range indices give the position of the end of the string.
    pub fn find_character_pos(&self, index: usize) -> Point {
        self.transformable
            .transform()
            .transform_point(self.layout.caret(index))
    }

    fn update_layout(&mut self) {
        self.layout = match &self.font {
            Some(font) => TextLayout::new(
                font,
                &self.string,
                self.character_size as f32,
                self.line_spacing,
            ),
            None => TextLayout::empty(&self.string),
        };
    }

    fn draw_glyphs(
        &self,
        font: &Font,
        target: &mut dyn RenderTarget,
        transform: &Transform,
        outline_radius: Option<usize>,
    ) {
        let size = self.character_size as f32;
        for placed in &self.layout.glyphs {
            let x = placed.x.round();
            let y = placed.y.round();
            let (glyph, tint, at) = match outline_radius {
                Some(radius) => {
                    let shift = radius as f32;
                    (
                        font.outline_glyph(placed.glyph_index, size, radius),
                        self.outline_color,
                        Transform::translation(x - shift, y - shift).then(transform),
                    )
                }
                None => (
                    font.glyph(placed.glyph_index, size),
                    self.fill_color,
                    Transform::translation(x, y).then(transform),
                ),
            };
            if !glyph.is_empty() {
                draw_bitmap(target, &glyph, tint, &at);
            }
        }
    }
}

fn draw_bitmap(
    target: &mut dyn RenderTarget,
    bitmap: &GlyphBitmap,
    tint: Color,
    transform: &Transform,
) {
    target.draw_texture(&bitmap.texture, bitmap.texture.bounds(), tint, transform);
}

impl Drawable for Text {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        let Some(font) = &self.font else {
            return;
        };
        let states = states.combined(&self.transformable.transform());

        if self.outline_thickness > 0.0 && self.outline_color.alpha > 0 {
            let radius = (self.outline_thickness.ceil() as usize).min(MAX_OUTLINE_RADIUS);
            self.draw_glyphs(font, target, &states.transform, Some(radius));
        }
        self.draw_glyphs(font, target, &states.transform, None);
    }
}
