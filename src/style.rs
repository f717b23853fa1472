use std::sync::Arc;

use crate::{
    color::{self, Color},
    font::Font,
    text::{DEFAULT_CHARACTER_SIZE, Text},
};

/// Horizontal placement of text inside its component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of text inside its component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Immutable visual description of a piece of text.
///
/// Styles are shared between many components through [`SharedStyle`]; a
/// component keeps its style alive for as long as it refers to it.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Option<Font>,
    pub character_size: u32,
    pub fill_color: Color,
    pub outline_color: Color,
    pub outline_thickness: f32,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
}

pub type SharedStyle = Arc<TextStyle>;

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: None,
            character_size: DEFAULT_CHARACTER_SIZE,
            fill_color: color::WHITE,
            outline_color: color::BLACK,
            outline_thickness: 0.0,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
        }
    }
}

impl TextStyle {
    pub fn new(font: Option<Font>) -> Self {
        Self {
            font,
            ..Self::default()
        }
    }

    pub fn with_character_size(mut self, size: u32) -> Self {
        self.character_size = size;
        self
    }

    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_outline(mut self, color: Color, thickness: f32) -> Self {
        self.outline_color = color;
        self.outline_thickness = thickness;
        self
    }

    pub fn with_alignment(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    pub fn shared(self) -> SharedStyle {
        Arc::new(self)
    }

    /// Copies font, size and colors onto `text`. Alignment is left to the
    /// owner of the text, which knows the area to align within.
    pub fn apply_to(&self, text: &mut Text) {
        text.set_font(self.font.clone());
        text.set_character_size(self.character_size);
        text.set_fill_color(self.fill_color);
        text.set_outline_color(self.outline_color);
        text.set_outline_thickness(self.outline_thickness);
    }
}

/// Styles a control picks its label style from.
#[derive(Clone, Debug, PartialEq)]
pub struct TextTheme {
    pub default: SharedStyle,
    pub disabled: SharedStyle,
}

impl Default for TextTheme {
    fn default() -> Self {
        Self::uniform(TextStyle::default().shared())
    }
}

impl TextTheme {
    pub fn new(default: SharedStyle, disabled: SharedStyle) -> Self {
        Self { default, disabled }
    }

    /// Theme that uses `style` in every state.
    pub fn uniform(style: SharedStyle) -> Self {
        Self {
            default: Arc::clone(&style),
            disabled: style,
        }
    }
}
