//! # editor-widgets
//!
//! Text, sprite and button widgets for the level editor.
//!
//! ## Overview
//!
//! Every widget implements [`Drawable`] and renders into any [`RenderTarget`].
//! Text is laid out with `fontdue` and pre-composited onto an off-screen
//! [`Canvas`], so drawing a label each frame is a single textured blit.
//!
//! Styles ([`TextStyle`]) and localization tables ([`Strings`]) are shared
//! through `Arc`s: a widget keeps whatever it refers to alive.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use editor_widgets::{
//!     Button, Canvas, Drawable, FontSystem, FontSystemConfig, PixelSize, Point,
//!     RenderStates, Size, Strings, TextStyle, TextTheme, Texture, color, int_rect,
//! };
//!
//! // 1. Fonts and shared configuration
//! let fonts = FontSystem::shared(FontSystemConfig::default());
//! fonts.load_system_fonts();
//! let style = TextStyle::new(fonts.default_font()).with_character_size(14).shared();
//! let strings: Strings = [("ok", "OK")].into_iter().collect();
//!
//! // 2. A button cut from a sprite sheet
//! let sheet = Texture::solid(PixelSize::new(64, 16), color::WHITE);
//! let mut button = Button::new(
//!     Point::new(8.0, 8.0),
//!     Size::new(32.0, 16.0),
//!     &sheet,
//!     int_rect(0, 0, 32, 16),
//!     int_rect(32, 0, 32, 16),
//!     TextTheme::uniform(style),
//!     Some(Arc::new(strings)),
//!     "ok",
//! )
//! .with_on_released(|_| println!("released"));
//!
//! // 3. Draw
//! let mut canvas = Canvas::new(PixelSize::new(64, 32));
//! button.draw(&mut canvas, &RenderStates::default());
//! ```

pub mod canvas;
pub mod color;
pub mod components;
pub mod controls;
pub mod error;
pub mod font;
pub mod font_storage;
pub mod font_system;
pub mod geometry;
pub mod glyph;
pub mod render;
pub mod sprite;
pub mod strings;
pub mod style;
pub mod text;
pub mod texture;

// common re-exports
pub use canvas::Canvas;
pub use color::Color;
pub use components::{LocalizableTextComponent, SpriteComponent, TextComponent};
pub use controls::{Button, ControlState, PointerButton, TextBasedControl};
pub use error::Error;
pub use font::Font;
pub use font_storage::FontStorage;
pub use font_system::{FontSystem, FontSystemConfig};
pub use geometry::{
    IntRect, PixelSize, Point, Rect, Size, Transform, Transformable, Vector, int_rect,
};
pub use render::{Drawable, RenderStates, RenderTarget};
pub use sprite::Sprite;
pub use strings::Strings;
pub use style::{HorizontalAlign, SharedStyle, TextStyle, TextTheme, VerticalAlign};
pub use text::Text;
pub use texture::Texture;

// re-export dependencies
pub use euclid;
pub use fontdb;
pub use fontdue;
pub use palette;
