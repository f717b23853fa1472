//! Building blocks widgets are composed from.

mod localizable_text_component;
mod sprite_component;
mod text_component;

pub use localizable_text_component::LocalizableTextComponent;
pub use sprite_component::SpriteComponent;
pub use text_component::TextComponent;
