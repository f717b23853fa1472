use std::{ops::Deref, sync::Arc};

use crate::{
    components::TextComponent,
    geometry::{PixelSize, Point, Vector},
    render::{Drawable, RenderStates, RenderTarget},
    strings::Strings,
    style::SharedStyle,
};

/// [`TextComponent`] whose string is a key into a [`Strings`] table.
///
/// A key missing from the table leaves the displayed text as it was; the
/// miss is reported by the return value of [`Self::set_string`].
#[derive(Clone, Debug)]
pub struct LocalizableTextComponent {
    text: TextComponent,
    key: String,
    strings: Option<Arc<Strings>>,
}

impl Default for LocalizableTextComponent {
    fn default() -> Self {
        Self {
            text: TextComponent::default(),
            key: String::new(),
            strings: Some(Arc::new(Strings::new())),
        }
    }
}

impl Deref for LocalizableTextComponent {
    type Target = TextComponent;

    fn deref(&self) -> &TextComponent {
        &self.text
    }
}

impl LocalizableTextComponent {
    pub fn new(
        position: Point,
        size: PixelSize,
        style: Option<SharedStyle>,
        strings: Option<Arc<Strings>>,
        key: impl Into<String>,
        text_offset: Vector,
    ) -> Self {
        let mut component = Self {
            text: TextComponent::new(position, size, style, "", text_offset),
            key: String::new(),
            strings,
        };
        component.set_string(key);
        component
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shows the localized text for `key`.
    ///
    /// Returns `false`, leaving the displayed text untouched, when there is
    /// no table or the table has no entry for `key`.
    pub fn set_string(&mut self, key: impl Into<String>) -> bool {
        self.key = key.into();
        self.apply_text_changes()
    }

    /// Looks the stored key up again, e.g. after switching tables.
    pub fn apply_text_changes(&mut self) -> bool {
        let Some(localized) = self
            .strings
            .as_deref()
            .and_then(|strings| strings.get(&self.key))
        else {
            log::debug!("No localized string for key {:?}.", self.key);
            return false;
        };

        self.text.set_string(localized);
        true
    }

    pub fn strings(&self) -> Option<&Arc<Strings>> {
        self.strings.as_ref()
    }

    /// Replaces the table and re-resolves the current key.
    pub fn set_strings(&mut self, strings: Option<Arc<Strings>>) -> bool {
        self.strings = strings;
        self.apply_text_changes()
    }

    pub fn text(&self) -> &TextComponent {
        &self.text
    }

    /// The wrapped component. Setting its string directly bypasses the table.
    pub fn text_mut(&mut self) -> &mut TextComponent {
        &mut self.text
    }
}

impl Drawable for LocalizableTextComponent {
    fn draw(&self, target: &mut dyn RenderTarget, states: &RenderStates) {
        self.text.draw(target, states);
    }
}
