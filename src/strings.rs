use std::collections::HashMap;

/// Localized display strings keyed by logical name.
///
/// Read-only from the widgets' point of view; they share it through an
/// `Arc<Strings>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Strings {
    entries: HashMap<String, String, fxhash::FxBuildHasher>,
}

impl Strings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the text for `key`, returning the previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), text.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Strings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut strings = Self::new();
        strings.extend(iter);
        strings
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Strings {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, text) in iter {
            self.insert(key, text);
        }
    }
}
