use std::{collections::HashMap, path::Path, sync::Arc};

use crate::Error;

/// Font database plus the faces parsed from it so far.
///
/// `fontdb` indexes what is available; a face is only parsed by `fontdue`
/// the first time a widget asks for it, and then kept for reuse.
pub struct FontStorage {
    font_db: fontdb::Database,
    loaded_faces: HashMap<fontdb::ID, Arc<fontdue::Font>, fxhash::FxBuildHasher>,
}

impl Default for FontStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStorage {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self {
            font_db: fontdb::Database::new(),
            loaded_faces: HashMap::with_hasher(fxhash::FxBuildHasher::default()),
        }
    }

    /// Indexes every face in an in-memory font file.
    pub fn load_font_binary(&mut self, data: impl Into<Vec<u8>>) {
        self.font_db.load_font_data(data.into());
    }

    /// Indexes every face in the font file at `path`.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        self.font_db.load_font_file(path)?;
        Ok(())
    }

    /// Indexes every font file found under `dir`.
    pub fn load_fonts_dir(&mut self, dir: impl AsRef<Path>) {
        self.font_db.load_fonts_dir(dir);
    }

    /// Indexes the fonts installed on this machine.
    pub fn load_system_fonts(&mut self) {
        self.font_db.load_system_fonts();
    }

    /// `true` when no face is indexed.
    pub fn is_empty(&self) -> bool {
        self.font_db.is_empty()
    }

    /// Number of indexed faces.
    pub fn len(&self) -> usize {
        self.font_db.len()
    }

    /// Best match for `query`, parsed and ready for layout.
    pub fn query(&mut self, query: &fontdb::Query) -> Option<(fontdb::ID, Arc<fontdue::Font>)> {
        let id = self.font_db.query(query)?;
        self.face(id).map(|face| (id, face))
    }

    /// Parsed face for `id`; parses it on first use.
    pub fn face(&mut self, id: fontdb::ID) -> Option<Arc<fontdue::Font>> {
        use std::collections::hash_map::Entry;

        match self.loaded_faces.entry(id) {
            Entry::Occupied(entry) => Some(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let parsed = self.font_db.with_face_data(id, |data, index| {
                    fontdue::Font::from_bytes(
                        data,
                        fontdue::FontSettings {
                            collection_index: index,
                            scale: 40.0,
                            load_substitutions: true,
                        },
                    )
                })?;

                match parsed {
                    Ok(face) => Some(Arc::clone(entry.insert(Arc::new(face)))),
                    Err(e) => {
                        log::error!("Failed to parse font face (id: {:?}): {}", id, e);
                        None
                    }
                }
            }
        }
    }

    /// Ids of every indexed face, in database order.
    pub fn face_ids(&self) -> Vec<fontdb::ID> {
        self.font_db.faces().map(|face| face.id).collect()
    }

    /// First family name of the face `id`.
    pub fn family_name(&self, id: fontdb::ID) -> Option<String> {
        let face = self.font_db.face(id)?;
        face.families.first().map(|(name, _)| name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_finds_nothing() {
        let mut storage = FontStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
        assert!(storage.face_ids().is_empty());
        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        assert!(storage.query(&query).is_none());
    }

    #[test]
    fn garbage_binary_is_not_indexed() {
        let mut storage = FontStorage::new();
        storage.load_font_binary(vec![0u8; 32]);
        assert!(storage.is_empty());
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let mut storage = FontStorage::new();
        let result = storage.load_font_file("/definitely/not/a/font.ttf");
        assert!(matches!(result, Err(Error::FontFile(_))));
    }
}
