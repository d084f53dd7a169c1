use crate::ids::GenreId;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: GenreId(id),
            name: name.into(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Read-only genre reference set, fetched once per view. Keeps the order the
/// catalog reported so pickers list genres the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreCatalog {
    genres: Vec<Genre>,
}

impl GenreCatalog {
    /// Builds the reference set. Later duplicates of an id are ignored.
    pub fn new(genres: Vec<Genre>) -> Self {
        let mut unique: Vec<Genre> = Vec::with_capacity(genres.len());
        for genre in genres {
            if !unique.iter().any(|existing| existing.id == genre.id) {
                unique.push(genre);
            }
        }
        Self { genres: unique }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.genres.iter()
    }

    pub fn get(&self, id: GenreId) -> Option<&Genre> {
        self.genres.iter().find(|genre| genre.id == id)
    }

    pub fn name_of(&self, id: GenreId) -> Option<&str> {
        self.get(id).map(|genre| genre.name.as_str())
    }

    pub fn contains(&self, id: GenreId) -> bool {
        self.get(id).is_some()
    }
}

impl From<Vec<Genre>> for GenreCatalog {
    fn from(genres: Vec<Genre>) -> Self {
        Self::new(genres)
    }
}
