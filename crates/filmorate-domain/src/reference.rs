//! Reference data attached to films: genres and MPA ratings.

use serde::{Deserialize, Serialize};

use crate::id::{GenreId, MpaId};

/// A film genre. Ordered by `id` first, so a `BTreeSet<Genre>` iterates by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// A Motion Picture Association rating (G, PG, PG-13, R, NC-17).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Mpa {
    pub id: MpaId,
    pub name: String,
}

impl Genre {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: GenreId(id),
            name: name.into(),
        }
    }
}

impl Mpa {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id: MpaId(id),
            name: name.into(),
        }
    }
}
