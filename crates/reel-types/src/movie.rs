use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::payload::{MoviePayload, NewMovie};

/// Identifier of a stored movie.
///
/// Ids are handed out by the store from a monotonically increasing counter,
/// so an id is never reused within one store instance, even after the movie
/// it named has been deleted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    /// The first id a fresh store hands out.
    pub const FIRST: MovieId = MovieId(1);

    /// Create from a raw value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` if the id space is exhausted.
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Debug for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieId({})", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = TypeError;

    /// Parse a path segment such as `"42"`.
    ///
    /// Only the canonical decimal form is accepted: no sign, no whitespace
    /// and no leading zeros, so each id has exactly one spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = match s.as_bytes() {
            [] => false,
            [b'0', _, ..] => false,
            bytes => bytes.iter().all(u8::is_ascii_digit),
        };
        if !canonical {
            return Err(TypeError::InvalidId(s.to_string()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| TypeError::InvalidId(s.to_string()))
    }
}

/// A stored movie record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    pub year: i64,
}

impl Movie {
    /// Materialize a draft under the given id.
    pub fn from_draft(id: MovieId, draft: NewMovie) -> Self {
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            year: draft.year,
        }
    }

    /// Apply a partial update in place.
    ///
    /// Each field is replaced only when the payload carries a truthy value
    /// for it; absent, `null`, empty and zero values leave the current value
    /// untouched. The id is never changed.
    pub fn apply(&mut self, payload: &MoviePayload) {
        if let Some(title) = payload.title() {
            self.title = title.to_string();
        }
        if let Some(genre) = payload.genre() {
            self.genre = genre.to_string();
        }
        if let Some(year) = payload.year() {
            self.year = year;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Movie {
        Movie {
            id: MovieId::new(1),
            title: "Dune".into(),
            genre: "Sci-Fi".into(),
            year: 1984,
        }
    }

    #[test]
    fn id_parses_plain_digits() {
        assert_eq!("42".parse::<MovieId>().unwrap(), MovieId::new(42));
        assert_eq!("7".parse::<MovieId>().unwrap(), MovieId::new(7));
        assert_eq!("0".parse::<MovieId>().unwrap(), MovieId::new(0));
    }

    #[test]
    fn id_rejects_non_numeric() {
        for s in ["", "abc", "-1", "+1", " 1", "1.5", "007", "00", "99999999999999999999999"] {
            assert_eq!(
                s.parse::<MovieId>(),
                Err(TypeError::InvalidId(s.to_string())),
                "input {s:?}"
            );
        }
    }

    #[test]
    fn id_serializes_as_bare_number() {
        let json = serde_json::to_string(&MovieId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn id_checked_next() {
        assert_eq!(MovieId::FIRST.checked_next(), Some(MovieId::new(2)));
        assert_eq!(MovieId::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn movie_json_shape() {
        let value = serde_json::to_value(dune()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "title": "Dune", "genre": "Sci-Fi", "year": 1984 })
        );
    }

    #[test]
    fn apply_replaces_only_truthy_fields() {
        let mut movie = dune();
        let payload: MoviePayload =
            serde_json::from_str(r#"{"title": "Dune: Part One", "genre": "", "year": 0}"#).unwrap();
        movie.apply(&payload);
        assert_eq!(movie.title, "Dune: Part One");
        assert_eq!(movie.genre, "Sci-Fi");
        assert_eq!(movie.year, 1984);
        assert_eq!(movie.id, MovieId::new(1));
    }

    #[test]
    fn apply_empty_payload_is_noop() {
        let mut movie = dune();
        movie.apply(&MoviePayload::default());
        assert_eq!(movie, dune());
    }

    #[test]
    fn from_draft_keeps_fields() {
        let draft = NewMovie::from_payload(&MoviePayload::full("Alien", "Horror", 1979)).unwrap();
        let movie = Movie::from_draft(MovieId::new(9), draft);
        assert_eq!(movie.id, MovieId::new(9));
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.genre, "Horror");
        assert_eq!(movie.year, 1979);
    }
}
