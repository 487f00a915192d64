use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub director: String,
    pub year: i64,
}

/// Writable movie fields as they arrive over the wire. Anything may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct MovieInput {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i64>,
}

/// A movie payload that passed the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub year: i64,
}

impl MovieInput {
    /// Empty strings and a zero year count as missing.
    pub fn require_all(self) -> Option<NewMovie> {
        Some(NewMovie {
            title: self.title.filter(|t| !t.is_empty())?,
            director: self.director.filter(|d| !d.is_empty())?,
            year: self.year.filter(|y| *y != 0)?,
        })
    }
}

impl NewMovie {
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            title: self.title,
            director: self.director,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_input_passes() {
        let input = MovieInput {
            title: Some("Inception".into()),
            director: Some("Nolan".into()),
            year: Some(2010),
        };
        let movie = input.require_all().unwrap();
        assert_eq!(movie.with_id(7).id, 7);
    }

    #[test]
    fn blank_or_zero_fields_are_missing() {
        let blank_title = MovieInput {
            title: Some(String::new()),
            director: Some("Nolan".into()),
            year: Some(2010),
        };
        assert!(blank_title.require_all().is_none());

        let zero_year = MovieInput {
            title: Some("Inception".into()),
            director: Some("Nolan".into()),
            year: Some(0),
        };
        assert!(zero_year.require_all().is_none());

        assert!(MovieInput::default().require_all().is_none());
    }
}
