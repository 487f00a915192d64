use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow)]
pub struct Director {
    pub id: i64,
    pub name: String,
    #[serde(rename = "birthYear")]
    #[sqlx(rename = "birthYear")]
    pub birth_year: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct DirectorInput {
    pub name: Option<String>,
    #[serde(rename = "birthYear")]
    pub birth_year: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDirector {
    pub name: String,
    pub birth_year: i64,
}

impl DirectorInput {
    pub fn require_all(self) -> Option<NewDirector> {
        Some(NewDirector {
            name: self.name.filter(|n| !n.is_empty())?,
            birth_year: self.birth_year.filter(|y| *y != 0)?,
        })
    }
}

impl NewDirector {
    pub fn with_id(self, id: i64) -> Director {
        Director {
            id,
            name: self.name,
            birth_year: self.birth_year,
        }
    }
}
