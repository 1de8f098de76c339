//! Game genre catalog entry.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog record: a canonical name plus its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameGenre {
    pub name: String,
    /// Absent and `null` both decode to an empty list.
    #[serde(rename = "altNames", default, deserialize_with = "null_as_empty")]
    pub alt_names: Vec<String>,
}

impl GameGenre {
    pub fn new<N, I, A>(name: N, alt_names: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            name: name.into(),
            alt_names: alt_names.into_iter().map(Into::into).collect(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
