//! Loads a genre catalog from a JSON file.
//!
//! The file must hold a top-level array of `{"name", "altNames"}` objects.
//! An array with no entries is rejected here, even though the rule engine
//! itself treats an empty collection as valid.

use std::path::{Path, PathBuf};

use genre_core::genre::GameGenre;

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("error reading file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid structure: {0}")]
    InvalidStructure(#[from] serde_json::Error),

    #[error("no game genres found in JSON")]
    Empty,
}

/// Read and decode the catalog at `path`.
pub fn read_game_genres(path: impl AsRef<Path>) -> Result<Vec<GameGenre>, ReadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let genres = parse_game_genres(&content)?;
    tracing::debug!(path = %path.display(), count = genres.len(), "Game genres loaded");
    Ok(genres)
}

/// Decode a catalog already held in memory.
pub fn parse_game_genres(content: &str) -> Result<Vec<GameGenre>, ReadError> {
    let genres: Vec<GameGenre> = serde_json::from_str(content)?;
    if genres.is_empty() {
        return Err(ReadError::Empty);
    }
    Ok(genres)
}
