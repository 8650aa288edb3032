//! Durable storage for the token pair.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::api::TokenPair;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write token file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove token file '{path}': {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode tokens: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Process-wide token pair, mirrored to a JSON file.
///
/// Reads come from memory. Writes replace the whole file; there is no
/// locking across processes. Cloning shares the same slot.
#[derive(Debug, Clone)]
pub struct TokenStore {
    inner: Arc<Mutex<Option<TokenPair>>>,
    path: Option<PathBuf>,
}

impl TokenStore {
    /// Open the store at `path`, loading any tokens already saved there.
    ///
    /// An unreadable or corrupt file is treated as "signed out".
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tokens = read_tokens(&path);
        Self {
            inner: Arc::new(Mutex::new(tokens)),
            path: Some(path),
        }
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
            path: None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.inner.lock().clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.lock().as_ref().map(|t| t.access_token.clone())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.lock().as_ref().map(|t| t.refresh_token.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Replace the stored pair. Memory is updated even if the file write fails.
    pub fn save(&self, tokens: TokenPair) -> Result<(), StoreError> {
        let encoded = serde_json::to_vec_pretty(&tokens)?;
        *self.inner.lock() = Some(tokens);

        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.clone(),
                source,
            })?;
        }
        fs::write(path, encoded).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })
    }

    /// Forget both tokens. Memory is always cleared, even if the file
    /// cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        *self.inner.lock() = None;

        let Some(path) = &self.path else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Remove {
                path: path.clone(),
                source,
            }),
        }
    }
}

fn read_tokens(path: &Path) -> Option<TokenPair> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read token file");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(tokens) => Some(tokens),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring corrupt token file");
            None
        }
    }
}
