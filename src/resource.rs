//! Static data resources
//!
//! A resource is a JSON payload that is read once at startup: either compiled
//! into the binary, read from a file on disk, or handed over inline.

use crate::error::LoadError;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::PathBuf;

/// Where a JSON payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Payload compiled into the binary, with the name it is reported under.
    Bundled {
        name: &'static str,
        payload: &'static str,
    },
    /// JSON file on disk.
    File(PathBuf),
    /// Raw JSON text.
    Inline(String),
}

impl Resource {
    /// Read the raw payload.
    pub fn read(&self) -> Result<Cow<'_, str>, LoadError> {
        match self {
            Resource::Bundled { payload, .. } => Ok(Cow::Borrowed(payload)),
            Resource::File(path) => std::fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                }),
            Resource::Inline(text) => Ok(Cow::Borrowed(text.as_str())),
        }
    }

    /// Read and deserialize the payload.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, LoadError> {
        let payload = self.read()?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// Human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Resource::Bundled { name, .. } => format!("bundled:{}", name),
            Resource::File(path) => path.display().to_string(),
            Resource::Inline(_) => "inline".to_string(),
        }
    }
}
