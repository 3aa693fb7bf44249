//! Byte sources that turn a [`Location`] into file contents.

use std::{
    collections::HashMap,
    fs,
    sync::{Arc, RwLock},
};

use bytes::Bytes;

use crate::{error::SourceError, location::Location};

/// Capability to fetch the bytes behind a location of one scheme.
///
/// Implementations are registered with [`ParquetReader`](crate::ParquetReader)
/// and dispatched on [`Location::scheme`].
pub trait ByteSource: Send + Sync {
    /// Scheme this source serves (e.g. `file`).
    fn scheme(&self) -> &str;

    /// Fetch the full contents behind `location`.
    fn fetch(&self, location: &Location) -> Result<Bytes, SourceError>;
}

/// Local filesystem source (`file` scheme and plain paths).
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSource;

impl ByteSource for LocalFileSource {
    fn scheme(&self) -> &str {
        crate::location::SCHEME_LOCAL
    }

    fn fetch(&self, location: &Location) -> Result<Bytes, SourceError> {
        fs::read(location.path())
            .map(Bytes::from)
            .map_err(|source| SourceError::Io {
                location: location.to_string(),
                source,
            })
    }
}

/// In-memory named blobs served under the `mem` scheme (`mem://name`).
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    objects: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemorySource {
    pub const SCHEME: &'static str = "mem";

    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` under `name`, replacing any previous object.
    pub fn insert(&self, name: impl Into<String>, data: impl Into<Bytes>) {
        let mut objects = self
            .objects
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects.insert(name.into(), data.into());
    }

    pub fn with_object(self, name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        self.insert(name, data);
        self
    }
}

impl ByteSource for MemorySource {
    fn scheme(&self) -> &str {
        Self::SCHEME
    }

    fn fetch(&self, location: &Location) -> Result<Bytes, SourceError> {
        let objects = self
            .objects
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        objects
            .get(&location.key())
            .cloned()
            .ok_or_else(|| SourceError::NotFound {
                location: location.to_string(),
            })
    }
}
