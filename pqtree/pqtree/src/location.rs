//! File location parsing.

use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::LocationError;

pub(crate) const SCHEME_LOCAL: &str = "file";

/// A parsed file location: scheme, optional host (bucket, container, ...) and path.
///
/// Plain paths without `scheme://` are local files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    uri: String,
    scheme: String,
    host: String,
    path: String,
}

impl Location {
    pub fn parse(uri: &str) -> Result<Self, LocationError> {
        let trimmed = uri.trim();
        if trimmed.is_empty() {
            return Err(LocationError::Empty);
        }

        if !trimmed.contains("://") {
            return Ok(Self::local(trimmed, trimmed.to_string()));
        }

        let url = Url::parse(trimmed).map_err(|source| LocationError::Parse {
            uri: trimmed.to_string(),
            source,
        })?;
        let host = url.host_str().unwrap_or_default();
        let decoded = percent_decode_str(url.path())
            .decode_utf8()
            .map_err(|source| LocationError::Decode {
                uri: trimmed.to_string(),
                source,
            })?;

        if url.scheme() == SCHEME_LOCAL {
            // `file://dir/data.parquet` names the relative path `dir/data.parquet`.
            let path = if host.is_empty() {
                decoded.into_owned()
            } else {
                format!("{host}{decoded}")
            };
            return Ok(Self::local(trimmed, path));
        }

        Ok(Self {
            uri: trimmed.to_string(),
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            path: decoded.trim_start_matches('/').to_string(),
        })
    }

    fn local(uri: &str, path: String) -> Self {
        Self {
            uri: uri.to_string(),
            scheme: SCHEME_LOCAL.to_string(),
            host: String::new(),
            path,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// Object key within the scheme's namespace: `host/path`, or just the
    /// path when there is no host.
    pub fn key(&self) -> String {
        match (self.host.is_empty(), self.path.is_empty()) {
            (true, _) => self.path.clone(),
            (false, true) => self.host.clone(),
            (false, false) => format!("{}/{}", self.host, self.path),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
