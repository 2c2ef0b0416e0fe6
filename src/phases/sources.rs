// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Access to local files referenced by the cluster description

use crate::error::{PharosError, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Reads the content of local files the phases deliver
pub trait SourceReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<Bytes>;
}

/// Reads from the local filesystem, resolving `~` and relative paths
/// against the home and current directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFiles;

impl LocalFiles {
    pub fn resolve(path: &Path) -> Result<PathBuf> {
        let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
        std::path::absolute(&expanded).map_err(|source| PharosError::SourceFile {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl SourceReader for LocalFiles {
    fn read(&self, path: &Path) -> Result<Bytes> {
        let path = Self::resolve(path)?;
        std::fs::read(&path)
            .map(Bytes::from)
            .map_err(|source| PharosError::SourceFile { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ca.pem");
        std::fs::write(&path, b"-----BEGIN CERTIFICATE-----\n").unwrap();

        let content = LocalFiles.read(&path).unwrap();

        assert_eq!(content, Bytes::from_static(b"-----BEGIN CERTIFICATE-----\n"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pem");

        let err = LocalFiles.read(&path).unwrap_err();

        match err {
            PharosError::SourceFile { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_resolve_relative_is_absolute() {
        let resolved = LocalFiles::resolve(Path::new("certs/ca.pem")).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("certs/ca.pem"));
    }

    #[test]
    fn test_resolve_expands_home() {
        let resolved = LocalFiles::resolve(Path::new("~/ca.pem")).unwrap();

        assert!(resolved.is_absolute());
        assert!(!resolved.to_string_lossy().contains('~'));
    }
}
