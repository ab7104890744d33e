// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::domain::account::models::Credentials;
use crate::domain::account::repos::CredentialsRepository;

/// Stores the credentials as a JSON file. Writes go through a temp file
/// in the same directory, then rename, so a crash mid-write cannot leave
/// a truncated store behind.
pub struct FsCredentialsRepository {
    path: PathBuf,
}

impl FsCredentialsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialsRepository for FsCredentialsRepository {
    async fn get(&self) -> Result<Option<Credentials>> {
        let json = match std::fs::read(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).context(format!(
                    "Failed to read credentials from {:?}",
                    self.path
                ))
            }
        };
        Ok(Some(serde_json::from_slice(&json).context(format!(
            "Failed to parse credentials at {:?}",
            self.path
        ))?))
    }

    async fn set(&self, credentials: Credentials) -> Result<()> {
        let dir = self
            .path
            .parent()
            .context("Credentials path has no parent directory")?;
        std::fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer(&mut file, &credentials)?;
        file.flush()?;
        file.persist(&self.path)
            .context(format!("Failed to persist credentials to {:?}", self.path))?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context(format!(
                "Failed to delete credentials at {:?}",
                self.path
            )),
        }
    }
}
