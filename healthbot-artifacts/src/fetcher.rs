use std::{
    fs, io,
    path::{Path, PathBuf},
};

use healthbot_model::{Error, Result};
use log::{debug, info};
use strum::IntoEnumIterator;

use crate::{artifact::Artifact, source::ArtifactSource};

#[derive(Debug, Default, PartialEq)]
pub struct FetchReport {
    pub downloaded: Vec<Artifact>,
    pub present: Vec<Artifact>,
}

/// Makes sure every artifact exists in the local directory, downloading only
/// the ones that are missing. No retries, no integrity checks.
pub struct Fetcher {
    source: Box<dyn ArtifactSource>,
    artifact_dir: PathBuf,
}

fn unavailable(artifact: Artifact, reason: impl ToString) -> Error {
    Error::ArtifactUnavailable {
        artifact: artifact.file_name(),
        reason: reason.to_string(),
    }
}

impl Fetcher {
    pub fn new(source: Box<dyn ArtifactSource>, artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            artifact_dir: artifact_dir.into(),
        }
    }

    pub async fn ensure_all(&self) -> Result<FetchReport> {
        fs::create_dir_all(&self.artifact_dir).map_err(|e| Error::ArtifactUnavailable {
            artifact: self.artifact_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut report = FetchReport::default();
        for artifact in Artifact::iter() {
            if self.ensure(artifact).await? {
                report.downloaded.push(artifact);
            } else {
                report.present.push(artifact);
            }
        }

        info!(
            "{} artifacts downloaded, {} already present",
            report.downloaded.len(),
            report.present.len()
        );
        Ok(report)
    }

    /// Returns whether the artifact had to be downloaded.
    pub async fn ensure(&self, artifact: Artifact) -> Result<bool> {
        let path = self.artifact_dir.join(artifact.file_name());
        if path.exists() {
            debug!("{} already present, skipping download", path.display());
            return Ok(false);
        }

        info!("Downloading {}", artifact.file_name());
        let bytes = self
            .source
            .fetch(&artifact.file_name())
            .await
            .map_err(|e| unavailable(artifact, e))?;
        write_atomically(&path, &bytes).map_err(|e| unavailable(artifact, e))?;
        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(true)
    }
}

/// The target path only appears once its full contents are on disk.
fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let partial = path.with_extension("part");
    let result = fs::write(&partial, bytes).and_then(|_| fs::rename(&partial, path));
    if result.is_err() {
        fs::remove_file(&partial).ok();
    }
    result
}
