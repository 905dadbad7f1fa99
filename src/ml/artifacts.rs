use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// Serialize a fitted artifact to disk, creating parent directories
pub fn save_artifact<T: Serialize>(path: &Path, artifact: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, artifact)?;

    debug!(path = %path.display(), "Artifact written");
    Ok(())
}

/// Deserialize a fitted artifact.
///
/// A missing file surfaces as `AppError::Io` with `NotFound` kind so callers
/// can tell it apart from a corrupt artifact.
pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(path)?);
    let artifact = bincode::deserialize_from(reader)?;

    debug!(path = %path.display(), "Artifact loaded");
    Ok(artifact)
}
