//! Source fetching: copies the image behind a URL or filesystem path into
//! a local scratch file.
//!
//! The scratch copy exists for two reasons: remote sources must land on
//! disk anyway for the external GIF resizer, and local sources get the
//! same treatment so the rest of the pipeline sees one kind of input.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::ProcessorError;

/// A fetched source: its scratch file on disk plus the raw bytes.
pub(crate) struct ScratchSource {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Fetch `location` (http(s) URL or filesystem path) into the scratch
/// directory.
///
/// The scratch filename is derived from a digest of the location, so
/// re-fetching the same source overwrites its previous scratch copy
/// instead of accumulating files.
pub(crate) fn fetch_to_scratch(
    location: &str,
    scratch_dir: &Path,
) -> Result<ScratchSource, ProcessorError> {
    let bytes = if is_remote(location) {
        fetch_remote(location)?
    } else {
        std::fs::read(location).map_err(|e| {
            tracing::warn!(location, error = %e, "failed to read source file");
            ProcessorError::SourceUnreadable {
                location: location.to_string(),
                reason: e.to_string(),
            }
        })?
    };

    if bytes.is_empty() {
        return Err(ProcessorError::EmptySource {
            location: location.to_string(),
        });
    }

    let path = scratch_dir.join(scratch_file_name(location));
    std::fs::write(&path, &bytes).map_err(|source| ProcessorError::Scratch {
        path: path.clone(),
        source,
    })?;

    tracing::debug!(location, scratch = %path.display(), size = bytes.len(), "fetched source");
    Ok(ScratchSource { path, bytes })
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn fetch_remote(location: &str) -> Result<Vec<u8>, ProcessorError> {
    let unreadable = |reason: String| {
        tracing::warn!(location, error = %reason, "failed to fetch remote source");
        ProcessorError::SourceUnreadable {
            location: location.to_string(),
            reason,
        }
    };

    let response = reqwest::blocking::get(location)
        .and_then(|r| r.error_for_status())
        .map_err(|e| unreadable(e.to_string()))?;
    let bytes = response.bytes().map_err(|e| unreadable(e.to_string()))?;
    Ok(bytes.to_vec())
}

fn scratch_file_name(location: &str) -> String {
    let digest = Sha256::digest(location.as_bytes());
    format!("thumbsmith-{}", hex::encode(&digest[..8]))
}
