// ndk-conf: Android NDK Toolchain Configuration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local cache for auxiliary NDK tools (e.g. `gdbserver`).
//!
//! ```text
//! <ndk>/prebuilt/android-arm/gdbserver/gdbserver
//!        |  strip NDK root (file name if outside)
//!        v
//! <cache>/prebuilt/android-arm/gdbserver/gdbserver
//!
//! cached file with same length and bytes --> skip copy
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{NdkResult, ToolFetchError};

/// Copies `source` into `cache_dir` and returns the cached path.
///
/// The cached copy mirrors the file's location relative to `ndk_home`; files
/// outside the NDK are cached by file name. An existing cached file with the
/// same length and contents as the source is reused.
///
/// # Errors
///
/// Returns a `ToolFetchError` if the source is missing, or if the cache
/// directory or the copy cannot be created.
pub fn fetch_and_cache(cache_dir: &Path, ndk_home: &Path, source: &Path) -> NdkResult<PathBuf> {
    let source_meta = std::fs::metadata(source)
        .ok()
        .filter(std::fs::Metadata::is_file)
        .ok_or_else(|| ToolFetchError::SourceMissing {
            path: source.display().to_string(),
        })?;

    let dest = cache_dir.join(cache_relative_path(ndk_home, source));

    if is_cached_copy(source, &dest, source_meta.len()) {
        debug!(path = %dest.display(), "tool already cached, skipping copy");
        return Ok(dest);
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ToolFetchError::CreateDir {
            path: parent.display().to_string(),
            source,
        })?;
    }

    std::fs::copy(source, &dest).map_err(|e| ToolFetchError::Copy {
        from: source.display().to_string(),
        to: dest.display().to_string(),
        source: e,
    })?;

    info!(
        from = %source.display(),
        to = %dest.display(),
        "cached tool"
    );
    Ok(dest)
}

// Several NDKs map onto the same cache path, so a length match alone is not
// enough to reuse the cached file.
fn is_cached_copy(source: &Path, dest: &Path, source_len: u64) -> bool {
    let same_len = std::fs::metadata(dest).is_ok_and(|m| m.is_file() && m.len() == source_len);
    if !same_len {
        return false;
    }

    match (std::fs::read(source), std::fs::read(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn cache_relative_path(ndk_home: &Path, source: &Path) -> PathBuf {
    match source.strip_prefix(ndk_home) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => source
            .file_name()
            .map_or_else(|| PathBuf::from("tool"), PathBuf::from),
    }
}
