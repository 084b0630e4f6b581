// src/output/paths.rs
//! Pure functions for output path calculation.

use crate::types::Uid;
use std::path::{Path, PathBuf};

/// Where the listing page lands under the output directory.
pub fn listing_output_path(out_dir: &Path) -> PathBuf {
    out_dir.join("index.html")
}

/// Where a post page lands under the output directory.
///
/// Uids are validated slugs, so they are safe to use as file names.
pub fn post_output_path(out_dir: &Path, uid: &Uid) -> PathBuf {
    out_dir.join("posts").join(format!("{}.html", uid.as_str()))
}
