//! Image writing utilities
//!
//! Helpers for turning exported images into PNG files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use log::debug;

use crate::exporter::ExportedImage;
use crate::scf::errors::ScfResult;
use crate::utils::progress::ProgressTracker;

/// Output directory for one container: `<base>/<container file name>`
pub fn output_dir_for(base: &Path, input_path: &str) -> PathBuf {
    let stem = Path::new(input_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "container".to_string());
    base.join(stem)
}

/// Path of the PNG file for an exported image name
///
/// Export names come from the container, so path separators and drive
/// colons are replaced with `_`; the result is always a direct child of `dir`.
pub fn png_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.png", file_stem(name)))
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// Write every image as `<name>.png` under `dir`, creating it if needed
///
/// # Returns
/// The paths written, in export order
pub fn write_pngs(dir: &Path, images: &[ExportedImage], show_progress: bool) -> ScfResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let progress = show_progress.then(|| ProgressTracker::new(images.len() as u64, "Writing images"));
    let mut written = Vec::with_capacity(images.len());

    for exported in images {
        let path = png_path(dir, &exported.name);
        if let Some(progress) = &progress {
            progress.set_message(&exported.name);
        }
        exported.image.save(&path)?;
        debug!("Wrote {}", path.display());
        written.push(path);
        if let Some(progress) = &progress {
            progress.increment(1);
        }
    }

    if let Some(progress) = &progress {
        progress.finish();
    }
    Ok(written)
}
