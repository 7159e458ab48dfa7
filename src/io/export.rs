//! Writing generated markup to disk

use crate::io::configuration::OUTPUT_INDEX_WIDTH;
use crate::io::error::{Result, file_system_error};
use std::path::{Path, PathBuf};

/// Write `svg` to `output_path`, creating parent directories as needed
///
/// The markup is written byte for byte.
///
/// # Errors
///
/// Returns a `FileSystem` error if a directory cannot be created or the file
/// cannot be written
pub fn export_svg(svg: &str, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    std::fs::write(output_path, svg).map_err(|e| file_system_error(output_path, "write", e))
}

/// Output path of document `index` in a batch of `count`
///
/// Single documents use `base` unchanged; batches insert a zero padded index
/// before the extension, e.g. `art_002.svg`.
pub fn numbered_output_path(base: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return base.to_path_buf();
    }

    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let extension = base
        .extension()
        .map_or_else(|| "svg".into(), |ext| ext.to_string_lossy());
    let name = format!("{stem}_{index:0width$}.{extension}", width = OUTPUT_INDEX_WIDTH);

    base.parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
