//! # Source and Output Files
//!
//! File system side of a build: finding the four fixed source files inside the
//! input folder, reading them in full, and writing the bundled text.

use crate::utils::error::{Error, Result};
use log::debug;
use std::path::Path;

use super::types::{BundleSources, SourceFile, SourceRole};

/// Lists the four source files expected in `input_folder`, in opening order.
///
/// Paths are joined, so the folder may be given with or without a trailing
/// separator. Nothing is checked on disk here.
pub fn locate_sources(input_folder: &Path) -> Vec<SourceFile> {
    SourceRole::ALL
        .iter()
        .map(|role| SourceFile::locate(input_folder, *role))
        .collect()
}

/// Reads one source file in full.
pub fn read_source(source: &SourceFile) -> Result<String> {
    let contents = std::fs::read_to_string(&source.path).map_err(|e| {
        Error::with_source(
            &format!(
                "Failed to read {} file {}",
                source.role,
                source.path.display()
            ),
            Box::new(e),
        )
    })?;

    debug!(
        "Read {} bytes from {} ({})",
        contents.len(),
        source.path.display(),
        source.role
    );

    Ok(contents)
}

/// Reads all four sources. Fails on the first file that cannot be read.
pub fn read_sources(sources: &[SourceFile]) -> Result<BundleSources> {
    let mut bundle = BundleSources::default();

    for source in sources {
        let contents = read_source(source)?;
        match source.role {
            SourceRole::Container => bundle.container = contents,
            SourceRole::Sdb => bundle.members.sdb = contents,
            SourceRole::Character => bundle.members.character = contents,
            SourceRole::ActionTree => bundle.members.action_tree = contents,
        }
    }

    Ok(bundle)
}

/// Convenience for [`locate_sources`] followed by [`read_sources`].
pub fn load_input_folder(input_folder: &Path) -> Result<(Vec<SourceFile>, BundleSources)> {
    if !input_folder.is_dir() {
        return Err(Error::new(&format!(
            "Input folder {} is not a directory",
            input_folder.display()
        )));
    }

    let sources = locate_sources(input_folder);
    let bundle = read_sources(&sources)?;

    Ok((sources, bundle))
}

/// Writes `contents` to `output_file` in one go, replacing any existing file.
pub fn write_output(output_file: &Path, contents: &str) -> Result<()> {
    std::fs::write(output_file, contents).map_err(|e| {
        Error::with_source(
            &format!("Failed to write output file {}", output_file.display()),
            Box::new(e),
        )
    })
}
