//! # Library Build Orchestration
//!
//! Ties the pieces of a build together:
//! 1. locate and read the four sources from the input folder,
//! 2. splice the members into the container,
//! 3. write the bundled text to the output file with a single write.
//!
//! Every source is read before the output file is touched, so a missing input
//! never leaves a truncated bundle behind.

use log::{debug, info, warn};
use std::path::Path;

use super::common::{load_input_folder, write_output};
use super::splice::splice;
use super::types::BuildReport;
use crate::utils::error::Result;

/// Builds the bundled StoryTree library from `input_folder` into `output_file`.
pub fn build_library(input_folder: &Path, output_file: &Path) -> Result<BuildReport> {
    info!(
        "Building StoryTree library from {} into {}",
        input_folder.display(),
        output_file.display()
    );

    let (sources, bundle) = load_input_folder(input_folder)?;

    let (text, outcome) = splice(&bundle.container, &bundle.members);

    match outcome.injected_after_line {
        Some(line) => debug!("Members injected after container line {}", line),
        None => warn!("No line with `{{` found before the end of the container, members were not injected"),
    }
    match outcome.dropped_line {
        Some(line) => debug!("Dropped closing line {} of the container", line),
        None => warn!("No line with `}};` found in the container, nothing was dropped"),
    }

    write_output(output_file, &text)?;

    info!("Wrote {} bytes to {}", text.len(), output_file.display());

    Ok(BuildReport {
        sources,
        output_file: output_file.to_path_buf(),
        bytes_written: text.len(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SpliceOutcome;
    use std::fs;
    use tempfile::TempDir;

    fn write_sources(dir: &Path) -> Result<()> {
        fs::write(dir.join("SDB.js"), "var SDB = function(){\n\talert('x');\n};\n")?;
        fs::write(dir.join("Character.js"), "var Character = 1;")?;
        fs::write(dir.join("STree.js"), "var ActionTree = 2;")?;
        fs::write(
            dir.join("StoryTree.js"),
            "var StoryTree = function(){\n\tthis.SDB = new SDB();\n};\n\nStoryTree.prototype.run = function(){\n\talert('no');\n};\n",
        )?;
        Ok(())
    }

    #[test]
    fn test_build_library_writes_bundle() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_sources(temp_dir.path())?;
        let output = temp_dir.path().join("out.js");

        let report = build_library(temp_dir.path(), &output)?;

        let expected = concat!(
            "var StoryTree = function(){\n",
            "\tvar SDB = function(){\n",
            "\t\tthrow('x');\n",
            "\t};\n",
            "\n\n",
            "\tvar Character = 1;\n\n",
            "\tvar ActionTree = 2;\n\n",
            "\n\n",
            "\t//These are the members of StoryTree \n",
            "\tthis.SDB = new SDB();\n",
            "\t\n",
            "\tStoryTree.prototype.run = function(){\n",
            "\t\tthrow('no');\n",
            "\t};\n",
            "\n};",
        );
        assert_eq!(fs::read_to_string(&output)?, expected);
        assert_eq!(report.bytes_written, expected.len());
        assert_eq!(report.sources.len(), 4);
        assert_eq!(
            report.outcome,
            SpliceOutcome {
                injected_after_line: Some(1),
                dropped_line: Some(3),
            }
        );
        Ok(())
    }

    #[test]
    fn test_missing_source_leaves_output_untouched() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write_sources(temp_dir.path())?;
        fs::remove_file(temp_dir.path().join("StoryTree.js"))?;
        let output = temp_dir.path().join("out.js");
        fs::write(&output, "previous build")?;

        assert!(build_library(temp_dir.path(), &output).is_err());
        assert_eq!(fs::read_to_string(&output)?, "previous build");
        Ok(())
    }
}
