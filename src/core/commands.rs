use std::path::Path;

use super::build::build_library;
use crate::utils::app_config::AppConfig;
use crate::utils::error::Result;

/// Show the configuration file
pub fn config() -> Result<()> {
    let config = AppConfig::fetch()?;
    println!("{:#?}", config);

    Ok(())
}

/// Bundle the StoryTree sources into a single library file
pub fn build(input_folder: &Path, output_file: &Path) -> Result<()> {
    println!("Building StoryTree library from {}", input_folder.display());

    let report = build_library(input_folder, output_file)?;

    for source in &report.sources {
        println!("  {:<12} {}", source.role.file_name(), source.path.display());
    }
    println!(
        "Wrote {} bytes to {}",
        report.bytes_written,
        report.output_file.display()
    );

    Ok(())
}
