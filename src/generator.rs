use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::backup::{backup_existing_icons, BackedUpIcon};
use crate::constants::{icon_folders, ICON_SIZES};
use crate::image_processing::{generate_icons, GeneratedIcon};
use crate::settings::Settings;

/// Result of a full generation run
#[derive(Debug)]
pub enum Outcome {
    Success {
        icons: Vec<GeneratedIcon>,
        backups: Vec<BackedUpIcon>,
    },
    MissingSource(PathBuf),
    MissingResDir(PathBuf),
    Failed(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Checks the inputs, backs up existing icons and regenerates every density.
///
/// Nothing is written when the source icon or the resource directory is missing.
/// A source that exists but is not a readable image fails at decode time.
/// Decode and write errors during generation are reported as [`Outcome::Failed`];
/// a backup error is returned as `Err` since nothing has been overwritten yet.
pub fn run(settings: &Settings) -> Result<Outcome> {
    if !settings.source_icon.exists() {
        tracing::warn!(path = %settings.source_icon.display(), "source icon not found");
        return Ok(Outcome::MissingSource(settings.source_icon.clone()));
    }
    if !settings.res_dir.is_dir() {
        tracing::warn!(path = %settings.res_dir.display(), "resource directory not found");
        return Ok(Outcome::MissingResDir(settings.res_dir.clone()));
    }

    let backups = backup_existing_icons(&settings.res_dir, &settings.backup_dir, icon_folders())?;

    println!("🚀 Generating icons...\n");
    match generate_icons(&settings.source_icon, &settings.res_dir, ICON_SIZES) {
        Ok(icons) => {
            for icon in &icons {
                tracing::debug!(folder = icon.folder, size = icon.size, path = %icon.path.display(), "generated");
            }
            tracing::info!(icons = icons.len(), backups = backups.len(), "icon generation finished");
            Ok(Outcome::Success { icons, backups })
        }
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "icon generation failed");
            Ok(Outcome::Failed(format!("{:#}", e)))
        }
    }
}
