use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod backup;
mod constants;
mod generator;
mod image_processing;
mod settings;
mod utils;

use generator::Outcome;
use settings::Settings;

fn init_logging() {
    // Progress goes to stdout via println!, tracing defaults to warnings only
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
}

fn print_summary(outcome: &Outcome, settings: &Settings) {
    match outcome {
        Outcome::Success { icons, backups } => {
            println!();
            print_banner("🎉 Launcher icons generated successfully!");
            println!("   🖼️  Icons written: {}", icons.len());
            println!("   💾 Files backed up: {}", backups.len());
            println!();
            println!("Next steps:");
            println!("1. Check that the generated icons look right");
            println!("2. Rebuild the APK (gradlew clean assembleRelease)");
            println!("3. Install the new APK to see the icon");
            println!();
            println!("Note: previous icons were backed up to {}", settings.backup_dir.display());
        }
        Outcome::MissingSource(path) => {
            println!("❌ Source icon not found: {}", path.display());
            println!("   Place the icon at {} in the project root", path.display());
        }
        Outcome::MissingResDir(path) => {
            println!("❌ Resource directory not found: {}", path.display());
        }
        Outcome::Failed(message) => {
            println!("❌ Error: {}", message);
            println!();
            println!("Icon generation failed, see the error above");
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    print_banner("📱 Launcher Icon Generator");
    println!();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            println!("❌ Failed to load {}: {:#}", Settings::config_path().display(), e);
            return ExitCode::FAILURE;
        }
    };

    match generator::run(&settings) {
        Ok(outcome) => {
            print_summary(&outcome, &settings);
            outcome.exit_code()
        }
        Err(e) => {
            println!("❌ Backup failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
