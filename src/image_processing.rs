use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::{Path, PathBuf};

use crate::constants::OUTPUT_FILE_NAMES;
use crate::utils::ensure_directory_exists;

/// A launcher icon written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub folder: &'static str,
    pub size: u32,
    pub path: PathBuf,
}

/// Decodes the source icon and converts it to RGBA if it is in another color mode.
///
/// The format is sniffed from the file contents first, so a PNG saved as
/// `favicon.ico` still decodes.
pub fn load_source_icon(source: &Path) -> Result<RgbaImage> {
    let img = ImageReader::open(source)
        .with_context(|| format!("Failed to open image: {}", source.display()))?
        .with_guessed_format()
        .with_context(|| format!("Failed to read image header: {}", source.display()))?
        .decode()
        .with_context(|| format!("Failed to decode image: {}", source.display()))?;

    Ok(into_rgba(img))
}

fn into_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            tracing::debug!(color = ?other.color(), "converting source to RGBA");
            other.into_rgba8()
        }
    }
}

/// Resizes to exactly `size`x`size`. Aspect ratio is not preserved.
pub fn resize_icon(img: &RgbaImage, size: u32) -> RgbaImage {
    image::imageops::resize(img, size, size, FilterType::Lanczos3)
}

/// Writes one resized copy of `source` per size table entry, twice per folder
/// (`ic_launcher.png` and `ic_launcher_round.png`). Existing files are overwritten.
pub fn generate_icons(source: &Path, res_dir: &Path, sizes: &[(&'static str, u32)]) -> Result<Vec<GeneratedIcon>> {
    println!("🖼️  Reading source icon: {}", source.display());
    let img = load_source_icon(source)?;
    println!("   Original size: {}x{}", img.width(), img.height());

    let mut generated = Vec::with_capacity(sizes.len() * OUTPUT_FILE_NAMES.len());

    for &(folder, size) in sizes {
        let output_folder = res_dir.join(folder);
        ensure_directory_exists(&output_folder)?;

        let resized = resize_icon(&img, size);
        tracing::debug!(folder, size, "resized icon");

        for file_name in OUTPUT_FILE_NAMES {
            let output_path = output_folder.join(file_name);
            resized
                .save_with_format(&output_path, ImageFormat::Png)
                .with_context(|| format!("Failed to write icon: {}", output_path.display()))?;
            println!("   ✓ {} ({}x{})", output_path.display(), size, size);

            generated.push(GeneratedIcon {
                folder,
                size,
                path: output_path,
            });
        }
    }

    println!("\n✅ All icons generated");
    Ok(generated)
}
