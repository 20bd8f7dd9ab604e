// Default locations, relative to the working directory
pub const DEFAULT_SOURCE_ICON: &str = "favicon.ico";
pub const DEFAULT_RES_DIR: &str = "app/src/main/res";
pub const DEFAULT_BACKUP_DIR: &str = "icon_backup";

// Optional override file, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "icongen.ini";

// Mipmap density buckets and their launcher icon size in pixels
pub const ICON_SIZES: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

// Both files get the same pixels; the round variant is not masked
pub const LAUNCHER_ICON: &str = "ic_launcher.png";
pub const LAUNCHER_ICON_ROUND: &str = "ic_launcher_round.png";
pub const OUTPUT_FILE_NAMES: &[&str] = &[LAUNCHER_ICON, LAUNCHER_ICON_ROUND];

pub const BACKUP_CANDIDATES: &[&str] = &[
    "ic_launcher.webp",
    "ic_launcher_round.webp",
    "ic_launcher.png",
    "ic_launcher_round.png",
];

/// Folder names of the size table, in table order.
pub fn icon_folders() -> impl Iterator<Item = &'static str> {
    ICON_SIZES.iter().map(|(folder, _)| *folder)
}
