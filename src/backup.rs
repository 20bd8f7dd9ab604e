use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::constants::BACKUP_CANDIDATES;
use crate::utils::{copy_with_metadata, ensure_directory_exists};

/// One existing icon copied into the backup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackedUpIcon {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Copies every existing launcher icon under `res_dir/<folder>` to `backup_dir/<folder>`.
///
/// Folders and candidate files that do not exist are skipped. The backup root is
/// always created; per-folder backup directories only when the source folder exists.
pub fn backup_existing_icons<'a, I>(res_dir: &Path, backup_dir: &Path, folders: I) -> Result<Vec<BackedUpIcon>>
where
    I: IntoIterator<Item = &'a str>,
{
    ensure_directory_exists(backup_dir)?;

    println!("💾 Backing up existing icons...");
    let mut backed_up = Vec::new();

    for folder in folders {
        let src_folder = res_dir.join(folder);
        if !src_folder.is_dir() {
            tracing::debug!(folder = %src_folder.display(), "no existing folder, nothing to back up");
            continue;
        }

        let dst_folder = backup_dir.join(folder);
        ensure_directory_exists(&dst_folder)?;

        for icon_file in BACKUP_CANDIDATES {
            let src_file = src_folder.join(icon_file);
            if !src_file.is_file() {
                continue;
            }

            let dst_file = dst_folder.join(icon_file);
            copy_with_metadata(&src_file, &dst_file)?;
            println!("   📦 {} -> {}", src_file.display(), dst_file.display());
            tracing::debug!(from = %src_file.display(), to = %dst_file.display(), "backed up");

            backed_up.push(BackedUpIcon {
                source: src_file,
                destination: dst_file,
            });
        }
    }

    println!("✅ Backup complete ({} files)\n", backed_up.len());
    Ok(backed_up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::icon_folders;
    use std::fs;

    #[test]
    fn copies_existing_candidates_and_skips_the_rest() {
        let tmp = tempfile::tempdir().unwrap();
        let res = tmp.path().join("res");
        let backup = tmp.path().join("icon_backup");

        let hdpi = res.join("mipmap-hdpi");
        fs::create_dir_all(&hdpi).unwrap();
        fs::write(hdpi.join("ic_launcher.webp"), b"webp").unwrap();
        fs::write(hdpi.join("ic_launcher_round.png"), b"png").unwrap();
        fs::write(hdpi.join("unrelated.xml"), b"<xml/>").unwrap();

        // Folder present but empty
        fs::create_dir_all(res.join("mipmap-mdpi")).unwrap();

        let backed_up = backup_existing_icons(&res, &backup, icon_folders()).unwrap();

        assert_eq!(backed_up.len(), 2);
        assert_eq!(backed_up[0].source, hdpi.join("ic_launcher.webp"));
        assert_eq!(backed_up[1].source, hdpi.join("ic_launcher_round.png"));
        assert_eq!(
            fs::read(backup.join("mipmap-hdpi/ic_launcher.webp")).unwrap(),
            b"webp"
        );
        assert_eq!(
            fs::read(backup.join("mipmap-hdpi/ic_launcher_round.png")).unwrap(),
            b"png"
        );
        assert!(!backup.join("mipmap-hdpi/unrelated.xml").exists());
        assert!(backup.join("mipmap-mdpi").is_dir());
        assert!(!backup.join("mipmap-xxxhdpi").exists());
    }

    #[test]
    fn creates_backup_root_even_when_nothing_exists() {
        let tmp = tempfile::tempdir().unwrap();
        let res = tmp.path().join("res");
        fs::create_dir_all(&res).unwrap();
        let backup = tmp.path().join("icon_backup");

        let backed_up = backup_existing_icons(&res, &backup, icon_folders()).unwrap();

        assert!(backed_up.is_empty());
        assert!(backup.is_dir());
        assert_eq!(fs::read_dir(&backup).unwrap().count(), 0);
    }

    #[test]
    fn overwrites_a_previous_backup() {
        let tmp = tempfile::tempdir().unwrap();
        let res = tmp.path().join("res");
        let backup = tmp.path().join("icon_backup");
        let xhdpi = res.join("mipmap-xhdpi");
        fs::create_dir_all(&xhdpi).unwrap();
        fs::create_dir_all(backup.join("mipmap-xhdpi")).unwrap();
        fs::write(backup.join("mipmap-xhdpi/ic_launcher.png"), b"stale").unwrap();
        fs::write(xhdpi.join("ic_launcher.png"), b"current").unwrap();

        backup_existing_icons(&res, &backup, ["mipmap-xhdpi"]).unwrap();

        assert_eq!(
            fs::read(backup.join("mipmap-xhdpi/ic_launcher.png")).unwrap(),
            b"current"
        );
    }
}
