use crate::config::Config;
use crate::db;
use crate::db::log::journal;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the active backing store to `dest_file`, optionally zipped.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let store = db::open(cfg)?;
        let src = store.path().to_path_buf();
        let dest = Path::new(dest_file);

        if !dest.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Backup file path must be absolute: {dest_file}"
            ))));
        }

        // 1️⃣ Check source exists
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Ask before overwriting
        ensure_writable(dest, force)?;

        // 4️⃣ Copy
        fs::copy(&src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            } else {
                info(format!("Removed uncompressed backup: {}", dest.display()));
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Log
        journal(
            cfg,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

/// Compress a backup into `<file>.zip` next to it.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let mut zip_name = path.as_os_str().to_os_string();
    zip_name.push(".zip");
    let zip_path = PathBuf::from(zip_name);
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
