//! ZIP archive building and extraction.
//!
//! Entries are stored under their base file name — the directory
//! structure of the inputs is discarded, so two inputs with the same
//! base name collide and the last one wins.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::errors::{Result, ZipVaultError};

/// Build a ZIP archive at `archive_path` with one Deflate-compressed
/// entry per input file, named by the file's base name.
pub fn build_archive(archive_path: &Path, files: &[PathBuf]) -> Result<()> {
    let file = File::create(archive_path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ZipVaultError::CommandFailed(format!(
                    "input path has no file name: {}",
                    path.display()
                ))
            })?;

        zip.start_file(name, options)?;

        let mut contents = Vec::new();
        File::open(path)?.read_to_end(&mut contents)?;
        zip.write_all(&contents)?;
    }

    zip.finish()?;
    Ok(())
}

/// Extract every entry of the archive at `archive_path` into `dest`.
///
/// Returns the entry names in container enumeration order.  Entry
/// names that would escape `dest` (absolute paths, `..` components)
/// are rejected rather than written.
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<Vec<String>> {
    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut extracted = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ZipVaultError::UnsafeEntryName(name.clone()))?;
        let outpath = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut out = File::create(&outpath)?;
            io::copy(&mut entry, &mut out)?;
        }

        extracted.push(name);
    }

    Ok(extracted)
}
