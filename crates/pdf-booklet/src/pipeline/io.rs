//! Document I/O for booklet runs

use crate::types::*;
use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Load the source document.
///
/// Any failure to read or parse the file is reported as `SourceUnreadable`.
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| source_unreadable(&path, e))?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes))
        .await?
        .map_err(|e| source_unreadable(&path, e))?;
    log::info!(
        "Loaded {} ({} pages)",
        path.display(),
        doc.get_pages().len()
    );
    Ok(doc)
}

/// Save the booklet document.
///
/// The bytes are written to a uniquely named hidden file beside `path` and
/// renamed over it only once complete, so `path` never holds a partial
/// booklet and concurrent saves to the same destination each land whole.
/// The temporary file is removed if anything fails.
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let dir = parent_dir(&path)?;
    let target = path.clone();

    tokio::task::spawn_blocking(move || -> std::io::Result<()> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;

        let mut partial = tempfile::Builder::new()
            .prefix(".booklet-")
            .suffix(".partial")
            .tempfile_in(&dir)?;
        partial.write_all(&bytes)?;
        partial.as_file().sync_all()?;
        partial.persist(&target)?;
        Ok(())
    })
    .await?
    .map_err(|e| destination_unwritable(&path, e))?;

    log::info!("Saved booklet to {}", path.display());
    Ok(())
}

/// Directory the temporary file is created in
fn parent_dir(path: &Path) -> Result<PathBuf> {
    if path.file_name().is_none() {
        return Err(destination_unwritable(path, "path has no file name"));
    }
    Ok(match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_owned(),
        _ => PathBuf::from("."),
    })
}

fn source_unreadable(path: &Path, reason: impl std::fmt::Display) -> BookletError {
    BookletError::SourceUnreadable {
        path: path.to_owned(),
        reason: reason.to_string(),
    }
}

fn destination_unwritable(path: &Path, reason: impl std::fmt::Display) -> BookletError {
    BookletError::DestinationUnwritable {
        path: path.to_owned(),
        reason: reason.to_string(),
    }
}
