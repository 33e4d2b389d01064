//! Native file bridge (rfd dialogs, system browser)

use std::fs;
use std::path::{Path, PathBuf};
use crate::config::EditorConfig;
use crate::pattern::io::MAX_IMPORT_SIZE;
use super::{ExportOutcome, FileError, ImportedFile};

/// Dialogs block, so an import is complete by the time `request_import`
/// returns. It is still handed out through `poll_import` to keep the call
/// pattern identical to the web build.
#[derive(Default)]
pub struct FileBridge {
    pending: Option<Result<ImportedFile, FileError>>,
    last_dir: Option<PathBuf>,
}

impl FileBridge {
    pub fn new() -> Self {
        Self::default()
    }

    fn dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new().add_filter("Pattern JSON", &["json"]);
        match &self.last_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn remember_dir(&mut self, path: &Path) {
        self.last_dir = path.parent().map(Path::to_path_buf);
    }

    /// Ask where to save and write `contents` there
    pub fn export(&mut self, file_name: &str, contents: &str) -> Result<ExportOutcome, FileError> {
        let Some(path) = self.dialog().set_file_name(file_name).save_file() else {
            return Ok(ExportOutcome::Cancelled);
        };
        fs::write(&path, contents)?;
        self.remember_dir(&path);
        tracing::info!(path = %path.display(), bytes = contents.len(), "exported patterns");
        Ok(ExportOutcome::Saved(path))
    }

    /// Open a file picker. Returns false when the user cancelled.
    pub fn request_import(&mut self) -> bool {
        let Some(path) = self.dialog().pick_file() else {
            return false;
        };
        self.remember_dir(&path);
        self.pending = Some(read_import(&path));
        true
    }

    /// Take a finished import, if any
    pub fn poll_import(&mut self) -> Option<Result<ImportedFile, FileError>> {
        self.pending.take()
    }

    /// Open the level generator in the system browser
    pub fn open_generator(&self, config: &EditorConfig) -> Result<(), FileError> {
        let url = config.generator_url();
        webbrowser::open(&url).map_err(|e| FileError::Navigation { url: url.clone(), reason: e.to_string() })?;
        tracing::info!(%url, "opened generator");
        Ok(())
    }
}

fn read_import(path: &Path) -> Result<ImportedFile, FileError> {
    let size = fs::metadata(path)?.len() as usize;
    if size > MAX_IMPORT_SIZE {
        return Err(FileError::TooLarge { size, max: MAX_IMPORT_SIZE });
    }
    let contents = fs::read_to_string(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ImportedFile { name, contents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_import() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[]]").unwrap();

        let imported = read_import(file.path()).unwrap();
        assert_eq!(imported.contents, "[[]]");
        assert!(!imported.name.is_empty());
    }

    #[test]
    fn test_read_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_import(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(FileError::Io(_))));
    }

    #[test]
    fn test_poll_takes_pending_once() {
        let mut bridge = FileBridge::new();
        bridge.pending = Some(Ok(ImportedFile { name: "a.json".into(), contents: "[]".into() }));
        assert!(bridge.poll_import().is_some());
        assert!(bridge.poll_import().is_none());
    }
}
