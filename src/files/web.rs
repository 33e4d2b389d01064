//! Browser file bridge backed by the `stepstone_io.js` miniquad plugin

use crate::config::EditorConfig;
use crate::pattern::io::MAX_IMPORT_SIZE;
use super::{ExportOutcome, FileError, ImportedFile, MAX_FILENAME_LEN};

extern "C" {
    fn sse_download(name_ptr: *const u8, name_len: usize, data_ptr: *const u8, data_len: usize);
    fn sse_request_import();
    fn sse_check_import() -> i32;
    fn sse_import_len() -> usize;
    fn sse_import_name_len() -> usize;
    fn sse_copy_import(dest_ptr: *mut u8, max_len: usize) -> usize;
    fn sse_copy_import_name(dest_ptr: *mut u8, max_len: usize) -> usize;
    fn sse_clear_import();
    fn sse_navigate(url_ptr: *const u8, url_len: usize);
}

/// `sse_check_import` status codes
const IMPORT_NONE: i32 = 0;
const IMPORT_READY: i32 = 1;
const IMPORT_FAILED: i32 = -1;

#[derive(Default)]
pub struct FileBridge {
    waiting: bool,
}

impl FileBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand `contents` to the browser as a download
    pub fn export(&mut self, file_name: &str, contents: &str) -> Result<ExportOutcome, FileError> {
        unsafe {
            sse_download(file_name.as_ptr(), file_name.len(), contents.as_ptr(), contents.len());
        }
        tracing::info!(file_name, bytes = contents.len(), "download triggered");
        Ok(ExportOutcome::Downloaded(file_name.to_string()))
    }

    /// Open the browser file picker; the read completes on a later frame
    pub fn request_import(&mut self) -> bool {
        unsafe { sse_request_import() };
        self.waiting = true;
        true
    }

    pub fn poll_import(&mut self) -> Option<Result<ImportedFile, FileError>> {
        if !self.waiting {
            return None;
        }
        match unsafe { sse_check_import() } {
            IMPORT_NONE => None,
            IMPORT_READY => {
                self.waiting = false;
                let result = copy_import();
                unsafe { sse_clear_import() };
                Some(result)
            }
            IMPORT_FAILED => {
                self.waiting = false;
                unsafe { sse_clear_import() };
                Some(Err(FileError::ReadFailed))
            }
            other => {
                tracing::warn!(status = other, "unexpected import status");
                None
            }
        }
    }

    /// Navigate the page to the level generator
    pub fn open_generator(&self, config: &EditorConfig) -> Result<(), FileError> {
        let url = &config.generator_route;
        unsafe { sse_navigate(url.as_ptr(), url.len()) };
        Ok(())
    }
}

fn copy_import() -> Result<ImportedFile, FileError> {
    let data_len = unsafe { sse_import_len() };
    let name_len = unsafe { sse_import_name_len() };

    // Check sizes before allocating
    if data_len > MAX_IMPORT_SIZE {
        return Err(FileError::TooLarge { size: data_len, max: MAX_IMPORT_SIZE });
    }
    if name_len > MAX_FILENAME_LEN {
        return Err(FileError::NameTooLong);
    }

    let mut data = vec![0u8; data_len];
    let mut name = vec![0u8; name_len];
    let copied = unsafe { sse_copy_import(data.as_mut_ptr(), data_len) };
    let name_copied = unsafe { sse_copy_import_name(name.as_mut_ptr(), name_len) };
    data.truncate(copied);
    name.truncate(name_copied);

    Ok(ImportedFile {
        name: String::from_utf8_lossy(&name).into_owned(),
        contents: String::from_utf8_lossy(&data).into_owned(),
    })
}
