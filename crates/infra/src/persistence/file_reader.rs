use std::{
    fs::File,
    io,
    path::Path,
};

/// Convenience helpers for opening files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> io::Result<File> {
        File::open(path)
    }

    /// Open `path` and refuse anything that is a directory.
    ///
    /// Opening a directory succeeds on Unix and only fails on the first
    /// read, so the check happens up front.
    pub fn open_regular(path: &Path) -> io::Result<File> {
        let file = Self::open(path)?;
        if file.metadata()?.is_dir() {
            return Err(io::Error::new(io::ErrorKind::IsADirectory, "Is a directory"));
        }
        Ok(file)
    }
}
