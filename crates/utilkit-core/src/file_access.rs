//! File accessibility checks.

use bitflags::bitflags;
use std::path::Path;
use tracing::debug;

bitflags! {
    /// Access modes to check a file against.
    ///
    /// Bit values match the POSIX `access(2)` constants. `EXIST` is the empty
    /// set, so every mode contains it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FileAccessMode: u8 {
        const EXIST = 0;
        const EXEC = 1;
        const WRITE = 2;
        const READ = 4;
        const WRITE_EXEC = Self::WRITE.bits() | Self::EXEC.bits();
        const READ_EXEC = Self::READ.bits() | Self::EXEC.bits();
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
        const READ_WRITE_EXEC = Self::READ.bits() | Self::WRITE.bits() | Self::EXEC.bits();
    }
}

impl Default for FileAccessMode {
    fn default() -> Self {
        Self::EXIST
    }
}

/// Whether `path` exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    is_file_accessible(path, FileAccessMode::EXIST)
}

/// Whether the current process can access `path` with every permission in `mode`
pub fn is_file_accessible(path: impl AsRef<Path>, mode: FileAccessMode) -> bool {
    let path = path.as_ref();
    let accessible = check_access(path, mode);
    if !accessible {
        debug!("File {} not accessible with mode {:?}", path.display(), mode);
    }
    accessible
}

#[cfg(unix)]
fn check_access(path: &Path, mode: FileAccessMode) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string that outlives the call
    unsafe { libc::access(c_path.as_ptr(), libc::c_int::from(mode.bits())) == 0 }
}

#[cfg(not(unix))]
fn check_access(path: &Path, mode: FileAccessMode) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if mode.contains(FileAccessMode::READ) && std::fs::File::open(path).is_err() {
        return false;
    }
    if mode.contains(FileAccessMode::WRITE) && metadata.permissions().readonly() {
        return false;
    }
    true
}
