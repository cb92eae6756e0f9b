/*
 * Error type shared by the portable controller and the Win32 host. Native
 * failures are wrapped so that every host operation can be propagated with
 * `?` up to the dialog procedure, which logs and falls back to default
 * processing.
 */

use std::fmt;

#[derive(Debug)]
pub enum DialogError {
    InitializationFailed(String),
    OperationFailed(String),
    InvalidHandle(String),
    /// The tab strip reported a selection that has no page.
    InvalidSelection {
        index: usize,
        page_count: usize,
    },
    #[cfg(target_os = "windows")]
    Win32(windows::core::Error),
}

pub type Result<T> = std::result::Result<T, DialogError>;

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogError::InitializationFailed(msg) => write!(f, "initialization failed: {msg}"),
            DialogError::OperationFailed(msg) => write!(f, "operation failed: {msg}"),
            DialogError::InvalidHandle(msg) => write!(f, "invalid handle: {msg}"),
            DialogError::InvalidSelection { index, page_count } => write!(
                f,
                "tab selection {index} is out of range for {page_count} pages"
            ),
            #[cfg(target_os = "windows")]
            DialogError::Win32(err) => write!(f, "win32 error: {err}"),
        }
    }
}

impl std::error::Error for DialogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(target_os = "windows")]
            DialogError::Win32(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(target_os = "windows")]
impl From<windows::core::Error> for DialogError {
    fn from(err: windows::core::Error) -> Self {
        DialogError::Win32(err)
    }
}
