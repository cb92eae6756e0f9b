/*
 * Platform-agnostic identifiers and the event vocabulary exchanged between the
 * native dialog procedures and the controllers. Native messages are translated
 * into these enums at the Win32 boundary so the lifecycle logic never touches
 * WPARAM/LPARAM directly.
 */

use crate::resource::{IDCANCEL, IDOK};

/// Identifier of a dialog template or of a control inside a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(i32);

impl ControlId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Command identifier carried by `WM_COMMAND`, and the result code a closed
/// dialog reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Ok,
    Cancel,
    Other(i32),
}

impl CommandId {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            IDOK => CommandId::Ok,
            IDCANCEL => CommandId::Cancel,
            other => CommandId::Other(other),
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            CommandId::Ok => IDOK,
            CommandId::Cancel => IDCANCEL,
            CommandId::Other(raw) => raw,
        }
    }

    /// True for the identifiers that end the dialog.
    pub fn closes_dialog(self) -> bool {
        matches!(self, CommandId::Ok | CommandId::Cancel)
    }
}

/// Events the main dialog reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Initialize,
    /// The tab strip reported `TCN_SELCHANGE`. The new index is read back from
    /// the host, as the notification itself does not carry it.
    SelectionChanged,
    Command(CommandId),
    Destroy,
    /// Anything else; left to default processing.
    Unhandled,
}

/// What the main dialog procedure should report back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResponse {
    /// Let the host assign default keyboard focus (`TRUE` from `WM_INITDIALOG`).
    DefaultFocus,
    Handled,
    NotHandled,
}

/// Kind of control asking its parent page for background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintTarget {
    StaticText,
    Edit,
    Button,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    BackgroundPaint(PaintTarget),
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResponse {
    /// Draw with a transparent background mode and no fill brush.
    TransparentBackground,
    NotHandled,
}
