/*
 * tabdeck: a modal dialog with a five-item tab strip whose pages are child
 * dialogs, shown one at a time as the selection changes.
 *
 * The lifecycle rules (tab creation, page placement, visibility, closing) live
 * in the portable `controller` and `page` modules and talk to the window
 * system only through the `DialogHost` trait. The Win32 implementation of that
 * trait, the dialog procedures and the entry point are compiled on Windows
 * only, so the portable logic builds and tests on every platform.
 */
#[cfg(target_os = "windows")]
pub mod app;
#[cfg(target_os = "windows")]
pub(crate) mod command_executor;
pub mod config;
pub mod controller;
#[cfg(target_os = "windows")]
pub(crate) mod controls;
pub mod dialog_template;
pub mod error;
pub mod geometry;
pub mod page;
pub mod resource;
pub mod types;
#[cfg(target_os = "windows")]
pub(crate) mod window_common;

#[cfg(target_os = "windows")]
pub use app::DialogInterface;
pub use config::{DialogConfig, DialogGeometry, DialogUnits};
pub use controller::{DialogHost, TabDialog};
pub use error::{DialogError, Result as DialogResult};
pub use geometry::Rect;
pub use page::{PageTemplate, TabPage, handle_page_event};
pub use types::{
    CommandId, ControlId, DialogEvent, DialogResponse, PageEvent, PageResponse, PaintTarget,
};
