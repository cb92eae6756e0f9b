/*
 * Win32 side of the tab pages. All five pages are modeless child dialogs built
 * from in-memory templates and share `page_dialog_proc`, which forwards paint
 * requests to the portable page dispatch and applies its answer to the DC.
 */

use crate::dialog_template::DialogTemplate;
use crate::error::Result as DialogResult;
use crate::geometry::Rect;
use crate::page::handle_page_event;
use crate::types::PageResponse;

use super::paint_router;

use std::ffi::c_void;
use windows::Win32::{
    Foundation::{HINSTANCE, HWND, LPARAM, WPARAM},
    Graphics::Gdi::{GetStockObject, HDC, HGDIOBJ, HOLLOW_BRUSH, SetBkMode, TRANSPARENT},
    UI::WindowsAndMessaging::{
        CreateDialogIndirectParamW, DLGTEMPLATE, SW_HIDE, SW_SHOW, SWP_NOACTIVATE, SWP_NOZORDER,
        SetWindowPos, ShowWindow,
    },
};

pub(crate) fn create_page_window(
    h_instance: HINSTANCE,
    hwnd_parent: HWND,
    template: &DialogTemplate,
) -> DialogResult<HWND> {
    // CreateDialogIndirectParamW copies the template; the buffer may be dropped afterwards.
    let hwnd_page = unsafe {
        CreateDialogIndirectParamW(
            Some(h_instance),
            template.as_ptr() as *const DLGTEMPLATE,
            Some(hwnd_parent),
            Some(page_dialog_proc),
            LPARAM(0),
        )?
    };
    log::debug!("[Page] Created page window {hwnd_page:?}");
    Ok(hwnd_page)
}

pub(crate) fn place_page_window(hwnd_page: HWND, bounds: Rect) -> DialogResult<()> {
    unsafe {
        SetWindowPos(
            hwnd_page,
            None,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
            SWP_NOZORDER | SWP_NOACTIVATE,
        )?
    };
    Ok(())
}

pub(crate) fn set_page_window_visible(hwnd_page: HWND, visible: bool) {
    let cmd = if visible { SW_SHOW } else { SW_HIDE };
    // The return value is the previous visibility, not an error indicator.
    unsafe { _ = ShowWindow(hwnd_page, cmd) };
}

/// Dialog procedure shared by every page window.
pub(crate) unsafe extern "system" fn page_dialog_proc(
    _hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    _lparam: LPARAM,
) -> isize {
    match handle_page_event(paint_router::resolve_paint_route(msg)) {
        PageResponse::TransparentBackground => {
            let hdc = HDC(wparam.0 as *mut c_void);
            apply_transparent_background(hdc).0 as isize
        }
        PageResponse::NotHandled => 0,
    }
}

/// Makes the control draw its text without filling the background and hands
/// back the stock hollow brush for the host to "paint" with.
fn apply_transparent_background(hdc: HDC) -> HGDIOBJ {
    unsafe {
        SetBkMode(hdc, TRANSPARENT);
        GetStockObject(HOLLOW_BRUSH)
    }
}
