/*
 * Native operations on the common-controls tab strip (SysTabControl32) that
 * the main dialog template creates: item insertion, selection query, content
 * rectangle computation and forced repaint.
 */

use crate::error::{DialogError, Result as DialogResult};
use crate::geometry::Rect;

use windows::Win32::{
    Foundation::{HWND, LPARAM, POINT, RECT, WPARAM},
    Graphics::Gdi::{MapWindowPoints, RDW_INVALIDATE, RDW_UPDATENOW, RedrawWindow},
    UI::Controls::{TCIF_TEXT, TCITEMW, TCM_ADJUSTRECT, TCM_GETCURSEL, TCM_INSERTITEMW},
    UI::WindowsAndMessaging::{GetClientRect, SendMessageW},
};
use windows::core::PWSTR;

pub(crate) fn insert_tab_item(hwnd_tab: HWND, index: usize, label: &str) -> DialogResult<()> {
    // The control copies the text, so the buffer only has to outlive the call.
    let mut wide: Vec<u16> = label.encode_utf16().chain(std::iter::once(0)).collect();
    let item = TCITEMW {
        mask: TCIF_TEXT,
        pszText: PWSTR(wide.as_mut_ptr()),
        ..Default::default()
    };
    let inserted = unsafe {
        SendMessageW(
            hwnd_tab,
            TCM_INSERTITEMW,
            Some(WPARAM(index)),
            Some(LPARAM(&item as *const TCITEMW as isize)),
        )
    };
    if inserted.0 < 0 {
        log::error!("[TabStrip] TCM_INSERTITEMW failed for '{label}' at {index}");
        return Err(DialogError::OperationFailed(format!(
            "could not insert tab '{label}' at index {index}"
        )));
    }
    log::trace!("[TabStrip] Inserted '{label}' at {}", inserted.0);
    Ok(())
}

pub(crate) fn current_selection(hwnd_tab: HWND) -> Option<usize> {
    let result = unsafe { SendMessageW(hwnd_tab, TCM_GETCURSEL, None, None) };
    selection_from_lresult(result.0)
}

/// `TCM_GETCURSEL` answers -1 when no tab is selected.
fn selection_from_lresult(raw: isize) -> Option<usize> {
    usize::try_from(raw).ok()
}

/// Display area of the tab strip, excluding its tabs and border, mapped into
/// the client coordinates of `hwnd_parent` so sibling windows can be placed
/// over it.
pub(crate) fn content_rect_in_parent(hwnd_tab: HWND, hwnd_parent: HWND) -> DialogResult<Rect> {
    let mut rc = RECT::default();
    unsafe { GetClientRect(hwnd_tab, &mut rc)? };
    unsafe {
        SendMessageW(
            hwnd_tab,
            TCM_ADJUSTRECT,
            Some(WPARAM(0)),
            Some(LPARAM(&mut rc as *mut RECT as isize)),
        );
        let points = std::slice::from_raw_parts_mut(&mut rc as *mut RECT as *mut POINT, 2);
        MapWindowPoints(Some(hwnd_tab), Some(hwnd_parent), points);
    }
    Ok(Rect::from(rc))
}

pub(crate) fn redraw_now(hwnd_tab: HWND) -> DialogResult<()> {
    let redrawn =
        unsafe { RedrawWindow(Some(hwnd_tab), None, None, RDW_INVALIDATE | RDW_UPDATENOW) };
    if !redrawn.as_bool() {
        log::warn!("[TabStrip] RedrawWindow failed for {hwnd_tab:?}");
        return Err(DialogError::OperationFailed("tab strip redraw failed".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cursel_means_no_selection() {
        assert_eq!(selection_from_lresult(-1), None);
        assert_eq!(selection_from_lresult(0), Some(0));
        assert_eq!(selection_from_lresult(4), Some(4));
    }
}
