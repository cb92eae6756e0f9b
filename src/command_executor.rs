/*
 * Executes the native side of every operation the `TabDialog` controller asks
 * for. `Win32DialogHost` is a short-lived view over the main dialog's HWND,
 * created for each dispatched message; it holds no state of its own beyond the
 * handles needed to reach the tab strip and to create pages.
 *
 * Control-specific calls are delegated to `controls::tab_strip_handler` and
 * `controls::page_handler`.
 */

use crate::config::DialogConfig;
use crate::controller::DialogHost;
use crate::controls::{page_handler, tab_strip_handler};
use crate::dialog_template::page_dialog_template;
use crate::error::{DialogError, Result as DialogResult};
use crate::geometry::Rect;
use crate::page::PageTemplate;
use crate::resource::IDC_TAB_STRIP;
use crate::types::CommandId;

use windows::Win32::{
    Foundation::{HINSTANCE, HWND},
    UI::WindowsAndMessaging::{EndDialog, GetDlgItem, PostQuitMessage},
};

pub(crate) struct Win32DialogHost<'a> {
    hwnd_dialog: HWND,
    h_instance: HINSTANCE,
    config: &'a DialogConfig,
}

impl<'a> Win32DialogHost<'a> {
    pub(crate) fn new(hwnd_dialog: HWND, h_instance: HINSTANCE, config: &'a DialogConfig) -> Self {
        Self {
            hwnd_dialog,
            h_instance,
            config,
        }
    }

    fn tab_strip(&self) -> DialogResult<HWND> {
        unsafe { GetDlgItem(Some(self.hwnd_dialog), IDC_TAB_STRIP.raw()) }.map_err(|err| {
            log::error!(
                "[TabDialog] Tab strip {} not found in {:?}: {err:?}",
                IDC_TAB_STRIP.raw(),
                self.hwnd_dialog
            );
            DialogError::InvalidHandle(format!(
                "tab strip control {} not found",
                IDC_TAB_STRIP.raw()
            ))
        })
    }
}

impl DialogHost for Win32DialogHost<'_> {
    type PageHandle = HWND;

    fn insert_tab(&mut self, index: usize, label: &str) -> DialogResult<()> {
        tab_strip_handler::insert_tab_item(self.tab_strip()?, index, label)
    }

    fn content_rect(&mut self) -> DialogResult<Rect> {
        tab_strip_handler::content_rect_in_parent(self.tab_strip()?, self.hwnd_dialog)
    }

    fn create_page(&mut self, template: &PageTemplate) -> DialogResult<HWND> {
        log::debug!(
            "CommandExecutor: creating page {} ('{}')",
            template.template_id.raw(),
            template.label
        );
        let native_template = page_dialog_template(self.config, template);
        page_handler::create_page_window(self.h_instance, self.hwnd_dialog, &native_template)
    }

    fn place_page(&mut self, page: HWND, bounds: Rect) -> DialogResult<()> {
        page_handler::place_page_window(page, bounds)
    }

    fn set_page_visible(&mut self, page: HWND, visible: bool) -> DialogResult<()> {
        page_handler::set_page_window_visible(page, visible);
        Ok(())
    }

    fn selected_tab(&mut self) -> DialogResult<Option<usize>> {
        Ok(tab_strip_handler::current_selection(self.tab_strip()?))
    }

    fn redraw_tab_strip(&mut self) -> DialogResult<()> {
        tab_strip_handler::redraw_now(self.tab_strip()?)
    }

    fn end_dialog(&mut self, result: CommandId) -> DialogResult<()> {
        log::debug!("CommandExecutor: EndDialog with {}", result.raw());
        unsafe { EndDialog(self.hwnd_dialog, result.raw() as isize)? };
        Ok(())
    }

    /*
     * Posts WM_QUIT so any message loop still running on this thread stops
     * once the dialog is gone.
     */
    fn post_quit(&mut self, exit_code: i32) {
        log::debug!("CommandExecutor: Posting WM_QUIT({exit_code})");
        unsafe { PostQuitMessage(exit_code) };
    }
}
