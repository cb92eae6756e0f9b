/*
 * Main dialog procedure and the translation of native dialog messages into
 * `DialogEvent`s. The per-dialog `DialogContext` arrives as the init parameter
 * of `WM_INITDIALOG`, is parked in GWLP_USERDATA for the rest of the dialog's
 * life and detached again on WM_NCDESTROY; ownership stays with `app.rs`.
 *
 * Page windows have their own procedure in `controls::page_handler`.
 */
use super::{
    command_executor::Win32DialogHost,
    config::DialogConfig,
    controller::TabDialog,
    resource::IDC_TAB_STRIP,
    types::{CommandId, DialogEvent, DialogResponse},
};

use windows::Win32::{
    Foundation::{HINSTANCE, HWND, LPARAM, WPARAM},
    UI::Controls::{NMHDR, TCN_SELCHANGE},
    UI::WindowsAndMessaging::{
        GWLP_USERDATA, GetWindowLongPtrW, SetWindowLongPtrW, WM_COMMAND, WM_DESTROY,
        WM_INITDIALOG, WM_NCDESTROY, WM_NOTIFY,
    },
};

const TRUE_RESULT: isize = 1;
const FALSE_RESULT: isize = 0;

/// Everything the main dialog needs while it is alive.
pub(crate) struct DialogContext {
    pub(crate) controller: TabDialog<HWND>,
    pub(crate) config: DialogConfig,
    pub(crate) h_instance: HINSTANCE,
}

#[inline]
pub(crate) fn loword_from_wparam(wparam: WPARAM) -> i32 {
    (wparam.0 & 0xFFFF) as i32
}
#[inline]
pub(crate) fn highord_from_wparam(wparam: WPARAM) -> i32 {
    ((wparam.0 >> 16) & 0xFFFF) as i32
}

/// Only `TCN_SELCHANGE` from the tab strip's own identifier is a page switch.
pub(crate) fn translate_notify(id_from: usize, code: u32) -> DialogEvent {
    if id_from == IDC_TAB_STRIP.raw() as usize && code == TCN_SELCHANGE {
        DialogEvent::SelectionChanged
    } else {
        DialogEvent::Unhandled
    }
}

fn translate_message(msg: u32, wparam: WPARAM, lparam: LPARAM) -> DialogEvent {
    match msg {
        WM_INITDIALOG => DialogEvent::Initialize,
        WM_NOTIFY => {
            let nmhdr_ptr = lparam.0 as *const NMHDR;
            if nmhdr_ptr.is_null() {
                log::warn!("WM_NOTIFY received with null NMHDR pointer. Ignoring.");
                return DialogEvent::Unhandled;
            }
            let nmhdr = unsafe { &*nmhdr_ptr };
            translate_notify(nmhdr.idFrom, nmhdr.code)
        }
        WM_COMMAND => {
            log::trace!(
                "WM_COMMAND id {} code {}",
                loword_from_wparam(wparam),
                highord_from_wparam(wparam)
            );
            DialogEvent::Command(CommandId::from_raw(loword_from_wparam(wparam)))
        }
        WM_DESTROY => DialogEvent::Destroy,
        _ => DialogEvent::Unhandled,
    }
}

fn response_to_result(response: DialogResponse) -> isize {
    match response {
        DialogResponse::DefaultFocus | DialogResponse::Handled => TRUE_RESULT,
        DialogResponse::NotHandled => FALSE_RESULT,
    }
}

/*
 * Dialog procedure of the main dialog. Messages that do not translate into an
 * event return before the context is touched, so messages sent re-entrantly
 * while a handler runs (paint, color and unrelated notifications) never
 * alias the context borrowed by that handler.
 */
pub(crate) unsafe extern "system" fn main_dialog_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> isize {
    if msg == WM_INITDIALOG {
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, lparam.0) };
    }

    let context_ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *mut DialogContext;

    if msg == WM_NCDESTROY {
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) };
        return FALSE_RESULT;
    }

    let event = translate_message(msg, wparam, lparam);
    if event == DialogEvent::Unhandled || context_ptr.is_null() {
        return FALSE_RESULT;
    }

    let context = unsafe { &mut *context_ptr };
    let mut host = Win32DialogHost::new(hwnd, context.h_instance, &context.config);
    match context.controller.handle_event(&mut host, event) {
        Ok(response) => response_to_result(response),
        Err(err) => {
            log::error!("[TabDialog] {event:?} failed: {err}");
            FALSE_RESULT
        }
    }
}
