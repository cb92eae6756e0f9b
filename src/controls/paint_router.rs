use crate::types::{PageEvent, PaintTarget};
use log::trace;
use windows::Win32::UI::WindowsAndMessaging::{
    WM_CTLCOLORBTN, WM_CTLCOLORDLG, WM_CTLCOLOREDIT, WM_CTLCOLORSTATIC,
};

/// Translates a page-window message into a page event. Only the
/// `WM_CTLCOLOR*` family is a paint request; everything else is unhandled.
pub(crate) fn resolve_paint_route(msg: u32) -> PageEvent {
    let target = match msg {
        WM_CTLCOLORSTATIC => PaintTarget::StaticText,
        WM_CTLCOLOREDIT => PaintTarget::Edit,
        WM_CTLCOLORBTN => PaintTarget::Button,
        WM_CTLCOLORDLG => PaintTarget::Other,
        _ => return PageEvent::Unhandled,
    };
    trace!("[Paint] msg {msg:#06x} routed as {target:?}");
    PageEvent::BackgroundPaint(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{WM_COMMAND, WM_PAINT};

    #[test]
    fn static_color_message_routes_to_static_text() {
        assert_eq!(
            resolve_paint_route(WM_CTLCOLORSTATIC),
            PageEvent::BackgroundPaint(PaintTarget::StaticText)
        );
    }

    #[test]
    fn edit_and_button_route_to_their_targets() {
        assert_eq!(
            resolve_paint_route(WM_CTLCOLOREDIT),
            PageEvent::BackgroundPaint(PaintTarget::Edit)
        );
        assert_eq!(
            resolve_paint_route(WM_CTLCOLORBTN),
            PageEvent::BackgroundPaint(PaintTarget::Button)
        );
    }

    #[test]
    fn non_color_messages_are_unhandled() {
        assert_eq!(resolve_paint_route(WM_PAINT), PageEvent::Unhandled);
        assert_eq!(resolve_paint_route(WM_COMMAND), PageEvent::Unhandled);
    }
}
