/*
 * The tab page abstraction. Every page is the same kind of window built from a
 * different template; one `TabPage` value exists per tab and a single dialog
 * procedure serves all of them. The only behaviour a page has of its own is
 * answering background-paint requests from its static text so labels draw
 * over the tab control's themed background instead of a solid rectangle.
 */

use crate::types::{ControlId, PageEvent, PageResponse, PaintTarget};

/// Description of one page dialog: which template it stands for and the text
/// it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub template_id: ControlId,
    pub label: &'static str,
    pub caption: String,
    pub body: String,
}

impl PageTemplate {
    pub fn new(template_id: ControlId, label: &'static str) -> Self {
        Self {
            template_id,
            label,
            caption: format!("Page {label}"),
            body: format!("This is the content of tab {label}."),
        }
    }
}

/// A created page window. `H` is the host's native handle type.
#[derive(Debug, Clone)]
pub struct TabPage<H> {
    template: PageTemplate,
    handle: H,
    visible: bool,
}

impl<H: Copy> TabPage<H> {
    pub(crate) fn new(template: PageTemplate, handle: H) -> Self {
        Self {
            template,
            handle,
            visible: false,
        }
    }

    pub fn template(&self) -> &PageTemplate {
        &self.template
    }

    pub fn handle(&self) -> H {
        self.handle
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Page dispatch, shared by every page window.
pub fn handle_page_event(event: PageEvent) -> PageResponse {
    match event {
        PageEvent::BackgroundPaint(PaintTarget::StaticText) => {
            log::trace!("[Page] Static control background requested; painting transparent");
            PageResponse::TransparentBackground
        }
        _ => PageResponse::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::IDD_TAB3;

    #[test]
    fn static_text_background_is_transparent() {
        assert_eq!(
            handle_page_event(PageEvent::BackgroundPaint(PaintTarget::StaticText)),
            PageResponse::TransparentBackground
        );
    }

    #[test]
    fn other_paint_targets_and_events_pass_through() {
        for target in [PaintTarget::Edit, PaintTarget::Button, PaintTarget::Other] {
            assert_eq!(
                handle_page_event(PageEvent::BackgroundPaint(target)),
                PageResponse::NotHandled
            );
        }
        assert_eq!(
            handle_page_event(PageEvent::Unhandled),
            PageResponse::NotHandled
        );
    }

    #[test]
    fn template_text_names_the_tab() {
        let template = PageTemplate::new(IDD_TAB3, "THREE");
        assert_eq!(template.caption, "Page THREE");
        assert!(template.body.contains("THREE"));
    }

    #[test]
    fn new_page_starts_hidden() {
        let page = TabPage::new(PageTemplate::new(IDD_TAB3, "THREE"), 7usize);
        assert!(!page.is_visible());
        assert_eq!(page.handle(), 7);
    }
}
