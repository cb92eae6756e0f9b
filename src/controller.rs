/*
 * Main dialog controller. `TabDialog` is the context object owned by the
 * dialog for its whole lifetime; the native dialog procedure translates each
 * message into a `DialogEvent` and hands it, together with a `DialogHost`
 * borrowed for the duration of the call, to `handle_event`.
 *
 * The host performs every native operation (tab insertion, page creation,
 * visibility, redraw, ending the dialog), which keeps the lifecycle rules
 * here independent of Win32 and testable on any platform.
 */

use crate::config::DialogConfig;
use crate::error::{DialogError, Result as DialogResult};
use crate::geometry::Rect;
use crate::page::{PageTemplate, TabPage};
use crate::types::{CommandId, DialogEvent, DialogResponse};

use std::fmt::Debug;

/// Native operations the controller needs from the window system.
pub trait DialogHost {
    type PageHandle: Copy + Debug;

    /// Appends a labelled item to the tab strip at `index`.
    fn insert_tab(&mut self, index: usize, label: &str) -> DialogResult<()>;

    /// The tab strip's display area, excluding the tab labels, in the
    /// coordinate space of the dialog that parents the pages.
    fn content_rect(&mut self) -> DialogResult<Rect>;

    /// Creates a hidden child page window from `template`.
    fn create_page(&mut self, template: &PageTemplate) -> DialogResult<Self::PageHandle>;

    fn place_page(&mut self, page: Self::PageHandle, bounds: Rect) -> DialogResult<()>;

    fn set_page_visible(&mut self, page: Self::PageHandle, visible: bool) -> DialogResult<()>;

    /// Index of the highlighted tab, or `None` if the strip has no selection.
    fn selected_tab(&mut self) -> DialogResult<Option<usize>>;

    /// Invalidates and synchronously repaints the tab strip.
    fn redraw_tab_strip(&mut self) -> DialogResult<()>;

    fn end_dialog(&mut self, result: CommandId) -> DialogResult<()>;

    /// Asks the host message loop to terminate.
    fn post_quit(&mut self, exit_code: i32);
}

#[derive(Debug)]
pub struct TabDialog<P> {
    templates: Vec<PageTemplate>,
    pages: Vec<TabPage<P>>,
    bounds: Option<Rect>,
    selected: Option<usize>,
    result: Option<CommandId>,
    quit_posted: bool,
}

impl<P: Copy + Debug> TabDialog<P> {
    pub fn new(config: &DialogConfig) -> DialogResult<Self> {
        config.validate()?;
        Ok(Self {
            templates: config.page_templates(),
            pages: Vec::with_capacity(config.tab_labels.len()),
            bounds: None,
            selected: None,
            result: None,
            quit_posted: false,
        })
    }

    /// Single dispatch point for every main-dialog event.
    pub fn handle_event<H>(&mut self, host: &mut H, event: DialogEvent) -> DialogResult<DialogResponse>
    where
        H: DialogHost<PageHandle = P>,
    {
        match event {
            DialogEvent::Initialize => {
                self.initialize(host)?;
                Ok(DialogResponse::DefaultFocus)
            }
            DialogEvent::SelectionChanged => self.on_selection_changed(host),
            DialogEvent::Command(command) => self.on_command(host, command),
            DialogEvent::Destroy => {
                self.on_destroy(host);
                Ok(DialogResponse::Handled)
            }
            DialogEvent::Unhandled => Ok(DialogResponse::NotHandled),
        }
    }

    fn initialize<H>(&mut self, host: &mut H) -> DialogResult<()>
    where
        H: DialogHost<PageHandle = P>,
    {
        if !self.pages.is_empty() {
            return Err(DialogError::OperationFailed(
                "tab dialog is already initialized".into(),
            ));
        }
        log::debug!(
            "[TabDialog] Initializing {} tabs",
            self.templates.len()
        );

        for (index, template) in self.templates.iter().enumerate() {
            host.insert_tab(index, template.label)?;
        }

        let bounds = host.content_rect()?;
        if bounds.is_empty() {
            log::warn!("[TabDialog] Tab content rectangle is empty: {bounds:?}");
        }
        self.bounds = Some(bounds);

        for (index, template) in self.templates.iter().enumerate() {
            let handle = host.create_page(template)?;
            host.place_page(handle, bounds)?;
            let visible = index == 0;
            host.set_page_visible(handle, visible)?;
            let mut page = TabPage::new(template.clone(), handle);
            page.set_visible(visible);
            self.pages.push(page);
        }
        self.selected = Some(0);

        host.redraw_tab_strip()?;
        log::debug!("[TabDialog] Pages created within {bounds:?}");
        Ok(())
    }

    fn on_selection_changed<H>(&mut self, host: &mut H) -> DialogResult<DialogResponse>
    where
        H: DialogHost<PageHandle = P>,
    {
        let Some(index) = host.selected_tab()? else {
            log::warn!("[TabDialog] Selection changed but the tab strip reports no selection");
            return Ok(DialogResponse::NotHandled);
        };
        self.show_page(host, index)?;
        host.redraw_tab_strip()?;
        Ok(DialogResponse::Handled)
    }

    fn show_page<H>(&mut self, host: &mut H, index: usize) -> DialogResult<()>
    where
        H: DialogHost<PageHandle = P>,
    {
        if index >= self.pages.len() {
            return Err(DialogError::InvalidSelection {
                index,
                page_count: self.pages.len(),
            });
        }
        log::debug!("[TabDialog] Showing page {index}");
        for (i, page) in self.pages.iter_mut().enumerate() {
            let visible = i == index;
            host.set_page_visible(page.handle(), visible)?;
            page.set_visible(visible);
        }
        self.selected = Some(index);
        Ok(())
    }

    fn on_command<H>(&mut self, host: &mut H, command: CommandId) -> DialogResult<DialogResponse>
    where
        H: DialogHost<PageHandle = P>,
    {
        if !command.closes_dialog() {
            log::trace!("[TabDialog] Ignoring command {}", command.raw());
            return Ok(DialogResponse::NotHandled);
        }
        log::debug!("[TabDialog] Closing dialog with {command:?}");
        host.end_dialog(command)?;
        self.result = Some(command);
        Ok(DialogResponse::Handled)
    }

    fn on_destroy<H>(&mut self, host: &mut H)
    where
        H: DialogHost<PageHandle = P>,
    {
        if self.quit_posted {
            log::debug!("[TabDialog] Destroy received again; quit already posted");
            return;
        }
        host.post_quit(0);
        self.quit_posted = true;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn pages(&self) -> &[TabPage<P>] {
        &self.pages
    }

    /// Indices of the pages currently shown.
    pub fn visible_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.is_visible())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn page_bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn tab_labels(&self) -> Vec<&'static str> {
        self.templates.iter().map(|t| t.label).collect()
    }

    /// The command the dialog was closed with, once closed.
    pub fn result(&self) -> Option<CommandId> {
        self.result
    }

    pub fn quit_posted(&self) -> bool {
        self.quit_posted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{IDD_TAB1, IDD_TAB4};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum HostCall {
        InsertTab(usize, String),
        ContentRect,
        CreatePage(i32),
        PlacePage(usize, Rect),
        SetVisible(usize, bool),
        SelectedTab,
        Redraw,
        EndDialog(CommandId),
        PostQuit(i32),
    }

    /// Test double that records every native operation and tracks the tab
    /// strip and page state the way the window system would.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub calls: Vec<HostCall>,
        pub tabs: Vec<String>,
        pub selection: Option<usize>,
        pub content: Rect,
        pub page_visible: Vec<bool>,
        pub page_bounds: Vec<Rect>,
        pub quit_count: usize,
        pub fail_create_page: bool,
    }

    impl RecordingHost {
        pub(crate) fn new() -> Self {
            Self {
                content: Rect::new(11, 33, 311, 263),
                ..Self::default()
            }
        }

        /// Simulates the user clicking tab `index`.
        pub(crate) fn click_tab(&mut self, index: usize) {
            self.selection = Some(index);
        }
    }

    impl DialogHost for RecordingHost {
        type PageHandle = usize;

        fn insert_tab(&mut self, index: usize, label: &str) -> DialogResult<()> {
            self.calls.push(HostCall::InsertTab(index, label.to_string()));
            self.tabs.insert(index, label.to_string());
            if self.selection.is_none() {
                self.selection = Some(0);
            }
            Ok(())
        }

        fn content_rect(&mut self) -> DialogResult<Rect> {
            self.calls.push(HostCall::ContentRect);
            Ok(self.content)
        }

        fn create_page(&mut self, template: &PageTemplate) -> DialogResult<usize> {
            self.calls.push(HostCall::CreatePage(template.template_id.raw()));
            if self.fail_create_page {
                return Err(DialogError::OperationFailed("create page".into()));
            }
            self.page_visible.push(false);
            self.page_bounds.push(Rect::default());
            Ok(self.page_visible.len() - 1)
        }

        fn place_page(&mut self, page: usize, bounds: Rect) -> DialogResult<()> {
            self.calls.push(HostCall::PlacePage(page, bounds));
            self.page_bounds[page] = bounds;
            Ok(())
        }

        fn set_page_visible(&mut self, page: usize, visible: bool) -> DialogResult<()> {
            self.calls.push(HostCall::SetVisible(page, visible));
            self.page_visible[page] = visible;
            Ok(())
        }

        fn selected_tab(&mut self) -> DialogResult<Option<usize>> {
            self.calls.push(HostCall::SelectedTab);
            Ok(self.selection)
        }

        fn redraw_tab_strip(&mut self) -> DialogResult<()> {
            self.calls.push(HostCall::Redraw);
            Ok(())
        }

        fn end_dialog(&mut self, result: CommandId) -> DialogResult<()> {
            self.calls.push(HostCall::EndDialog(result));
            Ok(())
        }

        fn post_quit(&mut self, exit_code: i32) {
            self.calls.push(HostCall::PostQuit(exit_code));
            self.quit_count += 1;
        }
    }

    fn initialized() -> (TabDialog<usize>, RecordingHost) {
        let mut host = RecordingHost::new();
        let mut dialog = TabDialog::new(&DialogConfig::default()).expect("valid config");
        let response = dialog
            .handle_event(&mut host, DialogEvent::Initialize)
            .expect("initialize");
        assert_eq!(response, DialogResponse::DefaultFocus);
        (dialog, host)
    }

    fn visible_on_host(host: &RecordingHost) -> Vec<usize> {
        host.page_visible
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn initialize_shows_only_first_page() {
        let (dialog, host) = initialized();
        assert_eq!(dialog.visible_pages(), vec![0]);
        assert_eq!(visible_on_host(&host), vec![0]);
        assert_eq!(dialog.selected_index(), Some(0));
    }

    #[test]
    fn initialize_inserts_labels_in_fixed_order() {
        let (dialog, host) = initialized();
        assert_eq!(host.tabs, vec!["ONE", "TWO", "THREE", "FOUR", "FIVE"]);
        assert_eq!(dialog.tab_labels(), vec!["ONE", "TWO", "THREE", "FOUR", "FIVE"]);
    }

    #[test]
    fn initialize_creates_pages_in_tab_order_within_shared_bounds() {
        let (dialog, host) = initialized();
        let created: Vec<i32> = host
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::CreatePage(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(created, vec![102, 103, 104, 105, 106]);
        assert!(host.page_bounds.iter().all(|rc| *rc == host.content));
        assert_eq!(dialog.page_bounds(), Some(host.content));
        assert_eq!(dialog.pages()[0].template().template_id, IDD_TAB1);
    }

    #[test]
    fn initialize_inserts_tabs_before_measuring_and_redraws_last() {
        let (_, host) = initialized();
        let measure_at = host
            .calls
            .iter()
            .position(|c| *c == HostCall::ContentRect)
            .expect("content rect queried");
        assert_eq!(measure_at, 5);
        assert!(host.calls[..5]
            .iter()
            .all(|c| matches!(c, HostCall::InsertTab(_, _))));
        assert_eq!(host.calls.last(), Some(&HostCall::Redraw));
    }

    #[test]
    fn initialize_twice_is_rejected() {
        let (mut dialog, mut host) = initialized();
        let result = dialog.handle_event(&mut host, DialogEvent::Initialize);
        assert!(matches!(result, Err(DialogError::OperationFailed(_))));
        assert_eq!(dialog.pages().len(), 5);
    }

    #[test]
    fn page_creation_failure_propagates() {
        let mut host = RecordingHost {
            fail_create_page: true,
            ..RecordingHost::new()
        };
        let mut dialog: TabDialog<usize> = TabDialog::new(&DialogConfig::default()).unwrap();
        let result = dialog.handle_event(&mut host, DialogEvent::Initialize);
        assert!(result.is_err());
        assert!(dialog.pages().is_empty());
    }

    #[test]
    fn selecting_each_tab_shows_exactly_that_page() {
        let (mut dialog, mut host) = initialized();
        for index in 0..5 {
            host.click_tab(index);
            let response = dialog
                .handle_event(&mut host, DialogEvent::SelectionChanged)
                .unwrap();
            assert_eq!(response, DialogResponse::Handled);
            assert_eq!(dialog.visible_pages(), vec![index]);
            assert_eq!(visible_on_host(&host), vec![index]);
            assert_eq!(host.calls.last(), Some(&HostCall::Redraw));
        }
    }

    #[test]
    fn labels_stay_in_order_after_selection_history() {
        let (mut dialog, mut host) = initialized();
        for index in [4, 1, 3, 0, 2] {
            host.click_tab(index);
            dialog
                .handle_event(&mut host, DialogEvent::SelectionChanged)
                .unwrap();
        }
        assert_eq!(host.tabs, vec!["ONE", "TWO", "THREE", "FOUR", "FIVE"]);
        assert_eq!(dialog.tab_labels(), vec!["ONE", "TWO", "THREE", "FOUR", "FIVE"]);
    }

    #[test]
    fn out_of_range_selection_leaves_pages_untouched() {
        let (mut dialog, mut host) = initialized();
        host.click_tab(9);
        let result = dialog.handle_event(&mut host, DialogEvent::SelectionChanged);
        assert!(matches!(
            result,
            Err(DialogError::InvalidSelection {
                index: 9,
                page_count: 5
            })
        ));
        assert_eq!(dialog.visible_pages(), vec![0]);
        assert_eq!(visible_on_host(&host), vec![0]);
    }

    #[test]
    fn missing_selection_is_not_handled() {
        let (mut dialog, mut host) = initialized();
        host.selection = None;
        let response = dialog
            .handle_event(&mut host, DialogEvent::SelectionChanged)
            .unwrap();
        assert_eq!(response, DialogResponse::NotHandled);
        assert_eq!(dialog.visible_pages(), vec![0]);
    }

    #[test]
    fn ok_and_cancel_end_the_dialog_with_their_identifier() {
        for command in [CommandId::Ok, CommandId::Cancel] {
            let (mut dialog, mut host) = initialized();
            let response = dialog
                .handle_event(&mut host, DialogEvent::Command(command))
                .unwrap();
            assert_eq!(response, DialogResponse::Handled);
            assert_eq!(host.calls.last(), Some(&HostCall::EndDialog(command)));
            assert_eq!(dialog.result(), Some(command));
        }
    }

    #[test]
    fn unrelated_command_and_notification_change_nothing() {
        let (mut dialog, mut host) = initialized();
        let before = host.calls.len();
        assert_eq!(
            dialog
                .handle_event(&mut host, DialogEvent::Command(CommandId::Other(1001)))
                .unwrap(),
            DialogResponse::NotHandled
        );
        assert_eq!(
            dialog
                .handle_event(&mut host, DialogEvent::Unhandled)
                .unwrap(),
            DialogResponse::NotHandled
        );
        assert_eq!(host.calls.len(), before);
        assert_eq!(dialog.result(), None);
    }

    #[test]
    fn destroy_posts_quit_exactly_once() {
        let (mut dialog, mut host) = initialized();
        dialog.handle_event(&mut host, DialogEvent::Destroy).unwrap();
        dialog.handle_event(&mut host, DialogEvent::Destroy).unwrap();
        assert_eq!(host.quit_count, 1);
        assert!(dialog.quit_posted());
        assert!(host.calls.contains(&HostCall::PostQuit(0)));
    }

    #[test]
    fn select_twice_then_cancel_scenario() {
        let (mut dialog, mut host) = initialized();
        assert_eq!(dialog.visible_pages(), vec![0]);

        host.click_tab(3);
        dialog
            .handle_event(&mut host, DialogEvent::SelectionChanged)
            .unwrap();
        assert_eq!(dialog.visible_pages(), vec![3]);
        assert_eq!(dialog.pages()[3].template().template_id, IDD_TAB4);

        dialog
            .handle_event(&mut host, DialogEvent::SelectionChanged)
            .unwrap();
        assert_eq!(dialog.visible_pages(), vec![3]);
        assert_eq!(visible_on_host(&host), vec![3]);
        assert_eq!(dialog.selected_index(), Some(3));

        dialog
            .handle_event(&mut host, DialogEvent::Command(CommandId::Cancel))
            .unwrap();
        dialog.handle_event(&mut host, DialogEvent::Destroy).unwrap();
        assert_eq!(dialog.result(), Some(CommandId::Cancel));
        assert_eq!(host.quit_count, 1);
    }
}
