/*
 * Compile-time configuration of the dialog: caption, font, tab labels, page
 * templates and geometry in dialog units. `DialogConfig::default()` is the
 * fixed five-tab layout; callers may override fields before running the
 * dialog, and `validate` rejects combinations the controller cannot honor.
 */

use crate::error::{DialogError, Result as DialogResult};
use crate::page::PageTemplate;
use crate::resource::{PAGE_TEMPLATE_IDS, TAB_LABELS};
use crate::types::ControlId;

/// Position and size in dialog units, as stored in a dialog template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogUnits {
    pub x: i16,
    pub y: i16,
    pub cx: i16,
    pub cy: i16,
}

impl DialogUnits {
    pub const fn new(x: i16, y: i16, cx: i16, cy: i16) -> Self {
        Self { x, y, cx, cy }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogGeometry {
    pub dialog: DialogUnits,
    pub tab_strip: DialogUnits,
    pub ok_button: DialogUnits,
    pub cancel_button: DialogUnits,
    /// Initial page size; pages are resized to the tab content rectangle.
    pub page: DialogUnits,
}

impl Default for DialogGeometry {
    fn default() -> Self {
        Self {
            dialog: DialogUnits::new(0, 0, 320, 200),
            tab_strip: DialogUnits::new(7, 7, 306, 162),
            ok_button: DialogUnits::new(209, 177, 50, 14),
            cancel_button: DialogUnits::new(263, 177, 50, 14),
            page: DialogUnits::new(0, 0, 300, 140),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: String,
    pub font_face: String,
    pub font_point_size: u16,
    pub tab_labels: Vec<&'static str>,
    pub page_template_ids: Vec<ControlId>,
    pub geometry: DialogGeometry,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: "Tab Control".to_string(),
            font_face: "MS Shell Dlg".to_string(),
            font_point_size: 8,
            tab_labels: TAB_LABELS.to_vec(),
            page_template_ids: PAGE_TEMPLATE_IDS.to_vec(),
            geometry: DialogGeometry::default(),
        }
    }
}

impl DialogConfig {
    pub fn validate(&self) -> DialogResult<()> {
        if self.tab_labels.is_empty() {
            return Err(DialogError::InitializationFailed(
                "dialog needs at least one tab".into(),
            ));
        }
        if self.tab_labels.len() != self.page_template_ids.len() {
            return Err(DialogError::InitializationFailed(format!(
                "{} tab labels but {} page templates",
                self.tab_labels.len(),
                self.page_template_ids.len()
            )));
        }
        Ok(())
    }

    /// One template per tab, in tab insertion order.
    pub fn page_templates(&self) -> Vec<PageTemplate> {
        self.tab_labels
            .iter()
            .zip(self.page_template_ids.iter())
            .map(|(label, id)| PageTemplate::new(*id, label))
            .collect()
    }
}
