/*
 * Resource identifier table. The dialogs are built from in-memory templates,
 * so these values only need to be unique within their dialog.
 */

use crate::types::ControlId;

pub const NUM_TABS: usize = 5;

pub const IDOK: i32 = 1;
pub const IDCANCEL: i32 = 2;

pub const IDD_MAIN_DIALOG: ControlId = ControlId::new(101);
pub const IDD_TAB1: ControlId = ControlId::new(102);
pub const IDD_TAB2: ControlId = ControlId::new(103);
pub const IDD_TAB3: ControlId = ControlId::new(104);
pub const IDD_TAB4: ControlId = ControlId::new(105);
pub const IDD_TAB5: ControlId = ControlId::new(106);

pub const IDC_TAB_STRIP: ControlId = ControlId::new(1001);
pub const IDC_PAGE_GROUP: ControlId = ControlId::new(1101);
pub const IDC_PAGE_TEXT: ControlId = ControlId::new(1102);

pub const TAB_LABELS: [&str; NUM_TABS] = ["ONE", "TWO", "THREE", "FOUR", "FIVE"];

pub const PAGE_TEMPLATE_IDS: [ControlId; NUM_TABS] =
    [IDD_TAB1, IDD_TAB2, IDD_TAB3, IDD_TAB4, IDD_TAB5];
