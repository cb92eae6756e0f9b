/*
 * Builds in-memory dialog templates (DLGTEMPLATE followed by DLGITEMTEMPLATE
 * entries) for the main dialog and the five pages. The layout is the one the
 * resource compiler emits for a DIALOG statement: a header, optional font
 * block, then one DWORD-aligned record per control.
 *
 * The builder is platform independent; the Win32 layer only hands the
 * finished buffer to `DialogBoxIndirectParamW` / `CreateDialogIndirectParamW`.
 */

use crate::config::{DialogConfig, DialogUnits};
use crate::page::PageTemplate;
use crate::resource::{IDC_PAGE_GROUP, IDC_PAGE_TEXT, IDC_TAB_STRIP, IDCANCEL, IDOK};
use crate::types::ControlId;

/// Raw style bits, kept local so the builder compiles everywhere.
pub mod style {
    pub const WS_POPUP: u32 = 0x8000_0000;
    pub const WS_CHILD: u32 = 0x4000_0000;
    pub const WS_VISIBLE: u32 = 0x1000_0000;
    pub const WS_CLIPSIBLINGS: u32 = 0x0400_0000;
    pub const WS_CAPTION: u32 = 0x00C0_0000;
    pub const WS_SYSMENU: u32 = 0x0008_0000;
    pub const WS_GROUP: u32 = 0x0002_0000;
    pub const WS_TABSTOP: u32 = 0x0001_0000;

    pub const DS_SETFONT: u32 = 0x0040;
    pub const DS_MODALFRAME: u32 = 0x0080;
    pub const DS_CONTROL: u32 = 0x0400;
    pub const DS_CENTER: u32 = 0x0800;

    pub const BS_PUSHBUTTON: u32 = 0x0000;
    pub const BS_DEFPUSHBUTTON: u32 = 0x0001;
    pub const BS_GROUPBOX: u32 = 0x0007;

    pub const SS_LEFT: u32 = 0x0000;

    pub const WS_EX_CONTROLPARENT: u32 = 0x0001_0000;
}

/// Class of a dialog item: one of the predefined atoms or a registered name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    Button,
    Static,
    Named(&'static str),
}

pub const TAB_CONTROL_CLASS: &str = "SysTabControl32";

impl ItemClass {
    fn atom(self) -> Option<u16> {
        match self {
            ItemClass::Button => Some(0x0080),
            ItemClass::Static => Some(0x0082),
            ItemClass::Named(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogItem {
    pub class: ItemClass,
    pub id: ControlId,
    pub text: String,
    pub style: u32,
    pub ex_style: u32,
    pub bounds: DialogUnits,
}

/// A finished template. Storage is `u32` so the buffer start is DWORD aligned.
#[derive(Debug, Clone)]
pub struct DialogTemplate {
    words: Vec<u32>,
    byte_len: usize,
    item_count: u16,
}

impl DialogTemplate {
    pub fn as_ptr(&self) -> *const u32 {
        self.words.as_ptr()
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn item_count(&self) -> u16 {
        self.item_count
    }

    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        bytes.truncate(self.byte_len);
        bytes
    }
}

#[derive(Debug, Clone)]
pub struct DialogTemplateBuilder {
    style: u32,
    ex_style: u32,
    bounds: DialogUnits,
    title: String,
    font: Option<(u16, String)>,
    items: Vec<DialogItem>,
}

impl DialogTemplateBuilder {
    pub fn new(style: u32, bounds: DialogUnits) -> Self {
        Self {
            style,
            ex_style: 0,
            bounds,
            title: String::new(),
            font: None,
            items: Vec::new(),
        }
    }

    pub fn ex_style(mut self, ex_style: u32) -> Self {
        self.ex_style = ex_style;
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the dialog font; adds `DS_SETFONT` to the style.
    pub fn font(mut self, point_size: u16, face: &str) -> Self {
        self.style |= style::DS_SETFONT;
        self.font = Some((point_size, face.to_string()));
        self
    }

    pub fn item(mut self, item: DialogItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn build(&self) -> DialogTemplate {
        let mut buf: Vec<u8> = Vec::with_capacity(512);
        let item_count = self.items.len() as u16;

        push_u32(&mut buf, self.style);
        push_u32(&mut buf, self.ex_style);
        push_u16(&mut buf, item_count);
        push_units(&mut buf, self.bounds);
        push_u16(&mut buf, 0); // no menu
        push_u16(&mut buf, 0); // predefined dialog class
        push_wide(&mut buf, &self.title);
        if let Some((point_size, face)) = &self.font {
            push_u16(&mut buf, *point_size);
            push_wide(&mut buf, face);
        }

        for item in &self.items {
            align_dword(&mut buf);
            push_u32(&mut buf, item.style);
            push_u32(&mut buf, item.ex_style);
            push_units(&mut buf, item.bounds);
            push_u16(&mut buf, item.id.raw() as u16);
            match (item.class, item.class.atom()) {
                (ItemClass::Named(name), _) => push_wide(&mut buf, name),
                (_, Some(atom)) => {
                    push_u16(&mut buf, 0xFFFF);
                    push_u16(&mut buf, atom);
                }
                (_, None) => push_u16(&mut buf, 0),
            }
            push_wide(&mut buf, &item.text);
            push_u16(&mut buf, 0); // no creation data
        }

        let byte_len = buf.len();
        align_dword(&mut buf);
        let words = buf
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        DialogTemplate {
            words,
            byte_len,
            item_count,
        }
    }
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn push_units(buf: &mut Vec<u8>, units: DialogUnits) {
    for v in [units.x, units.y, units.cx, units.cy] {
        buf.extend_from_slice(&v.to_le_bytes());
    }
}

fn push_wide(buf: &mut Vec<u8>, text: &str) {
    for unit in text.encode_utf16() {
        push_u16(buf, unit);
    }
    push_u16(buf, 0);
}

fn align_dword(buf: &mut Vec<u8>) {
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

/// Template of the modal main dialog: the tab strip plus OK and Cancel.
pub fn main_dialog_template(config: &DialogConfig) -> DialogTemplate {
    let geometry = &config.geometry;
    DialogTemplateBuilder::new(
        style::WS_POPUP
            | style::WS_CAPTION
            | style::WS_SYSMENU
            | style::DS_MODALFRAME
            | style::DS_CENTER,
        geometry.dialog,
    )
    .title(&config.title)
    .font(config.font_point_size, &config.font_face)
    .item(DialogItem {
        class: ItemClass::Named(TAB_CONTROL_CLASS),
        id: IDC_TAB_STRIP,
        text: String::new(),
        style: style::WS_CHILD | style::WS_VISIBLE | style::WS_TABSTOP | style::WS_CLIPSIBLINGS,
        ex_style: 0,
        bounds: geometry.tab_strip,
    })
    .item(DialogItem {
        class: ItemClass::Button,
        id: ControlId::new(IDOK),
        text: "OK".to_string(),
        style: style::WS_CHILD
            | style::WS_VISIBLE
            | style::WS_TABSTOP
            | style::WS_GROUP
            | style::BS_DEFPUSHBUTTON,
        ex_style: 0,
        bounds: geometry.ok_button,
    })
    .item(DialogItem {
        class: ItemClass::Button,
        id: ControlId::new(IDCANCEL),
        text: "Cancel".to_string(),
        style: style::WS_CHILD | style::WS_VISIBLE | style::WS_TABSTOP | style::BS_PUSHBUTTON,
        ex_style: 0,
        bounds: geometry.cancel_button,
    })
    .build()
}

/// Template of one page: a hidden child dialog with a group box and a label.
pub fn page_dialog_template(config: &DialogConfig, page: &PageTemplate) -> DialogTemplate {
    let size = config.geometry.page;
    let inner = DialogUnits::new(7, 7, size.cx - 14, size.cy - 14);
    DialogTemplateBuilder::new(style::WS_CHILD | style::DS_CONTROL, size)
        .ex_style(style::WS_EX_CONTROLPARENT)
        .font(config.font_point_size, &config.font_face)
        .item(DialogItem {
            class: ItemClass::Button,
            id: IDC_PAGE_GROUP,
            text: page.caption.clone(),
            style: style::WS_CHILD | style::WS_VISIBLE | style::BS_GROUPBOX,
            ex_style: 0,
            bounds: inner,
        })
        .item(DialogItem {
            class: ItemClass::Static,
            id: IDC_PAGE_TEXT,
            text: page.body.clone(),
            style: style::WS_CHILD | style::WS_VISIBLE | style::SS_LEFT,
            ex_style: 0,
            bounds: DialogUnits::new(inner.x + 8, inner.y + 16, inner.cx - 16, 24),
        })
        .build()
}
