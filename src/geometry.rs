/*
 * Portable rectangle used for the shared page bounds. Mirrors the Win32 RECT
 * layout (exclusive right/bottom edges) so conversion is a field copy.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Translates the rectangle, e.g. from tab-strip client coordinates into
    /// the coordinates of the dialog that owns both the strip and the pages.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

#[cfg(target_os = "windows")]
impl From<windows::Win32::Foundation::RECT> for Rect {
    fn from(rc: windows::Win32::Foundation::RECT) -> Self {
        Self::new(rc.left, rc.top, rc.right, rc.bottom)
    }
}

#[cfg(target_os = "windows")]
impl From<Rect> for windows::Win32::Foundation::RECT {
    fn from(rc: Rect) -> Self {
        windows::Win32::Foundation::RECT {
            left: rc.left,
            top: rc.top,
            right: rc.right,
            bottom: rc.bottom,
        }
    }
}
