pub(crate) mod page_handler;
pub(crate) mod paint_router;
pub(crate) mod tab_strip_handler;
