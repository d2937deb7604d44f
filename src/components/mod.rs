pub(crate) mod album;
pub(crate) mod ui;
