pub(crate) mod entry;
pub(crate) mod history;
pub(crate) mod sidebar;
pub(crate) mod summary;
