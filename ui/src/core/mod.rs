//! Platform-neutral plumbing shared by the views.

pub mod format;
pub mod platform;
pub mod storage;
pub mod timing;
