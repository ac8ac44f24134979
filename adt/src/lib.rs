pub mod build;
pub mod dispatch;
pub mod format;
pub mod types;
pub mod values;
