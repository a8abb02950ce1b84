pub mod confirm;
pub mod navigation;
