pub mod create;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod list;
pub mod lock;
pub mod open;
pub mod quarantine;
pub mod search;
pub mod shared;
pub mod show;
pub mod toggle_corruption;
