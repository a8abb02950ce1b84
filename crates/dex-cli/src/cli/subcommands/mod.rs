pub mod lock;
pub mod quarantine;

pub use lock::LockCommands;
pub use quarantine::QuarantineCommands;
