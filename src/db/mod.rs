pub mod logs;
pub mod oplog;

pub use logs::LogsDatabase;
