pub mod api;
pub mod dispatch;
pub mod init;
pub mod settings;
pub mod ui;

pub use dispatch::dispatch;
