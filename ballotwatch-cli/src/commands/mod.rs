pub mod add;
pub mod export;
pub mod list;
pub mod remove;
pub mod reset;
pub mod watch;
