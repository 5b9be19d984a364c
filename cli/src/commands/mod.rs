pub mod check;
pub mod completions;
pub mod events;
pub mod init;
pub mod invoke;
pub mod query;
pub mod schema;
