pub mod enrich;
pub mod fetch;
pub mod poll;
pub mod url;
pub mod watch;
