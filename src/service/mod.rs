pub(crate) mod config;
pub(crate) mod router;
pub(crate) mod server;
