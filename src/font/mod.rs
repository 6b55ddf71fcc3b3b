pub(crate) mod builtin;
pub(crate) mod handle;
pub(crate) mod metrics;
pub(crate) mod resolve;
