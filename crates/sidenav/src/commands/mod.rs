//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod inject;

pub(crate) use check::CheckArgs;
pub(crate) use inject::InjectArgs;
