//! Authentication and authorization hoops.

pub(crate) mod middleware;
mod roles;

pub(crate) use roles::require_user;
