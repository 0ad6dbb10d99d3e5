//! Wire types and HTTP clients for the upstream providers.

pub mod notification;
pub mod weather;
