//! Friendship graph storage and connector search.

pub mod acquaintance;
pub mod connectors;
