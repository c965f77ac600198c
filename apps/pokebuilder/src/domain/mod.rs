// Domain layer module exports
// Pure types and rules; no filesystem access happens here

pub mod creature;
pub mod errors;
pub mod repositories;
pub mod team;
