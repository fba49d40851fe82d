//! Domain types: patients, billing rules and the ports the application layer
//! talks through.

pub mod billing;
pub mod patient;
pub mod ports;
