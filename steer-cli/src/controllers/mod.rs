//! Controllers registered by the `steer` binary.

pub mod about;
pub mod files;
pub mod help;
pub mod login;
