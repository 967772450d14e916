//! Base types and error handling.
//!
//! - [`neterror::NetError`]: error codes shared by the jar and its persistence layer
//! - [`context::IoResultExt`]: attaches file context to I/O failures

pub mod context;
pub mod neterror;
