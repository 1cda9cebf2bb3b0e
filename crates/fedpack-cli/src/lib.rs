//! fedpack library - expose modules for testing
//!
//! This library exposes the pipeline and command handlers used by the
//! `fedpack` binary.

pub mod commands;
pub mod common;
pub mod errors;
pub mod pipeline;

pub use common::GlobalOpts;
pub use fedpack_logger as logger;
