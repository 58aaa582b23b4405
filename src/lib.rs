//! Local static-file server with a fixed set of security response headers.
//!
//! The binary in `main.rs` wires the pieces together; everything lives in
//! the library so integration tests can run the server in-process.

pub mod logger;
pub mod server;
pub mod static_files;
