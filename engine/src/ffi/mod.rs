//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings exposing the 256-word ISAAC and ISAAC-64 engines to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: integers, lists and strings at the boundary
//! 3. **Safe errors**: Convert all Rust errors to Python exceptions
//! 4. **No references**: Python gets copies, never references to Rust state

pub mod engine;
pub mod types;
