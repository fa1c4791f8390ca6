//! # lode-core
//!
//! Foundation types for the Lode memory vault.
//!
//! This crate provides the shared vocabulary that the other Lode crates
//! depend on:
//!
//! - **Tool schemas**: [`Tool`] and [`ToolParameterSchema`] — the JSON-Schema
//!   shaped definition a caller registers for each vault operation
//! - **Tool results**: [`LodeToolResult`] with content, details, and error flag
//! - **Clock**: the [`Clock`] capability trait — all date stamps in vault
//!   documents come from an injected clock, never from ambient time reads

#![deny(unsafe_code)]

pub mod clock;
pub mod tools;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tools::{
    LodeToolResult, Tool, ToolCategory, ToolParameterSchema, ToolResultBody, error_result,
    text_result,
};
