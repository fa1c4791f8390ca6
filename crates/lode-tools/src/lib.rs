//! # lode-tools
//!
//! The agent-facing surface of the vault: seven tools implementing
//! [`LodeTool`], a [`ToolRegistry`] the transport dispatches through, and
//! the shared parameter-validation helpers.
//!
//! Tools never panic on caller input. Malformed parameters come back as
//! error RESULTS (the transport's pre-check owns `InvalidInput`); vault
//! failures are rendered into descriptive error results carrying the
//! logical path and operation, never raw filesystem paths.

#![deny(unsafe_code)]

pub mod consolidate;
pub mod errors;
pub mod instructions;
pub mod list;
pub mod notes;
pub mod read;
pub mod reflect;
pub mod registry;
pub mod traits;
pub mod validation;
pub mod write;

pub use consolidate::ConsolidateTool;
pub use errors::ToolError;
pub use instructions::UpdateInstructionsTool;
pub use list::ListEntitiesTool;
pub use notes::AddNoteTool;
pub use read::ReadEntityTool;
pub use reflect::ReflectTool;
pub use registry::ToolRegistry;
pub use traits::{LodeTool, ToolContext};
pub use write::WriteEntityTool;
