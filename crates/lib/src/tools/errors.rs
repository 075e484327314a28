//! Tool dispatch error types for the txguard library.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while dispatching a tool call.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum ToolError {
    /// The dialogue engine asked for a tool that does not exist.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name
        name: String,
    },
}

impl ToolError {
    /// Check if this error indicates an unknown tool.
    pub fn is_unknown_tool(&self) -> bool {
        matches!(self, ToolError::UnknownTool { .. })
    }
}

impl From<ToolError> for Error {
    fn from(err: ToolError) -> Self {
        Error::Tool(err)
    }
}
