//! Tool catalog, argument decoding and dispatch

mod args;
mod catalog;
mod error;
mod prompts;
mod router;

pub use catalog::{DEFAULT_READINGS_LIMIT, Tool, ToolDescriptor, tool_descriptors};
pub use error::ToolError;
pub use prompts::{
    PromptContent, PromptDescriptor, PromptMessage, PromptResult, SUGGEST_BEER_STYLES,
    get_prompt, prompt_descriptors,
};
pub use router::ToolRouter;
