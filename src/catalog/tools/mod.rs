pub mod config;
pub mod dedupe;
pub mod error;
pub mod io;
pub mod model;
pub mod normalize;
pub mod select;

pub use error::{Result, ToolError};
