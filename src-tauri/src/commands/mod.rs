//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod item_cmd;
mod window_cmd;

pub use item_cmd::*;
pub use window_cmd::*;
