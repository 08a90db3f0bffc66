pub mod app;
pub mod config;
pub mod errors;
pub mod model;
pub mod ui;

/// Version reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
pub use config::{CliArgs, Config};
pub use errors::{AppError, AppResult};
pub use model::{Framing, LineSet, WrapWidth};
pub use ui::render;
