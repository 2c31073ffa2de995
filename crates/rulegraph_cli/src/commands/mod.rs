//! Subcommand implementations

mod init;
mod render;

pub use init::run_init;
pub use render::run_render;
