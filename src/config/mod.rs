#[cfg(feature = "cli")]
pub mod cli;
pub mod playlist;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use playlist::Playlist;
