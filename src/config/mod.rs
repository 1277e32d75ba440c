pub mod brief;
#[cfg(feature = "cli")]
pub mod cli;

pub use brief::BriefFile;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
