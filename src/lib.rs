pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SiteConfig;

pub use adapters::{FormSubmitRelay, LocalStorage};
pub use core::export::SiteExporter;
pub use core::site::Site;
pub use server::AppState;
pub use utils::error::{Result, SiteError};
