pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, scaffold::ScaffoldConfig, CliConfig};
pub use core::{engine::ConvertEngine, pipeline::ConvertPipeline};
pub use utils::error::{EtlError, Result};
