pub mod convert;
pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod scaffold;

pub use crate::domain::model::{ConvertTask, ConverterKind, Row, RunSummary, Table, CONVERT_TASKS};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
