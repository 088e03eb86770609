use serde_json::Value;

use crate::domain::model::{ConvertTask, Table};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
    fn base_exists(&self) -> bool;
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
}

pub trait Pipeline {
    fn tasks(&self) -> &[ConvertTask];
    fn verify_data_dir(&self) -> Result<()>;
    fn has_input(&self, task: &ConvertTask) -> bool;
    fn extract(&self, task: &ConvertTask) -> Result<Table>;
    fn transform(&self, task: &ConvertTask, table: Table) -> Result<Value>;
    fn load(&self, task: &ConvertTask, document: Value) -> Result<String>;
}
