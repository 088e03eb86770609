use serde_json::Value;

use crate::core::{convert, loader};
use crate::domain::model::{ConvertTask, Table, CONVERT_TASKS};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};

/// Extract → transform → load over one data directory: read CSV bytes,
/// apply the task's converter, write pretty JSON next to the input.
pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn display_path(&self, file: &str) -> String {
        format!("{}/{}", self.config.data_dir(), file)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    fn tasks(&self) -> &[ConvertTask] {
        CONVERT_TASKS
    }

    fn verify_data_dir(&self) -> Result<()> {
        if self.storage.base_exists() {
            Ok(())
        } else {
            Err(EtlError::MissingDataDirError {
                path: self.config.data_dir().to_string(),
            })
        }
    }

    fn has_input(&self, task: &ConvertTask) -> bool {
        self.storage.exists(task.input)
    }

    fn extract(&self, task: &ConvertTask) -> Result<Table> {
        let bytes = self.storage.read_file(task.input)?;
        loader::load_table(&bytes, &self.display_path(task.input))
    }

    fn transform(&self, task: &ConvertTask, table: Table) -> Result<Value> {
        Ok(convert::apply(task.converter, &table))
    }

    fn load(&self, task: &ConvertTask, document: Value) -> Result<String> {
        let json = serde_json::to_string_pretty(&document)?;
        self.storage.write_file(task.output, json.as_bytes())?;
        Ok(self.display_path(task.output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ConverterKind;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
        base_present: bool,
    }

    impl MockStorage {
        fn new(base_present: bool) -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
                base_present,
            }
        }

        fn put(&self, path: &str, data: &[u8]) {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
        }

        fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for &MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get(path).ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.put(path, data);
            Ok(())
        }

        fn exists(&self, path: &str) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn base_exists(&self) -> bool {
            self.base_present
        }
    }

    struct MockConfig;

    impl ConfigProvider for MockConfig {
        fn data_dir(&self) -> &str {
            "test_data"
        }
    }

    fn task(input: &'static str, converter: ConverterKind, output: &'static str) -> ConvertTask {
        ConvertTask {
            input,
            converter,
            output,
        }
    }

    #[test]
    fn test_extract_parses_csv_into_table() {
        let storage = MockStorage::new(true);
        storage.put("in.csv", "key,memo,value\nhero,,見出し\n".as_bytes());
        let pipeline = ConvertPipeline::new(&storage, MockConfig);

        let table = pipeline
            .extract(&task("in.csv", ConverterKind::CommonTexts, "out.json"))
            .unwrap();
        assert_eq!(table.rows[1], vec!["hero", "", "見出し"]);
    }

    #[test]
    fn test_load_writes_pretty_unescaped_json() {
        let storage = MockStorage::new(true);
        let pipeline = ConvertPipeline::new(&storage, MockConfig);
        let t = task("in.csv", ConverterKind::CommonTexts, "out.json");

        let path = pipeline
            .load(&t, serde_json::json!({ "hero": "見出し" }))
            .unwrap();
        assert_eq!(path, "test_data/out.json");

        let written = String::from_utf8(storage.get("out.json").unwrap()).unwrap();
        assert_eq!(written, "{\n  \"hero\": \"見出し\"\n}");
    }

    #[test]
    fn test_verify_data_dir_reports_configured_path() {
        let storage = MockStorage::new(false);
        let pipeline = ConvertPipeline::new(&storage, MockConfig);
        match pipeline.verify_data_dir() {
            Err(EtlError::MissingDataDirError { path }) => assert_eq!(path, "test_data"),
            other => panic!("expected MissingDataDirError, got {:?}", other),
        }
    }

    #[test]
    fn test_has_input_tracks_storage() {
        let storage = MockStorage::new(true);
        storage.put("clinic-texts.csv", b"list,field\n");
        let pipeline = ConvertPipeline::new(&storage, MockConfig);

        assert!(pipeline.has_input(&task(
            "clinic-texts.csv",
            ConverterKind::ClinicTexts,
            "clinic-texts.json"
        )));
        assert!(!pipeline.has_input(&task(
            "missing.csv",
            ConverterKind::Ranking,
            "missing.json"
        )));
    }
}
