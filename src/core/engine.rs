use crate::domain::model::RunSummary;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs every task in the fixed menu. A missing input file is a warning
    /// and a skip; everything else aborts the run.
    pub fn run(&self) -> Result<RunSummary> {
        self.pipeline.verify_data_dir()?;

        let mut summary = RunSummary::default();
        for task in self.pipeline.tasks() {
            if !self.pipeline.has_input(task) {
                tracing::warn!("input file missing, skipping: {}", task.input);
                println!("⚠️ Skipped {} (input not found)", task.input);
                summary.skipped.push(task.input.to_string());
                continue;
            }

            println!("▶︎ {} → {}", task.input, task.output);
            let table = self.pipeline.extract(task)?;
            tracing::debug!("loaded {} rows from {}", table.rows.len(), task.input);

            let document = self.pipeline.transform(task, table)?;
            let output_path = self.pipeline.load(task, document)?;
            tracing::info!("wrote {}", output_path);
            summary.written.push(output_path);
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ConvertTask, Table, CONVERT_TASKS};
    use crate::utils::error::EtlError;
    use serde_json::Value;

    struct StubPipeline {
        data_dir_present: bool,
        present_inputs: Vec<&'static str>,
    }

    impl Pipeline for StubPipeline {
        fn tasks(&self) -> &[ConvertTask] {
            CONVERT_TASKS
        }

        fn verify_data_dir(&self) -> Result<()> {
            if self.data_dir_present {
                Ok(())
            } else {
                Err(EtlError::MissingDataDirError {
                    path: "./data".to_string(),
                })
            }
        }

        fn has_input(&self, task: &ConvertTask) -> bool {
            self.present_inputs.contains(&task.input)
        }

        fn extract(&self, _task: &ConvertTask) -> Result<Table> {
            Ok(Table::default())
        }

        fn transform(&self, _task: &ConvertTask, _table: Table) -> Result<Value> {
            Ok(serde_json::json!({}))
        }

        fn load(&self, task: &ConvertTask, _document: Value) -> Result<String> {
            Ok(task.output.to_string())
        }
    }

    #[test]
    fn test_run_converts_every_present_input() {
        let engine = ConvertEngine::new(StubPipeline {
            data_dir_present: true,
            present_inputs: CONVERT_TASKS.iter().map(|task| task.input).collect(),
        });
        let summary = engine.run().unwrap();
        assert_eq!(summary.written.len(), 4);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn test_run_skips_missing_inputs_without_failing() {
        let engine = ConvertEngine::new(StubPipeline {
            data_dir_present: true,
            present_inputs: vec!["site-common-texts.csv", "clinic-texts.csv"],
        });
        let summary = engine.run().unwrap();
        assert_eq!(summary.written.len(), 2);
        assert_eq!(
            summary.skipped,
            vec!["site_appearl_text.csv", "出しわけSS - ranking.csv"]
        );
    }

    #[test]
    fn test_run_fails_without_data_dir() {
        let engine = ConvertEngine::new(StubPipeline {
            data_dir_present: false,
            present_inputs: vec![],
        });
        assert!(matches!(
            engine.run(),
            Err(EtlError::MissingDataDirError { .. })
        ));
    }
}
