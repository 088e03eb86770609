use clap::Parser;
use lp_etl::core::scaffold;
use lp_etl::utils::{logger, validation::Validate};
use lp_etl::ScaffoldConfig;

fn main() {
    let config = ScaffoldConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match scaffold::run(&config) {
        Ok(outcome) => match outcome.workflow {
            Some(workflow) => {
                println!("✔ 新規ディレクトリを作成: {}", outcome.directory.display());
                println!("✔ ワークフローを生成: {}", workflow.display());
                println!("--- 次のステップ例 ---");
                println!("1. data/site-common-texts.csv や index.html の文言をキーワードに合わせて微調整");
                println!("2. 競合調査結果で secondary_keywords や differentiation_plan を上書き");
                println!("3. 広告計測 (GTM/GA) の設定を確認");
            }
            None => {
                println!(
                    "[dry-run] would create directory: {}",
                    outcome.directory.display()
                );
                println!("{}", outcome.rendered_workflow);
            }
        },
        Err(e) => {
            tracing::error!("Scaffolding failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
