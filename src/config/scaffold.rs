use clap::Parser;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

fn default_author() -> String {
    std::env::var("USER").unwrap_or_else(|_| "codex".to_string())
}

#[derive(Debug, Clone, Parser)]
#[command(name = "generate_lp")]
#[command(about = "Scaffold a landing-page directory and workflow file from a template")]
pub struct ScaffoldConfig {
    /// Main keyword for the new landing page (e.g. 矯正歯科).
    #[arg(long)]
    pub keyword: String,

    /// Source directory copied as the base of the new page.
    #[arg(long, default_value = "mouthpiece_section001")]
    pub base_template: String,

    /// Prefix for the generated directory name (<prefix>_<slug>).
    #[arg(long, default_value = "mouthpiece")]
    pub dir_prefix: String,

    /// Explicit directory name; wins over --dir-prefix.
    #[arg(long)]
    pub dir_name: Option<String>,

    /// Author recorded in the workflow file.
    #[arg(long, default_value_t = default_author())]
    pub author: String,

    /// Objective recorded in the workflow file.
    #[arg(long, default_value = "検索/広告LPとして主要訴求ポイントを1ページで提示")]
    pub objective: String,

    /// Existing keyword replaced inside the copied files.
    #[arg(long, default_value = "マウスピース矯正")]
    pub base_keyword: String,

    /// Project root the template directories live under.
    #[arg(long, default_value = ".")]
    pub root: String,

    /// Render the workflow file without creating anything.
    #[arg(long)]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("keyword", &self.keyword)?;
        validate_non_empty_string("base_keyword", &self.base_keyword)?;
        validate_path("root", &self.root)
    }
}

#[cfg(test)]
impl ScaffoldConfig {
    pub fn for_tests(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            base_template: "mouthpiece_section001".to_string(),
            dir_prefix: "mouthpiece".to_string(),
            dir_name: None,
            author: "tester".to_string(),
            objective: "テスト用".to_string(),
            base_keyword: "マウスピース矯正".to_string(),
            root: ".".to_string(),
            dry_run: false,
            verbose: false,
        }
    }
}
