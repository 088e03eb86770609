//! Landing-page scaffolding: copy a template directory under a new name,
//! swap the base keyword inside the major text assets, and render a workflow
//! description from a `{{PLACEHOLDER}}` template.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::scaffold::ScaffoldConfig;
use crate::utils::error::{EtlError, Result};

const WORKFLOW_TEMPLATE: &str = "process_templates/kw_landing_workflow_template.yaml";
const GENERATED_DIR: &str = "process_templates/generated";

/// Files inside a copied template that carry the base keyword.
const REPLACEMENT_TARGETS: &[&str] = &[
    "index.html",
    "data/site-common-texts.csv",
    "data/clinic-texts.csv",
    "columns/columns.js",
];

#[derive(Debug)]
pub struct ScaffoldOutcome {
    pub directory: PathBuf,
    /// `None` on a dry run; nothing was written.
    pub workflow: Option<PathBuf>,
    pub rendered_workflow: String,
}

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid slug pattern"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9A-Za-z_\-一-龠ぁ-んァ-ンー]").expect("valid slug pattern")
});

/// Filesystem-friendly slug that keeps Japanese script.
pub fn slugify(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text.trim(), "_");
    let slashless = collapsed.replace('/', "-");
    let cleaned = DISALLOWED.replace_all(&slashless, "");
    if cleaned.is_empty() {
        "lp".to_string()
    } else {
        cleaned.into_owned()
    }
}

pub fn run(config: &ScaffoldConfig) -> Result<ScaffoldOutcome> {
    let root = Path::new(&config.root);
    let keyword = config.keyword.trim();

    let base_dir = root.join(&config.base_template);
    if !base_dir.is_dir() {
        return Err(EtlError::TemplateNotFoundError {
            path: base_dir.display().to_string(),
        });
    }

    let template_path = root.join(WORKFLOW_TEMPLATE);
    let template =
        fs::read_to_string(&template_path).map_err(|_| EtlError::TemplateNotFoundError {
            path: template_path.display().to_string(),
        })?;

    let directory_name = match &config.dir_name {
        Some(name) => name.clone(),
        None => format!("{}_{}", config.dir_prefix, slugify(keyword)),
    };
    let dest_dir = root.join(&directory_name);

    let created_at = Local::now().date_naive().to_string();
    let rendered = render_workflow(&template, keyword, &directory_name, config, &created_at);

    if config.dry_run {
        return Ok(ScaffoldOutcome {
            directory: dest_dir,
            workflow: None,
            rendered_workflow: rendered,
        });
    }

    copy_directory(&base_dir, &dest_dir)?;
    replace_keywords(&dest_dir, &config.base_keyword, keyword)?;

    let generated_dir = root.join(GENERATED_DIR);
    fs::create_dir_all(&generated_dir)?;
    let workflow_path = generated_dir.join(format!("{directory_name}_workflow.yaml"));
    fs::write(&workflow_path, &rendered)?;

    Ok(ScaffoldOutcome {
        directory: dest_dir,
        workflow: Some(workflow_path),
        rendered_workflow: rendered,
    })
}

fn copy_directory(base_dir: &Path, dest_dir: &Path) -> Result<()> {
    if dest_dir.exists() {
        return Err(EtlError::DestinationExistsError {
            path: dest_dir.display().to_string(),
        });
    }
    copy_tree(base_dir, dest_dir)
}

fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

/// Swaps `old_keyword` for `new_keyword` in the fixed target list. Absent
/// files and files without a match are left alone.
fn replace_keywords(dest_dir: &Path, old_keyword: &str, new_keyword: &str) -> Result<()> {
    for relative in REPLACEMENT_TARGETS {
        let path = dest_dir.join(relative);
        if !path.is_file() {
            continue;
        }
        let text = fs::read_to_string(&path)?;
        if !text.contains(old_keyword) {
            continue;
        }
        fs::write(&path, text.replace(old_keyword, new_keyword))?;
    }
    Ok(())
}

fn render_workflow(
    template: &str,
    keyword: &str,
    directory_name: &str,
    config: &ScaffoldConfig,
    created_at: &str,
) -> String {
    let placeholders: Vec<(&str, String)> = vec![
        ("{{NOTE}}", "このファイルは自動生成されました".to_string()),
        ("{{CREATED_AT}}", created_at.to_string()),
        ("{{AUTHOR}}", config.author.clone()),
        ("{{TARGET_KEYWORD}}", keyword.to_string()),
        ("{{OBJECTIVE}}", config.objective.clone()),
        ("{{PERSONA_AGE_RANGE}}", "20-39".to_string()),
        (
            "{{PERSONA_NEED_1}}",
            "目立たない矯正方法を探している".to_string(),
        ),
        (
            "{{PERSONA_NEED_2}}",
            "費用と通院負担がわかるブランド比較が必要".to_string(),
        ),
        ("{{PERSONA_ANXIETY_1}}", "痛みや後戻りが不安".to_string()),
        (
            "{{PERSONA_ANXIETY_2}}",
            "追加費用や保証の有無が分かりづらい".to_string(),
        ),
        ("{{COMPETITOR_1_NAME}}", "インビザライン公式".to_string()),
        ("{{COMPETITOR_1_POINT}}", "症例数とブランド力".to_string()),
        ("{{COMPETITOR_2_NAME}}", "キレイライン矯正".to_string()),
        (
            "{{COMPETITOR_2_POINT}}",
            "低価格と都度払いプラン".to_string(),
        ),
        ("{{COMPETITOR_3_NAME}}", "Medical DOC".to_string()),
        (
            "{{COMPETITOR_3_POINT}}",
            "費用相場と症例写真を豊富に掲載".to_string(),
        ),
        (
            "{{SERP_COMMON_1}}",
            "費用シミュレーション・月額換算".to_string(),
        ),
        ("{{SERP_COMMON_2}}", "症例写真 (Before/After)".to_string()),
        (
            "{{SERP_COMMON_3}}",
            "無料相談・オンライン診療導線".to_string(),
        ),
        (
            "{{DIFF_POINT_1}}",
            "全国対応ブランドを横並び比較".to_string(),
        ),
        (
            "{{DIFF_POINT_2}}",
            "保証・追加費用の有無を明示".to_string(),
        ),
        ("{{DIRECTORY_NAME}}", directory_name.to_string()),
        ("{{BASE_TEMPLATE}}", config.base_template.clone()),
        ("{{SHARED_CSS}}", "../common_data/styles".to_string()),
        (
            "{{SHARED_IMAGES}}",
            "../common_data/images/clinics".to_string(),
        ),
        ("{{HERO_HEADLINE}}", format!("迷わない{keyword}選び")),
        ("{{HERO_SUBCOPY}}", "費用・期間・保証を一目で比較".to_string()),
        ("{{CTA_TEXT}}", "無料カウンセリングを予約".to_string()),
        (
            "{{TASK_PREP_1}}",
            "既存テンプレートをコピーしてディレクトリを作成".to_string(),
        ),
        (
            "{{TASK_PREP_2}}",
            "meta情報とヒーローコピーの初期置換".to_string(),
        ),
        (
            "{{TASK_DATA_1}}",
            "site-common-texts.csvの文言をキーワードに合わせて更新".to_string(),
        ),
        (
            "{{TASK_DATA_2}}",
            "clinic-texts.csvの比較項目を最新情報に調整".to_string(),
        ),
        (
            "{{TASK_JS_1}}",
            "app.jsでregion_idデフォルトや比較表見出しを確認".to_string(),
        ),
        (
            "{{TASK_JS_2}}",
            "CTAトラッキングのパラメータを検証".to_string(),
        ),
        (
            "{{TASK_QA_1}}",
            "ローカルでランキング/Tips文言をチェック".to_string(),
        ),
        (
            "{{TASK_QA_2}}",
            "redirect.htmlで遷移パラメータをテスト".to_string(),
        ),
    ];

    let mut rendered = template.to_string();
    for (placeholder, value) in &placeholders {
        rendered = rendered.replace(placeholder, value);
    }
    rendered
}
