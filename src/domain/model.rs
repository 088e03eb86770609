pub type Row = Vec<String>;

/// Ordered rows from one CSV file. Row 0 is conventionally a header. Rows may
/// be ragged; converters treat missing trailing cells as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterKind {
    CommonTexts,
    ApparelText,
    Ranking,
    ClinicTexts,
}

#[derive(Debug, Clone)]
pub struct ConvertTask {
    pub input: &'static str,
    pub converter: ConverterKind,
    pub output: &'static str,
}

/// The fixed conversion menu. Every run walks these four files in order;
/// inputs and outputs both live in the configured data directory.
pub const CONVERT_TASKS: &[ConvertTask] = &[
    ConvertTask {
        input: "site-common-texts.csv",
        converter: ConverterKind::CommonTexts,
        output: "site-common-texts.json",
    },
    ConvertTask {
        input: "site_appearl_text.csv",
        converter: ConverterKind::ApparelText,
        output: "site_appearl_text.json",
    },
    ConvertTask {
        input: "出しわけSS - ranking.csv",
        converter: ConverterKind::Ranking,
        output: "出しわけSS - ranking.json",
    },
    ConvertTask {
        input: "clinic-texts.csv",
        converter: ConverterKind::ClinicTexts,
        output: "clinic-texts.json",
    },
];

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}
