//! Per-file conversion rules for the landing-page data CSVs.
//!
//! Each converter is a pure function from a [`Table`] to a JSON document.
//! Output mappings preserve first-seen key order; inserting an existing key
//! again replaces the value without moving the key.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::domain::model::{ConverterKind, Row, Table};

/// Brand short codes appearing in column 0 of `clinic-texts.csv`. A row
/// tagged with one of these feeds exactly one clinic section.
static BRAND_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ohmyteeth", "Oh my teeth"),
        ("invisalign", "インビザライン"),
        ("kireilign", "キレイライン矯正"),
        ("zenyum", "ゼニュム"),
        ("wesmile", "ウィスマイル"),
    ])
});

/// Display name → identifier for the detail fields the site renders from
/// metadata.
static DETAIL_FIELD_IDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("費用", "priceDetail"),
        ("目安期間", "periods"),
        ("矯正範囲", "ranges"),
        ("営業時間", "hours"),
        ("店舗", "stores"),
        ("特徴タグ", "featureTags"),
    ])
});

const FEATURE_TAGS_ID: &str = "featureTags";
const DETAIL_PREFIX: &str = "詳細_";
const COMPARISON_HEADER_SECTION: &str = "比較表ヘッダー設定";
const COMPARISON_HEADER_LABEL: &str = "比較表ヘッダー";
const DETAIL_FIELD_SECTION: &str = "詳細フィールドマッピング";

pub fn apply(kind: ConverterKind, table: &Table) -> Value {
    match kind {
        ConverterKind::CommonTexts => convert_key_value(table, 3, 0, 2),
        ConverterKind::ApparelText => convert_key_value(table, 2, 0, 1),
        ConverterKind::Ranking => convert_ranking(table),
        ConverterKind::ClinicTexts => convert_clinic_texts(table),
    }
}

fn cell(row: &Row, index: usize) -> &str {
    row.get(index).map(|field| field.trim()).unwrap_or("")
}

/// Key/value extraction shared by the "common texts" and "apparel text"
/// files. Skips the header row, drops rows shorter than `required_cols` and
/// rows with an empty key.
fn convert_key_value(
    table: &Table,
    required_cols: usize,
    key_col: usize,
    value_col: usize,
) -> Value {
    let mut mapping = Map::new();
    for row in table.data_rows() {
        if row.len() < required_cols {
            continue;
        }
        let key = cell(row, key_col);
        if key.is_empty() {
            continue;
        }
        mapping.insert(
            key.to_string(),
            Value::String(cell(row, value_col).to_string()),
        );
    }
    Value::Object(mapping)
}

/// One record per data row, keyed by the header names verbatim (duplicate
/// header names make the later column win). All-blank rows are dropped.
fn convert_ranking(table: &Table) -> Value {
    let Some(header) = table.header() else {
        return Value::Array(Vec::new());
    };
    let fields: Vec<String> = header.iter().map(|name| name.trim().to_string()).collect();

    let mut records = Vec::new();
    for row in table.data_rows() {
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let mut record = Map::new();
        for (index, field) in fields.iter().enumerate() {
            record.insert(field.clone(), Value::String(cell(row, index).to_string()));
        }
        records.push(Value::Object(record));
    }
    Value::Array(records)
}

/// Reshapes the long clinic table (one row per field per list) into a wide
/// per-clinic structure, preceded by the comparison-header and detail-field
/// metadata sections.
///
/// Column 0 tags each row with a list-name; the prefix decides how columns
/// 3+ are distributed. The priority order comparison → detail → tags → meta
/// → brand-code → distribute is load-bearing: first match wins.
fn convert_clinic_texts(table: &Table) -> Value {
    let Some(header) = table.header() else {
        return Value::Object(Map::new());
    };

    let clinic_names: Vec<String> = header
        .iter()
        .skip(3)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    let mut clinics: Map<String, Value> = clinic_names
        .iter()
        .map(|name| (name.clone(), Value::Object(Map::new())))
        .collect();
    let mut comparison_headers = Map::new();
    let mut detail_fields = Map::new();

    for row in table.data_rows() {
        if row.len() < 2 {
            continue;
        }
        let list_name = cell(row, 0);
        let field_name = cell(row, 1);
        if list_name.is_empty() || field_name.is_empty() {
            continue;
        }

        if let Some(number) = list_name.strip_prefix("comparison") {
            comparison_headers.insert(
                format!("{}{}", COMPARISON_HEADER_LABEL, number.trim()),
                Value::String(field_name.to_string()),
            );
            distribute(&mut clinics, &clinic_names, row, field_name);
        } else if list_name.starts_with("detail") {
            let mapping_key = DETAIL_FIELD_IDS
                .get(field_name)
                .copied()
                .unwrap_or(field_name);
            if !mapping_key.is_empty() && mapping_key != FEATURE_TAGS_ID {
                detail_fields.insert(
                    mapping_key.to_string(),
                    Value::String(field_name.to_string()),
                );
            }
            distribute(
                &mut clinics,
                &clinic_names,
                row,
                &format!("{DETAIL_PREFIX}{field_name}"),
            );
        } else if list_name.starts_with("tags") {
            distribute(
                &mut clinics,
                &clinic_names,
                row,
                &format!("{DETAIL_PREFIX}{field_name}"),
            );
        } else if list_name.starts_with("meta") {
            distribute(&mut clinics, &clinic_names, row, field_name);
        } else if let Some(target) = BRAND_CODES.get(list_name) {
            // Single-clinic row: only the named brand's section, first value
            // column only.
            if let Some(section) = clinics.get_mut(*target).and_then(Value::as_object_mut) {
                section.insert(field_name.to_string(), Value::String(value_at(row, 0)));
            }
        } else {
            distribute(&mut clinics, &clinic_names, row, field_name);
        }
    }

    let mut result = Map::new();
    result.insert(
        COMPARISON_HEADER_SECTION.to_string(),
        Value::Object(comparison_headers),
    );
    detail_fields.insert(
        "officialSite".to_string(),
        Value::String("公式サイトURL".to_string()),
    );
    result.insert(DETAIL_FIELD_SECTION.to_string(), Value::Object(detail_fields));
    for name in &clinic_names {
        if let Some(section) = clinics.remove(name) {
            result.insert(name.clone(), section);
        }
    }
    Value::Object(result)
}

/// Clinic values sit to the right of the three tag columns.
fn value_at(row: &Row, clinic_index: usize) -> String {
    cell(row, clinic_index + 3).to_string()
}

fn distribute(clinics: &mut Map<String, Value>, clinic_names: &[String], row: &Row, key: &str) {
    for (index, name) in clinic_names.iter().enumerate() {
        if let Some(section) = clinics.get_mut(name).and_then(Value::as_object_mut) {
            section.insert(key.to_string(), Value::String(value_at(row, index)));
        }
    }
}
