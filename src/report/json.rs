use crate::core::aggregator::SummaryTable;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRow<'a> {
    label: &'a str,
    counts: IndexMap<&'a str, u64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    species: &'a [String],
    rows: Vec<JsonRow<'a>>,
}

pub fn generate_json_report(summary: &SummaryTable) -> Result<String> {
    let report = JsonReport {
        species: &summary.species,
        rows: summary
            .rows
            .iter()
            .map(|row| JsonRow {
                label: &row.label,
                counts: summary
                    .species
                    .iter()
                    .map(String::as_str)
                    .zip(row.counts.iter().copied())
                    .collect(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
