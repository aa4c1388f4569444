/// Folds subfamily rows of a written summary into their three-character parent
use crate::core::aggregator::{SummaryTable, TOTAL_LABEL};
use crate::core::code::char_prefix;
use crate::report::csv::{read_summary, write_summary};
use crate::Result;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub const MERGED_LABEL_LEN: usize = 3;

/// Label a row is grouped under after merging
pub fn merged_label(label: &str) -> &str {
    if label == TOTAL_LABEL {
        label
    } else {
        char_prefix(label, MERGED_LABEL_LEN)
    }
}

/// Fold every row labelled longer than three characters into the row for its
/// three-character prefix, keeping first-occurrence order. Rows with short
/// labels are emitted unchanged and never summed with each other; a
/// three-character row is the parent that its subfamilies fold into.
pub fn merge_subfamilies(summary: &SummaryTable) -> SummaryTable {
    let mut merged = SummaryTable::new(summary.species.clone());
    // Row index of the parent for each three-character label
    let mut parents: HashMap<String, usize> = HashMap::new();

    for row in &summary.rows {
        let label = merged_label(&row.label);
        if label == row.label {
            if label.chars().count() == MERGED_LABEL_LEN {
                parents.entry(label.to_string()).or_insert(merged.rows.len());
            }
            merged.push(label, row.counts.clone());
            continue;
        }

        match parents.get(label) {
            Some(&idx) => {
                let sums = &mut merged.rows[idx].counts;
                for (sum, count) in sums.iter_mut().zip(&row.counts) {
                    *sum = sum.saturating_add(*count);
                }
            }
            None => {
                parents.insert(label.to_string(), merged.rows.len());
                merged.push(label, row.counts.clone());
            }
        }
    }
    merged
}

/// Rewrite a summary CSV with subfamilies merged
pub fn merge_subfamilies_file(path: &Path) -> Result<SummaryTable> {
    let summary = read_summary(path)?;
    let merged = merge_subfamilies(&summary);
    info!(
        "Merged {} summary rows into {} in {}",
        summary.rows.len(),
        merged.rows.len(),
        path.display()
    );
    write_summary(path, &merged)?;
    Ok(merged)
}
