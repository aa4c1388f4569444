/// Rollup statistics over the combined table
use crate::core::code::CategoryOrder;
use crate::core::combiner::CombinedTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const TOTAL_LABEL: &str = "Total";

/// Granularity of the rows that follow the per-category rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// One row per two-character family within each category
    #[default]
    Family,
    /// One row per classification code, labelled by the raw code
    Code,
}

impl std::str::FromStr for AggregationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "family" => Ok(AggregationMode::Family),
            "code" | "subfamily" => Ok(AggregationMode::Code),
            _ => Err(format!("Unknown aggregation mode: {}", s)),
        }
    }
}

impl std::fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationMode::Family => write!(f, "family"),
            AggregationMode::Code => write!(f, "code"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub counts: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub species: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new(species: Vec<String>) -> Self {
        Self {
            species,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, counts: Vec<u64>) {
        self.rows.push(SummaryRow {
            label: label.into(),
            counts,
        });
    }

    pub fn get(&self, label: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }
}

/// Build the summary: `Total`, one row per category, then family or code rows
pub fn aggregate(
    combined: &CombinedTable,
    order: &CategoryOrder,
    mode: AggregationMode,
) -> SummaryTable {
    let mut summary = SummaryTable::new(combined.species.clone());

    summary.push(TOTAL_LABEL, combined.column_sums(|_| true));

    // Categories without codes still get an all-zero row
    for category in order.iter() {
        summary.push(
            category.to_string(),
            combined.column_sums(|code| code.category() == category),
        );
    }

    match mode {
        AggregationMode::Family => {
            for category in order.iter() {
                let families: BTreeSet<&str> = combined
                    .rows
                    .iter()
                    .filter(|r| r.code.category() == category)
                    .map(|r| r.code.family_key())
                    .collect();

                // A family row sums every code starting with its key, so a
                // one-character key covers the whole category
                for family in families {
                    summary.push(
                        family,
                        combined.column_sums(|code| code.as_str().starts_with(family)),
                    );
                }
            }
        }
        AggregationMode::Code => {
            for row in &combined.rows {
                summary.push(row.code.as_str(), row.counts.clone());
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::code::ClassificationCode;
    use crate::core::combiner::CombinedRow;
    use pretty_assertions::assert_eq;

    fn table(species: &[&str], rows: &[(&str, &[u64])]) -> CombinedTable {
        CombinedTable {
            species: species.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|(c, counts)| CombinedRow {
                    code: ClassificationCode::new(*c).unwrap(),
                    counts: counts.to_vec(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_two_species_example() {
        let combined = table(&["A", "B"], &[("C1", &[5, 2]), ("M2", &[3, 0])]);
        let summary = aggregate(&combined, &CategoryOrder::default(), AggregationMode::Family);

        assert_eq!(summary.get("Total").unwrap().counts, vec![8, 2]);
        assert_eq!(summary.get("C").unwrap().counts, vec![5, 2]);
        assert_eq!(summary.get("M").unwrap().counts, vec![3, 0]);
        for zero in ["A", "G", "N", "P", "S", "T", "U"] {
            assert_eq!(summary.get(zero).unwrap().counts, vec![0, 0], "category {zero}");
        }
        assert_eq!(
            summary.labels(),
            vec!["Total", "A", "C", "G", "M", "N", "P", "S", "T", "U", "C1", "M2"]
        );
    }

    #[test]
    fn test_family_mode_groups_subfamilies() {
        let combined = table(
            &["A"],
            &[("S01", &[1]), ("S01A", &[2]), ("S08", &[4]), ("S1", &[8]), ("S", &[16])],
        );
        let summary = aggregate(&combined, &CategoryOrder::default(), AggregationMode::Family);

        let families: Vec<(&str, u64)> = summary.rows[10..]
            .iter()
            .map(|r| (r.label.as_str(), r.counts[0]))
            .collect();
        assert_eq!(families, vec![("S", 31), ("S0", 7), ("S1", 8)]);
        assert_eq!(summary.get("S").unwrap().counts, vec![31]);
    }

    #[test]
    fn test_bare_category_code_family_mode() {
        let combined = table(&["A", "B"], &[("C", &[1, 0]), ("C1", &[5, 2])]);
        let summary = aggregate(&combined, &CategoryOrder::default(), AggregationMode::Family);

        assert_eq!(&summary.labels()[10..], &["C", "C1"]);
        assert_eq!(summary.rows[2].label, "C");
        assert_eq!(summary.rows[2].counts, vec![6, 2]);
        assert_eq!(summary.rows[10].counts, vec![6, 2]);
        assert_eq!(summary.rows[11].counts, vec![5, 2]);
        assert_eq!(summary.get("Total").unwrap().counts, vec![6, 2]);
    }

    #[test]
    fn test_bare_category_code_code_mode() {
        let combined = table(&["A", "B"], &[("C", &[1, 0]), ("C1", &[5, 2])]);
        let summary = aggregate(&combined, &CategoryOrder::default(), AggregationMode::Code);

        assert_eq!(&summary.labels()[10..], &["C", "C1"]);
        assert_eq!(summary.rows[2].counts, vec![6, 2]);
        assert_eq!(summary.rows[10].counts, vec![1, 0]);
        assert_eq!(summary.rows[11].counts, vec![5, 2]);
    }

    #[test]
    fn test_code_mode_keeps_raw_codes() {
        let combined = table(&["A"], &[("S01", &[1]), ("S01A", &[2]), ("S08", &[4])]);
        let summary = aggregate(&combined, &CategoryOrder::default(), AggregationMode::Code);

        assert_eq!(&summary.labels()[10..], &["S01", "S01A", "S08"]);
        assert_eq!(summary.get("S01A").unwrap().counts, vec![2]);
    }

    #[test]
    fn test_unknown_category_only_in_total() {
        let combined = table(&["A"], &[("C1", &[1]), ("X9", &[5])]);
        let order = CategoryOrder::default();

        let family = aggregate(&combined, &order, AggregationMode::Family);
        assert_eq!(family.get("Total").unwrap().counts, vec![6]);
        assert!(family.get("X9").is_none());
        assert!(family.get("X").is_none());

        let code = aggregate(&combined, &order, AggregationMode::Code);
        assert_eq!(code.get("X9").unwrap().counts, vec![5]);
    }

    #[test]
    fn test_custom_category_order() {
        let combined = table(&["A"], &[("C1", &[1]), ("S1", &[2])]);
        let order = CategoryOrder::new(vec!['S', 'C']).unwrap();
        let summary = aggregate(&combined, &order, AggregationMode::Family);
        assert_eq!(summary.labels(), vec!["Total", "S", "C", "S1", "C1"]);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("family".parse::<AggregationMode>().unwrap(), AggregationMode::Family);
        assert_eq!("CODE".parse::<AggregationMode>().unwrap(), AggregationMode::Code);
        assert!("genus".parse::<AggregationMode>().is_err());
    }
}
