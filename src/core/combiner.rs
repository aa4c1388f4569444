/// Zero-fills the wide table and orders rows by classification
use crate::core::code::{CategoryOrder, ClassificationCode};
use crate::core::collector::WideTable;

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub code: ClassificationCode,
    pub counts: Vec<u64>,
}

/// Codes × species with every cell filled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedTable {
    pub species: Vec<String>,
    pub rows: Vec<CombinedRow>,
}

impl CombinedTable {
    pub fn width(&self) -> usize {
        self.species.len()
    }

    /// Column-wise sum over the rows accepted by `filter`
    pub fn column_sums<F>(&self, mut filter: F) -> Vec<u64>
    where
        F: FnMut(&ClassificationCode) -> bool,
    {
        let mut sums = vec![0u64; self.width()];
        for row in self.rows.iter().filter(|r| filter(&r.code)) {
            for (sum, count) in sums.iter_mut().zip(&row.counts) {
                *sum = sum.saturating_add(*count);
            }
        }
        sums
    }

    pub fn get(&self, code: &str) -> Option<&CombinedRow> {
        self.rows.iter().find(|r| r.code.as_str() == code)
    }
}

/// Replace every unset cell with 0
pub fn fill_missing(wide: WideTable) -> CombinedTable {
    let rows = wide
        .rows
        .into_iter()
        .map(|(code, cells)| CombinedRow {
            code,
            counts: cells.into_iter().map(|c| c.unwrap_or(0)).collect(),
        })
        .collect();

    CombinedTable {
        species: wide.species,
        rows,
    }
}

/// Order rows by category rank, then family, then subfamily
pub fn sort_rows(table: &mut CombinedTable, order: &CategoryOrder) {
    table
        .rows
        .sort_by(|a, b| a.code.sort_key(order).cmp(&b.code.sort_key(order)));
}

pub fn combine(wide: WideTable, order: &CategoryOrder) -> CombinedTable {
    let mut table = fill_missing(wide);
    sort_rows(&mut table, order);
    table
}
