/// Comma-separated output tables
///
/// Both tables are written with the row label in the first column and one
/// column per species.
use crate::core::aggregator::SummaryTable;
use crate::core::collector::parse_count;
use crate::core::combiner::CombinedTable;
use crate::{PepsumError, Result};
use std::path::Path;

/// Write the combined table; `label_header` names the code column
pub fn write_combined(path: &Path, table: &CombinedTable, label_header: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header(label_header, &table.species))?;
    for row in &table.rows {
        writer.write_record(record(row.code.as_str(), &row.counts))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the summary table with an empty label header
pub fn write_summary(path: &Path, table: &SummaryTable) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header("", &table.species))?;
    for row in &table.rows {
        writer.write_record(record(&row.label, &row.counts))?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a summary table previously written by [`write_summary`]
pub fn read_summary(path: &Path) -> Result<SummaryTable> {
    let mut reader = csv::ReaderBuilder::new().from_path(path)?;
    let species: Vec<String> = reader.headers()?.iter().skip(1).map(str::to_string).collect();

    let mut table = SummaryTable::new(species);
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut fields = record.iter();
        let label = fields.next().unwrap_or("").to_string();

        let counts = fields
            .map(|raw| {
                parse_count(raw).flatten().ok_or_else(|| {
                    PepsumError::Parse(format!(
                        "{}:{}: '{}' is not a valid count",
                        path.display(),
                        line,
                        raw
                    ))
                })
            })
            .collect::<Result<Vec<u64>>>()?;

        table.push(label, counts);
    }
    Ok(table)
}

fn header<'a>(label_header: &'a str, species: &'a [String]) -> Vec<&'a str> {
    std::iter::once(label_header)
        .chain(species.iter().map(String::as_str))
        .collect()
}

fn record(label: &str, counts: &[u64]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(counts.iter().map(u64::to_string))
        .collect()
}
