/// Gathers per-species peptidase summary files into one wide table
use crate::core::code::ClassificationCode;
use crate::core::config::InputConfig;
use crate::{PepsumError, Result};
use indexmap::IndexMap;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts for one species, keyed by classification code in file order.
/// `None` marks a blank count cell.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesTable {
    pub species: String,
    pub counts: IndexMap<ClassificationCode, Option<u64>>,
}

/// Codes × species before missing cells are filled
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WideTable {
    pub species: Vec<String>,
    pub rows: IndexMap<ClassificationCode, Vec<Option<u64>>>,
}

impl WideTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer-join one species column onto the table
    pub fn add_species(&mut self, table: SpeciesTable) {
        let width = self.species.len();
        for cells in self.rows.values_mut() {
            cells.push(None);
        }
        for (code, count) in table.counts {
            let cells = self
                .rows
                .entry(code)
                .or_insert_with(|| vec![None; width + 1]);
            cells[width] = count;
        }
        self.species.push(table.species);
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

pub struct Collector<'a> {
    layout: &'a InputConfig,
    progress: ProgressBar,
}

impl<'a> Collector<'a> {
    pub fn new(layout: &'a InputConfig) -> Self {
        Self {
            layout,
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Species directories under `input_dir`, sorted by name
    pub fn species_dirs(&self, input_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(input_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            dirs.push((name, entry.path()));
        }
        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(dirs)
    }

    pub fn collect(&self, input_dir: &Path) -> Result<WideTable> {
        let mut wide = WideTable::new();

        for (species, dir) in self.species_dirs(input_dir)? {
            let summary = dir.join(&self.layout.summary_path);
            if !summary.is_file() {
                debug!("Skipping {}: no {}", species, self.layout.summary_path);
                continue;
            }

            self.progress.set_message(format!("Reading {}", species));
            let table = read_species_table(&summary, &species, self.layout)?;
            debug!("{}: {} classification codes", species, table.counts.len());
            wide.add_species(table);
            self.progress.tick();
        }

        self.progress.finish_and_clear();

        if wide.is_empty() {
            return Err(PepsumError::NoSpecies(input_dir.display().to_string()));
        }
        info!(
            "Collected {} species, {} classification codes",
            wide.species.len(),
            wide.rows.len()
        );
        Ok(wide)
    }
}

/// Convenience wrapper around [`Collector`] without progress output
pub fn collect_species(input_dir: &Path, layout: &InputConfig) -> Result<WideTable> {
    Collector::new(layout).collect(input_dir)
}

/// Parse one tab-separated summary file into a species column
pub fn read_species_table(path: &Path, species: &str, layout: &InputConfig) -> Result<SpeciesTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| PepsumError::MissingColumn {
                path: path.display().to_string(),
                column: name.to_string(),
            })
    };
    let code_idx = column(&layout.code_column)?;
    let count_idx = column(&layout.count_column)?;

    let mut counts = IndexMap::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let raw_code = record.get(code_idx).unwrap_or("");
        let code = ClassificationCode::new(raw_code).map_err(|_| {
            PepsumError::Parse(format!(
                "{}:{}: empty '{}' value",
                path.display(),
                line,
                layout.code_column
            ))
        })?;

        let raw_count = record.get(count_idx).unwrap_or("");
        let count = parse_count(raw_count).ok_or_else(|| {
            PepsumError::Parse(format!(
                "{}:{}: '{}' is not a valid '{}' count",
                path.display(),
                line,
                raw_count,
                layout.count_column
            ))
        })?;

        if counts.insert(code.clone(), count).is_some() {
            return Err(PepsumError::DuplicateCode {
                path: path.display().to_string(),
                code: code.to_string(),
            });
        }
    }

    Ok(SpeciesTable {
        species: species.to_string(),
        counts,
    })
}

/// Parse a count cell. Blank cells are unset; integral floats such as `5.0`
/// are accepted. Returns `None` for anything that is not a non-negative
/// whole number.
pub(crate) fn parse_count(raw: &str) -> Option<Option<u64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Some(Some(n));
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(Some(value as u64))
    } else {
        None
    }
}
