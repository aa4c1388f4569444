#![allow(dead_code)]

/// Shared fixtures: species result folders laid out the way the prediction
/// pipeline writes them.
use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let input_dir = temp_dir.path().join("results");
        let output_dir = temp_dir.path().join("out");
        fs::create_dir_all(&input_dir)?;
        fs::create_dir_all(&output_dir)?;
        Ok(Self {
            temp_dir,
            input_dir,
            output_dir,
        })
    }

    /// Write `<input>/<species>/peptidases/summary.txt` from (code, count) pairs
    pub fn add_species(&self, species: &str, counts: &[(&str, u64)]) -> Result<PathBuf> {
        let mut body = String::from("Merops family\tproteins\tgenes\n");
        for (code, count) in counts {
            body.push_str(&format!("{}\t{}\t{}\n", code, count, count));
        }
        self.add_species_raw(species, &body)
    }

    pub fn add_species_raw(&self, species: &str, body: &str) -> Result<PathBuf> {
        let dir = self.input_dir.join(species).join("peptidases");
        fs::create_dir_all(&dir)?;
        let path = dir.join("summary.txt");
        fs::write(&path, body)?;
        Ok(path)
    }

    pub fn combined_path(&self) -> PathBuf {
        self.output_dir.join("combined_summary.csv")
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join("summary_statistics.csv")
    }

    pub fn read(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

/// Species A = {C1: 5, M2: 3}, species B = {C1: 2}
pub fn two_species_env() -> Result<TestEnvironment> {
    let env = TestEnvironment::new()?;
    env.add_species("A", &[("C1", 5), ("M2", 3)])?;
    env.add_species("B", &[("C1", 2)])?;
    Ok(env)
}

pub fn pepsum_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pepsum").expect("pepsum binary");
    cmd.env_remove("PEPSUM_LOG").env_remove("RUST_LOG");
    cmd
}
