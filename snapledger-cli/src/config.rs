use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snapledger_core::time;
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_snapledger_home;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub parse: ParseSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// JSON store file; relative paths resolve against the snapledger home
    pub path: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("transactions.json"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseSection {
    /// IANA zone whose calendar decides the year for MM/DD rows
    pub timezone: Option<String>,
    /// Pin the year for MM/DD rows instead of using the clock
    pub default_year: Option<i32>,
}

impl ParseSection {
    /// Year for rows that print no year: flag, then pinned year, then zone clock, then local clock.
    pub fn resolve_year(&self, flag: Option<i32>) -> Result<i32> {
        if let Some(y) = flag.or(self.default_year) {
            return Ok(y);
        }
        match &self.timezone {
            Some(tz) => time::current_year_in(tz),
            None => Ok(time::current_year()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_snapledger_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
