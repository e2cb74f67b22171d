use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// `$SNAPLEDGER_HOME`, or `~/.snapledger`
pub fn snapledger_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SNAPLEDGER_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".snapledger"))
}

pub fn ensure_snapledger_home() -> Result<PathBuf> {
    let dir = snapledger_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Resolve a configured path; relative paths hang off the home dir.
pub fn resolve_in_home(home: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        home.join(p)
    }
}

/// Read OCR text from a file, or stdin for `-`.
pub fn read_text(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut s = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut s).context("read stdin")?;
        return Ok(s);
    }
    fs::read_to_string(input).with_context(|| format!("read {}", input.display()))
}
