use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn eduease_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".eduease"))
}

pub fn ensure_eduease_home() -> Result<PathBuf> {
    let dir = eduease_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
