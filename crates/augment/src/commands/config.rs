//! Config command implementation

use anyhow::Result;
use augment::config::Config;
use std::path::Path;

/// Print the configuration that would apply under `root`
pub fn show_config(root: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let root = root.unwrap_or_else(|| Path::new("."));
    let config = Config::load(root, config_path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
