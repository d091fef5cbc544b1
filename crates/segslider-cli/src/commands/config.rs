use std::path::Path;

use anyhow::Result;

use segslider_core::AppConfig;

pub fn path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
        println!("\nTo overwrite it with defaults, run:");
        println!("  segslider config init --force");
        return Ok(());
    }

    AppConfig::default().save_to(config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
