use anyhow::Result;

use marquee_core::AppConfig;

/// Print the configuration path and its resolved contents
pub fn run(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path();
    println!("# {}", path.display());
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
