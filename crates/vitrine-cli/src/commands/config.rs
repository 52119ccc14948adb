use anyhow::Result;

use vitrine_core::AppConfig;

pub fn run(config: &AppConfig, save: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if save {
        config.save()?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    println!("# {}\n", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}
