//! Config subcommands handler

use anyhow::Result;

use kbtidy::{current_theme, Config};

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;
    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format!("# {}", path.display()))
    );
    println!("{}", theme.primary_text(&render(&config)?));
    Ok(())
}

/// Serialize a config the way `config show` prints it.
pub fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
