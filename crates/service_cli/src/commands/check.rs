//! Check command: shows the effective configuration.

use std::path::Path;

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(config_path: &Path, config: &CliConfig) -> Result<()> {
    println!("{}", report(config_path, config)?);
    Ok(())
}

/// Describes where the configuration came from and what it resolved to.
pub fn report(config_path: &Path, config: &CliConfig) -> Result<String> {
    let source = if config_path.exists() {
        format!("{} (loaded)", config_path.display())
    } else {
        format!("{} (not found, using defaults)", config_path.display())
    };

    Ok(format!(
        "bsprice {}\nConfiguration: {}\n\n{}",
        env!("CARGO_PKG_VERSION"),
        source,
        toml::to_string_pretty(config)?
    ))
}
