use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use datepick::config::Config;
use datepick::logging::init_tracing;
use datepick::ui::runtime;

/// Terminal date picker: three linked selectors and a free-form input.
#[derive(Debug, Parser)]
#[command(name = "datepick", version, about)]
struct Cli {
    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// First year offered by the year selector.
    #[arg(long, value_name = "YEAR")]
    min_year: Option<i32>,

    /// Last year offered by the year selector.
    #[arg(long, value_name = "YEAR")]
    max_year: Option<i32>,

    /// Date to start from, in YYYY-MM-DD form.
    #[arg(long, value_name = "DATE")]
    value: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    apply_overrides(&mut config, &cli);
    config.validate().context("command line overrides")?;

    runtime::run(&config).context("running the ui")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(min_year) = cli.min_year {
        config.min_year = min_year;
    }
    if let Some(max_year) = cli.max_year {
        config.max_year = max_year;
    }
    if let Some(value) = cli.value.as_deref() {
        config.value = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_overrides, Cli, Config};
    use clap::Parser;

    #[test]
    fn overrides_replace_config_fields() {
        let cli = Cli::parse_from([
            "datepick",
            "--min-year",
            "1900",
            "--max-year",
            "2100",
            "--value",
            "1999-12-31",
        ]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.min_year, 1900);
        assert_eq!(config.max_year, 2100);
        assert_eq!(config.value.as_deref(), Some("1999-12-31"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let cli = Cli::parse_from(["datepick"]);
        let mut config = Config {
            min_year: 1970,
            max_year: 1980,
            value: Some("1975-06-15".to_string()),
        };
        apply_overrides(&mut config, &cli);
        assert_eq!(config.min_year, 1970);
        assert_eq!(config.max_year, 1980);
        assert_eq!(config.value.as_deref(), Some("1975-06-15"));
    }

    #[test]
    fn inverted_override_span_fails_validation() {
        let cli = Cli::parse_from(["datepick", "--min-year", "2005", "--max-year", "1995"]);
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert!(config.validate().is_err());
    }
}
