use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use nutristats::api::{HttpStatisticsSource, StatisticsSource};
use nutristats::cli::args::{Cli, Commands};
use nutristats::cli::handlers;
use nutristats::config::AppConfig;
use nutristats::tui;
use nutristats::tui::theme::Theme;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = AppConfig::load().context("Loading config")?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        Some(Commands::Stats { period }) => {
            let period = period.unwrap_or(config.display.default_period);
            let translator = config.display.translator()?;
            let source = http_source(&config)?;
            handlers::handle_stats(source.as_ref(), &config, &translator, period)?;
        }
        Some(Commands::Export { period }) => {
            let period = period.unwrap_or(config.display.default_period);
            let source = http_source(&config)?;
            handlers::handle_export(source.as_ref(), &config, period)?;
        }
        Some(Commands::Config { init }) => {
            handlers::handle_config(&config, init)?;
        }

        // No subcommand → launch TUI
        None => {
            let translator = config.display.translator()?;
            let theme: Theme = config.display.theme.parse()?;
            let source = http_source(&config)?;
            let period = cli.period.unwrap_or(config.display.default_period);
            let app = tui::app::App::new(period, theme, translator, config.targets.clone());
            tui::app::run(source, app, config.display.tick_rate_ms)?;
        }
    }

    Ok(())
}

fn http_source(config: &AppConfig) -> Result<Arc<dyn StatisticsSource>> {
    let source = HttpStatisticsSource::new(&config.server).context("Building HTTP client")?;
    Ok(Arc::new(source))
}

/// Command-line flags win over config.toml for this run only.
fn apply_overrides(config: &mut AppConfig, cli: &Cli) {
    if let Some(url) = &cli.base_url {
        config.server.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config.server.auth_token = Some(token.clone());
    }
    if let Some(locale) = &cli.locale {
        config.display.locale = locale.clone();
    }
    if let Some(theme) = &cli.theme {
        config.display.theme = theme.clone();
    }
}
