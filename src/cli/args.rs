use clap::{Parser, Subcommand};

use crate::models::Period;

#[derive(Parser, Debug)]
#[command(name = "nutristats", version, author, about = "A terminal dashboard for your nutrition-tracking statistics")]
pub struct Cli {
    /// Backend base URL (overrides config), e.g. https://example.com/api
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token sent with every request (overrides config)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Interface language: en, he
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Color theme: dark, light
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Period to open the dashboard on: today, week, month
    #[arg(long, short)]
    pub period: Option<Period>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the statistics report to stdout
    Stats {
        /// Period: today, week, month
        #[arg(long, short)]
        period: Option<Period>,
    },
    /// Print the snapshot and derived values as JSON
    Export {
        /// Period: today, week, month
        #[arg(long, short)]
        period: Option<Period>,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a config file with default values
        #[arg(long)]
        init: bool,
    },
}
