//! Terminal client for a nutrition tracker's statistics endpoint.
//!
//! Fetches a pre-aggregated snapshot for a period, derives display values
//! (level progress, nutrient percentages, achievement progress) and renders
//! them as a ratatui dashboard or plain text.

pub mod api;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod models;
pub mod stats;
pub mod tui;
pub mod utils;
