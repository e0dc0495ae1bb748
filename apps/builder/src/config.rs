use anyhow::{Context, Result};

use crate::models::style::TemplateStyle;

/// Startup configuration loaded from environment variables. Everything is
/// optional; the core has no external services to reach.
#[derive(Debug, Clone)]
pub struct Config {
    /// Visual variant chosen by the host, fixed for the process lifetime.
    pub template_style: TemplateStyle,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let style_raw =
            std::env::var("TEMPLATE_STYLE").unwrap_or_else(|_| "modern".to_string());
        let template_style = TemplateStyle::parse(&style_raw)
            .with_context(|| format!("TEMPLATE_STYLE '{style_raw}' is not a known style"))?;

        Ok(Config {
            template_style,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
