use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.app_name.trim().is_empty() {
        errors.push("general.app_name must not be empty".to_string());
    }

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.port == 0 {
        errors.push("general.port must be > 0".to_string());
    }

    let url = cfg.database.url.trim();
    if url.is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if !url.to_ascii_lowercase().starts_with("sqlite:") {
        errors.push(format!(
            "database.url must use the sqlite: scheme (got {})",
            redact_url(url)
        ));
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

fn redact_url(url: &str) -> String {
    if let Some((scheme, _)) = url.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = url.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
