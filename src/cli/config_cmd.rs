//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::infrastructure::PasteToolPreference;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "capacity" => {
            config.capacity = Some(parse_number(key, value)?);
        }
        "poll_interval_ms" => {
            config.poll_interval_ms = Some(parse_number(key, value)?);
        }
        "paste_delay_ms" => {
            config.paste_delay_ms = Some(parse_number(key, value)?);
        }
        "settle_delay_ms" => {
            config.settle_delay_ms = Some(parse_number(key, value)?);
        }
        "history_file" => config.history_file = Some(value.to_string()),
        "paste_tool" => {
            value
                .parse::<PasteToolPreference>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            config.paste_tool = Some(value.to_lowercase());
        }
        _ => unreachable!("validated above"),
    }

    store.save(&config).await?;
    presenter.success(&format!("Set {} = {}", key, value));
    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;
    let value = config_value(&config, key);
    presenter.key_value(key, &value);
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, &config_value(&config, key));
    }
    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn config_value(config: &crate::domain::config::AppConfig, key: &str) -> String {
    let unset = || "(unset)".to_string();
    match key {
        "capacity" => config.capacity.map(|v| v.to_string()).unwrap_or_else(unset),
        "poll_interval_ms" => config
            .poll_interval_ms
            .map(|v| v.to_string())
            .unwrap_or_else(unset),
        "paste_delay_ms" => config
            .paste_delay_ms
            .map(|v| v.to_string())
            .unwrap_or_else(unset),
        "settle_delay_ms" => config
            .settle_delay_ms
            .map(|v| v.to_string())
            .unwrap_or_else(unset),
        "history_file" => config.history_file.clone().unwrap_or_else(unset),
        "paste_tool" => config.paste_tool.clone().unwrap_or_else(unset),
        _ => unset(),
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be a non-negative integer".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn set_and_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "capacity".into(),
                value: "12".into(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.capacity, Some(12));
    }

    #[tokio::test]
    async fn set_rejects_unknown_key() {
        let dir = tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "api_key".into(),
                value: "x".into(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn set_rejects_non_numeric_interval() {
        let dir = tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "poll_interval_ms".into(),
                value: "fast".into(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn set_rejects_unknown_paste_tool() {
        let dir = tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_config_command(
            ConfigAction::Set {
                key: "paste_tool".into(),
                value: "robotgo".into(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
