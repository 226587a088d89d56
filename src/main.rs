use anyhow::Result;
use campo::api::ApiClient;
use campo::config::Config;
use campo::constants::ERROR_NO_API_URL;
use campo::ui;
use campo::ui_state::UiStateStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    if config.effective_base_url().is_none() {
        eprintln!("{}", ERROR_NO_API_URL);
        eprintln!("\nTo use this app:");
        eprintln!("1. Set CAMPO_API_URL to the backend's base URL, or");
        eprintln!("2. Put api.base_url in campo.toml / the XDG config file");
        return Ok(());
    }

    let api = Arc::new(ApiClient::from_config(&config)?);
    let ui_state = UiStateStore::load()?;

    ui::run_app(api, &config, ui_state).await?;

    Ok(())
}
