mod app;
mod effects;
mod input;
mod render;

use client_logging::client_info;
use satire_client::ClientConfig;

fn main() -> anyhow::Result<()> {
    client_logging::initialize_terminal();
    let config = ClientConfig::from_env()?;
    client_info!("satire client starting against {}", config.base_url);
    app::run(config)
}
