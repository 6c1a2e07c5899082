use color_eyre::Result;
use log::info;
use pocket_snake::{shell, snake::config::GameConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let config = GameConfig::from_env()?;

    shell::run(config).await
}
