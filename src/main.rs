use std::time::Instant;

use sandbox_api::{
    infrastructure::logger::Logger, server, AppState, BuildInfo, Config, Error,
};

#[tokio::main]
async fn main() -> sandbox_api::Result<()> {
    let started_at = Instant::now();

    let config = Config::load()?;
    config.validate().map_err(Error::InvalidConfig)?;

    Logger::init(&config.rust_log)?;

    let state = AppState::new(config.node_env.clone(), BuildInfo::from_package(), started_at);
    server::serve(&config, state).await
}
