use program_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::{loader, CatalogStore},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing("info");

    let config = Config::from_env()?;

    // Seed the catalog if a program data file is configured
    let catalog = match &config.programs_file {
        Some(path) => CatalogStore::with_programs(loader::load_program_data(path)?),
        None => CatalogStore::new(),
    };
    tracing::info!(programs = catalog.len(), "Catalog initialized");

    let state = AppState::from_config(&config, catalog);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
