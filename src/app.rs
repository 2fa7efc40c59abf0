//! Startup wiring: open the store, import, then serve.

use crate::{
    config::Config,
    import::Importer,
    server,
    service::Service,
    storage::PlayerDatabase,
    Result,
};
use std::path::Path;
use std::sync::Arc;

/// Open the configured store, creating the schema when it is new.
///
/// The schema is created for in-memory databases and when the database file
/// did not exist before opening.
pub fn open_database(config: &Config) -> Result<PlayerDatabase> {
    let fresh = config.in_memory || !Path::new(&config.db_file_path).exists();

    let db = PlayerDatabase::open(config.db_source())?;
    if fresh {
        tracing::info!(source = config.db_source(), "creating players schema");
        db.create_schema()?;
    }
    Ok(db)
}

/// Open the store and run the import, returning the ready service.
pub async fn prepare(config: &Config, importer: &Importer) -> Result<Service<PlayerDatabase>> {
    let db = open_database(config)?;

    let imported = importer.run(&db).await?;
    let service = Service::new(db);

    let total = service.players().count()?;
    tracing::info!(imported, total, "import finished");

    Ok(service)
}

/// Run the whole service until the listener fails.
pub async fn run(config: Config) -> Result<()> {
    let importer = Importer::from_config(&config);
    let service = prepare(&config, &importer).await?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!(addr = %listener.local_addr()?, "starting server");

    axum::serve(listener, server::router(Arc::new(service))).await?;
    Ok(())
}
