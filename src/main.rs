use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todos::todo::{self, MemoryStore, PgStore};
use todos::{Config, Error, Server};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let server = Server::bind(config.bind);

    if config.in_memory {
        info!("using in-memory store");
        server.serve(todo::routes(Arc::new(MemoryStore::new()))).await
    } else {
        let store = PgStore::connect(&config.database_url, config.max_connections).await?;
        server.serve(todo::routes(Arc::new(store))).await
    }
}
