//! Lexicon server - binary entry point
//!
//! Serves the dictionary over stdio MCP, or over HTTP when
//! `LEXICON_HTTP_ADDR` is set.

use std::error::Error;
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use frame_lexicon::api::{create_router, AppState};
use frame_lexicon::config::Config;
use frame_lexicon::dictionary::Dictionary;
use frame_lexicon::logging;
use frame_lexicon::protocol::ServerInfo;
use frame_lexicon::server::McpServer;
use frame_lexicon::tools::register_all_tools;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let config = Config::from_env()?;
    let dictionary = match Dictionary::open(&config) {
        Ok(dictionary) => Arc::new(dictionary),
        Err(e) => {
            error!(error = %e, data_dir = %config.data_dir.display(), "Failed to load dataset");
            return Err(e.into());
        }
    };

    ctrlc::set_handler(|| {
        info!("Interrupted, shutting down");
        process::exit(0);
    })?;

    match config.http_addr {
        Some(addr) => serve_http(addr, dictionary),
        None => {
            let info = ServerInfo::new(config.server_name.clone(), frame_lexicon::VERSION);
            let mut server = McpServer::with_info(info);
            register_all_tools(&mut server, dictionary);
            server.run()?;
            Ok(())
        }
    }
}

fn serve_http(addr: SocketAddr, dictionary: Arc<Dictionary>) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let app = create_router(Arc::new(AppState::new(dictionary)));
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "HTTP API listening");
        axum::serve(listener, app).await?;
        Ok::<(), Box<dyn Error>>(())
    })
}
