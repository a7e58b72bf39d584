use log::{info, warn};
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::api::build_router;
use crate::config::ServerConfig;
use crate::server::state::AppState;

pub struct Server {
    listener: TcpListener,
    state: AppState,
}

impl Server {
    /// Binds the configured socket. Users start empty on every launch.
    pub async fn new(config: ServerConfig) -> io::Result<Self> {
        let socket = config.listen_socket();
        let listener = TcpListener::bind(&socket).await?;
        info!("Server bound to {}", listener.local_addr()?);

        Ok(Self {
            listener,
            state: AppState::new(config),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        info!(
            "Starting Basic Auth server on {} (bcrypt cost {}, realm \"{}\")",
            self.local_addr()?,
            self.state.hasher.cost(),
            self.state.config.realm
        );

        let app = build_router(self.state);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
