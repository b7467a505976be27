use std::{net::SocketAddr, process::ExitCode, time::Duration};

use anyhow::{Context, Error};
use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServiceExt,
};
use tokio::net::{TcpListener, TcpStream};

use crate::{
    cli::{LaunchProfile, TransportMode},
    server::{
        config::ServerConfig,
        runtime::{build_instructions, UtilityServer},
    },
};

/// Route the streamable HTTP service is mounted under.
pub const HTTP_MOUNT_PATH: &str = "/mcp";

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Bundles a runtime error message with an exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

/// Start the MCP server on the transport selected by the launch profile.
pub async fn run_server(profile: LaunchProfile, config: ServerConfig) -> Result<(), RuntimeExit> {
    let instructions = build_instructions(&profile, &config);
    let server = UtilityServer::new(config.clone(), instructions.clone());

    crate::lib::telemetry::emit_runtime_mode(&crate::lib::telemetry::RuntimeModeTelemetry {
        transport: profile.transport.as_str(),
        host: Some(config.server.host.as_str()),
        port: Some(config.server.port),
        server_name: &config.server.name,
        config_path: config.source_path.to_string_lossy().as_ref(),
        instructions: &instructions,
        launch_args: &profile.launch_args,
    });

    match profile.transport {
        TransportMode::Stdio => run_stdio(server).await,
        TransportMode::Tcp => run_tcp(server, &config).await,
        TransportMode::Http => run_http(server, &config).await,
    }
}

async fn run_stdio(server: UtilityServer) -> Result<(), RuntimeExit> {
    let running = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(RuntimeExit::from_error)?;
    running.waiting().await.map_err(RuntimeExit::from_error)?;
    Ok(())
}

async fn run_tcp(server: UtilityServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = config.server.bind_addr();
    let listener = bind(&addr).await?;
    tracing::info!(
        target: "utility_mcp::runtime",
        transport = "tcp",
        bind_addr = %addr,
        "Started listening in TCP mode"
    );

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(err) => {
                tracing::warn!(
                    target: "utility_mcp::runtime",
                    bind_addr = %addr,
                    error = %err,
                    "Failed to accept TCP connection"
                );
                tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                continue;
            }
        };
        tracing::info!(
            target: "utility_mcp::runtime",
            peer = %peer,
            "Accepted connection from MCP client"
        );
        tokio::spawn(serve_tcp_session(server.clone(), stream, peer));
    }
}

/// Serve one TCP client. Failures end only this session.
async fn serve_tcp_session(server: UtilityServer, stream: TcpStream, peer: SocketAddr) {
    let running = match server.serve(stream).await {
        Ok(running) => running,
        Err(err) => {
            tracing::warn!(
                target: "utility_mcp::runtime",
                peer = %peer,
                error = %err,
                "MCP session failed to initialize"
            );
            return;
        }
    };
    match running.waiting().await {
        Ok(reason) => tracing::info!(
            target: "utility_mcp::runtime",
            peer = %peer,
            reason = ?reason,
            "MCP session closed"
        ),
        Err(err) => tracing::warn!(
            target: "utility_mcp::runtime",
            peer = %peer,
            error = %err,
            "MCP session task failed"
        ),
    }
}

async fn run_http(server: UtilityServer, config: &ServerConfig) -> Result<(), RuntimeExit> {
    let addr = config.server.bind_addr();
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(HTTP_MOUNT_PATH, service);
    let listener = bind(&addr).await?;
    tracing::info!(
        target: "utility_mcp::runtime",
        transport = "http",
        bind_addr = %addr,
        path = HTTP_MOUNT_PATH,
        "Started listening in streamable HTTP mode"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| format!("HTTP server on {addr} terminated abnormally"))
        .map_err(RuntimeExit::from_error)?;
    tracing::info!(target: "utility_mcp::runtime", "HTTP server stopped");
    Ok(())
}

async fn bind(addr: &str) -> Result<TcpListener, RuntimeExit> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind TCP port {addr}"))
        .map_err(RuntimeExit::from_error)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(
            target: "utility_mcp::runtime",
            error = %err,
            "Failed to listen for Ctrl-C; HTTP server runs until killed"
        );
        std::future::pending::<()>().await;
    }
    tracing::info!(target: "utility_mcp::runtime", "Shutdown signal received");
}
