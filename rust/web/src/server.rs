use std::convert::Infallible;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::info;
use warp::filters::BoxedFilter;
use warp::reply::Reply;
use warp::Filter;

use crate::handlers;
use crate::scan::ScanManager;
use crate::solver::CommandSolver;
use crate::state::CubeStore;

pub const DEFAULT_SOLVER_COMMAND: &str = "cubik-solver";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    host: String,
    port: u16,
    solver_command: String,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16, solver_command: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            solver_command: solver_command.into(),
        }
    }

    pub fn for_tests() -> Self {
        Self::new("127.0.0.1", 0, DEFAULT_SOLVER_COMMAND)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn solver_command(&self) -> &str {
        &self.solver_command
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ServerConfig,
    cube: Arc<CubeStore>,
    solver: Arc<CommandSolver>,
    scans: Arc<ScanManager>,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        let cube = Arc::new(CubeStore::new());
        let solver = Arc::new(CommandSolver::new(config.solver_command()));
        let scans = Arc::new(ScanManager::new());

        Self::new_with_dependencies(config, cube, solver, scans)
    }

    pub fn new_with_dependencies(
        config: ServerConfig,
        cube: Arc<CubeStore>,
        solver: Arc<CommandSolver>,
        scans: Arc<ScanManager>,
    ) -> Self {
        Self {
            config,
            cube,
            solver,
            scans,
        }
    }

    pub fn new_for_tests() -> Self {
        Self::new(ServerConfig::for_tests())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn cube(&self) -> Arc<CubeStore> {
        Arc::clone(&self.cube)
    }

    pub fn solver(&self) -> Arc<CommandSolver> {
        Arc::clone(&self.solver)
    }

    pub fn scans(&self) -> Arc<ScanManager> {
        Arc::clone(&self.scans)
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Clone)]
pub struct WebServer {
    context: AppContext,
}

impl WebServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            context: AppContext::new(config),
        }
    }

    pub fn from_context(context: AppContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let WebServer { context } = self;
        let config = context.config().clone();
        let bind_addr = Self::bind_addr(&config)?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = Self::routes(&context);
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        let (addr, server_future) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(bind_addr, shutdown_signal)
            .map_err(Self::map_warp_error)?;

        info!("web server listening on http://{}", addr);

        let task = tokio::spawn(async move {
            server_future.await;
            Ok(())
        });

        Ok(ServerHandle::new(addr, shutdown_tx, task, context))
    }

    fn bind_addr(config: &ServerConfig) -> Result<SocketAddr, ServerError> {
        let host = config.host();

        if let Ok(addr) = host.parse::<SocketAddr>() {
            return Ok(addr);
        }

        if let Ok(ip) = host.parse::<std::net::IpAddr>() {
            return Ok(SocketAddr::new(ip, config.port()));
        }

        let candidate = format!("{}:{}", host, config.port());
        let mut addrs = candidate.to_socket_addrs().map_err(|err| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`: {err}"))
        })?;

        addrs.next().ok_or_else(|| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`"))
        })
    }

    fn map_warp_error(err: warp::Error) -> ServerError {
        use std::error::Error as StdError;

        if let Some(source) = err.source() {
            if let Some(io_err) = source.downcast_ref::<std::io::Error>() {
                let recreated = std::io::Error::new(io_err.kind(), io_err.to_string());
                return ServerError::BindError(recreated);
            }
        }

        ServerError::ConfigError(err.to_string())
    }

    pub fn routes(context: &AppContext) -> BoxedFilter<(warp::reply::Response,)> {
        let health = Self::health_route();
        let cube_routes = Self::cube_routes(context);
        let solving_routes = Self::solving_routes(context);
        let scan_routes = Self::scan_routes(context);

        health
            .or(cube_routes)
            .unify()
            .or(solving_routes)
            .unify()
            .or(scan_routes)
            .unify()
            .boxed()
    }

    fn health_route() -> BoxedFilter<(warp::reply::Response,)> {
        warp::path("health")
            .and(warp::get())
            .and(warp::path::end())
            .map(|| handlers::health::health().into_response())
            .boxed()
    }

    fn cube_routes(context: &AppContext) -> BoxedFilter<(warp::reply::Response,)> {
        let cube = context.cube();

        let snapshot = warp::path!("api" / "cube")
            .and(warp::get())
            .and(Self::with_cube_store(cube.clone()))
            .and_then(|cube: Arc<CubeStore>| async move {
                let response = handlers::get_cube(cube).await;
                Ok::<_, Infallible>(response)
            });

        let reset = warp::path!("api" / "cube" / "reset")
            .and(warp::post())
            .and(Self::with_cube_store(cube.clone()))
            .and_then(|cube: Arc<CubeStore>| async move {
                let response = handlers::reset_cube(cube).await;
                Ok::<_, Infallible>(response)
            });

        let scramble = warp::path!("api" / "cube" / "scramble")
            .and(warp::post())
            .and(Self::with_cube_store(cube.clone()))
            .and(warp::body::json())
            .and_then(
                |cube: Arc<CubeStore>, request: handlers::ScrambleRequest| async move {
                    let response = handlers::scramble_cube(cube, request).await;
                    Ok::<_, Infallible>(response)
                },
            );

        let apply = warp::path!("api" / "cube" / "moves")
            .and(warp::post())
            .and(Self::with_cube_store(cube.clone()))
            .and(warp::body::json())
            .and_then(
                |cube: Arc<CubeStore>, request: handlers::ApplyMovesRequest| async move {
                    let response = handlers::apply_moves(cube, request).await;
                    Ok::<_, Infallible>(response)
                },
            );

        let set_state = warp::path!("api" / "cube" / "state")
            .and(warp::post())
            .and(Self::with_cube_store(cube))
            .and(warp::body::json())
            .and_then(
                |cube: Arc<CubeStore>, request: handlers::SetStateRequest| async move {
                    let response = handlers::set_state(cube, request).await;
                    Ok::<_, Infallible>(response)
                },
            );

        snapshot
            .or(reset)
            .unify()
            .or(scramble)
            .unify()
            .or(apply)
            .unify()
            .or(set_state)
            .unify()
            .boxed()
    }

    fn solving_routes(context: &AppContext) -> BoxedFilter<(warp::reply::Response,)> {
        let cube = context.cube();
        let solver = context.solver();

        warp::path!("api" / "solving" / "start")
            .and(warp::post())
            .and(Self::with_cube_store(cube))
            .and(Self::with_solver(solver))
            .and_then(
                |cube: Arc<CubeStore>, solver: Arc<CommandSolver>| async move {
                    let response = handlers::start_solving(cube, solver).await;
                    Ok::<_, Infallible>(response)
                },
            )
            .boxed()
    }

    fn scan_routes(context: &AppContext) -> BoxedFilter<(warp::reply::Response,)> {
        let scans = context.scans();

        let start = warp::path!("api" / "scan" / "start")
            .and(warp::post())
            .and(Self::with_scan_manager(scans.clone()))
            .and_then(|scans: Arc<ScanManager>| async move {
                let response = handlers::start_scan(scans).await;
                Ok::<_, Infallible>(response)
            });

        let frame = warp::path!("api" / "scan" / String / "frame")
            .and(warp::post())
            .and(Self::with_scan_manager(scans.clone()))
            .and(warp::body::json())
            .and_then(
                |scan_id: String, scans: Arc<ScanManager>, request: handlers::FrameRequest| async move {
                    let response = handlers::scan_frame(scan_id, scans, request).await;
                    Ok::<_, Infallible>(response)
                },
            );

        let cancel = warp::path!("api" / "scan" / String / "cancel")
            .and(warp::post())
            .and(Self::with_scan_manager(scans))
            .and_then(|scan_id: String, scans: Arc<ScanManager>| async move {
                let response = handlers::cancel_scan(scan_id, scans).await;
                Ok::<_, Infallible>(response)
            });

        start.or(frame).unify().or(cancel).unify().boxed()
    }

    fn with_cube_store(
        cube: Arc<CubeStore>,
    ) -> impl Filter<Extract = (Arc<CubeStore>,), Error = Infallible> + Clone {
        warp::any().map(move || Arc::clone(&cube))
    }

    fn with_solver(
        solver: Arc<CommandSolver>,
    ) -> impl Filter<Extract = (Arc<CommandSolver>,), Error = Infallible> + Clone {
        warp::any().map(move || Arc::clone(&solver))
    }

    fn with_scan_manager(
        scans: Arc<ScanManager>,
    ) -> impl Filter<Extract = (Arc<ScanManager>,), Error = Infallible> + Clone {
        warp::any().map(move || Arc::clone(&scans))
    }
}

#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Result<(), ServerError>>>,
    context: AppContext,
}

impl ServerHandle {
    fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<Result<(), ServerError>>,
        context: AppContext,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
            context,
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            match task.await {
                Ok(result) => result?,
                Err(err) => {
                    return Err(ServerError::ConfigError(format!(
                        "server task join error: {err}"
                    )))
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_accepts_plain_ip() {
        let config = ServerConfig::new("127.0.0.1", 9000, DEFAULT_SOLVER_COMMAND);
        let addr = WebServer::bind_addr(&config).unwrap();
        assert_eq!(addr.port(), 9000);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn bind_addr_accepts_full_socket_addr() {
        let config = ServerConfig::new("0.0.0.0:8123", 0, DEFAULT_SOLVER_COMMAND);
        let addr = WebServer::bind_addr(&config).unwrap();
        assert_eq!(addr.port(), 8123);
    }

    #[tokio::test]
    async fn server_starts_and_shuts_down() {
        let server = WebServer::new(ServerConfig::for_tests());
        let handle = server.start().await.expect("start server");
        assert_ne!(handle.address().port(), 0);
        handle.shutdown().await.expect("clean shutdown");
    }

    #[tokio::test]
    async fn health_route_answers_ok() {
        let context = AppContext::new_for_tests();
        let routes = WebServer::routes(&context);

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "{\"status\":\"ok\"}");
    }
}
