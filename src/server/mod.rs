// Server module entry point
// Runtime setup, listener creation and the per-connection accept loop

mod listener;

pub use listener::create_reusable_listener;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::handler::Router;
use crate::logger;

/// Build the Tokio runtime and serve `router` until the process exits.
///
/// Worker thread count comes from configuration when set, otherwise the
/// runtime default (CPU cores) applies.
pub fn run(
    service: &'static str,
    cfg: Config,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(serve(service, cfg, router))
}

async fn serve(
    service: &'static str,
    cfg: Config,
    router: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = create_reusable_listener(addr)?;

    logger::log_server_start(service, &addr, &cfg);

    let access_log = cfg.logging.access_log;
    let router = Arc::new(router.with_access_log(access_log));

    accept_loop(listener, router, access_log).await
}

/// Accept connections forever, spawning one task per connection.
///
/// Accept errors are logged and the loop continues; a single failed
/// connection never takes the service down.
async fn accept_loop(
    listener: TcpListener,
    router: Arc<Router>,
    access_log: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                if access_log {
                    logger::log_connection_accepted(&peer_addr);
                }
                handle_connection(stream, Arc::clone(&router));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve one connection in a spawned task.
///
/// Each request on the connection is handled as an independent unit of
/// work against the shared route table; no state crosses requests.
fn handle_connection(stream: tokio::net::TcpStream, router: Arc<Router>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let conn = http1::Builder::new().serve_connection(
            io,
            service_fn(move |req| {
                let router = Arc::clone(&router);
                async move { router.handle(req).await }
            }),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
