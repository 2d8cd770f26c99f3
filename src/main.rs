use std::process::ExitCode;
use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod mock;
mod routing;
mod server;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    run(&args)
}

/// Parse `args`, then serve until stopped. Usage errors return before any
/// socket is bound.
fn run(args: &[String]) -> ExitCode {
    let program = args
        .first()
        .map_or(env!("CARGO_PKG_NAME"), String::as_str);

    let cfg = match config::Config::from_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_usage_error(&e, program);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to start runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(async_main(cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr)
        .map_err(|e| format!("Failed to bind {addr}: {e}"))?;

    let state = Arc::new(config::AppState::new(cfg, Arc::new(logger::StdoutSink)));

    logger::log_server_start(&listener.local_addr()?);

    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}
