//! Standalone web server binary
//!
//! Usage: cargo run -p cubik_web --bin cubik-web-server

use cubik_web::{ServerConfig, WebServer, DEFAULT_SOLVER_COMMAND};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cubik_web::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let mut host = "127.0.0.1".to_string();
    let mut port = 8080u16;
    let mut solver_cmd = DEFAULT_SOLVER_COMMAND.to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--host" | "-h" => {
                if i + 1 < args.len() {
                    host = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --host requires a value");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a value");
                    std::process::exit(1);
                }
            }
            "--solver-cmd" | "-s" => {
                if i + 1 < args.len() {
                    solver_cmd = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --solver-cmd requires a value");
                    std::process::exit(1);
                }
            }
            "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    let config = ServerConfig::new(host, port, solver_cmd);

    tracing::info!("Starting Cubik Web Server");
    tracing::info!("  Host: {}", config.host());
    tracing::info!("  Port: {}", config.port());
    tracing::info!("  Solver: {}", config.solver_command());

    let server = WebServer::new(config);
    let handle = server.start().await?;

    tracing::info!("Server running at http://{}", handle.address());
    println!("Server running at http://{}", handle.address());
    println!("Press Ctrl+C to stop");

    tokio::signal::ctrl_c().await?;

    tracing::info!("Shutting down server");
    handle.shutdown().await?;
    tracing::info!("Server stopped cleanly");

    Ok(())
}

fn print_help() {
    println!("Cubik Web Server");
    println!();
    println!("Usage: cubik-web-server [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --host, -h <HOST>          Host to bind to (default: 127.0.0.1)");
    println!("  --port, -p <PORT>          Port to bind to (default: 8080)");
    println!("  --solver-cmd, -s <CMD>     External solver command (default: cubik-solver)");
    println!("  --help                     Show this help message");
}
