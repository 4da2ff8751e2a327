use clap::Parser;
use symscan::backend::Backend;
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "symscan", version, about = "A declaration-index language server")]
struct Args {
    /// Communicate over stdin/stdout (the only supported transport)
    #[arg(long)]
    stdio: bool,

    /// Log filter for stderr, e.g. `debug` or `symscan=trace`. Falls back to RUST_LOG, then `info`
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn init_logger(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // stdout carries the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level.as_deref());
    tracing::info!(stdio = args.stdio, "starting symscan");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
