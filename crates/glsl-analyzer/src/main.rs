use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use clap::Parser;
use tower_lsp::{LspService, Server};
use tracing::info;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use glsl_analyzer::GlslLanguageServer;

const LOG_FILE_NAME: &str = "glsl-analyzer.log";

/// GLSL document-symbol server speaking LSP over stdio.
#[derive(Parser, Debug)]
#[command(name = "glsl-analyzer", version, about)]
struct Args {
    /// Log symbol extraction and protocol traffic at debug level.
    #[arg(long, short)]
    verbose: bool,

    /// Write the log here instead of ~/.glsl-analyzer/glsl-analyzer.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Where a tracing layer writes to.
#[derive(Clone, Copy)]
enum Sink {
    File,
    Stderr,
}

impl Sink {
    fn filter(
        self,
        verbose: bool,
    ) -> EnvFilter {
        let directives = match (self, verbose) {
            (_, false) => "glsl_analyzer=info,tower_lsp=warn",
            (Sink::File, true) => "glsl_analyzer=debug,tower_lsp=info",
            (Sink::Stderr, true) => "glsl_analyzer=debug,tower_lsp=debug",
        };
        EnvFilter::new(directives)
    }
}

fn log_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".glsl-analyzer"))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .unwrap_or_else(std::env::temp_dir)
}

/// Install the file and stderr layers; returns the log file path.
fn init_logging(args: &Args) -> PathBuf {
    let log_path = args.log_file.clone().unwrap_or_else(|| log_dir().join(LOG_FILE_NAME));

    let appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path.file_name().unwrap_or(OsStr::new(LOG_FILE_NAME)),
    );

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .with_filter(Sink::File.filter(args.verbose));

    // stdout is the protocol channel.
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(Sink::Stderr.filter(args.verbose));

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
    log_path
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let log_path = init_logging(&args);

    info!("glsl-analyzer {} serving symbols on stdio", env!("CARGO_PKG_VERSION"));
    info!("logging to {}", log_path.display());

    let (service, socket) = LspService::new(GlslLanguageServer::new);
    Server::new(tokio::io::stdin(), tokio::io::stdout(), socket).serve(service).await;

    info!("client closed the connection; exiting");
}
