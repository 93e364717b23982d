mod app_state;
mod cli;
mod ipc;

use std::io::{self, BufRead, Write};
use std::path::Path;

use homebase_common::HomebaseError;
use homebase_config::HomebaseConfig;
use homebase_layout::platform::noop::NoopHostBridge;
use homebase_layout::HostBridge;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use app_state::{LineBridge, OverlayApp};

const DEFAULT_LOG_DIRECTIVE: &str = "homebase=info";

/// `--log-level` wins, then `[logging] level`. A bare level is scoped to
/// the homebase crates.
fn log_directive(cli_level: Option<&str>, config: Option<&HomebaseConfig>) -> String {
    match (cli_level, config) {
        (Some(level), _) if level.contains('=') => level.to_string(),
        (Some(level), _) => format!("homebase={level}"),
        (None, Some(config)) => format!("homebase={}", config.logging.level.as_str()),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    match directive.parse::<Directive>() {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

/// Load the config under a provisional subscriber so loader diagnostics
/// are not lost before `[logging] level` is known.
fn load_config_logged<W>(
    cli_level: Option<&str>,
    path: Option<&Path>,
    writer: W,
) -> Result<HomebaseConfig, homebase_common::ConfigError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let provisional = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(env_filter(&log_directive(cli_level, None)))
        .finish();
    tracing::subscriber::with_default(provisional, || homebase_config::load_config(path))
}

/// Read UI messages from `input` until EOF, writing replies to `output`.
fn run(
    app: &mut OverlayApp,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), HomebaseError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let msg = match ipc::parse_line(&line) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::warn!(line_len = line.len(), "skipping IPC line: {e}");
                continue;
            }
        };
        for reply in app.handle(msg) {
            writeln!(output, "{}", reply.to_line()?)?;
        }
        output.flush()?;
    }
    Ok(())
}

fn main() {
    let args = cli::parse();

    let loaded = load_config_logged(
        args.log_level.as_deref(),
        args.config.as_deref().map(Path::new),
        io::stderr,
    );

    let directive = log_directive(args.log_level.as_deref(), loaded.as_ref().ok());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(&directive))
        .init();

    tracing::info!("Homebase v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        HomebaseConfig::default()
    });

    if args.print_config {
        println!("{}", homebase_config::config_to_json(&config));
        return;
    }

    let bridge: Box<dyn HostBridge> = if args.headless {
        tracing::info!("Running headless; passthrough requests are dropped");
        Box::new(NoopHostBridge)
    } else {
        Box::new(LineBridge::new(io::stdout()))
    };
    let mut app = OverlayApp::new(&config, bridge);
    tracing::info!(
        slots = app.placement().occupancy().capacity(),
        "Overlay ready, reading UI events from stdin"
    );

    let stdin = io::stdin();
    if let Err(e) = run(&mut app, stdin.lock(), io::stdout()) {
        tracing::error!("IPC loop error: {e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
