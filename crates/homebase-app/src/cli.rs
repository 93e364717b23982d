use clap::Parser;

/// Homebase: a transparent desktop overlay with snap-to-slot widgets.
///
/// Reads UI events as JSON lines on stdin and writes host commands and
/// render views as JSON lines on stdout.
#[derive(Parser, Debug)]
#[command(name = "homebase", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error, or a full
    /// filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run without a host window; passthrough requests are dropped.
    #[arg(long)]
    pub headless: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
