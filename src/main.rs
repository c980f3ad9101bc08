use std::fs::File;
use std::rc::Rc;

use clap::Parser;
use pagestack::Navigator;
use pagestack::core::config::{self, CliOverrides};
use pagestack::tui::{self, components::CounterPage};
use simplelog::{ConfigBuilder, WriteLogger};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "pagestack", about = "Page navigation demo for the terminal")]
struct Args {
    /// Pages kept for going back (0 keeps only the active page)
    #[arg(long)]
    history: Option<usize>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Number shown on the first page
    #[arg(long, default_value_t = 1)]
    start: u32,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported after the logger is up, so defaults are used meanwhile
    let file_config = config::load_config();
    let cli = CliOverrides {
        history_limit: args.history,
        target_fps: args.fps,
    };
    let resolved = match &file_config {
        Ok(file) => config::resolve(file, cli),
        Err(_) => config::resolve(&config::PagestackConfig::default(), cli),
    };

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!(
        "pagestack starting up (history_limit={}, target_fps={})",
        resolved.history_limit,
        resolved.target_fps
    );

    let cancellation = CancellationToken::new();
    let on_signal = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Received interrupt signal, cancelling navigator");
            on_signal.cancel();
        }
    });

    let navigator = Navigator::from_config(&resolved)
        .default_page(Rc::new(CounterPage::new(args.start)))
        .cancellation(cancellation)
        .build();

    tui::run(navigator, &resolved)
}
