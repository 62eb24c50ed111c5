use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::sync::mpsc;
use tokio_util::sync::CancellationToken;

mod api;
mod app;
mod banner;
mod config;
mod error;
mod form;
mod push;
mod results;

use app::App;
use error::DingError;

/// Terminal client for a real-time notification service
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal client for a real-time notification service: live in-app toasts plus fetch/send over REST"
)]
struct Args {
    /// Base URL of the notification server (overrides config)
    #[arg(long)]
    server: Option<String>,

    /// Explicit push channel URL (overrides config; derived from the
    /// server URL when not set)
    #[arg(long)]
    push_url: Option<String>,

    /// Prefill the user id fields
    #[arg(long)]
    user: Option<u64>,
}

fn main() -> Result<()> {
    // Writes to /tmp/ding-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ding-debug.log")
            .expect("Failed to open /tmp/ding-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== DING DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early, then fold in CLI overrides
    let config_result = config::load_config();
    let mut config = config_result.config;

    let args = Args::parse();
    if let Some(server) = args.server {
        config.server.base_url = server;
    }
    if let Some(push_url) = args.push_url {
        config.server.push_url = Some(push_url);
    }

    validate_endpoints(&config)?;

    let terminal = init_terminal()?;

    let mut app = App::new(&config);
    if let Some(user) = args.user {
        let value = user.to_string();
        app.fetch_user_id.set_value(&value);
        app.send_user_id.set_value(&value);
    }
    if let Some(warning) = config_result.warning {
        log::warn!("{}", warning);
        app.status_message = Some(warning);
    }

    let cancel_token = CancellationToken::new();
    setup_workers(&mut app, &config, cancel_token.clone());

    let result = run(terminal, app);

    // Stop the push worker before tearing down the terminal
    cancel_token.cancel();

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== DING DEBUG SESSION ENDED ===");

    Ok(())
}

/// Reject endpoints with the wrong scheme before touching the terminal
fn validate_endpoints(config: &config::Config) -> Result<(), DingError> {
    let base = &config.server.base_url;
    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(DingError::InvalidServerUrl(base.clone()));
    }

    if let Some(push_url) = &config.server.push_url
        && !push_url.starts_with("ws://")
        && !push_url.starts_with("wss://")
    {
        return Err(DingError::InvalidPushUrl(push_url.clone()));
    }

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

/// Spawn the API and push workers and wire their channels into the app
fn setup_workers(app: &mut App, config: &config::Config, cancel_token: CancellationToken) {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    app.set_api_channels(request_tx, response_rx);
    api::spawn_worker(&config.server.base_url, request_rx, response_tx);

    let (update_tx, update_rx) = mpsc::channel();
    app.set_push_channel(update_rx);
    push::spawn_worker(config.server.push_endpoint(), update_tx, cancel_token);
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Poll before render so worker updates land in this frame
        app.poll_workers();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
