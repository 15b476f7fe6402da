use cardswipe::app::{App, Flow};
use cardswipe::cli::{AppConfig, Args};
use cardswipe::config::UserConfig;
use cardswipe::domain::{generate_items, DeckStore};
use cardswipe::logging;
use cardswipe::tui;

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};

/// Poll interval while the card is moving
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll interval when nothing is animating
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Convert to config
    let config: AppConfig = args.into();

    if let Some(ref log_dir) = config.log_dir {
        if let Err(e) = logging::init_logging(&config.log_level, log_dir) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    }

    // Run the app
    run_app_with_config(&config)
}

/// Runs the TUI application with configuration
pub fn run_app_with_config(config: &AppConfig) -> io::Result<()> {
    let store = DeckStore::new(generate_items(config.cards), config.capacity);

    // Load user configuration
    let mut user_config = UserConfig::load().unwrap_or_else(|e| {
        warn!("event=config_load_failed error={}", e);
        eprintln!("Warning: Failed to load user config: {}", e);
        UserConfig::default()
    });

    // Show welcome on first launch or if --welcome flag is set
    let show_welcome = config.show_welcome || !user_config.welcome_shown;
    let mut app = App::new(store, show_welcome);

    info!(
        "event=session_start cards={} capacity={}",
        config.cards, config.capacity
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let mut warnings = Vec::new();
    let result = run_loop(&mut terminal, &mut app, &mut user_config, &mut warnings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Warnings raised while the UI owned the screen
    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    // Print summary after exit
    let stats = app.store.statistics();
    info!(
        "event=session_end kept={} trashed={} remaining={}",
        stats.kept, stats.trashed, stats.remaining
    );
    println!(
        "Reviewed {} of {} cards: kept {}, trashed {}",
        stats.kept + stats.trashed,
        stats.total,
        stats.kept,
        stats.trashed
    );
    for item in app.store.saved_list() {
        println!("   {}", item.title);
    }

    result
}

/// Main application loop
fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    user_config: &mut UserConfig,
    warnings: &mut Vec<String>,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| tui::render(frame, app))?;

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        // Handle input
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match app.handle_key(key) {
                    Flow::Quit => break,
                    Flow::WelcomeDismissed => {
                        // Mark welcome as shown and persist
                        let saved = match UserConfig::config_path() {
                            Some(path) => user_config.mark_welcome_shown(&path),
                            None => {
                                user_config.welcome_shown = true;
                                user_config.save()
                            }
                        };
                        if let Err(e) = saved {
                            warn!("event=config_save_failed error={}", e);
                            warnings.push(format!("Failed to save user config: {}", e));
                        }
                    }
                    Flow::Continue => {}
                },
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;
    }

    Ok(())
}
