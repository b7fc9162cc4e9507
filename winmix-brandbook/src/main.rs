use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use brandbook_core::{
    Component, EffectContext, EffectRuntime, EventKind, EventOutcome, Store, TracingMiddleware,
};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use winmix_brandbook::action::Action;
use winmix_brandbook::clipboard::ClipboardBackend;
use winmix_brandbook::components::{BrandBook, BrandBookProps};
use winmix_brandbook::config::Config;
use winmix_brandbook::effect::{Effect, handle_effect};
use winmix_brandbook::error::AppError;
use winmix_brandbook::logging::{LogConfig, init_logging};
use winmix_brandbook::reducer::reducer;
use winmix_brandbook::state::{BrandBookState, BrandBookTab};

// Thread-local storage for the root component to persist state between events
thread_local! {
    static BRAND_BOOK: RefCell<Option<BrandBook>> = const { RefCell::new(None) };
}

#[derive(Parser, Debug)]
#[command(name = "winmix-brandbook")]
#[command(about = "WinMix Pro brand book with a live style inspector")]
struct Args {
    /// Tab to open on
    #[arg(long, value_enum, default_value_t = BrandBookTab::Overview)]
    tab: BrandBookTab,

    /// Config file (default: <config dir>/winmix-brandbook/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (default: <data dir>/winmix-brandbook/brandbook.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// More log detail (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Copy through the terminal (OSC 52) instead of the system clipboard
    #[arg(long, default_value_t = false)]
    osc52: bool,

    /// Start with the pattern animations paused
    #[arg(long, default_value_t = false)]
    paused: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if args.osc52 {
        config.clipboard = ClipboardBackend::Osc52;
    }
    init_logging(&LogConfig::from_verbosity(args.verbose).with_log_file(args.log_file.clone()))?;
    tracing::info!(tab = ?args.tab, clipboard = ?config.clipboard, "starting brand book");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(terminal, args, config);

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    match &result {
        Ok(()) => tracing::info!("brand book closed"),
        Err(e) => tracing::error!(error = %e, "brand book exited with an error"),
    }
    result
}

#[tokio::main]
async fn run_app(
    mut terminal: Terminal<CrosstermBackend<io::Stdout>>,
    args: Args,
    config: Config,
) -> Result<(), AppError> {
    let size = terminal.size()?;
    let mut state = BrandBookState {
        active_tab: args.tab,
        animation_playing: !args.paused,
        ..Default::default()
    };
    state.ui.terminal_size = (size.width, size.height);

    BRAND_BOOK.with_borrow_mut(|root| *root = Some(BrandBook::new(config.keybindings())));

    let store = Store::with_middleware(state, reducer, TracingMiddleware::new());
    let mut runtime = EffectRuntime::from_store(store);

    // Tick drives the pattern animations and status expiry
    runtime
        .tasks()
        .interval("tick", config.tick_interval(), || Action::Tick);

    let settings = config.to_effect_settings();
    runtime
        .run(
            &mut terminal,
            render_app,
            map_event,
            |action| matches!(action, Action::Quit),
            |effect: Effect, ctx: &mut EffectContext<Action>| handle_effect(effect, ctx, &settings),
        )
        .await?;

    Ok(())
}

fn render_app(frame: &mut ratatui::Frame, area: Rect, state: &BrandBookState) {
    BRAND_BOOK.with_borrow_mut(|root| {
        if let Some(root) = root {
            root.render(frame, area, BrandBookProps { state });
        }
    });
}

fn map_event(event: &EventKind, state: &BrandBookState) -> EventOutcome<Action> {
    if let EventKind::Resize(width, height) = event {
        return EventOutcome::action(Action::UiTerminalResize(*width, *height));
    }
    if event.is_global() {
        return EventOutcome::action(Action::Quit);
    }

    let actions: Vec<Action> = BRAND_BOOK.with_borrow_mut(|root| match root {
        Some(root) => root
            .handle_event(event, BrandBookProps { state })
            .into_iter()
            .collect(),
        None => Vec::new(),
    });

    // Panel focus and mode live in the components, so input always redraws
    match event {
        EventKind::Key(_) | EventKind::Mouse(_) | EventKind::Scroll { .. } => {
            EventOutcome::from_actions(actions).with_render()
        }
        _ if actions.is_empty() => EventOutcome::ignored(),
        _ => EventOutcome::from_actions(actions),
    }
}
