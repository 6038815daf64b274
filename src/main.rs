use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    sync::mpsc::Receiver,
    time::{Duration, Instant},
};

use slidemenu::config::Config;
use slidemenu::controller::MenuController;
use slidemenu::events::{EventBus, Signal};
use slidemenu::handlers::{self, KeyOutcome};
use slidemenu::menu;
use slidemenu::page::Page;
use slidemenu::ui;

/// Slide Menu TUI Demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to slidemenu-debug.log in the temp dir
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(slidemenu::utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Menu tree for the main navigation, as a caller would supply it
const MAIN_MENU_JSON: &str = r#"[
    {"id": 1, "title": "Products", "link": "/products", "hasChildren": true, "children": [
        {"id": 11, "parentId": 1, "title": "Widgets", "link": "/products/widgets", "hasChildren": true, "children": [
            {"id": 111, "parentId": 11, "title": "Sprockets", "link": "/products/widgets/sprockets", "isCurrent": true},
            {"id": 112, "parentId": 11, "title": "Cogs", "link": "/products/widgets/cogs"}
        ]},
        {"id": 12, "parentId": 1, "title": "Gadgets", "link": "/products/gadgets"}
    ]},
    {"id": 2, "title": "Services", "link": "/services", "hasChildren": true, "children": [
        {"id": 21, "parentId": 2, "title": "Consulting", "link": "/services/consulting"},
        {"id": 22, "parentId": 2, "title": "Support", "link": "/services/support"}
    ]},
    {"id": 3, "title": "About", "link": "/about"},
    {"id": 4, "title": "Contact", "link": "/contact", "target": "_blank"}
]"#;

/// Flat tree for the secondary (meta) menu
const META_MENU_JSON: &str = r#"[
    {"id": 91, "title": "Sign in", "link": "/login"},
    {"id": 92, "title": "Language", "link": "/language"},
    {"id": 93, "title": "Imprint", "link": "/imprint"}
]"#;

pub struct App {
    page: Page,
    menus: Vec<MenuController>,
    bus: EventBus,
    signals: Receiver<Signal>,
    viewport: (u16, u16),
    should_quit: bool,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let mut page = Page::new("slidemenu demo");
        page.add_toggle("main-toggle", "main-menu", "Menu");
        page.add_toggle("meta-toggle", "meta-menu", "More");
        page.add_container("main-menu");
        page.add_container("meta-menu");
        page.body = demo_body();

        let bus = EventBus::new();
        let signals = bus.subscribe();

        let main_items = menu::parse_menu_items(MAIN_MENU_JSON)?;
        let meta_items = menu::parse_menu_items(META_MENU_JSON)?;

        let menus = vec![
            MenuController::attach(&page, "main-toggle", main_items, config.clone(), &bus),
            MenuController::attach(&page, "meta-toggle", meta_items, config, &bus),
        ];

        Ok(App {
            page,
            menus,
            bus,
            signals,
            viewport: (0, 0),
            should_quit: false,
        })
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        for menu in &mut self.menus {
            menu.handle_resize(width, height);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if handlers::handle_key(&mut self.page, &mut self.menus, key, self.viewport)
            == KeyOutcome::Quit
        {
            self.should_quit = true;
        }
    }

    /// Advance animations and route bus traffic for one frame
    fn tick(&mut self, dt_ms: u64) {
        // Menus opening ask the others to close (mutual exclusion)
        while let Ok(signal) = self.signals.try_recv() {
            log_debug(&format!("bus: {:?}", signal));
            handlers::apply_mutual_exclusion(&signal, &self.menus, &self.bus);
        }

        for menu in &mut self.menus {
            menu.tick(&mut self.page, dt_ms);
        }
    }
}

/// Sample body text so scrolling and the scroll lock are observable
fn demo_body() -> Vec<String> {
    let mut lines = Vec::new();
    for section in 1..=12 {
        lines.push(format!("## Section {}", section));
        lines.push(String::new());
        for paragraph in 1..=3 {
            lines.push(format!(
                "Section {} paragraph {}: scroll with j/k, open a menu with Enter \
                 or the down arrow, and note that the page freezes behind it.",
                section, paragraph
            ));
            lines.push(String::new());
        }
    }
    lines
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/slidemenu/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("slidemenu").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    // No config anywhere: run on defaults
    Ok(None)
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration (defaults when no file exists)
    let config = match get_config_path(args.config)? {
        Some(path) => {
            if args.debug {
                log_debug(&format!("Loading config from: {:?}", path));
            }
            let config_str = fs::read_to_string(&path)?;
            serde_yaml::from_str(&config_str)?
        }
        None => Config::default(),
    };

    // Initialize app
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let size = terminal.size()?;
    app.handle_resize(size.width, size.height);

    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| {
            ui::render(f, &app.page, &app.menus);
        })?;

        if app.should_quit {
            break;
        }

        // Frame clock: animations advance by real elapsed time
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick = Instant::now();
        app.tick(dt_ms);

        // Short poll keeps animations smooth while staying cheap when idle
        if event::poll(Duration::from_millis(30))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Resize(width, height) => app.handle_resize(width, height),
                _ => {}
            }
        }
    }

    Ok(())
}
