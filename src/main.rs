use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use rouky_jump::build_info;
use rouky_jump::core::config::{parse_args, CliCommand, GameConfig, USAGE};
use rouky_jump::core::Language;
use rouky_jump::input::{map_event, GameInput};
use rouky_jump::scene::SceneController;
use rouky_jump::ui::{self, effects::EffectLayer};
use rouky_jump::utils::init_file_logger;
use std::io;
use std::time::{Duration, Instant};

/// Frame budget for the render loop (~60 FPS).
const FRAME_MS: u64 = 16;

type Backend = CrosstermBackend<io::Stdout>;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args[1..], Language::detect()) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::Version) => {
            println!("rouky-jump {}", build_info::version_label());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'rouky-jump --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_file_logger() {
        eprintln!("Warning: file logging disabled: {}", e);
    }
    log::info!(
        "rouky-jump {} starting (variant {}, seed {:?})",
        build_info::version_label(),
        config.variant.name(),
        config.seed
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("exiting on error: {}", e);
    }
    log::info!("rouky-jump exiting");
    result
}

fn run_app(terminal: &mut Terminal<Backend>, config: GameConfig) -> io::Result<()> {
    let mut controller = SceneController::new(config);
    let mut effects = EffectLayer::new();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &controller, &effects))?;

        if event::poll(Duration::from_millis(FRAME_MS))? {
            if let Some(input) = map_event(&event::read()?) {
                if input == GameInput::Quit {
                    return Ok(());
                }
                if controller.handle_input(input) {
                    effects.clear();
                }
            }
        }

        // Whole milliseconds only; the remainder carries to the next frame.
        let dt_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(dt_ms);

        // No audio backend: sound cues are only logged by the run.
        let events = controller.tick(dt_ms);
        effects.apply(&events);
        effects.update(dt_ms as f64 / 1000.0);
    }
}
