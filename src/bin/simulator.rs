//! Rouky Jump Headless Simulator
//!
//! Plays runs without any UI using the same `Run::step` as the real game,
//! with an autopilot that jumps when a tree approaches. Useful for checking
//! spawn rates, difficulty ramp and how often the modes trigger.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N         Number of runs with incrementing seeds (default: 1)
//!   --seed N         RNG seed (default: 42)
//!   --variant a|b    Rule set (default: b)
//!   --max-seconds N  Stop a run after N seconds of game time (default: 600)
//!   --verbose        Per-frame event logging
//!   --json           Print per-run stats as JSON instead of text

use rand::rngs::StdRng;
use rand::SeedableRng;
use rouky_jump::core::constants::PHYSICS_TICK_MS;
use rouky_jump::core::Variant;
use rouky_jump::run::autopilot::should_jump;
use rouky_jump::run::{JumpOutcome, Run, RunEvent, SoundCue};
use serde::Serialize;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    runs: u32,
    seed: u64,
    variant: Variant,
    max_seconds: u64,
    verbose: bool,
    json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            seed: 42,
            variant: Variant::default(),
            max_seconds: 600,
            verbose: false,
            json: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.runs = parse_value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(&args, i, "--seed");
            }
            "--variant" => {
                i += 1;
                let code = args.get(i).map(String::as_str).unwrap_or_default();
                config.variant = Variant::from_code(code).unwrap_or_else(|| {
                    eprintln!("--variant requires a or b");
                    std::process::exit(1);
                });
            }
            "--max-seconds" => {
                i += 1;
                config.max_seconds = parse_value(&args, i, "--max-seconds");
            }
            "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).and_then(|v| v.parse().ok()) {
        Some(value) => value,
        None => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Rouky Jump Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N         Number of runs with incrementing seeds (default: 1)\n\
         \x20 --seed N         RNG seed (default: 42)\n\
         \x20 --variant a|b    Rule set (default: b)\n\
         \x20 --max-seconds N  Stop a run after N seconds of game time (default: 600)\n\
         \x20 --verbose        Per-frame event logging\n\
         \x20 --json           Print per-run stats as JSON\n\
         \x20 --help, -h       Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
struct SimStats {
    seed: u64,
    score: u64,
    high_score: u64,
    frames: u64,
    final_speed: f64,
    /// False when the run hit the time limit instead of a tree.
    game_over: bool,
    jumps: u64,
    flips: u64,
    nightfalls: u64,
    food_eaten: u64,
    kong_hits: u64,
    trees_exploded: u64,
    high_score_beaten: bool,
}

impl SimStats {
    fn process_events(&mut self, events: &[RunEvent]) {
        for event in events {
            match event {
                RunEvent::Sound(SoundCue::Jump) => self.jumps += 1,
                RunEvent::Sound(SoundCue::UpsideDown) => self.flips += 1,
                RunEvent::Sound(SoundCue::LightOff) => self.nightfalls += 1,
                RunEvent::Sound(SoundCue::Crunch) => self.food_eaten += 1,
                RunEvent::Sound(SoundCue::Blip) => self.kong_hits += 1,
                RunEvent::Sound(SoundCue::NewHighScore) => self.high_score_beaten = true,
                RunEvent::Explosion { .. } => self.trees_exploded += 1,
                _ => {}
            }
        }
    }
}

fn frames_to_time(frames: u64) -> String {
    let secs = frames * PHYSICS_TICK_MS / 1000;
    format!("{}m{:02}s", secs / 60, secs % 60)
}

// ── Simulation ───────────────────────────────────────────────────────

/// Seed for the `index`-th run. Wraps so seeds near `u64::MAX` still work.
fn run_seed(base: u64, index: u32) -> u64 {
    base.wrapping_add(u64::from(index))
}

fn run_simulation(config: &SimConfig, seed: u64, high_score: u64) -> SimStats {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut run = Run::start(config.variant, high_score, &mut rng);
    let max_frames = config.max_seconds * 1000 / PHYSICS_TICK_MS;

    let mut stats = SimStats {
        seed,
        ..SimStats::default()
    };

    while !run.state.is_game_over && run.tick_count < max_frames {
        if should_jump(&run) && run.jump() == JumpOutcome::Jumped && config.verbose {
            eprintln!("[{:>6}] jump at score {}", run.tick_count, run.state.score);
        }
        run.step(&mut rng);

        let events = run.drain_events();
        if config.verbose {
            for event in &events {
                eprintln!("[{:>6}] {:?}", run.tick_count, event);
            }
        }
        stats.process_events(&events);
    }

    // The tree hit emits one explosion for the player itself.
    if run.state.is_game_over {
        stats.trees_exploded = stats.trees_exploded.saturating_sub(1);
    }
    stats.score = run.state.score;
    stats.high_score = run.state.high_score.max(run.state.score);
    stats.frames = run.tick_count;
    stats.final_speed = run.state.speed;
    stats.game_over = run.state.is_game_over;
    stats
}

// ── Reporting ────────────────────────────────────────────────────────

fn print_run_line(index: u32, stats: &SimStats) {
    println!(
        "  Run {}: seed={} score={} time={} speed={:.0} jumps={} flips={} nights={} food={} kongs={}{}",
        index + 1,
        stats.seed,
        stats.score,
        frames_to_time(stats.frames),
        stats.final_speed,
        stats.jumps,
        stats.flips,
        stats.nightfalls,
        stats.food_eaten,
        stats.kong_hits,
        if stats.game_over { "" } else { " (time limit)" },
    );
}

fn print_multi_run_summary(all_stats: &[SimStats]) {
    let n = all_stats.len() as f64;
    println!("============================================================");
    println!("  Aggregate Results ({} runs)", all_stats.len());
    println!("============================================================");
    println!();

    let avg = |vals: &[u64]| -> f64 { vals.iter().sum::<u64>() as f64 / n };
    let min_max = |vals: &[u64]| -> (u64, u64) {
        (
            *vals.iter().min().unwrap_or(&0),
            *vals.iter().max().unwrap_or(&0),
        )
    };

    let rows: [(&str, Vec<u64>); 6] = [
        ("Score", all_stats.iter().map(|s| s.score).collect()),
        ("Jumps", all_stats.iter().map(|s| s.jumps).collect()),
        ("Flips", all_stats.iter().map(|s| s.flips).collect()),
        ("Nightfalls", all_stats.iter().map(|s| s.nightfalls).collect()),
        ("Food eaten", all_stats.iter().map(|s| s.food_eaten).collect()),
        ("Kong hits", all_stats.iter().map(|s| s.kong_hits).collect()),
    ];

    println!("{:<20} {:>10} {:>10} {:>10}", "Metric", "Min", "Avg", "Max");
    println!("{}", "-".repeat(52));
    for (name, vals) in &rows {
        let (lo, hi) = min_max(vals);
        println!("{:<20} {:>10} {:>10.1} {:>10}", name, lo, avg(vals), hi);
    }
    println!();
}

// ── Main ─────────────────────────────────────────────────────────────

fn main() {
    let config = parse_args();

    if !config.json {
        eprintln!(
            "Rouky Jump Simulator: variant {} x {} run(s), seed={}, limit={}s",
            config.variant.name(),
            config.runs,
            config.seed,
            config.max_seconds,
        );
    }

    let mut all_stats = Vec::with_capacity(config.runs as usize);
    // Runs chain like restarts: each starts with the best score so far.
    let mut high_score = 0;

    for index in 0..config.runs {
        let seed = run_seed(config.seed, index);
        let stats = run_simulation(&config, seed, high_score);
        high_score = stats.high_score;

        if !config.json {
            print_run_line(index, &stats);
        }
        all_stats.push(stats);
    }

    if config.json {
        match serde_json::to_string_pretty(&all_stats) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to encode stats: {e}");
                std::process::exit(1);
            }
        }
    } else if config.runs > 1 {
        println!();
        print_multi_run_summary(&all_stats);
    }
}
