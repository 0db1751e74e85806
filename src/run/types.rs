//! Run state: everything that lives for one play-through.

use crate::core::config::Variant;
use crate::core::constants::{GRAVITY, INITIAL_SPEED, NIGHT_CHECK_INTERVAL_SECS};
use crate::core::timers::Scheduler;
use crate::world::{Edge, Floor, Items, Player};

/// Score, speed and mode flags for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    pub score: u64,
    /// Leftward speed given to newly spawned items, pixels per second.
    pub speed: f64,
    pub is_game_over: bool,
    pub is_dark: bool,
    pub is_upside_down: bool,
    /// Variant A only.
    pub multi_jump_enabled: bool,
    /// Best score this session, carried from the previous run.
    pub high_score: u64,
    /// `high_score` as it was when the run began. The HUD label shows this
    /// one, so a beaten record only appears after a restart.
    pub starting_high_score: u64,
}

impl RunState {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            speed: INITIAL_SPEED,
            is_game_over: false,
            is_dark: false,
            is_upside_down: false,
            multi_jump_enabled: false,
            high_score,
            starting_high_score: high_score,
        }
    }
}

/// Named sound cues. Playback is up to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Explosion,
    Crunch,
    NewHighScore,
    LightOff,
    UpsideDown,
    UpsideDownOff,
    MultiJumpOff,
    Blip,
}

impl SoundCue {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "jump",
            Self::Explosion => "explosion",
            Self::Crunch => "crunch",
            Self::NewHighScore => "new_high_score",
            Self::LightOff => "light_off",
            Self::UpsideDown => "upside_down",
            Self::UpsideDownOff => "upside_down_off",
            Self::MultiJumpOff => "multi_jump_off",
            Self::Blip => "blip",
        }
    }
}

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    Sound(SoundCue),
    /// Explosion burst centred on a world position.
    Explosion { x: f64, y: f64 },
    CameraShake,
    /// Small burst on the score label when the high score is beaten.
    ScoreBurst,
    GameOver { score: u64, high_score: u64 },
}

/// Full-screen effect applied over the play field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PostEffect {
    #[default]
    None,
    /// Colours inverted while upside down.
    Invert,
    /// Everything dark except a disc around `center`.
    Light {
        center: (f64, f64),
        radius: f64,
        blur: f64,
    },
}

/// Payloads for the run's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunTimer {
    Spawn,
    NightCheck,
    NightFall { banner: u64 },
    UpsideDownEnd { epoch: u64 },
    MultiJumpEnd { epoch: u64 },
}

/// Result of the activate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The run is over; start a new one with this high score.
    Restart { high_score: u64 },
    Jumped,
    Ignored,
}

/// One play-through: state flags, bodies, items, timers and pending events.
#[derive(Debug, Clone)]
pub struct Run {
    pub variant: Variant,
    pub state: RunState,
    pub player: Player,
    pub floor: Option<Floor>,
    pub items: Items,
    /// Signed gravity, positive pulls down the screen.
    pub gravity: f64,
    pub post_effect: PostEffect,
    /// Edge the score and high-score labels sit against.
    pub hud_edge: Edge,
    /// Id of the "night is falling" banner while it is shown.
    pub night_banner: Option<u64>,
    /// Set at game over: the player and items stop moving.
    pub frozen: bool,
    pub timers: Scheduler<RunTimer>,
    /// Bumped on every gravity flip; stale revert timers are ignored.
    pub orientation_epoch: u64,
    /// Bumped on every multi-jump grant.
    pub power_epoch: u64,
    pub tick_count: u64,
    pub accumulated_time_ms: u64,
    pub(crate) next_banner_id: u64,
    pub(crate) events: Vec<RunEvent>,
}

impl Run {
    /// A run with nothing spawned and no timers armed. `Run::start` is the
    /// normal entry point.
    pub fn new(variant: Variant, high_score: u64) -> Self {
        Self {
            variant,
            state: RunState::new(high_score),
            player: Player::new(),
            floor: Some(Floor::new(Edge::Bottom)),
            items: Items::new(),
            gravity: GRAVITY,
            post_effect: PostEffect::None,
            hud_edge: Edge::Top,
            night_banner: None,
            frozen: false,
            timers: Scheduler::new(),
            orientation_epoch: 0,
            power_epoch: 0,
            tick_count: 0,
            accumulated_time_ms: 0,
            next_banner_id: 0,
            events: Vec::new(),
        }
    }

    /// Create a run, spawn the first item and arm the night check.
    pub fn start<R: rand::Rng>(variant: Variant, high_score: u64, rng: &mut R) -> Self {
        let mut run = Self::new(variant, high_score);
        log::info!(
            "run started (variant {}, high score {})",
            variant.name(),
            high_score
        );
        super::spawn::spawn_item(&mut run, rng);
        run.timers
            .schedule_secs(NIGHT_CHECK_INTERVAL_SECS, RunTimer::NightCheck);
        run
    }

    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn push_event(&mut self, event: RunEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, cue: SoundCue) {
        log::trace!("sound {}", cue.name());
        self.events.push(RunEvent::Sound(cue));
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<RunEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[RunEvent] {
        &self.events
    }

    pub(crate) fn next_banner(&mut self) -> u64 {
        self.next_banner_id += 1;
        self.next_banner_id
    }
}
