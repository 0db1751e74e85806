// World geometry (virtual pixels, y grows downward)
pub const WORLD_WIDTH: f64 = 960.0;
pub const WORLD_HEIGHT: f64 = 540.0;
pub const FLOOR_HEIGHT: f64 = 48.0;

// Physics
pub const GRAVITY: f64 = 1800.0;
pub const JUMP_FORCE: f64 = 800.0;
pub const PHYSICS_TICK_MS: u64 = 16; // ~60 FPS
pub const MAX_FRAME_MS: u64 = 100; // clamp after pause/lag

// Player
pub const PLAYER_X: f64 = 80.0;
pub const PLAYER_START_Y: f64 = 40.0;
pub const PLAYER_WIDTH: f64 = 48.0;
pub const PLAYER_HEIGHT: f64 = 48.0;

// Scrolling and difficulty
pub const INITIAL_SPEED: f64 = 480.0;
pub const SPEED_STEP_SCORE: u64 = 1000;
pub const SPEED_MULTIPLIER: f64 = 1.1;

// Spawn schedule and odds
pub const SPAWN_DELAY_MIN_SECS: f64 = 1.0;
pub const SPAWN_DELAY_MAX_SECS: f64 = 2.0;
pub const BOLT_MIN_SCORE: u64 = 4000;
pub const BOLT_THRESHOLD: f64 = 0.95;
pub const FOOD_MIN_SCORE: u64 = 2000;
pub const FOOD_THRESHOLD: f64 = 0.92;
pub const KONG_THRESHOLD: f64 = 0.87;

// Trees are plain boxes of random height
pub const TREE_WIDTH: f64 = 48.0;
pub const TREE_MIN_HEIGHT: f64 = 32.0;
pub const TREE_MAX_HEIGHT: f64 = 96.0;

// Power-up windows
pub const MULTI_JUMP_SECS: f64 = 7.0;
pub const UPSIDE_DOWN_MIN_SECS: f64 = 8.0;
pub const UPSIDE_DOWN_MAX_SECS: f64 = 15.0;

// Day/night cycle
pub const NIGHT_CHECK_INTERVAL_SECS: f64 = 10.0;
pub const NIGHT_MIN_SCORE: u64 = 1000;
pub const NIGHT_THRESHOLD: f64 = 0.6;
pub const NIGHT_BANNER_SECS: f64 = 2.0;
pub const LIGHT_RADIUS: f64 = 64.0;
pub const LIGHT_BLUR: f64 = 64.0;

// Welcome screen
pub const WELCOME_SPIN_START_DEG: f64 = 360.0;
pub const WELCOME_SPIN_END_DEG: f64 = 720.0;
pub const WELCOME_SPIN_DEG_PER_SEC: f64 = 150.0;
