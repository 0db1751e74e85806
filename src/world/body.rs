//! Boxes, the floor and the player's gravity body.

use crate::core::constants::{
    FLOOR_HEIGHT, PLAYER_HEIGHT, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_X, WORLD_HEIGHT, WORLD_WIDTH,
};

/// Axis-aligned box. `(x, y)` is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// True if the boxes share some area. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Screen edge a floor, item or HUD is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Edge the floor sits on for the given orientation.
    pub fn for_orientation(upside_down: bool) -> Self {
        if upside_down {
            Self::Top
        } else {
            Self::Bottom
        }
    }
}

/// The static surface the player runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floor {
    pub edge: Edge,
}

impl Floor {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }

    pub fn bounds(&self) -> Aabb {
        match self.edge {
            Edge::Bottom => Aabb::new(0.0, WORLD_HEIGHT - FLOOR_HEIGHT, WORLD_WIDTH, FLOOR_HEIGHT),
            Edge::Top => Aabb::new(0.0, 0.0, WORLD_WIDTH, FLOOR_HEIGHT),
        }
    }

    /// Y coordinate of the walkable face.
    pub fn surface_y(&self) -> f64 {
        match self.edge {
            Edge::Bottom => WORLD_HEIGHT - FLOOR_HEIGHT,
            Edge::Top => FLOOR_HEIGHT,
        }
    }
}

/// The runner: a box with vertical velocity, pulled by global gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Aabb,
    /// Pixels per second, positive = moving down the screen.
    pub vel_y: f64,
    /// Resting on the bottom floor.
    pub grounded: bool,
    /// Sprite drawn upside down.
    pub flip_y: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            bounds: Aabb::new(PLAYER_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0.0,
            grounded: false,
            flip_y: false,
        }
    }

    /// Launch with `force`; positive goes up the screen, negative goes down.
    pub fn jump(&mut self, force: f64) {
        self.vel_y = -force;
        self.grounded = false;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Moving up the screen.
    pub fn is_jumping(&self) -> bool {
        self.vel_y < 0.0
    }

    /// Moving down the screen.
    pub fn is_falling(&self) -> bool {
        self.vel_y > 0.0
    }

    pub fn center(&self) -> (f64, f64) {
        self.bounds.center()
    }

    /// Apply gravity for `dt` seconds and push the player out of the floor.
    pub fn integrate(&mut self, gravity: f64, dt: f64, floor: Option<&Floor>) {
        self.vel_y += gravity * dt;
        self.bounds.y += self.vel_y * dt;
        self.grounded = false;

        let Some(floor) = floor else {
            return;
        };
        let surface = floor.surface_y();
        match floor.edge {
            Edge::Bottom => {
                if self.bounds.bottom() >= surface {
                    self.bounds.y = surface - self.bounds.h;
                    if self.vel_y > 0.0 {
                        self.vel_y = 0.0;
                    }
                    self.grounded = true;
                }
            }
            Edge::Top => {
                if self.bounds.y <= surface {
                    self.bounds.y = surface;
                    if self.vel_y < 0.0 {
                        self.vel_y = 0.0;
                    }
                }
            }
        }
    }
}
