//! Short-lived visual effects driven by run events: explosion bursts,
//! camera shake and the high-score sparkle.

use crate::run::RunEvent;

pub const EXPLOSION_SECS: f64 = 0.6;
pub const SHAKE_SECS: f64 = 0.3;
pub const SCORE_BURST_SECS: f64 = 0.8;

/// Shake amplitude in cells at the start of a shake.
const SHAKE_CELLS: i32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum EffectType {
    /// Centred on a world position.
    Explosion { x: f64, y: f64 },
    CameraShake,
    ScoreBurst,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualEffect {
    pub effect_type: EffectType,
    pub lifetime: f64,
    pub max_lifetime: f64,
}

impl VisualEffect {
    pub fn new(effect_type: EffectType, max_lifetime: f64) -> Self {
        Self {
            effect_type,
            lifetime: 0.0,
            max_lifetime,
        }
    }

    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.lifetime <= self.max_lifetime
    }

    pub fn is_active(&self) -> bool {
        self.lifetime <= self.max_lifetime
    }

    /// 0.0 at spawn, 1.0 at expiry.
    pub fn progress(&self) -> f64 {
        if self.max_lifetime <= 0.0 {
            return 1.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EffectLayer {
    effects: Vec<VisualEffect>,
}

impl EffectLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn effects for the visual events; sounds and game over are ignored.
    pub fn apply(&mut self, events: &[RunEvent]) {
        for event in events {
            let effect = match event {
                RunEvent::Explosion { x, y } => {
                    VisualEffect::new(EffectType::Explosion { x: *x, y: *y }, EXPLOSION_SECS)
                }
                RunEvent::CameraShake => VisualEffect::new(EffectType::CameraShake, SHAKE_SECS),
                RunEvent::ScoreBurst => VisualEffect::new(EffectType::ScoreBurst, SCORE_BURST_SECS),
                RunEvent::Sound(_) | RunEvent::GameOver { .. } => continue,
            };
            self.effects.push(effect);
        }
    }

    pub fn update(&mut self, delta: f64) {
        self.effects.retain_mut(|e| e.update(delta));
    }

    /// Drop everything, e.g. when a new run starts.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    pub fn effects(&self) -> &[VisualEffect] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Cell offset for the play field from the strongest active shake.
    pub fn shake_offset(&self) -> (i32, i32) {
        let Some(shake) = self
            .effects
            .iter()
            .filter(|e| e.effect_type == EffectType::CameraShake)
            .min_by(|a, b| a.lifetime.total_cmp(&b.lifetime))
        else {
            return (0, 0);
        };

        let amplitude = if shake.progress() < 0.5 {
            SHAKE_CELLS
        } else {
            SHAKE_CELLS / 2
        };
        let phase = (shake.lifetime * 60.0) as i32;
        let dx = if phase % 2 == 0 { amplitude } else { -amplitude };
        let dy = (phase % 3) - 1;
        (dx, dy)
    }
}
