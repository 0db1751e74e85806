//! Play field rendering.
//!
//! The 960×540 world is scaled onto the terminal and drawn into a cell
//! buffer: sky, floor, items, player, explosion bursts. Then the run's post
//! effect (inversion or radial light) is applied, and the HUD and banners
//! are stamped on top so they stay readable.

use super::common::{darken, hsl_to_rgb, invert_color, Cell, CellBuffer, Viewport};
use super::effects::{EffectLayer, EffectType, VisualEffect};
use crate::core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::i18n::Language;
use crate::run::{PostEffect, Run};
use crate::world::{Aabb, Edge, Item, ItemKind};
use ratatui::{layout::Rect, style::Color, Frame};

const SKY: Color = Color::Rgb(135, 206, 235);
const GROUND_BG: Color = Color::Rgb(110, 80, 50);
const GROUND_FG: Color = Color::Rgb(80, 60, 35);
const GRASS: Color = Color::Rgb(70, 160, 60);
const TREE: Color = Color::Rgb(30, 120, 40);
const FOOD: Color = Color::Rgb(220, 50, 40);
const BOLT: Color = Color::Rgb(250, 220, 40);
const KONG: Color = Color::Rgb(90, 60, 40);
const PLAYER: Color = Color::Rgb(230, 170, 80);
const PLAYER_EYE: Color = Color::Rgb(20, 20, 20);
const HUD: Color = Color::Rgb(20, 20, 30);
const BANNER: Color = Color::Rgb(250, 250, 250);

const GROUND_CHAR: char = '▓';
const GRASS_CHAR: char = '▀';

/// Render the run over the whole area.
pub fn render_game_scene(
    frame: &mut Frame,
    area: Rect,
    run: &Run,
    effects: &EffectLayer,
    language: Language,
) {
    if area.width < 10 || area.height < 5 {
        return;
    }
    let buffer = build_game_buffer(area.width, area.height, run, effects, language);
    buffer.flush(frame, area);
}

pub fn build_game_buffer(
    width: u16,
    height: u16,
    run: &Run,
    effects: &EffectLayer,
    language: Language,
) -> CellBuffer {
    let mut buffer = CellBuffer::new(width, height, Cell::new(' ', Color::Reset, SKY));
    let still = Viewport::new(width, height, WORLD_WIDTH, WORLD_HEIGHT);
    let vp = still.with_offset(effects.shake_offset());

    // ── World ─────────────────────────────────────────────────────────
    if let Some(floor) = &run.floor {
        draw_floor(&mut buffer, &vp, &floor.bounds(), floor.edge);
    }
    for item in run.items.iter() {
        draw_item(&mut buffer, &vp, item);
    }
    draw_player(&mut buffer, &vp, &run.player.bounds, run.player.flip_y);
    for effect in effects.effects() {
        if let EffectType::Explosion { x, y } = effect.effect_type {
            draw_explosion(&mut buffer, &vp, (x, y), effect);
        }
    }

    // ── Post effect ───────────────────────────────────────────────────
    apply_post_effect(&mut buffer, &still, &run.post_effect);

    // ── Overlays ──────────────────────────────────────────────────────
    let score_row = draw_hud(&mut buffer, run, language);
    for effect in effects.effects() {
        if effect.effect_type == EffectType::ScoreBurst {
            draw_score_burst(&mut buffer, score_row, effect);
        }
    }
    let middle = height as i32 / 2;
    if run.night_banner.is_some() {
        put_centered(&mut buffer, middle - 1, language.night_falling(), BANNER);
    }
    if run.state.is_game_over {
        put_centered(&mut buffer, middle, language.game_over(), BANNER);
    }

    buffer
}

fn draw_floor(buffer: &mut CellBuffer, vp: &Viewport, bounds: &Aabb, edge: Edge) {
    let (col, w) = vp.cols_span(bounds.x, bounds.w);
    let (row, h) = vp.rows_span(bounds.y, bounds.h);
    buffer.fill_rect(col, row, w, h, Cell::new(GROUND_CHAR, GROUND_FG, GROUND_BG));

    // Grass on the walkable face.
    let grass_row = match edge {
        Edge::Bottom => row,
        Edge::Top => row + h - 1,
    };
    let grass_char = match edge {
        Edge::Bottom => GRASS_CHAR,
        Edge::Top => '▄',
    };
    for c in col..col + w {
        buffer.set(c, grass_row, Cell::new(grass_char, GRASS, GROUND_BG));
    }
}

fn draw_item(buffer: &mut CellBuffer, vp: &Viewport, item: &Item) {
    let b = &item.bounds;
    let (col, w) = vp.cols_span(b.x, b.w);
    let (row, h) = vp.rows_span(b.y, b.h);

    match item.kind {
        ItemKind::Tree => {
            for r in row..row + h {
                for c in col..col + w {
                    buffer.put(c, r, '█', TREE);
                }
            }
        }
        ItemKind::Food => buffer.put(col + w / 2, row + h / 2, '●', FOOD),
        ItemKind::Bolt => {
            for r in row..row + h {
                buffer.put(col + w / 2, r, '↯', BOLT);
            }
        }
        ItemKind::Kong => {
            let head = if item.flip_y { row + h - 1 } else { row };
            for r in row..row + h {
                for c in col..col + w {
                    let ch = if r == head { 'Ö' } else { '█' };
                    buffer.put(c, r, ch, KONG);
                }
            }
        }
    }
}

fn draw_player(buffer: &mut CellBuffer, vp: &Viewport, bounds: &Aabb, flip_y: bool) {
    let (col, w) = vp.cols_span(bounds.x, bounds.w);
    let (row, h) = vp.rows_span(bounds.y, bounds.h);
    for r in row..row + h {
        for c in col..col + w {
            buffer.put(c, r, '█', PLAYER);
        }
    }
    let eye_row = if flip_y { row + h - 1 } else { row };
    buffer.set(col + w - 1, eye_row, Cell::new('•', PLAYER_EYE, PLAYER));
}

/// Eight sparks flying out from the centre, fading orange to red.
fn draw_explosion(buffer: &mut CellBuffer, vp: &Viewport, center: (f64, f64), effect: &VisualEffect) {
    const DIRS: [(f64, f64); 8] = [
        (1.0, 0.0),
        (0.7, 0.7),
        (0.0, 1.0),
        (-0.7, 0.7),
        (-1.0, 0.0),
        (-0.7, -0.7),
        (0.0, -1.0),
        (0.7, -0.7),
    ];
    let progress = effect.progress();
    let ch = if progress < 0.33 {
        '*'
    } else if progress < 0.66 {
        '+'
    } else {
        '.'
    };
    let color = hsl_to_rgb(30.0 - progress * 30.0, 1.0, 0.55);
    let radius = 1.0 + progress * 4.0;
    let col = vp.col(center.0);
    let row = vp.row(center.1);

    buffer.put(col, row, '✶', color);
    for (dx, dy) in DIRS {
        let c = col + (dx * radius * 2.0).round() as i32;
        let r = row + (dy * radius).round() as i32;
        buffer.put(c, r, ch, color);
    }
}

fn apply_post_effect(buffer: &mut CellBuffer, vp: &Viewport, effect: &PostEffect) {
    match *effect {
        PostEffect::None => {}
        PostEffect::Invert => buffer.map_cells(|_, _, cell| {
            cell.fg = invert_color(cell.fg);
            cell.bg = invert_color(cell.bg);
        }),
        PostEffect::Light {
            center,
            radius,
            blur,
        } => buffer.map_cells(|col, row, cell| {
            let (x, y) = vp.cell_center(col, row);
            let dist = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            let amount = if dist <= radius {
                0.0
            } else if blur > 0.0 && dist < radius + blur {
                (dist - radius) / blur
            } else {
                1.0
            };
            if amount > 0.0 {
                cell.fg = darken(cell.fg, amount);
                cell.bg = darken(cell.bg, amount);
            }
        }),
    }
}

/// Score and high-score labels against the HUD edge. Returns the score row.
fn draw_hud(buffer: &mut CellBuffer, run: &Run, language: Language) -> i32 {
    let last = buffer.height() as i32 - 1;
    let (score_row, high_row) = match run.hud_edge {
        Edge::Top => (0, 1),
        Edge::Bottom => (last - 1, last),
    };
    let (fg, hud_bg) = hud_colors(&run.post_effect);

    let score = run.state.score.to_string();
    let high = format!("{}{}", language.high_score_label(), run.state.starting_high_score);
    for (row, text) in [(score_row, score.as_str()), (high_row, high.as_str())] {
        for (i, ch) in text.chars().enumerate() {
            buffer.set(1 + i as i32, row, Cell::new(ch, fg, hud_bg));
        }
    }
    score_row
}

/// The HUD follows the post effect: inverted while upside down, lit while dark.
fn hud_colors(effect: &PostEffect) -> (Color, Color) {
    match effect {
        PostEffect::Invert => (invert_color(HUD), invert_color(SKY)),
        PostEffect::Light { .. } => (BANNER, Color::Rgb(0, 0, 0)),
        PostEffect::None => (HUD, SKY),
    }
}

/// Sparkles cycling through the hue wheel around the score label.
fn draw_score_burst(buffer: &mut CellBuffer, score_row: i32, effect: &VisualEffect) {
    let progress = effect.progress();
    let spread = 1 + (progress * 3.0) as i32;
    let color = hsl_to_rgb(progress * 360.0, 0.9, 0.6);
    for (dc, dr) in [(spread * 2, 0), (spread, -1), (spread, 1), (spread * 3, 0)] {
        buffer.put(4 + dc, score_row + dr, '*', color);
    }
}

fn put_centered(buffer: &mut CellBuffer, row: i32, text: &str, fg: Color) {
    let col = (buffer.width() as i32 - text.chars().count() as i32) / 2;
    buffer.put_str(col, row, text, fg);
}
