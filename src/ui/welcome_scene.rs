//! Title screen: dark band, spinning mascot, wavy rainbow title.

use super::common::{hsl_to_rgb, Cell, CellBuffer};
use crate::build_info::version_label;
use crate::core::i18n::Language;
use crate::scene::WelcomeScreen;
use ratatui::{layout::Rect, style::Color, Frame};

pub const TITLE: &str = "Rouky Jump";

const BACKDROP: Color = Color::Rgb(96, 160, 220);
const BAND: Color = Color::Rgb(24, 24, 32);
const MASCOT_FUR: Color = Color::Rgb(190, 130, 70);
const MASCOT_EYE: Color = Color::Rgb(250, 250, 250);

/// Mascot silhouette: `#` fur, `o` eye.
const MASCOT: [&str; 5] = [
    "##    ##",
    "########",
    "#o####o#",
    " ###### ",
    "  ####  ",
];

/// Render the welcome screen over the whole area.
pub fn render_welcome_scene(
    frame: &mut Frame,
    area: Rect,
    welcome: &WelcomeScreen,
    language: Language,
) {
    if area.width < 10 || area.height < 6 {
        return;
    }
    let buffer = build_welcome_buffer(area.width, area.height, welcome, language);
    buffer.flush(frame, area);
}

pub fn build_welcome_buffer(
    width: u16,
    height: u16,
    welcome: &WelcomeScreen,
    language: Language,
) -> CellBuffer {
    let mut buffer = CellBuffer::new(width, height, Cell::new(' ', Color::Reset, BACKDROP));
    let w = width as i32;
    let h = height as i32;

    let band_top = h / 4;
    let band_height = (h / 2).max(5);
    buffer.fill_rect(0, band_top, w, band_height, Cell::new(' ', Color::Reset, BAND));

    draw_title(&mut buffer, band_top + 1, welcome.elapsed_secs());
    draw_mascot(&mut buffer, w / 2, band_top + band_height / 2, welcome.angle);

    let prompt = language.press_start();
    let prompt_col = (w - prompt.chars().count() as i32) / 2;
    buffer.put_str(
        prompt_col,
        band_top + band_height - 1,
        prompt,
        Color::Rgb(230, 230, 230),
    );

    let version = version_label();
    let version_col = w - version.chars().count() as i32 - 1;
    buffer.put_str(version_col, h - 1, &version, Color::Rgb(40, 40, 60));

    buffer
}

/// Each letter bobs on a sine wave and cycles through the hue wheel.
fn draw_title(buffer: &mut CellBuffer, row: i32, t: f64) {
    let len = TITLE.chars().count() as i32;
    let start = (buffer.width() as i32 - len) / 2;
    for (i, ch) in TITLE.chars().enumerate() {
        let fi = i as f64;
        let offset = (t * 4.0 + fi * 0.6).sin().round() as i32;
        let hue = fi * 36.0 + t * 120.0;
        buffer.put(start + i as i32, row + offset, ch, hsl_to_rgb(hue, 0.85, 0.6));
    }
}

/// Rotate the mascot mask about its centre. Cells are twice as tall as
/// wide, so x is stretched to keep the shape round.
fn draw_mascot(buffer: &mut CellBuffer, center_col: i32, center_row: i32, angle_deg: f64) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let half_h = (MASCOT.len() / 2) as i32;
    let half_w = (MASCOT[0].len() / 2) as i32;

    for (my, line) in MASCOT.iter().enumerate() {
        for (mx, ch) in line.chars().enumerate() {
            let color = match ch {
                '#' => MASCOT_FUR,
                'o' => MASCOT_EYE,
                _ => continue,
            };
            // Mask coordinates in "square" units, centred on the sprite.
            let px = (mx as i32 - half_w) as f64 / 2.0;
            let py = (my as i32 - half_h) as f64;
            let rx = px * cos - py * sin;
            let ry = px * sin + py * cos;
            let col = center_col + (rx * 2.0).round() as i32;
            let row = center_row + ry.round() as i32;
            buffer.put(col, row, '█', color);
        }
    }
}
