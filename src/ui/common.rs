//! Cell buffer shared by the scenes.
//!
//! Scenes draw into a 2D grid of coloured characters, optionally run a
//! post-pass over it, then stamp it row-by-row as Paragraph widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl Cell {
    pub fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16, fill: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Cell> {
        self.index(col, row).map(|i| &self.cells[i])
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Change a cell's glyph and foreground, keeping its background.
    pub fn put(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if let Some(i) = self.index(col, row) {
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }

    pub fn put_str(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, fg);
        }
    }

    pub fn fill_rect(&mut self, col: i32, row: i32, w: i32, h: i32, cell: Cell) {
        for r in row..row + h {
            for c in col..col + w {
                self.set(c, r, cell);
            }
        }
    }

    /// Rewrite every cell in place; used by post effects.
    pub fn map_cells(&mut self, mut f: impl FnMut(i32, i32, &mut Cell)) {
        let width = self.width as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            f((i % width) as i32, (i / width) as i32, cell);
        }
    }

    /// One row as styled spans, merging runs of equal colour.
    pub fn row_line(&self, row: u16) -> Line<'static> {
        let start = row as usize * self.width as usize;
        let end = start + self.width as usize;

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for cell in &self.cells[start..end] {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }
        Line::from(spans)
    }

    /// Render the buffer to the terminal at the top-left of `area`.
    pub fn flush(&self, frame: &mut Frame, area: Rect) {
        let rows = self.height.min(area.height);
        let cols = self.width.min(area.width);
        for row in 0..rows {
            let row_area = Rect::new(area.x, area.y + row, cols, 1);
            frame.render_widget(Paragraph::new(self.row_line(row)), row_area);
        }
    }
}

/// Maps world pixels onto terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_scale: f64,
    pub y_scale: f64,
    /// Added to every mapped cell; camera shake.
    pub offset: (i32, i32),
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_w: f64, world_h: f64) -> Self {
        Self {
            x_scale: cols as f64 / world_w,
            y_scale: rows as f64 / world_h,
            offset: (0, 0),
        }
    }

    pub fn with_offset(mut self, offset: (i32, i32)) -> Self {
        self.offset = offset;
        self
    }

    pub fn col(&self, x: f64) -> i32 {
        (x * self.x_scale).floor() as i32 + self.offset.0
    }

    pub fn row(&self, y: f64) -> i32 {
        (y * self.y_scale).floor() as i32 + self.offset.1
    }

    /// Cell span covering `[start, start+len)`, at least one cell.
    pub fn cols_span(&self, x: f64, w: f64) -> (i32, i32) {
        let start = self.col(x);
        let end = ((x + w) * self.x_scale).ceil() as i32 + self.offset.0;
        (start, (end - start).max(1))
    }

    pub fn rows_span(&self, y: f64, h: f64) -> (i32, i32) {
        let start = self.row(y);
        let end = ((y + h) * self.y_scale).ceil() as i32 + self.offset.1;
        (start, (end - start).max(1))
    }

    /// World position of a cell centre, ignoring the shake offset.
    pub fn cell_center(&self, col: i32, row: i32) -> (f64, f64) {
        (
            (col - self.offset.0) as f64 / self.x_scale + 0.5 / self.x_scale,
            (row - self.offset.1) as f64 / self.y_scale + 0.5 / self.y_scale,
        )
    }
}

/// HSL (h in degrees, s and l in 0..=1) to an RGB terminal colour.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let h = h.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(to_byte(r), to_byte(g), to_byte(b))
}

/// Negative of an RGB colour. Non-RGB colours pass through.
pub fn invert_color(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(255 - r, 255 - g, 255 - b),
        other => other,
    }
}

/// Blend an RGB colour toward black; `amount` 1.0 is fully dark.
pub fn darken(color: Color, amount: f64) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let keep = (1.0 - amount).clamp(0.0, 1.0);
            let scale = |v: u8| (v as f64 * keep).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        _ if amount >= 1.0 => Color::Rgb(0, 0, 0),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut buf = CellBuffer::new(4, 2, Cell::default());
        buf.set(-1, 0, Cell::new('x', Color::White, Color::Reset));
        buf.set(4, 0, Cell::new('x', Color::White, Color::Reset));
        buf.set(0, 2, Cell::new('x', Color::White, Color::Reset));
        assert!(buf.cells.iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn test_put_keeps_background() {
        let bg = Color::Rgb(1, 2, 3);
        let mut buf = CellBuffer::new(3, 1, Cell::new(' ', Color::Reset, bg));
        buf.put_str(1, 0, "ab", Color::White);
        assert_eq!(buf.get(1, 0), Some(&Cell::new('a', Color::White, bg)));
        assert_eq!(buf.get(2, 0), Some(&Cell::new('b', Color::White, bg)));
        assert_eq!(buf.get(0, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_row_line_merges_runs() {
        let mut buf = CellBuffer::new(4, 1, Cell::default());
        buf.put_str(2, 0, "hi", Color::Red);
        let line = buf.row_line(0);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "  ");
        assert_eq!(line.spans[1].content, "hi");
    }

    #[test]
    fn test_viewport_mapping() {
        let vp = Viewport::new(96, 27, 960.0, 540.0);
        assert_eq!(vp.col(0.0), 0);
        assert_eq!(vp.col(955.0), 95);
        assert_eq!(vp.row(520.0), 26);
        assert_eq!(vp.cols_span(80.0, 48.0), (8, 5));

        let shaken = vp.with_offset((1, -1));
        assert_eq!(shaken.col(0.0), 1);
        assert_eq!(shaken.row(20.0), 0);
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Color::Rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Color::Rgb(0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_invert_and_darken() {
        assert_eq!(invert_color(Color::Rgb(0, 10, 255)), Color::Rgb(255, 245, 0));
        assert_eq!(invert_color(Color::Reset), Color::Reset);
        assert_eq!(darken(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(0, 0, 0));
        assert_eq!(darken(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }
}
