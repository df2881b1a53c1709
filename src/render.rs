use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color as CColor},
};
use roast_flap::geometry::Rect;
use roast_flap::snapshot::{BirdView, TauntView};
use roast_flap::{DifficultyProfile, Obstacle, Phase, WorldSnapshot};
use std::io::{self, Write};

// ── Colors ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Rgb(u8, u8, u8);

impl Rgb {
    const fn lerp(a: Rgb, b: Rgb, t_256: u16) -> Rgb {
        let t = t_256 as i32;
        Rgb(
            (a.0 as i32 + (b.0 as i32 - a.0 as i32) * t / 256) as u8,
            (a.1 as i32 + (b.1 as i32 - a.1 as i32) * t / 256) as u8,
            (a.2 as i32 + (b.2 as i32 - a.2 as i32) * t / 256) as u8,
        )
    }

    const fn halve(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }

    fn color(self) -> CColor {
        CColor::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

const SKY_TOP: Rgb = Rgb(112, 197, 206);
const SKY_BOT: Rgb = Rgb(190, 232, 245);
const LETTERBOX: Rgb = Rgb(18, 22, 30);
const PIPE_L: Rgb = Rgb(74, 122, 26);
const PIPE_M: Rgb = Rgb(100, 170, 40);
const PIPE_R: Rgb = Rgb(115, 191, 46);
const PIPE_HI: Rgb = Rgb(145, 215, 62);
const CAP_DARK: Rgb = Rgb(60, 100, 20);
const BIRD_Y: Rgb = Rgb(245, 200, 66);
const BIRD_HI: Rgb = Rgb(255, 225, 100);
const BIRD_WING: Rgb = Rgb(215, 165, 35);
const BIRD_EYE: Rgb = Rgb(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb(225, 75, 35);
const BIRD_BEAK_HI: Rgb = Rgb(240, 110, 50);
const PANEL: Rgb = Rgb(220, 195, 120);
const PANEL_EDGE: Rgb = Rgb(210, 185, 110);
const WHITE: Rgb = Rgb(255, 255, 255);
const BLACK: Rgb = Rgb(0, 0, 0);
const RED: Rgb = Rgb(200, 30, 30);
const SHADOW: Rgb = Rgb(30, 30, 30);

// ── Pixel buffer with half-block rendering ──────────────────────────────────

struct PixelBuf {
    w: usize,
    h: usize, // pixel height = terminal rows * 2
    px: Vec<Rgb>,
}

impl PixelBuf {
    fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            px: vec![LETTERBOX; w * h],
        }
    }

    fn resize(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.px.resize(w * h, LETTERBOX);
    }

    fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// Queues the whole buffer; the caller flushes.
    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev_fg = Rgb(0, 0, 0);
        let mut prev_bg = Rgb(0, 0, 0);
        let mut need_fg = true;
        let mut need_bg = true;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    if need_bg || prev_bg != top {
                        queue!(out, style::SetBackgroundColor(top.color()))?;
                        prev_bg = top;
                        need_bg = false;
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if need_fg || prev_fg != top {
                        queue!(out, style::SetForegroundColor(top.color()))?;
                        prev_fg = top;
                        need_fg = false;
                    }
                    if need_bg || prev_bg != bot {
                        queue!(out, style::SetBackgroundColor(bot.color()))?;
                        prev_bg = bot;
                        need_bg = false;
                    }
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                need_fg = true;
                need_bg = true;
            }
        }
        queue!(out, style::ResetColor)
    }
}

// ── 3x5 bitmap digits ──────────────────────────────────────────────────────

#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb) {
    let glyph = &DIGITS[d as usize];
    for row in 0..5 {
        for col in 0..3 {
            if glyph[row * 3 + col] == 1 {
                let px = x + col as i32;
                let py = y + row as i32;
                buf.set(px + 1, py + 1, SHADOW);
                buf.set(px, py, fg);
            }
        }
    }
}

fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, fg: Rgb) {
    let s = n.to_string();
    let total_w = s.len() as i32 * 4 - 1; // 3px per digit + 1px spacing
    let start_x = cx - total_w / 2;
    for (i, ch) in s.bytes().enumerate() {
        draw_digit(buf, start_x + i as i32 * 4, y, ch - b'0', fg);
    }
}

fn pipe_shade(x: i32, total_w: i32) -> Rgb {
    if total_w <= 1 {
        return PIPE_M;
    }
    let t = (x as f64 / (total_w - 1) as f64 * 256.0) as u16;
    if t < 64 {
        Rgb::lerp(PIPE_L, PIPE_M, (t * 4).min(256))
    } else if t < 100 {
        Rgb::lerp(PIPE_M, PIPE_HI, ((t - 64) * 7).min(256))
    } else if t < 160 {
        Rgb::lerp(PIPE_HI, PIPE_R, ((t - 100) * 4).min(256))
    } else {
        Rgb::lerp(PIPE_R, PIPE_L, ((t - 160) * 3).min(256))
    }
}

// ── Viewport ────────────────────────────────────────────────────────────────

/// Fits the logical playfield into the terminal's pixel grid, centred,
/// keeping its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub ratio: f64,
    pub ox: f64,
    pub oy: f64,
    pub playfield: (f64, f64),
}

impl Viewport {
    pub fn fit(cols: u16, rows: u16, playfield: (f64, f64)) -> Self {
        let (w, h) = playfield;
        let pw = cols as f64;
        let ph = rows as f64 * 2.0;
        let ratio = (pw / w).min(ph / h).max(1e-6);
        Self {
            cols,
            rows,
            ratio,
            ox: (pw - w * ratio) / 2.0,
            oy: (ph - h * ratio) / 2.0,
            playfield,
        }
    }

    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.ox + x * self.ratio, self.oy + y * self.ratio)
    }

    pub fn to_logical(&self, px: f64, py: f64) -> (f64, f64) {
        ((px - self.ox) / self.ratio, (py - self.oy) / self.ratio)
    }

    /// Logical point under the centre of a terminal cell.
    pub fn cell_to_logical(&self, col: u16, row: u16) -> (f64, f64) {
        self.to_logical(col as f64 + 0.5, row as f64 * 2.0 + 1.0)
    }

    /// Terminal cell containing a logical point, clamped to the screen.
    pub fn cell_at(&self, x: f64, y: f64) -> (u16, u16) {
        let (px, py) = self.to_px(x, y);
        let col = px.floor().clamp(0.0, self.cols.saturating_sub(1) as f64);
        let row = (py / 2.0).floor().clamp(0.0, self.rows.saturating_sub(1) as f64);
        (col as u16, row as u16)
    }

    /// Pixel rectangle `(x, y, w, h)` covering a logical rectangle.
    fn rect_px(&self, r: &Rect) -> (i32, i32, i32, i32) {
        let (x0, y0) = self.to_px(r.left(), r.top());
        let (x1, y1) = self.to_px(r.right(), r.bottom());
        let (x0, y0) = (x0.round() as i32, y0.round() as i32);
        let (x1, y1) = (x1.round() as i32, y1.round() as i32);
        (x0, y0, x1 - x0, y1 - y0)
    }

    fn playfield_px(&self) -> (i32, i32, i32, i32) {
        let (w, h) = self.playfield;
        self.rect_px(&Rect::new(0.0, 0.0, w, h))
    }
}

// ── Menu layout ─────────────────────────────────────────────────────────────

const MENU_ITEM_W: f64 = 120.0;
const MENU_ITEM_H: f64 = 40.0;

/// Clickable box of the `index`th menu entry.
pub fn menu_item_rect(index: usize, playfield: (f64, f64)) -> Rect {
    let (w, h) = playfield;
    let cy = h / 2.0 - 30.0 + 60.0 * index as f64;
    Rect::centered(w / 2.0, cy, MENU_ITEM_W, MENU_ITEM_H)
}

pub fn menu_item_at(x: f64, y: f64, playfield: (f64, f64)) -> Option<usize> {
    (0..DifficultyProfile::ALL.len()).find(|&i| menu_item_rect(i, playfield).contains(x, y))
}

/// Greedy word wrap; words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let len = line.chars().count();
        if len > 0 && len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// ── Renderer ────────────────────────────────────────────────────────────────

pub struct Renderer {
    buf: PixelBuf,
    vp: Viewport,
    frame: u64,
}

impl Renderer {
    pub fn new(cols: u16, rows: u16, playfield: (f64, f64)) -> Self {
        Self {
            buf: PixelBuf::new(cols as usize, rows as usize * 2),
            vp: Viewport::fit(cols, rows, playfield),
            frame: 0,
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.buf.resize(cols as usize, rows as usize * 2);
        self.vp = Viewport::fit(cols, rows, self.vp.playfield);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.vp
    }

    pub fn draw(
        &mut self,
        snap: &WorldSnapshot<'_>,
        highlighted: usize,
        out: &mut impl Write,
    ) -> io::Result<()> {
        self.frame += 1;
        self.buf.fill(LETTERBOX);
        self.draw_sky();

        if snap.phase != Phase::Menu {
            self.draw_pipes(snap.obstacles.iter());
            self.draw_bird(&snap.bird);
            self.mask_letterbox();
            let (x, y, w, _) = self.vp.playfield_px();
            draw_number(&mut self.buf, x + w / 2, y + 4, snap.displayed_score(), WHITE);
        }
        if snap.game_over.is_some() {
            self.draw_game_over_panel(snap);
        }

        self.buf.render(out)?;

        match snap.phase {
            Phase::Menu => self.menu_text(highlighted, out)?,
            Phase::Playing => {
                if let Some(taunt) = &snap.taunt {
                    self.bubble(taunt, out)?;
                }
            }
            Phase::GameOver => {
                if let Some(taunt) = &snap.taunt {
                    self.bubble(taunt, out)?;
                }
                self.game_over_text(snap, out)?;
            }
        }
        queue!(out, style::ResetColor, style::SetAttribute(Attribute::Reset))?;
        out.flush()
    }

    fn draw_sky(&mut self) {
        let (x0, y0, w, h) = self.vp.playfield_px();
        for y in 0..h {
            let t = (y as u32 * 256 / h.max(1) as u32) as u16;
            let c = Rgb::lerp(SKY_TOP, SKY_BOT, t);
            for x in 0..w {
                self.buf.set(x0 + x, y0 + y, c);
            }
        }
    }

    /// Re-paints everything outside the playfield so pipes entering or
    /// leaving do not spill onto the bars.
    fn mask_letterbox(&mut self) {
        let (x0, y0, w, h) = self.vp.playfield_px();
        let (bw, bh) = (self.buf.w as i32, self.buf.h as i32);
        self.buf.fill_rect(0, 0, x0, bh, LETTERBOX);
        self.buf.fill_rect(x0 + w, 0, bw - x0 - w, bh, LETTERBOX);
        self.buf.fill_rect(0, 0, bw, y0, LETTERBOX);
        self.buf.fill_rect(0, y0 + h, bw, bh - y0 - h, LETTERBOX);
    }

    fn draw_pipes<'a>(&mut self, obstacles: impl Iterator<Item = &'a Obstacle>) {
        for o in obstacles {
            self.draw_pipe(&o.top, true);
            self.draw_pipe(&o.bottom, false);
        }
    }

    fn draw_pipe(&mut self, r: &Rect, cap_at_bottom: bool) {
        let (px, py, pw, ph) = self.vp.rect_px(r);
        if pw <= 0 || ph <= 0 {
            return;
        }
        let cap_extra = (pw / 8).max(1);
        let cap_h = (pw / 3).clamp(1, ph);

        // Body
        for x in 0..pw {
            let c = pipe_shade(x, pw);
            for y in py..py + ph {
                self.buf.set(px + x, y, c);
            }
        }
        // Cap at the mouth of the gap
        let cy = if cap_at_bottom { py + ph - cap_h } else { py };
        for x in -cap_extra..(pw + cap_extra) {
            let c = pipe_shade(x + cap_extra, pw + cap_extra * 2);
            for y in cy..cy + cap_h {
                self.buf.set(px + x, y, c);
            }
            self.buf.set(px + x, cy, CAP_DARK);
            self.buf.set(px + x, cy + cap_h - 1, CAP_DARK);
        }
    }

    fn draw_bird(&mut self, bird: &BirdView) {
        let r = Rect::centered(bird.x, bird.y, bird.width, bird.height);
        let (x, y, w, h) = self.vp.rect_px(&r);

        // Too small for features: plain block.
        if w < 6 || h < 6 {
            self.buf.fill_rect(x, y, w.max(1), h.max(1), BIRD_Y);
            return;
        }

        let tilt = (bird.velocity / 6.0).clamp(-1.0, 1.0) as i32;

        // Body core
        let (bx, by, bw, bh) = (x + w / 8, y + h / 4, w * 5 / 8, h / 2);
        self.buf.fill_rect(bx, by, bw, bh, BIRD_Y);
        self.buf.fill_rect(bx + 1, by, bw - 2, 1, BIRD_HI);

        // Wing
        let wing_y_off = if self.frame % 8 < 4 { -1 } else { 1 };
        self.buf.fill_rect(
            bx + 1,
            y + h / 2 + wing_y_off + tilt,
            (w / 4).max(1),
            (h / 6).max(1),
            BIRD_WING,
        );

        // Eye
        let eye_r = (w / 10).max(1);
        let ex = bx + bw - eye_r - 2;
        let ey = by + 1;
        self.buf.fill_rect(ex, ey, eye_r + 1, eye_r + 1, BIRD_EYE);
        self.buf.set(ex + eye_r, ey + eye_r, BIRD_PUPIL);

        // Beak
        let beak_x = bx + bw;
        let beak_y = y + h / 2 - h / 12 + tilt;
        let beak_w = (w / 4).max(2);
        let beak_h = (h / 6).max(2);
        self.buf.fill_rect(beak_x, beak_y, beak_w, beak_h / 2 + 1, BIRD_BEAK_HI);
        self.buf
            .fill_rect(beak_x, beak_y + beak_h / 2 + 1, beak_w, beak_h / 2, BIRD_BEAK);

        // Tail
        self.buf
            .fill_rect(x, y + h / 2 - 1 + tilt, (w / 8).max(1), 2, BIRD_WING);
    }

    fn draw_game_over_panel(&mut self, snap: &WorldSnapshot<'_>) {
        // Dark overlay
        for y in 0..self.buf.h {
            for x in 0..self.buf.w {
                let c = self.buf.get(x, y);
                self.buf.set(x as i32, y as i32, c.halve());
            }
        }

        let (w, h) = self.vp.playfield;
        let panel = Rect::centered(w / 2.0, h / 2.0, w * 0.8, h / 3.0);
        let (px, py, pw, ph) = self.vp.rect_px(&panel);
        self.buf.fill_rect(px - 1, py - 1, pw + 2, ph + 2, SHADOW);
        self.buf.fill_rect(px, py, pw, ph, PANEL_EDGE);
        self.buf.fill_rect(px + 1, py + 1, pw - 2, ph - 2, PANEL);

        let cx = px + pw / 2;
        draw_number(&mut self.buf, cx, py + 4, snap.displayed_score(), WHITE);
        draw_number(&mut self.buf, cx, py + 12, snap.best_score.floor() as u32, BIRD_Y);
    }

    // ── Text overlays ───────────────────────────────────────────────────────

    /// Prints `text` centred on logical `(cx, y)`, over whatever pixel is
    /// already there.
    fn label(
        &self,
        out: &mut impl Write,
        cx: f64,
        y: f64,
        text: &str,
        fg: Rgb,
        bold: bool,
    ) -> io::Result<()> {
        let (col, row) = self.vp.cell_at(cx, y);
        let len = text.chars().count() as u16;
        let start = col.saturating_sub(len / 2);
        if row >= self.vp.rows || start >= self.vp.cols {
            return Ok(());
        }
        let bg = self.buf.get(start as usize, row as usize * 2);
        self.print(out, start, row, text, fg, bg, bold)
    }

    #[allow(clippy::too_many_arguments)]
    fn print(
        &self,
        out: &mut impl Write,
        col: u16,
        row: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        bold: bool,
    ) -> io::Result<()> {
        if row >= self.vp.rows || col >= self.vp.cols {
            return Ok(());
        }
        let room = (self.vp.cols - col) as usize;
        let clipped: String = text.chars().take(room).collect();
        queue!(
            out,
            cursor::MoveTo(col, row),
            style::SetForegroundColor(fg.color()),
            style::SetBackgroundColor(bg.color()),
        )?;
        if bold {
            queue!(out, style::SetAttribute(Attribute::Bold))?;
        }
        queue!(
            out,
            style::Print(clipped),
            style::SetAttribute(Attribute::Reset)
        )
    }

    fn menu_text(&self, highlighted: usize, out: &mut impl Write) -> io::Result<()> {
        let (w, h) = self.vp.playfield;
        self.label(out, w / 2.0, h / 2.0 - 100.0, "Flappy Bird", BLACK, true)?;
        for (i, profile) in DifficultyProfile::ALL.iter().enumerate() {
            let r = menu_item_rect(i, self.vp.playfield);
            let (fg, bold) = if i == highlighted {
                (RED, true)
            } else {
                (BLACK, false)
            };
            self.label(out, w / 2.0, r.y + r.height / 2.0, profile.name(), fg, bold)?;
        }
        self.label(out, w / 2.0, h - 30.0, "1/E easy  2/H hard  Q quit", SHADOW, false)
    }

    fn bubble(&self, taunt: &TauntView, out: &mut impl Write) -> io::Result<()> {
        let (col, row) = self.vp.cell_at(taunt.anchor.0, taunt.anchor.1);
        let width = (self.vp.cols as usize).clamp(1, 36);
        let lines = wrap(taunt.text, width.saturating_sub(2).max(1));
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
        // Keep the bubble on screen, sliding it left if needed.
        let col = col.min(self.vp.cols.saturating_sub(longest));
        let pad = longest as usize - 2;
        for (i, line) in lines.iter().enumerate() {
            let padded = format!(" {line:<pad$} ");
            self.print(out, col, row + i as u16, &padded, BLACK, WHITE, false)?;
        }
        Ok(())
    }

    fn game_over_text(&self, snap: &WorldSnapshot<'_>, out: &mut impl Write) -> io::Result<()> {
        let Some(info) = snap.game_over else {
            return Ok(());
        };
        let (w, h) = self.vp.playfield;
        self.label(out, w / 2.0, h / 2.0 - 140.0, "Game Over!", WHITE, true)?;
        let msg = if info.can_dismiss {
            "Press SPACE to return to menu".to_string()
        } else {
            format!(
                "You wasted {:.2} minutes playing this game...",
                info.elapsed_minutes()
            )
        };
        self.label(out, w / 2.0, h / 2.0 + 130.0, &msg, WHITE, false)?;
        if let Some(profile) = snap.profile {
            let line = format!("{} mode  best {}", profile.name(), snap.best_score.floor());
            self.label(out, w / 2.0, h / 2.0 + 160.0, &line, WHITE, false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: (f64, f64) = (400.0, 600.0);

    #[test]
    fn test_viewport_fits_height_limited_terminal() {
        // 200 cols × 60 rows = 200 × 120 pixels; height is the limit.
        let vp = Viewport::fit(200, 60, FIELD);
        assert!((vp.ratio - 0.2).abs() < 1e-9);
        assert!((vp.ox - 60.0).abs() < 1e-9);
        assert!(vp.oy.abs() < 1e-9);
    }

    #[test]
    fn test_viewport_round_trip() {
        let vp = Viewport::fit(120, 40, FIELD);
        let (px, py) = vp.to_px(123.0, 456.0);
        let (x, y) = vp.to_logical(px, py);
        assert!((x - 123.0).abs() < 1e-9);
        assert!((y - 456.0).abs() < 1e-9);
    }

    #[test]
    fn test_cell_at_clamps() {
        let vp = Viewport::fit(80, 24, FIELD);
        assert_eq!(vp.cell_at(-1000.0, -1000.0), (0, 0));
        assert_eq!(vp.cell_at(10_000.0, 10_000.0), (79, 23));
    }

    #[test]
    fn test_zero_sized_terminal_does_not_divide_by_zero() {
        let vp = Viewport::fit(0, 0, FIELD);
        let (x, y) = vp.cell_to_logical(0, 0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_menu_hit_boxes() {
        assert_eq!(menu_item_at(200.0, 270.0, FIELD), Some(0));
        assert_eq!(menu_item_at(200.0, 330.0, FIELD), Some(1));
        assert_eq!(menu_item_at(200.0, 300.0, FIELD), None);
        assert_eq!(menu_item_at(20.0, 270.0, FIELD), None);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("Your flapping is laughable and so are you", 12);
        assert!(lines.iter().all(|l| l.chars().count() <= 12));
        assert_eq!(lines.join(" "), "Your flapping is laughable and so are you");
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_pipe_shade_edges() {
        assert_eq!(pipe_shade(0, 1), PIPE_M);
        assert_eq!(pipe_shade(0, 10), PIPE_L);
    }

    #[test]
    fn test_draw_number_centres_digits() {
        let mut buf = PixelBuf::new(20, 10);
        buf.fill(BLACK);
        draw_number(&mut buf, 10, 0, 1, WHITE);
        // "1" is 3 px wide centred on x = 10: columns 9..=11, middle stroke at 10.
        assert_eq!(buf.get(10, 0), WHITE);
        assert_eq!(buf.get(9, 0), BLACK);
    }
}
