//! Software-rendered visualizer using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SPELL THE WORD               t a l _                    │
//! │                                                          │
//! │        ┌──┐  ┌──┐  ┌──┐  ┌──┐  ┌──┐                      │
//! │        │k │  │q │  │a │  │t │  │e │    cubes, projected  │
//! │        └──┘  └──┘  └──┘  └──┘  └──┘    through Camera    │
//! │        ┌──┐  ┌──┐  ┌──┐  ┌──┐  ┌──┐                      │
//! │        │l │  │m │  │b │  │r │  │v │                      │
//! │        └──┘  └──┘  └──┘  └──┘  └──┘                      │
//! │                                                          │
//! │  status bar                                              │
//! │  key legend                                              │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Input is translated into [`SimInput`]s and sent to the simulation
//! gesture source; the visualizer never touches the session directly.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use spelling_session::{SessionStatus, SpellingSession};

use crate::camera::{Camera, Projected};
use crate::error::{AppError, Result};
use crate::gesture::{SimInput, SimKey};
use crate::layout::{CubeLayout, PlacedCube};

use std::sync::mpsc::Sender;

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W:       usize = 1000;
pub const WIN_H:       usize = 640;
const HEADER_H:        usize = 48;
const STATUS_Y:        usize = WIN_H - 40;
const BG_COLOR:        u32   = 0xFF1A1A2E;
const HEADER_BG:       u32   = 0xFF16213E;
const TEXT_BG:         u32   = 0xFF0F3460;
const CUBE_EDGE:       u32   = 0xFF000000;
const HIGHLIGHT_COLOR: u32   = 0xFFFFFF00;
const MATCHED_COLOR:   u32   = 0xFF55DD77;
const EXHAUSTED_COLOR: u32   = 0xFFFF7766;

/// Cube face colors, cycled by pool slot.
const CUBE_COLORS: [u32; 5] = [
    0xFF4FC3F7, 0xFFFFB74D, 0xFFBA68C8, 0xFF81C784, 0xFFF06292,
];

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window:     Window,
    buf:        Vec<u32>,
    sim_tx:     Sender<SimInput>,
    camera:     Camera,
    plane_z:    f32,
    cube_size:  f32,
    mouse_down: bool,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimInput>, layout: &CubeLayout) -> Result<Self> {
        let mut window = Window::new(
            "Leap Speller - tap the letters",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| AppError::Window(e.to_string()))?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf:        vec![BG_COLOR; WIN_W * WIN_H],
            sim_tx,
            camera:     Camera::new(WIN_W, WIN_H),
            plane_z:    layout.plane_z(),
            cube_size:  layout.cube_size,
            mouse_down: false,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll mouse and keyboard and translate to SimInput events.
    ///
    /// * left click – tap where the pointer ray meets the cube plane
    /// * `A`–`Z`    – tap the first cube showing that letter
    /// * Enter      – new word
    /// * Escape     – quit
    pub fn poll_input(&mut self, cubes: &[PlacedCube]) -> bool {
        if !self.window.is_open() { return false; }

        if self.window.is_key_pressed(Key::Escape, KeyRepeat::No) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Quit));
            return false;
        }
        if self.window.is_key_pressed(Key::Enter, KeyRepeat::No) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::NewWord));
        }

        // Click on press edge only
        let down = self.window.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_down {
            if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
                if let Some((point, direction)) = self.camera.pick_on_plane(mx, my, self.plane_z) {
                    let _ = self.sim_tx.send(SimInput::Tap { point, direction });
                }
            }
        }
        self.mouse_down = down;

        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            let Some(letter) = key_letter(key) else { continue };
            match cubes.iter().find(|c| c.letter() == letter) {
                Some(cube) => {
                    let direction = (cube.position - self.camera.eye).normalize();
                    let _ = self.sim_tx.send(SimInput::Tap { point: cube.position, direction });
                }
                None => log::debug!("no '{}' cube to tap", letter),
            }
        }

        true
    }

    /// Render one frame.
    pub fn render(
        &mut self,
        cubes:     &[PlacedCube],
        session:   &SpellingSession,
        highlight: Option<usize>,   // pool slot of the last hit cube
        status:    &str,
    ) {
        // Clear
        self.buf.fill(BG_COLOR);

        // ── Header: prompt + progress slots ───────────────────────────────
        self.fill_rect(0, 0, WIN_W, HEADER_H, HEADER_BG);
        self.draw_label_scaled("SPELL THE WORD", 16, 14, 3, 0xFFFFD700);

        let progress = progress_slots(session);
        let progress_color = match session.status() {
            SessionStatus::InProgress => 0xFFEEEEEE,
            SessionStatus::Matched    => MATCHED_COLOR,
            SessionStatus::Exhausted  => EXHAUSTED_COLOR,
        };
        self.draw_label_scaled(&progress, WIN_W / 2, 10, 5, progress_color);

        if session.status() == SessionStatus::Exhausted {
            let reveal = format!("word: {}", session.target());
            self.draw_label_scaled(&reveal, WIN_W / 2, HEADER_H + 8, 3, 0xFFEEEEEE);
        }

        // ── Cubes, far to near ────────────────────────────────────────────
        for (i, p) in depth_order(&self.camera, cubes) {
            let cube = cubes[i];
            let side = (self.cube_size * self.camera.pixels_per_unit(p.depth)).max(4.0);
            let half = side * 0.5;
            let (x0, y0) = (p.x - half, p.y - half);
            if x0 < 0.0 || y0 < 0.0 { continue; }
            let (x0, y0, s) = (x0 as usize, y0 as usize, side as usize);

            let base = CUBE_COLORS[cube.index() % CUBE_COLORS.len()];
            let face = if highlight == Some(cube.index()) {
                blend(base, 0xFFFFFFFF, 0.45)
            } else {
                base
            };
            self.fill_rect(x0, y0, s, s, face);
            // Darker bottom strip gives a little depth
            let lip = (s / 8).max(1);
            self.fill_rect(x0, y0 + s - lip, s, lip, blend(face, 0xFF000000, 0.35));
            let edge = if highlight == Some(cube.index()) { HIGHLIGHT_COLOR } else { CUBE_EDGE };
            self.draw_border(x0, y0, s, s, edge);

            // Letter glyph, centred
            let scale = (s / 10).max(1);
            let gx = x0 + s.saturating_sub(3 * scale) / 2;
            let gy = y0 + s.saturating_sub(5 * scale) / 2;
            self.draw_label_scaled(&cube.letter().to_string(), gx, gy, scale, 0xFF000000);
        }

        // ── Status bar ────────────────────────────────────────────────────
        self.fill_rect(0, STATUS_Y, WIN_W, WIN_H - STATUS_Y, TEXT_BG);
        self.draw_label_scaled(status, 10, STATUS_Y + 6, 2, 0xFFEEEEEE);

        // ── Key legend ────────────────────────────────────────────────────
        self.draw_label(
            "click or A-Z = tap   Enter = new word   Esc = quit",
            10, WIN_H - 10, 0xFF888888,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y+h).min(WIN_H) {
            for col in x..(x+w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 { return; }
        for col in x..(x+w).min(WIN_W) {
            if y < WIN_H           { self.buf[y           * WIN_W + col] = color; }
            if y+h-1 < WIN_H       { self.buf[(y+h-1)     * WIN_W + col] = color; }
        }
        for row in y..(y+h).min(WIN_H) {
            if x < WIN_W           { self.buf[row * WIN_W + x    ] = color; }
            if x+w-1 < WIN_W       { self.buf[row * WIN_W + x+w-1] = color; }
        }
    }

    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        self.draw_label_scaled(text, x, y, 1, color);
    }

    /// 3×5 bitmap font, each glyph pixel drawn as a `scale`×`scale` block.
    fn draw_label_scaled(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let scale = scale.max(1);
        let mut cx = x;
        for ch in text.chars() {
            if cx + 3 * scale > WIN_W { break; }
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale; // 3 wide + 1 gap
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Frame helpers
// ────────────────────────────────────────────────────────────────────────────

/// Visible cubes with their projections, farthest first.
fn depth_order(camera: &Camera, cubes: &[PlacedCube]) -> Vec<(usize, Projected)> {
    let mut order: Vec<(usize, Projected)> = cubes.iter().enumerate()
        .filter_map(|(i, c)| camera.project(c.position).map(|p| (i, p)))
        .collect();
    order.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));
    order
}

/// "ta__" style progress: entered letters, then one `_` per letter still
/// to go.  Never reveals the target.
fn progress_slots(session: &SpellingSession) -> String {
    let mut out: Vec<char> = session.entered().chars().collect();
    out.extend(std::iter::repeat('_').take(session.remaining()));
    out.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn key_letter(key: Key) -> Option<char> {
    let c = match key {
        Key::A => 'a', Key::B => 'b', Key::C => 'c', Key::D => 'd', Key::E => 'e',
        Key::F => 'f', Key::G => 'g', Key::H => 'h', Key::I => 'i', Key::J => 'j',
        Key::K => 'k', Key::L => 'l', Key::M => 'm', Key::N => 'n', Key::O => 'o',
        Key::P => 'p', Key::Q => 'q', Key::R => 'r', Key::S => 's', Key::T => 't',
        Key::U => 'u', Key::V => 'v', Key::W => 'w', Key::X => 'x', Key::Y => 'y',
        Key::Z => 'z',
        _ => return None,
    };
    Some(c)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '_' => [0b000, 0b000, 0b000, 0b000, 0b111],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b010, 0b000, 0b010],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

/// Alpha-blend two ARGB colors. `t` = 0.0 → all `a`, `t` = 1.0 → all `b`.
fn blend(a: u32, b: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |ca: u32, cb: u32| (ca as f32 * (1.0-t) + cb as f32 * t) as u32;
    let ar = (a >> 16) & 0xFF; let br = (b >> 16) & 0xFF;
    let ag = (a >>  8) & 0xFF; let bg = (b >>  8) & 0xFF;
    let ab =  a        & 0xFF; let bb =  b        & 0xFF;
    0xFF000000 | (lerp(ar,br) << 16) | (lerp(ag,bg) << 8) | lerp(ab,bb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use letter_pool::{pool_for_word, Word};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn every_letter_key_maps_and_has_a_glyph() {
        let fallback = char_glyph('\u{1}');
        for c in 'a'..='z' {
            assert_ne!(char_glyph(c), fallback, "no glyph for {}", c);
        }
        assert_eq!(key_letter(Key::Q), Some('q'));
        assert_eq!(key_letter(Key::Enter), None);
    }

    #[test]
    fn progress_hides_the_target() {
        let mut s = SpellingSession::new(Word::from("talk"));
        assert_eq!(progress_slots(&s), "_ _ _ _");
        s.enter('t').unwrap();
        s.enter('a').unwrap();
        assert_eq!(progress_slots(&s), "t a _ _");
    }

    #[test]
    fn cubes_draw_far_to_near() {
        let mut rng = SmallRng::seed_from_u64(5);
        let pool = pool_for_word(&Word::from("talk"), 10, &mut rng).unwrap();
        let cubes = CubeLayout::default().place(&pool);
        let camera = Camera::new(WIN_W, WIN_H);

        let order = depth_order(&camera, &cubes);
        assert_eq!(order.len(), cubes.len());
        for w in order.windows(2) {
            assert!(w[0].1.depth >= w[1].1.depth);
        }
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(0xFF102030, 0xFFFFFFFF, 0.0), 0xFF102030);
        assert_eq!(blend(0xFF102030, 0xFFFFFFFF, 1.0), 0xFFFFFFFF);
    }
}
