//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::blocks::for_each_block;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::block_color;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(20, 20, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP: [(&str, &str); 6] = [
    ("\u{2190}\u{2192}", "move"),
    ("\u{2193}", "down"),
    ("\u{2191}", "rotate"),
    ("P", "pause"),
    ("R", "reset"),
    ("Q", "quit"),
];

/// Draws the board, the falling piece and a help panel.
pub struct GameView {
    /// Terminal columns per block.
    cell_w: u16,
    /// Terminal rows per block.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered well in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render the snapshot, overlaying `PAUSED` or `GAME OVER` from its flags.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_banner(snap, None, viewport, fb);
    }

    /// Render with an explicit banner that takes precedence over the
    /// snapshot's own overlay.
    pub fn render_into_with_banner(
        &self,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle::new(Rgb::new(70, 70, 80), WELL_BG);
        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            well,
        );
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for_each_block(snap, |block| {
            let Some(color) = block_color(block.color) else {
                return;
            };
            let (col, row) = block.cell();
            let px = origin_x + 1 + col as u16 * self.cell_w;
            let py = origin_y + 1 + row as u16 * self.cell_h;
            fb.fill_rect(
                px,
                py,
                self.cell_w,
                self.cell_h,
                '\u{2588}',
                CellStyle::new(color, WELL_BG),
            );
        });

        self.draw_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        let overlay = banner.or(if snap.game_over {
            Some("GAME OVER")
        } else if snap.paused {
            Some("PAUSED")
        } else {
            None
        });
        if let Some(text) = overlay {
            draw_centered(fb, origin_x, origin_y, frame_w, frame_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x.saturating_add(12) > viewport.width {
            return;
        }

        let title = CellStyle::new(Rgb::new(240, 240, 240), PANEL_BG).bold();
        let key = CellStyle::new(Rgb::new(255, 165, 0), PANEL_BG).bold();
        let text = CellStyle::new(Rgb::new(190, 190, 190), PANEL_BG);

        fb.put_str(x, y, "BLOCKDROP", title);
        fb.put_str(x, y + 1, &format!("game {}", snap.episode_id + 1), text);

        for (i, (keys, what)) in HELP.iter().enumerate() {
            let row = y + 3 + i as u16;
            fb.put_str(x, row, keys, key);
            fb.put_str(x + 3, row, what, text);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '\u{2500}', style);
        fb.put_char(cx, bottom, '\u{2500}', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '\u{2502}', style);
        fb.put_char(right, cy, '\u{2502}', style);
    }
    fb.put_char(x, y, '\u{250C}', style);
    fb.put_char(right, y, '\u{2510}', style);
    fb.put_char(x, bottom, '\u{2514}', style);
    fb.put_char(right, bottom, '\u{2518}', style);
}

fn draw_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let len = text.chars().count() as u16;
    let tx = x.saturating_add(w.saturating_sub(len) / 2);
    let ty = y.saturating_add(h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(tx, ty, text, style);
}
