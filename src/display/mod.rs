//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.  The games simulate on a fixed canvas in
//! world units; [`Viewport`] scales that canvas onto the terminal grid.
//!
//! Screen layout:
//!   row 0          HUD
//!   row 1          top border
//!   rows 2..h-2    play area
//!   row h-2        bottom border
//!   row h-1        controls hint

pub mod invaders;
pub mod platformer;
pub mod scores;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::geometry::Rect;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BORDER: Color = Color::DarkBlue;
pub const C_HUD: Color = Color::White;
pub const C_HINT: Color = Color::DarkGrey;
pub const C_MESSAGE: Color = Color::White;
/// Gold, used for end-of-round banners.
pub const C_BANNER: Color = Color::Rgb { r: 0xFF, g: 0xD7, b: 0x00 };

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps world coordinates onto the terminal's play area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: i32,
    pub world_height: i32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: i32, world_height: i32) -> Self {
        Viewport {
            cols,
            rows,
            world_width: world_width.max(1),
            world_height: world_height.max(1),
        }
    }

    fn inner_cols(&self) -> i64 {
        i64::from(self.cols.saturating_sub(2).max(1))
    }

    fn inner_rows(&self) -> i64 {
        i64::from(self.rows.saturating_sub(4).max(1))
    }

    /// Terminal column for world `x`, clamped inside the side walls.
    pub fn col(&self, x: i32) -> u16 {
        let inner = self.inner_cols();
        let scaled = i64::from(x) * inner / i64::from(self.world_width);
        (1 + scaled.clamp(0, inner - 1)) as u16
    }

    /// Terminal row for world `y`, clamped inside the top and bottom bars.
    pub fn row(&self, y: i32) -> u16 {
        let inner = self.inner_rows();
        let scaled = i64::from(y) * inner / i64::from(self.world_height);
        (2 + scaled.clamp(0, inner - 1)) as u16
    }

    /// Inclusive cell range covered by `rect`; never smaller than one cell.
    /// `None` when the rectangle lies entirely outside the canvas.
    pub fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let canvas = Rect::new(0, 0, self.world_width, self.world_height);
        if !rect.overlaps(&canvas) {
            return None;
        }
        let c0 = self.col(rect.left);
        let r0 = self.row(rect.top);
        let c1 = self.col(rect.right - 1).max(c0);
        let r1 = self.row(rect.bottom - 1).max(r0);
        Some((c0, r0, c1, r1))
    }

    pub fn center_col(&self) -> u16 {
        self.cols / 2
    }

    pub fn center_row(&self) -> u16 {
        self.rows / 2
    }
}

// ── Frame bracketing ──────────────────────────────────────────────────────────

pub fn begin_frame<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    Ok(())
}

/// Park the cursor in a harmless spot and flush.
pub fn finish_frame<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Shared pieces ─────────────────────────────────────────────────────────────

/// Box around the play area: bars on rows 1 and h-2, walls on the edge columns.
pub fn draw_border<W: Write>(out: &mut W, vp: &Viewport) -> std::io::Result<()> {
    let span = "─".repeat(vp.cols.saturating_sub(2) as usize);
    let last_col = vp.cols.saturating_sub(1);
    let bottom = vp.rows.saturating_sub(2);

    out.queue(style::SetForegroundColor(C_BORDER))?;
    for (row, left, right) in [(1, '┌', '┐'), (bottom, '└', '┘')] {
        out.queue(cursor::MoveTo(0, row))?
            .queue(Print(format!("{left}{span}{right}")))?;
    }
    for row in 2..bottom {
        for col in [0, last_col] {
            out.queue(cursor::MoveTo(col, row))?.queue(Print('│'))?;
        }
    }
    Ok(())
}

/// Fill every cell a world rectangle covers with `glyph`.
pub fn fill_rect<W: Write>(
    out: &mut W,
    vp: &Viewport,
    rect: &Rect,
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let Some((c0, r0, c1, r1)) = vp.cells(rect) else {
        return Ok(());
    };
    let run: String = std::iter::repeat(glyph).take((c1 - c0 + 1) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&run))?;
    }
    Ok(())
}

/// HUD text, centred on row 0.
pub fn draw_hud<W: Write>(out: &mut W, vp: &Viewport, text: &str) -> std::io::Result<()> {
    let col = vp
        .center_col()
        .saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(text))?;
    Ok(())
}

pub fn draw_hint<W: Write>(out: &mut W, vp: &Viewport, text: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, vp.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(text))?;
    Ok(())
}

/// A block of lines centred on the screen.
pub fn draw_centered<W: Write>(
    out: &mut W,
    vp: &Viewport,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let start_row = vp
        .center_row()
        .saturating_sub(lines.len() as u16 / 2);
    for (i, (text, color)) in lines.iter().enumerate() {
        let col = vp
            .center_col()
            .saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }
    Ok(())
}
