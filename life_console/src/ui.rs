// ui.rs - Text console output for the simulation

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use life_engine::Grid;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";    // clear, cursor to top-left
const DEAD_CELL: &str    = "\x1b[7m  \x1b[0m"; // inverse-video double space
const LIVE_CELL: &str    = "  ";

/// Something that can show a generation.
pub trait Renderer {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()>;
}

/// Draws each generation as an ANSI frame. Cells are two columns wide so the
/// board looks roughly square in a terminal.
pub struct AnsiRenderer<W: Write> {
    out: W,
    frame: String,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, frame: String::new() }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: u64) -> Result<()> {
        self.frame.clear();
        draw_frame(grid, generation, &mut self.frame)?;
        self.out.write_all(self.frame.as_bytes()).context("failed to write frame")?;
        self.out.flush().context("failed to flush frame")
    }
}

/// Appends one full frame (clear, board, status line) to `buf`.
pub fn draw_frame(grid: &Grid, generation: u64, buf: &mut String) -> Result<()> {
    buf.push_str(CLEAR_SCREEN);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            buf.push_str(if grid.get(x, y)? { LIVE_CELL } else { DEAD_CELL });
        }
        buf.push('\n');
    }
    writeln!(buf, "generation {generation}, population {}", grid.population())?;
    Ok(())
}

/// Discards frames; used with `--quiet`.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _generation: u64) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_layout() {
        let grid = Grid::from_cells(2, 2, [(1, 0)]).unwrap();
        let mut buf = String::new();
        draw_frame(&grid, 3, &mut buf).unwrap();

        let expected = format!(
            "{CLEAR_SCREEN}{DEAD_CELL}{LIVE_CELL}\n{DEAD_CELL}{DEAD_CELL}\ngeneration 3, population 1\n"
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn ansi_renderer_writes_one_frame_per_call() {
        let grid = Grid::from_cells(3, 1, [(0, 0), (2, 0)]).unwrap();
        let mut renderer = AnsiRenderer::new(Vec::new());
        renderer.render(&grid, 0).unwrap();
        renderer.render(&grid, 1).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches(CLEAR_SCREEN).count(), 2);
        assert!(out.contains("generation 0, population 2"));
        assert!(out.ends_with("generation 1, population 2\n"));
    }

    #[test]
    fn stdout_renderer_does_not_hold_the_lock() {
        // StdoutLock is !Send; the renderer must own the unlocked handle
        fn assert_send<T: Send>(_: &T) {}
        assert_send(&AnsiRenderer::new(std::io::stdout()));
    }
}
