//! Crossterm output: raw mode, the alternate screen and drawing.

use std::io::{self, Stdout, Write};

use color_eyre::{eyre::WrapErr, Result};
use crossterm::{
    cursor,
    execute,
    queue,
    style::{self, Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::warn;

use super::{
    render::{sprites, Sprite, SpriteKind, Viewport},
    screen::Prompt,
};
use crate::snake::models::GameState;

const TITLE: &str = "Welcome to the Snake Game";

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 2;
const EMPTY: char = '.';

const fn sprite_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Head => Color::Green,
        SpriteKind::Segment => Color::DarkGreen,
        SpriteKind::Food => Color::Red,
    }
}

fn screen_pos(left: u32, top: u32) -> (u16, u16) {
    // two columns per unit keeps cells roughly square.
    let column = u16::try_from(left.saturating_mul(2)).unwrap_or(u16::MAX);
    let row = u16::try_from(top)
        .unwrap_or(u16::MAX)
        .saturating_add(HEADER_ROWS);
    (column, row)
}

fn run_of(glyph: char, units: u32) -> String {
    std::iter::repeat(glyph)
        .take(usize::try_from(units.saturating_mul(2)).unwrap_or(0))
        .collect()
}

/// Owns the terminal while the shell runs and restores it on drop.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    /// # Errors
    ///
    /// Fails when the terminal cannot be switched to raw mode.
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().wrap_err("failed to enable raw mode")?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .wrap_err("failed to set up the screen")?;
        Ok(Self { out })
    }

    fn line(&mut self, row: u16, text: &str) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, row), Print(text))?;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on any terminal write error.
    pub fn draw_home(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        queue!(self.out, style::SetAttribute(style::Attribute::Bold))?;
        self.line(1, TITLE)?;
        queue!(self.out, style::SetAttribute(style::Attribute::Reset))?;
        self.line(3, "[enter] start game    [q] quit")?;
        self.out.flush()?;
        Ok(())
    }

    fn fill(&mut self, sprite: &Sprite) -> Result<()> {
        let run = run_of(sprite.kind.glyph(), sprite.size);
        queue!(self.out, SetForegroundColor(sprite_color(sprite.kind)))?;
        for dy in 0..sprite.size {
            let (column, row) = screen_pos(sprite.left, sprite.top + dy);
            queue!(self.out, cursor::MoveTo(column, row), Print(&run))?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Fails on any terminal write error.
    pub fn draw_game(&mut self, state: &GameState, prompt: Prompt) -> Result<()> {
        let (columns, rows) =
            terminal::size().wrap_err("failed to read the terminal size")?;
        let viewport = Viewport::fit_terminal(
            columns,
            rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS),
            &state.board,
        );

        queue!(self.out, terminal::Clear(ClearType::All))?;
        self.line(0, "[esc] back to home")?;
        self.line(1, &format!("length {}", state.len()))?;

        let side = viewport.side();
        let background = run_of(EMPTY, side);
        queue!(self.out, SetForegroundColor(Color::DarkGrey))?;
        for top in 0..side {
            let (column, row) = screen_pos(0, top);
            queue!(self.out, cursor::MoveTo(column, row), Print(&background))?;
        }

        for sprite in sprites(state, &viewport) {
            self.fill(&sprite)?;
        }
        queue!(self.out, ResetColor)?;

        let (_, below) = screen_pos(0, side + 1);
        match prompt {
            Prompt::Asking => {
                self.line(below, "Game Over - Do you want to play again? [y/n]")?;
            }
            Prompt::Dismissed => self.line(below, "Game Over")?,
            Prompt::Hidden => {}
        }

        self.out.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen)
        {
            warn!("failed to leave the alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}
