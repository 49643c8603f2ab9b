#![cfg(feature = "std")]

//! The turn-taking session loop.
//!
//! Drives a [`GameState`] through a game: render, prompt, apply, check
//! for a winner, then check for a draw, then hand the turn over. The
//! blocking read in the prompt loop is the only suspension point.

use std::io::{BufRead, Write};
use std::string::String;

use crate::common::Mark;
use crate::game::GameState;
use crate::input::{parse_line, Command};
use crate::ui::render_board;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The given mark completed a line.
    Win(Mark),
    /// Board filled with no winner.
    Draw,
    /// The player quit or the input source closed. Not a game result;
    /// front-ends map this to a clean process exit.
    Aborted,
}

/// A game session over an input source and output sink.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Play one game from an empty board to a terminal state or abort.
    pub fn run(&mut self) -> anyhow::Result<SessionOutcome> {
        let mut game = GameState::new();
        writeln!(self.output, "🎮 Welcome to Tic Tac Toe! 🎮")?;
        writeln!(
            self.output,
            "Enter moves as 'row col' (e.g., '1 2' for row 1, column 2)"
        )?;
        writeln!(self.output, "Type 'quit' to exit the game")?;

        loop {
            render_board(&mut self.output, game.board())?;

            let (row, col) = match self.prompt_move(&game)? {
                Command::Move(row, col) => (row, col),
                Command::Quit => {
                    writeln!(self.output, "Thanks for playing!")?;
                    log::info!("session aborted by player");
                    return Ok(SessionOutcome::Aborted);
                }
            };

            // The prompt loop already validated; a failure here means a
            // driver bypassed it, so re-loop without switching players.
            if !game.apply_move(row, col) {
                writeln!(self.output, "Invalid move! Try again.")?;
                continue;
            }
            log::debug!("player {} moved at ({}, {})", game.current_player(), row, col);

            if let Some(winner) = game.check_winner() {
                render_board(&mut self.output, game.board())?;
                writeln!(self.output, "🎉 Player {} wins! 🎉", winner)?;
                log::info!("player {} won", winner);
                return Ok(SessionOutcome::Win(winner));
            }
            if game.is_board_full() {
                render_board(&mut self.output, game.board())?;
                writeln!(self.output, "🤝 It's a tie! 🤝")?;
                log::info!("game drawn");
                return Ok(SessionOutcome::Draw);
            }
            game.switch_player();
        }
    }

    /// Play games until the player declines a rematch or aborts.
    /// Returns the outcome of the final game.
    pub fn play(&mut self) -> anyhow::Result<SessionOutcome> {
        loop {
            let outcome = self.run()?;
            if outcome == SessionOutcome::Aborted {
                return Ok(outcome);
            }
            if !self.prompt_replay()? {
                return Ok(outcome);
            }
        }
    }

    /// Prompt until a line parses as a move or a quit command. Returns
    /// `Quit` when the input source is exhausted, treating a closed
    /// stdin like an explicit quit.
    fn prompt_move(&mut self, game: &GameState) -> anyhow::Result<Command> {
        loop {
            write!(
                self.output,
                "Player {}, enter your move (row col): ",
                game.current_player()
            )?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Command::Quit);
            }
            match parse_line(&line, game) {
                Ok(cmd) => return Ok(cmd),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Ask whether to play again. Declining (or a closed input source)
    /// prints the farewell.
    fn prompt_replay(&mut self) -> anyhow::Result<bool> {
        loop {
            write!(self.output, "\nWould you like to play again? (y/n): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                writeln!(self.output, "Thanks for playing! Goodbye! 👋")?;
                return Ok(false);
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => {
                    writeln!(self.output, "Thanks for playing! Goodbye! 👋")?;
                    return Ok(false);
                }
                _ => writeln!(self.output, "Please enter 'y' for yes or 'n' for no")?,
            }
        }
    }
}
