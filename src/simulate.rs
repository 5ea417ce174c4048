//! Headless computer-vs-computer games.

use anyhow::{Result, bail};
use derive_getters::Getters;
use derive_new::new;
use noughts_core::{Board, Controller, Difficulty, Input, Phase, Player, SessionSettings};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// A batch of games between two computer difficulties.
#[derive(Debug, Clone, Copy, new)]
pub struct Simulation {
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
}

/// Results of a simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Difficulty playing X.
    x: Difficulty,
    /// Difficulty playing O.
    o: Difficulty,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games with no winner.
    ties: u32,
    /// Board at the end of the last game.
    last_board: Option<Board>,
}

impl Tally {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    fn record(&mut self, phase: Phase, board: Board) {
        match phase {
            Phase::Won(Player::X) => self.x_wins += 1,
            Phase::Won(Player::O) => self.o_wins += 1,
            _ => self.ties += 1,
        }
        self.last_board = Some(board);
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let games = self.games().max(1) as f64;
        let percent = |count: u32| 100.0 * count as f64 / games;
        writeln!(f, "{} (X) vs {} (O), {} games", self.x, self.o, self.games())?;
        writeln!(f, "  X wins: {:>6} ({:.1}%)", self.x_wins, percent(self.x_wins))?;
        writeln!(f, "  O wins: {:>6} ({:.1}%)", self.o_wins, percent(self.o_wins))?;
        write!(f, "  Ties:   {:>6} ({:.1}%)", self.ties, percent(self.ties))?;
        if let Some(board) = &self.last_board {
            write!(f, "\n\nLast board:\n{}", board)?;
        }
        Ok(())
    }
}

impl Simulation {
    /// Plays every game and returns the tally.
    #[instrument(skip(self), fields(x = %self.x, o = %self.o, games = self.games))]
    pub fn run(&self) -> Result<Tally> {
        let settings =
            SessionSettings::computer_vs_computer(self.x, self.o).with_think_time(Duration::ZERO);
        let mut controller = match self.seed {
            Some(seed) => Controller::seeded(settings, seed),
            None => Controller::new(settings),
        };
        let mut tally = Tally {
            x: self.x,
            o: self.o,
            ..Tally::default()
        };
        if self.games == 0 {
            return Ok(tally);
        }

        controller.handle(Input::SelectMenuAction);
        while controller.phase() != Phase::Playing {
            controller.handle(Input::ConfirmSelection);
        }

        for game in 0..self.games {
            if game > 0 {
                controller.handle(Input::PlayAgain);
            }
            let phase = play_out(&mut controller)?;
            debug!(game, ?phase, board = %controller.board().to_key(), "Game finished");
            tally.record(phase, *controller.board());
        }

        info!(
            x_wins = tally.x_wins,
            o_wins = tally.o_wins,
            ties = tally.ties,
            "Simulation complete"
        );
        Ok(tally)
    }
}

/// Ticks a computer-only game until it ends.
fn play_out(controller: &mut Controller) -> Result<Phase> {
    let now = Instant::now();
    for _ in 0..9 {
        if controller.phase().is_game_over() {
            break;
        }
        if controller.tick(now).is_none() {
            bail!("computer did not move in phase {:?}", controller.phase());
        }
    }
    let phase = controller.phase();
    if !phase.is_game_over() {
        bail!("game still running after nine moves");
    }
    Ok(phase)
}
