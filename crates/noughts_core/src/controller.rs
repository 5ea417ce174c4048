//! Game controller: the state machine driving a session.
//!
//! The controller owns the board, the turn counter and the session settings.
//! Presentation code feeds it [`Input`] events and calls [`Controller::tick`]
//! once per frame; it reads everything it draws through the query methods.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::difficulty::Difficulty;
use crate::line::Line;
use crate::phase::{Input, InputOutcome, Phase};
use crate::settings::SessionSettings;
use crate::types::{Player, Seat, Square};

/// Owns one session: phase, board, turn order and pending computer moves.
#[derive(Debug)]
pub struct Controller<R = StdRng> {
    phase: Phase,
    board: Board,
    turn: u32,
    settings: SessionSettings,
    highlighted: [bool; 9],
    winning_line: Option<Line>,
    deadline: Option<Instant>,
    rng: R,
}

impl Controller<StdRng> {
    /// Creates a controller seeded from the operating system.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates a controller whose random choices repeat for a given seed.
    #[instrument]
    pub fn seeded(settings: SessionSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Controller<R> {
    /// Creates a controller on the title screen using `rng` for computer moves.
    pub fn with_rng(settings: SessionSettings, rng: R) -> Self {
        info!(?settings, "Creating Controller");
        Self {
            phase: Phase::Menu,
            board: Board::new(),
            turn: 1,
            settings,
            highlighted: [false; 9],
            winning_line: None,
            deadline: None,
            rng,
        }
    }

    /// Applies an input event, ignoring it when it is not legal right now.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn handle(&mut self, input: Input) -> InputOutcome {
        let outcome = match input {
            Input::SelectMenuAction => self.select_menu_action(),
            Input::ToggleSeat(player) => self.toggle_seat(player),
            Input::SetDifficulty(player, difficulty) => self.set_difficulty(player, difficulty),
            Input::ConfirmSelection => self.confirm_selection(),
            Input::CellTapped(index) => self.cell_tapped(index),
            Input::PlayAgain => self.play_again(),
            Input::ReturnToMenu => self.return_to_menu(),
        };
        if outcome == InputOutcome::Ignored {
            debug!(?input, "Input ignored");
        }
        outcome
    }

    /// "Play" on the title screen opens player selection.
    pub fn select_menu_action(&mut self) -> InputOutcome {
        if self.phase != Phase::Menu {
            return InputOutcome::Ignored;
        }
        self.set_phase(Phase::PlayerSelect);
        InputOutcome::Applied
    }

    /// Flips `player` between Player and Computer on the selection screen.
    pub fn toggle_seat(&mut self, player: Player) -> InputOutcome {
        if self.phase != Phase::PlayerSelect {
            return InputOutcome::Ignored;
        }
        let seat = &mut self.settings.seats[player];
        *seat = seat.toggle();
        info!(%player, seat = %seat.label(), "Toggled seat");
        InputOutcome::Applied
    }

    /// Sets the difficulty for `player` while its difficulty screen is open.
    pub fn set_difficulty(&mut self, player: Player, difficulty: Difficulty) -> InputOutcome {
        if self.phase != Phase::DifficultySelect(player) {
            return InputOutcome::Ignored;
        }
        self.settings.difficulties[player] = difficulty;
        info!(%player, %difficulty, "Set difficulty");
        InputOutcome::Applied
    }

    /// Moves on from a selection screen to the next difficulty screen or the game.
    pub fn confirm_selection(&mut self) -> InputOutcome {
        let next = match self.phase {
            Phase::PlayerSelect => self.first_difficulty_screen(Player::X),
            Phase::DifficultySelect(Player::X) => self.first_difficulty_screen(Player::O),
            Phase::DifficultySelect(Player::O) => None,
            _ => return InputOutcome::Ignored,
        };
        match next {
            Some(phase) => self.set_phase(phase),
            None => self.start_game(),
        }
        InputOutcome::Applied
    }

    /// Places the human mark on `index` when it is that human's turn.
    pub fn cell_tapped(&mut self, index: usize) -> InputOutcome {
        if self.phase != Phase::Playing
            || self.settings.seat(self.to_move()) != Seat::Human
            || !self.board.is_empty(index)
        {
            return InputOutcome::Ignored;
        }
        self.commit(index);
        InputOutcome::Applied
    }

    /// Starts a fresh game with the current seats and difficulties.
    pub fn play_again(&mut self) -> InputOutcome {
        if !self.phase.is_game_over() {
            return InputOutcome::Ignored;
        }
        self.start_game();
        InputOutcome::Applied
    }

    /// Returns to the title screen, dropping any pending computer move.
    pub fn return_to_menu(&mut self) -> InputOutcome {
        if self.phase == Phase::Menu {
            return InputOutcome::Ignored;
        }
        if self.deadline.take().is_some() {
            debug!("Discarded pending computer move");
        }
        self.set_phase(Phase::Menu);
        InputOutcome::Applied
    }

    /// Advances time-based behaviour: plays the computer's move once its
    /// think time has passed.
    ///
    /// The think time is measured from the first tick on which the computer
    /// is to move. Returns the square played, if any.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        if self.phase != Phase::Playing {
            return None;
        }
        let player = self.to_move();
        if self.settings.seat(player) != Seat::Computer {
            return None;
        }

        let think_time = self.settings.think_time;
        let deadline = *self.deadline.get_or_insert(now + think_time);
        if now < deadline {
            return None;
        }

        self.deadline = None;
        let difficulty = self.settings.difficulty(player);
        let index = difficulty.choose_move(&self.board, player, &mut self.rng);
        self.commit(index);
        Some(index)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn counter (1 before the first move).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the mark to move on the current turn.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Returns the session settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Returns who controls `player`.
    pub fn seat(&self, player: Player) -> Seat {
        self.settings.seat(player)
    }

    /// Returns the difficulty assigned to `player`.
    pub fn difficulty(&self, player: Player) -> Difficulty {
        self.settings.difficulty(player)
    }

    /// Returns which squares belong to the winning line.
    pub fn highlighted(&self) -> &[bool; 9] {
        &self.highlighted
    }

    /// Returns the winning line of a won game.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the winner of a won game.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Checks if a computer move is waiting on its think time.
    pub fn is_thinking(&self) -> bool {
        self.phase == Phase::Playing && self.deadline.is_some()
    }

    /// Returns when the pending computer move will land.
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Label for the confirm action on selection screens: "Continue" when
    /// another difficulty screen follows, "Play" when the game starts.
    pub fn confirm_label(&self) -> Option<&'static str> {
        let next = match self.phase {
            Phase::PlayerSelect => self.first_difficulty_screen(Player::X),
            Phase::DifficultySelect(Player::X) => self.first_difficulty_screen(Player::O),
            Phase::DifficultySelect(Player::O) => None,
            _ => return None,
        };
        Some(if next.is_some() { "Continue" } else { "Play" })
    }

    /// First difficulty screen at or after `from` for a computer-seated mark.
    fn first_difficulty_screen(&self, from: Player) -> Option<Phase> {
        let candidates: &[Player] = match from {
            Player::X => &[Player::X, Player::O],
            Player::O => &[Player::O],
        };
        candidates
            .iter()
            .copied()
            .find(|&player| self.settings.seat(player) == Seat::Computer)
            .map(Phase::DifficultySelect)
    }

    /// Resets the board, turn counter and highlights and enters `Playing`.
    fn start_game(&mut self) {
        self.board = Board::new();
        self.turn = 1;
        self.highlighted = [false; 9];
        self.winning_line = None;
        self.deadline = None;
        self.set_phase(Phase::Playing);
    }

    /// Places the mover's mark, advances the turn and checks for a result.
    fn commit(&mut self, index: usize) {
        let player = self.to_move();
        self.board.set(index, Square::Occupied(player));
        self.turn += 1;
        debug!(%player, index, turn = self.turn, board = %self.board.to_key(), "Move committed");

        if let Some(line) = self.board.has_won(player) {
            for i in line.cells() {
                self.highlighted[i] = true;
            }
            self.winning_line = Some(line);
            self.set_phase(Phase::Won(player));
        } else if self.turn > 9 {
            self.set_phase(Phase::Tie);
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        info!(from = ?self.phase, to = ?phase, "Phase transition");
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn playing(settings: SessionSettings) -> Controller {
        let mut controller = Controller::seeded(settings, 42);
        controller.select_menu_action();
        while controller.phase() != Phase::Playing {
            assert_eq!(controller.confirm_selection(), InputOutcome::Applied);
        }
        controller
    }

    #[test]
    fn test_starts_on_menu() {
        let controller = Controller::seeded(SessionSettings::new(), 1);
        assert_eq!(controller.phase(), Phase::Menu);
        assert_eq!(controller.turn(), 1);
        assert_eq!(controller.to_move(), Player::X);
    }

    #[test]
    fn test_human_tap_places_mark() {
        let mut controller = playing(SessionSettings::two_players());
        assert_eq!(controller.cell_tapped(4), InputOutcome::Applied);
        assert_eq!(controller.board().get(4), Square::Occupied(Player::X));
        assert_eq!(controller.turn(), 2);
        assert_eq!(controller.to_move(), Player::O);
    }

    #[test]
    fn test_occupied_and_out_of_range_taps_ignored() {
        let mut controller = playing(SessionSettings::two_players());
        controller.cell_tapped(4);
        assert_eq!(controller.cell_tapped(4), InputOutcome::Ignored);
        assert_eq!(controller.cell_tapped(9), InputOutcome::Ignored);
        assert_eq!(controller.turn(), 2);
    }

    #[test]
    fn test_tap_on_computer_turn_ignored() {
        // Default settings seat the computer as X.
        let mut controller = playing(SessionSettings::new());
        assert_eq!(controller.cell_tapped(0), InputOutcome::Ignored);
        assert!(controller.board().empty_squares().len() == 9);
    }

    #[test]
    fn test_computer_waits_for_think_time() {
        let settings = SessionSettings::new().with_think_time(Duration::from_millis(500));
        let mut controller = playing(settings);
        let start = Instant::now();

        assert_eq!(controller.tick(start), None);
        assert!(controller.is_thinking());
        assert_eq!(controller.tick(start + Duration::from_millis(499)), None);

        let played = controller.tick(start + Duration::from_millis(500));
        assert!(played.is_some());
        assert!(!controller.is_thinking());
        assert_eq!(controller.turn(), 2);
    }

    #[test]
    fn test_win_highlights_line() {
        let mut controller = playing(SessionSettings::two_players());
        for index in [0, 3, 1, 4, 2] {
            controller.cell_tapped(index);
        }
        assert_eq!(controller.phase(), Phase::Won(Player::X));
        assert_eq!(controller.winner(), Some(Player::X));
        assert_eq!(
            controller.highlighted(),
            &[true, true, true, false, false, false, false, false, false]
        );
        assert_eq!(controller.winning_line().map(Line::cells), Some([0, 1, 2]));
    }
}
