//! Application state and key handling for the terminal UI.

use crossterm::event::KeyCode;
use noughts_core::{Controller, Input, InputOutcome, Phase, Player};
use std::time::Instant;
use tracing::{debug, info};

use super::input::{digit_square, move_cursor};
use super::theme::Hue;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward an input to the controller.
    Game(Input),
    /// Leave the application.
    Quit,
    /// Only local UI state changed.
    None,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: Controller,
    cursor: usize,
    selected_mark: Player,
    hue: Hue,
    should_quit: bool,
}

impl App {
    /// Creates the application around a controller on the title screen.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            cursor: 4,
            selected_mark: Player::X,
            hue: Hue::default(),
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Board square under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Mark highlighted on the player-select screen.
    pub fn selected_mark(&self) -> Player {
        self.selected_mark
    }

    /// Current title colour.
    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Advances the animation and lets the computer move.
    pub fn on_tick(&mut self, now: Instant) {
        self.hue.advance();
        if let Some(index) = self.controller.tick(now) {
            debug!(index, "Computer move shown");
        }
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyCode) {
        match self.action_for(key) {
            Action::Game(input) => {
                if self.controller.handle(input) == InputOutcome::Applied
                    && input == Input::PlayAgain
                {
                    self.cursor = 4;
                }
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Maps a key to an action for the current phase, updating local cursors.
    pub fn action_for(&mut self, key: KeyCode) -> Action {
        if key == KeyCode::Char('q') {
            return Action::Quit;
        }
        let phase = self.controller.phase();
        match (phase, key) {
            (Phase::Menu, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.selected_mark = Player::X;
                Action::Game(Input::SelectMenuAction)
            }
            (Phase::Menu, KeyCode::Esc) => Action::Quit,
            (_, KeyCode::Esc) => Action::Game(Input::ReturnToMenu),

            (Phase::PlayerSelect, KeyCode::Up | KeyCode::Down) => {
                self.selected_mark = self.selected_mark.opponent();
                Action::None
            }
            (Phase::PlayerSelect, KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')) => {
                Action::Game(Input::ToggleSeat(self.selected_mark))
            }
            (Phase::PlayerSelect | Phase::DifficultySelect(_), KeyCode::Enter) => {
                Action::Game(Input::ConfirmSelection)
            }

            (Phase::DifficultySelect(player), KeyCode::Up) => {
                let difficulty = self.controller.difficulty(player).prev();
                Action::Game(Input::SetDifficulty(player, difficulty))
            }
            (Phase::DifficultySelect(player), KeyCode::Down) => {
                let difficulty = self.controller.difficulty(player).next();
                Action::Game(Input::SetDifficulty(player, difficulty))
            }

            (Phase::Playing, KeyCode::Enter | KeyCode::Char(' ')) => {
                Action::Game(Input::CellTapped(self.cursor))
            }
            (Phase::Playing, KeyCode::Char(c)) => match digit_square(c) {
                Some(index) => {
                    self.cursor = index;
                    Action::Game(Input::CellTapped(index))
                }
                None => Action::None,
            },
            (Phase::Playing, arrow) => {
                self.cursor = move_cursor(self.cursor, arrow);
                Action::None
            }

            (Phase::Won(_) | Phase::Tie, KeyCode::Enter | KeyCode::Char('r')) => {
                Action::Game(Input::PlayAgain)
            }
            (Phase::Won(_) | Phase::Tie, KeyCode::Char('m')) => {
                Action::Game(Input::ReturnToMenu)
            }
            _ => Action::None,
        }
    }

    /// One-line status for the current phase.
    pub fn status(&self) -> String {
        let controller = &self.controller;
        match controller.phase() {
            Phase::Playing if controller.is_thinking() => {
                format!("{} is thinking...", controller.to_move())
            }
            Phase::Playing => format!("{} to move", controller.to_move()),
            Phase::Won(player) => format!("{player} Wins!"),
            Phase::Tie => "Tie".to_string(),
            phase => phase.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Difficulty, Seat, SessionSettings, Square};

    fn app(settings: SessionSettings) -> App {
        App::new(Controller::seeded(settings, 7))
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.on_key(key);
        }
    }

    #[test]
    fn test_quit_from_any_phase() {
        let mut app = app(SessionSettings::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('q')]);
        assert!(app.should_quit());
    }

    #[test]
    fn test_player_select_toggles_highlighted_mark() {
        let mut app = app(SessionSettings::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Right]);
        assert_eq!(app.selected_mark(), Player::O);
        assert_eq!(app.controller().seat(Player::O), Seat::Computer);
        assert_eq!(app.controller().seat(Player::X), Seat::Computer);
    }

    #[test]
    fn test_difficulty_keys_cycle_tiers() {
        let mut app = app(SessionSettings::new());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.controller().phase(), Phase::DifficultySelect(Player::X));
        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.controller().difficulty(Player::X), Difficulty::Hard);
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.controller().difficulty(Player::X), Difficulty::Medium);
    }

    #[test]
    fn test_cursor_and_digits_place_marks() {
        let mut app = app(SessionSettings::two_players());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.controller().phase(), Phase::Playing);

        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.controller().board().get(0), Square::Occupied(Player::X));

        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.controller().board().get(8), Square::Occupied(Player::O));
        assert_eq!(app.cursor(), 8);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut app = app(SessionSettings::two_players());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Esc]);
        assert_eq!(app.controller().phase(), Phase::Menu);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_status_reports_turn() {
        let mut app = app(SessionSettings::two_players());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.status(), "X to move");
        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.status(), "O to move");
    }
}
