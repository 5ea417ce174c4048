//! Tests for the session state machine.

use std::time::{Duration, Instant};

use noughts_core::{
    Controller, Difficulty, Input, InputOutcome, Phase, Player, Seat, SessionSettings, Square,
};

fn start_game(controller: &mut Controller) {
    assert_eq!(controller.handle(Input::SelectMenuAction), InputOutcome::Applied);
    while controller.phase() != Phase::Playing {
        assert_eq!(controller.handle(Input::ConfirmSelection), InputOutcome::Applied);
    }
}

fn tie_game() -> Controller {
    let mut controller = Controller::seeded(SessionSettings::two_players(), 3);
    start_game(&mut controller);
    // Ends as X O X / X O O / O X X.
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(controller.handle(Input::CellTapped(index)), InputOutcome::Applied);
    }
    controller
}

#[test]
fn test_menu_flow_visits_computer_difficulty_screens() {
    let mut controller = Controller::seeded(SessionSettings::new(), 1);
    controller.handle(Input::SelectMenuAction);
    assert_eq!(controller.phase(), Phase::PlayerSelect);

    controller.handle(Input::ToggleSeat(Player::O));
    assert_eq!(controller.seat(Player::O), Seat::Computer);
    assert_eq!(controller.confirm_label(), Some("Continue"));

    controller.handle(Input::ConfirmSelection);
    assert_eq!(controller.phase(), Phase::DifficultySelect(Player::X));
    assert_eq!(controller.confirm_label(), Some("Continue"));

    controller.handle(Input::ConfirmSelection);
    assert_eq!(controller.phase(), Phase::DifficultySelect(Player::O));
    assert_eq!(controller.confirm_label(), Some("Play"));

    controller.handle(Input::ConfirmSelection);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.confirm_label(), None);
}

#[test]
fn test_human_marks_skip_difficulty_screens() {
    let mut controller = Controller::seeded(SessionSettings::new(), 1);
    controller.handle(Input::SelectMenuAction);
    controller.handle(Input::ToggleSeat(Player::X));
    assert_eq!(controller.seat(Player::X), Seat::Human);
    assert_eq!(controller.confirm_label(), Some("Play"));

    controller.handle(Input::ConfirmSelection);
    assert_eq!(controller.phase(), Phase::Playing);
}

#[test]
fn test_only_o_computer_goes_straight_to_o_screen() {
    let mut controller = Controller::seeded(SessionSettings::new(), 1);
    controller.handle(Input::SelectMenuAction);
    controller.handle(Input::ToggleSeat(Player::X));
    controller.handle(Input::ToggleSeat(Player::O));
    controller.handle(Input::ConfirmSelection);
    assert_eq!(controller.phase(), Phase::DifficultySelect(Player::O));
}

#[test]
fn test_difficulty_set_only_on_own_screen() {
    let mut controller = Controller::seeded(SessionSettings::new(), 1);
    controller.handle(Input::SelectMenuAction);
    assert_eq!(
        controller.handle(Input::SetDifficulty(Player::X, Difficulty::Hard)),
        InputOutcome::Ignored
    );

    controller.handle(Input::ConfirmSelection);
    assert_eq!(
        controller.handle(Input::SetDifficulty(Player::O, Difficulty::Hard)),
        InputOutcome::Ignored
    );
    assert_eq!(
        controller.handle(Input::SetDifficulty(Player::X, Difficulty::Expert)),
        InputOutcome::Applied
    );
    assert_eq!(controller.difficulty(Player::X), Difficulty::Expert);
    assert_eq!(controller.difficulty(Player::O), Difficulty::Easy);
}

#[test]
fn test_inputs_outside_their_phase_ignored() {
    let mut controller = Controller::seeded(SessionSettings::new(), 1);
    for input in [
        Input::CellTapped(0),
        Input::PlayAgain,
        Input::ToggleSeat(Player::X),
        Input::ConfirmSelection,
        Input::ReturnToMenu,
    ] {
        assert_eq!(controller.handle(input), InputOutcome::Ignored, "{input:?}");
    }
    assert_eq!(controller.phase(), Phase::Menu);
    assert_eq!(controller.seat(Player::X), Seat::Computer);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let controller = tie_game();
    assert_eq!(controller.phase(), Phase::Tie);
    assert_eq!(controller.turn(), 10);
    assert_eq!(controller.winner(), None);
    assert!(controller.highlighted().iter().all(|h| !h));
}

#[test]
fn test_taps_after_game_over_ignored() {
    let mut controller = Controller::seeded(SessionSettings::two_players(), 3);
    start_game(&mut controller);
    for index in [0, 3, 1, 4, 2] {
        controller.handle(Input::CellTapped(index));
    }
    assert_eq!(controller.phase(), Phase::Won(Player::X));
    assert_eq!(controller.handle(Input::CellTapped(5)), InputOutcome::Ignored);
    assert_eq!(controller.board().get(5), Square::Empty);
}

#[test]
fn test_play_again_resets_and_keeps_settings() {
    let settings = SessionSettings::computer_vs_computer(Difficulty::Hard, Difficulty::Medium)
        .with_think_time(Duration::ZERO);
    let mut controller = Controller::seeded(settings, 8);
    start_game(&mut controller);

    let now = Instant::now();
    let mut ticks = 0;
    while !controller.phase().is_game_over() {
        controller.tick(now);
        ticks += 1;
        assert!(ticks <= 9, "game did not finish");
    }

    assert_eq!(controller.handle(Input::PlayAgain), InputOutcome::Applied);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.turn(), 1);
    assert_eq!(controller.board().empty_squares().len(), 9);
    assert!(controller.highlighted().iter().all(|h| !h));
    assert_eq!(controller.winning_line(), None);
    assert_eq!(controller.settings(), &settings);
}

#[test]
fn test_play_again_after_tie() {
    let mut controller = tie_game();
    controller.handle(Input::PlayAgain);
    assert_eq!(controller.phase(), Phase::Playing);
    assert_eq!(controller.turn(), 1);
    assert_eq!(controller.to_move(), Player::X);
    assert_eq!(controller.seat(Player::X), Seat::Human);
    assert_eq!(controller.seat(Player::O), Seat::Human);
}

#[test]
fn test_return_to_menu_discards_pending_move() {
    let settings = SessionSettings::new().with_think_time(Duration::from_secs(1));
    let mut controller = Controller::seeded(settings, 5);
    start_game(&mut controller);

    let start = Instant::now();
    assert_eq!(controller.tick(start), None);
    assert!(controller.pending_deadline().is_some());

    assert_eq!(controller.handle(Input::ReturnToMenu), InputOutcome::Applied);
    assert_eq!(controller.phase(), Phase::Menu);
    assert_eq!(controller.pending_deadline(), None);

    assert_eq!(controller.tick(start + Duration::from_secs(5)), None);
    assert_eq!(controller.board().empty_squares().len(), 9);
    assert_eq!(controller.turn(), 1);
}

#[test]
fn test_think_time_restarts_after_menu() {
    let settings = SessionSettings::new().with_think_time(Duration::from_secs(1));
    let mut controller = Controller::seeded(settings, 5);
    start_game(&mut controller);
    let start = Instant::now();
    controller.tick(start);
    controller.handle(Input::ReturnToMenu);
    start_game(&mut controller);

    let later = start + Duration::from_secs(10);
    assert_eq!(controller.tick(later), None);
    assert!(controller.tick(later + Duration::from_secs(1)).is_some());
}

#[test]
fn test_one_computer_move_per_tick() {
    let settings = SessionSettings::computer_vs_computer(Difficulty::Easy, Difficulty::Easy)
        .with_think_time(Duration::ZERO);
    let mut controller = Controller::seeded(settings, 13);
    start_game(&mut controller);

    let now = Instant::now();
    assert!(controller.tick(now).is_some());
    assert_eq!(controller.turn(), 2);
    assert!(controller.tick(now).is_some());
    assert_eq!(controller.turn(), 3);
}

#[test]
fn test_human_and_computer_alternate() {
    let settings = SessionSettings::new().with_think_time(Duration::ZERO);
    let mut controller = Controller::seeded(settings, 17);
    start_game(&mut controller);

    let now = Instant::now();
    let first = controller.tick(now).expect("computer X moves");
    assert_eq!(controller.to_move(), Player::O);
    assert_eq!(controller.tick(now), None);

    let reply = (0..9).find(|&i| i != first).unwrap();
    assert_eq!(controller.handle(Input::CellTapped(reply)), InputOutcome::Applied);
    assert_eq!(controller.board().get(reply), Square::Occupied(Player::O));
    assert_eq!(controller.to_move(), Player::X);
}

#[test]
fn test_expert_against_expert_ties() {
    for seed in 0..25 {
        let settings = SessionSettings::computer_vs_computer(Difficulty::Expert, Difficulty::Expert)
            .with_think_time(Duration::ZERO);
        let mut controller = Controller::seeded(settings, seed);
        start_game(&mut controller);

        let now = Instant::now();
        while !controller.phase().is_game_over() {
            assert!(controller.tick(now).is_some());
        }
        assert_eq!(controller.phase(), Phase::Tie, "seed {seed}");
        assert_eq!(controller.board().squares()[0], Square::Occupied(Player::X));
    }
}
