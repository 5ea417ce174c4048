//! Tests for headless computer-vs-computer batches.

use noughts::{Difficulty, Player, Simulation};

#[test]
fn test_expert_mirror_always_ties() {
    let tally = Simulation::new(Difficulty::Expert, Difficulty::Expert, 40, Some(1))
        .run()
        .unwrap();
    assert_eq!(tally.games(), 40);
    assert_eq!(*tally.ties(), 40);
    assert_eq!(*tally.x_wins(), 0);
    assert_eq!(*tally.o_wins(), 0);
}

#[test]
fn test_every_game_is_counted() {
    let tally = Simulation::new(Difficulty::Easy, Difficulty::Medium, 64, Some(3))
        .run()
        .unwrap();
    assert_eq!(tally.x_wins() + tally.o_wins() + tally.ties(), 64);
    let board = tally.last_board().expect("a game was played");
    let decided = [Player::X, Player::O]
        .into_iter()
        .any(|player| board.has_won(player).is_some());
    assert!(decided || board.is_full(), "unfinished board\n{board}");
}

#[test]
fn test_same_seed_same_tally() {
    let run = || {
        Simulation::new(Difficulty::Easy, Difficulty::Hard, 30, Some(11))
            .run()
            .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_hard_outscores_easy() {
    let tally = Simulation::new(Difficulty::Easy, Difficulty::Hard, 200, Some(5))
        .run()
        .unwrap();
    assert!(tally.o_wins() > tally.x_wins(), "{tally}");
}

#[test]
fn test_zero_games() {
    let tally = Simulation::new(Difficulty::Hard, Difficulty::Hard, 0, None)
        .run()
        .unwrap();
    assert_eq!(tally.games(), 0);
    assert!(tally.last_board().is_none());
    assert!(tally.to_string().contains("0 games"));
}
