use rand::prelude::*;
use yuwaki::{console, dice, display, game_config, game_state, player};

fn scores(session: &game_state::Session) -> Vec<i32> {
    session.players.iter().map(|p| p.score).collect()
}

#[test]
fn test_scoreboard_format() {
    let config = game_config::make_closein_game_config();
    let mut session = game_state::Session::new(&config);
    session.players[2].score = -1;
    assert_eq!(
        display::fmt_scores(&session),
        "Score:\n-----\nHolly 0\nJenny LOL! 0\nUnicorn -1\nFairy 0\n-----\n"
    );
}

#[test]
fn test_bot_exact_hit_ends_round() {
    let config = game_config::make_all_bots_game_config(game_config::RoundStyle::Sequential);
    let mut session = game_state::Session::new(&config);
    let mut dice = dice::LoadedDice::with_orders(&[6, 6], &[&[1, 0, 2, 3]]);
    let mut lines = console::ScriptedLines::new(&[]);
    let report = session.play_round(&mut dice, &mut lines);

    assert_eq!(&report.order[..], &[1, 0, 2, 3]);
    assert_eq!(report.outcomes[1], Some(player::Outcome::Exact));
    assert_eq!(report.outcomes[0], None);
    assert_eq!(report.outcomes[2], None);
    assert_eq!(report.outcomes[3], None);
    assert_eq!(
        report.winner,
        Some(game_state::RoundWinner {
            player: 1,
            exact: true
        })
    );
    assert_eq!(scores(&session), [0, 5, 0, 0]);
    assert_eq!(dice.num_rolled(), 2);
}

#[test]
fn test_human_bust_loses_one_and_cannot_win() {
    let config = game_config::make_closein_game_config();
    let mut session = game_state::Session::new(&config);
    let mut dice = dice::LoadedDice::with_orders(&[5], &[&[0, 1, 2, 3]]);
    let mut lines = console::ScriptedLines::new(&["r", "roll", "r", "r"]);
    let report = session.play_round(&mut dice, &mut lines);

    assert_eq!(report.outcomes[0], Some(player::Outcome::Bust));
    assert_eq!(report.outcomes[1], Some(player::Outcome::Stood(10)));
    assert_eq!(report.outcomes[2], Some(player::Outcome::Stood(10)));
    assert_eq!(report.outcomes[3], Some(player::Outcome::Stood(10)));
    // ties go to the earliest in the roster.
    assert_eq!(
        report.winner,
        Some(game_state::RoundWinner {
            player: 1,
            exact: false
        })
    );
    assert_eq!(scores(&session), [-1, 1, 0, 0]);
    // the turn ends at 15 without asking again.
    assert_eq!(lines.0.len(), 1);
}

#[test]
fn test_human_stop_and_eof_are_stops() {
    let config = game_config::make_closein_game_config();
    let mut dice = dice::LoadedDice::new(&[3]);
    let mut lines = console::ScriptedLines::new(&["r", "stop"]);
    let outcome = player::Player::Human.take_turn("Holly", &config, &mut dice, &mut lines);
    assert_eq!(outcome, player::Outcome::Stood(3));

    let mut lines = console::ScriptedLines::new(&["r", "r"]);
    let outcome = player::Player::Human.take_turn("Holly", &config, &mut dice, &mut lines);
    assert_eq!(outcome, player::Outcome::Stood(6));

    let mut lines = console::ScriptedLines::new(&["whatever"]);
    let outcome = player::Player::Human.take_turn("Holly", &config, &mut dice, &mut lines);
    assert_eq!(outcome, player::Outcome::Stood(0));
}

#[test]
fn test_all_bust_round_has_no_winner() {
    let config = game_config::make_all_bots_game_config(game_config::RoundStyle::Sequential);
    let mut session = game_state::Session::new(&config);
    // every bot goes 4, 7, 13.
    let mut dice = dice::LoadedDice::new(&[4, 3, 6]);
    let mut lines = console::ScriptedLines::new(&[]);
    let report = session.play_round(&mut dice, &mut lines);

    assert!(report
        .outcomes
        .iter()
        .all(|&o| o == Some(player::Outcome::Bust)));
    assert_eq!(report.winner, None);
    assert_eq!(scores(&session), [-1, -1, -1, -1]);
}

#[test]
fn test_interleaved_exact_hit() {
    let config = game_config::make_all_bots_game_config(game_config::RoundStyle::Interleaved);
    let mut session = game_state::Session::new(&config);
    let mut dice = dice::LoadedDice::with_orders(&[6], &[&[0, 1, 2, 3]]);
    let mut lines = console::ScriptedLines::new(&[]);
    let report = session.play_round(&mut dice, &mut lines);

    // everyone rolls 6, then the first in order rolls 6 again.
    assert_eq!(dice.num_rolled(), 5);
    assert_eq!(report.outcomes[0], Some(player::Outcome::Exact));
    assert_eq!(report.outcomes[1], Some(player::Outcome::Stood(6)));
    assert_eq!(scores(&session), [5, 0, 0, 0]);
}

#[test]
fn test_interleaved_ties_go_by_round_order() {
    let config = game_config::make_all_bots_game_config(game_config::RoundStyle::Interleaved);
    let mut session = game_state::Session::new(&config);
    let mut dice = dice::LoadedDice::with_orders(&[4], &[&[2, 0, 1, 3]]);
    let mut lines = console::ScriptedLines::new(&[]);
    let report = session.play_round(&mut dice, &mut lines);

    assert_eq!(dice.num_rolled(), 8);
    assert!(report
        .outcomes
        .iter()
        .all(|&o| o == Some(player::Outcome::Stood(8))));
    assert_eq!(
        report.winner,
        Some(game_state::RoundWinner {
            player: 2,
            exact: false
        })
    );
    assert_eq!(scores(&session), [0, 0, 1, 0]);
}

#[test]
fn test_interleaved_stand_on_zero_does_not_win() {
    let config = game_config::make_closein_game_config_with_style(
        game_config::RoundStyle::Interleaved,
    );
    let mut session = game_state::Session::new(&config);
    // Holly stops at once, every bot goes 6, 7, 13.
    let mut dice = dice::LoadedDice::with_orders(&[6, 6, 6, 1, 1, 1, 6, 6, 6], &[&[0, 1, 2, 3]]);
    let mut lines = console::ScriptedLines::new(&["s"]);
    let report = session.play_round(&mut dice, &mut lines);

    assert_eq!(report.outcomes[0], Some(player::Outcome::Stood(0)));
    assert!(report.outcomes[1..]
        .iter()
        .all(|&o| o == Some(player::Outcome::Bust)));
    assert_eq!(report.winner, None);
    assert_eq!(scores(&session), [0, -1, -1, -1]);
}

#[test]
fn test_sequential_stand_on_zero_can_win() {
    let config = game_config::make_closein_game_config();
    let mut session = game_state::Session::new(&config);
    // every bot goes 4, 7, 13.
    let mut dice = dice::LoadedDice::with_orders(&[4, 3, 6], &[&[0, 1, 2, 3]]);
    let mut lines = console::ScriptedLines::new(&["s"]);
    let report = session.play_round(&mut dice, &mut lines);

    assert_eq!(report.outcomes[0], Some(player::Outcome::Stood(0)));
    assert_eq!(
        report.winner,
        Some(game_state::RoundWinner {
            player: 0,
            exact: false
        })
    );
    assert_eq!(scores(&session), [1, -1, -1, -1]);
}

#[test]
fn test_session_ends_at_winning_score() {
    let config = game_config::make_all_bots_game_config(game_config::RoundStyle::Sequential);
    let mut session = game_state::Session::new(&config);
    // no scripted orders, so the roster order is kept and the first bot always hits 12.
    let mut dice = dice::LoadedDice::new(&[6]);
    let mut lines = console::ScriptedLines::new(&[]);
    assert_eq!(session.play(&mut dice, &mut lines), Some(0));
    assert_eq!(session.num_rounds, 3);
    assert_eq!(scores(&session), [15, 0, 0, 0]);
    assert!(session.is_over());
}

#[test]
fn test_seeded_sessions_finish() {
    for style in [
        game_config::RoundStyle::Sequential,
        game_config::RoundStyle::Interleaved,
    ] {
        for seed in 0..20 {
            let config = game_config::make_all_bots_game_config(style);
            let mut session = game_state::Session::new(&config);
            let mut dice = dice::RngDice(rand_chacha::ChaCha20Rng::seed_from_u64(seed));
            let mut lines = console::ScriptedLines::new(&[]);
            let champion = session.play(&mut dice, &mut lines).unwrap();
            let best = session.players.iter().map(|p| p.score).max().unwrap();
            assert!(best >= config.winning_score());
            assert_eq!(session.players[champion].score, best);
            // at most one point lost per round.
            assert!(session
                .players
                .iter()
                .all(|p| p.score >= -(session.num_rounds as i32)));
        }
    }
}
