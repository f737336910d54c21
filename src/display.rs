// Copyright (C) 2020-2026 Andy Kurnia.

use super::{game_config, game_state};
use std::fmt::Write;

// Score:
// -----
// Holly 3
// ...
// -----
pub fn fmt_scores(session: &game_state::Session) -> String {
    let mut s = String::from("Score:\n-----\n");
    for (entry, player) in session.game_config.roster().iter().zip(session.players.iter()) {
        // writing to a String cannot fail.
        let _ = writeln!(s, "{} {}", entry.name, player.score);
    }
    s.push_str("-----\n");
    s
}

pub fn print_rules(game_config: &game_config::GameConfig) {
    println!("The point of this game is to be the player who");
    println!("can get closest to a number without going over.");
    println!();
    println!("Each turn you can type \"r\" to roll a dice");
    println!("Careful, if you go over the number you lose a point!");
    println!("You can also type \"s\" to stop");
    println!("You might not win, but you won't lose a point");
    println!("- If you go over, you lose ONE POINT!");
    println!("- If you win, you get ONE POINT!");
    println!(
        "- If you get the number exactly, you get {} POINTS!",
        game_config.exact_bonus()
    );
    if game_config.round_style() == game_config::RoundStyle::Interleaved {
        println!("- Everyone takes turns rolling one die at a time.");
    }
    println!(
        "The first to {} points wins. The number is {}.",
        game_config.winning_score(),
        game_config.target()
    );
    println!();
}
