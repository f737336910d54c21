// Copyright (C) 2020-2026 Andy Kurnia.

// Get as close to the number as you can without going over.

use rand::prelude::*;
use std::str::FromStr;
use yuwaki::{console, dice, display, error, game_config, game_state};

pub fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let mut round_style = game_config::RoundStyle::Sequential;
    let mut seed = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "sequential" => round_style = game_config::RoundStyle::Sequential,
            "interleaved" => round_style = game_config::RoundStyle::Interleaved,
            _ => match u64::from_str(arg) {
                Ok(x) => seed = Some(x),
                Err(_) => {
                    yuwaki::return_error!(format!(
                        "invalid arg {:?}, need sequential, interleaved, or a seed",
                        arg
                    ));
                }
            },
        }
    }

    let game_config = game_config::make_closein_game_config_with_style(round_style);
    let rng = match seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let mut dice = dice::RngDice(rng);
    let mut lines = console::RlLines::new()?;

    display::print_rules(&game_config);
    let mut session = game_state::Session::new(&game_config);
    session.play(&mut dice, &mut lines);
    Ok(())
}
