// Copyright (C) 2020-2026 Andy Kurnia.

use super::{console, dice, game_config};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    // stopped below the target.
    Stood(u32),
    // hit the target exactly.
    Exact,
    // went over.
    Bust,
}

impl Outcome {
    // the integer encoding: the count, the target for exact, -1 for bust.
    #[inline(always)]
    pub fn value(&self, target: u32) -> i64 {
        match self {
            Outcome::Stood(count) => *count as i64,
            Outcome::Exact => target as i64,
            Outcome::Bust => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    // asks on the console.
    Human,
    // rolls until within stop_margin of the target.
    ScriptedBot { stop_margin: u32 },
}

impl Player {
    // whether to roll again with the running count at count.
    pub fn choose(
        &self,
        count: u32,
        target: u32,
        lines: &mut dyn console::LineSource,
    ) -> console::Choice {
        match self {
            Player::Human => {
                match lines.read_line(&format!(
                    "You are trying to get to {}. Do you want to r)oll or s)top? ",
                    target
                )) {
                    Some(line) => console::parse_choice(&line),
                    None => console::Choice::Stop,
                }
            }
            Player::ScriptedBot { stop_margin } => {
                if count < target.saturating_sub(*stop_margin) {
                    console::Choice::Roll
                } else {
                    console::Choice::Stop
                }
            }
        }
    }

    // a whole turn: roll until the player stops or reaches the target.
    pub fn take_turn(
        &self,
        name: &str,
        game_config: &game_config::GameConfig,
        dice: &mut dyn dice::Dice,
        lines: &mut dyn console::LineSource,
    ) -> Outcome {
        let target = game_config.target();
        let mut rolls = Vec::new();
        let mut count = 0u32;
        while count < target {
            match self.choose(count, target, lines) {
                console::Choice::Roll => {
                    let r = dice.roll(game_config.die_sides());
                    count += r as u32;
                    rolls.push(r);
                    if let Player::Human = self {
                        println!("You rolled {}. Your count is {}.", r, count);
                    }
                }
                console::Choice::Stop => break,
            }
        }
        let outcome = game_config.resolve(count);
        match self {
            Player::Human => match outcome {
                Outcome::Exact => {
                    println!(
                        "... Perfect! You get {} POINTS!",
                        game_config.exact_bonus()
                    );
                }
                Outcome::Bust => {
                    println!("... You went over! Lose a point!");
                }
                Outcome::Stood(count) => {
                    println!("You stopped! Your count is {}", count);
                }
            },
            Player::ScriptedBot { .. } => {
                println!(
                    "{} rolled {} for {}",
                    name,
                    rolls
                        .iter()
                        .map(|r| r.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    count
                );
                match outcome {
                    Outcome::Exact => {
                        println!(
                            "... {} got {}! Score {} points!",
                            name,
                            target,
                            game_config.exact_bonus()
                        );
                    }
                    Outcome::Bust => {
                        println!("... {} went over! Lose a point!", name);
                    }
                    Outcome::Stood(_) => {}
                }
            }
        }
        outcome
    }
}
