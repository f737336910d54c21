// Copyright (C) 2020-2026 Andy Kurnia.

use super::{console, dice, display, game_config, player};

#[derive(Clone, Debug)]
pub struct GamePlayer {
    pub score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundWinner {
    pub player: usize,
    pub exact: bool,
}

#[derive(Clone, Debug)]
pub struct RoundReport {
    pub order: Box<[usize]>,
    // by roster index. None if the player never got to act.
    pub outcomes: Box<[Option<player::Outcome>]>,
    pub winner: Option<RoundWinner>,
}

pub struct Session<'a> {
    pub game_config: &'a game_config::GameConfig,
    pub players: Box<[GamePlayer]>,
    pub num_rounds: u32,
}

impl<'a> Session<'a> {
    pub fn new(game_config: &'a game_config::GameConfig) -> Self {
        Self {
            game_config,
            players: (0..game_config.num_players())
                .map(|_| GamePlayer { score: 0 })
                .collect(),
            num_rounds: 0,
        }
    }

    #[inline(always)]
    fn name(&self, i: usize) -> &'static str {
        self.game_config.roster()[i].name
    }

    pub fn is_over(&self) -> bool {
        self.players
            .iter()
            .map(|p| p.score)
            .max()
            .is_none_or(|best| best >= self.game_config.winning_score())
    }

    // highest score, earliest in the roster on ties.
    pub fn champion(&self) -> Option<usize> {
        let best = self.players.iter().map(|p| p.score).max()?;
        self.players.iter().position(|p| p.score == best)
    }

    pub fn determine_order(&self, dice: &mut dyn dice::Dice) -> Box<[usize]> {
        let mut order = (0..self.players.len()).collect::<Box<_>>();
        dice.shuffle(&mut order);
        println!(
            "The order is {}",
            order
                .iter()
                .map(|&i| self.name(i))
                .collect::<Vec<_>>()
                .join(", ")
        );
        order
    }

    pub fn play_round(
        &mut self,
        dice: &mut dyn dice::Dice,
        lines: &mut dyn console::LineSource,
    ) -> RoundReport {
        let order = self.determine_order(dice);
        let outcomes = match self.game_config.round_style() {
            game_config::RoundStyle::Sequential => self.play_sequential(&order, dice, lines),
            game_config::RoundStyle::Interleaved => self.play_interleaved(&order, dice, lines),
        };
        let winner = match self.game_config.round_style() {
            game_config::RoundStyle::Sequential => {
                let roster_order = (0..self.players.len()).collect::<Box<_>>();
                self.award_round(&outcomes, &roster_order, 0)
            }
            // standing on 0 is never good enough here.
            game_config::RoundStyle::Interleaved => self.award_round(&outcomes, &order, 1),
        };
        self.num_rounds += 1;
        RoundReport {
            order,
            outcomes,
            winner,
        }
    }

    fn play_sequential(
        &mut self,
        order: &[usize],
        dice: &mut dyn dice::Dice,
        lines: &mut dyn console::LineSource,
    ) -> Box<[Option<player::Outcome>]> {
        let game_config = self.game_config;
        let mut outcomes = vec![None; self.players.len()].into_boxed_slice();
        for &i in order {
            let entry = &game_config.roster()[i];
            let outcome = entry
                .player
                .take_turn(entry.name, game_config, dice, lines);
            self.players[i].score += game_config.score_delta(outcome);
            outcomes[i] = Some(outcome);
            if outcome == player::Outcome::Exact {
                break;
            }
        }
        outcomes
    }

    // everyone still in rolls once per pass, until all have stopped or busted,
    // or someone hits the target.
    fn play_interleaved(
        &mut self,
        order: &[usize],
        dice: &mut dyn dice::Dice,
        lines: &mut dyn console::LineSource,
    ) -> Box<[Option<player::Outcome>]> {
        let game_config = self.game_config;
        let target = game_config.target();
        let num_players = self.players.len();
        let mut outcomes = vec![None; num_players].into_boxed_slice();
        let mut totals = vec![0u32; num_players];
        let mut done = vec![false; num_players];
        let mut num_active = num_players;
        'round: while num_active > 0 {
            for &i in order {
                if done[i] {
                    continue;
                }
                let entry = &game_config.roster()[i];
                match entry.player.choose(totals[i], target, lines) {
                    console::Choice::Roll => {
                        let r = dice.roll(game_config.die_sides());
                        totals[i] += r as u32;
                        println!("{} rolled a {}. Total: {}", entry.name, r, totals[i]);
                        let outcome = game_config.resolve(totals[i]);
                        outcomes[i] = Some(outcome);
                        self.players[i].score += game_config.score_delta(outcome);
                        match outcome {
                            player::Outcome::Exact => {
                                println!("{} hit exactly {}! Sudden Victory!", entry.name, target);
                                break 'round;
                            }
                            player::Outcome::Bust => {
                                println!("{} went over! Lose a point.", entry.name);
                                done[i] = true;
                                num_active -= 1;
                            }
                            player::Outcome::Stood(_) => {}
                        }
                    }
                    console::Choice::Stop => {
                        println!("{} stopped at {}.", entry.name, totals[i]);
                        outcomes[i] = Some(player::Outcome::Stood(totals[i]));
                        done[i] = true;
                        num_active -= 1;
                    }
                }
            }
        }
        outcomes
    }

    // An exact hit wins outright (already scored). Otherwise the best count below
    // the target gets the round bonus, first in tie_order on ties, if it is at least
    // min_winning_count. Busts never win.
    fn award_round(
        &mut self,
        outcomes: &[Option<player::Outcome>],
        tie_order: &[usize],
        min_winning_count: u32,
    ) -> Option<RoundWinner> {
        if let Some(i) = outcomes
            .iter()
            .position(|&o| o == Some(player::Outcome::Exact))
        {
            println!("{} won!", self.name(i));
            return Some(RoundWinner {
                player: i,
                exact: true,
            });
        }
        let best = outcomes
            .iter()
            .filter_map(|&o| match o {
                Some(player::Outcome::Stood(count)) if count >= min_winning_count => Some(count),
                _ => None,
            })
            .max();
        let Some(best) = best else {
            println!("No one won this round.");
            return None;
        };
        let i = *tie_order
            .iter()
            .find(|&&i| outcomes[i] == Some(player::Outcome::Stood(best)))?;
        println!("{} won with {}!", self.name(i), best);
        self.players[i].score += self.game_config.round_bonus();
        Some(RoundWinner {
            player: i,
            exact: false,
        })
    }

    // plays rounds until someone reaches the winning score. returns the champion.
    pub fn play(
        &mut self,
        dice: &mut dyn dice::Dice,
        lines: &mut dyn console::LineSource,
    ) -> Option<usize> {
        while !self.is_over() {
            self.play_round(dice, lines);
            print!("{}", display::fmt_scores(self));
        }
        let champion = self.champion()?;
        println!(
            "{} wins the game with {} points!",
            self.name(champion),
            self.players[champion].score
        );
        Some(champion)
    }
}
