// Copyright (C) 2020-2026 Andy Kurnia.

use super::player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStyle {
    // each player rolls until done, in shuffled order.
    Sequential,
    // one roll per player per pass through the shuffled order.
    Interleaved,
}

pub struct RosterEntry {
    pub name: &'static str,
    pub player: player::Player,
}

pub struct StaticGameConfig {
    round_style: RoundStyle,
    target: u32,
    die_sides: u8,
    exact_bonus: i32,
    bust_penalty: i32,
    round_bonus: i32,
    winning_score: i32,
    roster: Box<[RosterEntry]>,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn round_style(&self) -> RoundStyle {
        match self {
            GameConfig::Static(x) => x.round_style,
        }
    }

    #[inline(always)]
    pub fn target(&self) -> u32 {
        match self {
            GameConfig::Static(x) => x.target,
        }
    }

    #[inline(always)]
    pub fn die_sides(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.die_sides,
        }
    }

    #[inline(always)]
    pub fn exact_bonus(&self) -> i32 {
        match self {
            GameConfig::Static(x) => x.exact_bonus,
        }
    }

    #[inline(always)]
    pub fn bust_penalty(&self) -> i32 {
        match self {
            GameConfig::Static(x) => x.bust_penalty,
        }
    }

    #[inline(always)]
    pub fn round_bonus(&self) -> i32 {
        match self {
            GameConfig::Static(x) => x.round_bonus,
        }
    }

    #[inline(always)]
    pub fn winning_score(&self) -> i32 {
        match self {
            GameConfig::Static(x) => x.winning_score,
        }
    }

    #[inline(always)]
    pub fn roster(&self) -> &[RosterEntry] {
        match self {
            GameConfig::Static(x) => &x.roster,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> usize {
        self.roster().len()
    }

    // running total after the turn ends, to what it is worth.
    #[inline(always)]
    pub fn resolve(&self, count: u32) -> player::Outcome {
        let target = self.target();
        if count == target {
            player::Outcome::Exact
        } else if count > target {
            player::Outcome::Bust
        } else {
            player::Outcome::Stood(count)
        }
    }

    // score change earned by the turn itself, before any round bonus.
    #[inline(always)]
    pub fn score_delta(&self, outcome: player::Outcome) -> i32 {
        match outcome {
            player::Outcome::Exact => self.exact_bonus(),
            player::Outcome::Bust => -self.bust_penalty(),
            player::Outcome::Stood(_) => 0,
        }
    }
}

fn make_closein_roster() -> Box<[RosterEntry]> {
    let bot = || player::Player::ScriptedBot { stop_margin: 4 };
    Box::new([
        RosterEntry {
            name: "Holly",
            player: player::Player::Human,
        },
        RosterEntry {
            name: "Jenny LOL!",
            player: bot(),
        },
        RosterEntry {
            name: "Unicorn",
            player: bot(),
        },
        RosterEntry {
            name: "Fairy",
            player: bot(),
        },
    ])
}

pub fn make_closein_game_config() -> GameConfig {
    make_closein_game_config_with_style(RoundStyle::Sequential)
}

pub fn make_closein_game_config_with_style(round_style: RoundStyle) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        round_style,
        target: 12,
        die_sides: 6,
        exact_bonus: 5,
        bust_penalty: 1,
        round_bonus: 1,
        winning_score: 11,
        roster: make_closein_roster(),
    })
}

// everyone is a bot. useful for watching, and for tests.
pub fn make_all_bots_game_config(round_style: RoundStyle) -> GameConfig {
    let mut roster = make_closein_roster();
    for entry in roster.iter_mut() {
        entry.player = player::Player::ScriptedBot { stop_margin: 4 };
    }
    GameConfig::Static(StaticGameConfig {
        round_style,
        target: 12,
        die_sides: 6,
        exact_bonus: 5,
        bust_penalty: 1,
        round_bonus: 1,
        winning_score: 11,
        roster,
    })
}
