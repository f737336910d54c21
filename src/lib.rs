// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod console;
pub mod dice;
pub mod dictionary;
pub mod display;
pub mod game_config;
pub mod game_state;
pub mod lexport;
pub mod piece_config;
pub mod pieces;
pub mod player;
pub mod wordcell;
