// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;

// Where the randomness in a game comes from.
pub trait Dice {
    // uniform in 1..=sides.
    fn roll(&mut self, sides: u8) -> u8;
    // uniform permutation, in place.
    fn shuffle(&mut self, order: &mut [usize]);
}

pub struct RngDice<R: RngCore>(pub R);

impl<R: RngCore> Dice for RngDice<R> {
    #[inline(always)]
    fn roll(&mut self, sides: u8) -> u8 {
        self.0.random_range(1..=sides)
    }

    #[inline(always)]
    fn shuffle(&mut self, order: &mut [usize]) {
        order.shuffle(&mut self.0);
    }
}

// Predetermined faces, cycled. Orders are used once each, then shuffles are no-ops.
pub struct LoadedDice {
    faces: Box<[u8]>,
    next_face: usize,
    orders: std::collections::VecDeque<Vec<usize>>,
}

impl LoadedDice {
    pub fn new(faces: &[u8]) -> Self {
        Self {
            faces: faces.into(),
            next_face: 0,
            orders: Default::default(),
        }
    }

    pub fn with_orders(faces: &[u8], orders: &[&[usize]]) -> Self {
        Self {
            orders: orders.iter().map(|order| order.to_vec()).collect(),
            ..Self::new(faces)
        }
    }

    pub fn num_rolled(&self) -> usize {
        self.next_face
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, sides: u8) -> u8 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.next_face % self.faces.len()];
        self.next_face += 1;
        face.clamp(1, sides)
    }

    fn shuffle(&mut self, order: &mut [usize]) {
        if let Some(scripted) = self.orders.pop_front() {
            if scripted.len() == order.len() {
                order.copy_from_slice(&scripted);
            }
        }
    }
}
