// rule.rs - Conway's B3/S23 rule

use crate::cell::Cell;
use crate::neighborhood::Neighborhood;

/// Alive cells around the centre, in `0..=8`.
pub fn alive_neighbor_count(hood: &Neighborhood) -> u8 {
    hood.neighbors().filter(|cell| cell.is_alive()).count() as u8
}

/// Next state of the window's centre cell.
pub fn next_state(hood: &Neighborhood) -> Cell {
    match (hood.center(), alive_neighbor_count(hood)) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Death or stays dead
    }
}
