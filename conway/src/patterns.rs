// patterns.rs - Small named fixtures, cells given as (row, col)

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2)],
};

/// Horizontal phase, centred in a 3x3 grid.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(1, 0), (1, 1), (1, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 2), (1, 3), (1, 4), (2, 1), (2, 2), (2, 3)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(1, 1), (1, 2), (2, 1), (2, 2), (3, 3), (3, 4), (4, 3), (4, 4)],
};

/// South-east travelling glider, fits a 5x5 grid.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};
