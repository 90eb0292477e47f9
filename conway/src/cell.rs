// cell.rs - Cell state and its textual glyphs

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Characters used to read and write cells as text.
///
/// Parsing only looks at `alive`: any other character is a dead cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { alive: 'X', dead: '_' }
    }
}

impl Glyphs {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }

    pub fn cell(&self, glyph: char) -> Cell {
        Cell::from(glyph == self.alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
        assert!(!Cell::Dead.is_alive());
        assert!(Cell::Alive.is_alive());
    }

    #[test]
    fn anything_but_the_alive_glyph_is_dead() {
        let glyphs = Glyphs::default();
        assert_eq!(glyphs.cell('X'), Cell::Alive);
        for c in ['_', '.', 'x', ' ', 'O', '#'] {
            assert_eq!(glyphs.cell(c), Cell::Dead, "{c:?}");
        }
    }

    #[test]
    fn custom_glyphs() {
        let glyphs = Glyphs { alive: 'o', dead: '.' };
        assert_eq!(glyphs.glyph(Cell::Alive), 'o');
        assert_eq!(glyphs.glyph(Cell::Dead), '.');
        assert_eq!(glyphs.cell('o'), Cell::Alive);
        assert_eq!(glyphs.cell('X'), Cell::Dead);
    }
}
