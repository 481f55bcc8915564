/// Glyph used for live cells, both in map files and on screen.
pub const ALIVE_GLYPH: char = 'X';

/// Glyph used when drawing dead cells. Map files may use any other character.
pub const DEAD_GLYPH: char = '.';

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    /// Interpret a map glyph. Only [`ALIVE_GLYPH`] is alive.
    pub const fn from_glyph(c: char) -> Self {
        if c == ALIVE_GLYPH {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => ALIVE_GLYPH,
            Cell::Dead => DEAD_GLYPH,
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn only_x_is_alive() {
        assert_eq!(Cell::from_glyph('X'), Cell::Alive);
        assert_eq!(Cell::from_glyph('.'), Cell::Dead);
        assert_eq!(Cell::from_glyph('x'), Cell::Dead);
        assert_eq!(Cell::from_glyph('#'), Cell::Dead);
    }

    #[test]
    fn glyphs() {
        assert_eq!(Cell::Alive.glyph(), 'X');
        assert_eq!(Cell::Dead.glyph(), '.');
    }
}
