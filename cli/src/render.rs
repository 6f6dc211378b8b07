use std::io::{self, Write};

use minesweep_core::*;

/// Single-character rendering of a visible cell.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Undiscovered => '.',
        Cell::Flag => 'F',
        Cell::Free => ' ',
        Cell::Count(n) => char::from(b'0' + n),
        Cell::Mine => '*',
    }
}

pub fn write_board<W: Write, G: MinefieldGenerator>(
    out: &mut W,
    engine: &Sweeper<G>,
) -> io::Result<()> {
    let (height, width) = engine.size();

    write!(out, "   ")?;
    for col in 0..width {
        write!(out, "{col:>3}")?;
    }
    writeln!(out)?;

    for row in 0..height {
        write!(out, "{row:>3}")?;
        for col in 0..width {
            let symbol = if engine.triggered_mine() == Some((row, col)) {
                'X'
            } else {
                cell_symbol(engine.cell_at((row, col)))
            };
            write!(out, "{symbol:>3}")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}", status_line(engine))
}

pub fn status_line<G: MinefieldGenerator>(engine: &Sweeper<G>) -> String {
    let state = match engine.state() {
        GameState::Playing | GameState::Pressed => "playing",
        GameState::Won => "won, n for a new round",
        GameState::Lost => "lost, n for a new round",
    };
    format!(
        "{} | flags {}/{} | mines {}",
        state,
        engine.flags_remaining(),
        engine.flags().budget(),
        engine.total_mines()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<G: MinefieldGenerator>(engine: &Sweeper<G>) -> String {
        let mut out = Vec::new();
        write_board(&mut out, engine).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn symbols_cover_every_cell() {
        assert_eq!(cell_symbol(Cell::Undiscovered), '.');
        assert_eq!(cell_symbol(Cell::Flag), 'F');
        assert_eq!(cell_symbol(Cell::Free), ' ');
        assert_eq!(cell_symbol(Cell::Count(1)), '1');
        assert_eq!(cell_symbol(Cell::Count(8)), '8');
        assert_eq!(cell_symbol(Cell::Mine), '*');
    }

    #[test]
    fn fresh_board_is_all_undiscovered() {
        let engine = Sweeper::with_seed(GameConfig::new(5, 6, 3, 3).unwrap(), 0);
        let text = render(&engine);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "     0  1  2  3  4  5");
        assert_eq!(lines[1], "  0  .  .  .  .  .  .");
        assert_eq!(lines[6], "playing | flags 3/3 | mines 3");
    }

    #[test]
    fn lost_board_marks_triggered_mine() {
        let config = GameConfig::new(5, 5, 1, 1).unwrap();
        let mut engine = Sweeper::new(config, FixedMinefieldGenerator::new([(4, 4)]));
        engine.reveal_at((3, 3)).unwrap();
        engine.reveal_at((4, 4)).unwrap();

        let text = render(&engine);
        let last_row = text.lines().nth(5).unwrap();

        assert_eq!(last_row, "  4           1  X");
        assert!(text.ends_with("lost, n for a new round | flags 1/1 | mines 1\n"));
    }
}
