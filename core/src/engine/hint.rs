use super::*;

/// The cell currently uncovered by a hint, and what it showed before.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) struct HintCursor {
    coords: Coord2,
    had_flag: bool,
}

impl<G: MinefieldGenerator> Sweeper<G> {
    /// Uncovers the first safe cell, in row-major order, that the player has not revealed yet.
    ///
    /// A flag on that cell is lifted for the duration of the hint without going back into the
    /// inventory. Must be paired with [`Sweeper::end_hint`]; a hint still showing is put back
    /// first. Returns the hinted cell, or `None` when there is nothing left to hint.
    pub fn begin_hint(&mut self) -> Option<Coord2> {
        self.end_hint();

        if self.state.is_finished() {
            return None;
        }

        let (coords, cell) = self
            .safe_cells
            .iter()
            .map(|&coords| (coords, self.shown[coords.to_nd_index()]))
            .find(|(_, cell)| cell.is_unrevealed())?;

        let had_flag = cell == Cell::Flag;
        if had_flag {
            self.shown[coords.to_nd_index()] = Cell::Undiscovered;
        } else {
            self.reveal_one(coords);
        }
        log::trace!("Hint at {:?}, flagged: {}", coords, had_flag);

        self.hint = Some(HintCursor { coords, had_flag });
        Some(coords)
    }

    /// Puts the hinted cell back the way it was, no-op without an active hint.
    pub fn end_hint(&mut self) {
        let Some(HintCursor { coords, had_flag }) = self.hint.take() else {
            return;
        };

        self.shown[coords.to_nd_index()] = if had_flag {
            Cell::Flag
        } else {
            Cell::Undiscovered
        };
    }

    pub fn hinted_cell(&self) -> Option<Coord2> {
        self.hint.map(|hint| hint.coords)
    }
}
