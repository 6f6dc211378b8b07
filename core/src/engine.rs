use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;
use hint::HintCursor;

mod hint;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Playing, on a new round
///
/// `Pressed` is never produced by the engine, hosts use it to display a held press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Pressed,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Placed,
    Removed,
}

impl MarkOutcome {
    /// Whether this outcome changed the visible board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// The board engine, owning the hidden layout, the visible board and the flag inventory of the
/// current round.
///
/// Mines are laid out lazily by the first reveal, which is therefore always safe.
#[derive(Clone, Debug)]
pub struct Sweeper<G = RandomMinefieldGenerator> {
    config: GameConfig,
    generator: G,
    hidden: Minefield,
    shown: Array2<Cell>,
    flags: FlagInventory,
    safe_cells: Vec<Coord2>,
    hint: Option<HintCursor>,
    state: GameState,
    triggered_mine: Option<Coord2>,
    armed: bool,
}

impl Sweeper {
    /// Engine with random layouts drawn from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RandomMinefieldGenerator::new(seed))
    }
}

impl<G: MinefieldGenerator> Sweeper<G> {
    pub fn new(config: GameConfig, generator: G) -> Self {
        let size = config.size();
        log::debug!(
            "New engine, {}x{} with {} mines and {} flags",
            size.0,
            size.1,
            config.mines(),
            config.flags()
        );
        Self {
            config,
            generator,
            hidden: Minefield::empty(size),
            shown: Array2::from_elem(size.to_nd_index(), Cell::Undiscovered),
            flags: FlagInventory::new(config.flags()),
            safe_cells: Vec::new(),
            hint: None,
            state: GameState::Playing,
            triggered_mine: None,
            armed: false,
        }
    }

    /// Throws away the current round and starts over with an empty, unarmed board.
    pub fn start_new_game(&mut self) {
        let size = self.config.size();
        self.hidden = Minefield::empty(size);
        self.shown.fill(Cell::Undiscovered);
        self.flags = FlagInventory::new(self.config.flags());
        self.safe_cells.clear();
        self.hint = None;
        self.state = GameState::Playing;
        self.triggered_mine = None;
        self.armed = false;
        log::debug!("New round started");
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether mines have been laid out for this round.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.shown[coords.to_nd_index()]
    }

    /// Read-only view of the visible board, indexed `[row, column]`.
    pub fn board(&self) -> ArrayView2<'_, Cell> {
        self.shown.view()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags.remaining()
    }

    pub fn flags(&self) -> &FlagInventory {
        &self.flags
    }

    /// The mine that ended the round, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Hidden layout of the round, `None` until the first reveal.
    pub fn minefield(&self) -> Option<&Minefield> {
        self.armed.then_some(&self.hidden)
    }

    /// Safe cells of the round in row-major order, empty until the first reveal.
    pub fn safe_cells(&self) -> &[Coord2] {
        &self.safe_cells
    }

    /// Cells the player has not uncovered yet, flagged ones included.
    pub fn unrevealed_count(&self) -> CellCount {
        self.shown.iter().filter(|cell| cell.is_unrevealed()).count() as CellCount
    }

    pub fn toggle_flag_at(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        self.end_hint();

        if self.state.is_finished() {
            return Ok(NoChange);
        }

        let cell = &mut self.shown[coords.to_nd_index()];
        Ok(match *cell {
            Cell::Flag => {
                *cell = Cell::Undiscovered;
                self.flags.refund();
                Removed
            }
            Cell::Undiscovered => {
                if !self.flags.take() {
                    return Ok(NoChange);
                }
                *cell = Cell::Flag;
                Placed
            }
            _ => NoChange,
        })
    }

    /// Reveals a cell and returns the resulting state, never `Pressed`.
    ///
    /// The first reveal of a round lays out the mines around it. Flagged or already revealed
    /// cells are left alone, and a finished round accepts no more reveals.
    pub fn reveal_at(&mut self, coords: Coord2) -> Result<GameState> {
        let coords = self.validate_coords(coords)?;
        self.end_hint();

        if self.state.is_finished() {
            return Ok(self.state);
        }

        if !self.armed {
            self.place_mines_after_click(coords)?;
        }

        if self.shown[coords.to_nd_index()] != Cell::Undiscovered {
            return Ok(self.state);
        }

        if self.hidden.contains_mine(coords) {
            log::debug!("Mine hit at {:?}, round lost", coords);
            self.triggered_mine = Some(coords);
            self.reveal_whole_map();
            self.state = GameState::Lost;
        } else {
            self.reveal_flood_from(coords);
            if self.is_complete() {
                log::debug!("All safe cells revealed, round won");
                self.reveal_whole_map();
                self.state = GameState::Won;
            }
        }

        Ok(self.state)
    }

    fn place_mines_after_click(&mut self, start: Coord2) -> Result<()> {
        let mut hidden = self.generator.generate(&self.config, start)?;
        self.safe_cells = hidden.compute_counts();
        self.hidden = hidden;
        self.armed = true;
        log::debug!(
            "Placed {} mines, first reveal at {:?}",
            self.hidden.mine_count(),
            start
        );
        Ok(())
    }

    /// Copies the hidden content of a cell onto the board, refunding a flag it covers.
    fn reveal_one(&mut self, coords: Coord2) {
        let cell = &mut self.shown[coords.to_nd_index()];
        if *cell == Cell::Flag {
            self.flags.refund();
        }
        *cell = self.hidden[coords];
    }

    /// Reveals a cell, and when it is free, the whole free region around it up to and
    /// including its numbered border. Flags are left in place.
    fn reveal_flood_from(&mut self, coords: Coord2) {
        self.reveal_one(coords);
        if self.shown[coords.to_nd_index()] != Cell::Free {
            return;
        }

        let size = self.size();
        let mut visited = Array2::from_elem(size.to_nd_index(), false);
        visited[coords.to_nd_index()] = true;
        let mut to_visit = VecDeque::from([coords]);
        log::trace!("Starting flood-fill from {:?}", coords);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in neighbors(visit_coords, size) {
                if visited[pos.to_nd_index()]
                    || self.shown[pos.to_nd_index()] != Cell::Undiscovered
                {
                    continue;
                }
                visited[pos.to_nd_index()] = true;
                self.reveal_one(pos);
                log::trace!("Flood revealed {:?} as {:?}", pos, self.hidden[pos]);

                if self.hidden[pos] == Cell::Free {
                    to_visit.push_back(pos);
                }
            }
        }
    }

    fn reveal_whole_map(&mut self) {
        let (height, width) = self.size();
        for row in 0..height {
            for col in 0..width {
                self.reveal_one((row, col));
            }
        }
    }

    /// Won once the only cells left unrevealed are the mines.
    fn is_complete(&self) -> bool {
        self.unrevealed_count() == self.hidden.mine_count()
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}
