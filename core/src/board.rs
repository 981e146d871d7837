use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Running -> Won
/// - Running -> Lost
///
/// and back again, but only through reverted deltas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// The authoritative game state: mine layout, per-cell player state and the game status.
///
/// Every mutation made by [`reveal`](Self::reveal) and [`toggle_flag`](Self::toggle_flag) is
/// returned as a sequence of [`Delta`]s, which can later be reverted or re-applied through
/// [`revert_delta`](Self::revert_delta) and [`apply_delta`](Self::apply_delta).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    status: GameStatus,
    unrevealed_safe: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    first_move_taken: bool,
    /// Mine moved by the first reveal, `(from, to)`.
    relocated_mine: Option<(Coord2, Coord2)>,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(config: GameConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        config.validate()?;
        let mine_mask = generator.generate(config)?;
        Self::from_mine_mask(config.size, mine_mask)
    }

    pub fn random(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomMinefieldGenerator::new(seed))
    }

    pub fn from_difficulty(difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::random(difficulty.config(), seed)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new(size, 0)?;
        let requested = CellCount::try_from(mine_coords.len()).unwrap_or(CellCount::MAX);
        let mine_mask = FixedMinefieldGenerator::new(mine_coords)
            .generate(GameConfig::new_unchecked(size, requested))?;
        Self::from_mine_mask(size, mine_mask)
    }

    fn from_mine_mask(size: Coord2, mine_mask: Array2<bool>) -> Result<Self> {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let mines = CellCount::try_from(mine_count).unwrap_or(CellCount::MAX);
        let config = GameConfig::new(size, mines)?;

        if mine_mask.dim() != (usize::from(size.0), usize::from(size.1)) {
            return Err(GameError::InvalidConfiguration {
                rows: size.0,
                cols: size.1,
                mines,
            });
        }

        let grid = mine_mask.mapv(|has_mine| Cell {
            has_mine,
            ..Cell::default()
        });

        let mut board = Self {
            config,
            grid,
            status: GameStatus::Running,
            unrevealed_safe: Saturating(0),
            flagged_count: Saturating(0),
            first_move_taken: false,
            relocated_mine: None,
            triggered_mine: None,
        };
        board.compute_adjacency();
        board.count_safe();
        Ok(board)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Safe cells still waiting to be revealed, the game is won when this reaches zero.
    pub fn unrevealed_safe(&self) -> CellCount {
        self.unrevealed_safe.0
    }

    pub fn flags_placed(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus placed flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.config.mines as isize) - (self.flagged_count.0 as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Set by the first reveal, cleared again once reverting leaves no cell revealed.
    pub fn first_move_taken(&self) -> bool {
        self.first_move_taken
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        self.grid.get(coords.to_nd_index()).copied()
    }

    pub fn has_mine_at(&self, coords: Coord2) -> bool {
        self.cell(coords).is_some_and(Cell::has_mine)
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Vec<Delta> {
        use GameStatus::*;

        if !self.status.is_running() {
            return Vec::new();
        }
        match self.cell(coords) {
            Some(cell) if cell.is_hidden() => {}
            _ => return Vec::new(),
        }

        let prev_status = self.status;
        if !self.first_move_taken {
            self.take_first_move(coords);
        }

        if self.grid[coords.to_nd_index()].has_mine {
            self.grid[coords.to_nd_index()].revealed = true;
            self.triggered_mine = Some(coords);
            self.status = Lost;
            log::debug!("Mine revealed at {:?}, game lost", coords);
            return vec![Delta::reveal(coords, false, prev_status, Lost)];
        }

        let mut deltas = Vec::new();
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = self.grid[visit_coords.to_nd_index()];
            if !cell.is_hidden() {
                continue;
            }

            // only zero cells enqueue neighbors, so no mine is ever reached here
            self.grid[visit_coords.to_nd_index()].revealed = true;
            self.unrevealed_safe -= 1;
            deltas.push(Delta::reveal(visit_coords, false, prev_status, prev_status));

            if cell.adjacent_mines == 0 {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden()),
                );
            }
        }

        if self.unrevealed_safe.0 == 0 {
            self.status = Won;
            if let Some(last) = deltas.last_mut() {
                *last = last.with_next_status(Won);
            }
            log::debug!("All safe cells revealed, game won");
        }

        log::trace!("Reveal at {:?} opened {} cells", coords, deltas.len());
        deltas
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Vec<Delta> {
        if !self.status.is_running() {
            return Vec::new();
        }
        let Some(cell) = self.cell(coords) else {
            return Vec::new();
        };
        if cell.revealed {
            return Vec::new();
        }

        let delta = Delta::flag(coords, cell.revealed, cell.flagged, self.status);
        self.apply_delta(&delta);
        vec![delta]
    }

    /// Moves the delta's cell to its `next_*` state and the board to its `next_status`.
    pub fn apply_delta(&mut self, delta: &Delta) {
        self.set_cell_state(
            delta.coords(),
            delta.next_revealed(),
            delta.next_flagged(),
            delta.next_status(),
        );
    }

    /// Moves the delta's cell back to its `prev_*` state and the board to its `prev_status`.
    pub fn revert_delta(&mut self, delta: &Delta) {
        self.apply_delta(&delta.inverse());
    }

    pub fn apply_deltas(&mut self, deltas: &[Delta]) {
        for delta in deltas {
            self.apply_delta(delta);
        }
    }

    pub fn revert_deltas(&mut self, deltas: &[Delta]) {
        for delta in deltas.iter().rev() {
            self.revert_delta(delta);
        }
    }

    fn set_cell_state(
        &mut self,
        coords: Coord2,
        revealed: bool,
        flagged: bool,
        status: GameStatus,
    ) {
        if !in_bounds(coords, self.size()) {
            return;
        }

        let was_revealed = self.grid[coords.to_nd_index()].revealed;
        if revealed && !was_revealed && !self.first_move_taken {
            self.take_first_move(coords);
        }

        let cell = &mut self.grid[coords.to_nd_index()];

        match (cell.revealed, revealed, cell.has_mine) {
            (false, true, false) => self.unrevealed_safe -= 1,
            (true, false, false) => self.unrevealed_safe += 1,
            (false, true, true) => self.triggered_mine = Some(coords),
            (true, false, true) if self.triggered_mine == Some(coords) => {
                self.triggered_mine = None
            }
            _ => {}
        }

        match (cell.flagged, flagged) {
            (false, true) => self.flagged_count += 1,
            (true, false) => self.flagged_count -= 1,
            _ => {}
        }

        cell.revealed = revealed;
        cell.flagged = flagged;
        self.status = status;

        if was_revealed && !revealed && self.first_move_taken && self.nothing_revealed() {
            self.restore_first_move();
        }
    }

    fn nothing_revealed(&self) -> bool {
        self.triggered_mine.is_none() && self.unrevealed_safe.0 == self.config.safe_cells()
    }

    fn take_first_move(&mut self, start: Coord2) {
        self.first_move_taken = true;
        self.relocated_mine = self.ensure_first_click_safe(start);
    }

    /// Puts a relocated mine back where the generator placed it.
    fn restore_first_move(&mut self) {
        self.first_move_taken = false;
        if let Some((from, to)) = self.relocated_mine.take() {
            self.grid[to.to_nd_index()].has_mine = false;
            self.grid[from.to_nd_index()].has_mine = true;
            self.compute_adjacency();
            self.count_safe();
            log::debug!("First reveal reverted, moved mine at {:?} back to {:?}", to, from);
        }
    }

    /// Moves a mine away from `start` so the first reveal can never lose.
    ///
    /// The mine goes to the first mine-free cell in row-major order, after which every
    /// adjacency count is recomputed. The target is deterministic, so re-applying the first
    /// reveal after reverting it lands the mine on the same cell.
    fn ensure_first_click_safe(&mut self, start: Coord2) -> Option<(Coord2, Coord2)> {
        if !self.grid[start.to_nd_index()].has_mine {
            return None;
        }

        let Some(target) = self
            .iter_cells()
            .find(|&(coords, cell)| coords != start && !cell.has_mine)
            .map(|(coords, _)| coords)
        else {
            log::warn!("No free cell to move the mine at {:?} to", start);
            return None;
        };

        self.grid[start.to_nd_index()].has_mine = false;
        self.grid[target.to_nd_index()].has_mine = true;
        self.compute_adjacency();
        self.count_safe();
        log::debug!("First reveal at {:?} hit a mine, moved it to {:?}", start, target);
        Some((start, target))
    }

    fn compute_adjacency(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let count = self
                    .iter_neighbors((row, col))
                    .filter(|&pos| self.grid[pos.to_nd_index()].has_mine)
                    .count();
                // at most 8 neighbors
                self.grid[(row, col).to_nd_index()].adjacent_mines = count as u8;
            }
        }
    }

    fn count_safe(&mut self) {
        let count = self
            .grid
            .iter()
            .filter(|cell| !cell.has_mine && !cell.revealed)
            .count();
        self.unrevealed_safe = Saturating(CellCount::try_from(count).unwrap_or(CellCount::MAX));
    }
}
