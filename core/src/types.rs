/// Single coordinate axis used for board height, width, and positions.
pub type Coord = u8;

/// Count type used for mine counts, flag budgets, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`, or a size `(height, width)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether `coords` lies on a board of the given `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Row-major flat index of `coords`.
pub const fn flat_index(coords: Coord2, size: Coord2) -> CellCount {
    mult(coords.0, size.1) + coords.1 as CellCount
}

/// Inverse of [`flat_index`].
pub const fn from_flat_index(index: CellCount, size: Coord2) -> Coord2 {
    let width = size.1 as CellCount;
    ((index / width) as Coord, (index % width) as Coord)
}

/// Iterates the up-to-8 neighbors of `center` that fall inside `size`.
pub const fn neighbors(center: Coord2, size: Coord2) -> Neighbors {
    Neighbors {
        center,
        size,
        index: 0,
    }
}

// row-major around the center, the center itself excluded
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `offset` to `coords`, returning a value only when it stays on the board.
fn step(coords: Coord2, offset: (i8, i8), size: Coord2) -> Option<Coord2> {
    let row = coords.0.checked_add_signed(offset.0)?;
    let col = coords.1.checked_add_signed(offset.1)?;
    in_bounds((row, col), size).then_some((row, col))
}

#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord2,
    index: u8,
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next) = step(self.center, offset, self.size) {
                return Some(next);
            }
        }
        None
    }
}
