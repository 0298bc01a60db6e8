//! Square per-column grids shared by the pipeline stages.

/// A `size × size` grid with one value per `(x, z)` column.
///
/// Storage is a flat vector in raster order (`x` outer, `z` inner), which is
/// also the iteration order of [`ColumnGrid::iter`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnGrid<T> {
    size: usize,
    cells: Vec<T>,
}

/// Surface height of every column. Always `>= 1` once synthesized.
pub type HeightField = ColumnGrid<u32>;

/// `true` where a column is covered by the river.
pub type RiverMask = ColumnGrid<bool>;

impl<T: Copy> ColumnGrid<T> {
    /// Create a grid with every column set to `fill`.
    pub fn filled(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Side length in columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at column `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if the column lies outside the grid.
    #[inline]
    pub fn get(&self, x: usize, z: usize) -> T {
        self.cells[self.index(x, z)]
    }

    /// Overwrite the value at column `(x, z)`.
    #[inline]
    pub fn set(&mut self, x: usize, z: usize, value: T) {
        let idx = self.index(x, z);
        self.cells[idx] = value;
    }

    /// Signed-coordinate bounds check, for callers that offset from a column.
    #[inline]
    pub fn contains(&self, x: i64, z: i64) -> bool {
        let size = self.size as i64;
        (0..size).contains(&x) && (0..size).contains(&z)
    }

    /// Iterate `(x, z, value)` in raster order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / size, i % size, v))
    }

    /// Raw cells in raster order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    #[inline]
    fn index(&self, x: usize, z: usize) -> usize {
        assert!(
            x < self.size && z < self.size,
            "column ({x}, {z}) outside {0}x{0} grid",
            self.size
        );
        x * self.size + z
    }
}

impl RiverMask {
    /// Number of river columns.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&wet| wet).count()
    }
}
