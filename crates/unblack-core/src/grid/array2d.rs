use ndarray::Array2;

/// Two-dimensional array of arbitrary values, addressed as `(col, row)`.
///
/// Backed by an `ndarray::Array2` of shape `(height, width)`. Out-of-range
/// coordinates panic.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2D<T> {
    data: Array2<T>,
}

impl<T: Clone + Default> Array2D<T> {
    /// Create a `width` x `height` array filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_elem(width, height, T::default())
    }
}

impl<T: Clone> Array2D<T> {
    pub fn from_elem(width: usize, height: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((height, width), value),
        }
    }
}

impl<T> Array2D<T> {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Size in bytes of a single element.
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    pub fn at(&self, col: usize, row: usize) -> &T {
        self.check_bounds(col, row);
        &self.data[[row, col]]
    }

    pub fn at_mut(&mut self, col: usize, row: usize) -> &mut T {
        self.check_bounds(col, row);
        &mut self.data[[row, col]]
    }

    pub fn for_each_row_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &T),
    {
        for ((row, col), value) in self.data.indexed_iter() {
            visit(col, row, value);
        }
    }

    pub fn for_each_col_major<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, &T),
    {
        for (col, column) in self.data.columns().into_iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                visit(col, row, value);
            }
        }
    }

    pub fn for_each_row_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, usize, &mut T),
    {
        for ((row, col), value) in self.data.indexed_iter_mut() {
            visit(col, row, value);
        }
    }

    pub fn for_each_col_major_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, usize, &mut T),
    {
        for (col, mut column) in self.data.columns_mut().into_iter().enumerate() {
            for (row, value) in column.iter_mut().enumerate() {
                visit(col, row, value);
            }
        }
    }

    fn check_bounds(&self, col: usize, row: usize) {
        assert!(
            col < self.width() && row < self.height(),
            "element ({col}, {row}) out of bounds for {}x{} array",
            self.width(),
            self.height()
        );
    }
}
