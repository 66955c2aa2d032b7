// src/grid.rs
use rayon::prelude::*;

/// Row-major 2-D raster buffer. Shape is `(width, height)`, matching
/// `Dataset::raster_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    shape: (usize, usize),
    data: Vec<T>,
}

/// Reflectance samples of one spectral band.
pub type BandGrid = Grid<f32>;
/// Normalized-difference values; NaN marks an undefined pixel.
pub type IndexGrid = Grid<f32>;
/// Per-pixel classification result.
pub type MaskGrid = Grid<bool>;

impl<T> Grid<T> {
    pub fn new(shape: (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(
            shape.0 * shape.1,
            data.len(),
            "grid of shape {:?} needs {} cells, got {}",
            shape,
            shape.0 * shape.1,
            data.len()
        );
        Self { shape, data }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn width(&self) -> usize {
        self.shape.0
    }

    pub fn height(&self) -> usize {
        self.shape.1
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.shape.0 || y >= self.shape.1 {
            return None;
        }
        self.data.get(y * self.shape.0 + x)
    }
}

impl<T: Sync> Grid<T> {
    /// Apply `f` to every cell in parallel, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        Grid {
            shape: self.shape,
            data: self.data.par_iter().map(f).collect(),
        }
    }

    /// Combine two same-shape grids cell by cell.
    ///
    /// Panics if the shapes differ; callers are expected to have checked.
    pub fn zip_map<S, U, F>(&self, other: &Grid<S>, f: F) -> Grid<U>
    where
        S: Sync,
        U: Send,
        F: Fn(&T, &S) -> U + Sync + Send,
    {
        assert_eq!(self.shape, other.shape, "grid shapes differ");
        Grid {
            shape: self.shape,
            data: self
                .data
                .par_iter()
                .zip(other.data.par_iter())
                .map(|(a, b)| f(a, b))
                .collect(),
        }
    }
}

impl Grid<f32> {
    /// Largest finite cell, ignoring NaN and infinities.
    pub fn finite_max(&self) -> Option<f32> {
        self.data
            .par_iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce_with(f32::max)
    }

    /// Smallest finite cell, ignoring NaN and infinities.
    pub fn finite_min(&self) -> Option<f32> {
        self.data
            .par_iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce_with(f32::min)
    }
}

impl Grid<bool> {
    pub fn count_true(&self) -> usize {
        self.data.par_iter().filter(|&&v| v).count()
    }

    /// 0/255 intensity grid, the form masks are drawn in.
    pub fn to_intensity(&self) -> Grid<f32> {
        self.map(|&v| if v { 255.0 } else { 0.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_row_major() {
        let grid = Grid::new((3, 2), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.get(0, 1), Some(&3));
        assert_eq!(grid.get(2, 0), Some(&2));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn new_rejects_wrong_length() {
        let _ = Grid::new((2, 2), vec![1.0f32, 2.0, 3.0]);
    }

    #[test]
    fn finite_extremes_skip_nan_and_inf() {
        let grid = Grid::new((2, 2), vec![f32::NAN, 3.0, f32::INFINITY, -1.5]);
        assert_eq!(grid.finite_max(), Some(3.0));
        assert_eq!(grid.finite_min(), Some(-1.5));

        let empty = Grid::new((1, 2), vec![f32::NAN, f32::NEG_INFINITY]);
        assert_eq!(empty.finite_max(), None);
    }

    #[test]
    fn mask_intensity() {
        let mask = Grid::new((2, 1), vec![true, false]);
        assert_eq!(mask.to_intensity().data(), &[255.0, 0.0]);
        assert_eq!(mask.count_true(), 1);
    }
}
