use super::GridError;
use crate::Pattern;
use std::fmt;

/// Probability of a cell being alive after [`Grid::randomize`] when the caller has no preference.
pub const DEFAULT_FILL_RATE: f64 = 0.3;

const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Counters reported after a bulk update of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridStats {
    pub generation: u64,
    pub population: usize,
}

/// Conway's GoL field with fixed, non-wrapping borders.
///
/// Cells are stored row-major; `cells_next` is the scratch buffer that
/// [`Grid::advance`] fills before swapping it with `cells_curr`.
#[derive(Clone)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
    population: usize,
}

impl Grid {
    /// Creates a field of dead cells.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        let size = width
            .checked_mul(height)
            .ok_or(GridError::InvalidDimension { width, height })?;
        Ok(Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
            generation: 0,
            population: 0,
        })
    }

    /// Creates a field with the listed cells alive; coordinates outside the field are skipped.
    pub fn with_live_cells(
        width: usize,
        height: usize,
        cells: impl IntoIterator<Item = (i64, i64)>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for (x, y) in cells {
            grid.set_cell(x, y, true);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn stats(&self) -> GridStats {
        GridStats {
            generation: self.generation,
            population: self.population,
        }
    }

    /// Row-major view of the current cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x + y * self.width)
    }

    /// Cells outside the field read as dead.
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y).is_some_and(|i| self.cells_curr[i])
    }

    /// Number of alive cells among the eight surrounding ones that lie inside the field.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                x.checked_add(dx)
                    .zip(y.checked_add(dy))
                    .is_some_and(|(x, y)| self.get(x, y))
            })
            .count() as u8
    }

    /// Sets a single cell and returns the new population.
    ///
    /// Out-of-range coordinates are ignored. The generation counter is not touched.
    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) -> usize {
        if let Some(i) = self.index_of(x, y) {
            let cell = &mut self.cells_curr[i];
            if *cell != alive {
                *cell = alive;
                if alive {
                    self.population += 1;
                } else {
                    self.population -= 1;
                }
            }
        }
        self.population
    }

    /// Flips a single cell and returns the new population; see [`Grid::set_cell`].
    pub fn toggle_cell(&mut self, x: i64, y: i64) -> usize {
        let alive = self.get(x, y);
        self.set_cell(x, y, !alive)
    }

    /// Computes the next generation from a snapshot of the current one.
    pub fn advance(&mut self) -> GridStats {
        let (w, h) = (self.width as i64, self.height as i64);
        for y in 0..h {
            for x in 0..w {
                let i = (x + y * w) as usize;
                let neibs = self.count_live_neighbors(x, y);
                self.cells_next[i] = if self.cells_curr[i] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        self.recount_population();
        self.stats()
    }

    /// Fills the field with random cells and resets the generation counter.
    ///
    /// `fill_rate` - probability of cell being alive
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, fill_rate: f64, seed: Option<u64>) -> Result<GridStats, GridError> {
        use rand::{Rng, SeedableRng};

        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(GridError::InvalidProbability(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
        self.generation = 0;
        self.recount_population();
        log::debug!(
            "randomized {}x{} grid with fill rate {}: population {}",
            self.width,
            self.height,
            fill_rate,
            self.population
        );
        Ok(self.stats())
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) -> GridStats {
        self.cells_curr.fill(false);
        self.generation = 0;
        self.population = 0;
        self.stats()
    }

    /// Replaces the field with a blank one of the new size.
    ///
    /// On error the current field is left as is.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        *self = Self::new(width, height)?;
        log::info!("grid resized to {}x{}", width, height);
        Ok(())
    }

    /// Clears the field and places `pattern` in its center, clipping the parts that do not fit.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> GridStats {
        self.cells_curr.fill(false);
        let x0 = (self.width as i64 - pattern.width as i64) / 2;
        let y0 = (self.height as i64 - pattern.height as i64) / 2;
        for (i, &alive) in pattern.cells.iter().enumerate() {
            if !alive {
                continue;
            }
            let (x, y) = ((i % pattern.width) as i64, (i / pattern.width) as i64);
            if let Some(j) = self.index_of(x0 + x, y0 + y) {
                self.cells_curr[j] = true;
            }
        }
        self.generation = 0;
        self.recount_population();
        if pattern.width > self.width || pattern.height > self.height {
            log::warn!(
                "pattern {}x{} clipped to fit {}x{} grid",
                pattern.width,
                pattern.height,
                self.width,
                self.height
            );
        }
        self.stats()
    }

    fn recount_population(&mut self) {
        self.population = self.cells_curr.iter().filter(|&&c| c).count();
    }
}

impl PartialEq for Grid {
    /// Grids are equal when their sizes and cells match; counters are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells_curr.chunks_exact(self.width) {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {}x{} (generation {}, population {})",
            self.width, self.height, self.generation, self.population
        )?;
        write!(f, "{}", self)
    }
}
