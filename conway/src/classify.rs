// classify.rs - Windowed template census over a grid
//
// Unlike the stepper, windows here do not wrap. A window that would run past
// the last row or column is truncated, can never equal a full template, and
// so never matches.

use std::ops::{Add, AddAssign};

use rayon::prelude::*;

use crate::grid::Grid;
use crate::patterns::{Category, PatternCatalog, Template};

/// Match counts per category for one census.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    counts: [usize; Category::COUNT],
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    #[inline]
    pub fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    /// Sum of all category counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of all matches in `category`, in percent. Zero when nothing
    /// matched at all.
    pub fn percent(&self, category: Category) -> f64 {
        match self.total() {
            0 => 0.0,
            total => 100.0 * self.get(category) as f64 / total as f64,
        }
    }

    /// `(category, count)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(|&c| (c, self.get(c)))
    }
}

impl Add for ClassificationResult {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for ClassificationResult {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.counts.iter_mut().zip(rhs.counts) {
            *a += b;
        }
    }
}

/// True when the window of `pattern`'s shape anchored at `(i, j)` lies fully
/// inside `grid` and equals `pattern` cell for cell.
pub fn matches_at(grid: &Grid, i: usize, j: usize, pattern: &Grid) -> bool {
    let (rows, cols) = (pattern.width(), pattern.height());
    if i + rows > grid.width() || j + cols > grid.height() {
        return false;
    }
    (0..rows).all(|r| grid.row(i + r)[j..j + cols] == *pattern.row(r))
}

pub struct Classifier<'a> {
    catalog: &'a PatternCatalog,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::standard())
    }
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Census of `grid`. Every anchor is tried against every template; a
    /// template scores once per anchor when any of its orientations fits.
    /// Overlapping matches are all counted.
    pub fn classify(&self, grid: &Grid) -> ClassificationResult {
        let result = (0..grid.width())
            .into_par_iter()
            .map(|i| self.scan_row(grid, i))
            .reduce(ClassificationResult::new, |a, b| a + b);

        tracing::debug!(
            width = grid.width(),
            height = grid.height(),
            total = result.total(),
            "census complete"
        );
        result
    }

    fn scan_row(&self, grid: &Grid, i: usize) -> ClassificationResult {
        let mut result = ClassificationResult::new();
        for j in 0..grid.height() {
            for template in self.catalog.templates() {
                if Self::template_matches(grid, i, j, template) {
                    tracing::trace!(template = template.name, i, j, "match");
                    result.increment(template.category);
                }
            }
        }
        result
    }

    fn template_matches(grid: &Grid, i: usize, j: usize, template: &Template) -> bool {
        template.variants().iter().any(|v| matches_at(grid, i, j, v))
    }
}

/// Census against the built-in catalog.
pub fn classify(grid: &Grid) -> ClassificationResult {
    Classifier::default().classify(grid)
}
