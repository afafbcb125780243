//! Scenario files.
//!
//! A scenario is a flat list of whitespace-separated numbers. Fields are
//! positional:
//!
//! | token | field |
//! |---|---|
//! | 0 | grid width |
//! | 1 | grid height |
//! | 2, 3, 5 | reserved, ignored |
//! | 4 | generation at which the census runs |
//! | 6.. | glider seeds as alternating `x y` pairs |

use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

const WIDTH: usize = 0;
const HEIGHT: usize = 1;
const GENERATIONS: usize = 4;
const SEEDS_START: usize = 6;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scenario is missing {field} (token {index})")]
    Missing { field: &'static str, index: usize },

    #[error("{field} (token {index}) is not a number: {token:?}")]
    NotANumber {
        field: &'static str,
        index: usize,
        token: String,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    /// Top-left corners of seeded gliders, `(x, y)` = `(i, j)`.
    pub seeds: Vec<(usize, usize)>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario: Scenario = text.parse()?;
        tracing::info!(
            path = %path.display(),
            width = scenario.width,
            height = scenario.height,
            generations = scenario.generations,
            seeds = scenario.seeds.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    /// Replace both dimensions with `n`.
    pub fn with_grid_size(mut self, n: usize) -> Result<Self, ScenarioError> {
        if n == 0 {
            return Err(ScenarioError::EmptyGrid { width: n, height: n });
        }
        self.width = n;
        self.height = n;
        Ok(self)
    }

    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }
}

fn number(tokens: &[&str], index: usize, field: &'static str) -> Result<usize, ScenarioError> {
    let token = tokens
        .get(index)
        .ok_or(ScenarioError::Missing { field, index })?;
    token.parse().map_err(|_| ScenarioError::NotANumber {
        field,
        index,
        token: token.to_string(),
    })
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let width = number(&tokens, WIDTH, "width")?;
        let height = number(&tokens, HEIGHT, "height")?;
        let generations = number(&tokens, GENERATIONS, "generation count")?;
        if width == 0 || height == 0 {
            return Err(ScenarioError::EmptyGrid { width, height });
        }

        let coords = (SEEDS_START..tokens.len())
            .map(|index| number(&tokens, index, "seed coordinate"))
            .collect::<Result<Vec<_>, _>>()?;
        if coords.len() % 2 == 1 {
            tracing::warn!(
                token = SEEDS_START + coords.len() - 1,
                "unpaired seed coordinate ignored"
            );
        }
        let seeds = coords.chunks_exact(2).map(|p| (p[0], p[1])).collect();

        Ok(Scenario {
            width,
            height,
            generations,
            seeds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_fields() {
        let s: Scenario = "40 30\n0 0\n25\n0\n3 4\n10 12\n".parse().unwrap();
        assert_eq!(
            s,
            Scenario {
                width: 40,
                height: 30,
                generations: 25,
                seeds: vec![(3, 4), (10, 12)],
            }
        );
    }

    #[test]
    fn seeds_are_optional() {
        let s: Scenario = "8 9 0 0 3".parse().unwrap();
        assert_eq!((s.width, s.height, s.generations), (8, 9, 3));
        assert!(s.seeds.is_empty());
    }

    #[test]
    fn trailing_coordinate_is_dropped() {
        let s: Scenario = "8 8 0 0 3 0 1 2 5".parse().unwrap();
        assert_eq!(s.seeds, vec![(1, 2)]);
    }

    #[test]
    fn missing_generation_count() {
        let err = "8 8 0 0".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ScenarioError::Missing { index: 4, .. }));
    }

    #[test]
    fn non_numeric_tokens() {
        let err = "8 wide 0 0 3".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ScenarioError::NotANumber { index: 1, .. }));
        let err = "8 8 0 0 3 0 1 x".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ScenarioError::NotANumber { index: 7, .. }));
    }

    #[test]
    fn zero_dimensions() {
        assert!(matches!(
            "0 8 0 0 3".parse::<Scenario>(),
            Err(ScenarioError::EmptyGrid { .. })
        ));
        let s: Scenario = "8 8 0 0 3".parse().unwrap();
        assert!(s.clone().with_grid_size(0).is_err());
        assert_eq!(s.with_grid_size(20).unwrap().height, 20);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.txt")).unwrap_err();
        assert!(matches!(err, ScenarioError::Read { .. }));
    }
}
