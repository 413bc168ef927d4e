//! Deterministic sample election results for the demo panels.
//!
//! Generates a grid of regions with three-way vote splits and a series of
//! national totals by year. Seeded, so every run draws the same map.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEFAULT_SEED: u64 = 42;
const GRID_COLS: usize = 12;
const GRID_ROWS: usize = 8;
const FIRST_YEAR: i32 = 1992;
const LAST_YEAR: i32 = 2024;

/// Result summary for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionResult {
    /// Vote share of party A (0.0 to 1.0)
    pub share_a: f32,
    /// Vote share of party B (0.0 to 1.0)
    pub share_b: f32,
    /// Vote share of everyone else (0.0 to 1.0)
    pub share_other: f32,
    /// Turnout (0.0 to 1.0)
    pub turnout: f32,
    /// Total votes cast
    pub votes: u32,
}

impl RegionResult {
    /// Party A's share of the two-party vote.
    pub fn two_party_share_a(&self) -> f32 {
        let two_party = self.share_a + self.share_b;
        if two_party > 0.0 { self.share_a / two_party } else { 0.5 }
    }
}

/// One cell of the sample map grid.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub col: usize,
    pub row: usize,
    pub result: RegionResult,
}

/// National two-party share for one election year.
#[derive(Debug, Clone, Copy)]
pub struct YearTotal {
    pub year: i32,
    pub share_a: f32,
}

/// A complete sample data set.
#[derive(Debug, Clone)]
pub struct SampleElection {
    pub cols: usize,
    pub rows: usize,
    pub regions: Vec<Region>,
    pub years: Vec<YearTotal>,
}

impl SampleElection {
    /// Generates the default sample data set.
    pub fn generate() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Generates a sample data set from a specific seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut regions = Vec::with_capacity(GRID_COLS * GRID_ROWS);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                // West leans A, east leans B, with noise
                let lean = 0.65 - 0.3 * (col as f32 / (GRID_COLS - 1) as f32);
                let share_other: f32 = rng.gen_range(0.02..0.15);
                let a = (lean + rng.gen_range(-0.12f32..0.12)).clamp(0.05, 0.95);
                let share_a = a * (1.0 - share_other);
                let share_b = (1.0 - a) * (1.0 - share_other);
                regions.push(Region {
                    col,
                    row,
                    result: RegionResult {
                        share_a,
                        share_b,
                        share_other,
                        turnout: rng.gen_range(0.45..0.85),
                        votes: rng.gen_range(5_000..120_000),
                    },
                });
            }
        }

        let years = (FIRST_YEAR..=LAST_YEAR)
            .step_by(4)
            .map(|year| YearTotal { year, share_a: rng.gen_range(0.44..0.56) })
            .collect();

        Self { cols: GRID_COLS, rows: GRID_ROWS, regions, years }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = SampleElection::generate();
        let b = SampleElection::generate();
        assert_eq!(a.regions.len(), GRID_COLS * GRID_ROWS);
        for (ra, rb) in a.regions.iter().zip(&b.regions) {
            assert_eq!(ra.result, rb.result);
        }
    }

    #[test]
    fn test_shares_sum_to_one() {
        let election = SampleElection::generate();
        for region in &election.regions {
            let r = region.result;
            assert!((r.share_a + r.share_b + r.share_other - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_years_every_four() {
        let election = SampleElection::generate();
        let years: Vec<i32> = election.years.iter().map(|y| y.year).collect();
        assert_eq!(years.first(), Some(&1992));
        assert_eq!(years.last(), Some(&2024));
        assert!(years.windows(2).all(|w| w[1] - w[0] == 4));
    }
}
