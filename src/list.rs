//! Random starting lists

use crate::config::ConfigError;
use rand::Rng;

/// Shape of the lists to generate: `length` values in `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpec {
    length: usize,
    min: i64,
    max: i64,
}

impl ListSpec {
    pub fn new(length: usize, min: i64, max: i64) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(ListSpec { length, min, max })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<i64> {
        generate_starting_list(rng, self.length, self.min, self.max)
    }
}

impl Default for ListSpec {
    fn default() -> Self {
        ListSpec {
            length: 50,
            min: 0,
            max: 100,
        }
    }
}

/// `length` independent uniform values in `min..=max`. Duplicates are expected.
///
/// Callers must ensure `min <= max`; [`ListSpec`] enforces this.
pub fn generate_starting_list<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    min: i64,
    max: i64,
) -> Vec<i64> {
    (0..length).map(|_| rng.gen_range(min..=max)).collect()
}
