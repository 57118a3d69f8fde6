//! Length-based filters on sentence windows.
use super::Filter;
use crate::config::TripletConfig;
use crate::triplets::types::{mean_length, relative_deviation};

/// Mean length filter.
/// Returns `true` if the mean length of the window is within
/// `[min, max]` (inclusive) unicode codepoints.
///
/// Default bounds are `[30, 100]`.
#[derive(Debug, Clone)]
pub struct MeanLength {
    min: usize,
    max: usize,
}

impl MeanLength {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }
}

impl Filter<&[usize]> for MeanLength {
    fn detect(&self, lengths: &[usize]) -> bool {
        match mean_length(lengths) {
            Some(mean) => mean >= self.min as f64 && mean <= self.max as f64,
            None => false,
        }
    }
}

impl Default for MeanLength {
    fn default() -> Self {
        let c = TripletConfig::default();
        Self::new(c.min_l_sent, c.max_l_sent)
    }
}

/// Uniformity filter: every length of the window must be within
/// a relative deviation of `k` from the window mean.
///
/// `k` is 0.2 by default.
#[derive(Debug, Clone)]
pub struct Uniformity {
    k: f64,
}

impl Uniformity {
    pub fn new(k: f64) -> Self {
        Self { k }
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// checks a single length against an already known mean.
    pub fn accepts(&self, length: usize, mean: f64) -> bool {
        relative_deviation(length, mean) <= self.k
    }
}

impl Filter<&[usize]> for Uniformity {
    fn detect(&self, lengths: &[usize]) -> bool {
        match mean_length(lengths) {
            Some(mean) => lengths.iter().all(|l| self.accepts(*l, mean)),
            None => false,
        }
    }
}

impl Default for Uniformity {
    fn default() -> Self {
        Self::new(TripletConfig::default().k)
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, MeanLength, Uniformity};

    #[test]
    fn mean_default() {
        let f = MeanLength::default();
        assert_eq!(f.min(), 30);
        assert_eq!(f.max(), 100);

        // bounds are inclusive
        assert!(f.detect(&[30, 30, 30][..]));
        assert!(f.detect(&[100, 100, 100][..]));
        assert!(f.detect(&[40, 45, 42][..]));
        assert!(!f.detect(&[29, 30, 30][..]));
        assert!(!f.detect(&[101, 101, 101][..]));
        assert!(!f.detect(&[][..]));
    }

    #[test]
    fn mean_in_bounds_but_not_uniform() {
        // mean is 93: within bounds, but 200 is too far from it
        let window = &[200, 38, 41][..];
        assert!(MeanLength::default().detect(window));
        assert!(!Uniformity::default().detect(window));
    }

    #[test]
    fn uniformity_default() {
        let f = Uniformity::default();
        assert_eq!(f.k(), 0.2);

        assert!(f.detect(&[40, 45, 42][..]));
        assert!(!f.detect(&[40, 45, 80][..]));
        assert!(!f.detect(&[0, 0, 0][..]));
        assert!(!f.detect(&[][..]));
    }

    #[test]
    fn uniformity_single() {
        let f = Uniformity::new(0.2);
        assert!(f.accepts(48, 40.0));
        assert!(!f.accepts(49, 40.0));
        assert!(f.accepts(32, 40.0));
        assert!(!f.accepts(31, 40.0));
        assert!(!f.accepts(10, 0.0));
    }
}
