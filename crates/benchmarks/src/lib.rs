//! Benchmark utilities for the denormal probe
pub mod utils {
    use denormal_probe::domain::{Regime, RegimeSet, SweepPlan};

    /// Iterations per benchmark sample. Short enough for criterion to
    /// repeat, long enough that a sustained-denormal chain dominates.
    pub const CHAIN_LENGTH: u64 = 10_000;

    /// The three compiled-in f32 regimes as `(label, initial, multiplier)`.
    pub fn single_regimes() -> Vec<(String, f32, f32)> {
        flatten(RegimeSet::<f32>::default().iter())
    }

    /// The three compiled-in f64 regimes as `(label, initial, multiplier)`.
    pub fn double_regimes() -> Vec<(String, f64, f64)> {
        flatten(RegimeSet::<f64>::default().iter())
    }

    pub fn single_sweeps() -> Vec<(String, f32, f32)> {
        flatten(SweepPlan::<f32>::default().decays.iter())
    }

    pub fn double_sweeps() -> Vec<(String, f64, f64)> {
        flatten(SweepPlan::<f64>::default().decays.iter())
    }

    fn flatten<'a, T: Copy + 'a>(
        regimes: impl Iterator<Item = &'a Regime<T>>,
    ) -> Vec<(String, T, T)> {
        regimes
            .map(|r| (r.label.clone(), r.initial, r.multiplier))
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_regime_inputs_match_defaults() {
            let single = single_regimes();
            assert_eq!(single.len(), 3);
            assert_eq!(single[0].0, "Normal Float");
            assert_eq!(double_regimes()[2].0, "Sustained Denormal");
            assert_eq!(single_sweeps().len(), 3);
            assert_eq!(double_sweeps().len(), 3);
        }
    }
}
