//! Mean-distance estimation over a simulated stellar population

use rand::Rng;
use rand_distr::StandardNormal;
use std::time::Instant;

/// Result of an estimation run. `elapsed_ms` covers the mean computation
/// only, not sample generation.
#[derive(Debug, Clone, Copy)]
pub struct Estimate {
    pub mean: f64,
    pub elapsed_ms: f64,
}

/// A simulated population of stars at a common true distance, observed with
/// fractional Gaussian noise
pub struct StellarPopulation {
    distance: f64,
    observed: Vec<f64>,
    ids: Vec<String>,
}

impl StellarPopulation {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            observed: Vec::new(),
            ids: Vec::new(),
        }
    }

    /// Generate `count` observations, each
    /// `distance + rms_error * distance * z` with `z` standard normal
    pub fn generate<R: Rng>(&mut self, count: usize, rms_error: f64, rng: &mut R) {
        self.observed = (0..count)
            .map(|_| {
                let z: f64 = rng.sample(StandardNormal);
                self.distance + rms_error * self.distance * z
            })
            .collect();
        self.ids = (0..count).map(|i| format!("star_{}", i)).collect();
    }

    /// Arithmetic mean of the observed distances, with the wall-clock time
    /// the computation took
    pub fn estimate(&self) -> Estimate {
        let start = Instant::now();
        let mean = self.observed.iter().sum::<f64>() / self.observed.len() as f64;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        Estimate { mean, elapsed_ms }
    }

    pub fn true_distance(&self) -> f64 {
        self.distance
    }

    pub fn observed(&self) -> &[f64] {
        &self.observed
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}
