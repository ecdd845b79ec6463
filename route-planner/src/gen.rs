use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::{record::Record, Cost};

pub struct CostConfig {
    min: Cost,
    max: Cost,
}

impl Default for CostConfig {
    fn default() -> Self {
        CostConfig {
            min: 1.into(),
            max: 2000.into(),
        }
    }
}

/// Generates random route instances over the locations `L0..L{n-1}`.
///
/// Every instance contains the chain `L0 - L1 - ... - L{n-1}`, so at least one route exists. Further
/// distinct pairs are added until `density` of all `n(n-1)/2` pairs are connected.
pub struct RandomRecordGenerator<R> {
    n: usize,
    density: f64,
    cost_config: CostConfig,
    rng: R,
}

impl RandomRecordGenerator<ThreadRng> {
    pub fn default_costs(n: usize, density: f64) -> Self {
        Self::with_rng(n, density, rand::thread_rng())
    }
}

impl<R: Rng> RandomRecordGenerator<R> {
    pub fn with_rng(n: usize, density: f64, rng: R) -> Self {
        RandomRecordGenerator {
            n,
            density: density.clamp(0.0, 1.0),
            cost_config: CostConfig::default(),
            rng,
        }
    }

    /// Distances are drawn from `min..=max`. A `max` below `min` is raised to `min`.
    pub fn with_costs(mut self, min: Cost, max: Cost) -> Self {
        self.cost_config = CostConfig {
            min,
            max: max.max(min),
        };
        self
    }

    fn random_cost(&mut self) -> Cost {
        self.rng
            .gen_range(self.cost_config.min..=self.cost_config.max)
    }

    fn record(&mut self, source: usize, sink: usize) -> Record {
        let distance = self.random_cost();
        Record::new(location_name(source), location_name(sink), distance)
    }
}

pub fn location_name(i: usize) -> String {
    format!("L{}", i)
}

impl<R: Rng> Iterator for RandomRecordGenerator<R> {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.n;
        let mut records = vec![];
        for (n1, n2) in (0..n.saturating_sub(1)).zip(1..n) {
            records.push(self.record(n1, n2));
        }

        let mut free_pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 2..n).map(move |j| (i, j)))
            .collect();
        free_pairs.shuffle(&mut self.rng);

        let all_pairs = n * n.saturating_sub(1) / 2;
        let target = (self.density * all_pairs as f64).ceil() as usize;
        for (n1, n2) in free_pairs {
            if records.len() >= target {
                break;
            }
            let record = self.record(n1, n2);
            records.push(if self.rng.gen_bool(0.5) {
                record.reversed()
            } else {
                record
            });
        }

        Some(records)
    }
}
