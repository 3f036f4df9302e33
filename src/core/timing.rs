use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use super::execution::config::{check_range, ConfigError, SimulationConfig};

/// Source of the random durations that drive the clock
pub trait TimingModel {
    /// Gap between one arrival and the next
    fn inter_arrival(&mut self) -> u64;

    /// How long the cashier spends on one customer
    fn service_duration(&mut self) -> u64;
}

/// Uniform inter-arrival and service times from a seeded RNG
#[derive(Debug)]
pub struct UniformTiming {
    arrivals: Uniform<u64>,
    services: Uniform<u64>,
    rng: StdRng,
}

impl UniformTiming {
    /// Build from inclusive ranges. `seed: None` draws the seed from OS entropy.
    pub fn new(
        arrival: (u64, u64),
        service: (u64, u64),
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        check_range("arrival interval", arrival)?;
        check_range("service duration", service)?;
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            arrivals: Uniform::new_inclusive(arrival.0, arrival.1),
            services: Uniform::new_inclusive(service.0, service.1),
            rng,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.arrival_interval,
            config.service_duration,
            config.random_seed,
        )
    }
}

impl TimingModel for UniformTiming {
    fn inter_arrival(&mut self) -> u64 {
        self.arrivals.sample(&mut self.rng)
    }

    fn service_duration(&mut self) -> u64 {
        self.services.sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_range() {
        let mut timing = UniformTiming::new((0, 3), (1, 5), Some(7)).unwrap();
        for _ in 0..1000 {
            assert!(timing.inter_arrival() <= 3);
            let service = timing.service_duration();
            assert!((1..=5).contains(&service));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut a = UniformTiming::new((0, 3), (1, 5), Some(42)).unwrap();
        let mut b = UniformTiming::new((0, 3), (1, 5), Some(42)).unwrap();
        for _ in 0..100 {
            assert_eq!(a.inter_arrival(), b.inter_arrival());
            assert_eq!(a.service_duration(), b.service_duration());
        }
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        assert_eq!(
            UniformTiming::new((3, 0), (1, 5), Some(1)).err(),
            Some(ConfigError::InvalidRange { name: "arrival interval", min: 3, max: 0 })
        );
        assert_eq!(
            UniformTiming::new((0, 3), (6, 2), None).err(),
            Some(ConfigError::InvalidRange { name: "service duration", min: 6, max: 2 })
        );
    }

    #[test]
    fn test_covers_whole_range() {
        let mut timing = UniformTiming::new((0, 3), (1, 5), Some(1)).unwrap();
        let mut seen = [false; 4];
        for _ in 0..1000 {
            seen[timing.inter_arrival() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
