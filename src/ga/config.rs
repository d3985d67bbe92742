//! Population search configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::seeding;

/// Configuration for the population search.
///
/// # Defaults
///
/// ```
/// use gridroute::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gridroute::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of candidate routes in the population.
    pub population_size: usize,

    /// Maximum number of generations before giving up.
    pub max_generations: usize,

    /// Probability of mutating an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Length cap for seeded random walks.
    pub max_route_len: usize,

    /// Probability that a random-walk step goes to the neighbor closest
    /// to the goal rather than a uniformly random one (0.0–1.0).
    pub greedy_bias: f64,

    /// Fraction of the population preserved unchanged each generation
    /// (0.0–1.0).
    pub elite_ratio: f64,

    /// A goal-terminated best candidate with fitness below this value is
    /// accepted immediately, ending the run early.
    pub accept_threshold: f64,

    /// Weight on the best candidate's remaining Manhattan distance to the
    /// goal. Large enough that reaching the goal at all dominates route
    /// quality among non-terminating candidates.
    pub goal_distance_weight: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 10,
            mutation_rate: 0.1,
            max_route_len: seeding::MAX_WALK_LEN,
            greedy_bias: seeding::GREEDY_BIAS,
            elite_ratio: 0.1,
            accept_threshold: 1000.0,
            goal_distance_weight: 50.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random-walk length cap.
    pub fn with_max_route_len(mut self, len: usize) -> Self {
        self.max_route_len = len;
        self
    }

    /// Sets the greedy step bias of the random-walk seeder.
    pub fn with_greedy_bias(mut self, bias: f64) -> Self {
        self.greedy_bias = bias.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the early-acceptance fitness threshold.
    pub fn with_accept_threshold(mut self, threshold: f64) -> Self {
        self.accept_threshold = threshold;
        self
    }

    /// Sets the goal-distance fitness weight.
    pub fn with_goal_distance_weight(mut self, weight: f64) -> Self {
        self.goal_distance_weight = weight;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.max_route_len < 2 {
            return Err("max_route_len must be at least 2".into());
        }
        let elite_count = (self.population_size as f64 * self.elite_ratio) as usize;
        if elite_count >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if self.accept_threshold <= 0.0 {
            return Err("accept_threshold must be positive".into());
        }
        if self.goal_distance_weight <= 0.0 {
            return Err("goal_distance_weight must be positive".into());
        }
        Ok(())
    }
}
