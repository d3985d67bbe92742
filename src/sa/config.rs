//! Annealed search configuration.

/// Configuration for the annealed search.
///
/// # Examples
///
/// ```
/// use gridroute::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.95)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied every iteration.
    pub cooling_rate: f64,

    /// Hard iteration cap.
    pub max_iterations: usize,

    /// Temperature floor. The search stops once the temperature drops
    /// below this value.
    pub min_temperature: f64,

    /// Number of random orthogonal probes the perturbation tries before
    /// giving up on an iteration.
    pub perturb_attempts: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            max_iterations: 500,
            min_temperature: 1.0,
            perturb_attempts: 3,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_perturb_attempts(mut self, n: usize) -> Self {
        self.perturb_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.perturb_attempts == 0 {
            return Err("perturb_attempts must be at least 1".into());
        }
        Ok(())
    }
}
