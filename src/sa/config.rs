//! Annealing parameters.

/// Configuration for one simulated-annealing run.
///
/// Defaults match the engine's traditional settings: 120 000 iterations,
/// initial temperature 500 with geometric cooling factor 0.9997, and an
/// early stop as soon as a zero-cost timetable is found.
///
/// # Examples
///
/// ```
/// use timegrid::sa::SaConfig;
///
/// let sa = SaConfig::default()
///     .with_max_iterations(50_000)
///     .with_initial_temperature(300.0)
///     .with_cooling_factor(0.999)
///     .with_seed(42);
/// assert!(sa.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Hard iteration budget.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves
    /// early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied after every iteration.
    pub cooling_factor: f64,

    /// The loop stops once temperature decays to this floor or below.
    pub min_temperature: f64,

    /// Stop as soon as the best cost reaches exactly 0.
    pub stop_on_zero_cost: bool,

    /// Invoke the progress callback every this many iterations.
    /// 0 disables progress reporting entirely.
    pub progress_interval: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 120_000,
            initial_temperature: 500.0,
            cooling_factor: 0.9997,
            min_temperature: 1e-8,
            stop_on_zero_cost: true,
            progress_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_factor(mut self, alpha: f64) -> Self {
        self.cooling_factor = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_stop_on_zero_cost(mut self, stop: bool) -> Self {
        self.stop_on_zero_cost = stop;
        self
    }

    pub fn with_progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.cooling_factor <= 0.0 || self.cooling_factor >= 1.0 {
            return Err(format!(
                "cooling_factor must be in (0, 1), got {}",
                self.cooling_factor
            ));
        }
        Ok(())
    }
}
