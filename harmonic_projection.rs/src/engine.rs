use series_window::SampleWindow;

use crate::{
	Decomposition, Forecast, HarmonicDecomposer, ProjectionBuilderError, ProjectionConfig,
	ProjectionError, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};

#[derive(Debug, Clone)]
pub struct ProjectionEngineBuilder {
	window_size: usize,
	forecast_steps: usize,
	harmonics: usize,
	tolerance: f64,
	max_iterations: usize,
}

impl ProjectionEngineBuilder {
	#[must_use]
	pub fn new(window_size: usize, forecast_steps: usize, harmonics: usize) -> Self {
		Self {
			window_size,
			forecast_steps,
			harmonics,
			tolerance: DEFAULT_TOLERANCE,
			max_iterations: DEFAULT_MAX_ITERATIONS,
		}
	}

	#[must_use]
	pub fn with_tolerance(mut self, tolerance: f64) -> Self {
		self.tolerance = tolerance;
		self
	}

	#[must_use]
	pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
		self.max_iterations = max_iterations;
		self
	}

	/// # Errors
	/// [`ProjectionBuilderError`]
	pub fn build(&self) -> Result<ProjectionEngine, ProjectionBuilderError> {
		let config = ProjectionConfig::new(
			self.window_size,
			self.forecast_steps,
			self.harmonics,
			self.tolerance,
			self.max_iterations,
		)?;
		Ok(ProjectionEngine {
			window: SampleWindow::new(config.window_size()),
			decomposer: HarmonicDecomposer::new(config),
		})
	}
}

/// The per-sample entry point: feed chronologically ordered samples, get a
/// continuously revised forward curve.
///
/// Every invocation recomputes the full model from the current window alone;
/// no harmonic state or convergence history survives a call. The projected
/// curve is therefore overwritten ("repainted") for the same relative future
/// offsets on every new observation, and a failed invocation leaves the next
/// one unaffected.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
	window: SampleWindow<f64>,
	decomposer: HarmonicDecomposer,
}

impl ProjectionEngine {
	#[must_use]
	pub fn builder(
		window_size: usize,
		forecast_steps: usize,
		harmonics: usize,
	) -> ProjectionEngineBuilder {
		ProjectionEngineBuilder::new(window_size, forecast_steps, harmonics)
	}

	#[must_use]
	pub fn config(&self) -> &ProjectionConfig {
		self.decomposer.config()
	}

	/// Whether `window_size` samples have been observed.
	#[must_use]
	pub fn is_ready(&self) -> bool {
		self.window.is_ready()
	}

	/// Feed one new chronologically ordered sample.
	///
	/// Returns `Ok(None)` while the window is still warming up, the refreshed
	/// forward curve once it is full.
	///
	/// # Errors
	/// [`ProjectionError::Decomposition`] if this invocation's fit fails; the
	/// sample is still retained in the window.
	pub fn observe(&mut self, sample: f64) -> Result<Option<Forecast>, ProjectionError> {
		self.window.push(sample);
		match self.forecast() {
			Ok(forecast) => Ok(Some(forecast)),
			Err(ProjectionError::NotReady) => Ok(None),
			Err(e) => Err(e),
		}
	}

	/// Recompute the forward curve from the current window.
	///
	/// # Errors
	/// - [`ProjectionError::NotReady`] while fewer than `window_size` samples
	///   have been observed.
	/// - [`ProjectionError::Decomposition`] if the fit fails; nothing partial
	///   is returned.
	pub fn forecast(&mut self) -> Result<Forecast, ProjectionError> {
		Ok(self.decompose()?.into_forecast())
	}

	/// Recompute the full model (harmonics and forward curve) from the
	/// current window, for inspection.
	///
	/// # Errors
	/// As for [`ProjectionEngine::forecast`].
	pub fn decompose(&mut self) -> Result<Decomposition, ProjectionError> {
		let window = self.window.snapshot().ok_or(ProjectionError::NotReady)?;
		Ok(self.decomposer.decompose(&window)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_ready_until_window_is_full() {
		let mut engine = ProjectionEngine::builder(8, 3, 1).build().unwrap();
		for i in 0..7 {
			assert_eq!(engine.observe(f64::from(i) + 1.0), Ok(None), "sample {i}");
			assert!(!engine.is_ready());
			assert_eq!(engine.forecast(), Err(ProjectionError::NotReady));
		}
		let forecast = engine.observe(8.0).unwrap().unwrap();
		assert!(engine.is_ready());
		assert_eq!(forecast.len(), 3);
		for &fv in forecast.iter() {
			assert!(fv.is_finite());
		}
	}

	#[test]
	fn test_forecast_is_idempotent() {
		let mut engine = ProjectionEngine::builder(16, 4, 2).build().unwrap();
		for i in 0..16 {
			let _ = engine.observe(10.0 + (0.9 * f64::from(i)).cos()).unwrap();
		}
		let first = engine.forecast().unwrap();
		let second = engine.forecast().unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_identical_engines_are_deterministic() {
		let samples: Vec<f64> = (0..32).map(|i| 10.0 + (0.7 * f64::from(i)).cos()).collect();

		let mut a = ProjectionEngine::builder(24, 5, 2).build().unwrap();
		let mut b = ProjectionEngine::builder(24, 5, 2).build().unwrap();
		let mut last = None;
		for &sample in &samples {
			let fa = a.observe(sample).unwrap();
			let fb = b.observe(sample).unwrap();
			assert_eq!(fa, fb);
			last = fa;
		}
		assert!(last.is_some());
	}

	#[test]
	fn test_constant_stream_projects_the_constant() {
		let mut engine = ProjectionEngine::builder(8, 3, 2).build().unwrap();
		let mut forecast = None;
		for _ in 0..12 {
			forecast = engine.observe(42.0).unwrap();
		}
		for &fv in forecast.unwrap().iter() {
			assert!((fv - 42.0).abs() < 1e-9);
		}
	}

	#[test]
	fn test_ramp_scenario_yields_finite_forecast() {
		// Chronological 1..=8 becomes the most-recent-first window
		// [8, 7, .., 1]; the trend has no true tone but must still fit.
		let mut engine = ProjectionEngine::builder(8, 3, 1).build().unwrap();
		let mut forecast = None;
		for i in 1..=8 {
			forecast = engine.observe(f64::from(i)).unwrap();
		}
		let forecast = forecast.unwrap();
		assert_eq!(forecast.len(), 3);
		for &fv in forecast.iter() {
			assert!(fv.is_finite());
		}
	}

	#[test]
	fn test_window_slides_with_the_stream() {
		// After more than window_size samples, only the most recent ones
		// drive the fit: a constant tail projects the constant even when
		// older samples differed.
		let mut engine = ProjectionEngine::builder(8, 2, 1).build().unwrap();
		let mut forecast = None;
		for i in 0..4 {
			forecast = engine.observe(f64::from(i)).unwrap();
		}
		for _ in 0..8 {
			forecast = engine.observe(5.0).unwrap();
		}
		for &fv in forecast.unwrap().iter() {
			assert!((fv - 5.0).abs() < 1e-9);
		}
	}

	#[test]
	fn test_invalid_configurations_fail_at_build() {
		assert_eq!(
			ProjectionEngine::builder(2, 3, 1).build().err(),
			Some(ProjectionBuilderError::WindowTooSmall)
		);
		assert_eq!(
			ProjectionEngine::builder(8, 0, 1).build().err(),
			Some(ProjectionBuilderError::NoForecastSteps)
		);
		assert_eq!(
			ProjectionEngine::builder(8, 3, 0).build().err(),
			Some(ProjectionBuilderError::NoHarmonics)
		);
		assert_eq!(
			ProjectionEngine::builder(8, 3, 1)
				.with_tolerance(0.0)
				.build()
				.err(),
			Some(ProjectionBuilderError::NonPositiveTolerance)
		);
		assert_eq!(
			ProjectionEngine::builder(8, 3, 1)
				.with_max_iterations(0)
				.build()
				.err(),
			Some(ProjectionBuilderError::NoIterationBudget)
		);
	}

	#[test]
	fn test_failed_invocation_does_not_poison_the_next() {
		// One refinement with an untight tolerance fails on a two-tone
		// window; once the window slides onto a constant tail the engine
		// recovers by itself.
		let mut engine = ProjectionEngine::builder(16, 2, 1)
			.with_tolerance(1e-12)
			.with_max_iterations(1)
			.build()
			.unwrap();
		for i in 0..15 {
			let t = f64::from(i);
			assert_eq!(engine.observe((0.5 * t).cos() + 0.8 * (1.7 * t).cos()), Ok(None));
		}
		assert!(engine.observe(1.0).is_err());

		// Intermediate windows still mix the old tones and may keep failing;
		// the final all-constant window must succeed on its own.
		let mut forecast = Err(ProjectionError::NotReady);
		for _ in 0..16 {
			forecast = engine.observe(7.0).map(Option::unwrap);
		}
		for &fv in forecast.unwrap().iter() {
			assert!((fv - 7.0).abs() < 1e-9);
		}
	}

	#[test]
	fn test_forecast_is_repainted_on_each_observation() {
		let mut engine = ProjectionEngine::builder(16, 3, 1).build().unwrap();
		let mut previous = None;
		for i in 0..24 {
			let sample = 10.0 + 2.0 * (0.4 * f64::from(i)).cos();
			if let Some(current) = engine.observe(sample).unwrap() {
				if let Some(previous) = previous.take() {
					assert_ne!(current, previous);
				}
				previous = Some(current);
			}
		}
	}
}
