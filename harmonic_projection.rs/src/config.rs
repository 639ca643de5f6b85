use crate::ProjectionBuilderError;

pub const DEFAULT_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Validated parameters of one projection engine.
///
/// The window needs at least 3 samples: the recursive relation used by the
/// frequency estimator looks two samples back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
	window_size: usize,
	forecast_steps: usize,
	harmonics: usize,
	tolerance: f64,
	max_iterations: usize,
}

impl ProjectionConfig {
	/// # Errors
	/// [`ProjectionBuilderError`]
	pub fn new(
		window_size: usize,
		forecast_steps: usize,
		harmonics: usize,
		tolerance: f64,
		max_iterations: usize,
	) -> Result<Self, ProjectionBuilderError> {
		if window_size < 3 {
			return Err(ProjectionBuilderError::WindowTooSmall);
		}
		if forecast_steps < 1 {
			return Err(ProjectionBuilderError::NoForecastSteps);
		}
		if harmonics < 1 {
			return Err(ProjectionBuilderError::NoHarmonics);
		}
		if !tolerance.is_finite() || tolerance <= 0.0 {
			return Err(ProjectionBuilderError::NonPositiveTolerance);
		}
		if max_iterations < 1 {
			return Err(ProjectionBuilderError::NoIterationBudget);
		}
		Ok(Self {
			window_size,
			forecast_steps,
			harmonics,
			tolerance,
			max_iterations,
		})
	}

	/// The number of past samples each fit is computed from.
	#[must_use]
	pub const fn window_size(&self) -> usize {
		self.window_size
	}

	/// The number of future steps each projected curve spans.
	#[must_use]
	pub const fn forecast_steps(&self) -> usize {
		self.forecast_steps
	}

	/// The number of sequential extraction passes per fit.
	#[must_use]
	pub const fn harmonics(&self) -> usize {
		self.harmonics
	}

	#[must_use]
	pub const fn tolerance(&self) -> f64 {
		self.tolerance
	}

	#[must_use]
	pub const fn max_iterations(&self) -> usize {
		self.max_iterations
	}
}
