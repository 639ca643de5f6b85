use derive_more::derive::{Deref, From};

use crate::{
	fit_single_tone, DecompositionError, FrequencyEstimator, Harmonic, ProjectionConfig,
};

/// The projected curve of one decomposition: index 0 is one step ahead of
/// the newest observed sample, increasing indices go further into the future.
#[derive(Debug, Clone, PartialEq, Deref, From)]
pub struct Forecast(Vec<f64>);

impl Forecast {
	#[must_use]
	pub fn into_inner(self) -> Vec<f64> {
		self.0
	}
}

/// The full model of one decomposition: the extracted components in
/// extraction order, plus the forward curve they sum to.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
	harmonics: Vec<Harmonic>,
	forecast: Forecast,
}

impl Decomposition {
	#[must_use]
	pub fn harmonics(&self) -> &[Harmonic] {
		&self.harmonics
	}

	#[must_use]
	pub fn forecast(&self) -> &Forecast {
		&self.forecast
	}

	#[must_use]
	pub fn into_forecast(self) -> Forecast {
		self.forecast
	}
}

/// Sequential multi-harmonic extraction over one window.
///
/// Each pass estimates the dominant tone of the residual (window minus the
/// running reconstruction), fits its coefficients in closed form, and
/// accumulates the component into both the reconstruction and the forward
/// curve. The reconstruction only exists to feed the next pass's residual;
/// it is never exposed.
#[derive(Debug, Clone)]
pub struct HarmonicDecomposer {
	config: ProjectionConfig,
	estimator: FrequencyEstimator,
	residual: Vec<f64>,
	reconstruction: Vec<f64>,
}

impl HarmonicDecomposer {
	#[must_use]
	pub fn new(config: ProjectionConfig) -> Self {
		Self {
			estimator: FrequencyEstimator::new(
				config.window_size(),
				config.tolerance(),
				config.max_iterations(),
			),
			residual: vec![0.0; config.window_size()],
			reconstruction: vec![0.0; config.window_size()],
			config,
		}
	}

	#[must_use]
	pub fn config(&self) -> &ProjectionConfig {
		&self.config
	}

	/// Decompose a most-recent-first window into harmonics and a forward
	/// curve of `forecast_steps` values.
	///
	/// # Errors
	/// [`DecompositionError`] if a pass fails to converge or its fit is
	/// singular. No partial result is returned.
	///
	/// # Panics
	/// - if the passed `window` is not compatible with the configured
	///   `window_size`.
	pub fn decompose(&mut self, window: &[f64]) -> Result<Decomposition, DecompositionError> {
		assert_eq!(
			window.len(),
			self.config.window_size(),
			"window with incompatible length received"
		);

		let mean = window.iter().sum::<f64>() / window.len() as f64;
		self.reconstruction.fill(mean);
		let mut forecast = vec![mean; self.config.forecast_steps()];

		// A residual whose energy sits at the rounding-noise floor of the
		// raw window is flat: the estimator's denominator would be exactly
		// or nearly zero there. The floor scales with ε²·Σx², times a
		// window-length factor for the accumulated summation error.
		let raw_energy: f64 = window.iter().map(|x| x * x).sum();
		let n = window.len() as f64;
		let flat_threshold = n * n * n * f64::EPSILON * f64::EPSILON * (1.0 + raw_energy);

		let mut harmonics = Vec::with_capacity(self.config.harmonics());
		for _ in 0..self.config.harmonics() {
			for (r, (&x, &pv)) in self
				.residual
				.iter_mut()
				.zip(window.iter().zip(self.reconstruction.iter()))
			{
				*r = x - pv;
			}

			let energy: f64 = self.residual.iter().map(|r| r * r).sum();
			let harmonic = if energy <= flat_threshold {
				let leftover = self.residual.iter().sum::<f64>() / window.len() as f64;
				Harmonic::new(0.0, leftover, 0.0, 0.0)
			} else {
				let angular_frequency = self.estimator.estimate(&self.residual)?;
				fit_single_tone(&self.residual, angular_frequency)?
			};

			for (i, pv) in self.reconstruction.iter_mut().enumerate() {
				*pv += harmonic.value_behind(i);
			}
			for (k, fv) in forecast.iter_mut().enumerate() {
				*fv += harmonic.value_ahead(k);
			}
			harmonics.push(harmonic);
		}

		Ok(Decomposition {
			harmonics,
			forecast: Forecast::from(forecast),
		})
	}
}
