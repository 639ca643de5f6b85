#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionBuilderError {
	#[error("window size must be at least 3 samples")]
	WindowTooSmall,
	#[error("at least one forecast step is required")]
	NoForecastSteps,
	#[error("at least one harmonic is required")]
	NoHarmonics,
	#[error("convergence tolerance must be positive")]
	NonPositiveTolerance,
	#[error("at least one estimator iteration is required")]
	NoIterationBudget,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompositionError {
	#[error("frequency search did not settle within {limit} iterations")]
	IterationLimit { limit: usize },
	#[error("least-squares moments are singular")]
	SingularFit,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
	#[error("not enough samples observed yet")]
	NotReady,
	#[error(transparent)]
	Decomposition(#[from] DecompositionError),
}
