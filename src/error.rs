/// Why a weight vector was rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightError {
    Negative { index: usize, value: f64 },
    NotFinite { index: usize, value: f64 },
    ZeroSum,
}

/// Errors produced while building or sampling a distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistError {
    /// The weights cannot be normalized; no table was built.
    InvalidWeights(WeightError),
    /// Sampling was requested from a distribution with no outcomes.
    EmptyDistribution,
}

impl From<WeightError> for DistError {
    fn from(err: WeightError) -> Self {
        DistError::InvalidWeights(err)
    }
}

impl std::fmt::Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightError::Negative { index, value } => {
                write!(f, "negative weight at index {index}: {value}")
            }
            WeightError::NotFinite { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            WeightError::ZeroSum => write!(f, "sum of weights is zero or not finite"),
        }
    }
}

impl std::fmt::Display for DistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistError::InvalidWeights(err) => write!(f, "invalid weights: {err}"),
            DistError::EmptyDistribution => {
                write!(f, "cannot sample from a distribution with no outcomes")
            }
        }
    }
}

impl std::error::Error for WeightError {}

impl std::error::Error for DistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DistError::InvalidWeights(err) => Some(err),
            DistError::EmptyDistribution => None,
        }
    }
}
