use jsonsample_schema::ModelError;
use thiserror::Error;

/// Errors that abort sample generation
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Reference depth of '{type_name}' exceeds the limit of {limit}: the type is nested too deeply or references itself")]
    RecursionLimitExceeded { limit: usize, type_name: String },

    #[error("Cyclic type reference: {}", path.join(" → "))]
    CyclicReference { path: Vec<String> },

    #[error("Class '{0}' not found in type model")]
    ClassNotFound(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to serialize sample: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type SampleResult<T> = Result<T, SampleError>;
