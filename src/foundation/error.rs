/// Convenience result type used across slidetype.
pub type SlidetypeResult<T> = Result<T, SlidetypeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// `Input` and `Decode` are per-slide failures a batch caller can skip. `InternalLayout` is
/// always a defect in the engine itself.
#[derive(thiserror::Error, Debug)]
pub enum SlidetypeError {
    /// A mandatory request field is missing or empty.
    #[error("input error: {field}: {message}")]
    Input {
        /// Dotted path of the offending request field.
        field: &'static str,
        /// Human-readable description.
        message: String,
    },

    /// Background bytes could not be decoded as a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Scene/raster invariants were violated.
    #[error("internal layout error: {0}")]
    InternalLayout(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlidetypeError {
    /// Build a [`SlidetypeError::Input`] value.
    pub fn input(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Input {
            field,
            message: msg.into(),
        }
    }

    /// Build a [`SlidetypeError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SlidetypeError::InternalLayout`] value.
    pub fn internal_layout(msg: impl Into<String>) -> Self {
        Self::InternalLayout(msg.into())
    }

    /// Whether the failure is scoped to one slide's inputs (safe to skip in a batch).
    pub fn is_per_slide(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Decode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
