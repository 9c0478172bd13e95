//! Structured error types shared by the container and its models.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Diagnostic payload carried by every [`PdfError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code, e.g. `model-not-set` or `x-out-of-range`.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Rendered inputs at the failure: `x`, `q2`, window bounds, model name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to avoid the failure, when there is an obvious remedy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a payload without context.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `value` under `key`, rendered with `Display`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Records the kinematic point being evaluated.
    pub fn with_kinematics(self, x: f64, q2: f64) -> Self {
        self.with_context("x", x).with_context("q2", q2)
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for PDF evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum PdfError {
    /// `calculate` was called before a model was attached.
    #[error("model not set: {0}")]
    ModelNotSet(ErrorInfo),
    /// Kinematic inputs fall outside the domain a model accepts.
    #[error("kinematics error: {0}")]
    Kinematics(ErrorInfo),
    /// Failure raised by a model while evaluating densities.
    #[error("model error: {0}")]
    Model(ErrorInfo),
    /// Invalid model options.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    /// `message [code] (k=v, ...); hint: ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.message, self.code)?;
        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in pairs {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, "; hint: {hint}")?;
        }
        Ok(())
    }
}

impl PdfError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            PdfError::ModelNotSet(info)
            | PdfError::Kinematics(info)
            | PdfError::Model(info)
            | PdfError::Config(info) => info,
        }
    }

    /// Error returned by [`crate::Pdf::calculate`] when no model is attached.
    pub fn model_not_set(x: f64, q2: f64) -> Self {
        PdfError::ModelNotSet(
            ErrorInfo::new("model-not-set", "no PDF model attached to container")
                .with_kinematics(x, q2)
                .with_hint("call Pdf::set_model before Pdf::calculate"),
        )
    }
}
