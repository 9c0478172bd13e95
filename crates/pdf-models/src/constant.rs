use pdf_core::{PdfBundle, PdfError, PdfModel};
use serde::{Deserialize, Serialize};

/// Returns the same bundle for every kinematic point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantModel {
    /// Densities reported for every `(x, q2)`.
    pub bundle: PdfBundle,
}

impl ConstantModel {
    /// Creates a model reporting `bundle` everywhere.
    pub fn new(bundle: PdfBundle) -> Self {
        Self { bundle }
    }
}

impl PdfModel for ConstantModel {
    fn all_pdfs(&self, _x: f64, _q2: f64) -> Result<PdfBundle, PdfError> {
        Ok(self.bundle)
    }

    fn name(&self) -> &str {
        "constant"
    }
}

/// Adapts a closure into a [`PdfModel`].
pub struct FnModel<F> {
    name: String,
    func: F,
}

impl<F> FnModel<F>
where
    F: Fn(f64, f64) -> Result<PdfBundle, PdfError> + Send + Sync,
{
    /// Wraps `func` under the diagnostic name `name`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> PdfModel for FnModel<F>
where
    F: Fn(f64, f64) -> Result<PdfBundle, PdfError> + Send + Sync,
{
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        (self.func)(x, q2)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> std::fmt::Debug for FnModel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnModel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
