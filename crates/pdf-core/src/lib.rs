#![deny(missing_docs)]
#![doc = "Parton density container that delegates evaluation to a pluggable PDF model."]

pub mod errors;
mod pdf;
mod types;

pub use errors::{ErrorInfo, PdfError};
pub use pdf::Pdf;
pub use types::{Flavour, PdfBundle};

/// Computes all nine parton densities at a kinematic point.
///
/// Implementations own any domain validation, model selection and
/// configuration. The [`Pdf`] container treats them as opaque: it performs no
/// caching, retries or sanity checks on the returned bundle.
pub trait PdfModel: Send + Sync {
    /// Evaluates the densities at Bjorken-x `x` and momentum transfer `q2`.
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError>;

    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "unnamed"
    }
}

impl<T> PdfModel for &T
where
    T: PdfModel + ?Sized,
{
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        (**self).all_pdfs(x, q2)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T> PdfModel for Box<T>
where
    T: PdfModel + ?Sized,
{
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        (**self).all_pdfs(x, q2)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
