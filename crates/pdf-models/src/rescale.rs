use pdf_core::errors::ErrorInfo;
use pdf_core::{PdfBundle, PdfError, PdfModel};
use serde::{Deserialize, Serialize};

fn default_factor() -> f64 {
    1.0
}

/// Factors applied by a [`RescaledModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RescaleOpts {
    /// Multiplier for the up and down valence densities.
    #[serde(default = "default_factor")]
    pub valence_factor: f64,
    /// Multiplier for the sea, heavy flavour and gluon densities.
    #[serde(default = "default_factor")]
    pub sea_factor: f64,
}

impl Default for RescaleOpts {
    fn default() -> Self {
        Self {
            valence_factor: default_factor(),
            sea_factor: default_factor(),
        }
    }
}

impl RescaleOpts {
    /// Rejects non-finite factors. Zero and negative factors are allowed.
    pub fn validate(&self) -> Result<(), PdfError> {
        for (key, factor) in [
            ("valence_factor", self.valence_factor),
            ("sea_factor", self.sea_factor),
        ] {
            if !factor.is_finite() {
                return Err(PdfError::Config(
                    ErrorInfo::new("factor-not-finite", "rescale factor must be finite")
                        .with_context(key, factor),
                ));
            }
        }
        Ok(())
    }
}

/// Rescales another model's output with the container's valence/sea grouping.
#[derive(Debug, Clone)]
pub struct RescaledModel<M> {
    inner: M,
    opts: RescaleOpts,
}

impl<M: PdfModel> RescaledModel<M> {
    /// Wraps `inner`, failing with [`PdfError::Config`] if `opts` are invalid.
    pub fn new(inner: M, opts: RescaleOpts) -> Result<Self, PdfError> {
        opts.validate()?;
        Ok(Self { inner, opts })
    }

    /// Active factors.
    pub fn opts(&self) -> &RescaleOpts {
        &self.opts
    }
}

impl<M: PdfModel> PdfModel for RescaledModel<M> {
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        let mut bundle = self.inner.all_pdfs(x, q2)?;
        bundle.scale_valence(self.opts.valence_factor);
        bundle.scale_sea(self.opts.sea_factor);
        Ok(bundle)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
