use pdf_core::errors::ErrorInfo;
use pdf_core::{PdfBundle, PdfError, PdfModel};
use serde::{Deserialize, Serialize};

fn default_x_min() -> f64 {
    1e-9
}

fn default_x_max() -> f64 {
    1.0
}

fn default_q2_min() -> f64 {
    0.8
}

fn default_q2_max() -> f64 {
    1e6
}

/// Inclusive kinematic window accepted by a [`KinematicGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicLimits {
    /// Smallest accepted Bjorken-x.
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    /// Largest accepted Bjorken-x.
    #[serde(default = "default_x_max")]
    pub x_max: f64,
    /// Smallest accepted momentum transfer squared (GeV^2).
    #[serde(default = "default_q2_min")]
    pub q2_min: f64,
    /// Largest accepted momentum transfer squared (GeV^2).
    #[serde(default = "default_q2_max")]
    pub q2_max: f64,
}

impl Default for KinematicLimits {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            q2_min: default_q2_min(),
            q2_max: default_q2_max(),
        }
    }
}

impl KinematicLimits {
    /// Checks that both windows are finite and ordered.
    pub fn validate(&self) -> Result<(), PdfError> {
        let bounds = [self.x_min, self.x_max, self.q2_min, self.q2_max];
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(self.config_error("limits-not-finite", "kinematic limits must be finite"));
        }
        if self.x_min > self.x_max {
            return Err(self.config_error("x-window-inverted", "x_min exceeds x_max"));
        }
        if self.q2_min > self.q2_max {
            return Err(self.config_error("q2-window-inverted", "q2_min exceeds q2_max"));
        }
        Ok(())
    }

    /// Whether `(x, q2)` lies inside the window. NaN is never inside.
    pub fn contains(&self, x: f64, q2: f64) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.q2_min..=self.q2_max).contains(&q2)
    }

    fn config_error(&self, code: &str, message: &str) -> PdfError {
        PdfError::Config(self.annotate(ErrorInfo::new(code, message)))
    }

    fn annotate(&self, info: ErrorInfo) -> ErrorInfo {
        info.with_context("x_min", self.x_min)
            .with_context("x_max", self.x_max)
            .with_context("q2_min", self.q2_min)
            .with_context("q2_max", self.q2_max)
    }
}

/// Rejects kinematic points outside [`KinematicLimits`] before delegating.
#[derive(Debug, Clone)]
pub struct KinematicGuard<M> {
    inner: M,
    limits: KinematicLimits,
}

impl<M: PdfModel> KinematicGuard<M> {
    /// Wraps `inner`, failing with [`PdfError::Config`] if `limits` are invalid.
    pub fn new(inner: M, limits: KinematicLimits) -> Result<Self, PdfError> {
        limits.validate()?;
        Ok(Self { inner, limits })
    }

    /// Active limits.
    pub fn limits(&self) -> &KinematicLimits {
        &self.limits
    }

    /// Wrapped model.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: PdfModel> PdfModel for KinematicGuard<M> {
    fn all_pdfs(&self, x: f64, q2: f64) -> Result<PdfBundle, PdfError> {
        if !self.limits.contains(x, q2) {
            let code = if (self.limits.x_min..=self.limits.x_max).contains(&x) {
                "q2-out-of-range"
            } else {
                "x-out-of-range"
            };
            tracing::debug!(model = self.inner.name(), x, q2, code, "rejected kinematics");
            let info = self
                .limits
                .annotate(ErrorInfo::new(code, "kinematic point outside model domain"))
                .with_kinematics(x, q2)
                .with_context("model", self.inner.name());
            return Err(PdfError::Kinematics(info));
        }
        self.inner.all_pdfs(x, q2)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
