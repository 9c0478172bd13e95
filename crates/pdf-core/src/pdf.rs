//! Value container for the nine parton densities.

use std::fmt;
use std::io;

use crate::errors::PdfError;
use crate::types::{Flavour, PdfBundle};
use crate::PdfModel;

/// Width of the dotted label column in [`Pdf::print`].
const LABEL_WIDTH: usize = 13;

/// Significant digits in the printed report.
const PRINT_DIGITS: i32 = 6;

/// Renders an `f64` like C's `%g`: [`PRINT_DIGITS`] significant digits,
/// exponent form when the decimal exponent is below -4 or at least the digit
/// count, trailing zeros dropped.
struct General(f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Rounded first, so 999999.5 reports exponent 6.
        let sci = format!("{:.*e}", (PRINT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = sci.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRINT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{}{:02}",
                trim_fraction(mantissa),
                sign,
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRINT_DIGITS - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Holds the densities last computed by an attached [`PdfModel`].
///
/// The model is borrowed, never owned: copies of a container share the same
/// model and the borrow checker guarantees it outlives all of them.
#[derive(Clone, Copy, Default)]
pub struct Pdf<'m> {
    model: Option<&'m dyn PdfModel>,
    values: PdfBundle,
}

impl<'m> Pdf<'m> {
    /// Creates an empty container with all densities at zero and no model.
    pub fn new() -> Self {
        Self {
            model: None,
            values: PdfBundle::zero(),
        }
    }

    /// Attaches `model`, zeroing all densities first.
    pub fn set_model(&mut self, model: &'m dyn PdfModel) {
        self.reset();
        tracing::trace!(model = model.name(), "attached PDF model");
        self.model = Some(model);
    }

    /// Detaches the current model, zeroing all densities.
    pub fn clear_model(&mut self) {
        self.reset();
        self.model = None;
    }

    /// Returns the attached model, if any.
    pub fn model(&self) -> Option<&'m dyn PdfModel> {
        self.model
    }

    /// Evaluates the attached model at `(x, q2)` and stores its densities.
    ///
    /// No range checks are made here. On failure the stored values are left
    /// unchanged and the model's error is returned as is.
    pub fn calculate(&mut self, x: f64, q2: f64) -> Result<(), PdfError> {
        let Some(model) = self.model else {
            tracing::error!(x, q2, "calculate called without a PDF model");
            return Err(PdfError::model_not_set(x, q2));
        };

        tracing::debug!(model = model.name(), x, q2, "evaluating PDF model");
        let pdfs = model.all_pdfs(x, q2).map_err(|err| {
            tracing::warn!(model = model.name(), x, q2, error = %err, "PDF model failed");
            err
        })?;

        self.values = pdfs;
        Ok(())
    }

    /// Multiplies the up and down valence densities by `kscale`.
    pub fn scale_valence(&mut self, kscale: f64) {
        self.values.scale_valence(kscale);
    }

    /// Multiplies the sea, heavy flavour and gluon densities by `kscale`.
    ///
    /// Everything except the two valence densities is scaled, including top,
    /// bottom and the gluon.
    pub fn scale_sea(&mut self, kscale: f64) {
        self.values.scale_sea(kscale);
    }

    /// Zeroes all densities. The attached model is kept.
    pub fn reset(&mut self) {
        tracing::trace!("reset PDF values");
        self.values = PdfBundle::zero();
    }

    /// Snapshot of the stored densities.
    pub fn values(&self) -> PdfBundle {
        self.values
    }

    /// Stored density for `flavour`.
    pub fn value(&self, flavour: Flavour) -> f64 {
        self.values.get(flavour)
    }

    /// Up valence density.
    pub fn up_valence(&self) -> f64 {
        self.values.uval
    }

    /// Down valence density.
    pub fn down_valence(&self) -> f64 {
        self.values.dval
    }

    /// Up sea density.
    pub fn up_sea(&self) -> f64 {
        self.values.usea
    }

    /// Down sea density.
    pub fn down_sea(&self) -> f64 {
        self.values.dsea
    }

    /// Strange density.
    pub fn strange(&self) -> f64 {
        self.values.str
    }

    /// Charm density.
    pub fn charm(&self) -> f64 {
        self.values.chm
    }

    /// Bottom density.
    pub fn bottom(&self) -> f64 {
        self.values.bot
    }

    /// Top density.
    pub fn top(&self) -> f64 {
        self.values.top
    }

    /// Gluon density.
    pub fn gluon(&self) -> f64 {
        self.values.gl
    }

    /// Writes the labelled report to `sink`: a blank line, then one
    /// `LABEL.... value` line per density.
    pub fn print<W: io::Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl fmt::Display for Pdf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for flavour in Flavour::ALL {
            writeln!(
                f,
                "{:.<width$} {}",
                flavour.label(),
                General(self.value(flavour)),
                width = LABEL_WIDTH
            )?;
        }
        Ok(())
    }
}

impl fmt::Debug for Pdf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pdf")
            .field("model", &self.model.map(|model| model.name()))
            .field("values", &self.values)
            .finish()
    }
}
