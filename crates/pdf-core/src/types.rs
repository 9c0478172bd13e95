use std::fmt;

use serde::{Deserialize, Serialize};

/// Densities produced by a single model evaluation at one `(x, q2)` point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PdfBundle {
    /// Up valence density.
    pub uval: f64,
    /// Down valence density.
    pub dval: f64,
    /// Up sea density.
    pub usea: f64,
    /// Down sea density.
    pub dsea: f64,
    /// Strange density.
    pub str: f64,
    /// Charm density.
    pub chm: f64,
    /// Bottom density.
    pub bot: f64,
    /// Top density.
    pub top: f64,
    /// Gluon density.
    pub gl: f64,
}

impl PdfBundle {
    /// Bundle with every density equal to zero.
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Bundle with every density equal to `value`.
    pub const fn splat(value: f64) -> Self {
        Self {
            uval: value,
            dval: value,
            usea: value,
            dsea: value,
            str: value,
            chm: value,
            bot: value,
            top: value,
            gl: value,
        }
    }

    /// Multiplies `uval` and `dval` by `kscale`.
    pub fn scale_valence(&mut self, kscale: f64) {
        self.uval *= kscale;
        self.dval *= kscale;
    }

    /// Multiplies every non-valence slot by `kscale`: the sea quarks, the
    /// heavy flavours (top and bottom included) and the gluon.
    pub fn scale_sea(&mut self, kscale: f64) {
        self.usea *= kscale;
        self.dsea *= kscale;
        self.str *= kscale;
        self.chm *= kscale;
        self.bot *= kscale;
        self.top *= kscale;
        self.gl *= kscale;
    }

    /// Returns the density stored for `flavour`.
    pub fn get(&self, flavour: Flavour) -> f64 {
        match flavour {
            Flavour::UpValence => self.uval,
            Flavour::DownValence => self.dval,
            Flavour::UpSea => self.usea,
            Flavour::DownSea => self.dsea,
            Flavour::Strange => self.str,
            Flavour::Charm => self.chm,
            Flavour::Bottom => self.bot,
            Flavour::Top => self.top,
            Flavour::Gluon => self.gl,
        }
    }
}

/// The nine density slots, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavour {
    /// Up valence quark.
    UpValence,
    /// Down valence quark.
    DownValence,
    /// Up sea quark.
    UpSea,
    /// Down sea quark.
    DownSea,
    /// Strange quark.
    Strange,
    /// Charm quark.
    Charm,
    /// Bottom quark.
    Bottom,
    /// Top quark.
    Top,
    /// Gluon.
    Gluon,
}

impl Flavour {
    /// All slots in the order they are printed.
    pub const ALL: [Flavour; 9] = [
        Flavour::UpValence,
        Flavour::DownValence,
        Flavour::UpSea,
        Flavour::DownSea,
        Flavour::Strange,
        Flavour::Charm,
        Flavour::Bottom,
        Flavour::Top,
        Flavour::Gluon,
    ];

    /// Report label for the slot.
    pub const fn label(self) -> &'static str {
        match self {
            Flavour::UpValence => "UP-VAL",
            Flavour::DownValence => "DOWN-VAL",
            Flavour::UpSea => "UP-SEA",
            Flavour::DownSea => "DOWN-SEA",
            Flavour::Strange => "STRANGE",
            Flavour::Charm => "CHARM",
            Flavour::Bottom => "BOTTOM",
            Flavour::Top => "TOP",
            Flavour::Gluon => "GLUON",
        }
    }

    /// Whether the slot belongs to the valence scaling group.
    pub const fn is_valence(self) -> bool {
        matches!(self, Flavour::UpValence | Flavour::DownValence)
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
