#![deny(missing_docs)]
#![doc = "Reference PDF model strategies for the pdf-core container. None of them is a fitted PDF set."]

mod constant;
mod guard;
mod rescale;

pub use constant::{ConstantModel, FnModel};
pub use guard::{KinematicGuard, KinematicLimits};
pub use rescale::{RescaleOpts, RescaledModel};
