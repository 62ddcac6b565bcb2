//! Printing of BSDF models
//!
//! A model picks its print strategy through `BsdfModel::Format`. Having a
//! textual form ties the model to `TextForm`, so a model that is reflectable
//! too cannot print its attribute listing instead:
//!
//! ```compile_fail
//! use bbm::bsdf::*;
//! use bbm::geometry::*;
//! use bbm::math::Float;
//! use bbm::reflect_attributes;
//! use bbm::spectrum::Spectrum;
//!
//! struct Both {
//!     alpha: Float,
//! }
//! reflect_attributes!(Both { alpha });
//!
//! impl ToText for Both {
//!     fn to_text(&self) -> String {
//!         String::from("<custom>")
//!     }
//! }
//!
//! impl BsdfModel for Both {
//!     const NAME: &'static str = "Both";
//!     type Format = ReflectForm;
//!
//!     fn eval(&self, _: &Vector3f, _: &Vector3f, _: BsdfFlag, _: Unit, _: Mask) -> Spectrum {
//!         Spectrum::ZERO
//!     }
//!     fn sample(&self, _: &Vector3f, _: &Point2f, _: BsdfFlag, _: Unit, _: Mask) -> BsdfSample {
//!         BsdfSample::default()
//!     }
//!     fn pdf(&self, _: &Vector3f, _: &Vector3f, _: BsdfFlag, _: Unit, _: Mask) -> Float {
//!         0.0
//!     }
//!     fn reflectance(&self, _: &Vector3f, _: BsdfFlag, _: Unit, _: Mask) -> Spectrum {
//!         Spectrum::ZERO
//!     }
//! }
//! ```

use super::*;
use std::fmt::{self, Write};
use std::io;

/// BSDF models with a textual form of their own. These always print with
/// `TextForm`.
pub trait ToText: BsdfModel<Format = TextForm> {
    /// Returns the text printed after the model's name.
    fn to_text(&self) -> String;
}

/// Print strategy for the part of a model that follows its name.
pub trait ModelFormat<M> {
    /// Writes the model's parameters.
    ///
    /// * `model` - The BSDF model.
    /// * `out`   - Destination.
    fn write_body(model: &M, out: &mut dyn Write) -> fmt::Result;
}

/// Prints the model's textual form.
pub struct TextForm;

/// Prints the model's reflected attribute listing.
pub struct ReflectForm;

/// Prints `()`.
pub struct EmptyForm;

impl<M: ToText> ModelFormat<M> for TextForm {
    fn write_body(model: &M, out: &mut dyn Write) -> fmt::Result {
        out.write_str(&model.to_text())
    }
}

impl<M: Reflect> ModelFormat<M> for ReflectForm {
    fn write_body(model: &M, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{}", attributes(model))
    }
}

impl<M> ModelFormat<M> for EmptyForm {
    fn write_body(_model: &M, out: &mut dyn Write) -> fmt::Result {
        out.write_str("()")
    }
}

/// Display adapter for BSDF models.
pub struct ModelDisplay<'a, M>(&'a M);

impl<'a, M: BsdfModel> ModelDisplay<'a, M> {
    /// Create a new `ModelDisplay`.
    ///
    /// * `model` - The BSDF model.
    pub fn new(model: &'a M) -> Self {
        Self(model)
    }
}

impl<'a, M: BsdfModel> fmt::Display for ModelDisplay<'a, M> {
    /// Writes the name and parameters as one chunk.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::from(M::NAME);
        M::Format::write_body(self.0, &mut s)?;
        f.pad(&s)
    }
}

/// Writes a BSDF model to a byte stream.
///
/// * `out`   - Destination stream.
/// * `model` - The BSDF model.
pub fn write_model<W: io::Write + ?Sized, M: BsdfModel>(out: &mut W, model: &M) -> io::Result<()> {
    write!(out, "{}", ModelDisplay::new(model))
}
