//! Named-argument forwarding facade
//!
//! Every `BsdfModel` gets four call builders through `BsdfForward`. Required
//! arguments may be bound by name in any order or positionally, and the
//! optional `component`, `unit` and `mask` arguments start out as
//! `DEFAULT_COMPONENT`, `DEFAULT_UNIT` and `DEFAULT_MASK`:
//!
//! ```
//! use bbm::bsdf::*;
//! use bbm::geometry::*;
//! use bbm::math::Float;
//! use bbm::spectrum::Spectrum;
//!
//! struct Toy;
//!
//! impl BsdfModel for Toy {
//!     const NAME: &'static str = "Toy";
//!     type Format = EmptyForm;
//!
//!     fn eval(&self, wi: &Vector3f, wo: &Vector3f, _: BsdfFlag, _: Unit, _: Mask) -> Spectrum {
//!         Spectrum::new(wi.z * wo.z)
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
//!
//! let d1 = Vector3f::new(0.0, 0.6, 0.8);
//! let d2 = Vector3f::new(0.0, 0.0, 1.0);
//! let named = Toy.eval_args().wo(&d2).wi(&d1).call();
//! let positional = Toy.eval_with(&d1, &d2).call();
//! assert_eq!(named, positional);
//! assert_eq!(named, Toy.eval(&d1, &d2, BsdfFlag::ALL, Unit::Radiance, true));
//! ```
//!
//! Unknown argument names are rejected at build time:
//!
//! ```compile_fail
//! use bbm::bsdf::*;
//! use bbm::geometry::*;
//! use bbm::math::Float;
//! use bbm::spectrum::Spectrum;
//!
//! struct Toy;
//!
//! impl BsdfModel for Toy {
//!     const NAME: &'static str = "Toy";
//!     type Format = EmptyForm;
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
//!
//! let d1 = Vector3f::new(0.0, 0.6, 0.8);
//! let d2 = Vector3f::new(0.0, 0.0, 1.0);
//! let _ = Toy.pdf_args().wi(&d1).wo(&d2).widget(3).call();
//! ```
//!
//! So are calls with a required argument missing:
//!
//! ```compile_fail
//! use bbm::bsdf::*;
//! use bbm::geometry::*;
//! use bbm::math::Float;
//! use bbm::spectrum::Spectrum;
//!
//! struct Toy;
//!
//! impl BsdfModel for Toy {
//!     const NAME: &'static str = "Toy";
//!     type Format = EmptyForm;
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
//!
//! let d2 = Vector3f::new(0.0, 0.0, 1.0);
//! let _ = Toy.eval_args().wo(&d2).call();
//! ```

use super::*;

/// Placeholder for a required argument that has not been bound yet. A call
/// builder only has `call()` once none of its required slots are `Unbound`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Unbound;

/// Generates the call builder for one BSDF operation.
///
/// * `$call` - Name of the generated builder type.
/// * `$op`   - The `BsdfModel` method `call()` forwards to.
/// * `$ret`  - Return type of `$op`.
/// * `$a/$b` - Required arguments as `name: Type`, bound by reference.
///
/// The optional arguments are the same for every operation and are emitted
/// by the `@optional` rule.
macro_rules! bsdf_forward {
    (@optional) => {
        /// Selects the lobes that participate (default `DEFAULT_COMPONENT`).
        ///
        /// * `component` - Lobe selection.
        pub fn component(mut self, component: BsdfFlag) -> Self {
            self.component = component;
            self
        }

        /// Selects the regular or adjoint BSDF (default `DEFAULT_UNIT`).
        ///
        /// * `unit` - The radiometric unit.
        pub fn unit(mut self, unit: Unit) -> Self {
            self.unit = unit;
            self
        }

        /// Sets the lane activation (default `DEFAULT_MASK`).
        ///
        /// * `mask` - Lane activation.
        pub fn mask(mut self, mask: Mask) -> Self {
            self.mask = mask;
            self
        }
    };

    (
        $(#[$meta: meta])*
        $call: ident => $op: ident -> $ret: ty { $a: ident: $ta: ty, $b: ident: $tb: ty $(,)? }
    ) => {
        $(#[$meta])*
        #[must_use = "the operation only runs on call()"]
        pub struct $call<'a, M, A = Unbound, B = Unbound> {
            model: &'a M,
            $a: A,
            $b: B,
            component: BsdfFlag,
            unit: Unit,
            mask: Mask,
        }

        impl<'a, M: BsdfModel> $call<'a, M> {
            /// Starts a call with no required argument bound and every
            /// optional argument defaulted.
            ///
            /// * `model` - The BSDF model.
            pub fn new(model: &'a M) -> Self {
                Self {
                    model,
                    $a: Unbound,
                    $b: Unbound,
                    component: DEFAULT_COMPONENT,
                    unit: DEFAULT_UNIT,
                    mask: DEFAULT_MASK,
                }
            }
        }

        impl<'a, M: BsdfModel, A, B> $call<'a, M, A, B> {
            #[doc = concat!("Binds the `", stringify!($a), "` argument.")]
            pub fn $a(self, $a: &'a $ta) -> $call<'a, M, &'a $ta, B> {
                $call {
                    model: self.model,
                    $a,
                    $b: self.$b,
                    component: self.component,
                    unit: self.unit,
                    mask: self.mask,
                }
            }

            #[doc = concat!("Binds the `", stringify!($b), "` argument.")]
            pub fn $b(self, $b: &'a $tb) -> $call<'a, M, A, &'a $tb> {
                $call {
                    model: self.model,
                    $a: self.$a,
                    $b,
                    component: self.component,
                    unit: self.unit,
                    mask: self.mask,
                }
            }

            bsdf_forward!(@optional);
        }

        impl<'a, M: BsdfModel> $call<'a, M, &'a $ta, &'a $tb> {
            #[doc = concat!("Forwards the bound arguments to `BsdfModel::", stringify!($op), "()`.")]
            pub fn call(self) -> $ret {
                self.model.$op(self.$a, self.$b, self.component, self.unit, self.mask)
            }
        }
    };

    (
        $(#[$meta: meta])*
        $call: ident => $op: ident -> $ret: ty { $a: ident: $ta: ty $(,)? }
    ) => {
        $(#[$meta])*
        #[must_use = "the operation only runs on call()"]
        pub struct $call<'a, M, A = Unbound> {
            model: &'a M,
            $a: A,
            component: BsdfFlag,
            unit: Unit,
            mask: Mask,
        }

        impl<'a, M: BsdfModel> $call<'a, M> {
            /// Starts a call with no required argument bound and every
            /// optional argument defaulted.
            ///
            /// * `model` - The BSDF model.
            pub fn new(model: &'a M) -> Self {
                Self {
                    model,
                    $a: Unbound,
                    component: DEFAULT_COMPONENT,
                    unit: DEFAULT_UNIT,
                    mask: DEFAULT_MASK,
                }
            }
        }

        impl<'a, M: BsdfModel, A> $call<'a, M, A> {
            #[doc = concat!("Binds the `", stringify!($a), "` argument.")]
            pub fn $a(self, $a: &'a $ta) -> $call<'a, M, &'a $ta> {
                $call {
                    model: self.model,
                    $a,
                    component: self.component,
                    unit: self.unit,
                    mask: self.mask,
                }
            }

            bsdf_forward!(@optional);
        }

        impl<'a, M: BsdfModel> $call<'a, M, &'a $ta> {
            #[doc = concat!("Forwards the bound arguments to `BsdfModel::", stringify!($op), "()`.")]
            pub fn call(self) -> $ret {
                self.model.$op(self.$a, self.component, self.unit, self.mask)
            }
        }
    };
}

bsdf_forward! {
    /// Arguments of `BsdfModel::eval()`: `wi`, `wo`, `component`, `unit`, `mask`.
    EvalArgs => eval -> Spectrum { wi: Vector3f, wo: Vector3f }
}

bsdf_forward! {
    /// Arguments of `BsdfModel::sample()`: `wo`, `xi`, `component`, `unit`, `mask`.
    SampleArgs => sample -> BsdfSample { wo: Vector3f, xi: Point2f }
}

bsdf_forward! {
    /// Arguments of `BsdfModel::pdf()`: `wi`, `wo`, `component`, `unit`, `mask`.
    PdfArgs => pdf -> Float { wi: Vector3f, wo: Vector3f }
}

bsdf_forward! {
    /// Arguments of `BsdfModel::reflectance()`: `wo`, `component`, `unit`, `mask`.
    ReflectanceArgs => reflectance -> Spectrum { wo: Vector3f }
}

/// The forwarding facade embedded in every BSDF model.
pub trait BsdfForward: BsdfModel {
    /// Starts a named `eval` call.
    fn eval_args(&self) -> EvalArgs<'_, Self> {
        EvalArgs::new(self)
    }

    /// Starts a positional `eval` call.
    ///
    /// * `wi` - The `in` direction.
    /// * `wo` - The `out` direction.
    fn eval_with<'a>(&'a self, wi: &'a Vector3f, wo: &'a Vector3f) -> EvalArgs<'a, Self, &'a Vector3f, &'a Vector3f> {
        EvalArgs::new(self).wi(wi).wo(wo)
    }

    /// Starts a named `sample` call.
    fn sample_args(&self) -> SampleArgs<'_, Self> {
        SampleArgs::new(self)
    }

    /// Starts a positional `sample` call.
    ///
    /// * `wo` - The `out` direction.
    /// * `xi` - The 2D uniform random values.
    fn sample_with<'a>(&'a self, wo: &'a Vector3f, xi: &'a Point2f) -> SampleArgs<'a, Self, &'a Vector3f, &'a Point2f> {
        SampleArgs::new(self).wo(wo).xi(xi)
    }

    /// Starts a named `pdf` call.
    fn pdf_args(&self) -> PdfArgs<'_, Self> {
        PdfArgs::new(self)
    }

    /// Starts a positional `pdf` call.
    ///
    /// * `wi` - The `in` direction.
    /// * `wo` - The `out` direction.
    fn pdf_with<'a>(&'a self, wi: &'a Vector3f, wo: &'a Vector3f) -> PdfArgs<'a, Self, &'a Vector3f, &'a Vector3f> {
        PdfArgs::new(self).wi(wi).wo(wo)
    }

    /// Starts a named `reflectance` call.
    fn reflectance_args(&self) -> ReflectanceArgs<'_, Self> {
        ReflectanceArgs::new(self)
    }

    /// Starts a positional `reflectance` call.
    ///
    /// * `wo` - The `out` direction.
    fn reflectance_with<'a>(&'a self, wo: &'a Vector3f) -> ReflectanceArgs<'a, Self, &'a Vector3f> {
        ReflectanceArgs::new(self).wo(wo)
    }

    /// Returns an adapter that prints the model's name and parameters.
    fn display(&self) -> ModelDisplay<'_, Self> {
        ModelDisplay::new(self)
    }
}

impl<M: BsdfModel> BsdfForward for M {}
