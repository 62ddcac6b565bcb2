//! Attribute reflection
//!
//! A reflectable type enumerates its declared attributes, in declaration
//! order, as printable name/value pairs. `reflect_attributes!` derives the
//! implementation from a list of fields.

use std::fmt;

/// Visitor receiving one attribute name and value at a time.
pub type AttributeVisitor<'v> = dyn FnMut(&'static str, &dyn fmt::Display) -> fmt::Result + 'v;

/// Types whose attributes can be enumerated by name and value.
pub trait Reflect {
    /// Attribute names in declaration order.
    const ATTRIBUTES: &'static [&'static str];

    /// Calls `visitor` for every attribute in declaration order, stopping at
    /// the first error.
    ///
    /// * `visitor` - Receives the attribute name and value.
    fn visit_attributes(&self, visitor: &mut AttributeVisitor<'_>) -> fmt::Result;
}

/// Display adapter printing `(name=value, name=value)`.
pub struct Attributes<'a, T>(&'a T);

/// Returns the printable attribute listing of a reflectable value.
///
/// * `value` - The reflectable value.
pub fn attributes<T: Reflect>(value: &T) -> Attributes<'_, T> {
    Attributes(value)
}

impl<'a, T: Reflect> fmt::Display for Attributes<'a, T> {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        self.0.visit_attributes(&mut |name, value| {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{}={}", name, value)
        })?;
        write!(f, ")")
    }
}

/// Implements `Reflect` for a type from the list of its attribute fields.
///
/// ```
/// use bbm::bsdf::*;
/// use bbm::reflect_attributes;
///
/// struct Blinn {
///     exponent: f32,
///     scale: f32,
/// }
/// reflect_attributes!(Blinn { exponent, scale });
///
/// let b = Blinn { exponent: 8.0, scale: 0.5 };
/// assert_eq!(attributes(&b).to_string(), "(exponent=8, scale=0.5)");
/// assert_eq!(Blinn::ATTRIBUTES, &["exponent", "scale"]);
/// ```
#[macro_export]
macro_rules! reflect_attributes {
    ($t: ty { $($field: ident),* $(,)? }) => {
        impl $crate::bsdf::Reflect for $t {
            const ATTRIBUTES: &'static [&'static str] = &[$(stringify!($field)),*];

            #[allow(unused_variables)]
            fn visit_attributes(
                &self,
                visitor: &mut $crate::bsdf::AttributeVisitor<'_>,
            ) -> ::std::fmt::Result {
                $(visitor(stringify!($field), &self.$field)?;)*
                Ok(())
            }
        }
    };
}
