//! Parameter Sets
//!
//! Named model parameters given on the command line as `name=v1,v2,...`.
//! Entries whose values all parse as numbers are float parameters; everything
//! else is a string parameter.

use crate::math::*;
use crate::spectrum::*;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

mod paramset_item;

// Re-export
pub use paramset_item::*;

/// A hashmap of parameter set items stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Errors raised while building models from parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    /// An entry that is not of the form `name=values`.
    #[error("malformed parameter '{0}', expected name=v1,v2,...")]
    MalformedEntry(String),

    /// A parameter holding an unexpected number of values.
    #[error("parameter '{name}' expects {expected} value(s), found {found}")]
    WrongValueCount {
        name: String,
        expected: &'static str,
        found: usize,
    },

    /// A parameter of the wrong type.
    #[error("parameter '{name}' must be a {expected}")]
    WrongType { name: String, expected: &'static str },

    /// A value outside the range a model accepts.
    #[error("parameter '{name}' is out of range: {value}")]
    OutOfRange { name: String, value: Float },

    /// No model is registered under the name.
    #[error("unknown model '{0}'")]
    UnknownModel(String),

    /// A name that does not denote any value of its kind.
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

/// Stores named float and string parameters.
#[derive(Clone, Debug, Default)]
pub struct ParamSet {
    pub floats: ParamSetMap<Float>,
    pub strings: ParamSetMap<String>,
}

/// Generates a lookup for a parameter set item that is stored as a single
/// value. The item's other type is reported as `WrongType`.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident, $other: ident, $type_name: literal) => {
        pub fn $func(&self, name: &str, default: $t) -> Result<$t, ParamError> {
            if self.$other.contains_key(name) {
                return Err(ParamError::WrongType {
                    name: name.to_string(),
                    expected: $type_name,
                });
            }
            match self.$paramset.get(name) {
                Some(param) => match param.read() {
                    [v] => Ok(v.clone()),
                    values => Err(ParamError::WrongValueCount {
                        name: name.to_string(),
                        expected: "1",
                        found: values.len(),
                    }),
                },
                None => Ok(default),
            }
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a list of `name=values` entries. Later entries replace earlier
    /// ones with the same name.
    ///
    /// * `entries` - The entries.
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, ParamError> {
        let mut params = Self::new();
        for entry in entries {
            params.add_entry(entry.as_ref())?;
        }
        Ok(params)
    }

    /// Add/replace a parameter given as `name=v1,v2,...`.
    ///
    /// * `entry` - The entry.
    pub fn add_entry(&mut self, entry: &str) -> Result<(), ParamError> {
        let (name, values) = entry
            .split_once('=')
            .map(|(n, v)| (n.trim(), v.trim()))
            .filter(|(n, v)| !n.is_empty() && !v.is_empty())
            .ok_or_else(|| ParamError::MalformedEntry(entry.to_string()))?;

        let values: Vec<&str> = values.split(',').map(str::trim).collect();
        if values.iter().any(|v| v.is_empty()) {
            return Err(ParamError::MalformedEntry(entry.to_string()));
        }

        let floats: Result<Vec<Float>, _> = values.iter().map(|v| v.parse::<Float>()).collect();
        match floats {
            Ok(floats) => self.add_float(name, &floats),
            Err(_) => {
                let strings: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                self.add_string(name, &strings)
            }
        }
        Ok(())
    }

    /// Add/replace a float parameter.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - The values.
    pub fn add_float(&mut self, name: &str, values: &[Float]) {
        self.strings.remove(name);
        self.floats
            .insert(name.to_string(), ParamSetItem::new(values.to_vec()));
    }

    /// Add/replace a string parameter.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - The values.
    pub fn add_string(&mut self, name: &str, values: &[String]) {
        self.floats.remove(name);
        self.strings
            .insert(name.to_string(), ParamSetItem::new(values.to_vec()));
    }

    paramset_find_one!(find_one_float, Float, floats, strings, "number");
    paramset_find_one!(find_one_string, String, strings, floats, "string");

    /// Finds a spectrum given either as one value (a constant spectrum) or
    /// three values (RGB).
    ///
    /// * `name`    - Parameter name.
    /// * `default` - Value returned when the parameter is absent.
    pub fn find_spectrum(&self, name: &str, default: Spectrum) -> Result<Spectrum, ParamError> {
        if self.strings.contains_key(name) {
            return Err(ParamError::WrongType {
                name: name.to_string(),
                expected: "number",
            });
        }
        match self.floats.get(name) {
            Some(param) => match param.read() {
                &[v] if !v.is_nan() => Ok(Spectrum::new(v)),
                &[r, g, b] if !(r.is_nan() || g.is_nan() || b.is_nan()) => {
                    Ok(Spectrum::from_rgb(r, g, b))
                }
                &[_] | &[_, _, _] => Err(ParamError::WrongType {
                    name: name.to_string(),
                    expected: "number",
                }),
                values => Err(ParamError::WrongValueCount {
                    name: name.to_string(),
                    expected: "1 or 3",
                    found: values.len(),
                }),
            },
            None => Ok(default),
        }
    }

    /// Returns the names of parameters that were never looked up, sorted.
    pub fn unused(&self) -> Vec<&str> {
        let floats = self
            .floats
            .iter()
            .filter(|(_, p)| !p.looked_up())
            .map(|(n, _)| n.as_str());
        let strings = self
            .strings
            .iter()
            .filter(|(_, p)| !p.looked_up())
            .map(|(n, _)| n.as_str());
        let mut names: Vec<&str> = floats.chain(strings).collect();
        names.sort_unstable();
        names
    }

    /// Logs a warning for every parameter that was never looked up.
    pub fn report_unused(&self) {
        for name in self.unused() {
            warn!("Parameter '{}' not used.", name);
        }
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.floats.is_empty() && self.strings.is_empty()
    }
}

impl fmt::Display for ParamSet {
    /// Formats the parameters as space separated `name=values` entries sorted
    /// by name.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<String> = self
            .floats
            .iter()
            .map(|(n, p)| format!("{}={}", n, p))
            .chain(self.strings.iter().map(|(n, p)| format!("{}={}", n, p)))
            .collect();
        entries.sort();
        write!(f, "{}", entries.join(" "))
    }
}
