//! BSDF component flags

use crate::paramset::ParamError;
use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Selects which lobes of a multi-lobe BSDF participate in a query.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BsdfFlag: u8 {
        const NONE = 0;
        const DIFFUSE = 1 << 0;
        const SPECULAR = 1 << 1;
        const ALL = Self::DIFFUSE.bits() | Self::SPECULAR.bits();
    }
}

impl BsdfFlag {
    /// Returns true if any lobe in `lobe` is selected.
    ///
    /// * `lobe` - The lobe(s) to test.
    pub fn selects(&self, lobe: Self) -> bool {
        self.intersects(lobe)
    }
}

impl Default for BsdfFlag {
    /// Returns the empty selection.
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BsdfFlag {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            write!(f, "All")
        } else if *self == Self::DIFFUSE {
            write!(f, "Diffuse")
        } else if *self == Self::SPECULAR {
            write!(f, "Specular")
        } else if self.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{:#04b}", self.bits())
        }
    }
}

impl FromStr for BsdfFlag {
    type Err = ParamError;

    /// Parses a component name (`none`, `diffuse`, `specular` or `all`).
    ///
    /// * `s` - The component name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::NONE),
            "diffuse" => Ok(Self::DIFFUSE),
            "specular" => Ok(Self::SPECULAR),
            "all" => Ok(Self::ALL),
            _ => Err(ParamError::UnknownName {
                kind: "component",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selects_every_lobe() {
        assert!(BsdfFlag::ALL.selects(BsdfFlag::DIFFUSE));
        assert!(BsdfFlag::ALL.selects(BsdfFlag::SPECULAR));
        assert!(!BsdfFlag::DIFFUSE.selects(BsdfFlag::SPECULAR));
        assert!(!BsdfFlag::NONE.selects(BsdfFlag::DIFFUSE));
    }

    #[test]
    fn display() {
        assert_eq!(BsdfFlag::ALL.to_string(), "All");
        assert_eq!(BsdfFlag::DIFFUSE.to_string(), "Diffuse");
        assert_eq!(BsdfFlag::SPECULAR.to_string(), "Specular");
        assert_eq!(BsdfFlag::NONE.to_string(), "None");
    }

    #[test]
    fn parse() {
        assert_eq!("All".parse::<BsdfFlag>().unwrap(), BsdfFlag::ALL);
        assert_eq!("diffuse".parse::<BsdfFlag>().unwrap(), BsdfFlag::DIFFUSE);
        assert!("glossy".parse::<BsdfFlag>().is_err());
    }
}
