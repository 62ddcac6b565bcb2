//! Model registry
//!
//! Builds a concrete model from its name and a parameter set.

use crate::*;
use bbm::bsdf::*;
use bbm::paramset::*;
use std::fmt;

/// Runs generic code over a concrete model type.
pub trait ModelVisitor {
    /// Result of the visit.
    type Output;

    /// Called with the concrete model.
    ///
    /// * `model` - The model.
    fn visit<M: BsdfModel>(self, model: &M) -> Self::Output;
}

/// The registered models.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Model {
    Lambertian(Lambertian),
    Phong(Phong),
    CookTorrance(CookTorrance),
}

impl Model {
    /// Names accepted by `Model::create`.
    pub const NAMES: &'static [&'static str] = &["lambertian", "phong", "cooktorrance"];

    /// Creates a model from its registered name and parameters. Reports
    /// parameters the model did not use.
    ///
    /// * `name`   - Registered model name, case insensitive.
    /// * `params` - Model parameters.
    pub fn create(name: &str, params: &ParamSet) -> Result<Self, ParamError> {
        let model = match name.to_ascii_lowercase().as_str() {
            "lambertian" => Self::Lambertian(Lambertian::try_from(params)?),
            "phong" => Self::Phong(Phong::try_from(params)?),
            "cooktorrance" => Self::CookTorrance(CookTorrance::try_from(params)?),
            _ => return Err(ParamError::UnknownModel(name.to_string())),
        };
        params.report_unused();
        info!("Created {}", model);
        Ok(model)
    }

    /// Calls the visitor with the concrete model.
    ///
    /// * `visitor` - The visitor.
    pub fn accept<V: ModelVisitor>(&self, visitor: V) -> V::Output {
        match self {
            Self::Lambertian(m) => visitor.visit(m),
            Self::Phong(m) => visitor.visit(m),
            Self::CookTorrance(m) => visitor.visit(m),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lambertian(m) => fmt::Display::fmt(m, f),
            Self::Phong(m) => fmt::Display::fmt(m, f),
            Self::CookTorrance(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbm::geometry::*;
    use bbm::spectrum::*;

    struct Name;

    impl ModelVisitor for Name {
        type Output = &'static str;

        fn visit<M: BsdfModel>(self, _model: &M) -> Self::Output {
            M::NAME
        }
    }

    struct Albedo<'a>(&'a Vector3f);

    impl<'a> ModelVisitor for Albedo<'a> {
        type Output = Spectrum;

        fn visit<M: BsdfModel>(self, model: &M) -> Self::Output {
            model.reflectance_with(self.0).component(BsdfFlag::DIFFUSE).call()
        }
    }

    #[test]
    fn create_by_name() {
        let params = ParamSet::new();
        let names: Vec<&str> = Model::NAMES
            .iter()
            .map(|n| Model::create(n, &params).unwrap().accept(Name))
            .collect();
        assert_eq!(names, vec!["Lambertian", "Phong", "CookTorrance"]);
        assert_eq!(Model::create("Phong", &params).unwrap(), Model::Phong(Phong::default()));
    }

    #[test]
    fn unknown_model() {
        assert_eq!(
            Model::create("glass", &ParamSet::new()).unwrap_err(),
            ParamError::UnknownModel("glass".to_string())
        );
    }

    #[test]
    fn parameter_errors_propagate() {
        let params = ParamSet::parse(&["albedo=x"]).unwrap();
        assert!(matches!(
            Model::create("lambertian", &params),
            Err(ParamError::WrongType { .. })
        ));
    }

    #[test]
    fn visitor_runs_generic_code() {
        let params = ParamSet::parse(&["albedo=0.25"]).unwrap();
        let m = Model::create("lambertian", &params).unwrap();
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        assert_eq!(m.accept(Albedo(&wo)), Spectrum::new(0.25));
    }

    #[test]
    fn display_matches_model() {
        let m = Model::create("lambertian", &ParamSet::new()).unwrap();
        assert_eq!(m.to_string(), Lambertian::default().to_string());
    }
}
