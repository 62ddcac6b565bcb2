//! Model queries

use crate::app::{Operation, Options};
use bbm::bsdf::*;
use bbm::geometry::*;
use models::ModelVisitor;

/// One facade operation with the arguments given on the command line.
/// Optional arguments left unspecified keep the facade defaults.
#[derive(Copy, Clone, Debug)]
pub struct Query {
    pub op: Operation,
    pub wi: Vector3f,
    pub wo: Vector3f,
    pub xi: Point2f,
    pub component: Option<BsdfFlag>,
    pub unit: Option<Unit>,
    pub masked: bool,
}

impl From<&Options> for Query {
    /// Create a query from command line options.
    ///
    /// * `options` - Command line options.
    fn from(options: &Options) -> Self {
        Self {
            op: options.op,
            wi: options.wi,
            wo: options.wo,
            xi: options.xi,
            component: options.component,
            unit: options.unit,
            masked: options.masked,
        }
    }
}

/// Binds the optional arguments that were given to a facade call builder.
macro_rules! bind_optional {
    ($args: expr, $query: expr) => {{
        let mut args = $args;
        if let Some(component) = $query.component {
            args = args.component(component);
        }
        if let Some(unit) = $query.unit {
            args = args.unit(unit);
        }
        if $query.masked {
            args = args.mask(false);
        }
        args
    }};
}

impl ModelVisitor for Query {
    type Output = String;

    fn visit<M: BsdfModel>(self, model: &M) -> Self::Output {
        debug!("{:?} on {}", self.op, model.display());
        match self.op {
            Operation::Print => model.display().to_string(),
            Operation::Eval => {
                let args = bind_optional!(model.eval_args().wi(&self.wi).wo(&self.wo), self);
                args.call().to_string()
            }
            Operation::Sample => {
                let args = bind_optional!(model.sample_args().wo(&self.wo).xi(&self.xi), self);
                args.call().to_string()
            }
            Operation::Pdf => {
                let args = bind_optional!(model.pdf_args().wi(&self.wi).wo(&self.wo), self);
                args.call().to_string()
            }
            Operation::Reflectance => {
                let args = bind_optional!(model.reflectance_args().wo(&self.wo), self);
                args.call().to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bbm::paramset::ParamSet;
    use models::Model;

    fn query(op: Operation) -> Query {
        Query {
            op,
            wi: Vector3f::new(0.0, 0.0, 1.0),
            wo: Vector3f::new(0.0, 0.0, 1.0),
            xi: Point2f::new(0.5, 0.5),
            component: None,
            unit: None,
            masked: false,
        }
    }

    fn lambertian() -> Model {
        let params = ParamSet::parse(&["albedo=0.5"]).unwrap();
        Model::create("lambertian", &params).unwrap()
    }

    #[test]
    fn print() {
        assert_eq!(lambertian().accept(query(Operation::Print)), "Lambertian(albedo=(0.5,0.5,0.5))");
    }

    #[test]
    fn reflectance_uses_defaults() {
        assert_eq!(lambertian().accept(query(Operation::Reflectance)), "(0.5,0.5,0.5)");
    }

    #[test]
    fn optional_arguments_are_forwarded() {
        let mut q = query(Operation::Reflectance);
        q.component = Some(BsdfFlag::SPECULAR);
        assert_eq!(lambertian().accept(q), "(0,0,0)");

        let mut q = query(Operation::Pdf);
        q.masked = true;
        assert_eq!(lambertian().accept(q), "0");
    }

    #[test]
    fn sample_record_is_printed() {
        let s = lambertian().accept(query(Operation::Sample));
        assert!(s.starts_with("direction="), "{}", s);
        assert!(s.contains("flag=Diffuse"), "{}", s);
        assert!(s.contains("unit=Radiance"), "{}", s);
    }
}
