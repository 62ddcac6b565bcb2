//! Application related stuff

use bbm::bsdf::*;
use bbm::geometry::*;
use bbm::math::*;
use clap::{Parser, ValueEnum};

lazy_static! {
    /// The global application options.
    pub static ref OPTIONS: Options = Options::parse();
}

/// Operation to run on the model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// Print the model's name and parameters.
    Print,

    /// Evaluate the BSDF for `wi` and `wo`.
    Eval,

    /// Sample an `in` direction for `wo` using `xi`.
    Sample,

    /// Density of sampling `wi` given `wo`.
    Pdf,

    /// Directional albedo for `wo`.
    Reflectance,
}

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Evaluate a BSDF model.", long_about = None)]
pub struct Options {
    /// Model to build (lambertian, phong, cooktorrance).
    #[arg(long, short = 'm', value_name = "NAME")]
    pub model: String,

    /// Model parameter, e.g. albedo=0.5,0.5,0.5. May be repeated.
    #[arg(long = "param", short = 'p', value_name = "NAME=VALUES")]
    pub params: Vec<String>,

    /// Operation to run.
    #[arg(long, value_enum, default_value = "print")]
    pub op: Operation,

    /// The `in` direction, normalized.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vector, default_value = "0,0,1")]
    pub wi: Vector3f,

    /// The `out` direction, normalized.
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vector, default_value = "0,0,1")]
    pub wo: Vector3f,

    /// Random sample in [0, 1) used by the `sample` operation.
    #[arg(long, value_name = "U,V", value_parser = parse_point, default_value = "0.5,0.5")]
    pub xi: Point2f,

    /// Lobes to evaluate (none, diffuse, specular, all). Defaults to all.
    #[arg(long, value_name = "NAME")]
    pub component: Option<BsdfFlag>,

    /// Radiometric unit (radiance, importance). Defaults to radiance.
    #[arg(long, value_name = "NAME")]
    pub unit: Option<Unit>,

    /// Evaluate with the lane masked off.
    #[arg(long)]
    pub masked: bool,
}

/// Parses `n` comma separated floats.
///
/// * `s` - The text.
/// * `n` - Number of values expected.
fn parse_floats(s: &str, n: usize) -> Result<Vec<Float>, String> {
    let values: Vec<Float> = s
        .split(',')
        .map(|v| v.trim().parse::<Float>().map_err(|e| format!("'{}': {}", v, e)))
        .collect::<Result<_, _>>()?;
    if values.len() != n {
        return Err(format!("expected {} values, found {}", n, values.len()));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(format!("'{}' has non-finite values", s));
    }
    Ok(values)
}

/// Parses a direction given as `x,y,z` and normalizes it.
///
/// * `s` - The text.
pub fn parse_vector(s: &str) -> Result<Vector3f, String> {
    let v = parse_floats(s, 3)?;
    let w = Vector3f::new(v[0], v[1], v[2]);
    if w.length_squared() == 0.0 {
        return Err(String::from("direction must not be zero"));
    }
    if abs(w.length() - 1.0) > 1e-4 {
        warn!("Direction {} normalized.", w);
    }
    Ok(w.normalize())
}

/// Parses a sample point given as `u,v` in [0, 1).
///
/// * `s` - The text.
pub fn parse_point(s: &str) -> Result<Point2f, String> {
    let v = parse_floats(s, 2)?;
    if v.iter().any(|u| !(0.0..1.0).contains(u)) {
        return Err(format!("'{}' is outside [0, 1)", s));
    }
    Ok(Point2f::new(v[0], v[1]))
}
