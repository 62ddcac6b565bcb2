#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

mod app;
mod run;

use app::*;
use bbm::paramset::*;
use models::*;
use run::*;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    match run(&OPTIONS) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}

/// Builds the model and runs the requested operation.
///
/// * `options` - Command line options.
fn run(options: &Options) -> Result<String, String> {
    let params = ParamSet::parse(options.params.as_slice()).map_err(|e| e.to_string())?;
    let model = Model::create(&options.model, &params).map_err(|e| e.to_string())?;
    Ok(model.accept(Query::from(options)))
}
