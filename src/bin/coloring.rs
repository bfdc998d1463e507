//! Binary that reads an undirected graph (`GRAPH <n> <m>` followed by `<from> -- <to>` lines),
//! reduces it by dominations and emits the MathProg coloring model.

use std::error;

use dom_color_lp::config::{command, ModelKind, RunConfig, Storage};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let m = command("coloring", "Emits the MathProg coloring model of an undirected graph", true)
        .get_matches();
    let config = RunConfig::from_matches(ModelKind::Coloring(Storage::Dense), &m);
    config.run()
}
