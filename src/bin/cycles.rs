//! Binary that reads a weighted digraph (`WEIGHTED DIGRAPH <n> <m>` followed by
//! `<from> --> <to> (<weight>)` lines) and emits the MathProg model breaking its short cycles.

use std::error;

use dom_color_lp::config::{command, ModelKind, RunConfig};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let m = command("cycles", "Emits the MathProg cycle-breaking model of a weighted digraph", false)
        .get_matches();
    let config = RunConfig::from_matches(ModelKind::Cycles, &m);
    config.run()
}
