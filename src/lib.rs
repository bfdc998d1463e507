pub mod adjacency;
pub mod cust_error;
pub mod graph_input;
pub mod domination;
pub mod model_text;
pub mod coloring_model;
pub mod cycle_model;
pub mod glpsol;
pub mod config;

pub use coloring_model::build_model;
pub use cycle_model::build_cycle_model;
