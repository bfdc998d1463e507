//! MathProg model for breaking the short cycles of a weighted digraph.
//!
//! Every arc gets a binary `ResultSets` variable. Each directed cycle of length 3 or 4 has to
//! contain at least one chosen arc, and the total weight of the chosen arcs is minimized. Longer
//! cycles are not constrained.

use std::fmt::{Display, Formatter};
use log::info;
use crate::cust_error::ModelError;
use crate::graph_input::parse_weighted_arc;
use crate::model_text::ModelWriter;

const PROGRAM: &[&str] = &[
    "var ResultSets{ (x, y, weight) in Edges}, binary;",
    "minimize obj: sum{ (x, y, weight) in Edges} ResultSets[x, y, weight] * weight;",
    "s.t. c1 {(v, x, w1) in Edges, (x, y, w2) in Edges, (y, z, w3) in Edges: v == z}: \
     ResultSets[v, x, w1] + ResultSets[x, y, w2] + ResultSets[y, z, w3] >= 1;",
    "s.t. c2 {(r, v, w1) in Edges, (v, x, w2) in Edges, (x, y, w3) in Edges, (y, z, w4) in Edges: r == z}: \
     ResultSets[r, v, w1] + ResultSets[v, x, w2] + ResultSets[x, y, w3] + ResultSets[y, z, w4] >= 1;",
    "solve;",
    r##"printf "#OUTPUT: %d\n", sum{(x,y,weight) in Edges: ResultSets[x,y,weight]>0} weight;"##,
    r##"printf{(x,y,weight) in Edges : ResultSets[x,y,weight]>0} "Edge %d --> %d (%d)\n", x, y, weight;"##,
    r##"printf "#OUTPUT END\n";"##,
];

/// A weighted arc rendered as `(from,to,weight)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Arc {
    pub from: i64,
    pub to: i64,
    pub weight: i64,
}

impl Display for Arc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.from, self.to, self.weight)
    }
}

/// Parses all `"<from> --> <to> (<weight>)"` lines.
pub fn parse_arcs<S: AsRef<str>>(edge_lines: &[S]) -> Result<Vec<Arc>, ModelError> {
    edge_lines
        .iter()
        .map(|line| -> Result<Arc, ModelError> {
            let (from, to, weight) = parse_weighted_arc(line.as_ref())?;
            Ok(Arc { from, to, weight })
        })
        .collect()
}

/// Builds the cycle-breaking model of the weighted digraph given by `edge_lines`.
pub fn build_cycle_model<S: AsRef<str>>(edge_lines: &[S]) -> Result<String, ModelError> {
    let arcs = parse_arcs(edge_lines)?;
    info!("Cycle model: {} arcs", arcs.len());
    let mut writer = ModelWriter::new();
    writer.set_literal("Edges", arcs);
    for line in PROGRAM {
        writer.line(line);
    }
    Ok(writer.finish())
}
