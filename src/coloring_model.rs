//! MathProg model for the coloring of an undirected graph, reduced by dominations.
//!
//! The kept (independent) nodes are matched by the binary `Matrix`: every node is matched to
//! exactly one partner, and a node `z` that both ends of an `Edges` pair are matched to opens the
//! color `Results[z]`. Dominated nodes are printed with the color of their dominator's partner.

use log::info;
use crate::adjacency::{AdjacencyRelation, DenseRelation};
use crate::cust_error::{ModelError, ProcessingError};
use crate::domination::Domination;
use crate::graph_input::build_relation;
use crate::model_text::{ModelWriter, Pair};

const VARIABLES: &[&str] = &[
    "var Results{Independent} binary;",
    "var Matrix{Independent,Independent} binary;",
];

const OBJECTIVE: &str = "minimize Colors: sum{x in Independent} Results[x];";

const CONSTRAINTS: &[&str] = &[
    "s.t. c1 {x in Independent}: sum{y in Independent} Matrix[x,y] = 1;",
    "s.t. c2 {x in Independent, y in Independent: x > y }: Matrix[x,y] = 0;",
    "s.t. c3 {(x,y) in Edges, z in Independent}: Matrix[x,y] = 0;",
    "s.t. c4 {(x,y) in Edges, z in Independent}: Matrix[x,z] + Matrix[y,z] <= Results[z];",
];

const REPORT: &[&str] = &[
    r##"printf "#OUTPUT: %d\n", Colors.val;"##,
    r##"printf {x in Independent, y in Independent: Matrix[x,y] == 1} "v_%d : %d\n", x, y;"##,
    r##"printf {(x, y) in Dominated, z in Independent: Matrix[x,z] == 1} "v_%d : %d\n", y, z;"##,
    r##"printf "#OUTPUT END\n";"##,
];

/// Builds the coloring model of the graph over `node_count` nodes given by `edge_lines`
/// (`"<from> -- <to>"`), using a dense relation.
pub fn build_model<S: AsRef<str>>(node_count: usize, edge_lines: &[S]) -> Result<String, ModelError> {
    build_model_with::<DenseRelation, S>(node_count, edge_lines)
}

/// Same as `build_model`, but with the relation storage `A`.
pub fn build_model_with<A, S>(node_count: usize, edge_lines: &[S]) -> Result<String, ModelError>
where
    A: AdjacencyRelation,
    S: AsRef<str>,
{
    let relation: A = build_relation(node_count, edge_lines)?;
    let domination = Domination::analyze(&relation);
    let mut writer = ModelWriter::new();
    let edges = write_sets(&mut writer, &relation, &domination)?;
    info!(
        "Coloring model: {} nodes, {} dominators, {} independent, {} edges",
        node_count,
        domination.dominators().len(),
        domination.independent_count(),
        edges
    );
    write_program(&mut writer);
    Ok(writer.finish())
}

/// Appends the `Dominated`, `Independent` and `Edges` sets and returns the number of edges.
pub fn write_sets<A: AdjacencyRelation>(writer: &mut ModelWriter, relation: &A, domination: &Domination)
    -> Result<usize, ProcessingError> {
    write_dominated(writer, domination)?;
    write_independent(writer, domination);
    Ok(write_edges(writer, relation, domination))
}

/// Appends the `(dominated, dominator)` pairs in discovery order.
pub fn write_dominated(writer: &mut ModelWriter, domination: &Domination) -> Result<(), ProcessingError> {
    domination.check_consistency()?;
    writer.set_literal("Dominated", domination.dominated().iter().map(|(j, i)| Pair(*j, *i)));
    Ok(())
}

pub fn write_independent(writer: &mut ModelWriter, domination: &Domination) {
    writer.set_literal("Independent", domination.independent());
}

/// Appends the related pairs of independent nodes and returns their number.
pub fn write_edges<A: AdjacencyRelation>(writer: &mut ModelWriter, relation: &A, domination: &Domination) -> usize {
    let edges: Vec<Pair> = domination.independent_edges(relation).map(|(i, j)| Pair(i, j)).collect();
    let count = edges.len();
    writer.set_literal("Edges", edges);
    count
}

/// Appends variables, objective, constraints, the solve statement and the report directives.
pub fn write_program(writer: &mut ModelWriter) {
    for var in VARIABLES {
        writer.line(var);
    }
    writer.blank().line(OBJECTIVE);
    for constraint in CONSTRAINTS {
        writer.line(constraint);
    }
    writer.blank().line("solve;").blank();
    for directive in REPORT {
        writer.line(directive);
    }
    writer.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::BitRelation;
    use crate::cust_error::InputFormatError;

    const PROGRAM: &str = "var Results{Independent} binary;
var Matrix{Independent,Independent} binary;

minimize Colors: sum{x in Independent} Results[x];
s.t. c1 {x in Independent}: sum{y in Independent} Matrix[x,y] = 1;
s.t. c2 {x in Independent, y in Independent: x > y }: Matrix[x,y] = 0;
s.t. c3 {(x,y) in Edges, z in Independent}: Matrix[x,y] = 0;
s.t. c4 {(x,y) in Edges, z in Independent}: Matrix[x,z] + Matrix[y,z] <= Results[z];

solve;

printf \"#OUTPUT: %d\\n\", Colors.val;
printf {x in Independent, y in Independent: Matrix[x,y] == 1} \"v_%d : %d\\n\", x, y;
printf {(x, y) in Dominated, z in Independent: Matrix[x,z] == 1} \"v_%d : %d\\n\", y, z;
printf \"#OUTPUT END\\n\";

end;";

    #[test]
    fn path_model_test() {
        let model = build_model(4, &["0 -- 1", "1 -- 2", "2 -- 3"]).unwrap();
        let expected = format!(
            "set Dominated := {{ (0, 1), (3, 2) }};\n\
             set Independent := {{ 0, 3 }};\n\
             set Edges := {{ (0, 3) }};\n{}",
            PROGRAM
        );
        assert_eq!(model, expected);
    }

    #[test]
    fn write_sets_counts_edges_test() {
        let empty: &[&str] = &[];
        let relation: DenseRelation = build_relation(3, empty).unwrap();
        let domination = Domination::analyze(&relation);
        let mut writer = ModelWriter::new();
        assert_eq!(write_sets(&mut writer, &relation, &domination), Ok(3));

        let relation: DenseRelation = build_relation(4, &["0 -- 1", "2 -- 3"]).unwrap();
        let domination = Domination::analyze(&relation);
        let mut writer = ModelWriter::new();
        assert_eq!(write_sets(&mut writer, &relation, &domination), Ok(0));
        assert!(writer.as_str().ends_with("set Edges := {};\n"));
    }

    #[test]
    fn no_dominations_model_test() {
        let empty: &[&str] = &[];
        let model = build_model(3, empty).unwrap();
        assert!(model.starts_with(
            "set Dominated := {};\n\
             set Independent := { 0, 1, 2 };\n\
             set Edges := { (0, 1), (0, 2), (1, 2) };\n"
        ));
        assert!(model.ends_with(PROGRAM));
    }

    #[test]
    fn twins_model_test() {
        let model = build_model(4, &["0 -- 1", "2 -- 3"]).unwrap();
        assert!(model.starts_with(
            "set Dominated := { (1, 0), (0, 1), (3, 2), (2, 3) };\n\
             set Independent := {};\n\
             set Edges := {};\n"
        ));
    }

    #[test]
    fn storages_agree_test() {
        let edges = ["0 -- 1", "0 -- 2", "0 -- 3", "3 -- 4", "4 -- 5", "1 -- 5"];
        let dense = build_model_with::<DenseRelation, _>(6, &edges).unwrap();
        let bits = build_model_with::<BitRelation, _>(6, &edges).unwrap();
        assert_eq!(dense, bits);
        // Idempotent
        assert_eq!(dense, build_model(6, &edges).unwrap());
    }

    #[test]
    fn inconsistent_domination_test() {
        let domination = Domination::from_parts(3, vec![1], Vec::new());
        let mut writer = ModelWriter::new();
        let res = write_dominated(&mut writer, &domination);
        assert_eq!(res, Err(ProcessingError::ReductionInconsistency { dominators: 1, dominated: 0 }));
        assert!(writer.as_str().is_empty());
    }

    #[test]
    fn bad_input_test() {
        let res = build_model(3, &["0 -- 3"]);
        assert!(matches!(res, Err(ModelError::Input(InputFormatError::OutOfRange { node: 3, node_count: 3 }))));
        let res = build_model(3, &["0 1"]);
        assert!(matches!(res, Err(ModelError::Input(InputFormatError::BadIntError(_)))));
    }

    #[test]
    fn huge_node_count_test() {
        let empty: &[&str] = &[];
        let res = build_model(usize::MAX / 2, empty);
        assert!(matches!(res, Err(ModelError::Input(InputFormatError::TooLarge(_)))));
        let res = build_model_with::<BitRelation, _>(usize::MAX / 2, empty);
        assert!(matches!(res, Err(ModelError::Input(InputFormatError::TooLarge(_)))));
    }
}
