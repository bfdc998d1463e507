//! Reading of graph descriptions.
//!
//! An undirected input starts with the header `GRAPH <n> <m>` and a weighted digraph with
//! `WEIGHTED DIGRAPH <n> <m>`. In both cases anything after a `:` in the header is ignored. The
//! header is followed by `m` edge lines, `<from> -- <to>` for undirected graphs and
//! `<from> --> <to> (<weight>)` for weighted digraphs.

use std::io::BufRead;
use log::debug;
use crate::adjacency::AdjacencyRelation;
use crate::cust_error::InputFormatError;

/// The kinds of graphs a header can announce.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GraphKind {
    Undirected,
    WeightedDigraph,
}

impl GraphKind {

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            GraphKind::Undirected => &["GRAPH"],
            GraphKind::WeightedDigraph => &["WEIGHTED", "DIGRAPH"],
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GraphHeader {
    pub kind: GraphKind,
    pub node_count: usize,
    pub edge_count: usize,
}

impl GraphHeader {

    /// Parses a header line of the given `kind`.
    pub fn parse(line: &str, kind: GraphKind) -> Result<Self, InputFormatError> {
        let malformed = || InputFormatError::MalformedHeader(line.to_owned());
        let head = line.split(':').next().unwrap_or_default();
        let mut s = head.split_whitespace();
        for keyword in kind.keywords() {
            if s.next() != Some(*keyword) {
                return Err(malformed());
            }
        }
        let node_count: usize = s.next().ok_or_else(malformed)?.parse()?;
        let edge_count: usize = s.next().ok_or_else(malformed)?.parse()?;
        if s.next().is_some() {
            return Err(malformed());
        }
        debug!("Header: {:?} with {} nodes and {} edges", kind, node_count, edge_count);
        Ok(GraphHeader { kind, node_count, edge_count })
    }
}

/// A graph as handed to the model generators: its header and the raw edge lines.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GraphInput {
    pub header: GraphHeader,
    pub edge_lines: Vec<String>,
}

impl GraphInput {

    /// Reads a header of kind `kind` followed by exactly as many non-empty edge lines as the
    /// header announces. Lines after those are ignored.
    pub fn read<R: BufRead>(input: R, kind: GraphKind) -> Result<Self, InputFormatError> {
        let mut lines = input.lines();
        let header = loop {
            let line = lines.next().ok_or_else(|| InputFormatError::MalformedHeader(String::new()))??;
            if !line.trim().is_empty() {
                break GraphHeader::parse(line.trim(), kind)?;
            }
        };
        let mut edge_lines = Vec::new();
        while edge_lines.len() < header.edge_count {
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    let line = line.trim();
                    if !line.is_empty() {
                        edge_lines.push(line.to_owned());
                    }
                },
                None => return Err(InputFormatError::MissingEdges {
                    expected: header.edge_count,
                    found: edge_lines.len(),
                }),
            }
        }
        Ok(GraphInput { header, edge_lines })
    }

    pub fn node_count(&self) -> usize {
        self.header.node_count
    }
}

/// Parses an undirected edge line `<from> -- <to>` over `node_count` nodes.
pub fn parse_edge(line: &str, node_count: usize) -> Result<(usize, usize), InputFormatError> {
    let mut s = line.split(" -- ");
    let from: usize = s.next().ok_or_else(|| InputFormatError::MalformedEdge(line.to_owned()))?.trim().parse()?;
    let to: usize = s.next().ok_or_else(|| InputFormatError::MalformedEdge(line.to_owned()))?.trim().parse()?;
    if s.next().is_some() {
        return Err(InputFormatError::MalformedEdge(line.to_owned()));
    }
    for node in [from, to] {
        if node >= node_count {
            return Err(InputFormatError::OutOfRange { node, node_count });
        }
    }
    if from == to {
        return Err(InputFormatError::SelfLoop(from));
    }
    Ok((from, to))
}

/// Parses a weighted arc line `<from> --> <to> (<weight>)`.
pub fn parse_weighted_arc(line: &str) -> Result<(i64, i64, i64), InputFormatError> {
    let tokens: Vec<&str> = line
        .split(|c| c == '(' || c == ')')
        .flat_map(|part| part.split("-->"))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() != 3 || !line.contains("-->") {
        return Err(InputFormatError::MalformedEdge(line.to_owned()));
    }
    Ok((tokens[0].parse()?, tokens[1].parse()?, tokens[2].parse()?))
}

/// Builds the complement relation of the graph over `node_count` nodes given by `edge_lines`.
pub fn build_relation<A, S>(node_count: usize, edge_lines: &[S]) -> Result<A, InputFormatError>
where
    A: AdjacencyRelation,
    S: AsRef<str>,
{
    match node_count.checked_mul(node_count) {
        Some(cells) if cells <= isize::MAX as usize => (),
        _ => return Err(InputFormatError::TooLarge(node_count)),
    }
    let mut relation = A::complete(node_count);
    for line in edge_lines {
        let (from, to) = parse_edge(line.as_ref(), node_count)?;
        relation.clear(from, to);
    }
    Ok(relation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::adjacency::{BitRelation, DenseRelation};

    #[test]
    fn header_test() {
        let header = GraphHeader::parse("GRAPH 7 9:some name", GraphKind::Undirected);
        assert_eq!(header.unwrap(), GraphHeader { kind: GraphKind::Undirected, node_count: 7, edge_count: 9 });
        let header = GraphHeader::parse("WEIGHTED DIGRAPH 4 5:", GraphKind::WeightedDigraph);
        assert_eq!(header.unwrap().edge_count, 5);
        assert!(GraphHeader::parse("DIGRAPH 4 5", GraphKind::Undirected).is_err());
        assert!(GraphHeader::parse("GRAPH 4", GraphKind::Undirected).is_err());
        assert!(matches!(GraphHeader::parse("GRAPH x 4", GraphKind::Undirected), Err(InputFormatError::BadIntError(_))));
    }

    #[test]
    fn read_test() {
        let gr = Cursor::new("GRAPH 4 2\n0 -- 1\n\n2 -- 3\n1 -- 2\n");
        let input = GraphInput::read(gr, GraphKind::Undirected);
        assert!(input.is_ok());
        let input = input.unwrap();
        assert_eq!(input.node_count(), 4);
        assert_eq!(input.edge_lines, vec!["0 -- 1".to_owned(), "2 -- 3".to_owned()]);
    }

    #[test]
    fn read_missing_edges_test() {
        let gr = Cursor::new("GRAPH 4 3\r\n0 -- 1\r\n2 -- 3\r\n");
        let input = GraphInput::read(gr, GraphKind::Undirected);
        assert!(matches!(input, Err(InputFormatError::MissingEdges { expected: 3, found: 2 })));
        assert!(GraphInput::read(Cursor::new(""), GraphKind::Undirected).is_err());
    }

    #[test]
    fn read_huge_edge_count_test() {
        let gr = format!("GRAPH 3 {}\n0 -- 1\n", usize::MAX);
        let input = GraphInput::read(Cursor::new(gr), GraphKind::Undirected);
        assert!(matches!(input, Err(InputFormatError::MissingEdges { expected: usize::MAX, found: 1 })));
    }

    #[test]
    fn parse_edge_test() {
        assert_eq!(parse_edge("3 -- 0", 4).unwrap(), (3, 0));
        assert!(matches!(parse_edge("3 - 0", 4), Err(InputFormatError::BadIntError(_))));
        assert!(matches!(parse_edge("3", 4), Err(InputFormatError::MalformedEdge(_))));
        assert!(matches!(parse_edge("1 -- 2 -- 3", 4), Err(InputFormatError::MalformedEdge(_))));
        assert!(matches!(parse_edge("2 -- 2", 4), Err(InputFormatError::SelfLoop(2))));
        assert!(matches!(parse_edge("1 -- 4", 4), Err(InputFormatError::OutOfRange { node: 4, node_count: 4 })));
    }

    #[test]
    fn parse_weighted_arc_test() {
        assert_eq!(parse_weighted_arc("1 --> 2 (7)").unwrap(), (1, 2, 7));
        assert_eq!(parse_weighted_arc("10-->3 (-2)").unwrap(), (10, 3, -2));
        assert!(parse_weighted_arc("1 --> 2").is_err());
        assert!(parse_weighted_arc("1 -- 2 (3)").is_err());
    }

    #[test]
    fn build_relation_test() {
        let edges = ["0 -- 1", "2 -- 3"];
        let relation: DenseRelation = build_relation(4, &edges).unwrap();
        for (i, j) in [(0, 1), (1, 0), (2, 3), (3, 2)] {
            assert!(!relation.is_related(i, j));
        }
        for (i, j) in [(0, 2), (0, 3), (1, 2), (1, 3)] {
            assert!(relation.is_related(i, j));
            assert!(relation.is_related(j, i));
        }
        let empty: &[&str] = &[];
        let relation: BitRelation = build_relation(3, empty).unwrap();
        assert!((0..3).all(|i| (0..3).all(|j| relation.is_related(i, j) == (i != j))));
        assert!(build_relation::<DenseRelation, _>(2, &["0 -- 5"]).is_err());
    }

    #[test]
    fn build_relation_too_large_test() {
        let empty: &[&str] = &[];
        let n = usize::MAX / 2;
        assert!(matches!(build_relation::<DenseRelation, _>(n, empty), Err(InputFormatError::TooLarge(m)) if m == n));
        assert!(matches!(build_relation::<BitRelation, _>(n, empty), Err(InputFormatError::TooLarge(_))));
    }
}
