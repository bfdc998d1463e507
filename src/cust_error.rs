//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors raised while reading a graph description or one of its edge lines.
#[derive(Debug)]
pub enum InputFormatError {
    IoError(std::io::Error),
    /// The header line is missing or does not follow `GRAPH <n> <m>` (or the weighted variant).
    MalformedHeader(String),
    /// An edge line does not split into the expected tokens.
    MalformedEdge(String),
    BadIntError(std::num::ParseIntError),
    SelfLoop(usize),
    OutOfRange { node: usize, node_count: usize },
    /// The header announced more edge lines than the input holds.
    MissingEdges { expected: usize, found: usize },
    /// The node count does not fit into an adjacency relation.
    TooLarge(usize),
}

impl From<std::io::Error> for InputFormatError {
    fn from(e: std::io::Error) -> InputFormatError {
        InputFormatError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for InputFormatError {
    fn from(e: std::num::ParseIntError) -> InputFormatError {
        InputFormatError::BadIntError(e)
    }
}

impl fmt::Display for InputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Input: IoError ({})", e),
            Self::MalformedHeader(line) => write!(f, "Input: Header `{}` is malformed.", line),
            Self::MalformedEdge(line) => write!(f, "Input: Edge line `{}` is malformed.", line),
            Self::BadIntError(e) => write!(f, "Input: Integer is malformed ({}).", e),
            Self::SelfLoop(node) => write!(f, "Input: Self-loop at node {}.", node),
            Self::OutOfRange { node, node_count } => {
                write!(f, "Input: Node {} is out of range for {} nodes.", node, node_count)
            },
            Self::MissingEdges { expected, found } => {
                write!(f, "Input: Expected {} edge lines, found {}.", expected, found)
            },
            Self::TooLarge(node_count) => {
                write!(f, "Input: {} nodes are too many for an adjacency relation.", node_count)
            },
        }
    }
}

impl Error for InputFormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::BadIntError(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum ProcessingError {
    /// The parallel collections of a `Domination` diverged in length.
    ReductionInconsistency { dominators: usize, dominated: usize },
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReductionInconsistency { dominators, dominated } => write!(
                f,
                "Reduction inconsistency: {} dominators but {} dominated pairs",
                dominators, dominated
            ),
        }
    }
}

impl Error for ProcessingError {}

/// Everything that can abort the generation of a model.
#[derive(Debug)]
pub enum ModelError {
    Input(InputFormatError),
    Processing(ProcessingError),
}

impl From<InputFormatError> for ModelError {
    fn from(e: InputFormatError) -> ModelError {
        ModelError::Input(e)
    }
}

impl From<ProcessingError> for ModelError {
    fn from(e: ProcessingError) -> ModelError {
        ModelError::Processing(e)
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input(e) => write!(f, "{}", e),
            Self::Processing(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Processing(e) => Some(e),
        }
    }
}

#[derive(Debug)]
pub enum SolverError {
    /// The solver executable could not be started.
    SpawnError(String, std::io::Error),
    /// The solver terminated with a non-zero exit code.
    Failed(Option<i32>),
    OutputNotUtf8,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnError(cmd, e) => write!(f, "Solver: could not start `{}` ({})", cmd, e),
            Self::Failed(Some(code)) => write!(f, "Solver: exited with code {}", code),
            Self::Failed(None) => write!(f, "Solver: terminated by signal"),
            Self::OutputNotUtf8 => write!(f, "Solver: output is not valid UTF-8"),
        }
    }
}

impl Error for SolverError {}
