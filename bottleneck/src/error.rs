use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph must have at least one vertex")]
    Empty,

    #[error("edge {index} endpoint {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange {
        index: usize,
        vertex: usize,
        vertex_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query vertex {vertex} is out of range for {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("start and goal are the same vertex ({0})")]
    SameVertex(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("missing problem line (`p edge V E`)")]
    MissingProblem,

    #[error("problem line declares {declared} edges but {found} were given")]
    EdgeCount { declared: usize, found: usize },

    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },

    #[error("no expected solution on the first line")]
    MissingSolution,
}

/// Top-level error for loading and solving a fixture.
#[derive(Debug, Error)]
pub enum Error {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("query error: {0}")]
    Query(#[from] QueryError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "serde")]
    #[error("config error: {0}")]
    Config(String),
}
