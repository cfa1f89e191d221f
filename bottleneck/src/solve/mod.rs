pub mod binary_search;
pub mod forest;
pub mod reach;
pub mod unionfind;

use tracing::debug;

use crate::error::QueryError;
use crate::graph::WeightedGraph;

/// The fixed pair of vertices a bottleneck query connects (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Query {
    pub start: usize,
    pub goal: usize,
}

impl Query {
    pub fn new(start: usize, goal: usize) -> Self {
        Self { start, goal }
    }

    /// Check both endpoints against a graph's vertex count.
    pub fn validate(&self, vertex_count: usize) -> Result<(), QueryError> {
        for vertex in [self.start, self.goal] {
            if vertex >= vertex_count {
                return Err(QueryError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        if self.start == self.goal {
            return Err(QueryError::SameVertex(self.start));
        }
        Ok(())
    }
}

impl Default for Query {
    fn default() -> Self {
        Self { start: 0, goal: 1 }
    }
}

/// Answer to a bottleneck query.
///
/// `Unreachable` plays the role of negative infinity and orders below every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bottleneck<W> {
    Unreachable,
    Value(W),
}

impl<W> Bottleneck<W> {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Bottleneck::Value(_))
    }
}

impl<W: std::fmt::Display> std::fmt::Display for Bottleneck<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bottleneck::Value(w) => write!(f, "{w}"),
            Bottleneck::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Which solver(s) to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    BinarySearch,
    Forest,
    #[default]
    Both,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BinarySearch => "binary-search",
            Strategy::Forest => "forest",
            Strategy::Both => "both",
        }
    }

    pub fn from_name(name: &str) -> Option<Strategy> {
        match name {
            "binary-search" | "bfs" => Some(Strategy::BinarySearch),
            "forest" | "union-find" => Some(Strategy::Forest),
            "both" => Some(Strategy::Both),
            _ => None,
        }
    }

    fn runs_binary_search(&self) -> bool {
        matches!(self, Strategy::BinarySearch | Strategy::Both)
    }

    fn runs_forest(&self) -> bool {
        matches!(self, Strategy::Forest | Strategy::Both)
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveOptions {
    pub query: Query,
    pub strategy: Strategy,
}

#[cfg(feature = "serde")]
impl SolveOptions {
    /// Parse options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, crate::error::Error> {
        toml::from_str(toml_str).map_err(|e| crate::error::Error::Config(e.to_string()))
    }
}

/// Answers from each solver that was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Outcome<W> {
    pub binary_search: Option<Bottleneck<W>>,
    pub forest: Option<Bottleneck<W>>,
}

impl<W: Copy + PartialEq> Outcome<W> {
    /// The common answer, or `None` if the solvers that ran disagree.
    pub fn answer(&self) -> Option<Bottleneck<W>> {
        match (self.binary_search, self.forest) {
            (Some(a), Some(b)) if a == b => Some(a),
            (Some(_), Some(_)) => None,
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        }
    }

    pub fn agrees(&self) -> bool {
        match (self.binary_search, self.forest) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

/// Run the configured solver(s) on `graph`.
pub fn solve<W: Copy + Ord + std::fmt::Debug>(
    graph: &WeightedGraph<W>,
    options: &SolveOptions,
) -> Result<Outcome<W>, QueryError> {
    options.query.validate(graph.vertex_count())?;

    let binary_search = options
        .strategy
        .runs_binary_search()
        .then(|| binary_search::max_bottleneck(graph, options.query))
        .transpose()?;
    let forest = options
        .strategy
        .runs_forest()
        .then(|| forest::max_bottleneck(graph, options.query))
        .transpose()?;

    let outcome = Outcome {
        binary_search,
        forest,
    };
    debug!(
        strategy = options.strategy.name(),
        ?outcome,
        "solved bottleneck query"
    );
    Ok(outcome)
}
