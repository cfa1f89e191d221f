//! Loader for DIMACS-style weighted graph fixtures.
//!
//! ```text
//! c Solution: 4
//! p edge 4 6
//! e 1 2 1
//! e 1 3 2
//! ```
//!
//! Vertices are numbered from 1 in the file and translated to 0-based indices
//! on load. The first line is a comment whose last token is the expected
//! bottleneck (`-inf` or `unreachable` when start and goal are disconnected).

use std::path::Path;

use tracing::debug;

use crate::error::{Error, ParseError};
use crate::graph::{Edge, WeightedGraph};
use crate::solve::Bottleneck;

/// A graph loaded from disk together with its expected answer, if recorded.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: String,
    pub graph: WeightedGraph<i64>,
    pub expected: Option<Bottleneck<i64>>,
}

/// Parse the vertex count and 0-based edge list out of a fixture.
pub fn parse_graph(text: &str) -> Result<(usize, Vec<Edge<i64>>), ParseError> {
    let mut declared: Option<(usize, usize)> = None;
    let mut edges = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let mut tokens = raw.split_whitespace();
        match tokens.next() {
            None | Some("c") => {}
            Some("p") => {
                if declared.is_some() {
                    return Err(syntax(line, "duplicate problem line"));
                }
                match tokens.next() {
                    Some("edge") => {}
                    Some(kind) => {
                        return Err(syntax(line, &format!("unsupported problem kind `{kind}`")));
                    }
                    None => return Err(syntax(line, "missing problem kind")),
                }
                let v = parse_number(tokens.next(), line, "vertex count")?;
                let e = parse_number(tokens.next(), line, "edge count")?;
                expect_end(tokens, line)?;
                declared = Some((v, e));
            }
            Some("e") => {
                let (vertex_count, _) = declared.ok_or(ParseError::MissingProblem)?;
                let u = parse_vertex(tokens.next(), line, vertex_count)?;
                let v = parse_vertex(tokens.next(), line, vertex_count)?;
                let w: i64 = parse_number(tokens.next(), line, "edge weight")?;
                expect_end(tokens, line)?;
                edges.push(Edge::new(u, v, w));
            }
            Some(other) => {
                return Err(syntax(line, &format!("unknown line type `{other}`")));
            }
        }
    }

    let (vertex_count, edge_count) = declared.ok_or(ParseError::MissingProblem)?;
    if edge_count != edges.len() {
        return Err(ParseError::EdgeCount {
            declared: edge_count,
            found: edges.len(),
        });
    }
    Ok((vertex_count, edges))
}

/// Parse the expected answer from the fixture's first line.
pub fn parse_solution(text: &str) -> Result<Bottleneck<i64>, ParseError> {
    let first = text.lines().next().ok_or(ParseError::MissingSolution)?;
    let mut tokens = first.split_whitespace();
    if tokens.next() != Some("c") {
        return Err(ParseError::MissingSolution);
    }
    match tokens.last() {
        Some("-inf") | Some("unreachable") => Ok(Bottleneck::Unreachable),
        Some(tok) => tok
            .parse()
            .map(Bottleneck::Value)
            .map_err(|_| ParseError::MissingSolution),
        None => Err(ParseError::MissingSolution),
    }
}

/// Parse a whole fixture. A missing or malformed solution line is not an error.
pub fn parse_fixture(name: &str, text: &str) -> Result<Fixture, Error> {
    let (vertex_count, edges) = parse_graph(text)?;
    let graph = WeightedGraph::new(vertex_count, edges)?;
    Ok(Fixture {
        name: name.to_string(),
        graph,
        expected: parse_solution(text).ok(),
    })
}

/// Read and parse a fixture file. The fixture is named after the file name.
pub fn load_fixture(path: &Path) -> Result<Fixture, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_fixture(&name, &text)
}

/// Load every regular file in `dir` as a fixture, sorted by name.
pub fn load_dir(dir: &Path) -> Result<Vec<Fixture>, Error> {
    let io_err = |source: std::io::Error| Error::Io {
        path: dir.display().to_string(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let fixtures = paths
        .iter()
        .map(|p| load_fixture(p))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(dir = %dir.display(), count = fixtures.len(), "loaded fixtures");
    Ok(fixtures)
}

fn syntax(line: usize, message: &str) -> ParseError {
    ParseError::Syntax {
        line,
        message: message.to_string(),
    }
}

fn parse_number<T: std::str::FromStr>(
    token: Option<&str>,
    line: usize,
    what: &str,
) -> Result<T, ParseError> {
    let token = token.ok_or_else(|| syntax(line, &format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| syntax(line, &format!("invalid {what} `{token}`")))
}

fn expect_end<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<(), ParseError> {
    match tokens.next() {
        Some(extra) => Err(syntax(line, &format!("unexpected trailing token `{extra}`"))),
        None => Ok(()),
    }
}

fn parse_vertex(
    token: Option<&str>,
    line: usize,
    vertex_count: usize,
) -> Result<usize, ParseError> {
    let vertex: usize = parse_number(token, line, "vertex")?;
    if vertex == 0 || vertex > vertex_count {
        return Err(ParseError::VertexOutOfRange {
            line,
            vertex,
            vertex_count,
        });
    }
    Ok(vertex - 1)
}
