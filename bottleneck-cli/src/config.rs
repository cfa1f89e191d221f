use std::path::Path;

use anyhow::{bail, Context, Result};
use bottleneck::{SolveOptions, Strategy};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub strategy: Option<&'a str>,
    /// 1-based, as written on the command line.
    pub start: Option<usize>,
    /// 1-based, as written on the command line.
    pub goal: Option<usize>,
}

/// Build solver options from an optional TOML file plus command-line overrides.
///
/// Query vertices in the file are 0-based, matching the library.
pub fn resolve(config_path: Option<&Path>, overrides: &Overrides) -> Result<SolveOptions> {
    let mut options = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            SolveOptions::from_toml(&text)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => SolveOptions::default(),
    };

    if let Some(name) = overrides.strategy {
        options.strategy = Strategy::from_name(name)
            .with_context(|| format!("unknown strategy: {name} (binary-search, forest, both)"))?;
    }
    if let Some(start) = overrides.start {
        options.query.start = zero_based(start, "--start")?;
    }
    if let Some(goal) = overrides.goal {
        options.query.goal = zero_based(goal, "--goal")?;
    }
    Ok(options)
}

fn zero_based(vertex: usize, flag: &str) -> Result<usize> {
    if vertex == 0 {
        bail!("{flag} uses 1-based vertex numbers");
    }
    Ok(vertex - 1)
}
