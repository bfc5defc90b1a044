use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario file")]
    Parse(#[from] toml::de::Error),
    #[error("a round needs at least 2 units, scenario has {0}")]
    TooFewUnits(usize),
}
