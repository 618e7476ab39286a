//! Configuration options.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::errors::Error;

const DEFAULT_CONFIG_FILE_NAME: &'static str = "./maglev.json";
const DEFAULT_LANDMARKS: usize = 8;
const DEFAULT_SEED: u64 = 0;

/// Search algorithm to answer queries with.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dijkstra,
    Alt,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "alt" => Ok(Algorithm::Alt),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Query options. Can be loaded from a JSON config file, command line flags
/// take precedence.
#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Graph file path.
    pub graph: Option<PathBuf>,

    /// Search algorithm, Dijkstra by default.
    pub algorithm: Option<Algorithm>,

    /// Number of landmarks ALT selects.
    pub landmarks: Option<usize>,

    /// Seed of the landmark selection.
    pub seed: Option<u64>,
}

impl Config {
    /// Reads the given config file, or `./maglev.json` if there is one.
    /// Without any file all options are left unset.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let path = match path {
            Some(path) => path,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE_NAME);
                if !default_path.is_file() {
                    debug!("No config file at [{}]", default_path.display());
                    return Ok(Config::default());
                }
                default_path
            }
        };
        debug!("Reading config file [{}]", path.display());
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(data)?)
    }

    /// Options set in `overrides` replace the ones set here.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            graph: overrides.graph.or(self.graph),
            algorithm: overrides.algorithm.or(self.algorithm),
            landmarks: overrides.landmarks.or(self.landmarks),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or(Algorithm::Dijkstra)
    }

    pub fn landmarks(&self) -> usize {
        self.landmarks.unwrap_or(DEFAULT_LANDMARKS)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = Config::parse(r#"{ "graph": "roads.json", "algorithm": "alt", "landmarks": 4 }"#).expect("valid config");
        assert_eq!(config.graph, Some(PathBuf::from("roads.json")));
        assert_eq!(config.algorithm(), Algorithm::Alt);
        assert_eq!(config.landmarks(), 4);
        assert_eq!(config.seed(), DEFAULT_SEED);

        assert!(Config::parse(r#"{ "algorithm": "bfs" }"#).is_err());
        assert!(Config::parse(r#"{ "landmark": 4 }"#).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::parse("{}").expect("valid config");
        assert_eq!(config, Config::default());
        assert_eq!(config.algorithm(), Algorithm::Dijkstra);
        assert_eq!(config.landmarks(), DEFAULT_LANDMARKS);
    }

    #[test]
    fn test_merge() {
        let file = Config {
            graph: Some(PathBuf::from("a.json")),
            algorithm: Some(Algorithm::Alt),
            landmarks: Some(4),
            seed: None,
        };
        let flags = Config {
            graph: Some(PathBuf::from("b.json")),
            seed: Some(9),
            ..Config::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.graph, Some(PathBuf::from("b.json")));
        assert_eq!(merged.algorithm(), Algorithm::Alt);
        assert_eq!(merged.landmarks(), 4);
        assert_eq!(merged.seed(), 9);
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("dijkstra".parse::<Algorithm>().ok(), Some(Algorithm::Dijkstra));
        assert_eq!("alt".parse::<Algorithm>().ok(), Some(Algorithm::Alt));
        assert!(matches!("astar".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_missing_config_file() {
        assert!(matches!(Config::load(Some(Path::new("/nonexistent/maglev.json"))), Err(Error::FileRead(_))));
    }
}
