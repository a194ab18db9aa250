// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

use serde::{Deserialize, Serialize};

/// Default cap on partial paths held by one path expansion.
pub const DEFAULT_MAX_EXPLORED_PATHS: usize = 1_000_000;

/// How cycle detection searches the graph.
///
/// Both strategies report a cycle exactly when some simple path from a node
/// can be closed back to it over a link the path has not used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleSearch {
    /// Depth-first search for a back link. Linear in the graph size.
    #[default]
    DepthFirst,
    /// Expand every simple path from each node and test for a closing link.
    /// Exponential on dense graphs; bounded by `max_explored_paths`.
    PathClosure,
}

/// Tuning knobs for graph analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum number of partial paths a single expansion may create before
    /// failing with `ResourceExceeded` (default: 1_000_000). `None` lets path
    /// enumeration run unbounded.
    pub max_explored_paths: Option<usize>,
    /// Cycle detection strategy (default: depth-first)
    pub cycle_search: CycleSearch,
}

impl AnalysisConfig {
    /// Configuration with no exploration cap.
    pub fn unbounded() -> Self {
        Self {
            max_explored_paths: None,
            ..Self::default()
        }
    }

    pub fn with_max_explored_paths(mut self, limit: usize) -> Self {
        self.max_explored_paths = Some(limit);
        self
    }

    pub fn with_cycle_search(mut self, cycle_search: CycleSearch) -> Self {
        self.cycle_search = cycle_search;
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_explored_paths: Some(DEFAULT_MAX_EXPLORED_PATHS),
            cycle_search: CycleSearch::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.max_explored_paths, Some(DEFAULT_MAX_EXPLORED_PATHS));
        assert_eq!(config.cycle_search, CycleSearch::DepthFirst);
        assert_eq!(AnalysisConfig::unbounded().max_explored_paths, None);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());

        let config: AnalysisConfig =
            serde_json::from_str(r#"{"max_explored_paths": null}"#).unwrap();
        assert_eq!(config, AnalysisConfig::unbounded());

        let config: AnalysisConfig = serde_json::from_str(
            r#"{"max_explored_paths": 50, "cycle_search": "path_closure"}"#,
        )
        .unwrap();
        assert_eq!(config.max_explored_paths, Some(50));
        assert_eq!(config.cycle_search, CycleSearch::PathClosure);
    }
}
