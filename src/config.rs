use serde::Deserialize;
use std::path::Path;

use crate::engine::{BinaryOp, CycleGuard, Resolver, DEFAULT_MAX_DEPTH};
use crate::error::ConfigError;

/// Resolver settings read from a YAML or JSON file. Missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub operator: BinaryOp,
    pub cycle_guard: CycleGuard,
    pub max_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            operator: BinaryOp::default(),
            cycle_guard: CycleGuard::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SolverConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match extension.as_str() {
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            "json" => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            other => return Err(ConfigError::unsupported_format(path, other)),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    pub fn resolver(&self) -> Resolver {
        Resolver::builder()
            .with_operator(self.operator)
            .with_cycle_guard(self.cycle_guard)
            .with_max_depth(self.max_depth)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.operator, BinaryOp::Add);
        assert_eq!(config.cycle_guard, CycleGuard::Path);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_load_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solver.yaml");
        fs::write(&path, "operator: mul\ncycle_guard: root\nmax_depth: 32\n").unwrap();

        let config = SolverConfig::load(&path).unwrap();
        assert_eq!(
            config,
            SolverConfig {
                operator: BinaryOp::Mul,
                cycle_guard: CycleGuard::Root,
                max_depth: 32,
            }
        );
    }

    #[test]
    fn test_load_json_partial() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solver.json");
        fs::write(&path, r#"{"operator": "max"}"#).unwrap();

        let config = SolverConfig::load(&path).unwrap();
        assert_eq!(config.operator, BinaryOp::Max);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solver.yml");
        fs::write(&path, "operatr: add\n").unwrap();

        assert!(matches!(
            SolverConfig::load(&path),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solver.toml");
        fs::write(&path, "operator = 'add'").unwrap();

        assert!(matches!(
            SolverConfig::load(&path),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_zero_depth_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("solver.json");
        fs::write(&path, r#"{"max_depth": 0}"#).unwrap();

        assert!(matches!(
            SolverConfig::load(&path),
            Err(ConfigError::ZeroDepth)
        ));
    }

    #[test]
    fn test_resolver_uses_config() {
        let config = SolverConfig {
            operator: BinaryOp::Max,
            cycle_guard: CycleGuard::Root,
            max_depth: 5,
        };
        let resolver = config.resolver();
        assert_eq!(resolver.cycle_guard(), CycleGuard::Root);
        assert_eq!(resolver.max_depth(), 5);
    }
}
