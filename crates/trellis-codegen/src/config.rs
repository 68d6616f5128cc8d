use serde::{Deserialize, Serialize};

/// Generator settings.
///
/// Deserializes from a JSON object; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the runtime crate generated code refers to.
    pub runtime: String,

    /// Name of the module holding the regenerated files of each table.
    pub generated_module: String,

    /// Translate tables on the rayon thread pool.
    pub parallel: bool,
}

impl Config {
    pub fn from_json(src: &str) -> trellis_core::Result<Config> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn runtime(&mut self, path: impl Into<String>) -> &mut Self {
        self.runtime = path.into();
        self
    }

    pub fn generated_module(&mut self, name: impl Into<String>) -> &mut Self {
        self.generated_module = name.into();
        self
    }

    pub fn parallel(&mut self, parallel: bool) -> &mut Self {
        self.parallel = parallel;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: "trellis_core".to_string(),
            generated_module: "generated".to_string(),
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::from_json(r#"{ "parallel": false }"#).unwrap();
        assert_eq!(config.runtime, "trellis_core");
        assert_eq!(config.generated_module, "generated");
        assert!(!config.parallel);
    }

    #[test]
    fn setters_chain() {
        let mut config = Config::default();
        config.runtime("crate::rt").parallel(false);
        assert_eq!(config.runtime, "crate::rt");
        assert!(!config.parallel);
    }
}
