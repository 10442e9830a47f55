use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "./code-samples.yaml";
pub const DEFAULT_OUTPUT_DIR: &str = "code_samples";

/// Where samples are read from and where artifacts land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_working_directory() {
        let config = GeneratorConfig::default();
        assert_eq!(config.input, PathBuf::from("./code-samples.yaml"));
        assert_eq!(config.output_dir, PathBuf::from("code_samples"));
    }
}
