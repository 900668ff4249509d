use std::fmt;

#[derive(Debug)]
pub enum ScenarioError {
    /// Scenario file or directory could not be read
    Load { path: String, source: std::io::Error },

    /// Scenario YAML did not parse
    Parse {
        path: String,
        source: serde_yaml::Error,
    },

    /// A step or check references a field the fixture does not define
    UnknownField { field: String, context: String },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Load { path, source } => {
                write!(f, "Failed to read scenario '{}': {}", path, source)
            }
            ScenarioError::Parse { path, source } => {
                write!(f, "Failed to parse scenario '{}': {}", path, source)
            }
            ScenarioError::UnknownField { field, context } => {
                write!(f, "Unknown field '{}': {}", field, context)
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Load { source, .. } => Some(source),
            ScenarioError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}
