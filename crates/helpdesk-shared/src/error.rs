//! Error types for the helpdesk.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Rule '{rule}' has an invalid pattern {pattern:?}: {source}")]
    Pattern {
        rule: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelpdeskError {
    /// Process exit code (sysexits.h: EX_CONFIG, EX_IOERR)
    pub fn code(&self) -> i32 {
        match self {
            HelpdeskError::Catalog(_) | HelpdeskError::Pattern { .. } => 78,
            HelpdeskError::Io(_) => 74,
        }
    }
}

impl From<toml::de::Error> for HelpdeskError {
    fn from(err: toml::de::Error) -> Self {
        HelpdeskError::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(HelpdeskError::Catalog("no rules".into()).code(), 78);

        let source = regex::Regex::new("(open").unwrap_err();
        let err = HelpdeskError::Pattern {
            rule: "Power".into(),
            pattern: "(open".into(),
            source,
        };
        assert_eq!(err.code(), 78);

        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(HelpdeskError::from(io).code(), 74);
    }

    #[test]
    fn test_toml_errors_become_catalog_errors() {
        let err: HelpdeskError = toml::from_str::<toml::Value>("a = = b").unwrap_err().into();
        assert!(matches!(err, HelpdeskError::Catalog(_)));
        assert_eq!(err.code(), 78);
    }
}
