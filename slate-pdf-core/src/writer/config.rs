/// Settings for a write pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    /// Version written in the `%PDF-x.y` header line.
    pub pdf_version: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pdf_version: "1.7".to_string(),
        }
    }
}

impl WriterConfig {
    pub fn with_version(pdf_version: impl Into<String>) -> Self {
        Self {
            pdf_version: pdf_version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version() {
        assert_eq!(WriterConfig::default().pdf_version, "1.7");
        assert_eq!(WriterConfig::with_version("1.4").pdf_version, "1.4");
    }
}
