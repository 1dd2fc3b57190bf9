/// Page size limits for paginated requests
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            default_page_size: 25,
            max_page_size: 100,
        }
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn with_max_page_size(mut self, max: usize) -> Self {
        self.max_page_size = max;
        self
    }

    /// Apply the default and the upper bound to a requested page size.
    ///
    /// Zero and negative sizes pass through untouched so validation rejects
    /// them instead of them being fixed up here.
    pub fn resolve_page_size(&self, requested: Option<i64>) -> i64 {
        let max = i64::try_from(self.max_page_size).unwrap_or(i64::MAX);
        let default = i64::try_from(self.default_page_size).unwrap_or(max);
        requested.unwrap_or(default).min(max)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_page_size_defaults_and_caps() {
        let config = PaginationConfig::new().with_max_page_size(50);
        assert_eq!(config.resolve_page_size(None), 25);
        assert_eq!(config.resolve_page_size(Some(10)), 10);
        assert_eq!(config.resolve_page_size(Some(500)), 50);
    }

    #[test]
    fn test_resolve_page_size_keeps_invalid_values() {
        let config = PaginationConfig::default();
        assert_eq!(config.resolve_page_size(Some(0)), 0);
        assert_eq!(config.resolve_page_size(Some(-3)), -3);
    }
}
