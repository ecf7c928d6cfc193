// src/filtering/size.rs

use crate::config::DiscoveryConfig;
use std::fs::Metadata;

/// Checks if the file's size is within the configured limit.
#[inline]
pub(crate) fn passes_size_filter(metadata: &Metadata, config: &DiscoveryConfig) -> bool {
    match config.max_size {
        Some(max_size) => (metadata.len() as u128) <= max_size,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscoveryConfig;
    use std::fs;
    use tempfile::tempdir;

    fn config_with(max_size: Option<u128>) -> DiscoveryConfig {
        let mut config = DiscoveryConfig::default_for_test();
        config.max_size = max_size;
        config
    }

    #[test]
    fn test_size_no_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("file.txt");
        fs::write(&path, "12345")?;
        assert!(passes_size_filter(&fs::metadata(&path)?, &config_with(None)));
        Ok(())
    }

    #[test]
    fn test_size_within_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("file.txt");
        fs::write(&path, "12345")?;
        assert!(passes_size_filter(
            &fs::metadata(&path)?,
            &config_with(Some(5))
        ));
        Ok(())
    }

    #[test]
    fn test_size_over_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("file.txt");
        fs::write(&path, "123456")?;
        assert!(!passes_size_filter(
            &fs::metadata(&path)?,
            &config_with(Some(5))
        ));
        Ok(())
    }
}
