// src/filtering/extension.rs

use crate::config::DiscoveryConfig;
use std::path::Path;

/// Checks if a path passes the include/exclude extension filters.
///
/// Exclusion takes precedence over inclusion; when an include list is set a
/// file must have an extension on it. Comparison is case-insensitive (the
/// config stores extensions lowercased).
///
/// # Examples
///
/// ```
/// use demojibake::config::DiscoveryConfig;
/// use demojibake::filtering::passes_extension_filters;
/// use std::path::Path;
///
/// let mut config = DiscoveryConfig::default_for_test();
/// config.extensions = Some(vec!["tsx".to_string(), "ts".to_string()]);
///
/// assert!(passes_extension_filters(Path::new("src/App.tsx"), &config));
/// assert!(!passes_extension_filters(Path::new("logo.png"), &config));
/// assert!(!passes_extension_filters(Path::new("Makefile"), &config));
/// ```
pub fn passes_extension_filters(path: &Path, config: &DiscoveryConfig) -> bool {
    let extension = path
        .extension()
        .and_then(|os_str| os_str.to_str())
        .map(|s| s.to_lowercase());

    // 1. Check exclude extensions first
    if let Some(ref exclude_exts) = config.exclude_extensions {
        if let Some(ref ext) = extension {
            if exclude_exts.contains(ext) {
                return false;
            }
        }
    }

    // 2. Check include extensions if specified
    if let Some(ref include_exts) = config.extensions {
        match extension {
            Some(ref ext) if include_exts.contains(ext) => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiscoveryConfig;

    fn config_with(
        extensions: Option<Vec<&str>>,
        exclude_extensions: Option<Vec<&str>>,
    ) -> DiscoveryConfig {
        let mut config = DiscoveryConfig::default_for_test();
        config.extensions = extensions.map(|v| v.iter().map(|s| s.to_lowercase()).collect());
        config.exclude_extensions =
            exclude_extensions.map(|v| v.iter().map(|s| s.to_lowercase()).collect());
        config
    }

    #[test]
    fn test_ext_no_filters() {
        let config = config_with(None, None);
        assert!(passes_extension_filters(Path::new("file.txt"), &config));
        assert!(passes_extension_filters(Path::new("file"), &config));
    }

    #[test]
    fn test_ext_include() {
        let config = config_with(Some(vec!["tsx", "css"]), None);
        assert!(passes_extension_filters(Path::new("a.tsx"), &config));
        assert!(passes_extension_filters(Path::new("A.TSX"), &config)); // Case insensitive
        assert!(!passes_extension_filters(Path::new("a.rs"), &config));
        assert!(!passes_extension_filters(Path::new("Makefile"), &config)); // No extension fails include
    }

    #[test]
    fn test_ext_exclude() {
        let config = config_with(None, Some(vec!["png", "lock"]));
        assert!(passes_extension_filters(Path::new("a.ts"), &config));
        assert!(!passes_extension_filters(Path::new("logo.png"), &config));
        assert!(!passes_extension_filters(Path::new("logo.PNG"), &config)); // Case insensitive
        assert!(passes_extension_filters(Path::new("Makefile"), &config)); // No extension passes exclude
    }

    #[test]
    fn test_ext_exclude_takes_precedence() {
        let config = config_with(Some(vec!["ts", "css"]), Some(vec!["css"]));
        assert!(passes_extension_filters(Path::new("a.ts"), &config));
        assert!(!passes_extension_filters(Path::new("a.css"), &config));
    }
}
