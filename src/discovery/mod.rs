//! Discovers candidate files based on configuration, applying filters.
//!
//! Discovery is the external-facing adapter of the pipeline: it supplies a
//! deterministic sequence of file paths and reads no file content. Each
//! discovered file is processed independently downstream, so the only
//! ordering that matters is that it is stable across runs.

use crate::cancellation::CancellationToken;
use crate::config::Config;
use crate::core_types::FileInfo;
use crate::errors::AppError;
use log::debug;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks the input path and returns every file that passes the configured
/// filters, sorted by relative path for deterministic processing order.
///
/// # Errors
/// Returns [`AppError::Interrupted`] when the token is cancelled mid-walk.
pub fn discover_files(
    config: &Config,
    token: &CancellationToken,
) -> Result<Vec<FileInfo>, AppError> {
    if token.is_cancelled() {
        return Err(AppError::Interrupted);
    }

    let mut files = Vec::new();
    for entry_result in build_walker(config) {
        if token.is_cancelled() {
            return Err(AppError::Interrupted);
        }
        if let Some(file_info) = process_direntry(entry_result, config)? {
            files.push(file_info);
        }
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Discovery complete: {} candidate file(s).", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn config_for(path: &std::path::Path) -> Config {
        let mut config = Config::new_for_test();
        config.input_path = path.to_path_buf();
        config
    }

    #[test]
    fn test_discover_sorts_by_relative_path() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("z.ts"), "z")?;
        fs::write(temp.path().join("a.ts"), "a")?;
        fs::create_dir(temp.path().join("mid"))?;
        fs::write(temp.path().join("mid/m.ts"), "m")?;

        let files = discover_files(&config_for(temp.path()), &CancellationToken::new())?;
        let names: Vec<_> = files
            .iter()
            .map(|f| f.relative_path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ts", "mid/m.ts", "z.ts"]);
        Ok(())
    }

    #[test]
    fn test_discover_applies_extension_filter() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("keep.tsx"), "x")?;
        fs::write(temp.path().join("skip.rs"), "x")?;

        let mut config = config_for(temp.path());
        config.discovery.extensions = Some(vec!["tsx".to_string()]);
        let files = discover_files(&config, &CancellationToken::new())?;
        assert_eq!(files.len(), 1);
        assert!(files[0].relative_path.ends_with("keep.tsx"));
        Ok(())
    }

    #[test]
    fn test_discover_single_file_input() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("only.ts");
        fs::write(&file_path, "x")?;

        let mut config = config_for(&file_path);
        config.input_is_file = true;
        let files = discover_files(&config, &CancellationToken::new())?;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative_path.to_str(), Some("only.ts"));
        Ok(())
    }

    #[test]
    fn test_discover_honors_cancellation() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.ts"), "x")?;

        let token = CancellationToken::new();
        token.cancel();
        let result = discover_files(&config_for(temp.path()), &token);
        assert!(matches!(result, Err(AppError::Interrupted)));
        Ok(())
    }
}
