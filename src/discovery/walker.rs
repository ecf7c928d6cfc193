// src/discovery/walker.rs

use crate::config::Config;
use glob::Pattern;
use ignore::WalkBuilder;
use log::debug;

/// Configures and builds the `ignore` walker based on `Config`.
pub(super) fn build_walker(config: &Config) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(&config.input_path);

    walker_builder.standard_filters(config.discovery.use_gitignore);
    debug!(
        "Configuring WalkBuilder: standard_filters {}.",
        if config.discovery.use_gitignore {
            "enabled"
        } else {
            "disabled"
        }
    );

    // Process .gitignore files even when the tree does not look like a full
    // git repository.
    walker_builder.require_git(false);

    if !config.discovery.recursive {
        // Max depth 1 means only the immediate children of the input path.
        // If the input is a file, the walker yields just that file.
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    }

    // --- Add custom filter ONLY if custom ignore patterns are provided ---
    if let Some(ignore_patterns) = &config.discovery.ignore_patterns {
        let custom_ignore_globs: Vec<Pattern> = ignore_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(glob) => Some(glob),
                Err(e) => {
                    log::warn!("Invalid ignore glob pattern '{}': {}", p, e);
                    None // Skip invalid patterns
                }
            })
            .collect();

        if !custom_ignore_globs.is_empty() {
            let input_path = config.input_path.clone();
            walker_builder.filter_entry(move |entry| {
                let path = entry.path();
                // Match globs against the path relative to the input path,
                // falling back to the full path if stripping fails.
                let candidate = path.strip_prefix(&input_path).unwrap_or(path);
                let skip = custom_ignore_globs
                    .iter()
                    .any(|glob| glob.matches_path(candidate));
                if skip {
                    debug!("Skipping {:?}: matches a custom ignore glob", path);
                }
                !skip
            });
        }
    }

    walker_builder.build()
}
