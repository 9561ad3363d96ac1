//! CLI command implementations.

pub mod clean;
pub mod scan;

use crate::config::Config;
use crate::scanner::{MatchedDir, ScanOptions, TargetNames};
use humansize::{format_size, BINARY};

/// Build scan options from CLI flags, falling back to the config file.
pub(crate) fn scan_options(
    cli_targets: &[String],
    cli_max_depth: Option<usize>,
    config: &Config,
) -> ScanOptions {
    let targets = if cli_targets.is_empty() {
        TargetNames::new(config.scanner.target_names.clone())
    } else {
        TargetNames::new(cli_targets.to_vec())
    };

    let max_depth = cli_max_depth.or(match config.scanner.max_depth {
        0 => None,
        depth => Some(depth),
    });

    ScanOptions {
        targets,
        max_depth,
        follow_symlinks: config.scanner.follow_symlinks,
    }
}

pub(crate) fn print_matches_table(matches: &[MatchedDir]) {
    println!("\n  {:<14} {:<50} {:>10}", "TYPE", "PATH", "SIZE");
    println!("  {}", "─".repeat(76));

    for m in matches {
        let path_display = truncate_left(&m.path.display().to_string(), 48);

        println!(
            "  {:<14} {:<50} {:>10}",
            m.name,
            path_display,
            format_size(m.size, BINARY),
        );
    }
}

/// Keep the last `max_bytes` bytes of `text`, prefixed with an ellipsis
/// when shortened. Never splits a multi-byte character.
fn truncate_left(text: &str, max_bytes: usize) -> String {
    if text.len() <= max_bytes {
        return text.to_string();
    }

    let mut start = text.len() - (max_bytes - 3);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &text[start..])
}
