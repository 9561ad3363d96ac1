//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::scanner::scan;
use anyhow::Result;
use humansize::{format_size, BINARY};

/// Run the scan command.
pub fn run(args: ScanArgs, config: &Config) -> Result<()> {
    // Resolve to absolute path
    let path = args
        .path
        .canonicalize()
        .unwrap_or_else(|_| args.path.clone());

    let options = super::scan_options(&args.target, args.max_depth, config);

    tracing::info!(path = %path.display(), "Scanning for dependency caches");
    let mut matches = scan(&path, &options);

    // Directory listing order is filesystem-dependent; sort for stable output
    matches.sort_by(|a, b| a.path.cmp(&b.path));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No dependency caches found.");
        return Ok(());
    }

    super::print_matches_table(&matches);

    let total_size: u64 = matches.iter().map(|m| m.size).sum();
    println!(
        "\nTotal: {} in {} folder{}",
        format_size(total_size, BINARY),
        matches.len(),
        if matches.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
