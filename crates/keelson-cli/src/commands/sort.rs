use super::{json_pretty, read_bundle, EXIT_SUCCESS};
use keelson_core::{sort_manifests, SortedResources};
use keelson_schema::{SortOrder, VersionSet};
use std::path::Path;
use tracing::debug;

pub fn run(
    source: &Path,
    versions: &VersionSet,
    order: SortOrder,
    json: bool,
) -> Result<u8, String> {
    let files = read_bundle(source)?;
    debug!("read {} sources from {}", files.len(), source.display());

    let sorted =
        sort_manifests(&files, versions, order).map_err(|e| format!("manifest error: {e}"))?;

    if json {
        println!("{}", json_pretty(&sorted)?);
    } else {
        print_table(&sorted, order);
    }
    Ok(EXIT_SUCCESS)
}

fn print_table(sorted: &SortedResources, order: SortOrder) {
    println!("{order} order");
    println!();
    if sorted.hooks.is_empty() {
        println!("no hooks");
    } else {
        println!("{:<8} {:<24} {:<32} EVENTS", "WEIGHT", "KIND", "NAME");
        for hook in &sorted.hooks {
            let events: Vec<&str> = hook.events.iter().map(|e| e.as_str()).collect();
            println!(
                "{:<8} {:<24} {:<32} {}",
                hook.weight,
                hook.kind,
                hook.name,
                events.join(",")
            );
        }
    }
    println!();
    if sorted.manifests.is_empty() {
        println!("no manifests");
    } else {
        println!("{:<8} {:<24} SOURCE", "WEIGHT", "KIND");
        for manifest in &sorted.manifests {
            println!(
                "{:<8} {:<24} {}",
                manifest.weight, manifest.head.kind, manifest.name
            );
        }
    }
}
