//! Cache listing and cleanup.

use serde::Serialize;

use crate::{
    config::ClientConfig,
    core::{cache::CacheEntry, CacheManager},
    Result,
};

use super::common::{print_json, with_commas};

#[derive(Debug, Serialize)]
struct CacheReport<'a> {
    dir: String,
    entries: &'a [CacheEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    removed: Option<usize>,
}

/// `95` -> `"1m"`, `7200` -> `"2h"`
fn format_age(age_secs: Option<u64>) -> String {
    match age_secs {
        None => "?".to_string(),
        Some(s) if s < 60 => format!("{s}s"),
        Some(s) if s < 3_600 => format!("{}m", s / 60),
        Some(s) if s < 86_400 => format!("{}h", s / 3_600),
        Some(s) => format!("{}d", s / 86_400),
    }
}

pub fn handle_cache(clear: bool, json: bool) -> Result<()> {
    let config = ClientConfig::from_flags(None, false);
    let caches = CacheManager::new(config.cache_dir);

    let removed = if clear {
        Some(caches.clear_all()?)
    } else {
        None
    };
    let entries = caches.entries()?;
    let dir = caches.root().display().to_string();

    if json {
        return print_json(&CacheReport {
            dir,
            entries: &entries,
            removed,
        });
    }

    if let Some(n) = removed {
        println!("🗑 Removed {n} cached files from {dir}");
        return Ok(());
    }

    println!("📁 CACHE ({dir})");
    if entries.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  {:<32} {:>12} bytes  {:>4} old",
            entry.name,
            with_commas(entry.bytes),
            format_age(entry.age_secs)
        );
    }

    Ok(())
}
