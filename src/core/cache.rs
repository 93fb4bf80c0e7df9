//! Two-tier response cache: an in-memory LRU in front of JSON files on disk.
//!
//! Disk entries carry no metadata; freshness is judged from the file's
//! modification time against the key's [`CacheKey::max_age`].

use anyhow::Context;
use lru::LruCache;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
    time::{Duration, SystemTime},
};
use tracing::{debug, info, warn};

use crate::{
    error::Result,
    sleeper::types::{PlayerDatabase, WeekStats},
    Season, Week,
};

/// Directory name under the platform cache dir.
pub const CACHE_DIR_NAME: &str = "sleeper-ffl";

/// `~/.cache/sleeper-ffl` (or the platform equivalent).
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join(CACHE_DIR_NAME)
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Whether the file at `path` was modified less than `max_age` ago.
fn is_fresh(path: &Path, max_age: Duration) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age < max_age)
}

/// One file in the disk tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    pub name: String,
    pub bytes: u64,
    /// Seconds since the file was written
    pub age_secs: Option<u64>,
}

/// JSON files directly under `root`, sorted by name. A missing dir is empty.
pub fn disk_entries(root: &Path) -> anyhow::Result<Vec<CacheEntry>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let dir = fs::read_dir(root)
        .with_context(|| format!("failed to read cache dir {}", root.display()))?;

    let mut entries = Vec::new();
    for entry in dir {
        let entry = entry.with_context(|| format!("failed to list {}", root.display()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let meta = entry
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?;
        let age_secs = meta
            .modified()
            .ok()
            .and_then(|modified| SystemTime::now().duration_since(modified).ok())
            .map(|age| age.as_secs());

        entries.push(CacheEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            bytes: meta.len(),
            age_secs,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Delete every JSON file under `root`. Returns how many were removed.
pub fn clear_disk(root: &Path) -> anyhow::Result<usize> {
    let entries = disk_entries(root)?;
    for entry in &entries {
        let path = root.join(&entry.name);
        fs::remove_file(&path).with_context(|| format!("failed to remove {}", path.display()))?;
    }
    debug!(root = %root.display(), removed = entries.len(), "cleared disk cache");
    Ok(entries.len())
}

/// Key usable for both the memory and the disk tier
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File stem for the disk tier
    fn to_file_key(&self) -> String;

    /// How long a disk entry stays valid
    fn max_age(&self) -> Duration;

    fn to_file_path(&self, root: &Path) -> PathBuf {
        root.join(format!("{}.json", self.to_file_key()))
    }
}

/// The full `/players/nfl` dump
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerDatabaseKey;

impl CacheKey for PlayerDatabaseKey {
    fn to_file_key(&self) -> String {
        "players_nfl".to_string()
    }

    fn max_age(&self) -> Duration {
        Duration::from_secs(24 * 60 * 60)
    }
}

/// One week of `/stats/nfl/regular`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeekStatsKey {
    pub season: Season,
    pub week: Week,
}

impl CacheKey for WeekStatsKey {
    fn to_file_key(&self) -> String {
        format!(
            "week_stats_s{}_w{}",
            self.season.as_u16(),
            self.week.as_u16()
        )
    }

    fn max_age(&self) -> Duration {
        Duration::from_secs(6 * 60 * 60)
    }
}

/// LRU memory cache backed by JSON files under `root`
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    memory_cache: Mutex<LruCache<K, V>>,
    memory_capacity: usize,
    root: PathBuf,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + DeserializeOwned,
{
    /// Create a cache holding up to `memory_capacity` entries in memory
    pub fn new(root: impl Into<PathBuf>, memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            memory_capacity: capacity.get(),
            root: root.into(),
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Look in memory, then on disk (promoting disk hits to memory)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            debug!(key = %key.to_file_key(), "memory cache hit");
            return Some(value.clone());
        }

        let value = self.get_from_disk(key)?;
        info!(key = %key.to_file_key(), "disk cache hit");
        self.memory().put(key.clone(), value.clone());
        Some(value)
    }

    /// Store in memory and on disk. Disk failures are logged, not returned.
    pub fn put(&self, key: K, value: V) {
        if let Err(e) = self.put_to_disk(&key, &value) {
            warn!(key = %key.to_file_key(), error = %e, "failed to write cache file");
        }
        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = key.to_file_path(&self.root);
        if !is_fresh(&path, key.max_age()) {
            return None;
        }
        let content = try_read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable cache file");
                None
            }
        }
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let path = key.to_file_path(&self.root);
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    pub fn clear_memory(&self) {
        self.memory().clear();
    }

    /// (entries in memory, memory capacity)
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// The caches used by the Sleeper client
pub struct CacheManager {
    pub players: UnifiedCache<PlayerDatabaseKey, PlayerDatabase>,
    pub week_stats: UnifiedCache<WeekStatsKey, WeekStats>,
}

impl CacheManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            players: UnifiedCache::new(root.clone(), 1),
            week_stats: UnifiedCache::new(root, 32),
        }
    }

    pub fn clear_all_memory(&self) {
        self.players.clear_memory();
        self.week_stats.clear_memory();
    }

    pub fn root(&self) -> &Path {
        self.players.root()
    }

    /// Files currently in the disk tier
    pub fn entries(&self) -> Result<Vec<CacheEntry>> {
        Ok(disk_entries(self.root())?)
    }

    /// Empty both tiers. Returns the number of files removed.
    pub fn clear_all(&self) -> Result<usize> {
        info!(
            root = %self.root().display(),
            players_in_memory = self.players.memory_stats().0,
            weeks_in_memory = self.week_stats.memory_stats().0,
            "clearing cache"
        );
        self.clear_all_memory();
        Ok(clear_disk(self.root())?)
    }
}
