//! Two-tier cache for slow-changing provider responses
//!
//! - L1 Cache: In-memory LRU cache for repeated lookups within a run
//! - L2 Cache: JSON files under the user cache directory, honoured only while
//!   younger than the cache's freshness window
//!
//! Only the player directory goes through here. Weekly stats change during
//! games and are always fetched live.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
    time::{Duration, SystemTime},
};

/// How long a cached player directory stays usable (the provider asks
/// clients to refresh it at most daily).
pub const PLAYERS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Path: ~/.cache/ffl-playoffs
pub fn cache_base_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("ffl-playoffs")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// True when `path` exists and was modified less than `max_age` ago.
pub fn is_fresh(path: &Path, max_age: Duration) -> bool {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|modified| SystemTime::now().duration_since(modified).ok())
        .is_some_and(|age| age < max_age)
}

/// Key usable for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File stem used for disk storage
    fn to_file_key(&self) -> String;
}

/// Cache key for the provider's full player listing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayersCacheKey {
    pub sport: String,
}

impl PlayersCacheKey {
    pub fn nfl() -> Self {
        Self {
            sport: "nfl".to_string(),
        }
    }
}

impl CacheKey for PlayersCacheKey {
    fn to_file_key(&self) -> String {
        format!("players_{}", self.sport)
    }
}

/// LRU memory cache backed by file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Mutex<LruCache<K, V>>,
    dir: PathBuf,
    max_age: Duration,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Cache persisting under [`cache_base_dir`]
    pub fn new(memory_capacity: usize, max_age: Duration) -> Self {
        Self::with_dir(memory_capacity, cache_base_dir(), max_age)
    }

    /// Cache persisting under an explicit directory
    pub fn with_dir(memory_capacity: usize, dir: impl Into<PathBuf>, max_age: Duration) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Mutex::new(LruCache::new(capacity)),
            dir: dir.into(),
            max_age,
        }
    }

    fn memory(&self) -> MutexGuard<'_, LruCache<K, V>> {
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Disk location for a key
    pub fn file_path(&self, key: &K) -> PathBuf {
        self.dir.join(format!("{}.json", key.to_file_key()))
    }

    /// Get an item from cache (checks memory first, then fresh disk entries)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            return Some(value.clone());
        }

        let value = self.get_from_disk(key)?;
        self.memory().put(key.clone(), value.clone());
        Some(value)
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) -> std::io::Result<()> {
        self.memory().put(key.clone(), value.clone());
        self.put_to_disk(&key, &value)
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.file_path(key);
        if !is_fresh(&path, self.max_age) {
            return None;
        }
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let content = serde_json::to_string(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&self.file_path(key), &content)
    }

    /// Drop a key from both tiers
    pub fn invalidate(&self, key: &K) -> std::io::Result<()> {
        self.memory().pop(key);
        let path = self.file_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
