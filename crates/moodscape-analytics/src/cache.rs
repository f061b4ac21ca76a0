//! Explicit cache of aggregate results.
//!
//! Aggregation is pure, so a result can be reused whenever the same entry
//! set is aggregated over the same window at the same `now`. The cache is an
//! owned object handed to whoever wants it; there is no global instance.
//!
//! Keys are SHA-256 digests over every field the aggregator reads, so any
//! edit to an entry produces a different key. Eviction is oldest-first once
//! `capacity` results are held.

use std::collections::VecDeque;
use std::fmt;

use moodscape_core::MoodEntry;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

use crate::trends::AggregateResult;

/// Cache key: hex SHA-256 of an entry set plus window and `now`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateCacheKey(String);

impl AggregateCacheKey {
    /// Compute the key for aggregating `entries` over `window_days` ending at `now_ms`.
    ///
    /// Entry order matters: the same entries in a different order hash to a
    /// different key even though the aggregate would be identical.
    pub fn compute(entries: &[MoodEntry], window_days: i64, now_ms: i64) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(window_days.to_le_bytes());
        hasher.update(now_ms.to_le_bytes());
        hasher.update((entries.len() as u64).to_le_bytes());

        for entry in entries {
            hasher.update((entry.id.len() as u64).to_le_bytes());
            hasher.update(entry.id.as_bytes());
            hasher.update(entry.timestamp.to_le_bytes());
            hasher.update([entry.dominant_emotion.index() as u8]);
            hasher.update(entry.source.as_str().as_bytes());
            for (_, score) in entry.emotions.iter() {
                hasher.update(score.to_bits().to_le_bytes());
            }
            hasher.update(entry.derived.energy.to_bits().to_le_bytes());
            hasher.update(entry.derived.calmness.to_bits().to_le_bytes());
            hasher.update(entry.derived.tension.to_bits().to_le_bytes());
            hasher.update(entry.confidence.to_bits().to_le_bytes());
        }

        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AggregateCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hit/miss counters for an [`AggregateCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Hit ratio in `[0, 1]`; 0 before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Bounded FIFO cache of aggregate results.
#[derive(Debug, Clone)]
pub struct AggregateCache {
    capacity: usize,
    entries: VecDeque<(AggregateCacheKey, AggregateResult)>,
    stats: CacheStats,
}

impl AggregateCache {
    /// Create a cache holding at most `capacity` results. A capacity of 0
    /// is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Look up a result, counting the hit or miss.
    pub fn get(&mut self, key: &AggregateCacheKey) -> Option<&AggregateResult> {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.stats.hits += 1;
                trace!(key = %key, "aggregate cache hit");
                self.entries.get(index).map(|(_, result)| result)
            }
            None => {
                self.stats.misses += 1;
                trace!(key = %key, "aggregate cache miss");
                None
            }
        }
    }

    /// Store a result, replacing any previous value under the same key and
    /// evicting the oldest result when full.
    pub fn insert(&mut self, key: AggregateCacheKey, result: AggregateResult) {
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(index);
        } else if self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.pop_front() {
                self.stats.evictions += 1;
                trace!(key = %evicted, "evicted aggregate");
            }
        }
        self.entries.push_back((key, result));
        self.stats.insertions += 1;
    }

    /// Return the cached result for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: AggregateCacheKey, compute: F) -> AggregateResult
    where
        F: FnOnce() -> AggregateResult,
    {
        if let Some(hit) = self.get(&key) {
            return hit.clone();
        }
        let result = compute();
        self.insert(key, result.clone());
        result
    }

    /// Drop every cached result. Counters are kept.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Drop every cached result and zero the counters.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}
