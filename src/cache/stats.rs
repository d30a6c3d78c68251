//! Cache Statistics Module
//!
//! Fetch counters kept by backends that can report them.

use serde::Serialize;

// == Cache Stats ==
/// Hit and miss counters of one backend, shared by every prefix on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Fetches that found a live entry
    pub hits: u64,
    /// Fetches that found nothing, including expired entries
    pub misses: u64,
    pub total_entries: usize,
}

impl CacheStats {
    /// Counts one fetch as a hit or a miss.
    pub fn record_fetch(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Share of fetches that were hits; 0.0 before the first fetch.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate_counts_every_fetch() {
        let mut stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);

        for hit in [true, true, true, false] {
            stats.record_fetch(hit);
        }
        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.hit_rate(), 0.75);
    }
}
