//! Vertical broad phase
//!
//! Buckets obstacle indices by the vertical span each obstacle can ever
//! occupy, so a step only inspects obstacles near the body's height. Query
//! results are returned in ascending catalog order, which keeps first-match
//! support selection identical to a full scan.

use std::collections::BTreeMap;

/// Default bucket height in world units.
pub const DEFAULT_BUCKET_HEIGHT: f32 = 4.0;

/// Bucketed index over obstacle vertical spans.
#[derive(Debug, Clone)]
pub struct HeightIndex {
    bucket_height: f32,
    buckets: BTreeMap<i32, Vec<usize>>,
    len: usize,
}

impl HeightIndex {
    /// Build the index from `(low, high)` vertical spans, one per obstacle, in catalog order.
    pub fn build(spans: &[(f32, f32)], bucket_height: f32) -> Self {
        let bucket_height = if bucket_height.is_finite() && bucket_height > 0.0 {
            bucket_height
        } else {
            DEFAULT_BUCKET_HEIGHT
        };

        let mut buckets: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
        for (index, &(low, high)) in spans.iter().enumerate() {
            let first = bucket_of(low.min(high), bucket_height);
            let last = bucket_of(low.max(high), bucket_height);
            for bucket in first..=last {
                buckets.entry(bucket).or_default().push(index);
            }
        }

        Self {
            bucket_height,
            buckets,
            len: spans.len(),
        }
    }

    /// Number of indexed obstacles.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of obstacles whose span may intersect `[y_min, y_max]`, ascending.
    ///
    /// A non-finite window falls back to every obstacle.
    pub fn candidates(&self, y_min: f32, y_max: f32) -> Vec<usize> {
        if !y_min.is_finite() || !y_max.is_finite() {
            return (0..self.len).collect();
        }
        let first = bucket_of(y_min.min(y_max), self.bucket_height);
        let last = bucket_of(y_min.max(y_max), self.bucket_height);

        let mut found: Vec<usize> = self
            .buckets
            .range(first..=last)
            .flat_map(|(_, indices)| indices.iter().copied())
            .collect();
        found.sort_unstable();
        found.dedup();
        found
    }
}

#[inline]
fn bucket_of(y: f32, bucket_height: f32) -> i32 {
    (y / bucket_height).floor().clamp(i32::MIN as f32, i32::MAX as f32) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_selects_nearby_spans() {
        let spans = [(-0.25, 0.25), (4.75, 5.25), (39.5, 40.5), (7.0, 13.0)];
        let index = HeightIndex::build(&spans, 4.0);
        assert_eq!(index.len(), 4);
        assert_eq!(index.candidates(-1.0, 1.0), vec![0]);
        assert_eq!(index.candidates(5.0, 9.0), vec![1, 3]);
        assert_eq!(index.candidates(12.5, 14.0), vec![3]);
        assert!(index.candidates(100.0, 110.0).is_empty());
    }

    #[test]
    fn test_results_keep_catalog_order() {
        // Later obstacle spans more buckets than the earlier one.
        let spans = [(5.0, 5.5), (0.0, 20.0), (5.2, 5.4)];
        let index = HeightIndex::build(&spans, 2.0);
        assert_eq!(index.candidates(0.0, 20.0), vec![0, 1, 2]);
    }

    #[test]
    fn test_non_finite_window_returns_all() {
        let index = HeightIndex::build(&[(0.0, 1.0), (50.0, 51.0)], 4.0);
        assert_eq!(index.candidates(f32::NAN, 1.0), vec![0, 1]);
    }
}
