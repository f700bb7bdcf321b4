//! Double page detection
//!
//! Scanned books mix single pages (portrait, ratio around 0.7) with double
//! pages (two pages side by side, ratio around 1.4). The width/height
//! ratios are split into two clusters; the cluster with the smaller center
//! holds the single pages.

use crate::constants::{CLUSTER_RATIO_TOLERANCE, DOUBLE_PAGE_MIN_RATIO};
use crate::page::Page;
use crate::types::*;
use log::debug;

/// Result of clustering values into at most two groups
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster centers, ascending
    pub centers: Vec<f64>,
    /// Cluster index per input value
    pub labels: Vec<usize>,
}

/// Cluster one-dimensional values into two groups.
///
/// In one dimension the optimal two-means partition is a split of the
/// sorted values, so every split between distinct values is tried and the
/// one with the smallest within-cluster sum of squares wins. Equal values
/// always land in the same cluster. With fewer than two distinct values a
/// single cluster is returned.
pub fn two_means(values: &[f64]) -> Clustering {
    if values.is_empty() {
        return Clustering {
            centers: Vec::new(),
            labels: Vec::new(),
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mut prefix = Vec::with_capacity(n + 1);
    let mut prefix_sq = Vec::with_capacity(n + 1);
    prefix.push(0.0);
    prefix_sq.push(0.0);
    for value in &sorted {
        prefix.push(prefix[prefix.len() - 1] + value);
        prefix_sq.push(prefix_sq[prefix_sq.len() - 1] + value * value);
    }

    // Sum of squared deviations of sorted[from..to] around its mean
    let sse = |from: usize, to: usize| {
        let count = (to - from) as f64;
        let sum = prefix[to] - prefix[from];
        (prefix_sq[to] - prefix_sq[from]) - sum * sum / count
    };

    let mut best: Option<(usize, f64)> = None;
    for split in 1..n {
        if sorted[split - 1] == sorted[split] {
            continue;
        }
        let cost = sse(0, split) + sse(split, n);
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((split, cost));
        }
    }

    match best {
        None => Clustering {
            centers: vec![prefix[n] / n as f64],
            labels: vec![0; n],
        },
        Some((split, _)) => {
            let low = prefix[split] / split as f64;
            let high = (prefix[n] - prefix[split]) / (n - split) as f64;
            let threshold = sorted[split - 1];
            Clustering {
                centers: vec![low, high],
                labels: values
                    .iter()
                    .map(|&value| usize::from(value > threshold))
                    .collect(),
            }
        }
    }
}

/// Decide for every page whether it is a single page.
///
/// Returns `true` for single pages and `false` for double pages that need
/// splitting. When the ratios do not form two distinguishable groups the
/// whole document is judged by its lower cluster center.
pub fn find_single_pages(pages: &[Page]) -> Result<Vec<bool>> {
    if pages.is_empty() {
        return Err(BookletError::InvalidGeometry(
            "cannot classify an empty page sequence".to_string(),
        ));
    }

    let ratios: Vec<f64> = pages.iter().map(Page::ratio).collect();
    debug!("page ratios: {:?}", ratios);

    let clustering = two_means(&ratios);
    debug!(
        "cluster centers: {:?}, labels: {:?}",
        clustering.centers, clustering.labels
    );

    let distinguishable = match clustering.centers.as_slice() {
        [low, high] => !almost_equal(low / high, 1.0),
        _ => false,
    };

    if !distinguishable {
        // Non-empty input always yields a center
        let center = clustering.centers[0];
        let single = center <= DOUBLE_PAGE_MIN_RATIO;
        debug!(
            "all pages are {}",
            if single { "single" } else { "double" }
        );
        return Ok(vec![single; pages.len()]);
    }

    Ok(clustering.labels.iter().map(|&label| label == 0).collect())
}

/// Classification flags for a split mode: `true` means single
pub fn classify_pages(pages: &[Page], force_double: bool) -> Result<Vec<bool>> {
    if force_double {
        if pages.is_empty() {
            return Err(BookletError::InvalidGeometry(
                "cannot classify an empty page sequence".to_string(),
            ));
        }
        return Ok(vec![false; pages.len()]);
    }
    find_single_pages(pages)
}

fn almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < CLUSTER_RATIO_TOLERANCE
}
