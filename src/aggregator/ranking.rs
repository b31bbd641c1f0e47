//! Top-N selection over category summaries.
//!
//! "Top N" here is not a strict truncation: entries tied with the Nth-ranked
//! value are all included, so a tie at the boundary can yield more than N
//! rows. Truncating arbitrarily would make the published ranking depend on
//! hash-map iteration order.

use crate::aggregator::summary::EventSummary;
use log::debug;
use std::cmp::Ordering;

/// Select the top `n` summaries by the given key, keeping boundary ties
///
/// **Public** - used for all three rankings (fatalities, injuries, economic)
///
/// # Arguments
/// * `summaries` - Aggregated category summaries
/// * `n` - Nominal cutoff (15 for the published report)
/// * `key` - Ranking key extractor
///
/// # Returns
/// Summaries sorted by key descending (label ascending among equals),
/// truncated after rank `n` but extended through any tie with the Nth value
pub fn top_by<K, F>(summaries: &[EventSummary], n: usize, key: F) -> Vec<EventSummary>
where
    K: PartialOrd + PartialEq + Copy,
    F: Fn(&EventSummary) -> K,
{
    let mut ranked: Vec<EventSummary> = summaries.to_vec();

    ranked.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.event_type.cmp(&b.event_type))
    });

    if ranked.len() <= n || n == 0 {
        return ranked;
    }

    let cutoff = key(&ranked[n - 1]);
    let mut end = n;
    while end < ranked.len() && key(&ranked[end]) == cutoff {
        end += 1;
    }

    if end > n {
        debug!("Tie at rank {}: including {} extra entries", n, end - n);
    }

    ranked.truncate(end);
    ranked
}
