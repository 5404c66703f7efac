// file: src/extractor/indicators.rs
// description: network indicator extraction and frequency ranking over string dumps
// reference: threat intelligence ioc standards

use crate::extractor::domain::canonicalize;
use crate::extractor::patterns::{CERTIFICATE, DOMAIN_CANDIDATE, IP_CANDIDATE, URL};
use crate::models::{IndicatorSet, Ranked};
use std::collections::HashMap;
use tracing::debug;

pub const DEFAULT_MIN_DOMAIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TallyEntry {
    count: usize,
    first_seen: usize,
}

/// Occurrence counts keyed by value, remembering the byte offset of the first sighting.
#[derive(Debug, Clone, Default)]
pub struct IndicatorTally {
    entries: HashMap<String, TallyEntry>,
}

impl IndicatorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: String, position: usize) {
        let entry = self.entries.entry(value).or_insert(TallyEntry {
            count: 0,
            first_seen: position,
        });
        entry.count += 1;
        entry.first_seen = entry.first_seen.min(position);
    }

    /// Folds in the tally of a later text partition starting at byte `offset`.
    pub fn merge(&mut self, other: IndicatorTally, offset: usize) {
        for (value, theirs) in other.entries {
            let shifted = theirs.first_seen + offset;
            self.entries
                .entry(value)
                .and_modify(|ours| {
                    ours.count += theirs.count;
                    ours.first_seen = ours.first_seen.min(shifted);
                })
                .or_insert(TallyEntry {
                    count: theirs.count,
                    first_seen: shifted,
                });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_ranked(self) -> Vec<Ranked> {
        let mut entries: Vec<(String, TallyEntry)> = self.entries.into_iter().collect();
        entries.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });
        entries
            .into_iter()
            .map(|(value, entry)| (value, entry.count))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorTallies {
    pub ips: IndicatorTally,
    pub urls: IndicatorTally,
    pub domains: IndicatorTally,
    pub certs: IndicatorTally,
}

impl IndicatorTallies {
    pub fn merge(&mut self, other: IndicatorTallies, offset: usize) {
        self.ips.merge(other.ips, offset);
        self.urls.merge(other.urls, offset);
        self.domains.merge(other.domains, offset);
        self.certs.merge(other.certs, offset);
    }

    pub fn into_set(self) -> IndicatorSet {
        IndicatorSet {
            ips: self.ips.into_ranked(),
            urls: self.urls.into_ranked(),
            domains: self.domains.into_ranked(),
            certs: self.certs.into_ranked(),
        }
    }
}

pub struct IndicatorExtractor {
    min_domain_length: usize,
}

impl IndicatorExtractor {
    pub fn new(min_domain_length: usize) -> Self {
        Self { min_domain_length }
    }

    pub fn tally(&self, text: &str) -> IndicatorTallies {
        let mut tallies = IndicatorTallies::default();

        for m in IP_CANDIDATE.find_iter(text) {
            tallies.ips.record(m.as_str().to_string(), m.start());
        }

        for m in URL.find_iter(text) {
            tallies.urls.record(m.as_str().to_string(), m.start());
        }

        for m in CERTIFICATE.find_iter(text) {
            tallies.certs.record(m.as_str().to_string(), m.start());
        }

        for m in DOMAIN_CANDIDATE.find_iter(text) {
            if let Some(domain) = canonicalize(m.as_str(), self.min_domain_length) {
                tallies.domains.record(domain, m.start());
            }
        }

        debug!(
            "Tallied {} ip, {} url, {} cert and {} domain value(s)",
            tallies.ips.len(),
            tallies.urls.len(),
            tallies.certs.len(),
            tallies.domains.len()
        );
        tallies
    }

    pub fn extract(&self, text: &str) -> IndicatorSet {
        self.tally(text).into_set()
    }
}

impl Default for IndicatorExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DOMAIN_LENGTH)
    }
}

pub fn extract(text: &str, min_domain_length: usize) -> IndicatorSet {
    IndicatorExtractor::new(min_domain_length).extract(text)
}
