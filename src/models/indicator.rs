// file: src/models/indicator.rs
// description: ranked network indicators extracted from string dumps
// reference: stix ioc standards

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorKind {
    Ip,
    Url,
    Domain,
    Cert,
}

/// One `(value, count)` pair; serializes as a two element JSON array.
pub type Ranked = (String, usize);

/// Per-category indicators, each sorted by descending count with ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(default)]
    pub ips: Vec<Ranked>,
    #[serde(default)]
    pub urls: Vec<Ranked>,
    #[serde(default)]
    pub domains: Vec<Ranked>,
    #[serde(default)]
    pub certs: Vec<Ranked>,
}

impl IndicatorSet {
    pub fn get(&self, kind: IndicatorKind) -> &[Ranked] {
        match kind {
            IndicatorKind::Ip => &self.ips,
            IndicatorKind::Url => &self.urls,
            IndicatorKind::Domain => &self.domains,
            IndicatorKind::Cert => &self.certs,
        }
    }

    pub fn count_of(&self, kind: IndicatorKind, value: &str) -> Option<usize> {
        self.get(kind)
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, c)| *c)
    }

    pub fn top(&self, kind: IndicatorKind, n: usize) -> &[Ranked] {
        let all = self.get(kind);
        &all[..all.len().min(n)]
    }

    pub fn is_empty(&self) -> bool {
        self.ips.is_empty() && self.urls.is_empty() && self.domains.is_empty() && self.certs.is_empty()
    }

    pub fn total(&self) -> usize {
        self.ips.len() + self.urls.len() + self.domains.len() + self.certs.len()
    }
}
