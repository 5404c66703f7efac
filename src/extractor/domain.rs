// file: src/extractor/domain.rs
// description: public suffix aware domain splitting and canonicalization
// reference: https://docs.rs/psl

use psl::Type;
use std::str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    pub subdomain: String,
    pub domain: String,
    pub suffix: String,
}

impl DomainParts {
    pub fn canonical(&self) -> String {
        [
            self.subdomain.as_str(),
            self.domain.as_str(),
            self.suffix.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
    }
}

/// Splits `name` into subdomain, registrable label and ICANN public suffix.
///
/// Private registry entries (`github.io`, `duckdns.org`) are not treated as
/// suffixes, so names under them keep their registrable label. Returns `None`
/// when no ICANN suffix is known or no registrable label precedes it.
pub fn split_domain(name: &str) -> Option<DomainParts> {
    let lowered = name.trim_matches('.').to_lowercase();
    let suffix = icann_suffix(&lowered)?;

    let rest = lowered.strip_suffix(suffix.as_str())?.strip_suffix('.')?;
    let (subdomain, domain) = rest.rsplit_once('.').unwrap_or(("", rest));
    if domain.is_empty() {
        return None;
    }

    Some(DomainParts {
        subdomain: subdomain.to_string(),
        domain: domain.to_string(),
        suffix,
    })
}

fn icann_suffix(name: &str) -> Option<String> {
    let suffix = psl::suffix(name.as_bytes())?;
    if !suffix.is_known() {
        return None;
    }

    let matched = str::from_utf8(suffix.as_bytes()).ok()?;
    if suffix.typ() == Some(Type::Icann) {
        return Some(matched.to_string());
    }

    // Longest tail of a private entry that is itself an ICANN rule.
    matched
        .match_indices('.')
        .map(|(at, _)| &matched[at + 1..])
        .find(|tail| is_icann_suffix(tail))
        .map(str::to_string)
}

fn is_icann_suffix(candidate: &str) -> bool {
    psl::suffix(candidate.as_bytes()).is_some_and(|suffix| {
        suffix.typ() == Some(Type::Icann) && suffix.as_bytes() == candidate.as_bytes()
    })
}

/// Canonical lowercase form of a candidate, or `None` if it should be discarded.
pub fn canonicalize(candidate: &str, min_length: usize) -> Option<String> {
    let canonical = split_domain(candidate)?.canonical();
    if canonical.chars().count() < min_length {
        return None;
    }
    Some(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_multi_label_suffix() {
        let parts = split_domain("test.example.co.uk").unwrap();
        assert_eq!(
            parts,
            DomainParts {
                subdomain: "test".to_string(),
                domain: "example".to_string(),
                suffix: "co.uk".to_string(),
            }
        );
        assert_eq!(parts.canonical(), "test.example.co.uk");
    }

    #[test]
    fn test_split_without_subdomain() {
        let parts = split_domain("Example.COM").unwrap();
        assert_eq!(parts.subdomain, "");
        assert_eq!(parts.canonical(), "example.com");
    }

    #[test]
    fn test_unknown_suffix_is_discarded() {
        assert_eq!(split_domain("config.txt"), None);
        assert_eq!(split_domain("fixup_cd.dat"), None);
    }

    #[test]
    fn test_bare_suffix_is_discarded() {
        assert_eq!(split_domain("co.uk"), None);
    }

    #[test]
    fn test_private_registry_names_are_kept() {
        assert_eq!(
            split_domain("s3.amazonaws.com"),
            Some(DomainParts {
                subdomain: "s3".to_string(),
                domain: "amazonaws".to_string(),
                suffix: "com".to_string(),
            })
        );
        assert_eq!(canonicalize("s3.amazonaws.com", 4), Some("s3.amazonaws.com".to_string()));
        assert_eq!(canonicalize("duckdns.org", 4), Some("duckdns.org".to_string()));
        assert_eq!(canonicalize("github.io", 4), Some("github.io".to_string()));
        assert_eq!(canonicalize("ddns.net", 4), Some("ddns.net".to_string()));
        assert_eq!(
            canonicalize("c2.attacker.duckdns.org", 4),
            Some("c2.attacker.duckdns.org".to_string())
        );
    }

    #[test]
    fn test_private_entry_over_multi_label_suffix() {
        let parts = split_domain("myblog.blogspot.co.uk").unwrap();
        assert_eq!(parts.subdomain, "myblog");
        assert_eq!(parts.domain, "blogspot");
        assert_eq!(parts.suffix, "co.uk");
    }

    #[test]
    fn test_empty_labels_in_subdomain_are_preserved() {
        let parts = split_domain("a..example.com").unwrap();
        assert_eq!(parts.subdomain, "a.");
        assert_eq!(parts.canonical(), "a..example.com");
    }

    #[test]
    fn test_canonicalize_applies_min_length() {
        assert_eq!(canonicalize("x.io", 4), Some("x.io".to_string()));
        assert_eq!(canonicalize("x.io", 5), None);
        assert_eq!(
            canonicalize("Mirror.Raspberrypi.ORG", 4),
            Some("mirror.raspberrypi.org".to_string())
        );
    }
}
