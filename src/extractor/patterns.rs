// file: src/extractor/patterns.rs
// description: compiled regex patterns for indicator extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Octets are not range checked: any 1-3 digit group is a lead worth reviewing.
    pub static ref IP_CANDIDATE: Regex = Regex::new(
        r"\b(?:\d{1,3}\.){3}\d{1,3}\b"
    ).expect("IP_CANDIDATE regex is valid");

    pub static ref URL: Regex = Regex::new(
        r#"(?i)\bhttps?://[^\s'"<>]+"#
    ).expect("URL regex is valid");

    pub static ref CERTIFICATE: Regex = Regex::new(
        r"(?is)-----BEGIN CERTIFICATE-----.+?-----END CERTIFICATE-----"
    ).expect("CERTIFICATE regex is valid");

    // Loose on purpose; public suffix parsing weeds out file names and version strings.
    pub static ref DOMAIN_CANDIDATE: Regex = Regex::new(
        r"(?i)\b[a-z0-9][a-z0-9.-]+\.[a-z]{2,}\b"
    ).expect("DOMAIN_CANDIDATE regex is valid");
}
