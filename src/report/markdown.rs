// file: src/report/markdown.rs
// description: human-readable markdown report built from a run summary
// reference: https://commonmark.org

use crate::collector::sha256_bytes;
use crate::models::{IndicatorKind, Summary};
use serde_json::Value;

const PLACEHOLDER: &str = "—";

/// Display order of indicator sections.
const SECTIONS: [(IndicatorKind, &str); 4] = [
    (IndicatorKind::Domain, "Domains"),
    (IndicatorKind::Url, "URLs"),
    (IndicatorKind::Ip, "IPs"),
    (IndicatorKind::Cert, "Certificates"),
];

fn code(value: &str) -> String {
    format!("`{}`", value.replace('`', "'"))
}

pub fn render_markdown(root: &str, summary: &Summary, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str("# Pi Forensics Report\n\n");
    out.push_str(&format!("**Generated:** {}\n\n", summary.generated));

    out.push_str("## Environment\n");
    out.push_str(&format!("- Toolkit version: {}\n", summary.version));
    out.push_str(&format!("- Root: {}\n\n", code(root)));

    render_imaging(&mut out, summary);
    render_inventory(&mut out, summary);
    render_comparison(&mut out, summary);
    render_indicators(&mut out, summary, top_n);
    render_carving(&mut out, summary);
    render_skipped(&mut out, summary);

    out.push_str("## Next steps\n");
    out.push_str(
        "- If any **mismatch**: confirm you are comparing the right firmware version; re-image and re-hash.\n",
    );
    out.push_str(
        "- If any **unknown**: add expected hashes to the baseline once verified from the official source.\n",
    );
    out.push_str(
        "- Preserve the original image; share this report + `baseline_compare.json` for peer verification.\n",
    );

    out
}

fn render_imaging(out: &mut String, summary: &Summary) {
    out.push_str("## Imaging\n");
    match &summary.imaging {
        Some(imaging) => {
            out.push_str(&format!("- Image file: {}\n", code(&imaging.image)));
            out.push_str(&format!(
                "- Image SHA256: {}\n\n",
                code(imaging.sha256.as_deref().unwrap_or(PLACEHOLDER))
            ));
        }
        None => out.push_str("_No imaging artifacts found._\n\n"),
    }
}

fn render_inventory(out: &mut String, summary: &Summary) {
    out.push_str("## Boot partition inventory\n");
    if summary.boot_files.is_empty() {
        out.push_str("_No boot files found._\n\n");
        return;
    }

    out.push_str("| File | SHA256 |\n");
    out.push_str("|---|---|\n");
    for (file, hash) in &summary.boot_files {
        out.push_str(&format!("| {} | {} |\n", code(file), code(hash)));
    }
    out.push('\n');
}

fn render_comparison(out: &mut String, summary: &Summary) {
    out.push_str("## Baseline comparison (known-good vs observed)\n");
    if summary.baseline_compare.is_empty() {
        out.push_str("_No baseline available or no boot files to compare._\n\n");
        return;
    }

    out.push_str("| File | Status | Observed SHA256 | Expected SHA256 |\n");
    out.push_str("|---|---|---|---|\n");
    for (file, record) in &summary.baseline_compare {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            code(file),
            record.status,
            code(&record.observed),
            code(record.expected.as_deref().unwrap_or(PLACEHOLDER))
        ));
    }
    out.push('\n');
}

fn render_indicators(out: &mut String, summary: &Summary, top_n: usize) {
    out.push_str("## Interesting indicators\n");
    if summary.indicators.is_empty() {
        out.push_str("_No indicators found._\n\n");
        return;
    }

    for (kind, title) in SECTIONS {
        out.push_str(&format!("### {}\n", title));
        let top = summary.indicators.top(kind, top_n);
        if top.is_empty() {
            out.push_str("_None._\n");
        }
        for (value, count) in top {
            // PEM blocks span lines, so list them by digest.
            let shown = match kind {
                IndicatorKind::Cert => format!("sha256 {}", code(&sha256_bytes(value.as_bytes()))),
                _ => code(value),
            };
            out.push_str(&format!("- {} — {}\n", shown, count));
        }
        out.push('\n');
    }
}

fn render_carving(out: &mut String, summary: &Summary) {
    out.push_str("## Binwalk / Strings summary\n");
    if summary.binwalk_summary.is_empty() {
        out.push_str("_No binwalk summary present._\n\n");
        return;
    }

    for (path, value) in &summary.binwalk_summary {
        let detail = match value {
            Value::Object(map) if map.contains_key("error") => "failed to load".to_string(),
            Value::Array(items) => format!("{} result(s)", items.len()),
            Value::Object(map) => format!("{} key(s)", map.len()),
            other => other.to_string(),
        };
        out.push_str(&format!("- {}: {}\n", code(path), detail));
    }
    out.push('\n');
}

fn render_skipped(out: &mut String, summary: &Summary) {
    if summary.skipped.is_empty() {
        return;
    }

    out.push_str("## Skipped artifacts\n");
    for skipped in &summary.skipped {
        out.push_str(&format!(
            "- {}: {}\n",
            code(&skipped.path.display().to_string()),
            skipped.reason
        ));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComparisonRecord, ComparisonStatus, Imaging, SkippedArtifact};
    use std::path::Path;

    fn sample_summary() -> Summary {
        let mut summary = Summary::new(Path::new("/cases/run1"));
        summary.imaging = Some(Imaging {
            image: "/cases/run1/images/sd.img".to_string(),
            sha256: None,
        });
        summary
            .boot_files
            .insert("start.elf".to_string(), "aa".to_string());
        summary.baseline_compare.insert(
            "start.elf".to_string(),
            ComparisonRecord {
                filename: "start.elf".to_string(),
                observed: "aa".to_string(),
                expected: Some("bb".to_string()),
                status: ComparisonStatus::Mismatch,
            },
        );
        summary.indicators.ips = (0..60).map(|i| (format!("10.0.0.{i}"), 60 - i)).collect();
        summary.indicators.domains = vec![("updates.example.net".to_string(), 4)];
        summary.skipped.push(SkippedArtifact::new(
            Path::new("/cases/run1/analysis/strings/bad.txt"),
            "permission denied",
        ));
        summary
    }

    #[test]
    fn test_report_sections() {
        let report = render_markdown("/cases/run1", &sample_summary(), 50);

        assert!(report.starts_with("# Pi Forensics Report"));
        assert!(report.contains("- Image SHA256: `—`"));
        assert!(report.contains("| `start.elf` | mismatch | `aa` | `bb` |"));
        assert!(report.contains("- `updates.example.net` — 4"));
        assert!(report.contains("### Certificates\n_None._"));
        assert!(report.contains("_No binwalk summary present._"));
        assert!(report.contains("## Skipped artifacts"));
        assert!(report.contains("permission denied"));
    }

    #[test]
    fn test_section_layout() {
        let summary = sample_summary();
        let report = render_markdown("/cases/run1", &summary, 50);

        let environment = format!(
            "## Environment\n- Toolkit version: {}\n- Root: `/cases/run1`\n\n## Imaging\n",
            summary.version
        );
        assert!(report.contains(&environment));
        assert!(report.contains(
            "| File | SHA256 |\n|---|---|\n| `start.elf` | `aa` |\n\n## Baseline comparison"
        ));
        assert!(report.ends_with("for peer verification.\n"));
    }

    #[test]
    fn test_indicators_truncated_to_top_n() {
        let report = render_markdown("/cases/run1", &sample_summary(), 50);

        assert!(report.contains("- `10.0.0.49` — 11"));
        assert!(!report.contains("`10.0.0.50`"));
    }

    #[test]
    fn test_empty_summary_placeholders() {
        let summary = Summary::new(Path::new("/cases/empty"));
        let report = render_markdown("/cases/empty", &summary, 50);

        assert!(report.contains("_No imaging artifacts found._"));
        assert!(report.contains("_No boot files found._"));
        assert!(report.contains("_No baseline available or no boot files to compare._"));
        assert!(report.contains("_No indicators found._"));
        assert!(!report.contains("## Skipped artifacts"));
    }

    #[test]
    fn test_certificates_listed_by_digest() {
        let mut summary = Summary::new(Path::new("/cases/run1"));
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----";
        summary.indicators.certs = vec![(pem.to_string(), 1)];

        let report = render_markdown("/cases/run1", &summary, 50);
        let expected = format!("- sha256 `{}` — 1", sha256_bytes(pem.as_bytes()));
        assert!(report.contains(&expected));
        assert!(!report.contains("MIIB"));
    }
}
