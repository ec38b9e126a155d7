//! Delimiter detection for exports whose format is not declared.

use tracing::debug;

/// Delimiters considered, in order of preference.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Used when no candidate appears in the header at all.
pub const FALLBACK_DELIMITER: u8 = b',';

const SAMPLE_LINES: usize = 20;

/// Guess the delimiter of a delimited text sample.
///
/// A candidate wins when it appears in the header and every sampled line
/// carries the same number of unquoted occurrences. Without such a candidate,
/// the one most frequent in the header is taken.
pub fn sniff_delimiter(sample: &str) -> u8 {
    let lines: Vec<&str> = sample
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect();

    let Some(header) = lines.first() else {
        return FALLBACK_DELIMITER;
    };

    for &delimiter in &CANDIDATE_DELIMITERS {
        let expected = count_unquoted(header, delimiter);
        if expected > 0 && lines.iter().all(|l| count_unquoted(l, delimiter) == expected) {
            debug!(delimiter = %(delimiter as char).escape_default(), "Consistent delimiter found");
            return delimiter;
        }
    }

    let mut best: Option<(u8, usize)> = None;
    for &delimiter in &CANDIDATE_DELIMITERS {
        let n = count_unquoted(header, delimiter);
        if n > 0 && best.map_or(true, |(_, m)| n > m) {
            best = Some((delimiter, n));
        }
    }
    best.map(|(d, _)| d).unwrap_or(FALLBACK_DELIMITER)
}

/// Occurrences of `delimiter` outside double-quoted sections.
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line.as_bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
