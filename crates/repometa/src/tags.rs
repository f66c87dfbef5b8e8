//! Release-tag naming policy and natural ordering.

use std::cmp::Ordering;

/// Whether a tag name follows the release naming convention.
///
/// A release tag is an optional `v`/`V` prefix followed by a digit-led
/// version core: `1.0`, `v1.2.3`, `v2.0.0-rc1`. Tags like `latest` or
/// `nightly` are not releases.
pub fn is_release_tag(name: &str) -> bool {
    let rest = name.strip_prefix(['v', 'V']).unwrap_or(name);
    rest.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Compare two strings treating embedded digit runs as numbers.
///
/// `v1.9` orders before `v1.10`, unlike a character-by-character comparison.
/// Numeric runs are compared by value (leading zeros ignored); other runs
/// compare byte-wise. Equal-value strings that differ only in leading zeros
/// fall back to a plain string comparison so the ordering stays total.
pub fn alphanumeric_cmp(a: &str, b: &str) -> Ordering {
    let mut x = a.as_bytes();
    let mut y = b.as_bytes();

    loop {
        match (x.first(), y.first()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => {
                if ca.is_ascii_digit() && cb.is_ascii_digit() {
                    let (run_a, rest_a) = split_digit_run(x);
                    let (run_b, rest_b) = split_digit_run(y);

                    let va = trim_leading_zeros(run_a);
                    let vb = trim_leading_zeros(run_b);
                    let ord = va.len().cmp(&vb.len()).then_with(|| va.cmp(vb));
                    if ord != Ordering::Equal {
                        return ord;
                    }

                    x = rest_a;
                    y = rest_b;
                } else {
                    let ord = ca.cmp(&cb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    x = &x[1..];
                    y = &y[1..];
                }
            }
        }
    }
}

fn split_digit_run(bytes: &[u8]) -> (&[u8], &[u8]) {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    bytes.split_at(end)
}

fn trim_leading_zeros(run: &[u8]) -> &[u8] {
    let start = run.iter().position(|&b| b != b'0').unwrap_or(run.len());
    &run[start..]
}
