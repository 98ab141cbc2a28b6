//! Deterministic ordering for dotted, wildcard-aware keys.
//!
//! Exported documents are always written in [`compare_keys`] order, never
//! insertion order, so saving the same data twice produces byte-identical
//! text. The ordering is case-insensitive, understands the wildcard
//! segments `*`, `?` and `#`, and compares numeric segments as numbers so
//! `item.2` sorts before `item.10`.

use std::cmp::Ordering;

/// Compares two dotted keys, returning a strict total order.
///
/// Rules, applied segment by segment after splitting on `.`:
///
/// 1. A key that runs out of segments sorts earlier.
/// 2. Segments equal ignoring ASCII case are skipped.
/// 3. A segment that is exactly `*` sorts before anything else, then `?`,
///    then `#`.
/// 4. When both segments parse as integers they compare numerically.
/// 5. Otherwise segments compare lexically, ignoring ASCII case.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use grif_data::compare_keys;
///
/// assert_eq!(compare_keys("item.2", "item.10"), Ordering::Less);
/// assert_eq!(compare_keys("item.*", "item.1"), Ordering::Less);
/// assert_eq!(compare_keys("Room.Desc", "room.desc"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_keys(x: &str, y: &str) -> Ordering {
    if x.eq_ignore_ascii_case(y) {
        return Ordering::Equal;
    }
    let x_segments: Vec<&str> = x.split('.').collect();
    let y_segments: Vec<&str> = y.split('.').collect();
    for i in 0..x_segments.len().max(y_segments.len()) {
        let Some(&xs) = x_segments.get(i) else {
            return Ordering::Less; // x is shorter and earlier
        };
        let Some(&ys) = y_segments.get(i) else {
            return Ordering::Greater; // y is shorter and earlier
        };
        if xs.eq_ignore_ascii_case(ys) {
            continue;
        }
        // Wildcards sort ahead of everything, in fixed precedence.
        if xs == "*" {
            return Ordering::Less;
        }
        if ys == "*" {
            return Ordering::Greater;
        }
        if xs == "?" {
            return Ordering::Less;
        }
        if ys == "?" {
            return Ordering::Greater;
        }
        if xs == "#" {
            return Ordering::Less;
        }
        if ys == "#" {
            return Ordering::Greater;
        }
        if let (Ok(xn), Ok(yn)) = (xs.parse::<i64>(), ys.parse::<i64>()) {
            match xn.cmp(&yn) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        match cmp_ignore_ascii_case(xs, ys) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn cmp_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|b| b.to_ascii_lowercase())
        .cmp(b.bytes().map(|b| b.to_ascii_lowercase()))
}
