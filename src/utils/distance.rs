//! Jaro and Jaro-Winkler string similarity.
//!
//! Scores are normalized to [0,1]: 1.0 means the strings are identical,
//! 0.0 means no character overlap within the match window. Command names
//! are short ASCII strings, so comparison works on bytes.

/// Jaro similarity between two strings.
///
/// Characters match when they are equal and within a window of
/// `max(0, max(len_a, len_b) / 2 - 2)` positions of each other. Each
/// position in `b` is claimed by at most one position in `a`. A match at
/// differing indices counts as half a transposition.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a = a.as_bytes();
    let b = b.as_bytes();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let la = a.len() as f64;
    let lb = b.len() as f64;

    // Window is max(len) / 2 - 1, pulled in by one more as a conservative margin.
    let window = (a.len().max(b.len()) / 2).saturating_sub(2);

    let mut matches = 0.0_f64;
    let mut halfs = 0.0_f64;
    let mut claimed = vec![false; b.len()];

    for i in 0..a.len() {
        let start = i.saturating_sub(window);
        let end = (i + window).min(b.len() - 1);

        for (j, claim) in claimed.iter_mut().enumerate().take(end + 1).skip(start) {
            if *claim {
                continue;
            }

            if a[i] == b[j] {
                if i != j {
                    halfs += 1.0;
                }
                matches += 1.0;
                *claim = true;
                break;
            }
        }
    }

    if matches == 0.0 {
        return 0.0;
    }

    let transposes = (halfs / 2.0).floor();

    ((matches / la) + (matches / lb) + (matches - transposes) / matches) / 3.0
}

/// Jaro-Winkler similarity: Jaro with a bonus for a shared prefix.
///
/// The bonus is only applied when the Jaro score exceeds `boost_threshold`.
/// The resolver calls this with `boost_threshold = 1.0` and `prefix_size = 0`,
/// which makes the boost branch unreachable and the result plain Jaro. That
/// mirrors the scoring the wrapper has always used.
pub fn jaro_winkler(a: &str, b: &str, boost_threshold: f64, prefix_size: usize) -> f64 {
    let j = jaro(a, b);

    if j <= boost_threshold {
        return j;
    }

    let prefix_size = prefix_size.min(a.len()).min(b.len());

    let prefix_match = a
        .bytes()
        .zip(b.bytes())
        .take(prefix_size)
        .take_while(|(x, y)| x == y)
        .count() as f64;

    j + 0.1 * prefix_match * (1.0 - j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        for s in ["a", "in", "install", "update"] {
            assert_eq!(jaro(s, s), 1.0);
        }
    }

    #[test]
    fn jaro_is_symmetric() {
        let pairs = [
            ("install", "inst"),
            ("remove", "update"),
            ("add", "ads"),
            ("upgrade", "up"),
        ];
        for (a, b) in pairs {
            assert_eq!(jaro(a, b), jaro(b, a));
        }
    }

    #[test]
    fn empty_string_scores_zero() {
        assert_eq!(jaro("", "install"), 0.0);
        assert_eq!(jaro("install", ""), 0.0);
        assert_eq!(jaro("", ""), 0.0);
    }

    #[test]
    fn no_overlap_scores_zero() {
        assert_eq!(jaro("install", "xyz"), 0.0);
    }

    #[test]
    fn install_inst_scores_six_sevenths() {
        // 4 matched characters, la=7, lb=4, no transpositions:
        // (4/7 + 4/4 + 4/4) / 3 = 6/7
        let score = jaro("install", "inst");
        assert!((score - 6.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn transpositions_lower_the_score() {
        let exact = jaro("install", "install");
        let swapped = jaro("install", "isntall");
        assert!(swapped < exact);
        assert!(swapped > 0.0);
    }

    #[test]
    fn winkler_with_system_parameters_equals_jaro() {
        // boost_threshold = 1.0 makes the boost branch unreachable.
        let pairs = [
            ("install", "inst"),
            ("install", "install"),
            ("remove", "rm"),
            ("", "update"),
        ];
        for (a, b) in pairs {
            assert_eq!(jaro_winkler(a, b, 1.0, 0), jaro(a, b));
        }
    }

    #[test]
    fn winkler_boosts_shared_prefix_below_threshold() {
        let plain = jaro("install", "instant");
        let boosted = jaro_winkler("install", "instant", 0.5, 4);
        assert!(boosted > plain);
        assert!(boosted <= 1.0);
    }
}
