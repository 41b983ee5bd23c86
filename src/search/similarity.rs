//! Case-insensitive string similarity using the Ratcliff/Obershelp
//! "gestalt pattern matching" ratio.
//!
//! The ratio is `2 * M / T`, where `T` is the total number of characters in
//! both strings and `M` is the number of characters in matching blocks. The
//! blocks are found by taking the longest common substring, then recursing
//! into the unmatched pieces on either side of it.

/// Similarity of `a` and `b` in `[0.0, 1.0]`, ignoring case.
///
/// Two empty strings are identical and score 1.0; an empty string against a
/// non-empty one scores 0.0.
///
/// # Examples
/// ```
/// use squad_lookup::search::similarity_ratio;
///
/// assert_eq!(similarity_ratio("LIV", "liv"), 1.0);
/// assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(similarity_ratio("", "Arsenal"), 0.0);
/// ```
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_characters(&a, &b) as f64 / total as f64
}

/// Number of characters covered by the matching blocks of `a` and `b`.
fn matching_characters(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, size) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if size == 0 {
            continue;
        }
        matched += size;

        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + size < a_hi && j + size < b_hi {
            pending.push((i + size, a_hi, j + size, b_hi));
        }
    }

    matched
}

/// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]` as
/// `(start_in_a, start_in_b, length)`.
///
/// Among equally long blocks the one starting earliest in `a` wins, then the
/// one starting earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (a_lo, b_lo, 0);

    // Slot k holds the length of the common run ending at b[b_lo + k - 1]
    let mut previous = vec![0usize; b_hi - b_lo + 1];
    let mut current = vec![0usize; b_hi - b_lo + 1];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            let slot = j - b_lo + 1;
            if a[i] == b[j] {
                let run = previous[slot - 1] + 1;
                current[slot] = run;
                if run > best_size {
                    best_i = i + 1 - run;
                    best_j = j + 1 - run;
                    best_size = run;
                }
            } else {
                current[slot] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(similarity_ratio("Liverpool FC", "Liverpool FC"), 1.0);
        assert_eq!(similarity_ratio("LIV", "LIV"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(similarity_ratio("liverpool", "LIVERPOOL"), 1.0);
        assert_eq!(similarity_ratio("Mohamed Salah", "mohamed salah"), 1.0);
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("", "Arsenal"), 0.0);
        assert_eq!(similarity_ratio("Arsenal", ""), 0.0);
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        assert_close(similarity_ratio("abcd", "bcde"), 0.75);
        // "liverpool" is one block of 9 out of 21 characters
        assert_close(similarity_ratio("Liverpool", "Liverpool FC"), 18.0 / 21.0);
        // "man u", then "t", then "d"
        assert_close(similarity_ratio("Man Utd", "Man United"), 14.0 / 17.0);
    }

    #[test]
    fn test_symmetric_on_simple_input() {
        assert_close(
            similarity_ratio("Salah", "Mohamed Salah"),
            similarity_ratio("Mohamed Salah", "Salah"),
        );
    }

    #[test]
    fn test_longest_match_prefers_earliest_block() {
        let a: Vec<char> = "abxab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, a.len(), 0, b.len()), (0, 0, 2));
    }

    #[test]
    fn test_matching_characters_recurses_both_sides() {
        let a: Vec<char> = "qabxcd".chars().collect();
        let b: Vec<char> = "abycdf".chars().collect();
        // "ab" then "cd"
        assert_eq!(matching_characters(&a, &b), 4);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(similarity_ratio("Sadio Mané", "SADIO MANÉ"), 1.0);
        assert_close(similarity_ratio("Mané", "Mane"), 6.0 / 8.0);
    }
}
