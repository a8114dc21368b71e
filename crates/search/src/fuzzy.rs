//! Edit-distance primitives.
//!
//! Everything here works on `char`s rather than bytes so that lengths and
//! windows agree with what a reader would count in a label.

/// Calculate Levenshtein edit distance between two strings.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    levenshtein_chars(&a_chars, &b_chars)
}

pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // The rolling rows are sized by the shorter input
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = short.len();

    if n == 0 {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            let cost = usize::from(*long_char != short[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity percentage derived from edit distance.
///
/// Returns `100 * (1 - distance / max(len(a), len(b)))`, so identical strings
/// score 100 and strings with nothing in common score 0. Two empty strings
/// are identical; an empty string against a non-empty one scores 0.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    ratio_chars(&a_chars, &b_chars)
}

pub(crate) fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 100.0;
    }

    let distance = levenshtein_chars(a, b);
    100.0 * (1.0 - distance as f64 / max_len as f64)
}

/// Best [`ratio`] of the shorter string against every equally long window
/// of the longer one.
///
/// A short query that appears verbatim inside a long label scores 100
/// regardless of the surrounding text.
pub fn partial_ratio(query: &str, candidate: &str) -> f64 {
    let query_chars: Vec<char> = query.chars().collect();
    let candidate_chars: Vec<char> = candidate.chars().collect();

    if query_chars.is_empty() || candidate_chars.is_empty() {
        return if query_chars.len() == candidate_chars.len() { 100.0 } else { 0.0 };
    }

    let (short, long) = if query_chars.len() <= candidate_chars.len() {
        (&query_chars, &candidate_chars)
    } else {
        (&candidate_chars, &query_chars)
    };

    let mut best = 0.0_f64;
    for window in long.windows(short.len()) {
        let score = ratio_chars(short, window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }

    best
}
