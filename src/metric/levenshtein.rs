use crate::metric::Metric;

/// Edit distance (insertions, deletions, substitutions) between two strings, over chars.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevenshteinMetric;

impl<S: AsRef<str> + ?Sized> Metric<S> for LevenshteinMetric {
    fn distance(&self, k1: &S, k2: &S) -> i64 {
        levenshtein(k1.as_ref(), k2.as_ref()) as i64
    }
}

// Two-row dynamic programming, sized by the shorter string.
fn levenshtein(a: &str, b: &str) -> usize {
    let (long, short): (Vec<char>, Vec<char>) = {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        if a.len() >= b.len() {
            (a, b)
        } else {
            (b, a)
        }
    };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut cur: Vec<usize> = vec![0; short.len() + 1];
    for (i, lc) in long.iter().enumerate() {
        cur[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = prev[j] + if lc == sc { 0 } else { 1 };
            cur[j + 1] = substitution.min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[short.len()]
}
