//! Pairwise similarity scoring
//!
//! The score is additive over four independent signals: genre, director,
//! shared cast and the candidate's rating. Contributions are accumulated in
//! that order starting from zero, so totals are reproducible bit for bit.
//!
//! Scoring never fails. An unparseable rating contributes nothing and every
//! other field is compared as a literal string, empty strings included.

use crate::entry::CatalogEntry;
use serde::Serialize;

/// Added when both entries share the exact same genre string
pub const GENRE_MATCH: f64 = 1.0;
/// Added when both entries share the exact same director string
pub const DIRECTOR_MATCH: f64 = 0.5;
/// Added per distinct star name present in both casts
pub const SHARED_STAR: f64 = 0.2;
/// Ratings above this pivot push a candidate up, below it push it down
pub const RATING_PIVOT: f64 = 7.0;
/// Scale applied to the candidate's distance from the pivot
pub const RATING_SCALE: f64 = 0.1;

/// Per-signal contributions to a single subject/candidate score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub genre: f64,
    pub director: f64,
    pub cast: f64,
    pub rating: f64,
    /// Number of distinct star names both entries share
    pub shared_stars: usize,
}

impl ScoreBreakdown {
    /// Sum of all contributions, accumulated in signal order
    pub fn total(&self) -> f64 {
        let mut score = 0.0;
        score += self.genre;
        score += self.director;
        score += self.cast;
        score += self.rating;
        score
    }

    /// Name of the signal with the largest contribution, if any is positive
    pub fn dominant_signal(&self) -> Option<&'static str> {
        [
            ("genre", self.genre),
            ("director", self.director),
            ("cast", self.cast),
            ("rating", self.rating),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0.0)
        .fold(None, |best: Option<(&'static str, f64)>, (name, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((name, v)),
        })
        .map(|(name, _)| name)
    }
}

/// Compute the contribution of every signal for `candidate` relative to `subject`
///
/// Only the candidate's rating is consulted, so the result is not symmetric
/// in its arguments whenever the two ratings differ.
pub fn explain(subject: &CatalogEntry, candidate: &CatalogEntry) -> ScoreBreakdown {
    let genre = if subject.genre == candidate.genre { GENRE_MATCH } else { 0.0 };
    let director = if subject.director == candidate.director { DIRECTOR_MATCH } else { 0.0 };

    let subject_stars = subject.star_set();
    let candidate_stars = candidate.star_set();
    let shared_stars = subject_stars.intersection(&candidate_stars).count();
    let cast = shared_stars as f64 * SHARED_STAR;

    let rating = candidate
        .parsed_rating()
        .map(|r| (r - RATING_PIVOT) * RATING_SCALE)
        .unwrap_or(0.0);

    ScoreBreakdown {
        genre,
        director,
        cast,
        rating,
        shared_stars,
    }
}

/// Similarity of `candidate` to `subject`
#[inline]
pub fn score(subject: &CatalogEntry, candidate: &CatalogEntry) -> f64 {
    explain(subject, candidate).total()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, genre: &str, director: &str, stars: [&str; 4], rating: &str) -> CatalogEntry {
        CatalogEntry::new(title, genre, director, stars, rating)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_worked_example() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "8.0");
        let b = entry("B", "Drama", "Y", ["a", "e", "f", "g"], "7.0");

        assert_close(score(&a, &b), 1.2);
        assert_close(score(&b, &a), 1.3);
    }

    #[test]
    fn test_genre_and_director_are_exact_matches() {
        let a = entry("A", "Drama", "Nolan", ["a", "b", "c", "d"], "");
        let b = entry("B", "drama", "Nolan", ["e", "f", "g", "h"], "");

        let breakdown = explain(&a, &b);
        assert_eq!(breakdown.genre, 0.0);
        assert_eq!(breakdown.director, DIRECTOR_MATCH);
        assert_close(breakdown.total(), 0.5);
    }

    #[test]
    fn test_empty_fields_match_each_other() {
        let a = entry("A", "", "", ["", "", "", ""], "");
        let b = entry("B", "", "", ["", "", "", ""], "");

        let breakdown = explain(&a, &b);
        assert_eq!(breakdown.genre, GENRE_MATCH);
        assert_eq!(breakdown.director, DIRECTOR_MATCH);
        assert_eq!(breakdown.shared_stars, 1);
        assert_close(breakdown.total(), 1.7);
    }

    #[test]
    fn test_duplicate_stars_do_not_inflate_cast() {
        let a = entry("A", "Drama", "X", ["a", "a", "a", "a"], "");
        let b = entry("B", "Comedy", "Y", ["a", "a", "b", "c"], "");

        let breakdown = explain(&a, &b);
        assert_eq!(breakdown.shared_stars, 1);
        assert_close(breakdown.cast, 0.2);
    }

    #[test]
    fn test_full_cast_overlap_caps_at_four() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "");
        let b = entry("B", "Comedy", "Y", ["d", "c", "b", "a"], "");

        let breakdown = explain(&a, &b);
        assert_eq!(breakdown.shared_stars, 4);
        assert_close(breakdown.cast, 0.8);
    }

    #[test]
    fn test_low_rating_is_negative_boost() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "9.0");
        let b = entry("B", "Comedy", "Y", ["e", "f", "g", "h"], "5.0");

        assert_close(score(&a, &b), -0.2);
    }

    #[test]
    fn test_malformed_rating_contributes_zero() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "8.0");
        for raw in ["", "   ", "abc", "8.0/10", "nan", "inf"] {
            let b = entry("B", "Drama", "Y", ["e", "f", "g", "h"], raw);
            let breakdown = explain(&a, &b);
            assert_eq!(breakdown.rating, 0.0, "rating {:?}", raw);
            assert_eq!(breakdown.total(), 1.0);
        }
    }

    #[test]
    fn test_rating_boost_asymmetry() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "6.5");
        let b = entry("B", "Drama", "X", ["a", "b", "c", "d"], "8.7");

        let diff = score(&a, &b) - score(&b, &a);
        assert_close(diff, 0.1 * (8.7 - 6.5));
    }

    #[test]
    fn test_subject_rating_is_ignored() {
        let good = entry("A", "Drama", "X", ["a", "b", "c", "d"], "9.9");
        let bad = entry("A", "Drama", "X", ["a", "b", "c", "d"], "");
        let candidate = entry("B", "Drama", "Y", ["e", "f", "g", "h"], "7.5");

        assert_eq!(score(&good, &candidate), score(&bad, &candidate));
    }

    #[test]
    fn test_total_matches_direct_accumulation() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "8.1");
        let b = entry("B", "Drama", "X", ["a", "b", "x", "y"], "7.3");

        let expected: f64 = 0.0 + 1.0 + 0.5 + 2.0 * 0.2 + (7.3 - 7.0) * 0.1;
        assert_eq!(score(&a, &b).to_bits(), expected.to_bits());
    }

    #[test]
    fn test_dominant_signal() {
        let a = entry("A", "Drama", "X", ["a", "b", "c", "d"], "");
        let b = entry("B", "Comedy", "X", ["a", "b", "c", "z"], "");

        // cast 0.6 beats director 0.5
        assert_eq!(explain(&a, &b).dominant_signal(), Some("cast"));

        let c = entry("C", "Comedy", "Y", ["e", "f", "g", "h"], "3.0");
        assert_eq!(explain(&a, &c).dominant_signal(), None);
    }
}
