//! Keyword Differ — target terms the candidate never mentions.

use crate::scoring::vocabulary::Vocabulary;

/// `target − candidate`, lexicographically ordered.
pub fn missing_keywords(target: &Vocabulary, candidate: &Vocabulary) -> Vec<String> {
    target.difference(candidate).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::normalizer::normalize;
    use crate::scoring::vocabulary::extract_vocabulary;

    fn vocab(text: &str) -> Vocabulary {
        extract_vocabulary(&normalize(text))
    }

    #[test]
    fn test_returns_exact_set_difference_sorted() {
        let target = vocab("Kubernetes Terraform Rust Python");
        let candidate = vocab("Python and Rust");
        assert_eq!(
            missing_keywords(&target, &candidate),
            vec!["kubernetes", "terraform"]
        );
    }

    #[test]
    fn test_every_result_in_target_and_not_in_candidate() {
        let target = vocab("distributed systems engineer with kafka redis postgres");
        let candidate = vocab("systems engineer postgres mysql");
        let missing = missing_keywords(&target, &candidate);

        for term in &missing {
            assert!(target.contains(term));
            assert!(!candidate.contains(term));
        }
        let expected = target.iter().filter(|t| !candidate.contains(t)).count();
        assert_eq!(missing.len(), expected);
    }

    #[test]
    fn test_identical_vocabularies_miss_nothing() {
        let v = vocab("rust go python");
        assert!(missing_keywords(&v, &v).is_empty());
    }

    #[test]
    fn test_empty_candidate_misses_whole_target() {
        let target = vocab("rust developer");
        assert_eq!(
            missing_keywords(&target, &Vocabulary::default()),
            vec!["developer", "rust"]
        );
    }

    #[test]
    fn test_empty_target_misses_nothing() {
        assert!(missing_keywords(&Vocabulary::default(), &vocab("rust")).is_empty());
    }
}
