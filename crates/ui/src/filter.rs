//! Fuzzy filtering of candidate lists.
//!
//! Filtering is a pure function of `(list, text)`. An empty filter returns the
//! list unchanged; otherwise candidates are kept when the text fuzzy-matches
//! their name or detail, ordered by best score with ties kept in list order.

use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};
use tripane_core::Candidate;

/// Filter `list` by `text`, best matches first
pub fn filter_candidates<'a>(list: &'a [Candidate], text: &str) -> Vec<&'a Candidate> {
    if text.is_empty() {
        return list.iter().collect();
    }

    let pattern = Pattern::parse(text, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut scored: Vec<(&Candidate, u32)> = list
        .iter()
        .filter_map(|candidate| {
            let name = pattern.score(Utf32Str::new(&candidate.name, &mut buf), &mut matcher);
            let detail = if candidate.detail.is_empty() {
                None
            } else {
                pattern.score(Utf32Str::new(&candidate.detail, &mut buf), &mut matcher)
            };

            match name.max(detail) {
                Some(score) if score > 0 => Some((candidate, score)),
                _ => None,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(c, _)| c).collect()
}

/// Ids of the filtered list, in display order
pub fn filtered_ids(list: &[Candidate], text: &str) -> Vec<String> {
    filter_candidates(list, text).into_iter().map(|c| c.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Candidate> {
        vec![
            Candidate::new("a", "Alpha").with_detail("first letter"),
            Candidate::new("b", "Beta"),
            Candidate::new("s", "Settings").with_detail("preferences"),
            Candidate::new("t", "Terminal").with_detail("shell"),
        ]
    }

    #[test]
    fn test_empty_text_keeps_list() {
        let list = items();
        let filtered = filter_candidates(&list, "");
        assert_eq!(filtered.len(), list.len());
        assert_eq!(filtered[0].id, "a");
        assert_eq!(filtered[3].id, "t");
    }

    #[test]
    fn test_filter_matches_name() {
        let list = items();
        let ids = filtered_ids(&list, "set");
        assert_eq!(ids.first().map(String::as_str), Some("s"));
        assert!(!ids.contains(&"b".to_string()));
    }

    #[test]
    fn test_filter_matches_detail() {
        let list = items();
        let ids = filtered_ids(&list, "shell");
        assert_eq!(ids, vec!["t".to_string()]);
    }

    #[test]
    fn test_filter_ignores_case() {
        let list = items();
        assert_eq!(filtered_ids(&list, "BETA"), vec!["b".to_string()]);
    }

    #[test]
    fn test_filter_no_match() {
        let list = items();
        assert!(filter_candidates(&list, "zzzz").is_empty());
    }

    #[test]
    fn test_filter_is_deterministic() {
        let list = items();
        assert_eq!(filtered_ids(&list, "e"), filtered_ids(&list, "e"));
    }

    #[test]
    fn test_filter_ties_keep_list_order() {
        let list = vec![Candidate::new("1", "note"), Candidate::new("2", "note"), Candidate::new("3", "note")];
        assert_eq!(filtered_ids(&list, "note"), vec!["1", "2", "3"]);
    }
}
