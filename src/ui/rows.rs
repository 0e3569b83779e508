//! Framework-independent model of the results area.
//!
//! [`layout`] decides what the results area shows; the iced view in
//! `result_list` only draws it.

use crate::search::SearchResult;

/// Static affordance shown on every row
pub const LEARN_MORE: &str = "learn more";

/// What the results area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// No results: show the empty-state illustration, no rows
    Placeholder,
    /// One row per result, in API order
    Rows(Vec<ResultRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub label: String,
    /// e.g. "87.34% match"
    pub match_label: String,
    /// Target of the whole row, as received from the API
    pub link: String,
}

pub fn layout(results: &[SearchResult]) -> ResultsView {
    if results.is_empty() {
        return ResultsView::Placeholder;
    }
    ResultsView::Rows(results.iter().map(row).collect())
}

fn row(result: &SearchResult) -> ResultRow {
    ResultRow {
        label: result.label.clone(),
        match_label: match_label(result.match_score),
        link: result.detail_link.clone(),
    }
}

/// Format a match score as a percentage with exactly two decimals.
///
/// Ties round half away from zero, so 0.00125 reads "0.13% match".
pub fn match_label(score: f64) -> String {
    format!("{:.2}% match", (score * 10_000.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: &str, score: f64, link: &str) -> SearchResult {
        SearchResult {
            label: label.to_string(),
            match_score: score,
            detail_link: link.to_string(),
        }
    }

    #[test]
    fn test_empty_results_show_placeholder() {
        assert_eq!(layout(&[]), ResultsView::Placeholder);
    }

    #[test]
    fn test_single_result_row() {
        let view = layout(&[result("Lyme disease", 0.9321, "/d/1")]);
        assert_eq!(
            view,
            ResultsView::Rows(vec![ResultRow {
                label: "Lyme disease".to_string(),
                match_label: "93.21% match".to_string(),
                link: "/d/1".to_string(),
            }])
        );
    }

    #[test]
    fn test_rows_keep_input_order() {
        let results = [
            result("c", 0.1, "/c"),
            result("a", 0.9, "/a"),
            result("b", 0.5, "/b"),
        ];
        let ResultsView::Rows(rows) = layout(&results) else {
            panic!("expected rows");
        };
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["c", "a", "b"]);
    }

    #[test]
    fn test_match_label_two_decimals() {
        assert_eq!(match_label(0.8734), "87.34% match");
        assert_eq!(match_label(1.0), "100.00% match");
        assert_eq!(match_label(0.0), "0.00% match");
        assert_eq!(match_label(0.05), "5.00% match");
        assert_eq!(match_label(0.123456), "12.35% match");
    }

    #[test]
    fn test_match_label_ties_round_up() {
        assert_eq!(match_label(0.00125), "0.13% match");
        assert_eq!(match_label(0.00625), "0.63% match");
        assert_eq!(match_label(0.12345), "12.35% match");
    }

    #[test]
    fn test_layout_is_idempotent() {
        let results = [result("Lyme disease", 0.9321, "/d/1"), result("Flu", 0.2, "/d/2")];
        assert_eq!(layout(&results), layout(&results));
    }
}
