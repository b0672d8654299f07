use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One article row of a specific order document. No aggregation applied.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderLineItem {
    /// Display form of the document number (`YYNNNN`).
    pub document_number: String,
    /// Document number as stored, ungrouped and unformatted.
    pub document_number_raw: Option<i32>,
    pub document_date: Option<NaiveDate>,
    pub case_number: String,
    pub article_code: String,
    pub article_description: String,
}

/// One logical order, materialized by collapsing the line rows that share a
/// raw document number.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub document_number: String,
    pub document_number_raw: Option<i32>,
    pub document_date: Option<NaiveDate>,
    pub case_number: String,
    pub sample_article_code: String,
    pub sample_article_description: String,
    /// Number of raw rows collapsed into this group.
    pub line_item_count: usize,
}

impl OrderSummary {
    fn from_first_line(item: OrderLineItem) -> Self {
        Self {
            document_number: item.document_number,
            document_number_raw: item.document_number_raw,
            document_date: item.document_date,
            case_number: item.case_number,
            sample_article_code: item.article_code,
            sample_article_description: item.article_description,
            line_item_count: 1,
        }
    }
}

/// Collapses line rows into order summaries keyed by the raw document
/// number.
///
/// The input is expected in the query's native order (document date
/// descending). The first row seen for a document supplies every summary
/// field; later rows only bump the line count. Output keeps the order in
/// which documents were first encountered, so the listing stays
/// date-descending without a re-sort.
pub fn group_line_items(items: Vec<OrderLineItem>) -> Vec<OrderSummary> {
    let mut index: HashMap<Option<i32>, usize> = HashMap::new();
    let mut summaries: Vec<OrderSummary> = Vec::new();

    for item in items {
        match index.get(&item.document_number_raw) {
            Some(&at) => summaries[at].line_item_count += 1,
            None => {
                index.insert(item.document_number_raw, summaries.len());
                summaries.push(OrderSummary::from_first_line(item));
            }
        }
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(raw: i32, day: u32, case_number: &str, article: &str) -> OrderLineItem {
        OrderLineItem {
            document_number: format!("24{raw:04}"),
            document_number_raw: Some(raw),
            document_date: NaiveDate::from_ymd_opt(2024, 5, day),
            case_number: case_number.to_string(),
            article_code: article.to_string(),
            article_description: format!("Article {article}"),
        }
    }

    #[test]
    fn collapses_rows_sharing_a_document_number() {
        let items = vec![
            line(442, 20, "P-09", "ART-A"),
            line(442, 20, "P-10", "ART-B"),
            line(441, 12, "P-01", "ART-C"),
            line(441, 12, "P-02", "ART-D"),
            line(441, 12, "P-03", "ART-E"),
        ];

        let summaries = group_line_items(items);
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].document_number_raw, Some(442));
        assert_eq!(summaries[0].line_item_count, 2);
        assert_eq!(summaries[1].document_number_raw, Some(441));
        assert_eq!(summaries[1].line_item_count, 3);
    }

    #[test]
    fn first_seen_row_supplies_the_summary_fields() {
        let items = vec![
            line(441, 12, "P-01", "ART-C"),
            line(441, 12, "P-02", "ART-D"),
        ];

        let summaries = group_line_items(items);
        assert_eq!(summaries[0].case_number, "P-01");
        assert_eq!(summaries[0].sample_article_code, "ART-C");
        assert_eq!(summaries[0].sample_article_description, "Article ART-C");
    }

    #[test]
    fn output_keeps_first_seen_order() {
        let items = vec![
            line(500, 22, "P-01", "A"),
            line(441, 12, "P-02", "B"),
            line(500, 22, "P-03", "C"),
            line(7, 2, "P-04", "D"),
        ];

        let raw: Vec<_> = group_line_items(items)
            .into_iter()
            .map(|s| s.document_number_raw)
            .collect();
        assert_eq!(raw, vec![Some(500), Some(441), Some(7)]);
    }

    #[test]
    fn rows_without_a_document_number_group_together() {
        let mut missing = line(0, 3, "P-05", "E");
        missing.document_number_raw = None;
        missing.document_number = String::new();
        let mut missing2 = missing.clone();
        missing2.case_number = "P-06".to_string();

        let summaries = group_line_items(vec![missing, missing2]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].line_item_count, 2);
        assert_eq!(summaries[0].case_number, "P-05");
    }
}
