use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::order::OrderLineItem;
use crate::normalize::{coalesce, format_document_number};

/// Projection of a `tabfat02` row joined with the article catalog.
#[derive(Debug, Clone, Queryable)]
pub struct OrderLineRow {
    pub numdoc: Option<i32>,
    pub datdoc: Option<NaiveDate>,
    pub praticanumero: Option<String>,
    pub codart: String,
    pub desart: Option<String>,
}

impl From<OrderLineRow> for OrderLineItem {
    fn from(row: OrderLineRow) -> Self {
        Self {
            document_number: format_document_number(row.numdoc, row.datdoc),
            document_number_raw: row.numdoc,
            document_date: row.datdoc,
            case_number: coalesce(row.praticanumero),
            article_code: row.codart,
            article_description: coalesce(row.desart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_into_line_item_formats_the_document_number() {
        let row = OrderLineRow {
            numdoc: Some(441),
            datdoc: NaiveDate::from_ymd_opt(2024, 5, 12),
            praticanumero: Some("P-2024-01".into()),
            codart: "ART-C".into(),
            desart: None,
        };

        let item: OrderLineItem = row.into();
        assert_eq!(item.document_number, "240441");
        assert_eq!(item.document_number_raw, Some(441));
        assert_eq!(item.case_number, "P-2024-01");
        assert_eq!(item.article_description, "");
    }
}
