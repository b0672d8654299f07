use diesel::prelude::*;

use crate::domain::client::ClientRecord;
use crate::normalize::coalesce;

/// Projection of a `piacon` row as read by the client listing.
#[derive(Debug, Clone, Queryable)]
pub struct ClientRow {
    pub ragsoc: Option<String>,
    pub denominazione: Option<String>,
    pub citta: Option<String>,
    pub rifconto: Option<String>,
}

impl From<ClientRow> for ClientRecord {
    fn from(row: ClientRow) -> Self {
        let display_name = format!("{} {}", coalesce(row.ragsoc), coalesce(row.denominazione))
            .trim()
            .to_string();

        Self {
            display_name,
            city: coalesce(row.citta),
            account_ref: coalesce(row.rifconto),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_into_record_coalesces_null_fields() {
        let row = ClientRow {
            ragsoc: Some("ROSSI SRL".into()),
            denominazione: None,
            citta: None,
            rifconto: Some("01023".into()),
        };

        let record: ClientRecord = row.into();
        assert_eq!(record.display_name, "ROSSI SRL");
        assert_eq!(record.city, "");
        assert_eq!(record.account_ref, "01023");
    }

    #[test]
    fn display_name_concatenates_both_name_fields() {
        let row = ClientRow {
            ragsoc: Some("ROSSI".into()),
            denominazione: Some("COSTRUZIONI".into()),
            citta: Some("Roma".into()),
            rifconto: Some("01023".into()),
        };

        let record: ClientRecord = row.into();
        assert_eq!(record.display_name, "ROSSI COSTRUZIONI");
        assert_eq!(record.city, "Roma");
    }
}
