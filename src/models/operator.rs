use diesel::prelude::*;

use crate::domain::operator::Operator;

/// Diesel model for a row of the `operatori` credential table.
#[derive(Debug, Clone, Queryable)]
pub struct OperatorRow {
    pub id: i32,
    pub nome: String,
    pub password2005: Option<String>,
}

impl From<OperatorRow> for Operator {
    fn from(row: OperatorRow) -> Self {
        Self {
            id: row.id,
            username: row.nome,
            password: row.password2005,
        }
    }
}
