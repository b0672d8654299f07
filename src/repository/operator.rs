use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::operator::Operator;
use crate::models::operator::OperatorRow;
use crate::repository::{OperatorReader, errors::RepositoryResult};

/// Diesel implementation of [`OperatorReader`] over the credential table.
pub struct DieselOperatorRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselOperatorRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl OperatorReader for DieselOperatorRepository<'_> {
    fn get_by_username(&self, username: &str) -> RepositoryResult<Option<Operator>> {
        use crate::schema::operatori;

        let mut conn = get_connection(self.pool)?;

        let row = operatori::table
            .filter(operatori::nome.eq(username))
            .select((operatori::id, operatori::nome, operatori::password2005))
            .first::<OperatorRow>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }
}
