use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};

use crate::db::{DbPool, get_connection};
use crate::domain::client::ClientRecord;
use crate::models::client::ClientRow;
use crate::normalize::coalesce;
use crate::repository::{ClientListQuery, ClientReader, errors::RepositoryResult};

/// Diesel implementation of [`ClientReader`] over the `piacon` ledger.
pub struct DieselClientRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselClientRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl ClientReader for DieselClientRepository<'_> {
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<Vec<ClientRecord>> {
        use crate::schema::piacon;

        let mut conn = get_connection(self.pool)?;

        let account_pattern = query.account_ref_pattern();
        let search_pattern = query.search_pattern();

        // Base predicates carried over from the desktop extraction query:
        // skip rows without a company name and the '0000' service account.
        let mut stmt = piacon::table
            .select((
                piacon::ragsoc,
                piacon::denominazione,
                piacon::citta,
                piacon::rifconto,
            ))
            .filter(piacon::ragsoc.gt(" "))
            .filter(piacon::codice.ne("0000"))
            .filter(piacon::rifconto.like(account_pattern))
            .filter(
                piacon::ragsoc
                    .like(search_pattern.clone())
                    .or(piacon::denominazione.like(search_pattern.clone()))
                    .or(piacon::citta.like(search_pattern.clone()))
                    .or(piacon::partitaiva.like(search_pattern.clone()))
                    .or(piacon::codfisc.like(search_pattern)),
            )
            .into_boxed::<diesel::sqlite::Sqlite>();

        if !query.include_inactive {
            // Same null-or-zero test the desktop tool applies when the
            // "show deactivated" checkbox is off.
            stmt = stmt.filter(sql::<Bool>("COALESCE(disattivato, 0) = 0"));
        }

        // The legacy tool sorts on the concatenated display name in SQL;
        // callers rely on that order and never re-sort.
        let rows = stmt
            .order(sql::<Text>("ragsoc || ' ' || COALESCE(denominazione, '')").asc())
            .load::<ClientRow>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn get_client_name(&self, account_ref: &str) -> RepositoryResult<Option<String>> {
        use crate::schema::piacon;

        let mut conn = get_connection(self.pool)?;

        let row = piacon::table
            .filter(piacon::rifconto.eq(account_ref))
            .select((piacon::ragsoc, piacon::denominazione))
            .first::<(Option<String>, Option<String>)>(&mut conn)
            .optional()?;

        Ok(row.map(|(ragsoc, denominazione)| {
            format!("{} {}", coalesce(ragsoc), coalesce(denominazione))
                .trim()
                .to_string()
        }))
    }
}
