use diesel::prelude::*;

use crate::db::{DbPool, get_connection};
use crate::domain::order::{OrderLineItem, OrderSummary, group_line_items};
use crate::models::order::OrderLineRow;
use crate::repository::{OrderReader, errors::RepositoryResult};

/// Document type tag distinguishing customer orders from the other document
/// kinds stored in the shared `tabfat02` table.
pub const ORDER_DOC_TYPE: &str = "OC";

/// Diesel implementation of [`OrderReader`].
pub struct DieselOrderRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselOrderRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl OrderReader for DieselOrderRepository<'_> {
    fn list_orders(&self, account_ref: &str) -> RepositoryResult<Vec<OrderSummary>> {
        use crate::schema::{articoli, tabfat02};

        let mut conn = get_connection(self.pool)?;

        // Date-descending scan; the grouping below relies on this order for
        // its first-seen-wins semantics.
        let rows = tabfat02::table
            .inner_join(articoli::table)
            .filter(tabfat02::tipdoc.eq(ORDER_DOC_TYPE))
            .filter(tabfat02::codcf.eq(account_ref))
            .order(tabfat02::datdoc.desc())
            .select((
                tabfat02::numdoc,
                tabfat02::datdoc,
                tabfat02::praticanumero,
                tabfat02::codart,
                articoli::desart,
            ))
            .load::<OrderLineRow>(&mut conn)?;

        Ok(group_line_items(
            rows.into_iter().map(Into::into).collect(),
        ))
    }

    fn list_order_lines(
        &self,
        account_ref: &str,
        document_number: i32,
    ) -> RepositoryResult<Vec<OrderLineItem>> {
        use crate::schema::{articoli, tabfat02};

        let mut conn = get_connection(self.pool)?;

        let rows = tabfat02::table
            .inner_join(articoli::table)
            .filter(tabfat02::tipdoc.eq(ORDER_DOC_TYPE))
            .filter(tabfat02::codcf.eq(account_ref))
            .filter(tabfat02::numdoc.eq(document_number))
            .order(tabfat02::praticanumero.asc())
            .select((
                tabfat02::numdoc,
                tabfat02::datdoc,
                tabfat02::praticanumero,
                tabfat02::codart,
                articoli::desart,
            ))
            .load::<OrderLineRow>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
