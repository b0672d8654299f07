use crate::domain::order::{OrderLineItem, OrderSummary};
use crate::repository::OrderReader;
use crate::services::{ServiceError, ServiceResult};

/// Lists the grouped orders of one client, most recent first.
pub fn list_orders<R>(repo: &R, account_ref: &str) -> ServiceResult<Vec<OrderSummary>>
where
    R: OrderReader + ?Sized,
{
    repo.list_orders(account_ref).map_err(ServiceError::from)
}

/// Lists every line of one order document, case number ascending.
pub fn list_order_lines<R>(
    repo: &R,
    account_ref: &str,
    document_number: i32,
) -> ServiceResult<Vec<OrderLineItem>>
where
    R: OrderReader + ?Sized,
{
    repo.list_order_lines(account_ref, document_number)
        .map_err(ServiceError::from)
}
