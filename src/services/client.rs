use crate::domain::client::ClientRecord;
use crate::repository::{ClientListQuery, ClientReader};
use crate::services::{ServiceError, ServiceResult};

/// Runs the filtered client listing.
pub fn list_clients<R>(repo: &R, query: ClientListQuery) -> ServiceResult<Vec<ClientRecord>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients(query).map_err(ServiceError::from)
}

/// Resolves the display name of one client by account reference.
pub fn client_display_name<R>(repo: &R, account_ref: &str) -> ServiceResult<Option<String>>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_name(account_ref).map_err(ServiceError::from)
}
