use crate::domain::client::ClientRecord;
use crate::domain::operator::Operator;
use crate::domain::order::{OrderLineItem, OrderSummary};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
pub mod operator;
pub mod order;

/// Filter set accepted by the client listing. Mirrors the desktop tool's
/// controls: account-class prefix, "show deactivated" checkbox, free-text
/// search and its "match anywhere" checkbox (checked by default).
#[derive(Debug, Clone)]
pub struct ClientListQuery {
    pub account_prefix: Option<String>,
    pub include_inactive: bool,
    pub search: Option<String>,
    pub match_anywhere: bool,
}

impl Default for ClientListQuery {
    fn default() -> Self {
        Self {
            account_prefix: None,
            include_inactive: false,
            search: None,
            match_anywhere: true,
        }
    }
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.account_prefix = Some(prefix.into());
        self
    }

    pub fn include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn match_anywhere(mut self, match_anywhere: bool) -> Self {
        self.match_anywhere = match_anywhere;
        self
    }

    /// LIKE pattern for the account-reference prefix filter; an absent or
    /// blank prefix becomes the match-all sentinel.
    pub(crate) fn account_ref_pattern(&self) -> String {
        match normalized(self.account_prefix.as_deref()) {
            Some(prefix) => format!("{prefix}%"),
            None => "%".to_string(),
        }
    }

    /// LIKE pattern applied to each searchable field; an absent or blank
    /// search text becomes the match-all sentinel.
    pub(crate) fn search_pattern(&self) -> String {
        match normalized(self.search.as_deref()) {
            Some(text) if self.match_anywhere => format!("%{text}%"),
            Some(text) => format!("{text}%"),
            None => "%".to_string(),
        }
    }
}

fn normalized(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

pub trait ClientReader {
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<Vec<ClientRecord>>;
    fn get_client_name(&self, account_ref: &str) -> RepositoryResult<Option<String>>;
}

pub trait OrderReader {
    fn list_orders(&self, account_ref: &str) -> RepositoryResult<Vec<OrderSummary>>;
    fn list_order_lines(
        &self,
        account_ref: &str,
        document_number: i32,
    ) -> RepositoryResult<Vec<OrderLineItem>>;
}

pub trait OperatorReader {
    fn get_by_username(&self, username: &str) -> RepositoryResult<Option<Operator>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs_become_match_all_sentinels() {
        let query = ClientListQuery::new();
        assert_eq!(query.account_ref_pattern(), "%");
        assert_eq!(query.search_pattern(), "%");

        let query = ClientListQuery::new().account_prefix("  ").search("  ");
        assert_eq!(query.account_ref_pattern(), "%");
        assert_eq!(query.search_pattern(), "%");
    }

    #[test]
    fn prefix_filter_is_a_trailing_wildcard() {
        let query = ClientListQuery::new().account_prefix("01");
        assert_eq!(query.account_ref_pattern(), "01%");
    }

    #[test]
    fn search_pattern_follows_the_match_anywhere_flag() {
        let query = ClientListQuery::new().search("roma");
        assert_eq!(query.search_pattern(), "%roma%");

        let query = ClientListQuery::new().search("roma").match_anywhere(false);
        assert_eq!(query.search_pattern(), "roma%");
    }
}
