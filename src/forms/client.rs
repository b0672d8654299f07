use serde::Deserialize;

use crate::repository::ClientListQuery;

fn default_true() -> bool {
    true
}

/// Query-string filters of the clients page. Field names mirror the
/// desktop tool's controls: the account-class prefix box, the "tutte"
/// checkbox showing deactivated records and the "ovunque" checkbox turning
/// the prefix search into a contains search.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientFilterForm {
    pub filtro: Option<String>,
    #[serde(default)]
    pub tutte: bool,
    pub q: Option<String>,
    #[serde(default = "default_true")]
    pub ovunque: bool,
}

impl From<ClientFilterForm> for ClientListQuery {
    fn from(form: ClientFilterForm) -> Self {
        let mut query = ClientListQuery::new()
            .include_inactive(form.tutte)
            .match_anywhere(form.ovunque);

        if let Some(filtro) = form.filtro {
            query = query.account_prefix(filtro);
        }
        if let Some(q) = form.q {
            query = query.search(q);
        }

        query
    }
}
