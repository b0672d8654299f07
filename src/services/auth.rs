use crate::domain::operator::Operator;
use crate::repository::OperatorReader;
use crate::services::{ServiceError, ServiceResult};

/// Verifies the login form credentials against the legacy credential table.
///
/// Unknown operators and wrong passwords are indistinguishable to the
/// caller; repository failures propagate so the login page can report the
/// backend being unreachable instead of rejecting the credentials.
pub fn authenticate<R>(repo: &R, username: &str, password: &str) -> ServiceResult<Operator>
where
    R: OperatorReader + ?Sized,
{
    let operator = repo
        .get_by_username(username)?
        .ok_or(ServiceError::Unauthorized)?;

    match operator.password.as_deref() {
        Some(stored) if stored == password => Ok(operator),
        _ => Err(ServiceError::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryResult;

    struct FixedOperators(Vec<Operator>);

    impl OperatorReader for FixedOperators {
        fn get_by_username(&self, username: &str) -> RepositoryResult<Option<Operator>> {
            Ok(self.0.iter().find(|o| o.username == username).cloned())
        }
    }

    fn repo() -> FixedOperators {
        FixedOperators(vec![Operator {
            id: 1,
            username: "mario".into(),
            password: Some("segreta".into()),
        }])
    }

    #[test]
    fn accepts_matching_credentials() {
        let operator = authenticate(&repo(), "mario", "segreta").unwrap();
        assert_eq!(operator.id, 1);
    }

    #[test]
    fn rejects_wrong_password_and_unknown_operator() {
        assert!(matches!(
            authenticate(&repo(), "mario", "sbagliata"),
            Err(ServiceError::Unauthorized)
        ));
        assert!(matches!(
            authenticate(&repo(), "luigi", "segreta"),
            Err(ServiceError::Unauthorized)
        ));
    }

    #[test]
    fn operator_without_stored_secret_cannot_log_in() {
        let repo = FixedOperators(vec![Operator {
            id: 2,
            username: "anna".into(),
            password: None,
        }]);
        assert!(matches!(
            authenticate(&repo, "anna", ""),
            Err(ServiceError::Unauthorized)
        ));
    }
}
