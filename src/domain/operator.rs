/// Row of the legacy credential table used by the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operator {
    pub id: i32,
    pub username: String,
    /// Stored secret; the legacy schema keeps it in clear text.
    pub password: Option<String>,
}
