/// An authenticated owner of availability records.
///
/// Identity lives in the external account system; the backend only resolves
/// a bearer token to a row in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
}
