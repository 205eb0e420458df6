use serde::{Deserialize, Deserializer, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

/// Deleted accounts come back as `"user": null`; treat them as an empty login.
pub(crate) fn null_as_default<'de, D>(deserializer: D) -> Result<User, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<User>::deserialize(deserializer).map(Option::unwrap_or_default)
}
