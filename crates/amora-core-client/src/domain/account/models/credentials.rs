// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::dtos::UserSummary;

/// The signed-in account: the bearer token and the user the backend
/// reported at sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(
        serialize_with = "serialize_token",
        deserialize_with = "deserialize_token"
    )]
    pub token: Secret<String>,
    pub user: UserSummary,
}

impl PartialEq for Credentials {
    fn eq(&self, other: &Self) -> bool {
        self.token.expose_secret() == other.token.expose_secret() && self.user == other.user
    }
}

fn serialize_token<S: serde::Serializer>(
    token: &Secret<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(token.expose_secret())
}

fn deserialize_token<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Secret<String>, D::Error> {
    Ok(Secret::new(String::deserialize(deserializer)?))
}
