// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// The declared content type of an explore post. Unknown wire values fall
/// through to `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    Post,
    Reel,
    #[strum(default)]
    Other(String),
}

impl ContentType {
    pub fn parse(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| ContentType::Other(value.to_string()))
    }
}
