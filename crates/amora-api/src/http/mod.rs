// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use request_error::{ParseError, RequestError};
pub use transport::{Auth, HttpTransport, ResponseEnvelope};

mod request_error;
mod transport;
