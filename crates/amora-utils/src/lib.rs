// amora-core-client/amora-utils
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

mod id_string_macro;
