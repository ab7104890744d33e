// amora-core-client/amora-api
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use amora_utils::id_string;

id_string!(
    /// The server-assigned identifier of a user account.
    UserId
);

id_string!(
    /// The server-assigned identifier of a private message.
    MessageId
);

id_string!(
    /// The server-assigned identifier of an explore-feed post.
    #[derive(Default)]
    PostId
);

id_string!(
    /// The identifier of a predefined message type.
    MessageTypeId
);
