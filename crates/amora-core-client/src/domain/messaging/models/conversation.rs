// amora-core-client/amora-core-client
//
// Copyright: 2026, Amora Labs <dev@amora.chat>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use indexmap::map::Entry;
use indexmap::IndexMap;
use itertools::Itertools;

use amora_api::types::{Message, UserId, UserSummary};

/// One aggregated conversation with a counterpart user. Derived, never
/// persisted; rebuilt from scratch on every aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub counterpart: UserSummary,
    /// The newest message exchanged with the counterpart, across inbox
    /// and outbox.
    pub last_message: Message,
    /// Unread received messages only. Sent messages never contribute.
    pub unread_count: u32,
}

impl Conversation {
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_message.created_at
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationList {
    /// Sorted non-increasing by last activity.
    pub conversations: Vec<Conversation>,
    /// The unread total as reported by the inbox endpoint. Deliberately
    /// not recomputed from `conversations`, which only cover one page
    /// per direction.
    pub unread_count: u64,
}

/// Folds one inbox page and one outbox page into a conversation list,
/// keyed by counterpart. The accumulator is insertion-ordered so that
/// equal timestamps keep their first-seen order after sorting.
pub fn fold_conversations(inbox: &[Message], outbox: &[Message]) -> Vec<Conversation> {
    let mut acc = IndexMap::<UserId, Conversation>::new();

    for message in inbox {
        match acc.entry(message.sender.id.clone()) {
            Entry::Occupied(mut entry) => {
                let conversation = entry.get_mut();
                if message.created_at > conversation.last_message.created_at {
                    conversation.last_message = message.clone();
                }
                // Every unread inbox message counts, regardless of
                // whether it won the recency comparison.
                if !message.is_read {
                    conversation.unread_count += 1;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Conversation {
                    counterpart: message.sender.clone(),
                    unread_count: if message.is_read { 0 } else { 1 },
                    last_message: message.clone(),
                });
            }
        }
    }

    for message in outbox {
        match acc.entry(message.receiver.id.clone()) {
            Entry::Occupied(mut entry) => {
                let conversation = entry.get_mut();
                if message.created_at > conversation.last_message.created_at {
                    conversation.last_message = message.clone();
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Conversation {
                    counterpart: message.receiver.clone(),
                    unread_count: 0,
                    last_message: message.clone(),
                });
            }
        }
    }

    acc.into_values()
        .sorted_by(|a, b| b.last_activity().cmp(&a.last_activity()))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn user(id: &str) -> UserSummary {
        UserSummary {
            id: id.into(),
            display_name: id.to_uppercase(),
            avatar_url: None,
            is_verified: false,
        }
    }

    fn message(
        id: &str,
        sender: &str,
        receiver: &str,
        is_read: bool,
        created_at_min: u32,
    ) -> Message {
        Message {
            id: id.into(),
            sender: user(sender),
            receiver: user(receiver),
            message_type: "rose".into(),
            content: format!("message {id}"),
            is_read,
            read_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, created_at_min, 0).unwrap(),
        }
    }

    #[test]
    fn test_keys_inbox_by_sender_and_outbox_by_receiver() {
        let conversations = fold_conversations(
            &[message("m1", "a", "me", true, 1)],
            &[message("m2", "me", "b", true, 2)],
        );

        assert_eq!(
            conversations
                .iter()
                .map(|c| c.counterpart.id.as_ref())
                .collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_merges_both_directions_into_one_conversation() {
        let conversations = fold_conversations(
            &[message("m1", "a", "me", true, 1)],
            &[message("m2", "me", "a", true, 5)],
        );

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].last_message.id, "m2".into());
    }

    #[test]
    fn test_last_message_has_max_timestamp_per_counterpart() {
        let conversations = fold_conversations(
            &[
                message("m1", "a", "me", true, 5),
                message("m2", "a", "me", true, 3),
            ],
            &[
                message("m3", "me", "a", true, 4),
                message("m4", "me", "a", true, 1),
            ],
        );

        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].last_message.id, "m1".into());
    }

    #[test]
    fn test_counts_every_unread_inbox_message() {
        // m2 is older than m1 and loses the recency comparison, but its
        // unread flag still counts.
        let conversations = fold_conversations(
            &[
                message("m1", "a", "me", false, 5),
                message("m2", "a", "me", false, 1),
                message("m3", "a", "me", true, 3),
            ],
            &[],
        );

        assert_eq!(conversations[0].unread_count, 2);
    }

    #[test]
    fn test_sent_messages_never_affect_unread_count() {
        let conversations = fold_conversations(
            &[message("m1", "a", "me", false, 1)],
            &[message("m2", "me", "a", false, 5)],
        );

        assert_eq!(conversations[0].unread_count, 1);
        assert_eq!(conversations[0].last_message.id, "m2".into());

        let outbox_only = fold_conversations(&[], &[message("m3", "me", "b", false, 1)]);
        assert_eq!(outbox_only[0].unread_count, 0);
    }

    #[test]
    fn test_sorts_descending_by_last_activity() {
        let conversations = fold_conversations(
            &[
                message("m1", "a", "me", true, 1),
                message("m2", "b", "me", true, 9),
                message("m3", "c", "me", true, 4),
            ],
            &[message("m4", "me", "a", true, 6)],
        );

        let activities = conversations
            .iter()
            .map(Conversation::last_activity)
            .collect::<Vec<_>>();
        let mut sorted = activities.clone();
        sorted.sort_by(|a, b| b.cmp(a));

        assert_eq!(activities, sorted);
        assert_eq!(
            conversations
                .iter()
                .map(|c| c.counterpart.id.as_ref())
                .collect::<Vec<_>>(),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_equal_timestamps_keep_first_seen_order() {
        let conversations = fold_conversations(
            &[
                message("m1", "a", "me", true, 3),
                message("m2", "b", "me", true, 3),
            ],
            &[],
        );

        assert_eq!(
            conversations
                .iter()
                .map(|c| c.counterpart.id.as_ref())
                .collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_replaces_last_message_only_when_strictly_newer() {
        let conversations = fold_conversations(
            &[
                message("m1", "a", "me", true, 3),
                message("m2", "a", "me", true, 3),
            ],
            &[],
        );

        assert_eq!(conversations[0].last_message.id, "m1".into());
    }

    #[test]
    fn test_empty_input_yields_empty_list() {
        assert_eq!(fold_conversations(&[], &[]), vec![]);
    }
}
