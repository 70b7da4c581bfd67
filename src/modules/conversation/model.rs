use std::collections::HashMap;

use crate::constants::CONVERSATION_ID_SEPARATOR;
use crate::modules::conversation::schema::ConversationEntity;
use crate::modules::message::schema::MessageEntity;

pub fn participant_pair(a: &str, b: &str) -> [String; 2] {
    let mut pair = [a.to_string(), b.to_string()];
    pair.sort();
    pair
}

/// Sorted pair joined with `-`. Ids may contain `-` themselves, so the key is never split
/// back into ids; read `participants` instead. Assumes no id is a `-`-joined pair of
/// other ids, which holds for seed ids and `<kind>-<uuid>` ids.
pub fn conversation_id(a: &str, b: &str) -> String {
    participant_pair(a, b).join(CONVERSATION_ID_SEPARATOR)
}

fn start(message: &MessageEntity) -> ConversationEntity {
    let participants = participant_pair(&message.sender_id, &message.receiver_id);
    ConversationEntity {
        id: participants.join(CONVERSATION_ID_SEPARATOR),
        participants,
        last_message: message.clone(),
        unread_count: u32::from(!message.read),
    }
}

/// Folds one more message of the same pair into `conversation`. Later log entries win
/// ties on `sent_at`.
fn absorb(conversation: &mut ConversationEntity, message: &MessageEntity) {
    if message.sent_at >= conversation.last_message.sent_at {
        conversation.last_message = message.clone();
    }
    if !message.read {
        conversation.unread_count += 1;
    }
}

/// One conversation per unordered pair, in order of the pair's first message.
pub fn derive_conversations(messages: &[MessageEntity]) -> Vec<ConversationEntity> {
    let (order, mut by_id) = messages.iter().fold(
        (Vec::<String>::new(), HashMap::<String, ConversationEntity>::new()),
        |(mut order, mut by_id), message| {
            let id = conversation_id(&message.sender_id, &message.receiver_id);
            match by_id.get_mut(&id) {
                Some(conversation) => absorb(conversation, message),
                None => {
                    order.push(id.clone());
                    by_id.insert(id, start(message));
                }
            }
            (order, by_id)
        },
    );

    order.into_iter().filter_map(|id| by_id.remove(&id)).collect()
}

/// Incremental counterpart of [`derive_conversations`] for a message appended to the log.
/// `derive_conversations(log ++ [m]) == apply_message(&derive_conversations(log), m)`.
pub fn apply_message(
    conversations: &[ConversationEntity],
    message: &MessageEntity,
) -> Vec<ConversationEntity> {
    let id = conversation_id(&message.sender_id, &message.receiver_id);
    let mut next = conversations.to_vec();
    match next.iter_mut().find(|c| c.id == id) {
        Some(conversation) => absorb(conversation, message),
        None => next.push(start(message)),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::utils::utc_datetime;

    fn message(id: &str, from: &str, to: &str, minute: u32, read: bool) -> MessageEntity {
        MessageEntity {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            content: format!("message {id}"),
            sent_at: utc_datetime(2023, 9, 2, 10, minute),
            read,
        }
    }

    #[test]
    fn test_pair_is_order_insensitive() {
        assert_eq!(conversation_id("2", "1"), "1-2");
        assert_eq!(conversation_id("1", "2"), "1-2");
        assert_eq!(participant_pair("b", "a"), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_generated_ids_keep_pairs_distinct() {
        let ids: Vec<String> = (0..4).map(|_| crate::utils::new_id("user")).collect();
        let mut keys = std::collections::HashSet::new();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert!(keys.insert(conversation_id(a, b)));
                assert_eq!(conversation_id(a, b), conversation_id(b, a));
            }
        }
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_seed_conversations() {
        let conversations = derive_conversations(&seed::messages());
        assert_eq!(conversations.len(), 2);

        let first = &conversations[0];
        assert_eq!(first.id, "1-2");
        assert_eq!(first.participants, ["1".to_string(), "2".to_string()]);
        assert_eq!(first.last_message.id, "m4");
        assert_eq!(first.unread_count, 1);

        let second = &conversations[1];
        assert_eq!(second.id, "2-4");
        assert_eq!(second.last_message.id, "m5");
        assert_eq!(second.unread_count, 1);
    }

    #[test]
    fn test_both_directions_share_one_conversation() {
        let log = vec![message("a", "x", "y", 1, false), message("b", "y", "x", 2, false)];
        let conversations = derive_conversations(&log);
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].unread_count, 2);
        assert_eq!(conversations[0].last_message.id, "b");
    }

    #[test]
    fn test_last_message_is_latest_not_last_appended() {
        let log = vec![message("late", "x", "y", 30, true), message("early", "y", "x", 5, true)];
        let conversations = derive_conversations(&log);
        assert_eq!(conversations[0].last_message.id, "late");
        assert_eq!(conversations[0].unread_count, 0);
    }

    #[test]
    fn test_ties_go_to_later_log_entry() {
        let log = vec![message("first", "x", "y", 7, true), message("second", "x", "y", 7, true)];
        assert_eq!(derive_conversations(&log)[0].last_message.id, "second");
    }

    #[test]
    fn test_incremental_matches_full_derivation() {
        let mut log = seed::messages();
        let sends = vec![
            message("s1", "1", "2", 40, false),
            message("s2", "5", "3", 41, false),
            message("s3", "4", "2", 0, true),
            message("s4", "3", "5", 41, false),
            message("s5", "2", "1", 39, false),
        ];

        let mut incremental = derive_conversations(&log);
        for sent in sends {
            incremental = apply_message(&incremental, &sent);
            log.push(sent);
            assert_eq!(incremental, derive_conversations(&log));
        }
        assert_eq!(incremental.len(), 3);
        assert_eq!(incremental[2].id, "3-5");
        assert_eq!(incremental[2].last_message.id, "s4");
    }
}
