//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the command string (e.g., `/billionaire_info Elon Musk`) and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::traits::{ChatProvider, RankingSource};
use crate::interface::commands;

/// A parsed command: the `/name` token plus everything after the first whitespace run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub command: &'a str,
    pub argument: Option<&'a str>,
}

/// Split a message into command and argument. Returns `None` for plain text.
/// The argument is trimmed as a whole; inner whitespace is kept.
pub fn parse(message: &str) -> Option<Invocation<'_>> {
    let msg = message.trim();
    if !msg.starts_with('/') {
        return None;
    }

    let (command, rest) = match msg.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (msg, ""),
    };

    Some(Invocation {
        command,
        argument: (!rest.is_empty()).then_some(rest),
    })
}

pub struct CommandRouter {
    source: Arc<dyn RankingSource>,
}

impl CommandRouter {
    pub fn new(source: Arc<dyn RankingSource>) -> Self {
        Self { source }
    }

    /// Handle one inbound message. `sender` is the caller's user ID.
    pub async fn route<C>(&self, chat: &C, message: &str, sender: &str) -> Result<()>
    where
        C: ChatProvider,
    {
        let Some(invocation) = parse(message) else {
            return Ok(());
        };

        tracing::info!(
            "Router dispatching cmd='{}' args='{}' sender='{}'",
            invocation.command,
            invocation.argument.unwrap_or(""),
            sender
        );

        let source = self.source.as_ref();
        match invocation.command {
            "/start" => commands::start::handle_start(chat, sender).await?,
            "/help" => commands::help::handle_help(chat).await?,
            "/top_billionaires" => commands::top::handle_top(source, chat).await?,
            "/billionaire_info" => {
                commands::info::handle_info(source, chat, invocation.argument).await?
            }
            "/richest_in_country" => {
                commands::richest::handle_richest(source, chat, invocation.argument).await?
            }
            other => {
                tracing::debug!("Ignoring unknown command '{}'", other);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::sample;
    use crate::interface::commands::testing::{RecordingChat, ScriptedSource};
    use crate::strings::{help, messages};

    fn router(source: &Arc<ScriptedSource>) -> CommandRouter {
        CommandRouter::new(source.clone())
    }

    fn forbes_list(n: u64) -> Vec<crate::domain::types::Billionaire> {
        (0..n)
            .map(|i| sample(&format!("Person {i}"), 300 - i, "United States"))
            .collect()
    }

    #[test]
    fn test_parse_splits_on_first_whitespace() {
        let inv = parse("/billionaire_info   Elon   Musk  ").unwrap();
        assert_eq!(inv.command, "/billionaire_info");
        assert_eq!(inv.argument, Some("Elon   Musk"));
    }

    #[test]
    fn test_parse_without_argument() {
        assert_eq!(
            parse(" /help "),
            Some(Invocation {
                command: "/help",
                argument: None
            })
        );
        assert_eq!(parse("/billionaire_info    ").unwrap().argument, None);
        assert_eq!(parse("/richest_in_country\tUSA").unwrap().argument, Some("USA"));
    }

    #[test]
    fn test_parse_ignores_plain_text() {
        assert!(parse("hello there").is_none());
        assert!(parse("").is_none());
    }

    #[tokio::test]
    async fn test_start_greets_sender() {
        let source = Arc::new(ScriptedSource::ok(vec![]));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/start", "@alice:example.com").await.unwrap();

        assert_eq!(chat.replies(), vec![messages::greeting("alice")]);
        assert_eq!(chat.lookups(), 1);
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_display_name_only_resolved_for_start() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(3)));
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();
        router.route(&chat, "/help", "@alice:example.com").await.unwrap();
        router.route(&chat, "/billionaire_info Person 1", "@alice:example.com").await.unwrap();
        router.route(&chat, "just chatting", "@alice:example.com").await.unwrap();

        assert_eq!(chat.replies().len(), 3);
        assert_eq!(chat.lookups(), 0);
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let source = Arc::new(ScriptedSource::ok(vec![]));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/help", "@alice:example.com").await.unwrap();

        let replies = chat.replies();
        assert_eq!(replies, vec![help::MAIN.to_string()]);
        assert!(replies[0].contains("/top_billionaires"));
        assert!(replies[0].contains("/billionaire_info"));
        assert!(replies[0].contains("/richest_in_country"));
    }

    #[tokio::test]
    async fn test_top_shows_exactly_ten_in_order() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(25)));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();

        let reply = &chat.replies()[0];
        let lines: Vec<&str> = reply.lines().collect();
        assert_eq!(lines[0], messages::TOP_HEADER);
        assert_eq!(lines.len(), 11);
        for (i, line) in lines[1..].iter().enumerate() {
            assert!(line.starts_with(&format!("{}. Person {} – $", i + 1, i)));
        }
    }

    #[tokio::test]
    async fn test_top_with_short_ranking_shows_all() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(3)));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();

        assert_eq!(chat.replies()[0].lines().count(), 4);
    }

    #[tokio::test]
    async fn test_info_is_case_insensitive() {
        let ranking = vec![sample("Bernard Arnault", 171, "France"), sample("Elon Musk", 219, "United States")];
        let source = Arc::new(ScriptedSource::ok(ranking));
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/billionaire_info Elon Musk", "@alice:example.com").await.unwrap();
        router.route(&chat, "/billionaire_info elon musk", "@alice:example.com").await.unwrap();

        let replies = chat.replies();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0], replies[1]);
        assert!(replies[0].starts_with("Имя: Elon Musk\n"));
    }

    #[tokio::test]
    async fn test_info_not_found_names_lowercased_input() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(5)));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/billionaire_info Jeff BEZOS", "@alice:example.com").await.unwrap();

        assert_eq!(chat.replies(), vec![messages::billionaire_not_found("jeff bezos")]);
    }

    #[tokio::test]
    async fn test_missing_argument_never_fetches() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(5)));
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/billionaire_info", "@alice:example.com").await.unwrap();
        router.route(&chat, "/richest_in_country   ", "@alice:example.com").await.unwrap();

        assert_eq!(
            chat.replies(),
            vec![messages::INFO_USAGE.to_string(), messages::RICHEST_USAGE.to_string()]
        );
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn test_richest_in_country_selects_max_worth() {
        let ranking = vec![
            sample("Fifty", 50, "USA"),
            sample("Eighty", 80, "USA"),
            sample("Ten", 10, "usa"),
        ];
        let source = Arc::new(ScriptedSource::ok(ranking));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/richest_in_country usa", "@alice:example.com").await.unwrap();

        let reply = &chat.replies()[0];
        assert!(reply.starts_with("Самый богатый человек в USA:\nEighty – $80B\n"));
    }

    #[tokio::test]
    async fn test_richest_in_country_no_match() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(5)));
        let chat = RecordingChat::default();
        router(&source).route(&chat, "/richest_in_country Atlantis", "@alice:example.com").await.unwrap();

        assert_eq!(chat.replies(), vec![messages::country_not_found("atlantis")]);
    }

    #[tokio::test]
    async fn test_fetch_failure_replies_for_every_data_command() {
        let source = Arc::new(ScriptedSource::failing());
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();
        router.route(&chat, "/billionaire_info Elon Musk", "@alice:example.com").await.unwrap();
        router.route(&chat, "/richest_in_country France", "@alice:example.com").await.unwrap();

        assert_eq!(
            chat.replies(),
            vec![
                messages::FETCH_FAILED.to_string(),
                messages::FETCH_FAILED.to_string(),
                messages::country_fetch_failed("france"),
            ]
        );
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_same_command_twice_is_identical() {
        let source = Arc::new(ScriptedSource::ok(forbes_list(12)));
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();
        router.route(&chat, "/top_billionaires", "@alice:example.com").await.unwrap();

        let replies = chat.replies();
        assert_eq!(replies[0], replies[1]);
    }

    #[tokio::test]
    async fn test_unknown_command_and_plain_text_ignored() {
        let source = Arc::new(ScriptedSource::ok(vec![]));
        let chat = RecordingChat::default();
        let router = router(&source);

        router.route(&chat, "/weather Paris", "@alice:example.com").await.unwrap();
        router.route(&chat, "who is the richest?", "@alice:example.com").await.unwrap();

        assert!(chat.replies().is_empty());
        assert_eq!(source.calls(), 0);
    }
}
