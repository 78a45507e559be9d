//! Mock provider implementation for testing.

use super::{ChatProvider, ChatTurn, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A conversation as seen by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedChat {
    pub system_prompt: String,
    pub prior_turns: Vec<ChatTurn>,
    pub user_message: String,
}

enum Behaviour {
    Reply(String),
    Fail(fn() -> ProviderError),
}

/// Mock chat provider that answers with a canned reply or a canned failure
/// and records every call it receives.
pub struct MockChatProvider {
    behaviour: Behaviour,
    calls: AtomicUsize,
    last_chat: Mutex<Option<RecordedChat>>,
}

impl MockChatProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(reply.into()))
    }

    pub fn failing(error: fn() -> ProviderError) -> Self {
        Self::with_behaviour(Behaviour::Fail(error))
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            last_chat: Mutex::new(None),
        }
    }

    /// Number of exchanges attempted so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_chat(&self) -> Option<RecordedChat> {
        self.last_chat
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn send_chat(
        &self,
        system_prompt: &str,
        prior_turns: &[ChatTurn],
        user_message: &str,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_chat.lock() {
            *guard = Some(RecordedChat {
                system_prompt: system_prompt.to_string(),
                prior_turns: prior_turns.to_vec(),
                user_message: user_message.to_string(),
            });
        }

        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Fail(error) => Err(error()),
        }
    }
}
