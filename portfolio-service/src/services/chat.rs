//! Chat relay.
//!
//! Every request starts a fresh scripted exchange: the persona prompt, a
//! canned acknowledgement from the model, then the visitor's message. Nothing
//! is remembered between requests.

use super::metrics;
use super::providers::{ChatProvider, ChatTurn};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;

/// Persona and facts the assistant is allowed to state.
pub const SYSTEM_PROMPT: &str = "Kamu adalah AI Assistant untuk portfolio Naufal Ananta, seorang Full Stack Developer dari Indonesia.

Informasi tentang Naufal:
- Nama: Naufal Ananta
- Profesi: Full Stack Developer
- Skills: React, Node.js, TypeScript, Next.js, Astro.js, PostgreSQL, MongoDB, Docker
- Email: anantanaufal250@gmail.com
- GitHub: https://github.com/NaufalAnantaSE

Project yang pernah dikerjakan:
1. Portfolio Website - Website portfolio dengan Astro.js dan AI chatbot
2. Comparativo - Aplikasi perbandingan performa gRPC vs REST API
3. Eduline - Platform edukasi online

Jawab pertanyaan pengunjung dengan ramah, informatif, dan dalam Bahasa Indonesia. Jika ditanya hal di luar konteks portfolio, tetap jawab dengan sopan tapi arahkan kembali ke portfolio.";

/// The model's scripted first reply.
pub const ACKNOWLEDGEMENT: &str =
    "Baik, saya siap membantu sebagai AI Assistant portfolio Naufal Ananta. Ada yang bisa saya bantu?";

pub const MISSING_CREDENTIAL: &str = "Gemini API key not configured";

/// Forwards visitor messages to the configured [`ChatProvider`].
///
/// A relay without a provider is valid: it represents a deployment with no
/// credential and fails each request with a configuration error.
#[derive(Clone)]
pub struct ChatRelay {
    provider: Option<Arc<dyn ChatProvider>>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    pub async fn relay(&self, message: &str) -> Result<String, AppError> {
        let Some(provider) = self.provider.as_ref() else {
            metrics::record_chat_outcome("unconfigured");
            tracing::error!("Chat requested but no Gemini API key is configured");
            return Err(AppError::ConfigError(anyhow::anyhow!(MISSING_CREDENTIAL)));
        };

        let prior_turns = [ChatTurn::model(ACKNOWLEDGEMENT)];
        let start = Instant::now();
        let result = provider
            .send_chat(SYSTEM_PROMPT, &prior_turns, message)
            .await;
        metrics::record_provider_latency(provider.name(), start.elapsed());

        match result {
            Ok(reply) => {
                metrics::record_chat_outcome("success");
                tracing::info!(
                    provider = provider.name(),
                    reply_len = reply.len(),
                    "Chat reply relayed"
                );
                Ok(reply)
            }
            Err(e) => {
                metrics::record_chat_outcome("provider_error");
                metrics::record_provider_error(provider.name(), e.kind());
                tracing::error!(provider = provider.name(), error = %e, "Chat error");
                Err(AppError::UpstreamError(e.to_string()))
            }
        }
    }
}
