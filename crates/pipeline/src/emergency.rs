//! Emergency assistance conversation.
//!
//! The first turn asks the model for a short list of clarifying questions;
//! every later turn asks for a full three-part analysis. The conversation is
//! kept in an append-only [`ConversationLog`].

use std::sync::Arc;

use medibot_core::conversation::ConversationLog;
use medibot_core::prompts;
use medibot_llm::TextGenerator;

use crate::error::NarrationError;

/// Which kind of reply the next turn asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Questioning,
    Analysis,
}

/// State of one emergency assistance session.
pub struct EmergencySession {
    generator: Arc<dyn TextGenerator>,
    log: ConversationLog,
    phase: Phase,
}

impl EmergencySession {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            log: ConversationLog::new(),
            phase: Phase::Questioning,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Record the operator's turn and return the assistant's reply.
    ///
    /// The user turn is always recorded. On failure the phase is unchanged,
    /// so the next turn asks for the same kind of reply.
    pub async fn respond(&mut self, input: &str) -> Result<String, NarrationError> {
        self.log.push_user(input);

        let prompt = match self.phase {
            Phase::Questioning => prompts::emergency_questions(&self.log),
            Phase::Analysis => prompts::emergency_analysis(&self.log),
        };

        let reply = self.generator.generate(&prompt).await?;
        self.log.push_assistant(reply.clone());

        if self.phase == Phase::Questioning {
            tracing::debug!("Clarifying questions asked, switching to analysis");
            self.phase = Phase::Analysis;
        }
        Ok(reply)
    }
}
