#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medibot_core::alert::AlertMessage;
use medibot_events::{AlertDispatcher, ChannelError, NotificationChannel};
use medibot_cli::console::Console;
use medibot_llm::{GenerationError, TextGenerator};
use medibot_pipeline::VitalsPipeline;

/// Destination used by every test pipeline.
pub const TEST_DESTINATION: &str = "+15550100";

/// Text generator that replays scripted replies and records every prompt.
///
/// `Some(text)` replies with `text`; `None` fails with
/// [`GenerationError::EmptyResponse`]. Once the script runs out every call
/// replies `"ok"`.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: &[Option<&str>]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|r| r.map(str::to_string)).collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Some(text)) => Ok(text),
            Some(None) => Err(GenerationError::EmptyResponse),
            None => Ok("ok".to_string()),
        }
    }
}

/// Channel that records deliveries and optionally fails every one of them.
#[derive(Default)]
pub struct FakeChannel {
    fail_with: Option<String>,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl FakeChannel {
    pub fn working() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_with: Some(reason.to_string()),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationChannel for FakeChannel {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn deliver(&self, destination: &str, message: &AlertMessage) -> Result<(), ChannelError> {
        self.sent
            .lock()
            .unwrap()
            .push((destination.to_string(), message.to_string()));
        match &self.fail_with {
            Some(reason) => Err(ChannelError::Other(reason.clone())),
            None => Ok(()),
        }
    }
}

pub fn dispatcher(channel: &Arc<FakeChannel>) -> AlertDispatcher {
    AlertDispatcher::new(channel.clone())
}

/// Drive a full console session from `script` and return the transcript.
pub async fn run_script(
    script: &str,
    generator: &Arc<ScriptedGenerator>,
    channel: &Arc<FakeChannel>,
) -> String {
    run_raw_script(script.as_bytes(), generator, channel).await
}

/// Like [`run_script`], for input that is not necessarily valid UTF-8.
pub async fn run_raw_script(
    script: &[u8],
    generator: &Arc<ScriptedGenerator>,
    channel: &Arc<FakeChannel>,
) -> String {
    let pipeline = VitalsPipeline::new(generator.clone(), dispatcher(channel), TEST_DESTINATION);
    let mut console = Console::new(script, Vec::new(), generator.clone(), pipeline);
    console.run().await.expect("in-memory console I/O cannot fail");
    String::from_utf8(console.into_output()).expect("transcript is UTF-8")
}
