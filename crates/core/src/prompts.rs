//! Prompt builders for the text-generation service.
//!
//! Prompts are plain text. The normal-range reference is rendered from the
//! same constants the threshold evaluator uses.

use crate::conversation::ConversationLog;
use crate::thresholds::{HEART_RATE_NORMAL, SPO2_NORMAL, TEMPERATURE_NORMAL};
use crate::vitals::VitalReading;

/// Maximum number of log records rendered into an emergency prompt.
pub const MAX_PROMPT_EXCHANGES: usize = 20;

/// Reference text listing the normal range of each vital sign.
pub fn normal_range_reference() -> String {
    format!(
        "Normal ranges: SpO2 {}-{}%, Temperature {}-{}°C, Heart rate {}-{} bpm.",
        SPO2_NORMAL.start(),
        SPO2_NORMAL.end(),
        TEMPERATURE_NORMAL.start(),
        TEMPERATURE_NORMAL.end(),
        HEART_RATE_NORMAL.start(),
        HEART_RATE_NORMAL.end(),
    )
}

/// Prompt asking for a clinical explanation of one vital reading.
pub fn vitals_narration(reading: &VitalReading) -> String {
    format!(
        "Patient SpO2: {}%, Temperature: {}°C, Heart rate: {} bpm.\n\
         {}\n\
         Analyze these vitals, identify abnormalities, and advise what to do for patient safety.",
        reading.spo2(),
        reading.temperature(),
        reading.heart_rate(),
        normal_range_reference(),
    )
}

/// First emergency turn: ask a few targeted questions and stop.
pub fn emergency_questions(log: &ConversationLog) -> String {
    format!(
        "You are a medical AI assistant handling an emergency situation.\n\
         \n\
         Instructions:\n\
         - Ask only 2 or 3 specific, concise questions based on the user's latest input to understand the situation.\n\
         - After asking these questions (in one response), do not proceed further before getting user answers.\n\
         - Format your response as a short list of questions.\n\
         \n\
         Conversation so far:\n\
         {}Bot:\n",
        log.render_recent(MAX_PROMPT_EXCHANGES),
    )
}

/// Later emergency turns: full three-part analysis.
pub fn emergency_analysis(log: &ConversationLog) -> String {
    format!(
        "You are a medical AI assistant analyzing an emergency situation based on all information gathered.\n\
         \n\
         Instructions:\n\
         - Provide a detailed response comprising 3 paragraphs:\n\
         \x20 1. Explanation of the current issue based on user inputs.\n\
         \x20 2. Possible risks or complications that might arise if untreated.\n\
         \x20 3. Preventive measures and immediate actions the user should take.\n\
         \n\
         Conversation so far:\n\
         {}Bot:\n",
        log.render_recent(MAX_PROMPT_EXCHANGES),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_range_reference_matches_evaluator_bounds() {
        assert_eq!(
            normal_range_reference(),
            "Normal ranges: SpO2 95-100%, Temperature 36.1-37.2°C, Heart rate 60-100 bpm."
        );
    }

    #[test]
    fn vitals_narration_includes_raw_values_and_reference() {
        let prompt = vitals_narration(&VitalReading::new(90.0, 38.5, 110.0));
        assert!(
            prompt.starts_with("Patient SpO2: 90%, Temperature: 38.5°C, Heart rate: 110 bpm.")
        );
        assert!(prompt.contains(&normal_range_reference()));
    }

    #[test]
    fn emergency_prompts_embed_conversation_and_end_with_bot_cue() {
        let mut log = ConversationLog::new();
        log.push_user("my father collapsed");

        let questions = emergency_questions(&log);
        assert!(questions.contains("Ask only 2 or 3 specific, concise questions"));
        assert!(questions.ends_with("User: my father collapsed\nBot:\n"));

        log.push_assistant("Is he breathing?");
        log.push_user("yes, slowly");
        let analysis = emergency_analysis(&log);
        assert!(analysis.contains("  2. Possible risks or complications"));
        assert!(analysis.ends_with("Bot: Is he breathing?\nUser: yes, slowly\nBot:\n"));
    }
}
