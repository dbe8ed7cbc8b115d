//! Instruction template for schedule generation.
//!
//! The prompt is sent to the provider as two ordered parts: the fixed
//! instructions, then the script text verbatim. Given the same script and
//! start date the prompt is byte-for-byte identical.

use chrono::NaiveDate;

/// Placeholder in [`SCHEDULE_INSTRUCTIONS`] replaced by the first shooting date.
const START_DATE_PLACEHOLDER: &str = "{start_date}";

/// Fixed instructions sent ahead of every script.
pub const SCHEDULE_INSTRUCTIONS: &str = r#"Act as an expert film director and seasoned production manager. Your task is to analyze the provided film script and create a highly realistic, efficient, and optimized shooting schedule. Your judgment is crucial.

**Primary Goal:** Create a logistically sound schedule that minimizes company moves by grouping scenes based on location.

**Prediction Task:** For each scene, you must PREDICT the required shooting time. To do this, analyze the scene's complexity based on:
1.  **Location & Time:** INT vs. EXT, DAY vs. NIGHT. (Exterior and night shoots take longer).
2.  **Content:** The amount of dialogue, the number of actors involved, and the presence of any action, stunts, or special effects (VFX).
3.  **Risk Management:** Add buffer time for complex scenes. A simple dialogue scene might take 2 hours, but a stunt sequence could take 6-8 hours. Be realistic.

**Output Requirement:** Your entire response must be ONLY a raw JSON array, starting with '[' and ending with ']'. Do not include any other text or markdown formatting.

**JSON Structure:** The JSON must be an array of day objects, adhering strictly to this structure:
  - id: integer
  - day: integer
  - date: string in 'YYYY-MM-DD' format (the first shooting day is {start_date})
  - location: string
  - generalCall: string in 'HH:MM' format
  - firstShot: string in 'HH:MM' format
  - estWrap: string in 'HH:MM' format (plan for a 10-12 hour shooting day)
  - weather: string (predict a likely weather condition)
  - sunrise/sunset: string in 'HH:MM' format
  - notes: string
  - scenes: array of scene objects { sceneNumber, description, cast, startTime, endTime }
  - castCalls: array of cast call objects { character, actor: 'TBD', status, hmw, onSet }

**Special Instruction:** In the 'notes' field of the VERY FIRST day object, you must provide a project summary. This summary should include your expert prediction for the **total number of shooting days** required for the entire script and a brief mention of the biggest production risks (e.g., "Heavy stunt work on Day 18," "Dependent on weather for all exterior farm scenes").

Now, analyze the script and give me your best shot."#;

/// A fully composed generation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulePrompt {
    instructions: String,
    script: String,
}

impl SchedulePrompt {
    /// Compose the prompt for `script`, scheduling from `start_date`.
    pub fn new(script: &str, start_date: NaiveDate) -> Self {
        let instructions = SCHEDULE_INSTRUCTIONS.replace(
            START_DATE_PLACEHOLDER,
            &start_date.format("%Y-%m-%d").to_string(),
        );
        Self {
            instructions,
            script: script.to_string(),
        }
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Prompt parts in the order the provider must receive them.
    pub fn parts(&self) -> [&str; 2] {
        [&self.instructions, &self.script]
    }
}
