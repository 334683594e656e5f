//! Prompt templates for the three completion operations.
//!
//! Each template pins the reply format the decoders in [`super::decode`]
//! expect. Wording changes here must stay in step with those decoders: the
//! suggestion prompt demands a bare JSON array, the follow-up prompt a single
//! question object, the analysis prompt the three-key analysis document.

use serde_json::{Map, Value};

/// System prompt framing the suggestion request.
pub const SUGGESTION_SYSTEM_PROMPT: &str =
    "You are a medical symptom suggestion system. Provide relevant symptom suggestions in simple language.";

/// Builds the primary suggestion prompt for raw user input.
///
/// The worked "headache" example anchors the reply shape; without it models
/// drift into prose lists.
pub fn suggestion_prompt(input: &str) -> String {
    format!(
        r#"User input: '{input}'
Provide EXACTLY 10 relevant medical symptoms as suggestions.

Guidelines:
1. Ensure direct relevance to the input
2. Include both exact matches and related symptoms
3. Use simple, everyday language
4. Keep descriptions to 2-4 words
5. List EXACTLY 10 suggestions, no more, no less
6. Format: "symptom (brief description)"

Example format for "headache":
[
    "headache (pain in head)",
    "migraine (severe pulsing headache)",
    "tension headache (tight band feeling)",
    "sinus pain (face pressure)",
    "neck pain (stiff neck)",
    "dizziness (room spinning)",
    "eye strain (tired eyes)",
    "ear pain (throbbing ear)",
    "fever (high temperature)",
    "fatigue (feeling very tired)"
]

Important:
- Always return exactly 10 items
- Ensure first suggestions are most relevant
- Include common related symptoms"#
    )
}

/// Builds the corrective prompt issued when the primary reply came up short.
pub fn additional_suggestions_prompt(input: &str) -> String {
    format!("List additional general symptoms that could be related to '{input}'")
}

/// Builds the follow-up question prompt.
///
/// Previously asked questions are embedded so the model can avoid repeating
/// itself; previous answers steer it toward the still-unclear aspects.
pub fn followup_prompt(
    symptoms: &[String],
    previous_answers: &Map<String, Value>,
    question_history: &[String],
) -> String {
    let answers_json = Value::Object(previous_answers.clone()).to_string();
    let history_json = Value::from(question_history.to_vec()).to_string();

    format!(
        r#"Given these symptoms: {symptoms}
And these previous Q&A: {answers_json}
Previous questions asked: {history_json}

Generate ONE follow-up question that:
1. Focuses on the most concerning or unclear aspect
2. Takes into account previous answers
3. Is different from previous questions
4. Is specific and targeted

Return as JSON with format:
{{
    "question": "the question text",
    "type": "slider/checkbox/text",
    "options": ["option1", "option2"] // only for checkbox type
}}"#,
        symptoms = symptoms.join(", "),
    )
}

/// Builds the full analysis prompt from the complete symptom report.
pub fn analysis_prompt(
    demographics: &Map<String, Value>,
    history: &Map<String, Value>,
    symptoms: &[String],
    detailed_symptoms: &Map<String, Value>,
) -> String {
    let demographics_json = Value::Object(demographics.clone()).to_string();
    let history_json = Value::Object(history.clone()).to_string();
    let symptoms_json = Value::from(symptoms.to_vec()).to_string();
    let detailed_json = Value::Object(detailed_symptoms.clone()).to_string();

    format!(
        r#"Given this patient data:
- Demographics: {demographics_json}
- Medical history: {history_json}
- Symptoms: {symptoms_json}
- Detailed symptoms: {detailed_json}

Provide a detailed analysis with exactly this JSON format:
{{
    "conditions": [
        {{
            "name": "condition name",
            "explanation": "One line explanation why this condition matches the symptoms",
            "confidence": 85  // confidence score between 0-100
        }}
    ],
    "tests": [
        {{
            "name": "test name",
            "explanation": "Why this test is recommended and what it will help confirm/rule out",
            "priority": "high/medium/low",
            "confidence": 75  // confidence score between 0-100 for how likely this test will be useful
        }}
    ],
    "urgency": "routine/urgent/emergency"
}}

List maximum 3 most likely conditions and maximum 5 recommended tests based on the symptoms and history.

Confidence scores should reflect:
For conditions:
- How well symptoms match known patterns
- Relevance of patient history and demographics
- Specificity of the symptoms
- Quality and completeness of information provided

For tests:
- How likely the test will provide useful diagnostic information
- Relevance to the suspected conditions
- Cost-effectiveness and invasiveness considerations
- Standard medical practice for these symptoms"#
    )
}
