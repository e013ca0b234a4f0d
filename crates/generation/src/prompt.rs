//! Prompt template for flashcard generation.

/// Build the user prompt asking the model for `card_count` cards on `topic`.
///
/// The template is fixed; only the topic and count vary.
pub fn build_prompt(topic: &str, card_count: usize) -> String {
    format!(
        "Generate {card_count} educational flashcards about: {topic}

Create flashcards that would help someone learn this topic effectively. Each flashcard should have:
- A clear, concise term or question on the front
- A detailed but focused definition or answer on the back

Format your response as a JSON array like this:
[
  {{
    \"term\": \"Front of card\",
    \"definition\": \"Back of card\"
  }}
]

IMPORTANT: Respond ONLY with valid JSON. Do not include any markdown formatting, code blocks, or additional text."
    )
}
