//! Templated follow-up questions

fn key_points(topic: &str) -> String {
    format!("What are the key points of \"{}\"?", topic)
}

fn scenarios(topic: &str) -> String {
    format!("Which scenarios should watch out for \"{}\"?", topic)
}

fn next_steps(topic: &str) -> String {
    format!("What are the recommended next steps for \"{}\"?", topic)
}

/// Question templates, cycled over the topic list
const TEMPLATES: [fn(&str) -> String; 3] = [key_points, scenarios, next_steps];

/// Turns topics into suggested questions
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    max_questions: usize,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self { max_questions: 5 }
    }
}

impl QuestionGenerator {
    pub fn new(max_questions: usize) -> Self {
        Self { max_questions }
    }

    /// One question per topic in order, capped at `max_questions`
    pub fn generate(&self, topics: &[String]) -> Vec<String> {
        topics
            .iter()
            .zip(TEMPLATES.iter().cycle())
            .take(self.max_questions)
            .map(|(topic, template)| template(topic))
            .collect()
    }
}
