//! System prompt for the tutor model

/// Placeholder replaced by the target language
const LANGUAGE_PLACEHOLDER: &str = "{language}";

const TEMPLATE: &str = r#"
You are a computer assisted {language} tutor. A user will provide an article or transcription of
a podcast in {language}. You are to create 5 multiple choice questions that ask questions about
the text you receive. The questions should vary in difficulty. You should ask questions
that require context information, as well as questions that have simple one or two word answers.

Each question will have 4 options to choose from: A, B, C, or D. After you list all the questions
and answer choices, you will provide the answers, along with any less common {language} vocabulary
words and their definition in English.
"#;

/// Build the system prompt for `language`
pub fn build_prompt(language: &str) -> String {
    TEMPLATE.replace(LANGUAGE_PLACEHOLDER, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_is_substituted() {
        let prompt = build_prompt("Spanish");

        assert!(prompt.contains("Spanish tutor"));
        assert!(prompt.contains("Spanish vocabulary"));
        assert!(!prompt.contains(LANGUAGE_PLACEHOLDER));
        assert!(!prompt.contains("French"));
    }

    #[test]
    fn test_prompt_describes_quiz_format() {
        let prompt = build_prompt("French");

        assert!(prompt.contains("5 multiple choice questions"));
        assert!(prompt.contains("A, B, C, or D"));
        assert!(prompt.contains("provide the answers"));
        assert!(prompt.contains("definition in English"));
    }
}
