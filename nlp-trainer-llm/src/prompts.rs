//! Prompt templates.
//!
//! Pure string builders, kept apart from the client so they can be checked
//! without a network.

/// A general question about NLP concepts.
pub fn general(question: &str) -> String {
    format!(
        "You are an NLP trainer helping a user understand natural language processing concepts and techniques.\n\
         \n\
         Question: {question}\n\
         \n\
         Provide a concise, educational response with these characteristics:\n\
         1. Keep explanations short and to the point (4-5 sentences maximum)\n\
         2. Include a simple, concrete example that illustrates the concept\n\
         3. Use simple language and avoid jargon when possible\n\
         4. Format your response with markdown for better readability\n\
         5. If applicable, include a brief code snippet to demonstrate the concept\n\
         \n\
         If the question isn't about NLP or is inappropriate, politely redirect to an NLP-related topic.\n"
    )
}

/// An explanation of a snippet of NLP code.
pub fn code_explanation(code: &str) -> String {
    format!(
        "You are an NLP trainer analyzing code. Explain the following NLP-related code:\n\
         \n\
         ```python\n\
         {code}\n\
         ```\n\
         \n\
         Provide a concise explanation with these characteristics:\n\
         1. Start with a 1-2 sentence summary of what the code does\n\
         2. Explain key NLP concepts demonstrated in the code (max 3-4 bullet points)\n\
         3. Use simple language that a beginner could understand\n\
         4. Include a brief example of how the code would process a specific input\n\
         5. If there are any best practices or common pitfalls, mention them briefly\n\
         \n\
         Use markdown formatting for clarity. If the code is not NLP-related, explain this politely and offer to help with NLP code instead.\n"
    )
}

/// A conversion of `code` from one library to another, optionally asking
/// for a note on performance.
pub fn library_comparison(
    code: &str,
    source_library: &str,
    target_library: &str,
    include_performance: bool,
) -> String {
    let performance = if include_performance {
        "\n4. A brief note on performance differences (1-2 sentences)\n"
    } else {
        ""
    };

    format!(
        "You are an NLP trainer helping users compare different libraries. Convert the following {source_library} code to equivalent {target_library} code:\n\
         \n\
         Original code ({source_library}):\n\
         ```python\n\
         {code}\n\
         ```\n\
         \n\
         Please provide a concise educational response with:\n\
         1. The equivalent code in {target_library} (with comments explaining key differences)\n\
         2. A brief side-by-side comparison table of the approaches (max 3 points)\n\
         3. Key advantage of each library for this specific task (just 1 per library){performance}\n\
         \n\
         Format your response with markdown for better readability. If the code is not valid {source_library} code or not NLP-related, explain this politely.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_prompt_embeds_the_question() {
        let prompt = general("What is a stemmer?");
        assert!(prompt.starts_with("You are an NLP trainer helping a user"));
        assert!(prompt.contains("\n\nQuestion: What is a stemmer?\n\n"));
        assert!(prompt.ends_with("redirect to an NLP-related topic.\n"));
    }

    #[test]
    fn code_is_fenced_as_python() {
        let prompt = code_explanation("import nltk\nnltk.word_tokenize(text)");
        assert!(prompt.contains("```python\nimport nltk\nnltk.word_tokenize(text)\n```\n"));
    }

    #[test]
    fn comparison_names_both_libraries() {
        let prompt = library_comparison("doc = nlp(text)", "spacy", "nltk", false);
        assert!(prompt.contains("Convert the following spacy code to equivalent nltk code:"));
        assert!(prompt.contains("Original code (spacy):\n```python\ndoc = nlp(text)\n```"));
        assert!(prompt.contains("If the code is not valid spacy code"));
        assert!(!prompt.contains("performance differences"));
    }

    #[test]
    fn performance_note_is_optional() {
        let prompt = library_comparison("x", "nltk", "spacy", true);
        assert!(prompt.contains(
            "(just 1 per library)\n4. A brief note on performance differences (1-2 sentences)\n\n\nFormat"
        ));

        let prompt = library_comparison("x", "nltk", "spacy", false);
        assert!(prompt.contains("(just 1 per library)\n\nFormat"));
    }
}
