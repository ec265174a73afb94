//! Prompt templates.

use super::chat::ChatMode;

pub(crate) fn greeting(message: &str) -> String {
    format!(
        "You are Prepmate, a friendly AI study assistant. A student greeted you with: \"{message}\"\n\n\
         Reply warmly in one or two sentences, introduce yourself as their study assistant \
         and ask how you can help with their studies today."
    )
}

pub(crate) fn chat(question: &str, context: &str, mode: ChatMode) -> String {
    let has_context = !context.is_empty();

    match mode {
        ChatMode::Strict => {
            let material = if has_context {
                format!("STUDY MATERIAL (your only source):\n{context}\n\n---")
            } else {
                "No study material is available for this question.".to_owned()
            };

            format!(
                "You are an AI study assistant in strict, exam-safe mode.\n\n\
                 Rules:\n\
                 - Answer only with information found in the study material below.\n\
                 - If the material does not cover the question, say politely that the notes \
                   do not contain enough information about it.\n\
                 - Do not add general knowledge.\n\
                 - Use simple, clear language and speak like a tutor who has read the notes; \
                   never mention documents, chunks, context or PDFs.\n\n\
                 {material}\n\n\
                 STUDENT'S QUESTION: {question}\n\n\
                 ANSWER USING ONLY THE STUDY MATERIAL:"
            )
        }
        ChatMode::Hybrid => {
            let material = if has_context {
                format!("STUDY MATERIAL FOR REFERENCE:\n{context}\n\n---\n\n")
            } else {
                String::new()
            };

            format!(
                "You are a friendly, expert AI tutor in hybrid mode.\n\n\
                 Approach:\n\
                 1. Use the study material below as your primary source when it covers the topic.\n\
                 2. When it is incomplete, supplement it with your own knowledge and say so \
                    (for example \"Beyond what's in your notes...\").\n\n\
                 Give thorough explanations with examples in simple language. Never mention \
                 documents, chunks, context or PDFs.\n\n\
                 {material}\
                 STUDENT'S QUESTION: {question}\n\n\
                 PROVIDE A HELPFUL, EDUCATIONAL ANSWER:"
            )
        }
    }
}

pub(crate) fn explain(concept: &str, context: &str) -> String {
    format!(
        "You are an expert tutor. A student wants to understand \"{concept}\" in depth.\n\n\
         Start from the study material below, then expand it with your own expertise. \
         Break complex parts down step by step, use examples and analogies, and mention \
         related concepts worth knowing. Do not refer to the material itself.\n\n\
         STUDY MATERIAL FOR REFERENCE:\n{context}\n\n\
         PROVIDE A COMPREHENSIVE EXPLANATION OF \"{concept}\":"
    )
}

pub(crate) fn summary(text: &str) -> String {
    format!(
        "Create a clear, well-organized summary of the following content.\n\n\
         Focus on key concepts, main ideas and important facts. Use simple language, \
         structure the summary with short sections or bullet points, highlight definitions \
         and practical takeaways, and teach the concepts directly without referring to \
         \"the document\" or \"the author\".\n\n\
         Content to summarize:\n{text}"
    )
}

pub(crate) fn flashcards(text: &str, count: usize) -> String {
    format!(
        "You are an experienced teacher writing student-friendly study flashcards.\n\
         Generate exactly {count} flashcards from the content below.\n\n\
         Focus on the main ideas a student would be examined on; prefer why/how questions \
         for concepts the content emphasizes. Avoid questions about authors, titles, page \
         or chapter structure, and avoid trick questions.\n\n\
         FORMAT:\n\
         Q: (question)\n\
         A: (student-friendly answer)\n\
         D: (easy, medium or hard)\n\n\
         Separate flashcards with \"---\".\n\n\
         CONTENT:\n{text}"
    )
}

pub(crate) fn quiz(text: &str, count: usize) -> String {
    format!(
        "You are a teacher writing practice multiple-choice questions.\n\
         Generate exactly {count} questions from the content below.\n\n\
         Test understanding rather than memorization. Distractors should reflect common \
         student mistakes. Avoid metadata, structure-based and trick questions.\n\n\
         FORMAT:\n\
         Q: (question)\n\
         O1: ...\n\
         O2: ...\n\
         O3: ...\n\
         O4: ...\n\
         C: (the correct option text)\n\
         E: (teaching-oriented explanation)\n\
         D: (easy, medium or hard)\n\n\
         Separate questions with \"---\".\n\n\
         CONTENT:\n{text}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_without_context() {
        let prompt = chat("What is a gene?", "", ChatMode::Strict);
        assert!(prompt.contains("No study material is available"));
        assert!(prompt.contains("What is a gene?"));
    }

    #[test]
    fn test_hybrid_includes_context() {
        let prompt = chat("What is a gene?", "Genes encode proteins.", ChatMode::Hybrid);
        assert!(prompt.contains("STUDY MATERIAL FOR REFERENCE:\nGenes encode proteins."));
    }

    #[test]
    fn test_hybrid_without_context_omits_material() {
        let prompt = chat("What is a gene?", "", ChatMode::Hybrid);
        assert!(!prompt.contains("STUDY MATERIAL FOR REFERENCE"));
    }

    #[test]
    fn test_generation_prompts_state_count() {
        assert!(flashcards("text", 7).contains("exactly 7 flashcards"));
        assert!(quiz("text", 4).contains("exactly 4 questions"));
    }
}
