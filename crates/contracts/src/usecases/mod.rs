pub mod common;
pub mod u101_enhance_prompt;
pub mod u102_add_document;
pub mod u103_service_toggle;

#[cfg(test)]
mod tests {
    use super::common::UseCaseMetadata;
    use super::u101_enhance_prompt::EnhancePrompt;
    use super::u102_add_document::AddDocument;
    use super::u103_service_toggle::ServiceToggle;

    fn header<U: UseCaseMetadata>() -> (String, &'static str, &'static str, &'static str) {
        (U::full_name(), U::display_name(), U::description(), U::endpoint())
    }

    #[test]
    fn test_usecase_headers() {
        assert_eq!(
            header::<EnhancePrompt>(),
            (
                "u101_enhance_prompt".to_string(),
                "🤖 RAG Prompt Enhancer",
                "Enrich your prompts using a local vector database.",
                "/process_task"
            )
        );
        assert_eq!(
            header::<AddDocument>(),
            (
                "u102_add_document".to_string(),
                "📚 Add to Knowledge Base",
                "Add new documents to your local vector DB.",
                "/add_document"
            )
        );
        let (name, title, description, endpoint) = header::<ServiceToggle>();
        assert_eq!(name, "u103_service_toggle");
        assert!(!title.is_empty() && !description.is_empty());
        assert_eq!(endpoint, "/enable");
    }
}
