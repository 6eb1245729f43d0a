pub mod request;
pub mod response;

pub use request::ProcessTaskRequest;
pub use response::ProcessTaskResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct EnhancePrompt;

impl UseCaseMetadata for EnhancePrompt {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "enhance_prompt"
    }

    fn display_name() -> &'static str {
        "🤖 RAG Prompt Enhancer"
    }

    fn endpoint() -> &'static str {
        "/process_task"
    }

    fn description() -> &'static str {
        "Enrich your prompts using a local vector database."
    }
}
