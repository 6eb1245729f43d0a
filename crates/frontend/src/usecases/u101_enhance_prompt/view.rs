use super::workflow::{self, EnhanceSurface};
use crate::shared::api_utils::BackendClient;
use crate::shared::busy::BusyFlag;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::dom_contract::{ENHANCE_BUTTON, PROMPT_TEXTAREA, RESULT_CONTAINER, STATUS_CONTAINER};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_enhance_prompt::EnhancePrompt;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
struct EnhanceSignals {
    status: WriteSignal<String>,
    result: WriteSignal<String>,
    busy: WriteSignal<bool>,
}

impl BusyFlag for EnhanceSignals {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl EnhanceSurface for EnhanceSignals {
    fn show_status(&self, text: String) {
        self.status.set(text);
    }

    fn show_result(&self, text: String) {
        self.result.set(text);
    }
}

#[component]
pub fn EnhancePromptPage() -> impl IntoView {
    let client = use_context::<BackendClient>().expect("BackendClient not found");

    let (prompt, set_prompt) = signal(String::new());
    let (status, set_status) = signal(String::new());
    let (result, set_result) = signal(String::new());
    let (is_busy, set_is_busy) = signal(false);

    let surface = EnhanceSignals {
        status: set_status,
        result: set_result,
        busy: set_is_busy,
    };

    let on_enhance = move |_: leptos::ev::MouseEvent| {
        let raw_prompt = prompt.get_untracked();
        let client = client.clone();
        spawn_local(async move {
            workflow::run(&client, &surface, &raw_prompt).await;
        });
    };

    view! {
        <PageFrame page_id=page_id(&EnhancePrompt::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <PageHeader
                    title=EnhancePrompt::display_name()
                    subtitle=EnhancePrompt::description()
                />
            </div>
            <div class="page__content">
                <Textarea
                    id=PROMPT_TEXTAREA
                    label="Enter your raw prompt here:"
                    placeholder="e.g., How can I run python functions concurrently for I/O tasks?"
                    rows=6
                    value=prompt
                    on_input=Callback::new(move |v| set_prompt.set(v))
                />
                <Button
                    id=ENHANCE_BUTTON
                    disabled=Signal::derive(move || is_busy.get())
                    on_click=Callback::new(on_enhance)
                >
                    "Enhance Prompt ✨"
                </Button>
                <pre id=STATUS_CONTAINER class="enhance__status">{move || status.get()}</pre>
                <pre id=RESULT_CONTAINER class="enhance__result">{move || result.get()}</pre>
            </div>
        </PageFrame>
    }
}
