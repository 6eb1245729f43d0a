use super::workflow::{self, AddDocumentSurface};
use crate::shared::api_utils::BackendClient;
use crate::shared::busy::BusyFlag;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::dom_contract::{ADD_DOC_BUTTON, DOC_TEXTAREA, SIDEBAR_STATUS};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_PANEL};
use crate::shared::status::StatusLine;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_add_document::AddDocument;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
struct AddDocumentSignals {
    document: WriteSignal<String>,
    status: WriteSignal<StatusLine>,
    busy: WriteSignal<bool>,
}

impl BusyFlag for AddDocumentSignals {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl AddDocumentSurface for AddDocumentSignals {
    fn show_status(&self, line: StatusLine) {
        self.status.set(line);
    }

    fn clear_document(&self) {
        self.document.set(String::new());
    }
}

/// Sidebar panel that adds documents to the knowledge base.
#[component]
pub fn AddDocumentPanel() -> impl IntoView {
    let client = use_context::<BackendClient>().expect("BackendClient not found");

    let (document, set_document) = signal(String::new());
    let (status, set_status) = signal(StatusLine::default());
    let (is_busy, set_is_busy) = signal(false);

    let surface = AddDocumentSignals {
        document: set_document,
        status: set_status,
        busy: set_is_busy,
    };

    let on_add = move |_: leptos::ev::MouseEvent| {
        let raw_document = document.get_untracked();
        let client = client.clone();
        spawn_local(async move {
            workflow::run(&client, &surface, &raw_document).await;
        });
    };

    view! {
        <PageFrame page_id=page_id(&AddDocument::full_name(), PAGE_CAT_PANEL) category=PAGE_CAT_PANEL>
            <PageHeader
                title=AddDocument::display_name()
                subtitle=AddDocument::description()
                compact=true
            />
            <Textarea
                id=DOC_TEXTAREA
                label="Document Text"
                rows=5
                value=document
                on_input=Callback::new(move |v| set_document.set(v))
            />
            <Button
                id=ADD_DOC_BUTTON
                variant="secondary"
                disabled=Signal::derive(move || is_busy.get())
                on_click=Callback::new(on_add)
            >
                "Add Document"
            </Button>
            <div
                id=SIDEBAR_STATUS
                class=move || status.with(|s| s.tone.css_class())
            >
                {move || status.with(|s| s.text.clone())}
            </div>
        </PageFrame>
    }
}
