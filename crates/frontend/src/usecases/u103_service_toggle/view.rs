use super::workflow::{self, ServiceToggleSurface};
use crate::shared::api_utils::BackendClient;
use crate::shared::busy::BusyFlag;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Checkbox;
use crate::shared::dom_contract::{SERVICE_STATUS, SERVICE_TOGGLE};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_PANEL};
use crate::shared::status::StatusLine;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u103_service_toggle::ServiceToggle;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
struct ServiceToggleSignals {
    enabled: WriteSignal<bool>,
    status: WriteSignal<StatusLine>,
    busy: WriteSignal<bool>,
}

impl BusyFlag for ServiceToggleSignals {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }
}

impl ServiceToggleSurface for ServiceToggleSignals {
    fn show_status(&self, line: StatusLine) {
        self.status.set(line);
    }

    fn show_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

/// Sidebar switch for the backend memory service.
///
/// The backend starts disabled and offers no read endpoint, so the checkbox
/// starts unchecked and tracks the state returned by each toggle.
#[component]
pub fn ServiceTogglePanel() -> impl IntoView {
    let client = use_context::<BackendClient>().expect("BackendClient not found");

    let (enabled, set_enabled) = signal(false);
    let (status, set_status) = signal(StatusLine::default());
    let (is_busy, set_is_busy) = signal(false);

    let surface = ServiceToggleSignals {
        enabled: set_enabled,
        status: set_status,
        busy: set_is_busy,
    };

    let on_toggle = move |desired: bool| {
        let last_known = enabled.get_untracked();
        set_enabled.set(desired);
        let client = client.clone();
        spawn_local(async move {
            workflow::run(&client, &surface, desired, last_known).await;
        });
    };

    view! {
        <PageFrame page_id=page_id(&ServiceToggle::full_name(), PAGE_CAT_PANEL) category=PAGE_CAT_PANEL>
            <PageHeader
                title=ServiceToggle::display_name()
                subtitle=ServiceToggle::description()
                compact=true
            />
            <Checkbox
                id=SERVICE_TOGGLE
                label="Service enabled"
                checked=enabled
                disabled=Signal::derive(move || is_busy.get())
                on_change=Callback::new(on_toggle)
            />
            <div
                id=SERVICE_STATUS
                class=move || status.with(|s| s.tone.css_class())
            >
                {move || status.with(|s| s.text.clone())}
            </div>
        </PageFrame>
    }
}
