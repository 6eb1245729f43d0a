//! Sidebar with the knowledge-base panels

use crate::usecases::u102_add_document::AddDocumentPanel;
use crate::usecases::u103_service_toggle::ServiceTogglePanel;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <div class="app-sidebar__content">
            <AddDocumentPanel />
            <hr class="app-sidebar__divider" />
            <ServiceTogglePanel />
        </div>
    }
}
