use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::api_utils::{ApiConfig, BackendClient};
use crate::usecases::u101_enhance_prompt::EnhancePromptPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every use case talks to the backend through the same client.
    provide_context(BackendClient::new(ApiConfig::load()));

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <EnhancePromptPage /> }.into_any()
        />
    }
}
