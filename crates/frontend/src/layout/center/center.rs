use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-center" style="flex: 1; overflow: auto;">
            {children()}
        </main>
    }
}
