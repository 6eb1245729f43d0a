use leptos::prelude::*;

/// PageHeader component - title block at the top of a use case
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Render an `h2` for sidebar panels instead of the page `h1`
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let heading = if compact {
        view! { <h2 class="page-header__title">{title}</h2> }.into_any()
    } else {
        view! { <h1 class="page-header__title">{title}</h1> }.into_any()
    };

    view! {
        <div class="page-header">
            <div class="page-header__text">
                {heading}
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
