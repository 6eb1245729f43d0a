pub mod center;
pub mod left;

use leptos::prelude::*;

/// Page shell: knowledge-base sidebar on the left, enhance workspace in the center.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// |   (Left)  |           (Center)           |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>
        </div>
    }
}
