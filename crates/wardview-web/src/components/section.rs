use leptos::prelude::*;

/// Titled wrapper around one block of dashboard content
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="section">
            <h2 class="section-title">{title}</h2>
            <div class="section-body">{children()}</div>
        </section>
    }
}
