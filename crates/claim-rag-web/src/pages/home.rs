//! Home Page

use leptos::prelude::*;

use crate::components::Banner;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Banner />
        </div>
    }
}
