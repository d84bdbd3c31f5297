use leptos::prelude::*;

use super::interactions;

/// Section id and label of every navigation link, in page order.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("certifications", "Certifications"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <span class="logo-prompt">"$"</span>
                    " shikhar.raj"
                </a>
                <ul class="nav-menu">
                    {NAV_ITEMS
                        .iter()
                        .map(|(id, label)| {
                            let href = format!("#{id}");
                            view! {
                                <li class="nav-item">
                                    <a
                                        href=href.clone()
                                        class="nav-link"
                                        on:click=move |ev| interactions::nav_click(&ev, &href)
                                    >
                                        {*label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| interactions::toggle_menu()
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
