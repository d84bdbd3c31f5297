use leptos::prelude::*;

use super::interactions;

const CONTACT_ITEMS: [(&str, &str, &str); 3] = [
    ("Email", "shikhar.raj@example.com", "mailto:shikhar.raj@example.com"),
    ("LinkedIn", "linkedin.com/in/shikharraj", "https://linkedin.com/in/shikharraj"),
    ("Location", "Bengaluru, India", ""),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/shikharraj"),
    ("LinkedIn", "https://linkedin.com/in/shikharraj"),
    ("Email", "mailto:shikhar.raj@example.com"),
];

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"Get In Touch"</h2>
            <p class="contact-intro">
                "Open to DevOps and platform engineering roles, or a chat about pipelines that could be faster."
            </p>
            <div class="contact-items">
                {CONTACT_ITEMS
                    .iter()
                    .enumerate()
                    .map(|(index, (label, value, href))| {
                        view! {
                            <div
                                class="contact-item"
                                on:mouseenter=move |_| interactions::contact_hover(index, true)
                                on:mouseleave=move |_| interactions::contact_hover(index, false)
                            >
                                <span class="contact-label">{*label}</span>
                                {if href.is_empty() {
                                    view! { <span>{*value}</span> }.into_any()
                                } else {
                                    view! { <a href=*href>{*value}</a> }.into_any()
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .enumerate()
                    .map(|(index, (label, href))| {
                        view! {
                            <a
                                href=*href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="social-link"
                                aria-label=*label
                                on:click=move |ev| interactions::social_click(&ev, index)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
