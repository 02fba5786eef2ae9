//! Page footer.

use leptos::prelude::*;

use crate::content::{PROFILE_NAME, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <ul class="footer__links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|(label, href)| {
                        view! {
                            <li>
                                <a href=*href target="_blank" rel="noopener noreferrer">
                                    {*label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="footer__credit">{format!("© {PROFILE_NAME}. Built with Rust and Leptos.")}</p>
        </footer>
    }
}
