//! The single portfolio page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::footer::Footer;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::content::PROFILE_NAME;
use crate::sections::{about::About, contact::Contact, hero::Hero, projects::Projects, skills::Skills};

#[component]
pub fn HomePage() -> impl IntoView {
    let started = RwSignal::new(false);
    let on_start = Callback::new(move |()| started.set(true));

    view! {
        <Title text=format!("{PROFILE_NAME} | Portfolio")/>
        <Show when=move || !started.get()>
            <LoadingScreen on_complete=on_start/>
        </Show>
        <div class="page">
            <Navbar/>
            <main>
                <Hero/>
                <About/>
                <Projects/>
                <Skills/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
