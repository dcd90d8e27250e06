use crate::dashboard::ui::Dashboard;
use crate::location::ui::LocationSelector;
use crate::speech::SpeechService;
use contracts::district::DistrictRef;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    // Provide the narration service to the whole app via context.
    let speech = SpeechService::new();
    provide_context(speech);

    // Warm the voice catalog once. Narration requested before it lands
    // simply runs with the engine's default voice.
    Effect::new(move |_| {
        spawn_local(async move {
            let count = speech.ensure_voices().await;
            log::info!("Voice catalog ready: {} voices", count);
        });
    });

    let selected = RwSignal::new(None::<DistrictRef>);
    let on_select = Callback::new(move |district: DistrictRef| {
        log::info!("District selected: {}", district.district_code);
        selected.set(Some(district));
    });
    let on_back = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="app">
            <header class="app__header">
                <div class="app__header-inner">
                    <div class="app__flag" aria-hidden="true">"🇮🇳"</div>
                    <div class="app__brand">
                        <h1 class="app__title">"Our Voice, Our Rights"</h1>
                        <p class="app__subtitle">"MGNREGA Performance Tracker"</p>
                    </div>
                    <span class="app__tag">"Digital India Initiative"</span>
                </div>
            </header>

            <main class="app__main">
                <Show
                    when=move || selected.get().is_some()
                    fallback=move || view! { <LocationSelector on_select=on_select /> }
                >
                    <Dashboard
                        district=Signal::derive(move || selected.get().unwrap_or_default())
                        on_back=on_back
                    />
                </Show>
            </main>

            <footer class="app__footer">
                <p>
                    "Data sourced from "
                    <a href="https://data.gov.in" target="_blank" rel="noopener noreferrer">
                        "data.gov.in"
                    </a>
                </p>
                <p class="app__footer-note">
                    "Built for transparency in rural employment guarantee schemes."
                </p>
            </footer>
        </div>
    }
}
