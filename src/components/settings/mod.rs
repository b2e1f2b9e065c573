//! Settings page.
//!
//! Theme toggle (persisted through the context), language selector and
//! conversion quality slider (page-local; the mock converter ignores
//! them).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::quality;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/settings/settings.module.css");

const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "🇺🇸"),
    ("es", "Spanish", "🇪🇸"),
    ("fr", "French", "🇫🇷"),
    ("de", "German", "🇩🇪"),
    ("ja", "Japanese", "🇯🇵"),
    ("zh", "Chinese", "🇨🇳"),
];

fn quality_tier(value: u8) -> &'static str {
    match value {
        ..50 => "Fast",
        50..80 => "Balanced",
        _ => "High",
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let language = RwSignal::new("en".to_string());
    let quality_value = RwSignal::new(quality::DEFAULT);

    let is_dark = Signal::derive(move || ctx.theme.get().is_dark());
    let toggle = move |_: leptos::ev::MouseEvent| ctx.toggle_theme();

    let go_back = move |_: leptos::ev::MouseEvent| dom::history_back();

    view! {
        <div class=css::page>
            <div class=css::container>
                <div class=css::header>
                    <button class=css::backButton on:click=go_back>
                        <Icon icon=ic::ARROW_LEFT />
                        "Back"
                    </button>
                    <h1 class=css::title>
                        <Icon icon=ic::SPARKLES />
                        "Settings"
                    </h1>
                    <div class=css::headerSpacer></div>
                </div>

                <div class=css::section>
                    <div class=css::sectionHeader>
                        <div class=css::sectionIcon>
                            {move || {
                                if is_dark.get() {
                                    view! { <Icon icon=ic::MOON /> }.into_any()
                                } else {
                                    view! { <Icon icon=ic::SUN /> }.into_any()
                                }
                            }}
                        </div>
                        <div>
                            <h3 class=css::sectionTitle>"Theme"</h3>
                            <p class=css::sectionDesc>"Switch between dark and light mode"</p>
                        </div>
                    </div>
                    <button class=css::themeButton on:click=toggle>
                        {move || {
                            if is_dark.get() {
                                view! { <Icon icon=ic::SUN /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::MOON /> }.into_any()
                            }
                        }}
                        <span class=css::themeLabel>
                            {move || if is_dark.get() { "Use Light Mode" } else { "Use Dark Mode" }}
                        </span>
                    </button>
                </div>

                <div class=css::section>
                    <div class=css::sectionHeader>
                        <div class=css::sectionIcon><Icon icon=ic::GLOBE /></div>
                        <div>
                            <h3 class=css::sectionTitle>"Language"</h3>
                            <p class=css::sectionDesc>"Select your preferred language"</p>
                        </div>
                    </div>
                    <select
                        class=css::languageSelect
                        on:change=move |ev| language.set(event_target_value(&ev))
                        prop:value=move || language.get()
                    >
                        {LANGUAGES
                            .iter()
                            .map(|(code, name, flag)| view! {
                                <option value=*code>{format!("{flag} {name}")}</option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class=css::section>
                    <div class=css::sectionHeader>
                        <div class=css::sectionIcon><Icon icon=ic::SLIDERS /></div>
                        <div>
                            <h3 class=css::sectionTitle>"Conversion Quality"</h3>
                            <p class=css::sectionDesc>"Adjust the quality of converted files"</p>
                        </div>
                    </div>
                    <div class=css::qualityRow>
                        <span>{move || format!("Quality: {}%", quality_value.get())}</span>
                        <span class=css::qualityTier>
                            {move || quality_tier(quality_value.get())}
                        </span>
                    </div>
                    <input
                        type="range"
                        class=css::qualitySlider
                        min=quality::MIN.to_string()
                        max=quality::MAX.to_string()
                        prop:value=move || quality_value.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                quality_value.set(value);
                            }
                        }
                    />
                    <div class=css::qualityScale>
                        <span>"Lower Size"</span>
                        <span>"Better Quality"</span>
                    </div>
                </div>

                <div class=css::footer>
                    <p>"Settings are automatically saved to your browser"</p>
                </div>
            </div>
        </div>
    }
}
