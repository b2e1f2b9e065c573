//! Landing page.
//!
//! Hero copy, quick-start button, and one card per catalog category
//! deep-linking into format selection with the category pre-selected.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::{Category, Route};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn HomePage() -> impl IntoView {
    let start = move |_: leptos::ev::MouseEvent| {
        Route::Select { category: None }.push();
    };
    let open_settings = move |_: leptos::ev::MouseEvent| {
        Route::Settings.push();
    };

    view! {
        <div class=css::page>
            <nav class=css::nav>
                <span class=css::brand>{APP_NAME}</span>
                <button class=css::settingsButton title="Settings" on:click=open_settings>
                    <Icon icon=ic::SETTINGS />
                </button>
            </nav>

            <div class=css::hero>
                <span class=css::heroIcon><Icon icon=ic::SPARKLES /></span>
                <h1 class=css::heroTitle>"Convert Anything"</h1>
                <p class=css::heroSubtitle>{APP_TAGLINE}</p>
                <p class=css::heroBlurb>
                    "Universal file converter supporting images, videos, audio, \
                     documents, archives, and 3D formats"
                </p>
            </div>

            <div class=css::startRow>
                <button class=css::startButton on:click=start>
                    <Icon icon=ic::UPLOAD />
                    "Start Converting"
                </button>
            </div>

            <div class=css::categoryGrid>
                {Category::ALL
                    .into_iter()
                    .map(|category| view! { <CategoryCard category=category /> })
                    .collect::<Vec<_>>()}
            </div>

            <div class=css::statsRow>
                <StatCard value="100+" label="File Formats" />
                <StatCard value="Unlimited" label="Conversions" />
                <StatCard value="No Limit" label="File Size" />
            </div>
        </div>
    }
}

#[component]
fn CategoryCard(category: Category) -> impl IntoView {
    let info = category.info();
    let icon = ic::category_icon(category);

    let open = move |_: leptos::ev::MouseEvent| {
        Route::Select {
            category: Some(category),
        }
        .push();
    };

    view! {
        <div class=css::categoryCard on:click=open>
            <div class=format!("{} {}", css::categoryIcon, info.color)>
                <Icon icon=icon />
            </div>
            <h3 class=css::categoryName>{info.name}</h3>
            <p class=css::categoryCount>{info.formats.len()} " formats"</p>
        </div>
    }
}

#[component]
fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class=css::statCard>
            <div class=css::statValue>{value}</div>
            <div class=css::statLabel>{label}</div>
        </div>
    }
}
