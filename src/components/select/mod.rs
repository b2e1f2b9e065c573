//! Format selection page.
//!
//! File upload plus the output format grid produced by the
//! compatibility resolver. The category is inferred from the selected
//! file's extension unless the route carries a pre-selected one.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::upload::FileUpload;
use crate::core::formats::{OutputGroup, OutputOffer, category_for_extension, output_options_for};
use crate::models::{Category, Route};

stylance::import_crate_style!(css, "src/components/select/select.module.css");

/// Heading for an output group: category display name when the group
/// is a category, otherwise the capitalized ad hoc label.
fn group_title(group: OutputGroup) -> String {
    match group.category() {
        Some(category) => category.info().name.to_string(),
        None => {
            let label = group.label();
            let mut chars = label.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

fn group_glyph(group: OutputGroup) -> &'static str {
    group
        .category()
        .map(|category| category.info().glyph)
        .unwrap_or("📁")
}

#[component]
pub fn SelectPage(category: Option<Category>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Output groups for the current file. The route's category, when
    // present, overrides extension inference.
    let options = Signal::derive(move || {
        ctx.session.with(|s| {
            let file = s.file.as_ref()?;
            let ext = file.extension()?;
            let resolved = category.or_else(|| category_for_extension(&ext))?;
            Some(output_options_for(resolved, &ext))
        })
    });

    let has_file = Signal::derive(move || ctx.session.with(|s| s.file.is_some()));
    let selected_format = Signal::derive(move || ctx.session.with(|s| s.output_format.clone()));
    let ready = Signal::derive(move || ctx.session.with(|s| s.ready_to_convert()));

    let go_back = move |_: leptos::ev::MouseEvent| {
        Route::Home.push();
    };
    let go_convert = move |_: leptos::ev::MouseEvent| {
        if ctx.session.with_untracked(|s| s.ready_to_convert()) {
            Route::Convert.push();
        }
    };

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
                        "Select Output Format"
                    </h1>
                    <div class=css::headerSpacer></div>
                </div>

                <FileUpload />

                <Show
                    when=move || has_file.get()
                    fallback=|| view! {
                        <div class=css::emptyState>
                            <p>"Upload a file to see available conversion formats"</p>
                        </div>
                    }
                >
                    <h2 class=css::sectionTitle>"Choose Output Format"</h2>

                    {move || {
                        options.get().map(|groups| {
                            groups
                                .into_iter()
                                .filter_map(|(group, offer)| {
                                    // Capability flags are not selectable formats.
                                    let formats = match offer {
                                        OutputOffer::Formats(formats) => formats,
                                        OutputOffer::Capability(_) => return None,
                                    };
                                    if formats.is_empty() {
                                        return None;
                                    }
                                    Some(view! {
                                        <FormatGroup group=group formats=formats />
                                    })
                                })
                                .collect::<Vec<_>>()
                        })
                    }}

                    <Show when=move || ready.get()>
                        <div class=css::continueRow>
                            <button class=css::continueButton on:click=go_convert>
                                "Continue"
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                        </div>
                    </Show>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn FormatGroup(group: OutputGroup, formats: Vec<&'static str>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let title = group_title(group);
    let glyph = group_glyph(group);
    let label = group.label();

    view! {
        <div class=css::group>
            <h3 class=css::groupTitle>
                <span>{glyph}</span>
                {title}
            </h3>
            <div class=css::formatGrid>
                {formats
                    .into_iter()
                    .map(|format| {
                        let is_selected = Signal::derive(move || {
                            ctx.session
                                .with(|s| s.output_format.as_deref() == Some(format))
                        });
                        view! {
                            <button
                                class=move || {
                                    if is_selected.get() {
                                        format!("{} {}", css::formatOption, css::formatSelected)
                                    } else {
                                        css::formatOption.to_string()
                                    }
                                }
                                on:click=move |_| {
                                    ctx.set_output_format(Some(format.to_string()));
                                }
                            >
                                <div class=css::formatCode>{format.to_uppercase()}</div>
                                <div class=css::formatGroupLabel>{label}</div>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
