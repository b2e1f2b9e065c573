//! Conversion results page.
//!
//! Shows the original and converted file cards, offers the mock
//! download, and provides restart paths that clear the session first.
//! With no result or file to show it renders a terminal empty state
//! whose only exit is the landing page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Route;
use crate::utils::{dom, format_file_size};

stylance::import_crate_style!(css, "src/components/results/results.module.css");

#[component]
pub fn ResultsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let has_result = Signal::derive(move || {
        ctx.session
            .with(|s| s.result.is_some() && s.file.is_some())
    });

    view! {
        <Show
            when=move || has_result.get()
            fallback=move || view! { <EmptyResults /> }
        >
            <ResultsContent />
        </Show>
    }
}

#[component]
fn EmptyResults() -> impl IntoView {
    view! {
        <div class=css::emptyWrapper>
            <div class=css::emptyCard>
                <p class=css::emptyText>"No conversion result found"</p>
                <button
                    class=css::emptyButton
                    on:click=move |_| Route::Home.push()
                >
                    "Go Home"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ResultsContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let file = ctx
        .session
        .with_untracked(|s| s.file.clone())
        .expect("guarded by has_result");
    let result = ctx
        .session
        .with_untracked(|s| s.result.clone())
        .expect("guarded by has_result");

    // Image preview over the live handle; gone after a reload.
    let preview_url = if file.is_image() {
        ctx.raw_file()
            .and_then(|f| web_sys::Url::create_object_url_with_blob(&f).ok())
    } else {
        None
    };

    let download = {
        let result = result.clone();
        move |_: leptos::ev::MouseEvent| {
            if let Some(url) = &result.download_url {
                dom::trigger_download(url, &result.file_name);
            }
        }
    };

    let convert_another = move |_: leptos::ev::MouseEvent| {
        ctx.reset_all();
        Route::Select { category: None }.push();
    };
    let go_home = move |_: leptos::ev::MouseEvent| {
        ctx.reset_all();
        Route::Home.push();
    };

    let downloadable = result.download_url.is_some();

    view! {
        <div class=css::page>
            <div class=css::container>
                <div class=css::successHeader>
                    <div class=css::successIcon>
                        <Icon icon=ic::CHECK />
                    </div>
                    <h1 class=css::title>"Conversion Complete!"</h1>
                    <p class=css::subtitle>"Your file has been successfully converted"</p>
                </div>

                <div class=css::card>
                    <div class=css::grid>
                        <div>
                            <h3 class=css::sectionTitle>"Original File"</h3>
                            <div class=css::fileCard>
                                <div class=css::fileGlyph>"📄"</div>
                                <div class=css::fileDetails>
                                    <p class=css::fileName>{file.name.clone()}</p>
                                    <p class=css::fileMeta>{format_file_size(file.size)}</p>
                                </div>
                            </div>
                        </div>
                        <div>
                            <h3 class=css::sectionTitle>"Converted File"</h3>
                            <div class=format!("{} {}", css::fileCard, css::fileCardConverted)>
                                <div class=css::fileGlyph>"✨"</div>
                                <div class=css::fileDetails>
                                    <p class=format!("{} {}", css::fileName, css::fileNameAccent)>
                                        {result.file_name.clone()}
                                    </p>
                                    <p class=css::fileMeta>{format_file_size(result.file_size)}</p>
                                    <Show when=move || downloadable>
                                        <p class=css::readyBadge>
                                            <Icon icon=ic::CHECK />
                                            "Ready to download"
                                        </p>
                                    </Show>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                {preview_url.map(|url| view! {
                    <div class=css::previewCard>
                        <h3 class=css::sectionTitle>"Preview"</h3>
                        <div class=css::previewBox>
                            <img src=url alt="Preview" class=css::previewImage />
                        </div>
                    </div>
                })}

                <div class=css::actions>
                    <button
                        class=css::primaryButton
                        disabled=move || !downloadable
                        on:click=download
                    >
                        <Icon icon=ic::DOWNLOAD />
                        "Download File"
                    </button>
                    <button class=css::secondaryButton on:click=convert_another>
                        <Icon icon=ic::REFRESH />
                        "Convert Another"
                    </button>
                    <button class=css::secondaryButton on:click=go_home>
                        <Icon icon=ic::HOME />
                        "Home"
                    </button>
                </div>
            </div>
        </div>
    }
}
