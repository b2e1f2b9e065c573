//! Conversion progress page.
//!
//! Entry is guarded: without a selected file and output format the
//! user is redirected back to format selection before any progress
//! starts. Otherwise the simulated runner is spawned, the progress bar
//! tracks its 0..=100 sequence, and completion moves on to results
//! after a short dwell.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::conversion::RESULT_DWELL_MS;
use crate::core::convert::{self, CancelToken};
use crate::core::flow::{self, Step};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/convert/convert.module.css");

/// Phase message for a progress value.
fn status_message(progress: u8) -> &'static str {
    match progress {
        0..25 => "Analyzing file structure...",
        25..50 => "Processing file data...",
        50..75 => "Converting format...",
        75..100 => "Finalizing conversion...",
        _ => "Conversion complete!",
    }
}

#[component]
pub fn ConvertPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // First-class entry validation: missing state redirects before the
    // runner ever starts.
    let redirect = ctx
        .session
        .with_untracked(|s| flow::entry_guard(Step::Converting, s));
    if let Some(target) = redirect {
        flow::redirect_route(target).replace();
        return view! { <div class=css::page></div> }.into_any();
    }

    let progress = RwSignal::new(0u8);

    let file_name = ctx
        .session
        .with_untracked(|s| s.file.as_ref().map(|f| f.name.clone()))
        .unwrap_or_default();
    let output_format = ctx
        .session
        .with_untracked(|s| s.output_format.clone())
        .unwrap_or_default();

    // Cancelled when the user navigates away mid-run; an abandoned run
    // stops at the next step and writes nothing.
    let token = CancelToken::new();
    let cleanup_token = token.clone();
    on_cleanup(move || cleanup_token.cancel());

    {
        let descriptor = ctx.session.with_untracked(|s| s.file.clone());
        let handle = ctx.raw_file();
        let format = output_format.clone();
        spawn_local(async move {
            let Some(descriptor) = descriptor else {
                return;
            };
            let outcome = convert::run(&descriptor, handle.as_ref(), &format, &token, |step| {
                progress.set(step);
            })
            .await;

            match outcome {
                Ok(Some(result)) => {
                    ctx.set_result(Some(result));
                    TimeoutFuture::new(RESULT_DWELL_MS).await;
                    if !token.is_cancelled() {
                        crate::models::Route::Results.push();
                    }
                }
                Ok(None) => {} // cancelled
                Err(e) => {
                    // Progress simply stops; no retry, no user-facing error.
                    dom::console_error(&format!("conversion failed: {e}"));
                }
            }
        });
    }

    let percent = move || format!("{}%", progress.get());
    let bar_width = move || format!("width: {}%", progress.get());
    let done = move || progress.get() >= 100;

    view! {
        <div class=css::page>
            <div class=css::card>
                <div class=css::spinner>
                    <div class=css::spinnerRing></div>
                    <div class=css::spinnerCore>
                        <Icon icon=ic::SPARKLES />
                    </div>
                </div>

                <div class=css::progressHeader>
                    <h2 class=css::heading>
                        <Icon icon=ic::ZAP />
                        "Converting..."
                    </h2>
                    <span class=css::percent>{percent}</span>
                </div>

                <div class=css::track>
                    <div class=css::fill style=bar_width></div>
                </div>

                <div class=css::fileInfo>
                    <p>
                        "Converting "
                        <span class=css::fileName>{file_name}</span>
                    </p>
                    <p>
                        "to "
                        <span class=css::targetFormat>{output_format.to_uppercase()}</span>
                    </p>
                </div>

                <p class=move || {
                    if done() {
                        format!("{} {}", css::status, css::statusDone)
                    } else {
                        css::status.to_string()
                    }
                }>
                    {move || status_message(progress.get())}
                </p>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_phases() {
        assert_eq!(status_message(0), "Analyzing file structure...");
        assert_eq!(status_message(24), "Analyzing file structure...");
        assert_eq!(status_message(25), "Processing file data...");
        assert_eq!(status_message(50), "Converting format...");
        assert_eq!(status_message(75), "Finalizing conversion...");
        assert_eq!(status_message(99), "Finalizing conversion...");
        assert_eq!(status_message(100), "Conversion complete!");
    }
}
