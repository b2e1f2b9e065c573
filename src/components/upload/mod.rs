//! Drag & drop file picker widget.
//!
//! Renders a dropzone until a file is selected, then a summary card
//! with name, formatted size, MIME type, and category glyph. All
//! selection changes go through [`AppContext::set_file`].

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::formats::category_for_extension;
use crate::models::extension_of;
use crate::utils::format_file_size;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

/// Glyph shown on the selected-file card.
fn file_glyph(name: &str) -> &'static str {
    extension_of(name)
        .and_then(|ext| category_for_extension(&ext))
        .map(|category| category.info().glyph)
        .unwrap_or("📎")
}

/// Pull the first file out of a drop event, if any.
fn dropped_file(ev: &web_sys::DragEvent) -> Option<web_sys::File> {
    ev.data_transfer()?.files()?.item(0)
}

#[component]
pub fn FileUpload() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dragging = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let selected = Signal::derive(move || ctx.session.with(|s| s.file.clone()));

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        is_dragging.set(false);
        if let Some(file) = dropped_file(&ev) {
            ctx.set_file(Some(file));
        }
    };

    let on_input_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.item(0)) {
            ctx.set_file(Some(file));
        }
    };

    let open_picker = move |_: leptos::ev::MouseEvent| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class=css::upload>
            <Show
                when=move || selected.with(|f| f.is_some())
                fallback=move || view! {
                    <div
                        class=move || {
                            if is_dragging.get() {
                                format!("{} {}", css::dropzone, css::dropzoneActive)
                            } else {
                                css::dropzone.to_string()
                            }
                        }
                        on:click=open_picker
                        on:dragenter=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            is_dragging.set(true);
                        }
                        on:dragover=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:dragleave=move |ev: leptos::ev::DragEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                            is_dragging.set(false);
                        }
                        on:drop=on_drop
                    >
                        <span class=css::dropzoneIcon><Icon icon=ic::UPLOAD /></span>
                        <h3 class=css::dropzoneTitle>
                            {move || {
                                if is_dragging.get() {
                                    "Drop your file here"
                                } else {
                                    "Drag & Drop your file"
                                }
                            }}
                        </h3>
                        <p class=css::dropzoneHint>"or click to browse"</p>
                        <p class=css::dropzoneNote>"Supports all major file formats"</p>
                        <input
                            node_ref=input_ref
                            type="file"
                            class=css::hiddenInput
                            // Keep the programmatic click from re-entering the
                            // dropzone's click handler.
                            on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                            on:change=on_input_change
                        />
                    </div>
                }
            >
                {move || {
                    selected.get().map(|file| {
                        let glyph = file_glyph(&file.name);
                        let size = format_file_size(file.size);
                        let mime = if file.mime_type.is_empty() {
                            "Unknown".to_string()
                        } else {
                            file.mime_type.clone()
                        };
                        view! {
                            <div class=css::card>
                                <button
                                    class=css::removeButton
                                    title="Remove file"
                                    on:click=move |_| ctx.set_file(None)
                                >
                                    <Icon icon=ic::CLOSE />
                                </button>
                                <div class=css::cardBody>
                                    <div class=css::cardGlyph>{glyph}</div>
                                    <div class=css::cardInfo>
                                        <div class=css::cardName>
                                            <Icon icon=ic::FILE />
                                            <span>{file.name.clone()}</span>
                                            <span class=css::cardCheck><Icon icon=ic::CHECK /></span>
                                        </div>
                                        <p class=css::cardMeta>"Size: " {size}</p>
                                        <p class=css::cardMeta>"Type: " {mime}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }}
            </Show>
        </div>
    }
}
