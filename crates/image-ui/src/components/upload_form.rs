//! Upload Form Component
//!
//! File picker with preview, task selection with task-specific inputs,
//! content type, and the submit button guarded by [`UploadForm::can_submit`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::commands;
use crate::context::use_image_context;
use crate::form::UploadForm;
use crate::messages::{self, FILL_REQUIRED, NO_FILE};
use crate::models::{ContentType, Task, CONTENT_TYPES, TASKS};
use crate::preview;

fn selected_file(ev: &web_sys::Event) -> Option<File> {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

#[component]
pub fn UploadFormSection() -> impl IntoView {
    let ctx = use_image_context();

    // File handles are JS objects, so this signal stays on the UI thread
    let file = RwSignal::new_local(None::<File>);
    let preview_url = RwSignal::new(None::<String>);
    let task = RwSignal::new(None::<Task>);
    let content_type = RwSignal::new(None::<ContentType>);
    let watermark = RwSignal::new(String::new());
    let width = RwSignal::new(String::new());
    let height = RwSignal::new(String::new());

    let form = Memo::new(move |_| UploadForm {
        file_name: file.with(|f| f.as_ref().map(|f| f.name())),
        task: task.get(),
        content_type: content_type.get(),
        watermark: watermark.get(),
        width: width.get(),
        height: height.get(),
    });

    let on_file_change = move |ev: web_sys::Event| match selected_file(&ev) {
        Some(selected) => {
            if let Some(guess) = ContentType::from_file_name(&selected.name()) {
                content_type.set(Some(guess));
            }
            if let Err(e) = preview::read_data_url(&selected, move |url| preview_url.set(Some(url))) {
                web_sys::console::error_1(&format!("[UPLOAD] preview failed: {}", e).into());
            }
            file.set(Some(selected));
        }
        None => {
            file.set(None);
            preview_url.set(None);
        }
    };

    let submit = move |_| {
        let (Some(metadata), Some(selected)) = (form.get_untracked().metadata(), file.get_untracked()) else {
            ctx.error(FILL_REQUIRED);
            return;
        };
        ctx.loading.set(true);

        spawn_local(async move {
            let outcome = messages::upload_outcome(commands::upload_image(&selected, &metadata).await);
            if let Some(id) = outcome.image_id {
                web_sys::console::log_1(&format!("[UPLOAD] accepted as {}", id).into());
                ctx.image_id.set(id);
            }
            ctx.show(outcome.notice);
            ctx.loading.set(false);
        });
    };

    view! {
        <section class="card upload-form">
            <h2>"Отправка изображения"</h2>

            <div class="form-group">
                <label class="file-label">
                    <input type="file" accept="image/*" on:change=on_file_change />
                    <span class="file-text">
                        {move || form.with(|f| f.file_name.clone()).unwrap_or_else(|| NO_FILE.to_string())}
                    </span>
                </label>
                {move || preview_url.get().map(|src| view! {
                    <div class="image-preview">
                        <img src=src alt="Предпросмотр" />
                    </div>
                })}
            </div>

            <div class="form-group">
                <label>"Задача"</label>
                <select
                    prop:value=move || task.get().map(|t| t.as_str()).unwrap_or("")
                    on:change=move |ev| task.set(Task::parse(&event_target_value(&ev)))
                >
                    <option value="">"Выберите задачу"</option>
                    {TASKS.iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show when=move || task.get() == Some(Task::Watermark)>
                <div class="form-group">
                    <label>"Текст водяного знака"</label>
                    <input
                        type="text"
                        prop:value=move || watermark.get()
                        on:input=move |ev| watermark.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <Show when=move || task.get() == Some(Task::Resize)>
                <div class="form-group resize-group">
                    <label>"Ширина"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || width.get()
                        on:input=move |ev| width.set(event_target_value(&ev))
                    />
                    <label>"Высота"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || height.get()
                        on:input=move |ev| height.set(event_target_value(&ev))
                    />
                </div>
            </Show>

            <div class="form-group">
                <label>"Формат"</label>
                <select
                    prop:value=move || content_type.get().map(|c| c.mime()).unwrap_or("")
                    on:change=move |ev| content_type.set(ContentType::parse(&event_target_value(&ev)))
                >
                    <option value="">"Выберите формат"</option>
                    {CONTENT_TYPES.iter().map(|c| view! {
                        <option value=c.mime()>{c.mime()}</option>
                    }).collect_view()}
                </select>
            </div>

            <button
                type="button"
                class="submit-btn"
                disabled=move || !form.with(|f| f.can_submit()) || ctx.loading.get()
                on:click=submit
            >
                "Отправить"
            </button>
        </section>
    }
}
