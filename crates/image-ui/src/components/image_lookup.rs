//! Image Lookup Component
//!
//! Fetch a processed image by ID, or delete it after confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use ui_shared::{js_message, DeleteConfirmButton};
use web_sys::Url;

use crate::commands;
use crate::context::use_image_context;
use crate::messages::{self, ENTER_ID};
use crate::models::ImageLookup;

/// Image currently on display and its object URL
#[derive(Debug, Clone, PartialEq)]
struct FetchedImage {
    id: String,
    url: String,
}

fn release(url: &str) {
    if let Err(e) = Url::revoke_object_url(url) {
        web_sys::console::error_1(&format!("[LOOKUP] revoke failed: {}", js_message(&e)).into());
    }
}

#[component]
pub fn ImageLookupSection() -> impl IntoView {
    let ctx = use_image_context();
    let fetched = RwSignal::new(None::<FetchedImage>);

    let current_id = move || ctx.image_id.with(|raw| messages::entered_id(raw).map(str::to_string));

    let clear_fetched = move || {
        if let Some(old) = fetched.get_untracked() {
            release(&old.url);
        }
        fetched.set(None);
    };

    let get_image = move |_| {
        let Some(id) = current_id() else {
            ctx.error(ENTER_ID);
            return;
        };
        ctx.loading.set(true);

        spawn_local(async move {
            match commands::fetch_image(&id).await {
                Ok(ImageLookup::Ready(blob)) => match Url::create_object_url_with_blob(&blob) {
                    Ok(url) => {
                        web_sys::console::log_1(&format!("[LOOKUP] {} ready ({} bytes)", id, blob.size()).into());
                        clear_fetched();
                        fetched.set(Some(FetchedImage { id, url }));
                    }
                    Err(e) => ctx.error(format!("Ошибка: {}", js_message(&e))),
                },
                Ok(ImageLookup::Processing(status)) => ctx.show(messages::processing(&status)),
                Err(e) => ctx.show(messages::failure("Ошибка", &e)),
            }
            ctx.loading.set(false);
        });
    };

    let delete_image = move |_: ()| {
        let Some(id) = current_id() else {
            ctx.error(ENTER_ID);
            return;
        };
        ctx.loading.set(true);

        spawn_local(async move {
            match commands::delete_image(&id).await {
                Ok(()) => {
                    web_sys::console::log_1(&format!("[LOOKUP] deleted {}", id).into());
                    ctx.show(messages::deleted(&id));
                    clear_fetched();
                }
                Err(e) => ctx.show(messages::failure("Ошибка при удалении", &e)),
            }
            ctx.loading.set(false);
        });
    };

    view! {
        <section class="card image-lookup">
            <h2>"Управление изображениями"</h2>
            <div class="form-group">
                <label>"ID изображения"</label>
                <input
                    type="text"
                    placeholder="Введите ID"
                    prop:value=move || ctx.image_id.get()
                    on:input=move |ev| ctx.image_id.set(event_target_value(&ev))
                />
            </div>
            <div class="lookup-actions">
                <button type="button" disabled=move || ctx.loading.get() on:click=get_image>
                    "Получить"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    label="Удалить"
                    prompt=Signal::derive(move || messages::delete_prompt(&current_id().unwrap_or_default()))
                    on_confirm=delete_image
                    // No confirmation step until there is an ID to name
                    disabled=Signal::derive(move || ctx.loading.get() || current_id().is_none())
                />
            </div>

            {move || fetched.get().map(|image| {
                let url = image.url.clone();
                view! {
                    <div class="fetched-image">
                        // The pixels stay on screen after the URL is released
                        <img src=image.url alt="Fetched Image" on:load=move |_| release(&url) />
                        <div class="fetched-image-info">
                            <strong>"ID:"</strong>
                            " "
                            {image.id}
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
