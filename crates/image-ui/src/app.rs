use leptos::prelude::*;
use ui_shared::NoticeBanner;

use crate::components::{ImageLookupSection, UploadFormSection};
use crate::context::ImageContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = ImageContext::new();
    provide_context(ctx);

    web_sys::console::log_1(&"[APP] image service page mounted".into());

    view! {
        <main class="container">
            <h1>"Обработка изображений"</h1>
            <NoticeBanner notice=ctx.notice />
            <UploadFormSection />
            <ImageLookupSection />
            <Show when=move || ctx.loading.get()>
                <div class="loading-overlay">
                    <div class="spinner"></div>
                    <span>"Обработка..."</span>
                </div>
            </Show>
        </main>
    }
}
