use chrono::Utc;
use leptos::prelude::*;

use crate::{
    app::{blog::PostReader, contact::Field, storage::BlogStorage},
    blog::{find_post, parse_tags, read_time, save_draft, BlogPost, PostDraft},
};

#[cfg(feature = "hydrate")]
const READ_FAILED: &str = "Error reading the image file";

/// Checks an uploaded cover image and reads it into `image_url` as a data URL.
#[cfg(feature = "hydrate")]
fn read_cover(file: web_sys::File, image_url: RwSignal<String>, set_error: WriteSignal<Option<String>>) {
    use wasm_bindgen::{closure::Closure, JsCast};

    use crate::blog::validate_cover_upload;

    if let Err(e) = validate_cover_upload(file.size() as u64, &file.type_()) {
        set_error.set(Some(e.to_string()));
        return;
    }
    set_error.set(None);

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("couldn't create file reader: {e:?}");
            set_error.set(Some(READ_FAILED.to_string()));
            return;
        }
    };
    let onload = Closure::once_into_js({
        let reader = reader.clone();
        move || match reader.result().ok().and_then(|v| v.as_string()) {
            Some(data_url) => image_url.set(data_url),
            None => set_error.set(Some(READ_FAILED.to_string())),
        }
    });
    let onerror = Closure::once_into_js(move || {
        set_error.set(Some(READ_FAILED.to_string()))
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.set_onerror(Some(onerror.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(&file) {
        log::error!("couldn't read {}: {e:?}", file.name());
        set_error.set(Some(READ_FAILED.to_string()));
    }
}

#[component]
pub fn BlogEditor(
    editing: Option<String>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let storage = expect_context::<BlogStorage>();
    let initial = editing
        .as_deref()
        .and_then(|id| storage.posts.with_untracked(|posts| find_post(posts, id).map(PostDraft::from_post)))
        .unwrap_or_default();

    let title = RwSignal::new(initial.title);
    let excerpt = RwSignal::new(initial.excerpt);
    let content = RwSignal::new(initial.content);
    let tags = RwSignal::new(initial.tags);
    let image_url = RwSignal::new(initial.image_url);
    let (previewing, set_previewing) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let draft = move || PostDraft {
        title: title.get(),
        excerpt: excerpt.get(),
        content: content.get(),
        tags: tags.get(),
        image_url: image_url.get(),
    };

    let on_cover = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            read_cover(file, image_url, set_error);
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let heading = if editing.is_some() {
        "Edit Blog Post"
    } else {
        "Create New Blog Post"
    };

    let save = {
        let editing = editing.clone();
        move |_| {
            let mut posts = storage.posts.get_untracked();
            let today = Utc::now().date_naive();
            match save_draft(&mut posts, draft(), editing.as_deref(), today) {
                Ok(_) => {
                    storage.set_posts.set(posts);
                    set_error.set(None);
                    on_save.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        }
    };

    // unsaved form rendered the way the blog section will show it
    let preview = move || {
        let d = draft();
        let post = BlogPost {
            id: String::new(),
            title: if d.title.trim().is_empty() {
                "Untitled Post".to_string()
            } else {
                d.title.clone()
            },
            excerpt: d.excerpt.clone(),
            read_time: read_time(&d.content),
            tags: parse_tags(&d.tags),
            image_url: Some(d.image_url.trim().to_string()).filter(|s| !s.is_empty()),
            content: if d.content.trim().is_empty() {
                "No content yet...".to_string()
            } else {
                d.content
            },
            date: Utc::now().date_naive(),
        };
        view! { <PostReader post on_close=move |_| set_previewing.set(false) /> }
    };

    view! {
        <div class="bg-white dark:bg-slate-800 rounded-lg shadow-md">
            <div class="border-b border-slate-200 dark:border-slate-700 p-6 flex justify-between items-center">
                <div>
                    <h2 class="text-2xl font-bold">{heading}</h2>
                    {editing
                        .is_some()
                        .then(|| {
                            view! {
                                <p class="text-sm text-slate-600 dark:text-slate-400 mt-1">
                                    "Editing: "
                                    {move || {
                                        let t = title.get();
                                        if t.is_empty() { "Untitled Post".to_string() } else { t }
                                    }}
                                </p>
                            }
                        })}
                </div>
                <div class="flex gap-3">
                    <button
                        on:click=move |_| set_previewing.update(|p| *p = !*p)
                        class="px-4 py-2 bg-slate-600 text-white rounded-lg hover:bg-slate-700 transition-colors"
                    >
                        {move || if previewing.get() { "Edit" } else { "Preview" }}
                    </button>
                    <button
                        on:click=save
                        class="px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                    >
                        "Save"
                    </button>
                    <button
                        on:click=move |_| on_cancel.run(())
                        class="px-4 py-2 bg-slate-300 dark:bg-slate-600 rounded-lg hover:bg-slate-400 dark:hover:bg-slate-700 transition-colors"
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <div class="mx-6 mt-6 p-3 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg text-red-600 dark:text-red-400 text-sm">
                                {e}
                            </div>
                        }
                    })
            }}
            <div class="p-6">
                <Show when=move || !previewing.get() fallback=preview>
                    <div class="space-y-6">
                        <Field label="Title" value=title />
                        <Field label="Excerpt (optional)" value=excerpt />
                        <Field label="Tags (comma separated)" value=tags />
                        <div>
                            <Field label="Cover image (optional)" value=image_url input_type="url" />
                            <div class="mt-2 flex items-center gap-3">
                                <label class="px-4 py-2 bg-slate-100 dark:bg-slate-700 rounded-lg cursor-pointer hover:bg-slate-200 dark:hover:bg-slate-600 transition-colors text-sm">
                                    "Upload image"
                                    <input
                                        type="file"
                                        accept="image/jpeg,image/png,image/gif,image/webp"
                                        class="hidden"
                                        on:change=on_cover
                                    />
                                </label>
                                <Show when=move || !image_url.with(String::is_empty)>
                                    <button
                                        on:click=move |_| image_url.set(String::new())
                                        class="px-3 py-1 text-sm bg-red-100 dark:bg-red-900/30 text-red-600 dark:text-red-400 rounded-lg hover:bg-red-200 dark:hover:bg-red-900/50 transition-colors"
                                    >
                                        "Remove image"
                                    </button>
                                </Show>
                            </div>
                            <p class="text-xs text-slate-500 dark:text-slate-400 mt-2">
                                "Paste an image URL or upload one from your computer (max 5MB)"
                            </p>
                        </div>
                        <div>
                            <label class="block text-sm font-medium mb-2">"Content (markdown)"</label>
                            <textarea
                                rows="16"
                                prop:value=move || content.get()
                                on:input=move |ev| content.set(event_target_value(&ev))
                                class="w-full px-4 py-3 font-mono border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-700 focus:ring-2 focus:ring-indigo-500"
                            ></textarea>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
