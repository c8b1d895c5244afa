use leptos::prelude::*;

use crate::{
    app::storage::BlogStorage,
    blog::{delete_post, search_posts, sorted_tags, BlogPost},
};

#[component]
pub fn BlogManager(
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_create: Callback<()>,
) -> impl IntoView {
    let storage = expect_context::<BlogStorage>();
    let search = RwSignal::new(String::new());
    let selected_tag = RwSignal::new(None::<String>);

    let tags = Memo::new(move |_| storage.posts.with(|posts| sorted_tags(posts)));
    let visible = Memo::new(move |_| {
        let term = search.get();
        let tag = selected_tag.get();
        storage.posts.with(|posts| {
            search_posts(posts, &term, tag.as_deref())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let remove = move |post: &BlogPost| {
        let prompt = format!("Delete \"{}\"? This cannot be undone.", post.title);
        if !window().confirm_with_message(&prompt).unwrap_or(false) {
            return;
        }
        let mut posts = storage.posts.get_untracked();
        if delete_post(&mut posts, &post.id) {
            storage.set_posts.set(posts);
        } else {
            log::warn!("tried to delete unknown post {}", post.id);
        }
    };

    view! {
        <div class="bg-white dark:bg-slate-800 rounded-lg shadow-md">
            <div class="border-b border-slate-200 dark:border-slate-700 p-6 flex justify-between items-center">
                <div>
                    <h2 class="text-2xl font-bold">"Manage Blog Posts"</h2>
                    <p class="text-sm text-slate-600 dark:text-slate-400 mt-1">
                        {move || format!("{} total posts", storage.posts.with(Vec::len))}
                    </p>
                </div>
                <button
                    on:click=move |_| on_create.run(())
                    class="px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                >
                    "New Post"
                </button>
            </div>
            <div class="p-6 border-b border-slate-200 dark:border-slate-700 flex flex-col md:flex-row gap-4">
                <input
                    type="search"
                    placeholder="Search posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="flex-1 px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-700 focus:ring-2 focus:ring-indigo-500"
                />
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        selected_tag.set(Some(value).filter(|v| !v.is_empty()));
                    }
                    class="px-4 py-2 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-700"
                >
                    <option value="">"All Tags"</option>
                    {move || {
                        tags.get()
                            .into_iter()
                            .map(|tag| {
                                let selected = selected_tag.with(|s| s.as_deref() == Some(tag.as_str()));
                                view! {
                                    <option value=tag.clone() selected=selected>
                                        {tag.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="p-6">
                {move || {
                    let posts = visible.get();
                    if posts.is_empty() {
                        let filtering = !search.with(String::is_empty) || selected_tag.with(Option::is_some);
                        let text = if filtering {
                            "No posts match your filters."
                        } else {
                            "No blog posts yet. Create your first one!"
                        };
                        return view! {
                            <p class="text-center py-12 text-slate-500 dark:text-slate-400">{text}</p>
                        }
                            .into_any();
                    }
                    view! {
                        <ul class="divide-y divide-slate-200 dark:divide-slate-700">
                            {posts
                                .into_iter()
                                .map(|post| {
                                    let id = post.id.clone();
                                    let target = post.clone();
                                    view! {
                                        <li class="py-4 flex items-start justify-between gap-4">
                                            <div class="min-w-0 flex-1">
                                                <h3 class="font-semibold truncate">{post.title.clone()}</h3>
                                                <p class="text-sm text-slate-600 dark:text-slate-400 line-clamp-2">
                                                    {post.excerpt.clone()}
                                                </p>
                                                <div class="mt-2 flex flex-wrap gap-2 text-xs text-slate-500 dark:text-slate-400">
                                                    <span>{post.date.format("%b %e, %Y").to_string()}</span>
                                                    <span>{post.read_time.clone()}</span>
                                                    {post
                                                        .tags
                                                        .iter()
                                                        .map(|tag| {
                                                            view! {
                                                                <span class="px-2 py-0.5 bg-indigo-100 dark:bg-indigo-900/30 text-indigo-700 dark:text-indigo-300 rounded-full">
                                                                    {tag.clone()}
                                                                </span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            </div>
                                            <div class="flex gap-2 flex-shrink-0">
                                                <button
                                                    on:click=move |_| on_edit.run(id.clone())
                                                    class="px-3 py-1 text-sm bg-slate-600 text-white rounded-lg hover:bg-slate-700"
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    on:click=move |_| remove(&target)
                                                    class="px-3 py-1 text-sm bg-red-600 text-white rounded-lg hover:bg-red-700"
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
