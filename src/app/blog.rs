use leptos::prelude::*;

use super::{homepage::SectionHeading, storage::BlogStorage};
use crate::blog::{all_tags, find_post, posts_with_tag, render_markdown, sorted_by_date, BlogPost};

#[component]
pub fn BlogSection() -> impl IntoView {
    let storage = expect_context::<BlogStorage>();
    let (selected_tag, set_selected_tag) = signal(None::<String>);
    let (open_post, set_open_post) = signal(None::<String>);

    let tags = Memo::new(move |_| all_tags(&storage.posts.get()));
    let visible = Memo::new(move |_| {
        let posts = sorted_by_date(&storage.posts.get());
        let tag = selected_tag.get();
        posts_with_tag(&posts, tag.as_deref())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });
    let opened = move || {
        open_post
            .get()
            .and_then(|id| storage.posts.with(|posts| find_post(posts, &id).cloned()))
    };

    let tag_button = move |label: String, value: Option<String>| {
        let active = {
            let value = value.clone();
            move || selected_tag.get() == value
        };
        view! {
            <button
                on:click=move |_| set_selected_tag.set(value.clone())
                class=move || {
                    if active() {
                        "px-3 py-1 rounded-full text-sm bg-indigo-600 text-white"
                    } else {
                        "px-3 py-1 rounded-full text-sm bg-slate-200 dark:bg-slate-700 text-slate-700 dark:text-slate-300"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="blog" class="py-20 bg-slate-50 dark:bg-slate-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="Blog"
                    subtitle="Thoughts, tutorials, and insights about software development."
                />
                <Show when=move || !tags.get().is_empty()>
                    <div class="flex flex-wrap justify-center gap-2 mb-12">
                        {tag_button("All".to_string(), None)}
                        {move || {
                            tags.get()
                                .into_iter()
                                .map(|tag| tag_button(format!("#{tag}"), Some(tag)))
                                .collect_view()
                        }}
                    </div>
                </Show>
                {move || match opened() {
                    Some(post) => {
                        view! {
                            <PostReader post on_close=move |_| set_open_post.set(None) />
                        }
                            .into_any()
                    }
                    None => {
                        let posts = visible.get();
                        if posts.is_empty() {
                            view! {
                                <p class="text-center text-slate-600 dark:text-slate-400">
                                    "No blog posts yet. Check back soon!"
                                </p>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                                    {posts
                                        .into_iter()
                                        .map(|post| {
                                            let id = post.id.clone();
                                            view! {
                                                <PostCard
                                                    post
                                                    on_open=move |_| set_open_post.set(Some(id.clone()))
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn PostCard(post: BlogPost, #[prop(into)] on_open: Callback<()>) -> impl IntoView {
    view! {
        <article class="bg-white dark:bg-slate-700 rounded-xl shadow-md overflow-hidden hover:shadow-lg transition-shadow">
            {post
                .image_url
                .clone()
                .map(|src| {
                    view! {
                        <img src=src alt=post.title.clone() class="w-full h-48 object-cover" />
                    }
                })}
            <div class="p-6">
                <div class="flex items-center gap-3 text-sm text-slate-500 dark:text-slate-400 mb-3">
                    <span>{post.date.format("%b %e, %Y").to_string()}</span>
                    <span>"•"</span>
                    <span>{post.read_time.clone()}</span>
                </div>
                <h3 class="text-xl font-semibold mb-3">{post.title.clone()}</h3>
                <p class="text-slate-700 dark:text-slate-300 mb-4 line-clamp-3">
                    {post.excerpt.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {post
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 bg-indigo-100 dark:bg-indigo-900 text-indigo-800 dark:text-indigo-200 rounded-full text-xs">
                                    {format!("#{tag}")}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    on:click=move |_| on_open.run(())
                    class="text-indigo-600 dark:text-indigo-400 font-medium hover:underline"
                >
                    "Read more →"
                </button>
            </div>
        </article>
    }
}

#[component]
pub fn PostReader(post: BlogPost, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let html = render_markdown(&post.content);
    view! {
        <article class="max-w-3xl mx-auto bg-white dark:bg-slate-700 rounded-xl shadow-md p-8">
            <button
                on:click=move |_| on_close.run(())
                class="mb-6 text-indigo-600 dark:text-indigo-400 hover:underline"
            >
                "← All posts"
            </button>
            <h1 class="text-3xl font-bold mb-2">{post.title.clone()}</h1>
            <div class="text-sm text-slate-500 dark:text-slate-400 mb-6">
                {format!("{} • {}", post.date.format("%b %e, %Y"), post.read_time)}
            </div>
            {post
                .image_url
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=post.title.clone()
                            class="w-full h-64 object-cover rounded-lg mb-6"
                        />
                    }
                })}
            <div class="prose prose-slate dark:prose-invert max-w-none" inner_html=html></div>
        </article>
    }
}
