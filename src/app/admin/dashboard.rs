use leptos::prelude::*;

use super::{editor::BlogEditor, manager::BlogManager, AdminView};
use crate::{app::storage::BlogStorage, blog::BlogStats, site::PROFILE};

const NAV: [(&str, AdminView); 4] = [
    ("Dashboard", AdminView::Dashboard),
    ("Create Blog", AdminView::Editor(None)),
    ("Manage Blogs", AdminView::Manager),
    ("Settings", AdminView::Settings),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let storage = expect_context::<BlogStorage>();
    let view_state = RwSignal::new(AdminView::Dashboard);
    let stats = Memo::new(move |_| BlogStats::from_posts(&storage.posts.get()));
    let first_name = PROFILE.name.split_whitespace().next().unwrap_or(PROFILE.name);

    let content = move || match view_state.get() {
        AdminView::Editor(editing) => view! {
            <BlogEditor
                editing
                on_save=move |_| view_state.set(AdminView::Manager)
                on_cancel=move |_| view_state.set(AdminView::Dashboard)
            />
        }
        .into_any(),
        AdminView::Manager => view! {
            <BlogManager
                on_edit=move |id: String| view_state.set(AdminView::Editor(Some(id)))
                on_create=move |_| view_state.set(AdminView::Editor(None))
            />
        }
        .into_any(),
        AdminView::Settings => view! {
            <div class="bg-white dark:bg-slate-800 rounded-lg p-6">
                <h2 class="text-2xl font-bold mb-4">"Settings"</h2>
                <p class="text-slate-600 dark:text-slate-400">"Settings panel coming soon..."</p>
            </div>
        }
        .into_any(),
        AdminView::Dashboard => view! { <Overview stats view_state /> }.into_any(),
    };

    view! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-900">
            <header class="bg-white dark:bg-slate-800 shadow-sm border-b border-slate-200 dark:border-slate-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16">
                    <h1 class="text-2xl font-bold">"Admin Panel"</h1>
                    <span class="text-sm text-slate-600 dark:text-slate-400">
                        {format!("Welcome back, {first_name}!")}
                    </span>
                </div>
            </header>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex flex-col lg:flex-row gap-8">
                <aside class="lg:w-64 flex-shrink-0">
                    <nav class="bg-white dark:bg-slate-800 rounded-lg shadow-md p-4">
                        <ul class="space-y-2">
                            {NAV
                                .into_iter()
                                .map(|(label, target)| {
                                    let is_active = {
                                        let target = target.clone();
                                        move || view_state.get() == target
                                    };
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| view_state.set(target.clone())
                                                class=move || {
                                                    if is_active() {
                                                        "w-full text-left p-3 rounded-lg bg-indigo-600 text-white"
                                                    } else {
                                                        "w-full text-left p-3 rounded-lg text-slate-700 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700"
                                                    }
                                                }
                                            >
                                                {label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                </aside>
                <main class="flex-1">{content}</main>
            </div>
        </div>
    }
}

#[component]
fn Overview(stats: Memo<BlogStats>, view_state: RwSignal<AdminView>) -> impl IntoView {
    let stat_row = move |label: &'static str, color: &'static str, value: Signal<String>| {
        view! {
            <div class="flex justify-between items-center">
                <span class="text-slate-600 dark:text-slate-400">{label}</span>
                <span class=format!("font-semibold {color}")>{move || value.get()}</span>
            </div>
        }
    };
    let stat = move |f: fn(&BlogStats) -> String| Signal::derive(move || stats.with(f));

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            <div class="bg-white dark:bg-slate-800 rounded-lg p-6 shadow-md">
                <h3 class="text-lg font-semibold mb-4">"Quick Actions"</h3>
                <div class="space-y-3">
                    <button
                        on:click=move |_| view_state.set(AdminView::Editor(None))
                        class="w-full p-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                    >
                        "Create New Blog Post"
                    </button>
                    <button
                        on:click=move |_| view_state.set(AdminView::Manager)
                        class="w-full p-3 bg-slate-600 text-white rounded-lg hover:bg-slate-700 transition-colors"
                    >
                        "Manage Blog Posts"
                    </button>
                </div>
            </div>
            <div class="bg-white dark:bg-slate-800 rounded-lg p-6 shadow-md">
                <h3 class="text-lg font-semibold mb-4">"Blog Statistics"</h3>
                <div class="space-y-3">
                    {stat_row("Total Posts", "", stat(|s| s.total_posts.to_string()))}
                    {stat_row("Published", "text-green-600", stat(|s| s.published_posts.to_string()))}
                    {stat_row("Drafts", "text-yellow-600", stat(|s| s.draft_posts.to_string()))}
                    {stat_row("Unique Tags", "text-blue-600", stat(|s| s.total_tags.to_string()))}
                    {stat_row(
                        "Avg. Read Time",
                        "text-purple-600",
                        stat(|s| format!("{} min", s.average_read_time)),
                    )}
                </div>
            </div>
            <div class="bg-white dark:bg-slate-800 rounded-lg p-6 shadow-md">
                <h3 class="text-lg font-semibold mb-4">"Recent Posts"</h3>
                {move || {
                    let recent = stats.with(|s| s.recent_posts.clone());
                    if recent.is_empty() {
                        return view! {
                            <p class="text-center py-8 text-slate-500 dark:text-slate-400">
                                "No blog posts yet"
                            </p>
                        }
                            .into_any();
                    }
                    view! {
                        <div class="space-y-3">
                            {recent
                                .into_iter()
                                .map(|post| {
                                    let id = post.id.clone();
                                    view! {
                                        <div class="flex items-center justify-between p-3 bg-slate-50 dark:bg-slate-700 rounded-lg">
                                            <div class="min-w-0 flex-1">
                                                <p class="text-sm font-medium truncate">{post.title}</p>
                                                <p class="text-xs text-slate-500 dark:text-slate-400">
                                                    {post.date.format("%x").to_string()}
                                                </p>
                                            </div>
                                            <button
                                                on:click=move |_| {
                                                    view_state.set(AdminView::Editor(Some(id.clone())))
                                                }
                                                class="ml-3 text-indigo-600 dark:text-indigo-400 hover:text-indigo-700"
                                            >
                                                "Edit"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
