use leptos::prelude::*;

use super::storage::ThemeState;
use crate::{site::PROFILE, theme::Theme};

const SECTIONS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<ThemeState>();
    let (menu_open, set_menu_open) = signal(false);

    let theme_button = move || {
        view! {
            <button
                on:click=move |_| theme.toggle()
                class="p-2 rounded-full text-slate-700 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                aria-label="Toggle theme"
            >
                {move || match theme.theme() {
                    Theme::Dark => "☀",
                    Theme::Light => "☾",
                }}
            </button>
        }
    };

    view! {
        <header class="fixed w-full z-50 bg-white/90 dark:bg-slate-900/90 backdrop-blur-sm shadow-md">
            <div class="container mx-auto px-4 md:px-6 py-4 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold text-indigo-600 dark:text-indigo-400">
                    {PROFILE.name}
                </a>
                <nav class="hidden md:flex items-center gap-8">
                    {SECTIONS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-slate-700 dark:text-slate-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    {theme_button()}
                </nav>
                <div class="flex md:hidden items-center gap-2">
                    {theme_button()}
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="p-2 text-slate-700 dark:text-slate-300"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden bg-white dark:bg-slate-900 shadow-lg">
                    <div class="flex flex-col px-4 py-2">
                        {SECTIONS
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        href=*href
                                        on:click=move |_| set_menu_open.set(false)
                                        class="py-3 text-slate-700 dark:text-slate-300 hover:text-indigo-600 dark:hover:text-indigo-400"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </nav>
            </Show>
        </header>
    }
}
