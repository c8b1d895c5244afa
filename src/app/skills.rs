use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::site::{skills, FALLBACK_SKILL_ICON};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-slate-50 dark:bg-slate-800">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="My Skills"
                    subtitle="A collection of technologies and tools I've worked with throughout my journey."
                />
                <div class="max-w-6xl mx-auto grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-5 gap-6">
                    {skills()
                        .into_iter()
                        .map(|skill| {
                            let (failed, set_failed) = signal(false);
                            let icon = skill.icon;
                            view! {
                                <div
                                    class="group flex flex-col items-center p-6 bg-white dark:bg-slate-700 rounded-xl shadow-md hover:shadow-lg transition-all duration-300 transform hover:-translate-y-2"
                                    title=skill.category
                                >
                                    <div class="w-16 h-16 mb-4 flex items-center justify-center">
                                        <img
                                            src=move || {
                                                if failed.get() {
                                                    FALLBACK_SKILL_ICON.to_string()
                                                } else {
                                                    icon.clone()
                                                }
                                            }
                                            alt=skill.name
                                            class="w-full h-full object-contain group-hover:scale-110 transition-transform duration-300"
                                            on:error=move |_| set_failed.set(true)
                                        />
                                    </div>
                                    <span class="text-sm font-medium text-slate-700 dark:text-slate-300 text-center">
                                        {skill.name}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
