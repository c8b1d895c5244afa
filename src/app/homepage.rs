use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    blog::BlogSection, contact::Contact, footer::Footer, navbar::Navbar, projects::Projects,
    skills::Skills,
};
use crate::site::{ABOUT_PARAGRAPHS, FOCUS_AREAS, PROFILE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.role />
        <Navbar />
        <main>
            <Hero />
            <About />
            <Skills />
            <Projects />
            <BlogSection />
            <Contact />
        </main>
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    // letters fade in one after another
    let letters = PROFILE
        .name
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let delay = format!("animation-delay: {:.2}s", 0.1 + i as f64 * 0.05);
            view! {
                <span class="inline-block opacity-0 fadeInUp whitespace-pre" style=delay>
                    {c.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center">
            <div class="container mx-auto px-4 md:px-6 text-center">
                <p class="text-lg md:text-xl text-indigo-600 dark:text-indigo-400 mb-4">
                    "Hello, I am"
                </p>
                <h1 class="text-5xl md:text-7xl font-bold mb-6">{letters}</h1>
                <p class="text-xl md:text-2xl text-slate-700 dark:text-slate-300 max-w-2xl mx-auto mb-10">
                    {PROFILE.tagline}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-3 border-2 border-indigo-600 text-indigo-600 dark:text-indigo-400 rounded-lg hover:bg-indigo-50 dark:hover:bg-slate-800 transition-colors"
                    >
                        "Contact Me"
                    </a>
                </div>
            </div>
            <a href="#about" aria-label="Scroll down" class="absolute bottom-10 animate-bounce">
                "⌄"
            </a>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading title="About Me" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <div class="space-y-4 text-lg text-slate-700 dark:text-slate-300">
                        {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="space-y-6">
                        {FOCUS_AREAS
                            .iter()
                            .map(|(title, blurb)| {
                                view! {
                                    <div class="p-6 bg-slate-50 dark:bg-slate-800 rounded-xl shadow-md">
                                        <h3 class="text-xl font-semibold mb-2">{*title}</h3>
                                        <p class="text-slate-700 dark:text-slate-300">{*blurb}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                {title}
            </h2>
            <div class="h-0.5 w-16 bg-indigo-600 dark:bg-indigo-400 mx-auto mb-6"></div>
            {subtitle
                .map(|s| view! { <p class="text-lg text-slate-700 dark:text-slate-300">{s}</p> })}
        </div>
    }
}
