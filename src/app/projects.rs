use leptos::{either::EitherOf3, prelude::*};

use super::{homepage::SectionHeading, link_preview::LinkPreview};
use crate::site::{all_technologies, filter_projects, projects, Backdrop, Project};

#[component]
pub fn Projects() -> impl IntoView {
    let projects = StoredValue::new(projects());
    let technologies = projects.with_value(|p| all_technologies(p));
    let (selected, set_selected) = signal(None::<&'static str>);

    let filter_button = move |label: &'static str, value: Option<&'static str>| {
        view! {
            <button
                on:click=move |_| set_selected.set(value)
                class=move || {
                    if selected.get() == value {
                        "px-4 py-2 rounded-full text-sm bg-indigo-600 text-white"
                    } else {
                        "px-4 py-2 rounded-full text-sm bg-slate-200 dark:bg-slate-700 text-slate-700 dark:text-slate-300 hover:bg-slate-300 dark:hover:bg-slate-600"
                    }
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="projects" class="py-20">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="My Projects"
                    subtitle="Here are some of my recent projects. Each one represents a unique challenge and learning experience."
                />
                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {filter_button("All", None)}
                    {technologies
                        .into_iter()
                        .map(|tech| filter_button(tech, Some(tech)))
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    {move || {
                        projects
                            .with_value(|p| {
                                filter_projects(p, selected.get())
                                    .into_iter()
                                    .cloned()
                                    .collect::<Vec<_>>()
                            })
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let backdrop = match project.backdrop() {
        Backdrop::LivePreview(url) => EitherOf3::A(view! { <LinkPreview url full_size=true /> }),
        Backdrop::Image(src) => EitherOf3::B(view! {
            <img
                src=src
                alt=project.title
                class="w-full h-full object-cover object-center rounded-lg"
            />
        }),
        Backdrop::Gradient => EitherOf3::C(view! {
            <div class="w-full h-full bg-gradient-to-br from-violet-500 via-purple-500 to-blue-500 rounded-lg"></div>
        }),
    };
    let (badges, hidden) = project.visible_technologies();
    let badges = badges
        .iter()
        .map(|tech| {
            view! {
                <span class="px-2 py-0.5 text-xs font-medium bg-white/20 text-white rounded-full backdrop-blur-sm">
                    {*tech}
                </span>
            }
        })
        .collect_view();
    let more = (hidden > 0).then(|| {
        view! {
            <span class="px-2 py-0.5 text-xs font-medium bg-white/20 text-white rounded-full backdrop-blur-sm">
                {format!("+{hidden}")}
            </span>
        }
    });

    view! {
        <div class="relative h-[30rem] w-full rounded-lg overflow-hidden shadow-xl group">
            <div class="absolute inset-0">{backdrop}</div>
            // keeps text readable over screenshots
            <div class="absolute inset-0 bg-black/30"></div>
            <div class="relative z-10 flex flex-col h-full p-4">
                <h3 class="font-bold text-base text-slate-100 pb-2">{project.title}</h3>
                <span class="text-slate-300 text-sm line-clamp-3 mb-4">{project.description}</span>
                <div class="flex flex-wrap gap-1.5 mb-4">{badges} {more}</div>
                <div class="flex gap-3 mt-auto">
                    {project
                        .github_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 text-white hover:text-indigo-200 transition-colors rounded-full bg-white/10 backdrop-blur-sm"
                                    aria-label=format!("GitHub repository for {}", project.title)
                                >
                                    <i class="devicon-github-plain" />
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 text-white hover:text-indigo-200 transition-colors rounded-full bg-white/10 backdrop-blur-sm"
                                    aria-label=format!("Live demo for {}", project.title)
                                >
                                    <i class="extra-external-link" />
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
