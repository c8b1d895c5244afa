use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::site::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.with_timezone(&Utc))
        .ok();
    let year = built.map(|d| d.year()).unwrap_or_else(|| Utc::now().year());

    view! {
        <footer class="py-8 bg-slate-900 text-slate-400">
            <div class="container mx-auto px-4 md:px-6 flex flex-col md:flex-row items-center justify-between gap-4">
                <p>{format!("© {year} {}. All rights reserved.", PROFILE.name)}</p>
                {built
                    .map(|d| {
                        view! {
                            <p class="text-xs">{format!("Built {}", d.format("%b %e, %Y"))}</p>
                        }
                    })}
                <div class="flex gap-4">
                    <a href=PROFILE.github target="_blank" rel="noopener noreferrer" class="hover:text-white">
                        <i class="devicon-github-plain text-xl" />
                    </a>
                    <a href=PROFILE.linkedin target="_blank" rel="noopener noreferrer" class="hover:text-white">
                        <i class="devicon-linkedin-plain text-xl" />
                    </a>
                    <a href=format!("mailto:{}", PROFILE.email) class="hover:text-white">
                        "✉"
                    </a>
                </div>
            </div>
        </footer>
    }
}
