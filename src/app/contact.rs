use std::time::Duration;

use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::{
    contact::{ContactMessage, FormStatus, StatusBoard},
    site::PROFILE,
};

const STATUS_RESET: Duration = Duration::from_secs(3);

#[component]
pub fn Contact() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let board = RwSignal::new(StatusBoard::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let status = match msg.mailto_href(PROFILE.email) {
            Ok(href) => match location().set_href(&href) {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    FormStatus::Sent
                }
                Err(e) => {
                    log::error!("couldn't open mail client: {e:?}");
                    FormStatus::Error("Couldn't open your mail client".to_string())
                }
            },
            Err(e) => FormStatus::Error(e.to_string()),
        };
        let mut ticket = 0;
        board.update(|b| ticket = b.post(status));
        set_timeout(move || board.update(|b| b.expire(ticket)), STATUS_RESET);
    };

    let links = [
        ("Email", format!("mailto:{}", PROFILE.email), PROFILE.email),
        ("GitHub", PROFILE.github.to_string(), PROFILE.github),
        ("LinkedIn", PROFILE.linkedin.to_string(), PROFILE.linkedin),
    ];

    view! {
        <section id="contact" class="py-20">
            <div class="container mx-auto px-4 md:px-6">
                <SectionHeading
                    title="Get In Touch"
                    subtitle="Have a project in mind or just want to chat? Feel free to reach out!"
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div>
                        <h3 class="text-2xl font-semibold mb-6">"Contact Information"</h3>
                        <div class="space-y-6">
                            {links
                                .into_iter()
                                .map(|(label, href, text)| {
                                    view! {
                                        <div>
                                            <h4 class="text-lg font-medium mb-1">{label}</h4>
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="text-slate-700 dark:text-slate-300 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                            >
                                                {text}
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <form class="space-y-6" on:submit=on_submit>
                        <Field label="Name" value=name />
                        <Field label="Email" value=email input_type="email" />
                        <div>
                            <label class="block text-sm font-medium mb-2">"Message"</label>
                            <textarea
                                rows="5"
                                prop:value=move || message.get()
                                on:input=move |ev| message.set(event_target_value(&ev))
                                class="w-full px-4 py-3 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-700 focus:ring-2 focus:ring-indigo-500"
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            class="w-full py-3 px-4 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors font-medium"
                        >
                            "Send Message"
                        </button>
                        {move || match board.with(|b| b.status().clone()) {
                            FormStatus::Idle => None,
                            FormStatus::Sent => {
                                Some(
                                    view! {
                                        <p class="text-green-600 dark:text-green-400">
                                            "Your mail client should open with the message ready to send."
                                        </p>
                                    }
                                        .into_any(),
                                )
                            }
                            FormStatus::Error(text) => {
                                Some(
                                    view! { <p class="text-red-600 dark:text-red-400">{text}</p> }
                                        .into_any(),
                                )
                            }
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Field(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium mb-2">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full px-4 py-3 border border-slate-300 dark:border-slate-600 rounded-lg bg-white dark:bg-slate-700 focus:ring-2 focus:ring-indigo-500"
            />
        </div>
    }
}
