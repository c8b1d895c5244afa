mod dashboard;
mod editor;
mod manager;

use leptos::prelude::*;
use leptos_meta::Title;

use super::{contact::Field, storage::AuthState};
use crate::auth::{AdminConfig, Credentials};
use dashboard::AdminDashboard;

/// Which admin screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Dashboard,
    /// Create when `None`, otherwise edit the post with this id.
    Editor(Option<String>),
    Manager,
    Settings,
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();

    view! {
        <Title text="Admin" />
        <Show when=move || auth.signed_in.get() fallback=move || view! { <LoginForm /> }>
            <AdminDashboard />
            <button
                on:click=move |_| auth.sign_out.run(())
                class="fixed bottom-4 right-4 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors shadow-lg"
            >
                "Logout"
            </button>
        </Show>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        match AdminConfig::default().verify(&credentials) {
            Ok(()) => {
                set_error.set(None);
                auth.set_signed_in.set(true);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white dark:bg-slate-800 rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <h1 class="text-2xl font-bold">"Admin Access"</h1>
                    <p class="text-slate-600 dark:text-slate-400 mt-2">
                        "Please sign in to access the admin panel"
                    </p>
                </div>
                <form on:submit=on_submit class="space-y-6">
                    <Field label="Username" value=username />
                    <Field label="Password" value=password input_type="password" />
                    {move || {
                        error
                            .get()
                            .map(|e| {
                                view! {
                                    <div class="p-3 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg">
                                        <p class="text-red-600 dark:text-red-400 text-sm">{e}</p>
                                    </div>
                                }
                            })
                    }}
                    <button
                        type="submit"
                        class="w-full py-3 px-4 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors font-medium"
                    >
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
