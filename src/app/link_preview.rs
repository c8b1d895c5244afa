use std::time::Duration;

use leptos::{either::Either, prelude::*};

use crate::preview::{Delay, PreviewResolver, NO_PREVIEW_IMAGE};

pub type SiteResolver = PreviewResolver<SiteDelay>;

/// Browser timer on the client; a no-op on the server, where previews never resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteDelay;

impl Delay for SiteDelay {
    #[cfg(feature = "hydrate")]
    async fn wait(&self, duration: Duration) {
        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        let _ = rx.await;
    }

    #[cfg(not(feature = "hydrate"))]
    async fn wait(&self, _duration: Duration) {}
}

#[component]
pub fn LinkPreview(
    #[prop(into)] url: String,
    /// Fill the parent and drop the domain badge.
    #[prop(optional)]
    full_size: bool,
) -> impl IntoView {
    let resolver = expect_context::<SiteResolver>();
    let container = if full_size {
        "w-full h-full rounded-none"
    } else {
        "h-40 w-40 rounded-lg"
    };

    let preview = LocalResource::new({
        let resolver = resolver.clone();
        let url = url.clone();
        move || {
            let resolver = resolver.clone();
            let url = url.clone();
            async move { resolver.resolve(&url).await }
        }
    });

    // fallback cursor for this card only
    let (attempt, set_attempt) = signal(0usize);
    let (fallback_image, set_fallback_image) = signal(None::<String>);
    let (exhausted, set_exhausted) = signal(false);
    let (hide_favicon, set_hide_favicon) = signal(false);

    let on_image_error = Callback::new({
        let url = url.clone();
        move |_: ()| {
            if exhausted.get_untracked() {
                return;
            }
            let n = attempt.get_untracked();
            match resolver.next_fallback_image(&url, n) {
                Some(next) => {
                    log::debug!("preview image {n} failed for {url}, trying next provider");
                    set_attempt.set(n + 1);
                    set_fallback_image.set(Some(next));
                }
                None => {
                    log::warn!("no preview image could be loaded for {url}");
                    set_exhausted.set(true);
                }
            }
        }
    });

    let loading = move || {
        view! {
            <div class=format!(
                "{container} bg-slate-200 dark:bg-slate-700 flex items-center justify-center",
            )>
                <div class="animate-spin rounded-full h-8 w-8 border-t-2 border-b-2 border-indigo-600"></div>
            </div>
        }
    };

    view! {
        <Suspense fallback=loading>
            {move || {
                let url = url.clone();
                Suspend::new(async move {
                    match preview.await {
                        Ok(record) => {
                            let primary = record.image.clone();
                            let src = move || {
                                if exhausted.get() {
                                    NO_PREVIEW_IMAGE.to_string()
                                } else {
                                    fallback_image.get().unwrap_or_else(|| primary.clone())
                                }
                            };
                            Either::Left(
                                view! {
                                    <div class=format!("{container} overflow-hidden relative group")>
                                        <img
                                            src=src
                                            alt=record.title.clone()
                                            class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-110"
                                            on:error=move |_| on_image_error.run(())
                                        />
                                        {(!full_size)
                                            .then(|| {
                                                view! {
                                                    <div class="absolute bottom-0 left-0 right-0 bg-black/70 p-2 flex items-center gap-2">
                                                        {record
                                                            .favicon
                                                            .clone()
                                                            .map(|favicon| {
                                                                view! {
                                                                    <img
                                                                        src=favicon
                                                                        alt="Site icon"
                                                                        class="w-4 h-4"
                                                                        class:hidden=move || hide_favicon.get()
                                                                        on:error=move |_| set_hide_favicon.set(true)
                                                                    />
                                                                }
                                                            })}
                                                        <p class="text-white text-xs font-medium truncate">
                                                            {record.domain.clone()}
                                                        </p>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                },
                            )
                        }
                        Err(err) => {
                            log::error!("{err}");
                            Either::Right(view! { <PreviewUnavailable url container /> })
                        }
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn PreviewUnavailable(url: String, container: &'static str) -> impl IntoView {
    let label = url::Url::parse(&url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.clone());
    view! {
        <div class=format!(
            "{container} bg-slate-200 dark:bg-slate-700 flex flex-col items-center justify-center",
        )>
            <i class="extra-globe text-2xl text-slate-400 dark:text-slate-500 mb-2" />
            <div class="text-xs text-slate-600 dark:text-slate-300 truncate px-2 text-center">
                {label}
            </div>
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                class="mt-2 flex items-center gap-1 text-xs text-indigo-600 dark:text-indigo-400 hover:underline"
            >
                "Visit"
            </a>
        </div>
    }
}
