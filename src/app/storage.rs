use leptos::prelude::*;
use codee::string::{FromToStringCodec, JsonSerdeWasmCodec};
use leptos_use::{
    storage::{use_local_storage_with_options, UseStorageOptions},
    use_preferred_dark,
};

use crate::{
    blog::BlogPost,
    theme::{Theme, ThemePreference},
};

/// Blog posts written by the admin panel.
#[derive(Clone, Copy)]
pub struct BlogStorage {
    pub posts: Signal<Vec<BlogPost>>,
    pub set_posts: WriteSignal<Vec<BlogPost>>,
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    preference: Signal<ThemePreference>,
    set_preference: WriteSignal<ThemePreference>,
    prefers_dark: Signal<bool>,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        self.preference.get().resolve(self.prefers_dark.get())
    }

    pub fn toggle(&self) {
        let next = self
            .preference
            .get_untracked()
            .toggled(self.prefers_dark.get_untracked());
        self.set_preference.set(next);
    }
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub signed_in: Signal<bool>,
    pub set_signed_in: WriteSignal<bool>,
    /// Drops the stored flag entirely.
    pub sign_out: Callback<()>,
}

/// Binds every persisted piece of site state and puts it in context.
/// Stored values are read after hydration, so the first client render
/// matches the server's default-valued HTML.
pub fn provide_site_storage() {
    let (posts, set_posts, _) = use_local_storage_with_options::<Vec<BlogPost>, JsonSerdeWasmCodec>(
        crate::blog::STORAGE_KEY,
        after_hydration(),
    );
    let (preference, set_preference, _) =
        use_local_storage_with_options::<ThemePreference, FromToStringCodec>(
            crate::theme::STORAGE_KEY,
            after_hydration(),
        );
    let (signed_in, set_signed_in, remove_signed_in) =
        use_local_storage_with_options::<bool, FromToStringCodec>(
            crate::auth::STORAGE_KEY,
            after_hydration(),
        );

    provide_context(BlogStorage { posts, set_posts });
    provide_context(ThemeState {
        preference,
        set_preference,
        prefers_dark: use_preferred_dark(),
    });
    provide_context(AuthState {
        signed_in,
        set_signed_in,
        sign_out: Callback::new(move |_| remove_signed_in()),
    });
}

fn after_hydration<T: Default + Send + Sync + 'static, E, D>() -> UseStorageOptions<T, E, D> {
    UseStorageOptions::default().delay_during_hydration(true)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    fn with_storage(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(|| {
            provide_site_storage();
            f();
        });
    }

    #[test]
    fn test_server_render_uses_defaults() {
        with_storage(|| {
            let blog = expect_context::<BlogStorage>();
            let auth = expect_context::<AuthState>();
            let theme = expect_context::<ThemeState>();
            assert!(blog.posts.get_untracked().is_empty());
            assert!(!auth.signed_in.get_untracked());
            assert_eq!(theme.preference.get_untracked(), ThemePreference::System);
        });
    }

    #[test]
    fn test_sign_out_clears_flag() {
        with_storage(|| {
            let auth = expect_context::<AuthState>();
            auth.set_signed_in.set(true);
            assert!(auth.signed_in.get_untracked());
            auth.sign_out.run(());
            assert!(!auth.signed_in.get_untracked());
        });
    }
}
