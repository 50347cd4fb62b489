use leptos::{either::Either, prelude::*};

/// Profile picture, falling back to the person's initials when there is no
/// image or it fails to load.
#[component]
pub fn Avatar(src: Option<String>, #[prop(into)] name: String, #[prop(into)] initials: String) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    move || match src.clone().filter(|_| !failed.get()) {
        Some(src) => Either::Left(view! {
            <img
                src=src
                alt=name.clone()
                class="w-24 h-24 rounded-full shadow-2xl ring-4 ring-white/20 object-cover"
                on:error=move |_| set_failed.set(true)
            />
        }),
        None => Either::Right(view! {
            <div
                aria-label=name.clone()
                class="w-24 h-24 rounded-full shadow-2xl ring-4 ring-white/20 flex items-center justify-center text-2xl font-bold bg-gradient-to-br from-purple-400 to-cyan-400 text-white"
            >
                {initials.clone()}
            </div>
        }),
    }
}
