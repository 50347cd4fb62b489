use leptos::{ev::MouseEvent, prelude::*};

const TEXT_SHADOW: &str = "text-shadow: 0 1px 2px rgba(0,0,0,0.5)";

pub fn blur_style(px: u8) -> String {
    format!("-webkit-backdrop-filter: blur({px}px); backdrop-filter: blur({px}px)")
}

pub fn shadowed_blur_style(px: u8) -> String {
    format!("{}; {TEXT_SHADOW}", blur_style(px))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// The outer card holding the whole page.
    #[default]
    Shell,
    /// Translucent section behind the skill tags.
    Skills,
    /// More opaque section behind the project gallery.
    Projects,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Shell => {
                "bg-white/15 backdrop-blur-xl border border-white/20 rounded-2xl shadow-[0_8px_32px_rgba(0,0,0,0.12)]"
            }
            Self::Skills => {
                "bg-white/10 backdrop-blur-lg border border-white/15 rounded-2xl shadow-[0_6px_24px_rgba(0,0,0,0.08)] hover:shadow-[0_8px_32px_rgba(0,0,0,0.12)] hover:bg-white/15 transition-all duration-300 ease-out"
            }
            Self::Projects => {
                "bg-white/20 backdrop-blur-2xl border border-white/25 rounded-2xl shadow-[0_10px_40px_rgba(0,0,0,0.15)] hover:shadow-[0_16px_48px_rgba(0,0,0,0.2)] hover:bg-white/25 transition-all duration-300 ease-out"
            }
        }
    }

    fn blur(&self) -> u8 {
        match self {
            Self::Shell => 20,
            Self::Skills => 16,
            Self::Projects => 24,
        }
    }
}

#[component]
pub fn GlassCard(
    children: Children,
    #[prop(optional)] variant: CardVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class=format!("{} {class}", variant.class())
            style=blur_style(variant.blur())
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn GlassTag(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span
            class=format!(
                "inline-flex items-center gap-2 px-3 py-2 rounded-full text-sm font-medium backdrop-blur-md border shadow-sm transition-all duration-200 {class}",
            )
            style=shadowed_blur_style(12)
        >
            {children()}
        </span>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Default => {
                "bg-white/15 border-white/25 text-white/95 hover:bg-white/25 hover:scale-105"
            }
            Self::Primary => "bg-blue-500/30 border-blue-400/50 text-blue-100 hover:bg-blue-500/40",
        }
    }
}

#[component]
pub fn GlassButton(
    children: Children,
    on_click: Callback<()>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=format!(
                "px-4 py-2 rounded-xl border backdrop-blur-md shadow font-medium transition-all duration-200 ease-in-out cursor-pointer {} {class}",
                variant.class(),
            )
            style=shadowed_blur_style(12)
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

#[component]
pub fn GlassInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] label: String,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <input
            type="text"
            aria-label=label
            readonly=readonly
            prop:value=value
            class="w-full px-4 py-2 rounded-lg text-sm bg-white/20 backdrop-blur-md border border-white/20 text-white/90 placeholder-white/50 transition-all duration-200 ease-in-out focus:outline-none focus:ring-2 focus:ring-blue-500/50 hover:bg-white/25"
            style=blur_style(12)
        />
    }
}

/// An outbound link opened in a new browsing context. With `contained` set
/// the click does not reach enclosing clickable elements.
#[component]
pub fn GlassLink(
    children: Children,
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] contained: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            class=format!("backdrop-blur-md border transition-all duration-200 hover:scale-105 {class}")
            style=shadowed_blur_style(8)
            on:click=move |ev: MouseEvent| {
                if contained {
                    ev.stop_propagation();
                }
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </a>
    }
}
