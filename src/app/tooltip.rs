use leptos::prelude::*;

use crate::state::{Hover, PointerEvent};

use super::glass::blur_style;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TooltipAnchor {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipAnchor {
    fn position_class(&self) -> &'static str {
        match self {
            Self::Top => "bottom-full left-1/2 -translate-x-1/2 mb-3",
            Self::Bottom => "top-full left-1/2 -translate-x-1/2 mt-3",
            Self::Left => "right-full top-1/2 -translate-y-1/2 mr-3",
            Self::Right => "left-full top-1/2 -translate-y-1/2 ml-3",
        }
    }

    fn arrow_class(&self) -> &'static str {
        match self {
            Self::Top => {
                "top-full left-1/2 -translate-x-1/2 border-l-[6px] border-r-[6px] border-t-[6px] border-transparent border-t-gray-900/95"
            }
            Self::Bottom => {
                "bottom-full left-1/2 -translate-x-1/2 border-l-[6px] border-r-[6px] border-b-[6px] border-transparent border-b-gray-900/95"
            }
            Self::Left => {
                "left-full top-1/2 -translate-y-1/2 border-t-[6px] border-b-[6px] border-l-[6px] border-transparent border-l-gray-900/95"
            }
            Self::Right => {
                "right-full top-1/2 -translate-y-1/2 border-t-[6px] border-b-[6px] border-r-[6px] border-transparent border-r-gray-900/95"
            }
        }
    }
}

#[component]
pub fn Tooltip(
    children: Children,
    #[prop(into)] content: String,
    #[prop(optional)] anchor: TooltipAnchor,
) -> impl IntoView {
    let (hover, set_hover) = signal(Hover::default());
    let on_pointer = move |event: PointerEvent| set_hover.update(|h| *h = h.on(event));

    view! {
        <div class="relative inline-block">
            <div
                class="cursor-help"
                on:mouseenter=move |_| on_pointer(PointerEvent::Enter)
                on:mouseleave=move |_| on_pointer(PointerEvent::Leave)
            >
                {children()}
            </div>
            {move || {
                hover
                    .get()
                    .visible
                    .then(|| {
                        view! {
                            <div
                                role="tooltip"
                                class=format!(
                                    "absolute z-50 px-4 py-3 max-w-xs w-max break-words text-sm text-white rounded-xl bg-gray-900/95 backdrop-blur-xl border border-white/20 shadow-[0_10px_40px_rgba(0,0,0,0.3)] {}",
                                    anchor.position_class(),
                                )
                                style=blur_style(20)
                            >
                                <div class="whitespace-pre-line leading-relaxed">
                                    {content.clone()}
                                </div>
                                <div class=format!(
                                    "absolute w-0 h-0 {}",
                                    anchor.arrow_class(),
                                )></div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_places_panel_and_arrow_on_same_side() {
        let cases = [
            (TooltipAnchor::Top, "bottom-full", "top-full", "border-t-gray-900/95"),
            (TooltipAnchor::Bottom, "top-full", "bottom-full", "border-b-gray-900/95"),
            (TooltipAnchor::Left, "right-full", "left-full", "border-l-gray-900/95"),
            (TooltipAnchor::Right, "left-full", "right-full", "border-r-gray-900/95"),
        ];
        for (anchor, panel, arrow, arrow_color) in cases {
            assert!(anchor.position_class().starts_with(panel), "{anchor:?}");
            assert!(anchor.arrow_class().starts_with(arrow), "{anchor:?}");
            assert!(anchor.arrow_class().ends_with(arrow_color), "{anchor:?}");
        }
        assert_eq!(TooltipAnchor::default(), TooltipAnchor::Top);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use super::*;

    #[test]
    fn test_hidden_until_hovered() {
        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <Tooltip content="Rust 1.80" anchor=TooltipAnchor::Bottom>
                    <span>"trigger"</span>
                </Tooltip>
            }
            .to_html()
        });
        assert!(html.contains("trigger"));
        assert!(!html.contains("role=\"tooltip\""));
        assert!(!html.contains("Rust 1.80"));
    }
}
