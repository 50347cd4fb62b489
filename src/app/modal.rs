use leptos::prelude::*;

use crate::profile::{Project, VerificationDetails};

use super::cards::{link_class, GlyphSize, LinkIcon, TechRow};
use super::glass::{blur_style, shadowed_blur_style, ButtonVariant, GlassButton, GlassLink, GlassTag};
use super::tooltip::TooltipAnchor;

/// Overlay and centered panel shared by both modals.
#[component]
fn GlassModal(children: Children, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <div
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black/60 backdrop-blur-sm flex items-center justify-center z-50 p-4 animate-in fade-in duration-300"
        >
            <div
                class=format!(
                    "bg-white/20 backdrop-blur-xl border border-white/30 rounded-2xl shadow-[0_20px_80px_rgba(0,0,0,0.3)] w-full animate-in zoom-in-95 duration-300 {class}",
                )
                style=blur_style(20)
            >
                {children()}
            </div>
        </div>
    }
}

#[component]
fn DismissButton(on_close: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            aria-label="Close"
            class="text-white/70 hover:text-white transition-colors p-1 hover:bg-white/10 rounded-lg ml-4"
            on:click=move |_| on_close.run(())
        >
            "✕"
        </button>
    }
}

#[component]
fn VerificationSection(details: VerificationDetails) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex items-center gap-2">
                <span class="text-green-400" aria-hidden="true">"✓"</span>
                <span class="text-sm font-medium text-white/95">{details.proof.clone()}</span>
            </div>
            <div class="flex items-center gap-2">
                <span class="text-blue-400" aria-hidden="true">"⎇"</span>
                <span class="text-sm text-white/80">{details.commits_label()}</span>
            </div>
            <div class="flex items-center gap-2">
                <span class="text-white/60" aria-hidden="true">"ⓘ"</span>
                <span class="text-sm text-white/80">{details.last_updated_label()}</span>
            </div>
        </div>
    }
}

/// Shows the proof behind a verified project. `project` is `None` while closed.
#[component]
pub fn VerificationModal(
    #[prop(into)] project: Signal<Option<Project>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        project.get().map(|project| {
            view! {
                <GlassModal class="p-6 max-w-md">
                    <div class="flex items-center justify-between mb-4">
                        <h3 class="text-lg font-bold text-white">"Verification Details"</h3>
                        <DismissButton on_close />
                    </div>
                    {project
                        .verification_section()
                        .cloned()
                        .map(|details| view! { <VerificationSection details /> })}
                    <GlassButton on_click=on_close variant=ButtonVariant::Primary class="mt-6 w-full">
                        "Close"
                    </GlassButton>
                </GlassModal>
            }
        })
    }
}

#[component]
pub fn ProjectDetailModal(
    #[prop(into)] project: Signal<Option<Project>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        project.get().map(|project| {
            let links = project.links();
            view! {
                <GlassModal class="p-8 max-w-2xl max-h-[90vh] overflow-y-auto">
                    <div class="flex items-start justify-between mb-6">
                        <div class="flex-1">
                            <h2 class="text-2xl font-bold text-white mb-2">
                                {project.title.clone()}
                            </h2>
                            {project
                                .verified
                                .then(|| {
                                    view! {
                                        <GlassTag class="bg-green-500/30 text-green-100 border-green-400/50">
                                            "✓ Verified Project"
                                        </GlassTag>
                                    }
                                })}
                        </div>
                        <DismissButton on_close />
                    </div>
                    <div class="mb-6">
                        <h3 class="text-lg font-semibold text-white/90 mb-3">"Technologies Used"</h3>
                        <TechRow
                            tech=project.tech.clone()
                            size=GlyphSize::Large
                            anchor=TooltipAnchor::Bottom
                        />
                    </div>
                    <div class="mb-6">
                        <h3 class="text-lg font-semibold text-white/90 mb-3">"Project Overview"</h3>
                        <p class="text-white/80 leading-relaxed">{project.summary.clone()}</p>
                    </div>
                    {project
                        .verification_section()
                        .cloned()
                        .map(|details| {
                            view! {
                                <div
                                    class="mb-6 p-4 bg-white/10 backdrop-blur-md border border-white/20 rounded-xl"
                                    style=shadowed_blur_style(12)
                                >
                                    <h3 class="text-lg font-semibold text-white/90 mb-3">
                                        "Verification Details"
                                    </h3>
                                    <VerificationSection details />
                                </div>
                            }
                        })}
                    <div class="flex flex-wrap gap-3">
                        {links
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <GlassLink
                                        href=link.href
                                        class=format!(
                                            "inline-flex items-center gap-2 px-4 py-2 rounded-lg font-medium {}",
                                            link_class(link.kind),
                                        )
                                    >
                                        <LinkIcon kind=link.kind />
                                        {link.kind.long_label()}
                                    </GlassLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </GlassModal>
            }
        })
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::profile::tests::project;

    fn render(build: impl FnOnce() -> AnyView) -> String {
        let owner = Owner::new();
        owner.with(|| build().to_html())
    }

    fn verified_project() -> Project {
        let mut p = project("Tide", true);
        p.verification_details = Some(VerificationDetails {
            proof: "x".to_string(),
            commits: 5,
            last_updated: "today".to_string(),
        });
        p
    }

    #[test]
    fn test_closed_modals_render_nothing() {
        let html = render(|| {
            view! {
                <VerificationModal project=Signal::stored(None::<Project>) on_close=Callback::new(|_| {}) />
                <ProjectDetailModal project=Signal::stored(None::<Project>) on_close=Callback::new(|_| {}) />
            }
            .into_any()
        });
        assert!(!html.contains("dialog"));
        assert!(!html.contains("Close"));
    }

    #[test]
    fn test_detail_modal_shows_verification() {
        let p = verified_project();
        let html = render(move || {
            view! {
                <ProjectDetailModal project=Signal::stored(Some(p)) on_close=Callback::new(|_| {}) />
            }
            .into_any()
        });
        assert!(html.contains("Tide"));
        assert!(html.contains("Verified Project"));
        assert!(html.contains(">x<"));
        assert!(html.contains("5 commits"));
        assert!(html.contains("Last updated today"));
    }

    #[test]
    fn test_verification_modal_for_unverified_project() {
        let mut p = verified_project();
        p.verified = false;
        let html = render(move || {
            view! {
                <VerificationModal project=Signal::stored(Some(p)) on_close=Callback::new(|_| {}) />
            }
            .into_any()
        });
        assert!(html.contains("dialog"));
        assert!(html.contains("Close"));
        assert!(!html.contains("commits"));
        assert!(!html.contains("Last updated"));
    }
}
