use leptos::{ev, prelude::*};
use leptos_use::{use_clipboard, use_event_listener, use_window, UseClipboardReturn};

use crate::profile::{DeveloperProfile, SocialLinks};
use crate::state::{CardTarget, Overlay, OverlayKind};

use super::avatar::Avatar;
use super::cards::{ProjectCard, SkillCard};
use super::glass::{CardVariant, GlassButton, GlassCard, GlassInput, GlassLink};
use super::modal::{ProjectDetailModal, VerificationModal};

const FADE_IN: &str = "opacity-0 animate-[fadeIn_0.5s_ease-out_forwards]";

fn delay(secs: f32) -> String {
    format!("animation-delay: {secs:.2}s")
}

fn stagger(base: f32, step: f32, index: usize) -> String {
    delay(base + step * index as f32)
}

/// The whole portfolio: header, skills, project gallery, footer, and the two
/// modals. Owns the single active overlay for the page.
#[component]
pub fn DeveloperCard(profile: DeveloperProfile) -> impl IntoView {
    let initials = profile.initials();
    let DeveloperProfile {
        name,
        title,
        location,
        tagline,
        bio,
        avatar,
        links,
        skills,
        projects,
    } = profile;

    let (overlay, set_overlay) = signal(Overlay::default());
    let projects = StoredValue::new(projects);

    let target_of = move |kind: OverlayKind| {
        Signal::derive(move || {
            overlay
                .get()
                .target(kind)
                .and_then(|i| projects.with_value(|p| p.get(i).cloned()))
        })
    };
    let close = move |kind: OverlayKind| {
        Callback::new(move |_: ()| set_overlay.update(|o| *o = o.close(kind)))
    };

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            set_overlay.update(|o| {
                if let Some(kind) = o.kind() {
                    *o = o.close(kind);
                }
            });
        }
    });

    view! {
        <div class="min-h-screen bg-black relative overflow-hidden">
            <div class="absolute inset-0">
                <div class="absolute top-1/4 left-1/4 w-72 h-72 bg-purple-500/20 rounded-full blur-3xl animate-pulse"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/20 rounded-full blur-3xl animate-pulse delay-1000"></div>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-80 h-80 bg-cyan-500/15 rounded-full blur-3xl animate-pulse delay-500"></div>
            </div>
            <div class="relative z-10 max-w-screen-md mx-auto px-4 sm:px-6 lg:px-8 py-10">
                <GlassCard class="p-8 space-y-12">
                    <div class=FADE_IN>
                        <div class="flex flex-col items-center space-y-6 text-center">
                            <Avatar src=avatar name=name.clone() initials />
                            <div class="space-y-2">
                                <h1 class="text-3xl font-bold text-white">{name}</h1>
                                <h2 class="text-xl text-white/90 font-semibold">{title}</h2>
                                <div class="flex items-center justify-center gap-2 text-white/80">
                                    <span aria-hidden="true">"📍"</span>
                                    <span class="text-sm font-medium">{location}</span>
                                </div>
                            </div>
                            <p class="italic text-sm text-white/70 max-w-2xl leading-relaxed">
                                {tagline}
                            </p>
                            <p class="text-sm text-white/80 max-w-2xl leading-relaxed">{bio}</p>
                            <SocialRow links />
                        </div>
                    </div>
                    <div class=FADE_IN style=delay(0.2)>
                        <GlassCard variant=CardVariant::Skills class="p-6 space-y-4">
                            <SectionHeading text="Skills" accent="from-blue-400 to-cyan-400" />
                            <div class="flex flex-wrap justify-center gap-3">
                                {skills
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <div class=FADE_IN style=stagger(0.4, 0.1, i)>
                                                <SkillCard skill />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </GlassCard>
                    </div>
                    <div class=FADE_IN style=delay(0.6)>
                        <GlassCard variant=CardVariant::Projects class="space-y-6 px-6">
                            <div class="px-6 pt-6">
                                <SectionHeading text="Projects" accent="from-purple-400 to-pink-400" />
                            </div>
                            <div class="overflow-x-auto scroll-smooth snap-x snap-mandatory">
                                <div class="flex space-x-6 px-6 pb-6">
                                    {projects
                                        .get_value()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, project)| {
                                            let on_click = Callback::new(move |target: CardTarget| {
                                                set_overlay.update(|o| *o = o.on_card_click(i, target))
                                            });
                                            view! {
                                                <div
                                                    class=format!("{FADE_IN} min-w-[300px] snap-start")
                                                    style=stagger(0.8, 0.15, i)
                                                >
                                                    <ProjectCard project on_click />
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </GlassCard>
                    </div>
                    <div class=FADE_IN style=delay(1.0)>
                        <ShareRow />
                    </div>
                </GlassCard>
            </div>
            <VerificationModal
                project=target_of(OverlayKind::Verification)
                on_close=close(OverlayKind::Verification)
            />
            <ProjectDetailModal
                project=target_of(OverlayKind::Detail)
                on_close=close(OverlayKind::Detail)
            />
        </div>
    }
}

#[component]
fn SectionHeading(text: &'static str, accent: &'static str) -> impl IntoView {
    view! {
        <div class="text-center space-y-2">
            <h3 class="text-2xl sm:text-3xl font-bold text-white">{text}</h3>
            <div class=format!("w-16 h-1 bg-gradient-to-r {accent} rounded-full mx-auto")></div>
        </div>
    }
}

#[component]
fn SocialRow(links: SocialLinks) -> impl IntoView {
    let class = "p-3 bg-white/15 border-white/25 rounded-xl hover:bg-white/25 text-xl";
    view! {
        <div class="flex gap-3">
            <GlassLink href=links.github label="GitHub" class=class>
                <i class="devicon-github-plain text-white/90" />
            </GlassLink>
            <GlassLink href=links.linkedin label="LinkedIn" class=class>
                <i class="devicon-linkedin-plain text-blue-400" />
            </GlassLink>
            {links
                .website
                .filter(|href| !href.trim().is_empty())
                .map(|href| {
                    view! {
                        <GlassLink href label="Website" class=class>
                            <span class="text-green-400" aria-hidden="true">
                                "🌐"
                            </span>
                        </GlassLink>
                    }
                })}
        </div>
    }
}

/// Shows the page address and copies it to the clipboard. Nothing is shown
/// to the user on success or failure; outcomes only go to the log.
#[component]
fn ShareRow() -> impl IntoView {
    let UseClipboardReturn {
        is_supported,
        copied,
        copy,
        ..
    } = use_clipboard();
    let (page_url, set_page_url) = signal(String::new());

    // effects only run in the browser, where `window` exists
    Effect::new(move |_| match window().location().href() {
        Ok(href) => set_page_url.set(href),
        Err(err) => log::warn!("couldn't read page address: {err:?}"),
    });
    Effect::new(move |_| {
        if copied.get() {
            log::debug!("page link copied to clipboard");
        }
    });

    let copy_link = Callback::new(move |_: ()| {
        if !is_supported.get_untracked() {
            log::warn!("clipboard unavailable, page link not copied");
            return;
        }
        match window().location().href() {
            Ok(href) => copy(&href),
            Err(err) => log::warn!("couldn't read page address: {err:?}"),
        }
    });

    view! {
        <div class="flex flex-col sm:flex-row justify-center items-center gap-4">
            <div class="w-full sm:max-w-xs">
                <GlassInput value=page_url label="Page link" readonly=true />
            </div>
            <GlassButton on_click=copy_link class="flex items-center gap-2">
                <span aria-hidden="true">"⧉"</span>
                "Copy Link"
            </GlassButton>
        </div>
    }
}
