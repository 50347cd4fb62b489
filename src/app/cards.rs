use leptos::{either::Either, ev::MouseEvent, prelude::*};

use crate::icons::{self, Glyph, PLACEHOLDER_COLOR};
use crate::profile::{Project, ProjectLinkKind, Skill};
use crate::state::CardTarget;

use super::glass::{shadowed_blur_style, GlassCard, GlassLink, GlassTag};
use super::tooltip::{Tooltip, TooltipAnchor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSize {
    Small,
    Large,
}

impl GlyphSize {
    fn box_class(&self) -> &'static str {
        match self {
            Self::Small => "w-4 h-4 text-base",
            Self::Large => "w-5 h-5 text-xl",
        }
    }
}

#[component]
pub fn TechGlyph(#[prop(into)] name: String, size: GlyphSize) -> impl IntoView {
    match icons::lookup(&name) {
        Glyph::Icon { class, color } => Either::Left(view! {
            <i
                class=format!("{class} flex items-center justify-center {}", size.box_class())
                style=format!("color: {color}")
                aria-label=name
            ></i>
        }),
        Glyph::Placeholder { initial } => Either::Right(view! {
            <div
                data-glyph="placeholder"
                class=format!("flex items-center justify-center rounded bg-gray-300 {}", size.box_class())
                aria-label=name
            >
                <span class="text-xs font-bold" style=format!("color: {PLACEHOLDER_COLOR}")>
                    {initial.to_string()}
                </span>
            </div>
        }),
    }
}

/// Icon row for a project's stack, each icon naming its technology on hover.
#[component]
pub fn TechRow(
    tech: Vec<String>,
    size: GlyphSize,
    #[prop(optional)] anchor: TooltipAnchor,
) -> impl IntoView {
    let padding = match size {
        GlyphSize::Small => "p-2",
        GlyphSize::Large => "p-3",
    };
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .into_iter()
                .map(|name| {
                    view! {
                        <Tooltip content=name.clone() anchor>
                            <div class=format!(
                                "{padding} bg-white/15 backdrop-blur-md border border-white/25 rounded-lg hover:bg-white/20 transition-all duration-200 hover:scale-105",
                            )>
                                <TechGlyph name=name.clone() size />
                            </div>
                        </Tooltip>
                    }
                })
                .collect_view()}
        </div>
    }
}

pub fn link_class(kind: ProjectLinkKind) -> &'static str {
    match kind {
        ProjectLinkKind::Source => "bg-gray-800/60 border-gray-600/50 text-white hover:bg-gray-700/60",
        ProjectLinkKind::LiveDemo => {
            "bg-green-500/30 border-green-400/50 text-green-100 hover:bg-green-500/40"
        }
        ProjectLinkKind::Walkthrough => {
            "bg-blue-500/30 border-blue-400/50 text-blue-100 hover:bg-blue-500/40"
        }
        ProjectLinkKind::CommitHistory => {
            "bg-purple-500/30 border-purple-400/50 text-purple-100 hover:bg-purple-500/40"
        }
    }
}

#[component]
pub fn LinkIcon(kind: ProjectLinkKind) -> impl IntoView {
    let symbol = match kind {
        ProjectLinkKind::Source => {
            return Either::Left(view! { <i class="devicon-github-plain" /> });
        }
        ProjectLinkKind::LiveDemo => "↗",
        ProjectLinkKind::Walkthrough => "▶",
        ProjectLinkKind::CommitHistory => "⎇",
    };
    Either::Right(view! { <span aria-hidden="true">{symbol}</span> })
}

#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <Tooltip content=skill.tooltip_text()>
            <GlassTag class="bg-white/20 border-white/30 text-white hover:bg-white/25 hover:scale-105">
                <TechGlyph name=skill.name.clone() size=GlyphSize::Small />
                <span>{skill.name.clone()}</span>
                {skill
                    .featured
                    .then(|| {
                        view! {
                            <span class="text-yellow-400 text-xs" aria-label="Featured">
                                "★"
                            </span>
                        }
                    })}
            </GlassTag>
        </Tooltip>
    }
}

/// A gallery card. Every click is reported with where it landed; the badge
/// and the links keep their clicks from reaching the card body.
#[component]
pub fn ProjectCard(project: Project, on_click: Callback<CardTarget>) -> impl IntoView {
    let links = project.links();
    view! {
        <GlassCard
            class="p-6 flex flex-col min-h-[280px] hover:scale-[1.02] cursor-pointer"
            on_click=move |_: ()| on_click.run(CardTarget::Body)
        >
            <div class="flex flex-col h-full space-y-4">
                <div class="flex items-start justify-between gap-3">
                    <h4 class="font-bold text-white text-lg flex-1 leading-tight">
                        {project.title.clone()}
                    </h4>
                    {project
                        .verified
                        .then(|| {
                            view! {
                                <button
                                    type="button"
                                    class="inline-flex items-center gap-1 px-2 py-1 rounded-full text-xs font-medium bg-green-500/30 text-green-100 border border-green-400/50 backdrop-blur-md hover:bg-green-500/40 transition-all duration-200 cursor-pointer flex-shrink-0"
                                    style=shadowed_blur_style(8)
                                    on:click=move |ev: MouseEvent| {
                                        ev.stop_propagation();
                                        on_click.run(CardTarget::VerifiedBadge);
                                    }
                                >
                                    "✓ Verified"
                                </button>
                            }
                        })}
                </div>
                <TechRow tech=project.tech.clone() size=GlyphSize::Small />
                <div class="flex-1">
                    <p class="text-white/80 text-sm leading-relaxed">{project.summary.clone()}</p>
                </div>
                <div class="flex flex-wrap gap-2 pt-2">
                    {links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <GlassLink
                                    href=link.href
                                    contained=true
                                    on_click=move |_: ()| on_click.run(CardTarget::Link)
                                    class=format!(
                                        "inline-flex items-center gap-2 px-3 py-2 rounded-lg text-xs font-medium {}",
                                        link_class(link.kind),
                                    )
                                >
                                    <LinkIcon kind=link.kind />
                                    {link.kind.short_label()}
                                </GlassLink>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </GlassCard>
    }
}
