use std::collections::HashMap;
use std::sync::LazyLock;

pub const PLACEHOLDER_COLOR: &str = "#4B5563";
pub const PLACEHOLDER_INITIAL: char = '?';

// (name, devicon class, accent color)
const KNOWN_ICONS: &[(&str, &str, &str)] = &[
    ("React", "devicon-react-original", "#61DAFB"),
    ("TypeScript", "devicon-typescript-plain", "#3178C6"),
    ("Next.js", "devicon-nextjs-plain", "#000000"),
    ("Tailwind CSS", "devicon-tailwindcss-original", "#06B6D4"),
    ("Node.js", "devicon-nodejs-plain", "#339933"),
    ("Python", "devicon-python-plain", "#3776AB"),
    ("Firebase", "devicon-firebase-plain", "#FFCA28"),
    ("GraphQL", "devicon-graphql-plain", "#E10098"),
    ("Swift", "devicon-swift-plain", "#FA7343"),
    ("Docker", "devicon-docker-plain", "#2496ED"),
    ("AWS", "devicon-amazonwebservices-plain-wordmark", "#FF9900"),
    ("PostgreSQL", "devicon-postgresql-plain", "#336791"),
];

static ICONS: LazyLock<HashMap<&'static str, Glyph>> = LazyLock::new(|| {
    KNOWN_ICONS
        .iter()
        .map(|&(name, class, color)| (name, Glyph::Icon { class, color }))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Icon {
        class: &'static str,
        color: &'static str,
    },
    Placeholder {
        initial: char,
    },
}

/// Exact-match lookup. Unknown names get a placeholder showing their first character.
pub fn lookup(name: &str) -> Glyph {
    match ICONS.get(name) {
        Some(glyph) => *glyph,
        None => Glyph::Placeholder {
            initial: name.chars().next().unwrap_or(PLACEHOLDER_INITIAL),
        },
    }
}

impl Glyph {
    pub fn color(&self) -> &'static str {
        match self {
            Self::Icon { color, .. } => color,
            Self::Placeholder { .. } => PLACEHOLDER_COLOR,
        }
    }
}
