use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

pub static PROFILE: LazyLock<Result<DeveloperProfile, ProfileError>> = LazyLock::new(load_profile);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub tagline: String,
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub links: SocialLinks,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Mobile,
    DevOps,
    Database,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
    pub description: String,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub tech: Vec<String>,
    pub summary: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    pub verified: bool,
    #[serde(default)]
    pub walkthrough_url: Option<String>,
    #[serde(default)]
    pub commit_history_url: Option<String>,
    #[serde(default)]
    pub verification_details: Option<VerificationDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDetails {
    pub proof: String,
    pub commits: u32,
    pub last_updated: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLinkKind {
    Source,
    LiveDemo,
    Walkthrough,
    CommitHistory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLink {
    pub kind: ProjectLinkKind,
    pub href: String,
}

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Profile document not found: {0}")]
    Missing(String),
    #[error("Profile document is not valid UTF-8")]
    Encoding,
    #[error("Couldn't parse profile: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate skill: {0}")]
    DuplicateSkill(String),
    #[error("Duplicate project: {0}")]
    DuplicateProject(String),
}

pub fn load_profile() -> Result<DeveloperProfile, ProfileError> {
    let file =
        Content::get(PROFILE_FILE).ok_or_else(|| ProfileError::Missing(PROFILE_FILE.to_string()))?;
    let content = std::str::from_utf8(&file.data).map_err(|_| ProfileError::Encoding)?;
    parse_profile(content)
}

pub fn parse_profile(content: &str) -> Result<DeveloperProfile, ProfileError> {
    let profile = serde_json::from_str::<DeveloperProfile>(content)?;
    profile.validate()?;
    Ok(profile)
}

impl DeveloperProfile {
    /// Skill names and project titles key the rendered lists, so both must be unique.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.name.as_str()) {
                return Err(ProfileError::DuplicateSkill(skill.name.clone()));
            }
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.title.as_str()) {
                return Err(ProfileError::DuplicateProject(project.title.clone()));
            }
        }
        Ok(())
    }

    /// Avatar fallback text: the first letter of each word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl SkillLevel {
    pub fn definition(&self) -> &'static str {
        match self {
            Self::Beginner => "Basic understanding and ability to use the technology",
            Self::Intermediate => "Good working knowledge and ability to build projects",
            Self::Advanced => "Expert level with deep understanding and ability to teach others",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(s)
    }
}

impl Skill {
    pub fn tooltip_text(&self) -> String {
        format!(
            "{}\n\nLevel: {}\n{}",
            self.description,
            self.level,
            self.level.definition()
        )
    }
}

impl Project {
    /// Details are only shown for verified projects. A verified project may
    /// still have none, in which case there is no section to render.
    pub fn verification_section(&self) -> Option<&VerificationDetails> {
        if self.verified {
            self.verification_details.as_ref()
        } else {
            None
        }
    }

    pub fn links(&self) -> Vec<ProjectLink> {
        [
            (ProjectLinkKind::Source, &self.github),
            (ProjectLinkKind::LiveDemo, &self.live),
            (ProjectLinkKind::Walkthrough, &self.walkthrough_url),
            (ProjectLinkKind::CommitHistory, &self.commit_history_url),
        ]
        .into_iter()
        .filter_map(|(kind, href)| {
            href.as_ref()
                .filter(|href| !href.trim().is_empty())
                .map(|href| ProjectLink {
                    kind,
                    href: href.clone(),
                })
        })
        .collect()
    }
}

impl VerificationDetails {
    pub fn commits_label(&self) -> String {
        format!("{} commits", self.commits)
    }

    pub fn last_updated_label(&self) -> String {
        format!("Last updated {}", self.last_updated)
    }
}

impl ProjectLinkKind {
    /// Label used on the gallery cards.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Source => "GitHub",
            Self::LiveDemo => "Live Demo",
            Self::Walkthrough => "Walkthrough",
            Self::CommitHistory => "Commits",
        }
    }

    /// Label used in the detail modal.
    pub fn long_label(&self) -> &'static str {
        match self {
            Self::Source => "View on GitHub",
            Self::LiveDemo => "Live Demo",
            Self::Walkthrough => "Code Walkthrough",
            Self::CommitHistory => "Commit History",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(title: &str, verified: bool) -> Project {
        Project {
            title: title.to_string(),
            tech: vec!["React".to_string()],
            summary: format!("{title} summary"),
            github: None,
            live: None,
            verified,
            walkthrough_url: None,
            commit_history_url: None,
            verification_details: None,
        }
    }

    pub(crate) fn skill(name: &str, level: SkillLevel, category: SkillCategory) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            category,
            description: format!("{name} description"),
            project_url: None,
            featured: false,
        }
    }

    pub(crate) fn profile_with(skills: Vec<Skill>, projects: Vec<Project>) -> DeveloperProfile {
        DeveloperProfile {
            name: "Ada Lovelace".to_string(),
            title: "Engineer".to_string(),
            location: "London".to_string(),
            tagline: "Notes on the engine".to_string(),
            bio: "Wrote the first program.".to_string(),
            avatar: None,
            links: SocialLinks {
                github: "https://github.com/ada".to_string(),
                linkedin: "https://linkedin.com/in/ada".to_string(),
                website: None,
            },
            skills,
            projects,
        }
    }

    #[test]
    fn test_embedded_profile_loads() {
        let profile = load_profile().expect("embedded profile should parse");
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.skills.len(), 12);
        assert_eq!(profile.projects.len(), 6);
        assert!(PROFILE.is_ok());
    }

    #[test]
    fn test_order_is_preserved() {
        let profile = load_profile().expect("embedded profile should parse");
        let names = profile
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        // categories and levels are interleaved; the document order wins
        assert_eq!(&names[..5], ["React", "TypeScript", "Next.js", "Tailwind CSS", "Node.js"]);
        assert_eq!(profile.projects[0].title, "Surf Forecasting AI");
        assert_eq!(profile.projects[5].title, "Weather Dashboard");
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = r#"{
            "name": "A B",
            "title": "Dev",
            "location": "Here",
            "tagline": "t",
            "bio": "b",
            "links": { "github": "g", "linkedin": "l" },
            "skills": [
                { "name": "C", "level": "Beginner", "category": "Mobile", "description": "c" },
                { "name": "A", "level": "Advanced", "category": "Database", "description": "a" }
            ],
            "projects": [
                {
                    "title": "P",
                    "tech": [],
                    "summary": "s",
                    "verified": true,
                    "verificationDetails": { "proof": "x", "commits": 5, "lastUpdated": "today" }
                }
            ]
        }"#;
        let profile = parse_profile(doc).expect("document should parse");
        assert!(profile.avatar.is_none());
        assert!(profile.links.website.is_none());
        assert!(!profile.skills[0].featured);
        assert_eq!(profile.skills[0].name, "C");
        assert_eq!(profile.skills[1].name, "A");
        let details = profile.projects[0]
            .verification_section()
            .expect("verified project has details");
        assert_eq!(details.commits, 5);
    }

    #[test]
    fn test_parse_rejects_bad_json() {
        let res = parse_profile("{ \"name\": ");
        assert!(matches!(res, Err(ProfileError::Parse(_))));
    }

    #[test]
    fn test_duplicates_rejected() {
        let profile = profile_with(
            vec![
                skill("Rust", SkillLevel::Advanced, SkillCategory::Backend),
                skill("Rust", SkillLevel::Beginner, SkillCategory::Backend),
            ],
            vec![],
        );
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::DuplicateSkill(name)) if name == "Rust"
        ));

        let profile = profile_with(vec![], vec![project("Site", true), project("Site", false)]);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::DuplicateProject(title)) if title == "Site"
        ));
    }

    #[test]
    fn test_verification_section() {
        let mut verified = project("Verified", true);
        verified.verification_details = Some(VerificationDetails {
            proof: "x".to_string(),
            commits: 5,
            last_updated: "today".to_string(),
        });
        let details = verified.verification_section().expect("should have section");
        assert_eq!(details.proof, "x");
        assert_eq!(details.commits_label(), "5 commits");
        assert_eq!(details.last_updated_label(), "Last updated today");

        // verified but nothing to show
        assert!(project("Bare", true).verification_section().is_none());

        // details on an unverified project are never surfaced
        let mut unverified = verified.clone();
        unverified.verified = false;
        assert!(unverified.verification_section().is_none());
    }

    #[test]
    fn test_links_skip_missing_and_empty() {
        let profile = load_profile().expect("embedded profile should parse");
        let task_api = profile
            .projects
            .iter()
            .find(|p| p.title == "Task Management API")
            .expect("project should exist");
        let kinds = task_api.links().iter().map(|l| l.kind).collect::<Vec<_>>();
        assert_eq!(kinds, [ProjectLinkKind::Source, ProjectLinkKind::CommitHistory]);

        let surf = &profile.projects[0];
        let kinds = surf.links().iter().map(|l| l.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                ProjectLinkKind::Source,
                ProjectLinkKind::LiveDemo,
                ProjectLinkKind::Walkthrough,
                ProjectLinkKind::CommitHistory,
            ]
        );
        assert!(project("Nothing", false).links().is_empty());
    }

    #[test]
    fn test_skill_tooltip_text() {
        let s = skill("Swift", SkillLevel::Beginner, SkillCategory::Mobile);
        assert_eq!(
            s.tooltip_text(),
            "Swift description\n\nLevel: Beginner\nBasic understanding and ability to use the technology"
        );
    }

    #[test]
    fn test_initials() {
        let mut profile = profile_with(vec![], vec![]);
        assert_eq!(profile.initials(), "AL");
        profile.name = "  Grace   Brewster Hopper ".to_string();
        assert_eq!(profile.initials(), "GBH");
        profile.name = String::new();
        assert_eq!(profile.initials(), "");
    }
}
