//! Marketing landing page.
//!
//! # Responsibility
//! - Hold the static landing copy as card view-models.
//! - Own the only landing state: mobile menu and per-item FAQ expansion.
//! - Map landing actions onto top-level pages.
//!
//! # Invariants
//! - Scrolling to a section always closes the mobile menu.
//! - FAQ items toggle independently of each other.

use crate::view::navigation::Page;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// In-page anchors reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingSection {
    About,
    Services,
    Faq,
}

impl LandingSection {
    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Services => "services",
            Self::Faq => "faq",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "about" => Some(Self::About),
            "services" => Some(Self::Services),
            "faq" => Some(Self::Faq),
            _ => None,
        }
    }
}

/// Navigation bar and call-to-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    Home,
    Login,
    GetStarted,
    StartJourney,
    ExistingUser,
}

impl LandingAction {
    /// Parses a shell token (`home`, `login`, `get-started`,
    /// `start-journey`, `existing-user`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "login" => Some(Self::Login),
            "get-started" => Some(Self::GetStarted),
            "start-journey" => Some(Self::StartJourney),
            "existing-user" => Some(Self::ExistingUser),
            _ => None,
        }
    }

    pub fn target(self) -> Page {
        match self {
            Self::Home => Page::Landing,
            Self::Login | Self::ExistingUser => Page::Login,
            Self::GetStarted | Self::StartJourney => Page::Signup,
        }
    }
}

/// Icon + title + description card (feature, about and service cards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCard {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCard {
    pub step: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialCard {
    pub name: String,
    pub text: String,
    pub stars: u8,
}

impl TestimonialCard {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            stars: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// FAQ item as rendered, with its expansion state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItemView {
    pub element_id: String,
    pub question: String,
    /// Present only while the item is expanded.
    pub answer: Option<String>,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub tagline: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub social: Vec<SocialLink>,
    pub copyright: String,
    pub links: Vec<String>,
}

/// Static landing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingContent {
    pub hero: Hero,
    pub features: Vec<InfoCard>,
    pub about_heading: String,
    pub about_body: String,
    pub about: Vec<InfoCard>,
    pub services_heading: String,
    pub services: Vec<InfoCard>,
    pub steps: Vec<StepCard>,
    pub testimonials: Vec<TestimonialCard>,
    pub faqs: Vec<FaqEntry>,
    pub footer: Footer,
}

fn card(icon: &str, title: &str, desc: &str) -> InfoCard {
    InfoCard {
        icon: icon.to_string(),
        title: title.to_string(),
        desc: desc.to_string(),
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            hero: Hero {
                badge: "Your Career Accelerator".to_string(),
                headline: "Your Intelligent".to_string(),
                headline_accent: "Bridge to Success".to_string(),
                tagline: "UdaanSetu connects aspiring professionals with elite mentorship, \
                          curated opportunities, and the skills needed to redefine their future."
                    .to_string(),
                highlights: vec![
                    "Free Registration".to_string(),
                    "Expert Mentors".to_string(),
                    "Verified Jobs".to_string(),
                ],
            },
            features: vec![
                card("briefcase", "Job Opportunities", "500+ Companies hiring"),
                card("book-open", "Skill Development", "Curated learning paths"),
                card("users", "Mentorship", "1-on-1 Guidance"),
            ],
            about_heading: "About UdaanSetu".to_string(),
            about_body: "UdaanSetu is a next-gen career development platform designed to \
                         connect youth with verified opportunities, personalized mentorship, and \
                         real-world skills. We focus on making students industry-ready through \
                         adaptive learning, expert guidance, and a structured roadmap designed \
                         for high success."
                .to_string(),
            about: vec![
                card(
                    "search",
                    "Discover Opportunities",
                    "Explore internships, jobs, scholarships & events curated precisely for your profile.",
                ),
                card(
                    "graduation-cap",
                    "Grow with Skills",
                    "Master essential soft & technical skills through guided, project-based learning modules.",
                ),
                card(
                    "layers",
                    "Build a Strong Profile",
                    "Showcase achievements, verified certificates, and career progression in one professional portfolio.",
                ),
            ],
            services_heading: "Our Core Services ✨".to_string(),
            services: vec![
                card(
                    "briefcase",
                    "Job Portal",
                    "Verified jobs from trusted employers and exclusive early access postings.",
                ),
                card(
                    "users",
                    "Mentorship",
                    "Talk directly with top industry mentors for personalized career advice.",
                ),
                card(
                    "book-open",
                    "Skill Development",
                    "Career-oriented courses, skill-checks, and real-world industrial tasks.",
                ),
                card(
                    "sparkles",
                    "AI Career Tools",
                    "Resume scoring, mock interviews, and personalized career path recommendations.",
                ),
            ],
            steps: Vec::new(),
            testimonials: Vec::new(),
            faqs: Vec::new(),
            footer: Footer {
                social: ["LinkedIn", "Twitter", "Facebook", "Messages", "Help"]
                    .into_iter()
                    .map(|label| SocialLink {
                        icon: label.to_ascii_lowercase(),
                        label: label.to_string(),
                    })
                    .collect(),
                copyright: "© 2025 UdaanSetu. All rights reserved.".to_string(),
                links: vec![
                    "Privacy Policy".to_string(),
                    "Terms of Service".to_string(),
                    "Support".to_string(),
                ],
            },
        }
    }
}

/// Rendered landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingView {
    pub content: LandingContent,
    pub menu_open: bool,
    pub scrolled_to: Option<LandingSection>,
    pub faqs: Vec<FaqItemView>,
}

/// Landing page controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    content: LandingContent,
    menu_open: bool,
    scrolled_to: Option<LandingSection>,
    faq_open: Vec<bool>,
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new(LandingContent::default())
    }
}

impl LandingPage {
    pub fn new(content: LandingContent) -> Self {
        let faq_open = vec![false; content.faqs.len()];
        Self {
            content,
            menu_open: false,
            scrolled_to: None,
            faq_open,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn scroll_to(&mut self, section: LandingSection) {
        self.scrolled_to = Some(section);
        self.menu_open = false;
    }

    /// Flips one FAQ item; unknown indexes are ignored.
    pub fn toggle_faq(&mut self, index: usize) {
        if let Some(open) = self.faq_open.get_mut(index) {
            *open = !*open;
        }
    }

    /// Resolves a navigation action; the mobile menu closes on any action.
    pub fn activate(&mut self, action: LandingAction) -> Page {
        self.menu_open = false;
        action.target()
    }

    pub fn render(&self) -> LandingView {
        let faqs = self
            .content
            .faqs
            .iter()
            .zip(self.faq_open.iter().copied())
            .map(|(entry, open)| FaqItemView {
                element_id: faq_element_id(entry.question.as_str()),
                question: entry.question.clone(),
                answer: open.then(|| entry.answer.clone()),
                open,
            })
            .collect();
        LandingView {
            content: self.content.clone(),
            menu_open: self.menu_open,
            scrolled_to: self.scrolled_to,
            faqs,
        }
    }
}

/// `faq-` + question with whitespace runs collapsed to `-`, lowercased.
pub fn faq_element_id(question: &str) -> String {
    format!(
        "faq-{}",
        WHITESPACE_RE.replace_all(question, "-").to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::{
        faq_element_id, FaqEntry, LandingAction, LandingContent, LandingPage, LandingSection,
    };
    use crate::view::navigation::Page;

    fn page_with_faqs() -> LandingPage {
        let mut content = LandingContent::default();
        content.faqs = vec![
            FaqEntry {
                question: "Is it free?".to_string(),
                answer: "Yes.".to_string(),
            },
            FaqEntry {
                question: "Who can  join".to_string(),
                answer: "Anyone.".to_string(),
            },
        ];
        LandingPage::new(content)
    }

    #[test]
    fn default_content_lists_cards() {
        let view = LandingPage::default().render();
        assert_eq!(view.content.features.len(), 3);
        assert_eq!(view.content.about.len(), 3);
        assert_eq!(view.content.services.len(), 4);
        assert_eq!(view.content.footer.social.len(), 5);
        assert!(!view.menu_open);
    }

    #[test]
    fn scrolling_closes_menu() {
        let mut page = LandingPage::default();
        page.toggle_menu();
        assert!(page.menu_open());
        page.scroll_to(LandingSection::Services);
        assert!(!page.menu_open());
        assert_eq!(page.render().scrolled_to, Some(LandingSection::Services));
    }

    #[test]
    fn faq_items_toggle_independently() {
        let mut page = page_with_faqs();
        page.toggle_faq(1);
        page.toggle_faq(7);
        let view = page.render();
        assert!(!view.faqs[0].open);
        assert_eq!(view.faqs[0].answer, None);
        assert!(view.faqs[1].open);
        assert_eq!(view.faqs[1].answer.as_deref(), Some("Anyone."));

        page.toggle_faq(1);
        assert!(!page.render().faqs[1].open);
    }

    #[test]
    fn faq_element_id_collapses_whitespace() {
        assert_eq!(faq_element_id("Who can  join"), "faq-who-can-join");
        assert_eq!(faq_element_id("Is it free?"), "faq-is-it-free?");
    }

    #[test]
    fn actions_map_to_pages() {
        let mut page = LandingPage::default();
        page.toggle_menu();
        assert_eq!(page.activate(LandingAction::GetStarted), Page::Signup);
        assert!(!page.menu_open());
        assert_eq!(page.activate(LandingAction::ExistingUser), Page::Login);
        assert_eq!(page.activate(LandingAction::Home), Page::Landing);
    }
}
