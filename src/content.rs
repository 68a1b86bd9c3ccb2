//! Page copy and the lists the sections iterate over. Loaded once from the
//! embedded `content/site.json`; nothing mutates it afterwards.

use serde::Deserialize;

use crate::error::ContentError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    MessageSquare,
    Zap,
    Shield,
    Users,
    Send,
    BarChart,
    Facebook,
    Twitter,
    Linkedin,
    Github,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub hero: Hero,
    pub island: Island,
    pub features: ListSection<Feature>,
    pub steps: ListSection<Step>,
    pub team: ListSection<TeamMember>,
    pub story: Story,
    pub testimonials: ListSection<Testimonial>,
    pub pricing: ListSection<Plan>,
    pub cta: CallToAction,
    pub footer: Footer,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Heading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ListSection<T> {
    pub heading: Heading,
    pub items: Vec<T>,
}

impl<T> Default for ListSection<T> {
    fn default() -> Self {
        Self {
            heading: Heading::default(),
            items: Vec::new(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub blurb: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Island {
    pub title: String,
    pub placeholder: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Socials {
    pub twitter: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image: String,
    pub socials: Socials,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TimelineEvent {
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Story {
    pub heading: Heading,
    pub events: Vec<TimelineEvent>,
    pub vision_title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub period: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: String,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CallToAction {
    pub title: String,
    pub body: String,
    pub primary: String,
    pub secondary: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Footer {
    pub socials: Vec<SocialLink>,
    pub columns: Vec<LinkColumn>,
}
