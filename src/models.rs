use chrono::Duration;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Top-level metadata describing the website instance
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Canonical URL of the deployed site
    #[schema(example = "https://blog.allanweber.dev")]
    pub website: String,

    #[schema(example = "Allan Weber")]
    pub author: String,

    /// Short site description used in meta tags
    pub desc: String,

    #[schema(example = "ALLANWEBER.DEV")]
    pub title: String,

    /// Default social-preview (Open Graph) image name
    #[schema(example = "og-blog.png")]
    pub og_image: String,

    /// Whether the frontend offers a light/dark mode toggle
    pub light_and_dark_mode: bool,

    /// Posts shown per listing page
    #[schema(example = 8)]
    pub post_per_page: u32,

    /// Scheduled-post visibility margin in milliseconds
    #[schema(example = 900000)]
    pub scheduled_post_margin: i64,
}

/// Language settings for the rendered pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// HTML lang code
    #[schema(example = "en")]
    pub lang: String,

    /// BCP 47 language tags, in preference order
    pub lang_tag: Vec<String>,
}

/// Header logo settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoImage {
    pub enable: bool,
    /// Logo asset is an SVG (raster otherwise)
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

/// One social-media link, rendered in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    #[schema(example = "Github")]
    pub name: String,

    #[schema(example = "https://github.com/allanweber")]
    pub href: String,

    /// Accessible title for the rendered link
    #[schema(example = "Check ALLANWEBER.DEV codes on Github")]
    pub link_title: String,

    /// Inactive entries are kept in the data but not rendered
    pub active: bool,
}

/// One skill tag, rendered in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[schema(example = "Rust")]
    pub name: String,

    pub link_title: String,

    pub active: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Site title, so the frontend can sanity-check it is talking
    /// to the right backend
    pub site: String,
}

/// Answer to "would a post with this publish time be visible right now?"
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCheckResponse {
    pub pub_datetime: chrono::DateTime<chrono::Utc>,
    pub visible: bool,
    /// The margin that was applied, in milliseconds
    pub scheduled_post_margin: i64,
}

/// Full configuration bundle served to the frontend in one request
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub site: Site,
    pub locale: Locale,
    pub logo_image: LogoImage,
    pub socials: Vec<SocialLink>,
    pub skills: Vec<Skill>,
}

impl Site {
    /// Scheduled-post margin as a chrono duration
    pub fn scheduled_post_margin(&self) -> Duration {
        Duration::milliseconds(self.scheduled_post_margin)
    }
}

impl SocialLink {
    /// Entries that still point at the template placeholder URL
    pub fn is_placeholder(&self) -> bool {
        self.href == crate::constants::PLACEHOLDER_SOCIAL_HREF
    }
}
