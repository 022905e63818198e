use crate::constants::{PLACEHOLDER_SOCIAL_HREF, SCHEDULED_POST_MARGIN_MS};
use crate::models::{Locale, LogoImage, Site, Skill, SocialLink};
use once_cell::sync::Lazy;

/// Site descriptor. Immutable for the lifetime of the process;
/// edit the literals here to rebrand the site.
pub static SITE: Lazy<Site> = Lazy::new(|| Site {
    website: "https://blog.allanweber.dev".to_string(),
    author: "Allan Weber".to_string(),
    desc: "Logbook of a full stack software developer".to_string(),
    title: "ALLANWEBER.DEV".to_string(),
    og_image: "og-blog.png".to_string(),
    light_and_dark_mode: true,
    post_per_page: 8,
    scheduled_post_margin: SCHEDULED_POST_MARGIN_MS,
});

pub static LOCALE: Lazy<Locale> = Lazy::new(|| Locale {
    lang: "en".to_string(),
    // BCP 47 Language Tags. Leave empty to use the environment default
    lang_tag: vec!["en-EN".to_string()],
});

pub static LOGO_IMAGE: Lazy<LogoImage> = Lazy::new(|| LogoImage {
    enable: false,
    svg: true,
    width: 216,
    height: 46,
});

fn social(name: &str, href: &str, link_title: String, active: bool) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        href: href.to_string(),
        link_title,
        active,
    }
}

/// Social links in display order. Inactive entries still carry the
/// template placeholder href and are filtered out by the API unless
/// explicitly requested.
pub static SOCIALS: Lazy<Vec<SocialLink>> = Lazy::new(|| {
    let title = &SITE.title;
    vec![
        social(
            "Github",
            "https://github.com/allanweber",
            format!("Check {title} codes on Github"),
            true,
        ),
        social(
            "Instagram",
            "https://www.instagram.com/allanweber",
            format!("Follow {title} on Instagram"),
            true,
        ),
        social(
            "LinkedIn",
            "https://www.linkedin.com/in/allancassianoweber/",
            format!("Check {title} on LinkedIn"),
            true,
        ),
        social(
            "Twitter",
            "https://twitter.com/acassianoweber",
            format!("Follow {title} on Twitter"),
            true,
        ),
        social(
            "Web",
            "https://allanweber.dev",
            format!("Check {title} website"),
            true,
        ),
        social(
            "Mail",
            "mailto:a.cassianoweber@gmail.com",
            format!("Send an email to {title}"),
            true,
        ),
        social(
            "Twitch",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Twitch"),
            false,
        ),
        social(
            "YouTube",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on YouTube"),
            false,
        ),
        social(
            "WhatsApp",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on WhatsApp"),
            false,
        ),
        social(
            "Snapchat",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Snapchat"),
            false,
        ),
        social(
            "Pinterest",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Pinterest"),
            false,
        ),
        social(
            "TikTok",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on TikTok"),
            false,
        ),
        social(
            "CodePen",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on CodePen"),
            false,
        ),
        social(
            "Discord",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Discord"),
            false,
        ),
        social(
            "GitLab",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on GitLab"),
            false,
        ),
        social(
            "Reddit",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Reddit"),
            false,
        ),
        social(
            "Skype",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Skype"),
            false,
        ),
        social(
            "Steam",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Steam"),
            false,
        ),
        social(
            "Telegram",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Telegram"),
            false,
        ),
        social(
            "Mastodon",
            PLACEHOLDER_SOCIAL_HREF,
            format!("{title} on Mastodon"),
            false,
        ),
    ]
});

fn skill(name: &str) -> Skill {
    Skill {
        name: name.to_string(),
        link_title: name.to_string(),
        active: true,
    }
}

/// Skill tags in display order
pub static SKILLS: Lazy<Vec<Skill>> = Lazy::new(|| {
    [
        "Javascript",
        "Java",
        "Typescript",
        "Python",
        "AWS",
        "Vercel",
        "NodeJs",
        "Spring",
        "React",
        "NextJs",
        "Kafka",
        "Rabbit",
        "Mongo",
        "Postgres",
        "MySql",
        "Redis",
        "Docker",
        "Kubernetes",
        "Maven",
        "WebPack",
        "GithubActins",
    ]
    .iter()
    .map(|name| skill(name))
    .collect()
});

/// Social links with `active: true`, in declaration order
pub fn active_socials() -> impl Iterator<Item = &'static SocialLink> {
    SOCIALS.iter().filter(|s| s.active)
}

/// Skill tags with `active: true`, in declaration order
pub fn active_skills() -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(|s| s.active)
}

/// Case-insensitive lookup by social network name
pub fn social_by_name(name: &str) -> Option<&'static SocialLink> {
    SOCIALS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
