use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::*;
use crate::site;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        site_config,
        site_descriptor,
        locale,
        logo,
        socials,
        social_by_name,
        skills,
        schedule_check
    ),
    components(schemas(
        HealthResponse,
        ConfigResponse,
        Site,
        Locale,
        LogoImage,
        SocialLink,
        Skill,
        ScheduleCheckResponse
    )),
    tags(
        (name = "blogsite", description = "Site configuration API for the blog frontend")
    ),
    info(
        title = "blogsite API",
        version = "0.1.0",
        description = "Read-only configuration backend for a personal blog.\n\n\
                      Serves the site descriptor, locale, logo settings, social \
                      links and skill tags consumed by the presentation layer. \
                      All data is constant for the lifetime of the process; \
                      entries carry an `active` flag that controls whether the \
                      frontend renders them.",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "blogsite",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        site: site::SITE.title.clone(),
    })
}

/// Full configuration bundle
///
/// One round trip for frontends that want everything at boot. Lists are
/// returned unfiltered here; the `active` flag is part of the payload.
#[utoipa::path(
    get,
    path = "/api/config",
    tag = "blogsite",
    responses(
        (status = 200, description = "Site, locale, logo, socials and skills", body = ConfigResponse)
    )
)]
pub async fn site_config() -> Json<ConfigResponse> {
    Json(ConfigResponse {
        site: site::SITE.clone(),
        locale: site::LOCALE.clone(),
        logo_image: site::LOGO_IMAGE.clone(),
        socials: site::SOCIALS.clone(),
        skills: site::SKILLS.clone(),
    })
}

/// Site descriptor
#[utoipa::path(
    get,
    path = "/api/config/site",
    tag = "blogsite",
    responses(
        (status = 200, description = "Site metadata", body = Site)
    )
)]
pub async fn site_descriptor() -> Json<Site> {
    Json(site::SITE.clone())
}

/// Locale settings
#[utoipa::path(
    get,
    path = "/api/config/locale",
    tag = "blogsite",
    responses(
        (status = 200, description = "Language code and BCP 47 tags", body = Locale)
    )
)]
pub async fn locale() -> Json<Locale> {
    Json(site::LOCALE.clone())
}

/// Logo settings
#[utoipa::path(
    get,
    path = "/api/config/logo",
    tag = "blogsite",
    responses(
        (status = 200, description = "Header logo settings", body = LogoImage)
    )
)]
pub async fn logo() -> Json<LogoImage> {
    Json(site::LOGO_IMAGE.clone())
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Include entries with `active: false` in the listing
    pub include_inactive: Option<bool>,
}

fn include_inactive(query: &ListQuery, config: &Config) -> bool {
    query.include_inactive.unwrap_or(config.expose_inactive)
}

/// Social links, in display order
///
/// Inactive entries (placeholder data not rendered by the frontend) are
/// omitted unless `include_inactive=true` or the server is deployed with
/// `EXPOSE_INACTIVE=true`.
#[utoipa::path(
    get,
    path = "/api/socials",
    tag = "blogsite",
    params(
        ("include_inactive" = Option<bool>, Query, description = "Include inactive entries")
    ),
    responses(
        (status = 200, description = "Ordered social links", body = [SocialLink])
    )
)]
pub async fn socials(
    State(config): State<Arc<Config>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<SocialLink>> {
    let list = if include_inactive(&query, &config) {
        site::SOCIALS.clone()
    } else {
        site::active_socials().cloned().collect()
    };
    Json(list)
}

/// Look up a single social link by name (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/socials/{name}",
    tag = "blogsite",
    params(
        ("name" = String, Path, description = "Social network name, e.g. `Github`")
    ),
    responses(
        (status = 200, description = "The social link", body = SocialLink),
        (status = 404, description = "No social link with that name")
    )
)]
pub async fn social_by_name(Path(name): Path<String>) -> Result<Json<SocialLink>> {
    let link = site::social_by_name(&name).ok_or(AppError::NotFound)?;
    Ok(Json(link.clone()))
}

/// Skill tags, in display order
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "blogsite",
    params(
        ("include_inactive" = Option<bool>, Query, description = "Include inactive entries")
    ),
    responses(
        (status = 200, description = "Ordered skill tags", body = [Skill])
    )
)]
pub async fn skills(
    State(config): State<Arc<Config>>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Skill>> {
    let list = if include_inactive(&query, &config) {
        site::SKILLS.clone()
    } else {
        site::active_skills().cloned().collect()
    };
    Json(list)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCheckQuery {
    /// Publish time of the post, RFC 3339
    pub pub_datetime: chrono::DateTime<chrono::Utc>,
}

/// Would a post with this publish time be visible right now?
///
/// Applies the scheduled-post margin, so a build job can ask the same
/// question the frontend answers when filtering future-dated posts.
#[utoipa::path(
    get,
    path = "/api/schedule/check",
    tag = "blogsite",
    params(
        ("pubDatetime" = String, Query, description = "Publish time, RFC 3339, e.g. `2026-09-01T12:00:00Z`")
    ),
    responses(
        (status = 200, description = "Visibility verdict", body = ScheduleCheckResponse),
        (status = 400, description = "Unparseable publish time")
    )
)]
pub async fn schedule_check(
    Query(query): Query<ScheduleCheckQuery>,
) -> Json<ScheduleCheckResponse> {
    let now = chrono::Utc::now();
    Json(ScheduleCheckResponse {
        pub_datetime: query.pub_datetime,
        visible: crate::scheduling::publish_time_passed(query.pub_datetime, now),
        scheduled_post_margin: site::SITE.scheduled_post_margin,
    })
}
