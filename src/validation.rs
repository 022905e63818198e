use crate::error::ValidationError;
use crate::site::{LOCALE, LOGO_IMAGE, SITE, SKILLS, SOCIALS};

/// Syntactic check for a social href: an absolute http(s) URL or a
/// mailto URI. Rendered straight into anchor tags, so anything else
/// is rejected at startup.
fn is_valid_href(href: &str) -> bool {
    if let Some(addr) = href.strip_prefix("mailto:") {
        let (local, domain) = match addr.split_once('@') {
            Some(parts) => parts,
            None => return false,
        };
        return !local.is_empty() && domain.contains('.') && !addr.contains(char::is_whitespace);
    }

    let rest = match href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };

    let host = rest.split('/').next().unwrap_or("");
    !host.is_empty() && !rest.contains(char::is_whitespace)
}

/// Validate the static site data before serving anything.
/// The data is literal and checked by tests too, but failing fast here
/// catches a bad edit the moment the process starts.
pub fn validate_site_data() -> Result<(), ValidationError> {
    if SITE.website.is_empty() || !is_valid_href(&SITE.website) {
        return Err(ValidationError::InvalidHref {
            name: "SITE.website".to_string(),
            href: SITE.website.clone(),
        });
    }

    if LOCALE.lang.is_empty() {
        return Err(ValidationError::EmptyLang);
    }

    if LOGO_IMAGE.enable {
        if LOGO_IMAGE.width == 0 {
            return Err(ValidationError::ZeroLogoDimension { dimension: "width" });
        }
        if LOGO_IMAGE.height == 0 {
            return Err(ValidationError::ZeroLogoDimension { dimension: "height" });
        }
    }

    for link in SOCIALS.iter() {
        if link.name.is_empty() {
            return Err(ValidationError::EmptySocialField {
                name: link.href.clone(),
                field: "name",
            });
        }
        if link.link_title.is_empty() {
            return Err(ValidationError::EmptySocialField {
                name: link.name.clone(),
                field: "linkTitle",
            });
        }
        if !is_valid_href(&link.href) {
            return Err(ValidationError::InvalidHref {
                name: link.name.clone(),
                href: link.href.clone(),
            });
        }
        // Placeholder hrefs are expected on inactive entries only
        if link.active && link.is_placeholder() {
            tracing::warn!(
                "active social '{}' still points at the template placeholder",
                link.name
            );
        }
    }

    for tag in SKILLS.iter() {
        if tag.name.is_empty() || tag.link_title.is_empty() {
            return Err(ValidationError::EmptySkillTitle {
                name: tag.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_data_passes_validation() {
        validate_site_data().unwrap();
    }

    #[test]
    fn accepts_http_https_and_mailto() {
        assert!(is_valid_href("https://github.com/allanweber"));
        assert!(is_valid_href("http://example.com"));
        assert!(is_valid_href("https://allanweber.dev"));
        assert!(is_valid_href("mailto:a.cassianoweber@gmail.com"));
    }

    #[test]
    fn rejects_malformed_hrefs() {
        assert!(!is_valid_href(""));
        assert!(!is_valid_href("ftp://example.com"));
        assert!(!is_valid_href("https://"));
        assert!(!is_valid_href("https://spaced out.com"));
        assert!(!is_valid_href("mailto:no-at-sign"));
        assert!(!is_valid_href("mailto:user@nodot"));
        assert!(!is_valid_href("javascript:alert(1)"));
    }

    #[test]
    fn every_shipped_social_href_is_syntactically_valid() {
        for link in SOCIALS.iter() {
            assert!(is_valid_href(&link.href), "bad href on {}", link.name);
        }
    }
}
