/**
 * Smoke test against a running blogsite instance
 * Checks that every config endpoint answers and the payloads hold their
 * documented shape (counts, active flags, field names)
 */

use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url = std::env::var("TEST_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    println!("🧪 Testing blogsite config API at: {}", base_url);

    let client = reqwest::Client::new();

    // Health
    println!("\n📋 GET /api/health");
    let health: serde_json::Value = client
        .get(format!("{}/api/health", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(health["status"], "ok", "health status should be ok");
    println!("   ✅ {} v{}", health["site"], health["version"]);

    // Full bundle
    println!("\n📋 GET /api/config");
    let config: serde_json::Value = client
        .get(format!("{}/api/config", base_url))
        .send()
        .await?
        .json()
        .await?;
    let site = &config["site"];
    assert_eq!(site["scheduledPostMargin"], 900_000);
    assert_eq!(site["postPerPage"], 8);
    assert_eq!(config["locale"]["lang"], "en");
    assert_eq!(
        config["socials"].as_array().map(|a| a.len()),
        Some(20),
        "bundle should carry all socials, active or not"
    );
    assert_eq!(config["skills"].as_array().map(|a| a.len()), Some(21));
    println!("   ✅ bundle shape OK for {}", site["title"]);

    // Filtered socials listing
    println!("\n📋 GET /api/socials");
    let socials: serde_json::Value = client
        .get(format!("{}/api/socials", base_url))
        .send()
        .await?
        .json()
        .await?;
    let socials = socials.as_array().ok_or("socials should be an array")?;
    assert_eq!(socials.len(), 6, "default listing should be active-only");
    for link in socials {
        assert_eq!(link["active"], true);
        let href = link["href"].as_str().unwrap_or("");
        assert!(
            href.starts_with("http") || href.starts_with("mailto:"),
            "unexpected href: {}",
            href
        );
    }
    println!("   ✅ {} active social links", socials.len());

    // Unknown name is a 404
    println!("\n📋 GET /api/socials/Friendster");
    let status = client
        .get(format!("{}/api/socials/Friendster", base_url))
        .send()
        .await?
        .status();
    assert_eq!(status.as_u16(), 404, "unknown social should 404");
    println!("   ✅ unknown social returns 404");

    println!("\n🎉 All smoke checks passed");
    Ok(())
}
