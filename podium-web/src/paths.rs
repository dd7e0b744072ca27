//! URL construction for static assets, honoring the deployment base
//! path when `PUBLIC_URL` is set at compile time.

/// Root-anchored (or base-prefixed) URL for a static asset.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router, `None` when deployed at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

/// URL of the snapshot document.
#[must_use]
pub fn stats_url() -> String {
    asset_path("static/assets/data/stats.json")
}

/// URL of one tournament's screenshot index.
#[must_use]
pub fn screenshot_index_url(tournament: &str) -> String {
    asset_path(&format!(
        "static/assets/data/tournament-screenshots/{}/index.json",
        encode_component(tournament)
    ))
}

/// URL of one screenshot image.
#[must_use]
pub fn screenshot_url(tournament: &str, file: &str) -> String {
    asset_path(&format!(
        "static/assets/data/tournament-screenshots/{}/{}",
        encode_component(tournament),
        encode_component(file)
    ))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

/// Percent-encode a single path segment. Tournament names contain
/// spaces, which must not split the URL.
#[must_use]
pub fn encode_component(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_are_root_anchored_without_a_base() {
        assert_eq!(stats_url(), "/static/assets/data/stats.json");
        assert_eq!(
            asset_path_with_base("static/app.css", "/podium"),
            "/podium/static/app.css"
        );
    }

    #[test]
    fn screenshot_urls_encode_tournament_names() {
        assert_eq!(
            screenshot_index_url("Autumn Invitational 2024"),
            "/static/assets/data/tournament-screenshots/Autumn%20Invitational%202024/index.json"
        );
        assert_eq!(
            screenshot_url("Winter Clash 2025", "podium.png"),
            "/static/assets/data/tournament-screenshots/Winter%20Clash%202025/podium.png"
        );
    }

    #[test]
    fn encoding_passes_unreserved_characters_through() {
        assert_eq!(encode_component("finals-table.png"), "finals-table.png");
        assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
    }
}
