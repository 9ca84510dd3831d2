//! The REST endpoint catalog and the hub URL.

/// Default API origin; override per deployment via the web app's stored
/// setting.
pub const DEFAULT_API_BASE: &str = "https://localhost:44348";

/// Builds request URLs against one API origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn choices(&self) -> String {
        format!("{}/choices", self.base)
    }

    pub fn random_choice(&self) -> String {
        format!("{}/choice", self.base)
    }

    pub fn play(&self) -> String {
        format!("{}/play", self.base)
    }

    pub fn recent_results(&self) -> String {
        format!("{}/get10RecentResults", self.base)
    }

    pub fn recent_results_by_player(&self, player_name: &str) -> String {
        format!(
            "{}/get10RecentResultsByPlayer/{}",
            self.base,
            encode_component(player_name)
        )
    }

    pub fn reset_by_player(&self, player_name: &str) -> String {
        format!("{}/resetByPlayer/{}", self.base, encode_component(player_name))
    }

    /// The hub endpoint, with the scheme flipped to its WebSocket
    /// counterpart.
    pub fn game_hub(&self) -> String {
        let ws_base = if let Some(rest) = self.base.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.base.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            self.base.clone()
        };
        format!("{ws_base}/gamehub")
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Percent-encodes one path component, `encodeURIComponent`-style: ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` pass through, everything else is
/// encoded byte-wise.
fn encode_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => out.push(b as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_api_catalog() {
        let api = Endpoints::default();
        assert_eq!(api.choices(), "https://localhost:44348/choices");
        assert_eq!(api.play(), "https://localhost:44348/play");
        assert_eq!(api.recent_results(), "https://localhost:44348/get10RecentResults");
        assert_eq!(api.random_choice(), "https://localhost:44348/choice");
    }

    #[test]
    fn player_names_are_percent_encoded() {
        let api = Endpoints::new("https://example.test");
        assert_eq!(
            api.recent_results_by_player("Alice Smith"),
            "https://example.test/get10RecentResultsByPlayer/Alice%20Smith"
        );
        assert_eq!(
            api.reset_by_player("a/b&c"),
            "https://example.test/resetByPlayer/a%2Fb%26c"
        );
        // Multi-byte characters are encoded per UTF-8 byte.
        assert_eq!(
            api.reset_by_player("Zoë"),
            "https://example.test/resetByPlayer/Zo%C3%AB"
        );
    }

    #[test]
    fn hub_url_uses_the_websocket_scheme() {
        assert_eq!(
            Endpoints::new("https://localhost:44348").game_hub(),
            "wss://localhost:44348/gamehub"
        );
        assert_eq!(
            Endpoints::new("http://localhost:5000/").game_hub(),
            "ws://localhost:5000/gamehub"
        );
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        assert_eq!(Endpoints::new("https://x.test///").choices(), "https://x.test/choices");
    }
}
