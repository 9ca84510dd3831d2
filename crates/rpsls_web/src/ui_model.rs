//! Page inventory and mode metadata shared by the router and host tests.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the navigation inventory on the host.

/// The app's pages. `/` is an alias of [`Page::Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Game,
    Computer,
    Opponent,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/home",
            Page::Game => "/game",
            Page::Computer => "/computer",
            Page::Opponent => "/opponent",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Welcome",
            Page::Game => "Select Game Mode",
            Page::Computer => "Playing against the computer",
            Page::Opponent => "Playing against the real opponent",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Game, Page::Computer, Page::Opponent]
    }
}

/// The two ways to play, as offered on the mode-select page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Computer,
    Opponent,
}

impl GameMode {
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Computer => "Play Against Computer",
            GameMode::Opponent => "Play Against Opponent",
        }
    }

    pub fn page(self) -> Page {
        match self {
            GameMode::Computer => Page::Computer,
            GameMode::Opponent => Page::Opponent,
        }
    }

    pub fn all() -> &'static [GameMode] {
        &[GameMode::Computer, GameMode::Opponent]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 4);

        let mut paths: Vec<&'static str> = all.iter().copied().map(Page::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), 4);

        for p in all {
            assert!(p.path().starts_with('/'));
            assert!(!p.title().trim().is_empty());
        }
    }

    #[test]
    fn every_mode_leads_to_a_playable_page() {
        let modes = GameMode::all();
        assert_eq!(modes.len(), 2);
        for m in modes {
            assert!(!m.label().trim().is_empty());
            assert!(matches!(m.page(), Page::Computer | Page::Opponent));
        }
    }
}
