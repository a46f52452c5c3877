//! # Navigation
//!
//! The shell's tab selector. Selection is plain assignment.

/// Top-level views of the logged-in shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Tab {
    #[default]
    Home,
    Chat,
    Weather,
    Market,
    Profile,
}

impl Tab {
    /// Display order of the bottom navigation bar.
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Chat, Tab::Weather, Tab::Market, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Chat => "Chat",
            Tab::Weather => "Weather",
            Tab::Market => "Market",
            Tab::Profile => "Profile",
        }
    }

    pub fn label_ml(self) -> &'static str {
        match self {
            Tab::Home => "ഹോം",
            Tab::Chat => "ചാറ്റ്",
            Tab::Weather => "കാലാവസ്ഥ",
            Tab::Market => "മാർക്കറ്റ്",
            Tab::Profile => "പ്രൊഫൈൽ",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab for a 1-based shortcut digit.
    pub fn from_shortcut(n: u8) -> Option<Tab> {
        match n {
            1..=5 => Some(Tab::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Default)]
pub struct Navigation {
    current: Tab,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Tab {
        self.current
    }

    /// Returns the previously selected tab.
    pub fn select(&mut self, tab: Tab) -> Tab {
        std::mem::replace(&mut self.current, tab)
    }
}
