use crossterm::style::Color;

/// Design tokens for the labeltree terminal UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PENDING: &str = "○";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const SEARCH: &str = "⌕";
    pub const CURSOR: &str = "›";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PENDING: &str = "[..]";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const SEARCH: &str = "/";
    pub const CURSOR: &str = ">";
}

pub mod borders {
    pub const HORIZONTAL: &str = "─";
}

pub mod borders_ascii {
    pub const HORIZONTAL: &str = "-";
}

/// Icon set picked once from the unicode capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub partial: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub search: &'static str,
    pub cursor: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub pending: &'static str,
    pub warning: &'static str,
    pub rule: &'static str,
}

impl IconSet {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                partial: icons::PARTIAL,
                expanded: icons::EXPAND,
                collapsed: icons::COLLAPSE,
                search: icons::SEARCH,
                cursor: icons::CURSOR,
                success: icons::SUCCESS,
                error: icons::ERROR,
                pending: icons::PENDING,
                warning: icons::WARNING,
                rule: borders::HORIZONTAL,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                partial: icons_ascii::PARTIAL,
                expanded: icons_ascii::EXPAND,
                collapsed: icons_ascii::COLLAPSE,
                search: icons_ascii::SEARCH,
                cursor: icons_ascii::CURSOR,
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                pending: icons_ascii::PENDING,
                warning: icons_ascii::WARNING,
                rule: borders_ascii::HORIZONTAL,
            }
        }
    }
}
