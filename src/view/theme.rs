use ratatui::style::Color;

/// Colors used by every renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,

    // Editor colors
    pub editor_bg: Color,
    pub editor_fg: Color,
    pub cursor: Color,
    pub selection_bg: Color,
    pub current_line_bg: Color,
    pub line_number_fg: Color,

    // Tabs
    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
    pub tab_inactive_fg: Color,
    pub tab_inactive_bg: Color,
    pub tab_separator_bg: Color,

    // Menu bar
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_active_bg: Color,
    pub menu_active_fg: Color,
    pub menu_dropdown_bg: Color,
    pub menu_dropdown_fg: Color,
    pub menu_highlight_bg: Color,
    pub menu_highlight_fg: Color,
    pub menu_border_fg: Color,

    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    pub split_separator_fg: Color,
    pub directory_fg: Color,

    // Notification colors
    pub diagnostic_error_fg: Color,
    pub diagnostic_warning_fg: Color,
    pub diagnostic_info_fg: Color,
}

impl Theme {
    /// Dark theme (VSCode Dark+ inspired)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            editor_bg: Color::Rgb(30, 30, 30),
            editor_fg: Color::Rgb(212, 212, 212),
            cursor: Color::Rgb(82, 139, 255),
            selection_bg: Color::Rgb(38, 79, 120),
            current_line_bg: Color::Rgb(40, 40, 40),
            line_number_fg: Color::Rgb(100, 100, 100),

            tab_active_fg: Color::Yellow,
            tab_active_bg: Color::Blue,
            tab_inactive_fg: Color::White,
            tab_inactive_bg: Color::DarkGray,
            tab_separator_bg: Color::Rgb(45, 45, 48),

            menu_bg: Color::Rgb(60, 60, 65),
            menu_fg: Color::Rgb(220, 220, 220),
            menu_active_bg: Color::Rgb(60, 60, 60),
            menu_active_fg: Color::Rgb(255, 255, 255),
            menu_dropdown_bg: Color::Rgb(50, 50, 50),
            menu_dropdown_fg: Color::Rgb(220, 220, 220),
            menu_highlight_bg: Color::Rgb(70, 130, 180),
            menu_highlight_fg: Color::Rgb(255, 255, 255),
            menu_border_fg: Color::Rgb(100, 100, 100),

            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(30, 30, 30),

            split_separator_fg: Color::Rgb(100, 100, 100),
            directory_fg: Color::Rgb(86, 156, 214),

            diagnostic_error_fg: Color::Red,
            diagnostic_warning_fg: Color::Yellow,
            diagnostic_info_fg: Color::Blue,
        }
    }

    /// Light theme (VSCode Light+ inspired)
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            editor_bg: Color::Rgb(255, 255, 255),
            editor_fg: Color::Rgb(0, 0, 0),
            cursor: Color::Rgb(0, 0, 255),
            selection_bg: Color::Rgb(173, 214, 255),
            current_line_bg: Color::Rgb(245, 245, 245),
            line_number_fg: Color::Rgb(115, 115, 115),

            tab_active_fg: Color::Black,
            tab_active_bg: Color::Cyan,
            tab_inactive_fg: Color::Black,
            tab_inactive_bg: Color::Gray,
            tab_separator_bg: Color::Rgb(230, 230, 230),

            menu_bg: Color::Rgb(245, 245, 245),
            menu_fg: Color::Rgb(30, 30, 30),
            menu_active_bg: Color::Rgb(225, 225, 225),
            menu_active_fg: Color::Rgb(0, 0, 0),
            menu_dropdown_bg: Color::Rgb(248, 248, 248),
            menu_dropdown_fg: Color::Rgb(30, 30, 30),
            menu_highlight_bg: Color::Rgb(209, 226, 243),
            menu_highlight_fg: Color::Rgb(0, 0, 0),
            menu_border_fg: Color::Rgb(180, 180, 180),

            status_bar_fg: Color::Black,
            status_bar_bg: Color::Rgb(220, 220, 220),

            split_separator_fg: Color::Rgb(140, 140, 140),
            directory_fg: Color::Rgb(0, 0, 255),

            diagnostic_error_fg: Color::Red,
            diagnostic_warning_fg: Color::Rgb(191, 135, 0),
            diagnostic_info_fg: Color::Blue,
        }
    }

    /// Get a theme by name, defaults to dark if not found
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            _ => {
                tracing::warn!("Unknown theme '{}', using dark", name);
                Self::dark()
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("Dark").name, "dark");
        assert_eq!(Theme::from_name("unknown").name, "dark");
    }

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
