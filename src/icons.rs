#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Wrench,
    Bolt,
    Hammer,
    Sparkles,
    Brush,
    Snowflake,
    Home,
    Calendar,
    User,
    Search,
    Menu,
    Close,
    Dashboard,
    Logout,
    MapPin,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Self::Wrench => "M14.7 6.3a4 4 0 0 0-5.4 5.4L3 18l3 3 6.3-6.3a4 4 0 0 0 5.4-5.4l-2.5 2.5-2.4-.6-.6-2.4z",
            Self::Bolt => "M13 2 4 14h7l-1 8 9-12h-7z",
            Self::Hammer => "M15 12 6 21l-3-3 9-9M17.6 9.4 21 6l-3-3-3.4 3.4M12 6l6 6",
            Self::Sparkles => "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9zM19 15l.9 2.1L22 18l-2.1.9L19 21l-.9-2.1L16 18l2.1-.9z",
            Self::Brush => "M18 2l4 4-9 9-4-4zM9 11l4 4c0 3-2 6-7 6 1-2 0-4 0-4 0-3 1-6 3-6z",
            Self::Snowflake => "M12 2v20M4.9 4.9l14.2 14.2M2 12h20M4.9 19.1 19.1 4.9",
            Self::Home => "M3 11 12 3l9 8v10h-6v-6H9v6H3z",
            Self::Calendar => "M4 5h16v16H4zM4 9h16M8 3v4M16 3v4",
            Self::User => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 21c0-4 4-6 8-6s8 2 8 6",
            Self::Search => "M11 18a7 7 0 1 0 0-14 7 7 0 0 0 0 14zM21 21l-5-5",
            Self::Menu => "M3 6h18M3 12h18M3 18h18",
            Self::Close => "M6 6l12 12M18 6 6 18",
            Self::Dashboard => "M3 3h8v10H3zM13 3h8v6h-8zM13 11h8v10h-8zM3 15h8v6H3z",
            Self::Logout => "M15 4h4v16h-4M10 17l5-5-5-5M15 12H3",
            Self::MapPin => "M12 22s7-7 7-12a7 7 0 0 0-14 0c0 5 7 12 7 12zM12 12a2 2 0 1 0 0-4 2 2 0 0 0 0 4z",
        }
    }

    pub fn svg(self) -> String {
        format!(
            r#"<svg class="icon" viewBox="0 0 24 24" width="20" height="20" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="{}"/></svg>"#,
            self.path()
        )
    }
}
