use askama::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
        }
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/button.html")]
pub struct Button {
    class: &'static str,
    label: String,
    href: Option<String>,
}

impl Button {
    pub fn link(label: impl Into<String>, href: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            class: variant.class(),
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn submit(label: impl Into<String>, variant: ButtonVariant) -> Self {
        Self {
            class: variant.class(),
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/card.html")]
pub struct Card {
    title: Option<String>,
    body: String,
}

impl Card {
    pub fn new(title: Option<String>, body: String) -> Self {
        Self { title, body }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Self::Neutral => "badge badge-neutral",
            Self::Success => "badge badge-success",
            Self::Warning => "badge badge-warning",
            Self::Danger => "badge badge-danger",
            Self::Info => "badge badge-info",
        }
    }
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/badge.html")]
pub struct Badge {
    class: &'static str,
    label: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: Tone) -> Self {
        Self {
            class: tone.class(),
            label: label.into(),
        }
    }
}

const AVATAR_COLORS: [&str; 8] = [
    "#c66a2d", "#2d7dc6", "#2da36b", "#8a4fc6", "#c63d5a", "#c6a02d", "#3d9fa8", "#6b6f7a",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    Large,
}

/// Photo when one is set, otherwise initials on a colour derived from the name.
#[derive(Template, Clone, Debug)]
#[template(path = "components/avatar.html")]
pub struct Avatar {
    name: String,
    image: Option<String>,
    initials: String,
    color: &'static str,
    class: &'static str,
}

impl Avatar {
    pub fn new(name: &str, image: Option<&str>, size: AvatarSize) -> Self {
        Self {
            name: name.to_string(),
            image: image.map(str::to_string),
            initials: initials(name),
            color: color_for(name),
            class: match size {
                AvatarSize::Small => "avatar avatar-sm",
                AvatarSize::Large => "avatar avatar-lg",
            },
        }
    }
}

pub fn initials(name: &str) -> String {
    let initials = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// FNV-1a over the name bytes.
fn color_for(name: &str) -> &'static str {
    let hash = name.bytes().fold(0x811c_9dc5_u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    });
    AVATAR_COLORS[hash as usize % AVATAR_COLORS.len()]
}

#[derive(Template, Clone, Debug)]
#[template(path = "components/container.html")]
pub struct Container {
    body: String,
}

impl Container {
    pub fn new(body: String) -> Self {
        Self { body }
    }
}

/// Five-star strip, e.g. `★★★★☆` for 4.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
