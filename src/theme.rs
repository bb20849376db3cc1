use serde::Serialize;

/// A selectable look for the editor page. Color tokens stay the same
/// across themes; each stylesheet maps them to its own swatches.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Theme {
    pub slug: &'static str,
    pub name: &'static str,
    pub stylesheet: &'static str,
}

pub static THEMES: [Theme; 2] = [
    Theme {
        slug: "daylight",
        name: "Daylight",
        stylesheet: "/static/css/daylight.css",
    },
    Theme {
        slug: "chalkboard",
        name: "Chalkboard",
        stylesheet: "/static/css/chalkboard.css",
    },
];

pub fn by_slug(slug: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.slug == slug)
}
