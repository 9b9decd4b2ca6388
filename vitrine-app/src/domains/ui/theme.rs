//! Storefront color palette and widget styles.

use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Dark storefront palette.
pub struct StorefrontTheme;

impl StorefrontTheme {
    pub const BACKGROUND: Color = Color::from_rgb(0.078, 0.078, 0.078);
    pub const SURFACE: Color = Color::from_rgb(0.133, 0.133, 0.133);
    pub const SURFACE_RAISED: Color = Color::from_rgb(0.180, 0.180, 0.180);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const ACCENT: Color = Color::from_rgb(0.898, 0.035, 0.078);
    pub const MATCH_GREEN: Color = Color::from_rgb(0.275, 0.827, 0.412);

    /// Application theme handed to iced.
    pub fn theme() -> Theme {
        Theme::custom(
            "vitrine-dark".to_string(),
            Palette {
                background: Self::BACKGROUND,
                text: Self::TEXT_PRIMARY,
                primary: Self::ACCENT,
                success: Self::MATCH_GREEN,
                danger: Self::ACCENT,
            },
        )
    }
}

/// Poster placeholder tints, picked per show id so rows look varied
/// without shipping artwork.
const POSTER_TINTS: [Color; 6] = [
    Color::from_rgb(0.23, 0.12, 0.12),
    Color::from_rgb(0.12, 0.17, 0.23),
    Color::from_rgb(0.13, 0.21, 0.15),
    Color::from_rgb(0.22, 0.18, 0.10),
    Color::from_rgb(0.19, 0.12, 0.22),
    Color::from_rgb(0.11, 0.20, 0.21),
];

fn poster_tint(seed: u64) -> Color {
    POSTER_TINTS[(seed % POSTER_TINTS.len() as u64) as usize]
}

pub fn chevron_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => StorefrontTheme::SURFACE_RAISED,
        _ => StorefrontTheme::SURFACE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: StorefrontTheme::TEXT_PRIMARY,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Color::from_rgb(0.75, 0.03, 0.07)
        }
        button::Status::Disabled => StorefrontTheme::SURFACE_RAISED,
        _ => StorefrontTheme::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: StorefrontTheme::TEXT_PRIMARY,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Tab in the home header; the active tab reads brighter.
pub fn tab_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = if active || matches!(status, button::Status::Hovered) {
            StorefrontTheme::TEXT_PRIMARY
        } else {
            StorefrontTheme::TEXT_DIMMED
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
        }
    }
}

/// Frameless button used for clickable cards.
pub fn card_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: StorefrontTheme::TEXT_PRIMARY,
        border: Border::default(),
        shadow: Shadow::default(),
    }
}

pub fn poster_container(seed: u64) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(StorefrontTheme::TEXT_PRIMARY),
        background: Some(Background::Color(poster_tint(seed))),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn modal_container(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(StorefrontTheme::TEXT_PRIMARY),
        background: Some(Background::Color(StorefrontTheme::SURFACE)),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn skeleton_block(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: None,
        background: Some(Background::Color(StorefrontTheme::SURFACE)),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

pub fn avatar_container(seed: u64) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        text_color: Some(StorefrontTheme::TEXT_PRIMARY),
        background: Some(Background::Color(poster_tint(seed))),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}
