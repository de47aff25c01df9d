#![allow(clippy::approx_constant)]

//! Custom theme definitions for the application - Dark Slate Theme

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Gradient, Shadow, Theme, Vector};

// --- Dark Slate Palette ---

// Page background
pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412);
pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722); // Secondary text
pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);

// Primary - Blue, accent - Purple
pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Hover state
pub const BLUE_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

// Audio-only button - Emerald
pub const EMERALD_400: Color = Color::from_rgb(0.204, 0.827, 0.600);
pub const EMERALD_900: Color = Color::from_rgb(0.024, 0.306, 0.231);

// Status
pub const GREEN_400: Color = Color::from_rgb(0.290, 0.871, 0.502);
pub const GREEN_800: Color = Color::from_rgb(0.086, 0.396, 0.204);
pub const YELLOW_400: Color = Color::from_rgb(0.980, 0.800, 0.082);
pub const YELLOW_800: Color = Color::from_rgb(0.522, 0.302, 0.055);
pub const RED_400: Color = Color::from_rgb(0.973, 0.443, 0.443);

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// Text colors for compatibility
pub const TEXT_SECONDARY: Color = SLATE_400;
pub const DANGER: Color = RED_400;

// --- Container Styles ---

pub struct PageContainer;

impl container::StyleSheet for PageContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(SLATE_900)),
            ..Default::default()
        }
    }
}

/// Translucent panel used for the input bar and the video card
pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(Color { a: 0.5, ..SLATE_800 })),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 24.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Dimmed backdrop behind the processing overlay
pub struct BackdropContainer;

impl container::StyleSheet for BackdropContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.8))),
            ..Default::default()
        }
    }
}

pub struct OverlayCard;

impl container::StyleSheet for OverlayCard {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(SLATE_800)),
            border: Border {
                color: SLATE_700,
                width: 1.0,
                radius: 24.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
                offset: Vector::new(0.0, 12.0),
                blur_radius: 32.0,
            },
        }
    }
}

/// Readiness pill in the header
pub enum StatusBadge {
    Online,
    Starting,
}

impl container::StyleSheet for StatusBadge {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let (text, border) = match self {
            Self::Online => (GREEN_400, GREEN_800),
            Self::Starting => (YELLOW_400, YELLOW_800),
        };
        container::Appearance {
            text_color: Some(text),
            background: None,
            border: Border {
                color: border,
                width: 1.0,
                radius: 999.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(BLUE_600)),
            text_color: WHITE,
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(BLUE_500)),
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(Color { a: 0.6, ..BLUE_600 })),
            text_color: SLATE_200,
            ..active
        }
    }
}

/// One entry of the quality grid
pub enum QualityButton {
    Video,
    Audio,
}

impl button::StyleSheet for QualityButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        match self {
            Self::Video => button::Appearance {
                background: Some(Background::Color(SLATE_700)),
                text_color: WHITE,
                border: Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            Self::Audio => button::Appearance {
                background: Some(Background::Color(Color { a: 0.3, ..EMERALD_900 })),
                text_color: EMERALD_400,
                border: Border {
                    color: Color { a: 0.3, ..EMERALD_400 },
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..Default::default()
            },
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        match self {
            Self::Video => button::Appearance {
                background: Some(Background::Color(SLATE_600)),
                ..active
            },
            Self::Audio => button::Appearance {
                background: Some(Background::Color(Color { a: 0.5, ..EMERALD_900 })),
                ..active
            },
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: SLATE_400,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: WHITE,
            background: Some(Background::Color(SLATE_700)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 12.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            icon_color: SLATE_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        WHITE
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color { a: 0.4, ..BLUE_400 }
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_600
    }
}

pub struct InputErrorStyle;

impl text_input::StyleSheet for InputErrorStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(Color::TRANSPARENT),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: RED_400,
            },
            icon_color: RED_400,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        SLATE_400
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        WHITE
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(0.973, 0.443, 0.443, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        SLATE_600
    }
}

/// Thin gradient bar under the headline
pub struct AccentBar;

impl container::StyleSheet for AccentBar {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Gradient(Gradient::Linear(
                iced::gradient::Linear::new(iced::Radians(1.571)) // 90 degrees
                    .add_stop(0.0, BLUE_400)
                    .add_stop(1.0, PURPLE_600),
            ))),
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
