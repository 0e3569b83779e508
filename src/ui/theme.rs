use iced::widget::{container, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Page background
pub const BACKGROUND: Color = Color::WHITE;

/// Primary text color (#525252)
pub const TEXT_PRIMARY: Color = Color {
    r: 0.322,
    g: 0.322,
    b: 0.322,
    a: 1.0,
};

/// Placeholder, match and "learn more" text (#A09F9F)
pub const TEXT_SECONDARY: Color = Color {
    r: 0.627,
    g: 0.624,
    b: 0.624,
    a: 1.0,
};

/// Error line under the search bar
pub const TEXT_ERROR: Color = Color {
    r: 0.72,
    g: 0.27,
    b: 0.25,
    a: 1.0,
};

/// Width shared by the search bar and result cards
pub const CARD_WIDTH: f32 = 360.0;

fn card_shadow() -> Shadow {
    Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.43,
        },
        offset: iced::Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    }
}

/// Style for the page wrapping the whole widget
pub fn page(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Rounded, shadowed card behind the search bar and each result
pub fn card(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        shadow: card_shadow(),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Result card under the pointer: same card, dimmed to 60%
pub fn card_hovered(theme: &Theme) -> container::Style {
    let style = card(theme);
    container::Style {
        shadow: Shadow {
            color: faded(style.shadow.color),
            ..style.shadow
        },
        text_color: Some(faded(TEXT_PRIMARY)),
        ..style
    }
}

/// Color at 60% of its opacity
pub fn faded(color: Color) -> Color {
    Color {
        a: color.a * 0.6,
        ..color
    }
}

/// Borderless text input; the surrounding card draws the frame
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = (theme, status);
    text_input::Style {
        background: Color::TRANSPARENT.into(),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color {
            r: TEXT_SECONDARY.r,
            g: TEXT_SECONDARY.g,
            b: TEXT_SECONDARY.b,
            a: 0.3,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hovered_card_is_dimmed() {
        let normal = card(&Theme::Light);
        let hovered = card_hovered(&Theme::Light);
        assert_eq!(hovered.text_color, Some(faded(TEXT_PRIMARY)));
        assert!((hovered.shadow.color.a - normal.shadow.color.a * 0.6).abs() < f32::EPSILON);
        assert_eq!(hovered.border.radius, normal.border.radius);
    }
}
