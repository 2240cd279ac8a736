//! Custom styles for OmniSell UI widgets.

use super::theme::OmniTheme;
use crate::notify::ToastKind;
use iced::widget::{button, container, scrollable, text_editor, text_input};
use iced::{Background, Border, Color};

/// Style for the window background.
pub fn app_container(theme: &OmniTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.background)),
        ..Default::default()
    }
}

/// Style for the navigation sidebar.
pub fn sidebar_container(theme: &OmniTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.surface)),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Style for a sidebar navigation button.
pub fn sidebar_button(theme: &OmniTheme, active: bool, status: button::Status) -> button::Style {
    if active {
        button::Style {
            background: Some(Background::Color(theme.accent)),
            text_color: Color::WHITE,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    } else {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(OmniTheme::with_alpha(theme.accent, 0.1)))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color: theme.subtext,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Style for a raised card section.
pub fn card(theme: &OmniTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.surface)),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the accent-tinted setup checklist panel.
pub fn checklist_panel(theme: &OmniTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(OmniTheme::with_alpha(theme.accent, 0.08))),
        border: Border {
            color: OmniTheme::with_alpha(theme.accent, 0.35),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Style for a row inside a list card.
pub fn list_item(theme: &OmniTheme) -> container::Style {
    container::Style {
        background: Some(Background::Color(OmniTheme::with_alpha(theme.text, 0.03))),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Style for a form text input.
pub fn form_input(theme: &OmniTheme, status: text_input::Status) -> text_input::Style {
    let border_color = if status == text_input::Status::Focused {
        OmniTheme::with_alpha(theme.accent, 0.6)
    } else {
        theme.border
    };

    text_input::Style {
        background: Background::Color(OmniTheme::with_alpha(theme.text, 0.04)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: theme.subtext,
        placeholder: theme.subtext,
        value: theme.text,
        selection: OmniTheme::with_alpha(theme.accent, 0.3),
    }
}

/// Style for the multi-line description editor.
pub fn form_editor(theme: &OmniTheme, status: text_editor::Status) -> text_editor::Style {
    let border_color = if status == text_editor::Status::Focused {
        OmniTheme::with_alpha(theme.accent, 0.6)
    } else {
        theme.border
    };

    text_editor::Style {
        background: Background::Color(OmniTheme::with_alpha(theme.text, 0.04)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: theme.subtext,
        placeholder: theme.subtext,
        value: theme.text,
        selection: OmniTheme::with_alpha(theme.accent, 0.3),
    }
}

fn solid_button(color: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => OmniTheme::with_alpha(color, 0.85),
        button::Status::Disabled => OmniTheme::with_alpha(color, 0.35),
        _ => color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the main accent action button.
pub fn primary_button(theme: &OmniTheme, status: button::Status) -> button::Style {
    solid_button(theme.accent, status)
}

/// Style for the publish call-to-action.
pub fn highlight_button(theme: &OmniTheme, status: button::Status) -> button::Style {
    solid_button(theme.highlight, status)
}

/// Style for a quiet secondary button.
pub fn small_button(theme: &OmniTheme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(OmniTheme::with_alpha(theme.text, 0.08)))
        }
        _ => Some(Background::Color(OmniTheme::with_alpha(theme.text, 0.04))),
    };

    button::Style {
        background,
        text_color: theme.text,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the connect/disconnect button on a platform row. Linked
/// platforms offer a disconnect (danger tint), unlinked ones a connect
/// (success tint).
pub fn link_button(theme: &OmniTheme, linked: bool, status: button::Status) -> button::Style {
    let color = if linked { theme.danger } else { theme.success };
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.25,
        _ => 0.15,
    };

    button::Style {
        background: Some(Background::Color(OmniTheme::with_alpha(color, alpha))),
        text_color: color,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a draft-platform toggle tile.
pub fn platform_tile(theme: &OmniTheme, selected: bool, enabled: bool) -> button::Style {
    let (background, border_color) = if !enabled {
        (OmniTheme::with_alpha(theme.subtext, 0.15), theme.border)
    } else if selected {
        (OmniTheme::with_alpha(theme.accent, 0.12), theme.accent)
    } else {
        (Color::TRANSPARENT, theme.border)
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if enabled { theme.text } else { theme.subtext },
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Style for a clickable product card.
pub fn card_button(theme: &OmniTheme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => {
            OmniTheme::with_alpha(theme.accent, 0.6)
        }
        _ => theme.border,
    };

    button::Style {
        background: Some(Background::Color(theme.surface)),
        text_color: theme.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the live/draft status pill on a product row.
pub fn status_pill(theme: &OmniTheme, live: bool) -> container::Style {
    let color = if live { theme.success } else { theme.highlight };
    container::Style {
        background: Some(Background::Color(OmniTheme::with_alpha(color, 0.15))),
        text_color: Some(color),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the toast banner.
pub fn toast_banner(theme: &OmniTheme, kind: ToastKind) -> container::Style {
    let color = match kind {
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.danger,
        ToastKind::Info => theme.accent,
    };

    container::Style {
        background: Some(Background::Color(OmniTheme::with_alpha(color, 0.12))),
        text_color: Some(color),
        border: Border {
            color: OmniTheme::with_alpha(color, 0.4),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the page scroll area.
pub fn page_scrollable(theme: &OmniTheme) -> scrollable::Style {
    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                color: OmniTheme::with_alpha(theme.subtext, 0.3),
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
            },
        },
        horizontal_rail: scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                color: OmniTheme::with_alpha(theme.subtext, 0.3),
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
            },
        },
        gap: None,
    }
}
