//! Static pricing page.

use crate::ui::app::Message;
use crate::ui::style;
use crate::ui::theme::OmniTheme;

use iced::widget::{button, column, container, row, text, Column, Space};
use iced::{Alignment, Element, Length};

struct Tier {
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

static TIERS: [Tier; 3] = [
    Tier {
        name: "Basic",
        price: "$29",
        blurb: "For new sellers getting started.",
        features: &[
            "Up to 50 products",
            "Connect 2 platforms",
            "Basic analytics",
            "Email support",
        ],
        featured: false,
    },
    Tier {
        name: "Premium",
        price: "$79",
        blurb: "For growing businesses and power sellers.",
        features: &[
            "Unlimited products",
            "Connect all platforms",
            "AI SEO Assistant",
            "Advanced analytics & reports",
            "Priority support",
        ],
        featured: true,
    },
    Tier {
        name: "Enterprise",
        price: "Custom",
        blurb: "For large agencies and brands.",
        features: &[
            "White-label solution",
            "Dedicated account manager",
            "Custom integrations",
            "API access",
        ],
        featured: false,
    },
];

pub fn view(theme: &OmniTheme) -> Element<'_, Message> {
    let title = text("Flexible Pricing for Every Seller")
        .size(28)
        .color(theme.text);
    let subtitle = text("Choose a plan that scales with your business. No hidden fees, cancel anytime.")
        .size(14)
        .color(theme.subtext);

    let mut cards = row![].spacing(16);
    for tier in &TIERS {
        cards = cards.push(build_tier(tier, theme));
    }

    let footnote = container(
        column![
            text("Success-Based Pricing").size(16).color(theme.text),
            text(
                "Prefer to pay as you go? We can also partner with you for a small percentage \
                 of sales generated through our platform. Contact us for more details.",
            )
            .size(13)
            .color(theme.subtext),
        ]
        .spacing(6),
    )
    .padding(20)
    .width(Length::Fill)
    .style(move |_| style::list_item(theme));

    column![
        column![title, subtitle].spacing(6).align_x(Alignment::Center),
        cards,
        footnote,
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn build_tier<'a>(tier: &'a Tier, theme: &'a OmniTheme) -> Element<'a, Message> {
    let name = text(tier.name).size(20).color(theme.text);
    let blurb = text(tier.blurb).size(13).color(theme.subtext);
    let price = row![
        text(tier.price).size(32).color(if tier.featured {
            theme.accent
        } else {
            theme.text
        }),
        text("/month").size(13).color(theme.subtext),
    ]
    .spacing(4)
    .align_y(Alignment::End);

    // The demo has no billing flow, so the button is inert.
    let choose = button(text("Choose Plan").size(14))
        .padding([10, 20])
        .width(Length::Fill)
        .style(move |_, status| {
            if tier.featured {
                style::primary_button(theme, status)
            } else {
                style::small_button(theme, status)
            }
        });

    let mut features = Column::new().spacing(8);
    for feature in tier.features {
        features = features.push(
            row![
                text("✓").size(13).color(theme.success),
                text(*feature).size(13).color(theme.text),
            ]
            .spacing(8),
        );
    }

    let card_style = if tier.featured {
        style::checklist_panel
    } else {
        style::card
    };

    container(
        column![
            name,
            blurb,
            Space::with_height(10),
            price,
            Space::with_height(14),
            choose,
            Space::with_height(14),
            features,
        ]
        .spacing(2),
    )
    .padding(24)
    .width(Length::Fill)
    .style(move |_| card_style(theme))
    .into()
}
