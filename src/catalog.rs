//! Product catalog for OmniSell - domain records and seed data.
//!
//! This module contains the Platform and Product records plus the
//! catalog-level helpers (search, image URL derivation) that don't depend
//! on any UI framework.

/// A marketplace channel a seller can connect to.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub is_linked: bool,
    /// Brand color as a hex string, used for accents in the UI.
    pub color: String,
}

/// A product listing managed through the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    /// Ids of the platforms this product is published to.
    pub platform_ids: Vec<String>,
    pub image_url: String,
}

impl Product {
    /// Listing status label shown on the dashboard.
    pub fn status_label(&self) -> String {
        if self.platform_ids.is_empty() {
            "Draft".to_string()
        } else {
            format!("Live on {} platform(s)", self.platform_ids.len())
        }
    }
}

/// A validated, not-yet-stored product submission from the add-product form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub platform_ids: Vec<String>,
}

/// Derive a placeholder image URL from a product name.
///
/// Whitespace runs collapse to a single `-` and the seed is
/// percent-encoded, so the format stays stable for a given name.
pub fn image_url(name: &str) -> String {
    let slug = name.split_whitespace().collect::<Vec<_>>().join("-");
    format!(
        "https://picsum.photos/seed/{}/400/300",
        urlencoding::encode(&slug)
    )
}

/// Filter products by a case-insensitive substring match on name or
/// category. An empty term returns everything.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The fixed set of marketplace platforms. Only `is_linked` changes at
/// runtime; platforms are never created or removed.
pub fn seed_platforms() -> Vec<Platform> {
    vec![
        Platform {
            id: "shopee".to_string(),
            name: "Shopee".to_string(),
            is_linked: false,
            color: "#ee4d2d".to_string(),
        },
        Platform {
            id: "lazada".to_string(),
            name: "Lazada".to_string(),
            is_linked: false,
            color: "#0f146d".to_string(),
        },
        Platform {
            id: "tiktok".to_string(),
            name: "TikTok Shop".to_string(),
            is_linked: false,
            color: "#010101".to_string(),
        },
        Platform {
            id: "carousell".to_string(),
            name: "Carousell".to_string(),
            is_linked: false,
            color: "#ff2636".to_string(),
        },
    ]
}

/// Demo listings shown on first launch, newest first.
pub fn seed_products() -> Vec<Product> {
    let items = [
        (
            "prod-4",
            "Wireless Ergonomic Mouse",
            "Contoured wireless mouse with silent clicks and a 12-month battery life.",
            49.99,
            120,
            "Electronics",
            vec!["shopee", "lazada"],
        ),
        (
            "prod-3",
            "Handwoven Rattan Tote",
            "Locally handwoven rattan tote bag with a cotton lining and leather straps.",
            34.50,
            45,
            "Fashion",
            vec!["shopee"],
        ),
        (
            "prod-2",
            "Cold Brew Coffee Kit",
            "Everything you need for smooth cold brew at home: bottle, filter, and a bag of beans.",
            27.00,
            80,
            "Home & Living",
            vec!["lazada", "tiktok"],
        ),
        (
            "prod-1",
            "Minimalist Desk Organizer",
            "Bamboo desk organizer with compartments for pens, notes, and a phone stand.",
            19.99,
            0,
            "Office",
            vec![],
        ),
    ];

    items
        .into_iter()
        .map(
            |(id, name, description, price, quantity, category, platform_ids)| Product {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                price,
                quantity,
                category: category.to_string(),
                platform_ids: platform_ids.into_iter().map(str::to_string).collect(),
                image_url: image_url(name),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str) -> Product {
        Product {
            id: format!("prod-{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            quantity: 1,
            category: category.to_string(),
            platform_ids: Vec::new(),
            image_url: image_url(name),
        }
    }

    #[test]
    fn test_image_url_replaces_whitespace() {
        assert_eq!(
            image_url("Wireless Ergonomic Mouse"),
            "https://picsum.photos/seed/Wireless-Ergonomic-Mouse/400/300"
        );
    }

    #[test]
    fn test_image_url_collapses_whitespace_runs() {
        assert_eq!(
            image_url("Cold  Brew\tKit"),
            "https://picsum.photos/seed/Cold-Brew-Kit/400/300"
        );
    }

    #[test]
    fn test_image_url_is_deterministic() {
        assert_eq!(image_url("Red Mug"), image_url("Red Mug"));
    }

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let products = vec![product("Red Mug", "Home"), product("Blue Pen", "Office")];

        let hits = search(&products, "mug");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Red Mug");
    }

    #[test]
    fn test_search_matches_category() {
        let products = vec![product("Red Mug", "Home"), product("Blue Pen", "Office")];

        let hits = search(&products, "office");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Blue Pen");
    }

    #[test]
    fn test_empty_term_returns_all() {
        let products = vec![product("Red Mug", "Home"), product("Blue Pen", "Office")];
        assert_eq!(search(&products, "").len(), 2);
    }

    #[test]
    fn test_search_no_hits() {
        let products = vec![product("Red Mug", "Home")];
        assert!(search(&products, "keyboard").is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let platforms = seed_platforms();
        let products = seed_products();

        for (i, p) in platforms.iter().enumerate() {
            assert!(platforms[i + 1..].iter().all(|q| q.id != p.id));
        }
        for (i, p) in products.iter().enumerate() {
            assert!(products[i + 1..].iter().all(|q| q.id != p.id));
        }
    }

    #[test]
    fn test_seed_products_reference_seed_platforms() {
        let platform_ids: Vec<String> =
            seed_platforms().into_iter().map(|p| p.id).collect();

        for product in seed_products() {
            for id in &product.platform_ids {
                assert!(platform_ids.contains(id), "unknown platform id {}", id);
            }
        }
    }

    #[test]
    fn test_status_label() {
        let mut p = product("Red Mug", "Home");
        assert_eq!(p.status_label(), "Draft");

        p.platform_ids = vec!["shopee".to_string(), "lazada".to_string()];
        assert_eq!(p.status_label(), "Live on 2 platform(s)");
    }
}
