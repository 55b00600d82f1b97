//! Static Catalog
//!
//! Display data bundled with the storefront. Backend products with the same
//! name borrow a description or image from here when they have none.

use crate::model::{Product, ProductCategory};

/// A product bundled with the front end
#[derive(Clone, Copy, Debug)]
pub struct StaticProduct {
    pub name: &'static str,
    pub category: ProductCategory,
    pub description: &'static str,
    pub is_available: bool,
    pub price: Option<u64>,
    pub image_url: &'static str,
}

const STATIC_PRODUCTS: &[StaticProduct] = &[
    StaticProduct {
        name: "HP Laptop 15",
        category: ProductCategory::Computers,
        description: "Powerful and reliable HP Laptop 15 with modern specifications perfect for work, study, and entertainment.",
        is_available: true,
        price: None,
        image_url: "/assets/generated/hp-laptop-15.dim_800x600.jpg",
    },
    StaticProduct {
        name: "Dell Inspiron Desktop",
        category: ProductCategory::Computers,
        description: "High-performance Dell Inspiron Desktop computer ideal for home and office use.",
        is_available: true,
        price: None,
        image_url: "/assets/generated/dell-inspiron-desktop.dim_800x600.jpg",
    },
    StaticProduct {
        name: "Canon Laser Printer",
        category: ProductCategory::Accessories,
        description: "Professional Canon Laser Printer delivering crisp, high-quality prints for your business or home office.",
        is_available: true,
        price: None,
        image_url: "/assets/generated/canon-laser-printer.dim_800x600.jpg",
    },
    StaticProduct {
        name: "TP-Link WiFi Router",
        category: ProductCategory::Networking,
        description: "Advanced TP-Link WiFi Router providing fast and stable internet connectivity throughout your home or office.",
        is_available: true,
        price: None,
        image_url: "/assets/generated/tp-link-wifi-router.dim_800x600.jpg",
    },
];

pub fn static_products() -> &'static [StaticProduct] {
    STATIC_PRODUCTS
}

pub fn find_by_name(name: &str) -> Option<&'static StaticProduct> {
    STATIC_PRODUCTS.iter().find(|p| p.name == name)
}

/// Fill a missing description or image from the bundled entry with the same name
pub fn enrich(mut product: Product) -> Product {
    if let Some(entry) = find_by_name(&product.name) {
        if product.description.is_empty() {
            product.description = entry.description.to_string();
        }
        if product.image_url.is_none() {
            product.image_url = Some(entry.image_url.to_string());
        }
    }
    product
}

/// Products bundled with the front end, numbered in catalog order
pub fn products() -> Vec<Product> {
    STATIC_PRODUCTS
        .iter()
        .zip(1u64..)
        .map(|(entry, id)| Product {
            id,
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            category: entry.category,
            is_available: entry.is_available,
            price: entry.price,
            image_url: Some(entry.image_url.to_string()),
        })
        .collect()
}
