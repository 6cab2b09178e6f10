use std::collections::BTreeSet;

use crate::render::TemplateVariant;

/// Gallery entry describing one template variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateInfo {
    pub variant: TemplateVariant,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub premium: bool,
    pub rating: f32,
    pub downloads: u32,
    pub colors: [&'static str; 3],
}

pub const ALL_CATEGORIES: &str = "All";

const GALLERY: [TemplateInfo; 6] = [
    TemplateInfo {
        variant: TemplateVariant::Minimal,
        name: "Minimal Clean",
        description: "Simple and clean design perfect for professional services",
        category: "Professional",
        premium: false,
        rating: 4.8,
        downloads: 1250,
        colors: ["#000000", "#ffffff", "#f8f9fa"],
    },
    TemplateInfo {
        variant: TemplateVariant::Modern,
        name: "Modern Gradient",
        description: "Contemporary design with beautiful gradients and modern styling",
        category: "Modern",
        premium: true,
        rating: 4.9,
        downloads: 890,
        colors: ["#3b82f6", "#8b5cf6", "#f0f9ff"],
    },
    TemplateInfo {
        variant: TemplateVariant::Corporate,
        name: "Corporate Bold",
        description: "Bold and authoritative design ideal for corporate businesses",
        category: "Corporate",
        premium: true,
        rating: 4.7,
        downloads: 670,
        colors: ["#1f2937", "#ffffff", "#f3f4f6"],
    },
    TemplateInfo {
        variant: TemplateVariant::Elegant,
        name: "Elegant Serif",
        description: "Sophisticated design with elegant typography and subtle styling",
        category: "Elegant",
        premium: true,
        rating: 4.6,
        downloads: 450,
        colors: ["#e11d48", "#fdf2f8", "#f8fafc"],
    },
    TemplateInfo {
        variant: TemplateVariant::Creative,
        name: "Creative Studio",
        description: "Artistic and creative design perfect for design agencies",
        category: "Creative",
        premium: false,
        rating: 4.5,
        downloads: 320,
        colors: ["#f97316", "#fef3c7", "#fffbeb"],
    },
    TemplateInfo {
        variant: TemplateVariant::Tech,
        name: "Tech Startup",
        description: "Modern tech-focused design with clean lines and bold accents",
        category: "Technology",
        premium: true,
        rating: 4.8,
        downloads: 590,
        colors: ["#0891b2", "#67e8f9", "#f0fdff"],
    },
];

pub fn gallery() -> &'static [TemplateInfo] {
    &GALLERY
}

pub fn template_info(variant: TemplateVariant) -> &'static TemplateInfo {
    // GALLERY is laid out in TemplateVariant::ALL order
    &GALLERY[variant as usize]
}

/// Category names in gallery order, led by "All"
pub fn categories() -> Vec<&'static str> {
    let mut out = vec![ALL_CATEGORIES];
    for info in &GALLERY {
        if !out.contains(&info.category) {
            out.push(info.category);
        }
    }
    out
}

/// Entries in `category` (ignoring case); "All" keeps every entry
pub fn filter_templates(category: &str) -> Vec<&'static TemplateInfo> {
    GALLERY
        .iter()
        .filter(|t| {
            category.eq_ignore_ascii_case(ALL_CATEGORIES) || t.category.eq_ignore_ascii_case(category)
        })
        .collect()
}

/// Favorited templates, owned by whatever surface is browsing the gallery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites(BTreeSet<TemplateVariant>);

impl Favorites {
    /// Flip membership; returns true if `variant` is now a favorite
    pub fn toggle(&mut self, variant: TemplateVariant) -> bool {
        if self.0.remove(&variant) {
            false
        } else {
            self.0.insert(variant);
            true
        }
    }

    pub fn contains(&self, variant: TemplateVariant) -> bool {
        self.0.contains(&variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = TemplateVariant> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TemplateVariant> for Favorites {
    fn from_iter<I: IntoIterator<Item = TemplateVariant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
