//! Category View Models

use serde::Serialize;

use crate::content::Category;

/// One category navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLink {
    pub name: String,
    /// None for the catch-all "All" entry
    pub slug: Option<String>,
    pub count: u32,
}

/// Category navigation: an "All" entry followed by non-empty categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryList {
    pub links: Vec<CategoryLink>,
}

impl CategoryList {
    pub fn from_categories(categories: &[Category]) -> Self {
        let all = CategoryLink {
            name: "All".to_string(),
            slug: None,
            count: categories
                .iter()
                .filter_map(|c| c.count)
                .fold(0u32, |total, n| total.saturating_add(n)),
        };

        let links = std::iter::once(all)
            .chain(categories.iter().filter_map(|category| {
                let count = category.count.filter(|n| *n > 0)?;
                Some(CategoryLink {
                    name: category.name.clone(),
                    slug: Some(category.slug.clone()),
                    count,
                })
            }))
            .collect();

        Self { links }
    }
}
