use crate::content::catalog::{CatalogItem, Category};

/// Holds the active gallery tab and derives the visible projects from it.
///
/// The selector never touches the catalog; `current` is recomputed from
/// scratch on every call and always keeps catalog definition order.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterSelector {
    catalog: &'static [CatalogItem],
    // None means an id that matches no tab was selected.
    active: Option<Category>,
}

impl FilterSelector {
    pub fn new(catalog: &'static [CatalogItem]) -> Self {
        Self {
            catalog,
            active: Some(Category::All),
        }
    }

    /// Selects by tab id. An unknown id is not an error, it just filters
    /// everything out.
    pub fn select_id(&mut self, id: &str) {
        self.active = Category::from_id(id);
    }

    pub fn is_active(&self, category: Category) -> bool {
        self.active == Some(category)
    }

    pub fn current(&self) -> Vec<&'static CatalogItem> {
        matching(self.catalog, self.active)
    }
}

pub fn matching(catalog: &[CatalogItem], filter: Option<Category>) -> Vec<&CatalogItem> {
    match filter {
        Some(Category::All) => catalog.iter().collect(),
        Some(category) => catalog.iter().filter(|item| item.category == category).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::PROJECTS;

    fn item(id: u32, category: Category) -> CatalogItem {
        CatalogItem {
            id,
            title: "t",
            subtitle: "s",
            image_path: "/assets/x.png",
            tags: &[],
            link: "#",
            category,
        }
    }

    static SMALL: [CatalogItem; 3] = [
        CatalogItem { id: 1, title: "a", subtitle: "", image_path: "", tags: &[], link: "#", category: Category::Mobile },
        CatalogItem { id: 2, title: "b", subtitle: "", image_path: "", tags: &[], link: "#", category: Category::Saas },
        CatalogItem { id: 3, title: "c", subtitle: "", image_path: "", tags: &[], link: "#", category: Category::Mobile },
    ];

    fn ids(items: &[&CatalogItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn small_catalog_end_to_end() {
        let mut selector = FilterSelector::new(&SMALL);
        selector.select_id("mobile");
        assert_eq!(ids(&selector.current()), vec![1, 3]);
        selector.select_id("saas");
        assert_eq!(ids(&selector.current()), vec![2]);
        selector.select_id("nonexistent");
        assert!(selector.current().is_empty());
        assert!(Category::TABS.iter().all(|tab| !selector.is_active(*tab)));
    }

    #[test]
    fn starts_on_all() {
        let selector = FilterSelector::new(&SMALL);
        assert!(selector.is_active(Category::All));
        assert_eq!(ids(&selector.current()), vec![1, 2, 3]);
    }

    #[test]
    fn every_tab_returns_exactly_its_category_in_order() {
        let mut selector = FilterSelector::new(PROJECTS);
        for tab in Category::TABS {
            selector.select_id(tab.id());
            let got = selector.current();
            let expected: Vec<&CatalogItem> = PROJECTS
                .iter()
                .filter(|p| tab == Category::All || p.category == tab)
                .collect();
            assert_eq!(got, expected, "tab {}", tab.id());
        }
    }

    #[test]
    fn client_tab_is_empty_with_shipped_catalog() {
        let mut selector = FilterSelector::new(PROJECTS);
        selector.select_id(Category::Client.id());
        assert!(selector.current().is_empty());
    }

    #[test]
    fn filtering_leaves_catalog_untouched() {
        let catalog = vec![item(7, Category::Saas), item(8, Category::Mobile)];
        let before = catalog.clone();
        let _ = matching(&catalog, Some(Category::Mobile));
        let _ = matching(&catalog, None);
        assert_eq!(catalog, before);
    }
}
