//! PESTEL sets and the per-product PESTEL map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PestelCategory;

use super::RatedFactor;

/// The factors recorded under one PESTEL category, plus its display collapse
/// state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFactors {
    #[serde(default)]
    pub factors: Vec<RatedFactor>,
    #[serde(default)]
    pub collapsed: bool,
}

impl CategoryFactors {
    /// Creates a category holding the given factors, expanded.
    pub fn with_factors(factors: Vec<RatedFactor>) -> Self {
        Self {
            factors,
            collapsed: false,
        }
    }
}

/// A complete PESTEL analysis: always exactly the six fixed categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PestelSet {
    pub political: CategoryFactors,
    pub economic: CategoryFactors,
    pub social: CategoryFactors,
    pub technological: CategoryFactors,
    pub environmental: CategoryFactors,
    pub legal: CategoryFactors,
}

impl PestelSet {
    /// Returns the factors for a category.
    pub fn category(&self, category: PestelCategory) -> &CategoryFactors {
        match category {
            PestelCategory::Political => &self.political,
            PestelCategory::Economic => &self.economic,
            PestelCategory::Social => &self.social,
            PestelCategory::Technological => &self.technological,
            PestelCategory::Environmental => &self.environmental,
            PestelCategory::Legal => &self.legal,
        }
    }

    /// Returns the factors for a category, mutably.
    pub fn category_mut(&mut self, category: PestelCategory) -> &mut CategoryFactors {
        match category {
            PestelCategory::Political => &mut self.political,
            PestelCategory::Economic => &mut self.economic,
            PestelCategory::Social => &mut self.social,
            PestelCategory::Technological => &mut self.technological,
            PestelCategory::Environmental => &mut self.environmental,
            PestelCategory::Legal => &mut self.legal,
        }
    }

    /// Iterates categories in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (PestelCategory, &CategoryFactors)> {
        PestelCategory::all()
            .iter()
            .map(move |&c| (c, self.category(c)))
    }

    /// Total factor count across all six categories.
    pub fn factor_count(&self) -> usize {
        self.iter().map(|(_, data)| data.factors.len()).sum()
    }

    /// Element-wise deep copy with every category expanded, used when a
    /// product inherits the company analysis.
    pub fn deep_clone_expanded(&self) -> PestelSet {
        let mut copy = self.clone();
        for &category in PestelCategory::all() {
            copy.category_mut(category).collapsed = false;
        }
        copy
    }
}

/// Per-product PESTEL copies, keyed by product name.
///
/// The key set must match the profile's key-products list once an add or
/// remove operation completes; the store enforces that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPestels(BTreeMap<String, PestelSet>);

impl ProductPestels {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, product: &str) -> bool {
        self.0.contains_key(product)
    }

    pub fn get(&self, product: &str) -> Option<&PestelSet> {
        self.0.get(product)
    }

    pub fn get_mut(&mut self, product: &str) -> Option<&mut PestelSet> {
        self.0.get_mut(product)
    }

    pub fn insert(&mut self, product: impl Into<String>, pestel: PestelSet) {
        self.0.insert(product.into(), pestel);
    }

    pub fn remove(&mut self, product: &str) -> Option<PestelSet> {
        self.0.remove(product)
    }

    /// Product names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PestelSet)> {
        self.0.iter().map(|(name, set)| (name.as_str(), set))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AxisRating;

    fn factor(name: &str) -> RatedFactor {
        RatedFactor::new(name, AxisRating::High, AxisRating::Moderate, AxisRating::Low)
    }

    #[test]
    fn default_set_has_six_empty_categories() {
        let set = PestelSet::default();
        assert_eq!(set.iter().count(), 6);
        assert_eq!(set.factor_count(), 0);
        assert!(!set.political.collapsed);
    }

    #[test]
    fn category_accessors_are_exhaustive() {
        let mut set = PestelSet::default();
        for &category in PestelCategory::all() {
            set.category_mut(category)
                .factors
                .push(factor(category.key()));
        }
        for &category in PestelCategory::all() {
            assert_eq!(set.category(category).factors.len(), 1);
        }
        assert_eq!(set.factor_count(), 6);
    }

    #[test]
    fn deep_clone_expanded_resets_collapse_state() {
        let mut set = PestelSet::default();
        set.legal.collapsed = true;
        set.legal.factors.push(factor("Data protection laws"));

        let copy = set.deep_clone_expanded();
        assert!(!copy.legal.collapsed);
        assert_eq!(copy.legal.factors.len(), 1);
        // source collapse state untouched
        assert!(set.legal.collapsed);
    }

    #[test]
    fn deep_clone_expanded_is_independent() {
        let mut set = PestelSet::default();
        set.social.factors.push(factor("Changing consumer preferences"));

        let mut copy = set.deep_clone_expanded();
        copy.social.factors[0].name = "Edited".to_string();
        copy.social.factors[0].gravity = AxisRating::VeryHigh;

        assert_eq!(set.social.factors[0].name, "Changing consumer preferences");
        assert_eq!(set.social.factors[0].gravity, AxisRating::High);
    }

    #[test]
    fn product_pestels_insert_and_remove() {
        let mut products = ProductPestels::new();
        products.insert("Cloud Software", PestelSet::default());
        assert!(products.contains("Cloud Software"));
        assert_eq!(products.len(), 1);

        assert!(products.remove("Cloud Software").is_some());
        assert!(products.is_empty());
        // removing an absent product is a no-op
        assert!(products.remove("Cloud Software").is_none());
    }

    #[test]
    fn product_pestels_names_are_sorted() {
        let mut products = ProductPestels::new();
        products.insert("Zeta", PestelSet::default());
        products.insert("Alpha", PestelSet::default());
        let names: Vec<_> = products.names().collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
