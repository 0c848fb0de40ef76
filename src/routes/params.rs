use serde::Deserialize;
use utoipa::ToSchema;

/// Catalog filters, all optional and freely combinable. `sort` stays a raw
/// string at the HTTP surface: an unrecognized value means store order, not
/// a rejected request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub availability: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Price,
    Name,
}

impl SortBy {
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param {
            Some("price") => Some(SortBy::Price),
            Some("name") => Some(SortBy::Name),
            _ => None,
        }
    }
}

impl CatalogQuery {
    pub fn sort_by(&self) -> Option<SortBy> {
        SortBy::from_param(self.sort.as_deref())
    }

    /// The availability filter only ever means one thing: price > 0.
    pub fn available_only(&self) -> bool {
        self.availability.as_deref() == Some("available")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parses_known_values() {
        assert_eq!(SortBy::from_param(Some("price")), Some(SortBy::Price));
        assert_eq!(SortBy::from_param(Some("name")), Some(SortBy::Name));
    }

    #[test]
    fn unknown_sort_means_store_order() {
        assert_eq!(SortBy::from_param(Some("rating")), None);
        assert_eq!(SortBy::from_param(None), None);
    }

    #[test]
    fn availability_matches_exact_token_only() {
        let q = CatalogQuery {
            availability: Some("available".into()),
            ..Default::default()
        };
        assert!(q.available_only());

        let q = CatalogQuery {
            availability: Some("in_stock".into()),
            ..Default::default()
        };
        assert!(!q.available_only());
    }
}
