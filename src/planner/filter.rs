use crate::models::Product;

/// Which records a listing selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    /// Case-insensitive literal substring match on title OR description.
    TitleOrDescriptionContains(String),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::TitleOrDescriptionContains(needle) => {
                let needle = needle.to_lowercase();
                [&product.title, &product.description]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

pub fn build_filter(search: Option<&str>) -> ProductFilter {
    match search {
        None | Some("") => ProductFilter::All,
        Some(text) => ProductFilter::TitleOrDescriptionContains(text.to_string()),
    }
}

/// Escapes `\`, `%` and `_` so the text can sit inside an `ILIKE ... ESCAPE '\'`
/// pattern without acting as a wildcard.
pub fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewProduct;

    fn product(title: &str, description: &str) -> Product {
        NewProduct {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
        .with_id(1)
    }

    #[test]
    fn empty_search_matches_everything() {
        assert_eq!(build_filter(None), ProductFilter::All);
        assert_eq!(build_filter(Some("")), ProductFilter::All);
        assert!(ProductFilter::All.matches(&NewProduct::default().with_id(3)));
    }

    #[test]
    fn search_hits_title_or_description_ignoring_case() {
        let filter = build_filter(Some("LaMp"));
        assert!(filter.matches(&product("Desk lamp", "")));
        assert!(filter.matches(&product("chair", "goes well with a LAMP")));
        assert!(!filter.matches(&product("chair", "wooden")));
    }

    #[test]
    fn search_text_is_literal() {
        let filter = build_filter(Some(".*"));
        assert!(!filter.matches(&product("anything", "at all")));
        assert!(filter.matches(&product("glob .* here", "")));
    }

    #[test]
    fn missing_fields_never_match_a_search() {
        let filter = build_filter(Some("x"));
        assert!(!filter.matches(&NewProduct::default().with_id(1)));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("lamp"), "%lamp%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
