use serde::Deserialize;

/// Respuesta de lista: array plano o página `{results: [...]}` (DRF)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Page { results: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Page { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn bare_array_and_page_wrapper_decode_the_same() {
        let bare: Listing<Item> = serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        let page: Listing<Item> =
            serde_json::from_str(r#"{"count": 2, "next": null, "results": [{"id": 1}, {"id": 2}]}"#)
                .unwrap();
        assert_eq!(bare.into_vec(), page.into_vec());
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        let bare: Listing<Item> = serde_json::from_str("[]").unwrap();
        assert!(bare.into_vec().is_empty());
    }
}
