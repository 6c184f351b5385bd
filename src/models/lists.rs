//! Index pages
//!
//! Calling an endpoint without an id or name returns one page of references
//! to the resources it holds. `next` and `previous` link the neighbouring
//! pages; they are exposed as-is and never followed automatically.

use serde::{Deserialize, Serialize};

use super::commons::{ApiResource, NamedApiResource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    /// Total number of resources behind the endpoint
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedApiResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<ApiResource>,
}

impl NamedApiResourceList {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn names(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.name.as_str()).collect()
    }
}

impl ApiResourceList {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Ids of the resources on this page, skipping unparseable URLs
    pub fn ids(&self) -> Vec<u32> {
        self.results.iter().filter_map(ApiResource::id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_page_has_no_previous() {
        let page: NamedApiResourceList = serde_json::from_value(json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon/?offset=2&limit=2",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }))
        .unwrap();

        assert!(page.has_next());
        assert!(page.previous.is_none());
        assert_eq!(page.names(), vec!["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn test_unnamed_page_ids() {
        let page: ApiResourceList = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"url": "https://pokeapi.co/api/v2/machine/1/"},
                {"url": "https://pokeapi.co/api/v2/machine/2/"}
            ]
        }))
        .unwrap();

        assert!(!page.has_next());
        assert_eq!(page.ids(), vec![1, 2]);
    }
}
