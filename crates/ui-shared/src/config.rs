use wasm_bindgen::JsCast;

/// `<meta name="api-base" content="...">` overrides the API origin
const META_SELECTOR: &str = r#"meta[name="api-base"]"#;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Prefix prepended to every request path; empty means same origin
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the page, falling back to same origin.
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(META_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content())
            .unwrap_or_default();
        Self::new(base)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_by_default() {
        assert_eq!(ApiConfig::default().url("/items"), "/items");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let cfg = ApiConfig::new("http://localhost:8080/");
        assert_eq!(cfg.url("/upload"), "http://localhost:8080/upload");
    }
}
