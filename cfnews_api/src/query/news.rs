use super::{Filter, FilterSpec, Scalar};

/// Filters for the news endpoint.
///
/// News has no code tables; themes and keywords are forwarded verbatim.
#[derive(Clone, Debug, Default)]
pub struct NewsFilter {
    /// Words in the article title.
    pub title: Option<String>,
    /// Theme labels, passed through.
    pub themes: Vec<String>,
    /// Keywords, passed through.
    pub keywords: Vec<String>,
    /// Publication start date, `YYYY-MM-DD`. Note the format differs from
    /// the operations endpoint and is passed through unvalidated.
    pub date_from: Option<String>,
    /// Publication end date, `YYYY-MM-DD`. Passed through unvalidated.
    pub date_to: Option<String>,
}

impl NewsFilter {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.themes.push(theme.to_string());
        self
    }
    pub fn with_themes(mut self, themes: &[String]) -> Self {
        self.themes.extend_from_slice(themes);
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }
    pub fn with_keywords(mut self, keywords: &[String]) -> Self {
        self.keywords.extend_from_slice(keywords);
        self
    }

    pub fn with_date_from(mut self, date_from: &str) -> Self {
        self.date_from = Some(date_from.to_string());
        self
    }
    pub fn with_date_to(mut self, date_to: &str) -> Self {
        self.date_to = Some(date_to.to_string());
        self
    }
}

impl Filter for NewsFilter {
    fn to_spec(&self) -> FilterSpec {
        let mut spec = FilterSpec::new();
        if let Some(title) = &self.title {
            spec.insert("title", title.as_str());
        }
        if !self.themes.is_empty() {
            spec.insert_list(
                "theme",
                self.themes
                    .iter()
                    .map(|value| Scalar::Text(value.clone()))
                    .collect(),
            );
        }
        if !self.keywords.is_empty() {
            spec.insert_list(
                "keyword",
                self.keywords
                    .iter()
                    .map(|value| Scalar::Text(value.clone()))
                    .collect(),
            );
        }
        if let Some(date_from) = &self.date_from {
            spec.insert("date_start", date_from.as_str());
        }
        if let Some(date_to) = &self.date_to {
            spec.insert("date_end", date_to.as_str());
        }
        spec
    }
}
