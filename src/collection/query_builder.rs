//! Search query construction for the `/search` endpoint.
//!
//! A query is free text plus optional filters. The free text becomes the `q`
//! parameter; without it the curated highlighted-works term is searched.

use std::fmt;

/// Term searched when no words are supplied.
pub const HIGHLIGHTED_TERM: &str = "isHighlight";

/// A search against the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    words: Option<String>,
    has_images: Option<bool>,
    is_highlight: Option<bool>,
    is_on_view: Option<bool>,
    title: Option<bool>,
    tags: Option<bool>,
    artist_or_culture: Option<bool>,
    department_id: Option<u64>,
    medium: Option<String>,
    geo_location: Option<String>,
    date_range: Option<(i32, i32)>,
}

impl SearchQuery {
    /// The curated highlighted-works search.
    pub fn highlighted() -> Self {
        Self::default()
    }

    /// Builds a query from space-separated words. `None` and `""` both fall
    /// back to the highlighted-works search.
    pub fn from_words(words: Option<&str>) -> Self {
        Self {
            words: words.filter(|w| !w.is_empty()).map(str::to_string),
            ..Self::default()
        }
    }

    pub fn has_images(mut self, value: bool) -> Self {
        self.has_images = Some(value);
        self
    }

    pub fn is_highlight(mut self, value: bool) -> Self {
        self.is_highlight = Some(value);
        self
    }

    pub fn is_on_view(mut self, value: bool) -> Self {
        self.is_on_view = Some(value);
        self
    }

    /// Restricts matching of the words to object titles.
    pub fn title(mut self, value: bool) -> Self {
        self.title = Some(value);
        self
    }

    /// Restricts matching of the words to subject keyword tags.
    pub fn tags(mut self, value: bool) -> Self {
        self.tags = Some(value);
        self
    }

    pub fn artist_or_culture(mut self, value: bool) -> Self {
        self.artist_or_culture = Some(value);
        self
    }

    pub fn department(mut self, department_id: u64) -> Self {
        self.department_id = Some(department_id);
        self
    }

    /// Medium filter; several media are separated with `|`.
    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    /// Location filter; several locations are separated with `|`.
    pub fn geo_location(mut self, location: impl Into<String>) -> Self {
        self.geo_location = Some(location.into());
        self
    }

    /// Inclusive year range. Negative years are BC.
    pub fn date_range(mut self, begin: i32, end: i32) -> Self {
        self.date_range = Some((begin, end));
        self
    }

    /// The query term: words joined by `+`, or the highlighted-works term.
    pub fn term(&self) -> String {
        match &self.words {
            Some(words) => words.split(' ').collect::<Vec<_>>().join("+"),
            None => HIGHLIGHTED_TERM.to_string(),
        }
    }

    /// Request parameters in wire order, filters first and `q` last.
    ///
    /// The `q` value keeps its spaces; form encoding turns each one into the
    /// `+` separator of [`term`](Self::term).
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        let flags = [
            ("hasImages", self.has_images),
            ("isHighlight", self.is_highlight),
            ("isOnView", self.is_on_view),
            ("title", self.title),
            ("tags", self.tags),
            ("artistOrCulture", self.artist_or_culture),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                params.push((name, value.to_string()));
            }
        }

        if let Some(id) = self.department_id {
            params.push(("departmentId", id.to_string()));
        }
        if let Some(medium) = &self.medium {
            params.push(("medium", medium.clone()));
        }
        if let Some(location) = &self.geo_location {
            params.push(("geoLocation", location.clone()));
        }
        if let Some((begin, end)) = self.date_range {
            params.push(("dateBegin", begin.to_string()));
            params.push(("dateEnd", end.to_string()));
        }

        let q = self
            .words
            .clone()
            .unwrap_or_else(|| HIGHLIGHTED_TERM.to_string());
        params.push(("q", q));
        params
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q={}", self.term())?;
        for (name, value) in self.params() {
            if name != "q" {
                write!(f, "&{}={}", name, value)?;
            }
        }
        Ok(())
    }
}
