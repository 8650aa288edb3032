//! Query parameters for list endpoints.
//!
//! Only keys the service recognises can be expressed. Absent options are
//! left out of the query entirely, never sent empty or defaulted.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rating,
    Date,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilters {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub sort_by: Option<SortKey>,
    pub order: Option<SortOrder>,
}

impl MovieFilters {
    /// Highest rated first.
    pub fn top_rated() -> Self {
        Self {
            sort_by: Some(SortKey::Rating),
            order: Some(SortOrder::Desc),
            ..Self::default()
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "genre", self.genre.as_deref());
        push_display(&mut pairs, "min_rating", self.min_rating);
        push_display(&mut pairs, "max_rating", self.max_rating);
        push_text(&mut pairs, "sort_by", self.sort_by.map(SortKey::as_str));
        push_text(&mut pairs, "order", self.order.map(SortOrder::as_str));
        pairs
    }
}

/// Title search against `/movies/search/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieSearch {
    pub title: Option<String>,
    /// Minimum rating, inclusive.
    pub rating: Option<f64>,
}

impl MovieSearch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            rating: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "title", self.title.as_deref());
        push_display(&mut pairs, "rating", self.rating);
        pairs
    }
}

/// Filters and paging for a movie's review list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewQuery {
    pub user: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub min_usefulness_vote: Option<u32>,
    pub min_total_votes: Option<u32>,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ReviewQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_text(&mut pairs, "user", self.user.as_deref());
        push_text(&mut pairs, "start_date", self.start_date.as_deref());
        push_text(&mut pairs, "end_date", self.end_date.as_deref());
        push_display(&mut pairs, "min_rating", self.min_rating);
        push_display(&mut pairs, "max_rating", self.max_rating);
        push_display(&mut pairs, "min_usefulness_vote", self.min_usefulness_vote);
        push_display(&mut pairs, "min_total_votes", self.min_total_votes);
        push_display(&mut pairs, "skip", self.skip);
        push_display(&mut pairs, "limit", self.limit);
        pairs
    }
}

fn push_text(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}

fn push_display<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}
