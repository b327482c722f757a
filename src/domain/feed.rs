#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: String,
}

impl FeedRecord {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            icon: icon.into(),
        }
    }

    /// Value of a single presentation role
    pub fn value(&self, role: FeedRole) -> FeedValue {
        match role {
            FeedRole::Id => FeedValue::Int(self.id),
            FeedRole::Title => FeedValue::Text(self.title.clone()),
            FeedRole::Url => FeedValue::Text(self.url.clone()),
            FeedRole::Icon => FeedValue::Text(self.icon.clone()),
        }
    }
}

/// Roles a view can read from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedRole {
    Id,
    Title,
    Url,
    Icon,
}

impl FeedRole {
    /// Name the view layer binds to
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedRole::Id => "feedid",
            FeedRole::Title => "feedtitle",
            FeedRole::Url => "feedurl",
            FeedRole::Icon => "feedicon",
        }
    }
}

impl std::fmt::Display for FeedRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedValue {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for FeedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedValue::Int(v) => write!(f, "{}", v),
            FeedValue::Text(v) => write!(f, "{}", v),
        }
    }
}
