/// One image record available for rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Opaque key, also the last path segment of the image URL.
    pub id: String,
    pub tags: Vec<String>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tags,
        }
    }

    pub fn image_url(&self, image_base_url: &str) -> String {
        image_url(image_base_url, &self.id)
    }
}

/// Builds `<image_base_url>/<id>`, tolerating a trailing slash on the base.
pub fn image_url(image_base_url: &str, id: &str) -> String {
    format!("{}/{}", image_base_url.trim_end_matches('/'), id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Like,
    Dislike,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::Like => "like",
            Decision::Dislike => "dislike",
        }
    }
}

/// A reversible rating decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub candidate: Candidate,
    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_joins_base_and_id() {
        let cat = Candidate::new("abc123", vec![]);
        assert_eq!(
            cat.image_url("https://cataas.com/cat"),
            "https://cataas.com/cat/abc123"
        );
    }

    #[test]
    fn image_url_strips_trailing_slash() {
        assert_eq!(
            image_url("https://cataas.com/cat/", "xyz"),
            "https://cataas.com/cat/xyz"
        );
    }
}
