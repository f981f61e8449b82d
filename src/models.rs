use serde::{Deserialize, Serialize};

/// A single playable episode as listed by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Episode {
    pub text: String,
    pub url: String,
}

/// A season from the catalog listing.
///
/// Regular seasons carry a `url` pointing at their episode page. Seasons
/// rebuilt from the legacy show page carry their `episodes` inline instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Season {
    pub text: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub episodes: Option<Vec<Episode>>,
}

impl Episode {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

impl Season {
    pub fn linked(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            episodes: None,
        }
    }

    pub fn inline(text: impl Into<String>, episodes: Vec<Episode>) -> Self {
        Self {
            text: text.into(),
            url: None,
            episodes: Some(episodes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_json_field_names() {
        let season = Season::linked("The Simpsons Season 1", "https://example.test/s1");
        let json = serde_json::to_string(&season).unwrap();
        assert_eq!(
            json,
            r#"{"Text":"The Simpsons Season 1","Url":"https://example.test/s1","Episodes":null}"#
        );
    }

    #[test]
    fn test_season_missing_optional_fields() {
        let season: Season = serde_json::from_str(r#"{"Text":"Season 9"}"#).unwrap();
        assert_eq!(season.text, "Season 9");
        assert!(season.url.is_none());
        assert!(season.episodes.is_none());
    }
}
