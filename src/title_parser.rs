use std::collections::HashMap;

use anyhow::Result;
use regex::Regex;

use crate::error::ScrapeError;
use crate::models::{Episode, Season};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    pub season: String,
    pub episode: String,
    pub name: String,
}

/// Recovers season and episode numbers from the free-text titles of the
/// legacy show page, where every episode of every season sits in one list.
#[derive(Debug)]
pub struct TitleParser {
    show: String,
    excluded_title: String,
    season_episode_pattern: Regex,
    concat_pattern: Regex,
}

impl TitleParser {
    pub fn new(show: &str) -> Result<Self> {
        let escaped = regex::escape(show);

        // "The Simpsons Season 3 Episode 12 – Colonel Homer"
        let season_episode_pattern = Regex::new(&format!(
            r"{escaped} Season (?P<season>[0-9]+) Episode (?P<episode>[0-9]+) [–-] (?P<name>.*)"
        ))?;

        // "The Simpsons Episode 504 Treehouse of Horror III"
        let concat_pattern = Regex::new(&format!(
            r"{escaped} Episode (?P<season>[0-9])(?P<episode>[0-9]{{2}}) (?P<name>.*)"
        ))?;

        Ok(Self {
            show: show.to_string(),
            excluded_title: format!("{show} Movie"),
            season_episode_pattern,
            concat_pattern,
        })
    }

    pub fn is_excluded(&self, title: &str) -> bool {
        title == self.excluded_title
    }

    pub fn parse(&self, title: &str) -> Result<ParsedTitle, ScrapeError> {
        let captures = self
            .season_episode_pattern
            .captures(title)
            .or_else(|| self.concat_pattern.captures(title))
            .ok_or_else(|| ScrapeError::UnexpectedTitle(title.to_string()))?;

        let group = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        Ok(ParsedTitle {
            season: group("season"),
            episode: group("episode"),
            name: group("name"),
        })
    }

    /// Groups `(title, url)` anchors into seasons by parsed season number.
    ///
    /// Seasons come out in the order their number first appears.
    pub fn merge<I>(&self, anchors: I) -> Result<Vec<Season>, ScrapeError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut seasons: Vec<Season> = Vec::new();
        let mut index_by_number: HashMap<String, usize> = HashMap::new();

        for (title, url) in anchors {
            if self.is_excluded(&title) {
                tracing::debug!(title = %title, "skipping excluded title");
                continue;
            }

            let parsed = self.parse(&title)?;
            let episode = Episode::new(parsed.name, url);

            match index_by_number.get(&parsed.season) {
                Some(&index) => {
                    seasons[index]
                        .episodes
                        .get_or_insert_with(Vec::new)
                        .push(episode);
                }
                None => {
                    index_by_number.insert(parsed.season.clone(), seasons.len());
                    seasons.push(Season::inline(
                        format!("{} Season {}", self.show, parsed.season),
                        vec![episode],
                    ));
                }
            }
        }

        Ok(seasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> TitleParser {
        TitleParser::new("The Simpsons").unwrap()
    }

    #[test]
    fn test_parse_season_episode_form() {
        let parsed = parser()
            .parse("The Simpsons Season 3 Episode 12 – Colonel Homer")
            .unwrap();
        assert_eq!(parsed.season, "3");
        assert_eq!(parsed.episode, "12");
        assert_eq!(parsed.name, "Colonel Homer");
    }

    #[test]
    fn test_parse_concatenated_form() {
        let parsed = parser()
            .parse("The Simpsons Episode 504 Treehouse of Horror III")
            .unwrap();
        assert_eq!(parsed.season, "5");
        assert_eq!(parsed.episode, "04");
        assert_eq!(parsed.name, "Treehouse of Horror III");
    }

    #[test]
    fn test_parse_hyphen_separator() {
        let parsed = parser()
            .parse("Watch The Simpsons Season 10 Episode 1 - Lard of the Dance")
            .unwrap();
        assert_eq!(parsed.season, "10");
        assert_eq!(parsed.episode, "1");
        assert_eq!(parsed.name, "Lard of the Dance");
    }

    #[test]
    fn test_parse_unexpected_format() {
        let err = parser().parse("The Simpsons Shorts Collection").unwrap_err();
        assert!(matches!(err, ScrapeError::UnexpectedTitle(_)));
    }

    #[test]
    fn test_show_name_is_escaped() {
        let parser = TitleParser::new("Who? (US)").unwrap();
        let parsed = parser.parse("Who? (US) Season 2 Episode 3 – Pilot").unwrap();
        assert_eq!(parsed.season, "2");
        assert!(parser.parse("Who US Season 2 Episode 3 – Pilot").is_err());
    }
}
