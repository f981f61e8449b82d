use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("unexpected episode format: {0:?}")]
    UnexpectedTitle(String),

    #[error("season {0:?} has neither a url nor inline episodes")]
    EmptySeason(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickError {
    #[error("cannot pick from an empty list of {0}")]
    Empty(&'static str),
}
