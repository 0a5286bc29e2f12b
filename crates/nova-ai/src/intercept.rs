//! Special-intent interception.
//!
//! Recognized fixed-pattern inputs are answered locally, before any model
//! request is composed. Checks run in a fixed order and the first hit wins:
//! reserved literal token, station catalog, creator identity, image request.

use tracing::debug;

use crate::image_request::{extract_image_prompt, is_image_request};
use crate::text::TextView;

pub const DEFAULT_LITERAL_TOKEN: &str = "url";
pub const DEFAULT_LITERAL_REPLY: &str = "wss://voice.nova-assistant.dev/v1/connect";
pub const DEFAULT_CREATOR_REPLY: &str =
    "I was created by the Nova team, who built me to help you learn, create, and solve problems.";

const STATION_PHRASES: &[&str] = &[
    "voltway charging stations",
    "voltway station list",
];

const CREATOR_PHRASES: &[&str] = &[
    "who created you",
    "who made you",
    "who built you",
    "who developed you",
    "who designed you",
    "who programmed you",
    "who trained you",
    "who is your creator",
    "whos your creator",
    "who is your developer",
    "sino gumawa sayo",
    "sino gumawa sa iyo",
    "sino ang gumawa sayo",
    "sino ang gumawa sa iyo",
    "sinong gumawa sayo",
    "sino lumikha sayo",
];

pub const STATION_LIST: &str = "\
# VoltWay Charging Stations

## Private Stations
- **VoltWay HQ Garage** - 12 Level 2 ports, members only, open 24/7
- **Harborview Residences** - 6 Level 2 ports, residents and guests
- **Northgate Business Park** - 8 DC fast chargers (150 kW), tenant badge required
- **Lakeside Fleet Depot** - 20 Level 2 ports, fleet vehicles only

## Public Stations
- **Central Market Plaza** - 4 DC fast chargers (350 kW), pay per kWh
- **Riverside Mall, Level P2** - 10 Level 2 ports, free for the first 2 hours
- **City Hall East Lot** - 6 Level 2 ports, open 6:00-22:00
- **Airport Cell-Phone Lot** - 8 DC fast chargers (150 kW), open 24/7
";

/// Outcome of special-intent interception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialIntent {
    NoMatch,
    LiteralAnswer(String),
    /// Carries the extracted image subject.
    ImageRequest(String),
    CreatorQuery,
    StationList,
}

impl SpecialIntent {
    /// True when the model request must be skipped entirely.
    pub fn is_canned(&self) -> bool {
        matches!(
            self,
            Self::LiteralAnswer(_) | Self::CreatorQuery | Self::StationList
        )
    }
}

/// Table-driven matcher for local answers.
#[derive(Debug, Clone)]
pub struct Interceptor {
    literal_token: String,
    literal_reply: String,
    creator_reply: String,
}

impl Default for Interceptor {
    fn default() -> Self {
        Self {
            literal_token: DEFAULT_LITERAL_TOKEN.to_string(),
            literal_reply: DEFAULT_LITERAL_REPLY.to_string(),
            creator_reply: DEFAULT_CREATOR_REPLY.to_string(),
        }
    }
}

impl Interceptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_literal(mut self, token: impl Into<String>, reply: impl Into<String>) -> Self {
        self.literal_token = token.into().trim().to_lowercase();
        self.literal_reply = reply.into();
        self
    }

    pub fn with_creator_reply(mut self, reply: impl Into<String>) -> Self {
        self.creator_reply = reply.into();
        self
    }

    pub fn intercept(&self, user_text: &str) -> SpecialIntent {
        if user_text.trim().to_lowercase() == self.literal_token {
            debug!("literal token intercepted");
            return SpecialIntent::LiteralAnswer(self.literal_reply.clone());
        }

        let view = TextView::new(user_text);
        if view.mentions_any(STATION_PHRASES) {
            debug!("station list intercepted");
            return SpecialIntent::StationList;
        }
        if view.mentions_any(CREATOR_PHRASES) {
            debug!("creator query intercepted");
            return SpecialIntent::CreatorQuery;
        }
        if is_image_request(user_text) {
            let prompt = extract_image_prompt(user_text);
            debug!(prompt = %prompt, "image request intercepted");
            return SpecialIntent::ImageRequest(prompt);
        }

        SpecialIntent::NoMatch
    }

    /// The verbatim reply for canned matches; `None` for anything that still
    /// needs a model.
    pub fn canned_reply(&self, intent: &SpecialIntent) -> Option<String> {
        match intent {
            SpecialIntent::LiteralAnswer(text) => Some(text.clone()),
            SpecialIntent::CreatorQuery => Some(self.creator_reply.clone()),
            SpecialIntent::StationList => Some(STATION_LIST.to_string()),
            SpecialIntent::ImageRequest(_) | SpecialIntent::NoMatch => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_token_any_case_and_padding() {
        let interceptor = Interceptor::new();
        for input in ["url", "URL", "  Url \n", "\turl"] {
            assert_eq!(
                interceptor.intercept(input),
                SpecialIntent::LiteralAnswer(DEFAULT_LITERAL_REPLY.to_string()),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn literal_token_must_be_exact() {
        let interceptor = Interceptor::new();
        assert_eq!(
            interceptor.intercept("what is a url"),
            SpecialIntent::NoMatch
        );
        assert_eq!(interceptor.intercept("url?"), SpecialIntent::NoMatch);
    }

    #[test]
    fn custom_literal_token() {
        let interceptor = Interceptor::new().with_literal(" Endpoint ", "tcp://localhost:9000");
        assert_eq!(
            interceptor.intercept("ENDPOINT"),
            SpecialIntent::LiteralAnswer("tcp://localhost:9000".into())
        );
        assert_eq!(interceptor.intercept("url"), SpecialIntent::NoMatch);
    }

    #[test]
    fn station_list_phrases() {
        let interceptor = Interceptor::new();
        let intent = interceptor.intercept("Show me the VoltWay charging stations, please!");
        assert_eq!(intent, SpecialIntent::StationList);
        let reply = interceptor.canned_reply(&intent).unwrap();
        assert!(reply.contains("## Private Stations"));
        assert!(reply.contains("## Public Stations"));
    }

    #[test]
    fn creator_queries_return_attribution() {
        let interceptor = Interceptor::new();
        for input in [
            "Who created you?",
            "hey, who made you",
            "Who's your creator",
            "sino gumawa sayo",
            "Sino ang gumawa sa iyo?",
        ] {
            let intent = interceptor.intercept(input);
            assert_eq!(intent, SpecialIntent::CreatorQuery, "input: {input:?}");
            assert_eq!(
                interceptor.canned_reply(&intent).as_deref(),
                Some(DEFAULT_CREATOR_REPLY)
            );
        }
    }

    #[test]
    fn creator_check_precedes_image_check() {
        let interceptor = Interceptor::new();
        assert_eq!(
            interceptor.intercept("who made you? draw me a cat"),
            SpecialIntent::CreatorQuery
        );
    }

    #[test]
    fn image_request_carries_subject() {
        let interceptor = Interceptor::new();
        let intent = interceptor.intercept("Draw me a Red Panda");
        assert_eq!(intent, SpecialIntent::ImageRequest("Red Panda".into()));
        assert!(!intent.is_canned());
        assert_eq!(interceptor.canned_reply(&intent), None);
    }

    #[test]
    fn ordinary_text_is_no_match() {
        let interceptor = Interceptor::new();
        let intent = interceptor.intercept("explain recursion");
        assert_eq!(intent, SpecialIntent::NoMatch);
        assert!(!intent.is_canned());
    }
}
