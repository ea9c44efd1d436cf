use crate::domain::Genre;
use crate::genie::models::{
    GREETING_COMMAND, GREETING_KEYWORDS, Intent, RECOMMENDATION_COMMAND, RECOMMENDATION_KEYWORDS,
    Responses, THANKS_KEYWORDS,
};
use crate::genie::session::SessionState;
use crate::services::recommendation_service::{DEFAULT_LIMIT, Recommender};

/// Picks the canned reply for one chat turn
pub struct Responder {
    recommender: Recommender,
}

impl Responder {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Answer `message` and advance the conversation `state`.
    pub fn handle(&self, state: &mut SessionState, message: &str) -> String {
        // Exact commands win over everything, including a pending genre question
        if message == GREETING_COMMAND {
            return Responses::GREETING.to_string();
        }
        if message == RECOMMENDATION_COMMAND {
            return Responses::RECOMMENDATION.to_string();
        }

        if state.awaiting_genre {
            state.awaiting_genre = false;
            tracing::debug!("Treating reply as genre: {:?}", message);
            let books = self.recommender.recommend(Some(message), DEFAULT_LIMIT);
            return Responses::recommend_books(&books);
        }

        let intent = Self::detect_intent(message);
        tracing::debug!("Detected intent {:?}", intent);

        match intent {
            Intent::Recommendation => match Self::find_genre(message) {
                Some(genre) => {
                    tracing::debug!("Found genre token {}", genre);
                    let books = self
                        .recommender
                        .recommend(Some(genre.as_str()), DEFAULT_LIMIT);
                    Responses::recommend_books(&books)
                }
                None => {
                    state.awaiting_genre = true;
                    Responses::ASK_FOR_GENRE.to_string()
                }
            },
            other => Self::reply(other).to_string(),
        }
    }

    /// Fixed reply for an intent, without going through keyword matching.
    ///
    /// `Intent::Recommendation` maps to the fixed three-title reply.
    pub fn reply(intent: Intent) -> &'static str {
        match intent {
            Intent::Greeting => Responses::GREETING,
            Intent::Recommendation => Responses::RECOMMENDATION,
            Intent::Thanks => Responses::THANKS,
            Intent::Default => Responses::DEFAULT,
        }
    }

    /// Substring classification of the lower-cased message
    pub fn detect_intent(message: &str) -> Intent {
        let lower = message.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if contains_any(&RECOMMENDATION_KEYWORDS) {
            Intent::Recommendation
        } else if contains_any(&GREETING_KEYWORDS) {
            Intent::Greeting
        } else if contains_any(&THANKS_KEYWORDS) {
            Intent::Thanks
        } else {
            Intent::Default
        }
    }

    /// First genre, in canonical order, that appears as a whole token
    pub fn find_genre(message: &str) -> Option<Genre> {
        let lower = message.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        Genre::ALL
            .into_iter()
            .find(|genre| tokens.contains(&genre.as_str()))
    }
}
