use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentimentError {
    #[error("Sentiment analysis failed: {message}")]
    Analysis { message: String },
}
