pub mod gemini;
pub mod request;

pub use gemini::{
    text_envelope, Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
    PromptFeedback,
};
pub use request::{IncomingRequest, OutgoingResponse, PromptPayload};
