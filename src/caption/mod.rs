//! External captioning collaborator. The pipeline takes any [`Captioner`]
//! handle by reference; the stock implementation speaks the OpenAI-compatible
//! chat-completions API.
pub mod openai;

pub use openai::OpenAiCaptioner;

use crate::error::Result;

/// Fixed instruction sent with every image: one detailed sentence, prefixed
/// with an artistic trigger word, suffixed with `, [STYLE] style`.
pub const CAPTION_PROMPT: &str = "Analyze this image and provide a single, detailed sentence. Begin with a relevant artistic TRIGGER WORD (e.g., 'Photograph', 'Digital Art', 'Illustration', etc.). Describe the main subject, key visual elements, composition, and notable details. End the sentence with ', [ARTISTIC STYLE] style' where [ARTISTIC STYLE] best matches the image's aesthetic (e.g., 'minimalist', 'vintage', 'contemporary', etc.).";

/// Produces one caption per normalized JPEG. Implementations receive the
/// exact bytes persisted to the gallery directory.
pub trait Captioner {
    fn caption_jpeg(&self, jpeg: &[u8]) -> Result<String>;
}
