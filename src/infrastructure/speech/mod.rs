mod openai_speech;

pub use openai_speech::OpenAiSpeechSynthesizer;
