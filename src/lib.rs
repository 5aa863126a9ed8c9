//! Voice-call automation bridge: webhook in, transcription via a remote
//! speech-to-text service, AI reply, synthesized speech out.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
