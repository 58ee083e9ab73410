//! Event adapters.
//!
//! - `ChannelTranscriptPublisher` - Bounded, non-blocking turn event sink
//! - `TranscriptRecorder` - Background service writing turns to chat history

mod transcript;

pub use transcript::{
    transcript_channel, ChannelTranscriptPublisher, TranscriptRecorder, DEFAULT_TRANSCRIPT_CAPACITY,
};
