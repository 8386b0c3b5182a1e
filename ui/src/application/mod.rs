//! Application form: draft values, the synthetic transcript and the
//! submit/typing/success state machine. The modal that renders it lives in
//! `components::application_modal`.

pub mod draft;
pub mod flow;
pub mod transcript;

pub use draft::{normalize_phone, ApplicationDraft, DraftField};
pub use flow::{ApplicationFlow, FlowEffect, FlowEvent, FlowTiming, Phase};
pub use transcript::{compose, TypingReveal};
