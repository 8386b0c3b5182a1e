//! State machine behind the application modal.
//!
//! `ApplicationFlow::handle` is pure: it mutates the flow and returns the
//! effects the caller must carry out (send the request, start a timer, alert
//! the user). Timers come back as events tagged with the `run_id` they were
//! scheduled under; anything tagged with an older id is dropped, which is how
//! closing the modal cancels a run in flight.
//!
//! Happy path, with `n` the transcript length in characters:
//!
//! ```text
//! Idle --Submit--> Sending --Delivered--> Typing --(n x 30 + 300 ms)--> Success --(2000 ms)--> Idle
//! ```

use api::ContactRequest;

use super::draft::{ApplicationDraft, DraftField};
use super::transcript::{compose, TypingReveal};

/// Delays of the post-submit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTiming {
    /// Time per revealed character.
    pub char_interval_ms: u64,
    /// Pause after the last character before success is shown.
    pub settle_ms: u64,
    /// How long the success notice stays up before the modal closes.
    pub dwell_ms: u64,
}

impl Default for FlowTiming {
    fn default() -> Self {
        Self {
            char_interval_ms: 30,
            settle_ms: 300,
            dwell_ms: 2000,
        }
    }
}

impl FlowTiming {
    /// Delay from delivery to the success notice for a transcript of `chars` characters.
    pub fn reveal_duration_ms(&self, chars: usize) -> u64 {
        chars as u64 * self.char_interval_ms + self.settle_ms
    }

    /// Delay from delivery to the modal closing.
    pub fn total_ms(&self, chars: usize) -> u64 {
        self.reveal_duration_ms(chars) + self.dwell_ms
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Sending,
    Typing(TypingReveal),
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    Open,
    Close,
    Edit(DraftField, String),
    Submit,
    Delivered { run_id: u64 },
    Rejected { run_id: u64, detail: String },
    Reveal { run_id: u64 },
    RevealDone { run_id: u64 },
    DwellDone { run_id: u64 },
}

impl FlowEvent {
    fn run_id(&self) -> Option<u64> {
        match self {
            Self::Delivered { run_id }
            | Self::Rejected { run_id, .. }
            | Self::Reveal { run_id }
            | Self::RevealDone { run_id }
            | Self::DwellDone { run_id } => Some(*run_id),
            Self::Open | Self::Close | Self::Edit(..) | Self::Submit => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    /// Post `request`; answer with `Delivered` or `Rejected` for `run_id`.
    Transmit { run_id: u64, request: ContactRequest },
    /// Feed `event` back after `delay_ms`.
    Schedule { delay_ms: u64, event: FlowEvent },
    /// Tell the user the submission failed.
    ReportFailure { detail: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFlow {
    open: bool,
    draft: ApplicationDraft,
    phase: Phase,
    run_id: u64,
    last_error: Option<String>,
    timing: FlowTiming,
}

impl ApplicationFlow {
    pub fn new(timing: FlowTiming) -> Self {
        Self {
            timing,
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Anything between a submit and the flow returning to idle.
    pub fn is_submitting(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn timing(&self) -> FlowTiming {
        self.timing
    }

    /// Transcript revealed so far, while typing.
    pub fn typed_text(&self) -> Option<&str> {
        match &self.phase {
            Phase::Typing(reveal) => Some(reveal.visible()),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.phase == Phase::Success
    }

    pub fn can_submit(&self) -> bool {
        self.open && self.phase == Phase::Idle && self.draft.is_complete()
    }

    pub fn handle(&mut self, event: FlowEvent) -> Vec<FlowEffect> {
        if let Some(run_id) = event.run_id() {
            if run_id != self.run_id {
                tracing::debug!("[application] dropping stale {event:?} (current run {})", self.run_id);
                return Vec::new();
            }
        }

        match event {
            FlowEvent::Open => {
                if !self.open {
                    self.open = true;
                    self.draft = ApplicationDraft::default();
                    self.last_error = None;
                }
                Vec::new()
            }
            FlowEvent::Close => {
                self.open = false;
                self.draft = ApplicationDraft::default();
                self.phase = Phase::Idle;
                self.last_error = None;
                self.run_id += 1;
                Vec::new()
            }
            FlowEvent::Edit(field, value) => {
                if self.open && self.phase == Phase::Idle {
                    self.draft.set(field, value);
                }
                Vec::new()
            }
            FlowEvent::Submit => {
                if !self.can_submit() {
                    return Vec::new();
                }
                self.run_id += 1;
                self.phase = Phase::Sending;
                self.last_error = None;
                vec![FlowEffect::Transmit {
                    run_id: self.run_id,
                    request: self.draft.to_request(),
                }]
            }
            FlowEvent::Delivered { run_id } => {
                if self.phase != Phase::Sending {
                    return Vec::new();
                }
                let reveal = TypingReveal::new(compose(&self.draft));
                let reveal_ms = self.timing.reveal_duration_ms(reveal.len());
                self.phase = Phase::Typing(reveal);
                vec![
                    FlowEffect::Schedule {
                        delay_ms: self.timing.char_interval_ms,
                        event: FlowEvent::Reveal { run_id },
                    },
                    FlowEffect::Schedule {
                        delay_ms: reveal_ms,
                        event: FlowEvent::RevealDone { run_id },
                    },
                ]
            }
            FlowEvent::Rejected { detail, .. } => {
                if self.phase != Phase::Sending {
                    return Vec::new();
                }
                // Modal and draft stay as they are so the user can retry.
                self.phase = Phase::Idle;
                self.last_error = Some(detail.clone());
                vec![FlowEffect::ReportFailure { detail }]
            }
            FlowEvent::Reveal { run_id } => {
                let Phase::Typing(reveal) = &mut self.phase else {
                    return Vec::new();
                };
                reveal.advance();
                if reveal.is_complete() {
                    Vec::new()
                } else {
                    vec![FlowEffect::Schedule {
                        delay_ms: self.timing.char_interval_ms,
                        event: FlowEvent::Reveal { run_id },
                    }]
                }
            }
            FlowEvent::RevealDone { run_id } => {
                if !matches!(self.phase, Phase::Typing(_)) {
                    return Vec::new();
                }
                self.phase = Phase::Success;
                vec![FlowEffect::Schedule {
                    delay_ms: self.timing.dwell_ms,
                    event: FlowEvent::DwellDone { run_id },
                }]
            }
            FlowEvent::DwellDone { .. } => {
                if self.phase != Phase::Success {
                    return Vec::new();
                }
                self.open = false;
                self.draft = ApplicationDraft::default();
                self.phase = Phase::Idle;
                self.last_error = None;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    /// Drives a flow against a virtual clock, carrying out its effects.
    struct Harness {
        flow: ApplicationFlow,
        now: u64,
        seq: u64,
        timers: BinaryHeap<Reverse<(u64, u64)>>,
        pending: Vec<(u64, FlowEvent)>,
        transmitted: Vec<(u64, ContactRequest)>,
        failures: Vec<String>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                flow: ApplicationFlow::default(),
                now: 0,
                seq: 0,
                timers: BinaryHeap::new(),
                pending: Vec::new(),
                transmitted: Vec::new(),
                failures: Vec::new(),
            }
        }

        fn send(&mut self, event: FlowEvent) {
            for effect in self.flow.handle(event) {
                match effect {
                    FlowEffect::Transmit { run_id, request } => {
                        self.transmitted.push((run_id, request))
                    }
                    FlowEffect::Schedule { delay_ms, event } => {
                        self.seq += 1;
                        self.timers.push(Reverse((self.now + delay_ms, self.seq)));
                        self.pending.push((self.seq, event));
                    }
                    FlowEffect::ReportFailure { detail } => self.failures.push(detail),
                }
            }
        }

        fn fill(&mut self, full_name: &str, phone: &str, question: &str) {
            self.send(FlowEvent::Open);
            self.send(FlowEvent::Edit(DraftField::FullName, full_name.into()));
            self.send(FlowEvent::Edit(DraftField::Phone, phone.into()));
            self.send(FlowEvent::Edit(DraftField::Question, question.into()));
        }

        /// Fire every timer due at or before `deadline`, in order.
        fn advance_to(&mut self, deadline: u64) {
            while let Some(Reverse((due, seq))) = self.timers.peek().copied() {
                if due > deadline {
                    break;
                }
                self.timers.pop();
                self.now = due;
                let idx = self
                    .pending
                    .iter()
                    .position(|(s, _)| *s == seq)
                    .expect("pending timer");
                let (_, event) = self.pending.swap_remove(idx);
                self.send(event);
            }
            self.now = deadline;
        }

        fn run_to_completion(&mut self) {
            while let Some(Reverse((due, _))) = self.timers.peek().copied() {
                self.advance_to(due);
            }
        }

        fn last_run(&self) -> u64 {
            self.transmitted.last().map(|(run, _)| *run).expect("a transmission")
        }
    }

    fn submitted() -> Harness {
        let mut h = Harness::new();
        h.fill("Ali Valiyev", "+998 90 123 45 67", "Kurs qachon boshlanadi?");
        h.send(FlowEvent::Submit);
        h
    }

    #[test]
    fn submit_transmits_normalised_request() {
        let h = submitted();
        assert_eq!(h.transmitted.len(), 1);
        let (_, request) = &h.transmitted[0];
        assert_eq!(request.phone_number, "+998901234567");
        assert_eq!(request.full_name, "Ali Valiyev");
        assert_eq!(h.flow.phase(), &Phase::Sending);
        assert!(h.flow.is_submitting());
    }

    #[test]
    fn incomplete_draft_is_not_submitted() {
        let mut h = Harness::new();
        h.fill("Ali", "  ", "Savol");
        h.send(FlowEvent::Submit);
        assert!(h.transmitted.is_empty());
        assert_eq!(h.flow.phase(), &Phase::Idle);
    }

    #[test]
    fn closed_modal_cannot_submit() {
        let mut h = Harness::new();
        h.send(FlowEvent::Edit(DraftField::FullName, "Ali".into()));
        h.send(FlowEvent::Submit);
        assert!(h.transmitted.is_empty());
        assert_eq!(h.flow.draft(), &ApplicationDraft::default());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut h = submitted();
        h.send(FlowEvent::Submit);
        assert_eq!(h.transmitted.len(), 1);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut h = submitted();
        h.send(FlowEvent::Edit(DraftField::FullName, "Someone else".into()));
        assert_eq!(h.flow.draft().full_name, "Ali Valiyev");
    }

    #[test]
    fn success_closes_after_reveal_settle_and_dwell() {
        let mut h = submitted();
        let run = h.last_run();
        let transcript = compose(h.flow.draft());
        let len = transcript.chars().count() as u64;

        h.send(FlowEvent::Delivered { run_id: run });
        assert_eq!(h.flow.typed_text(), Some(""));

        h.advance_to(30 * 10);
        let partial: String = transcript.chars().take(10).collect();
        assert_eq!(h.flow.typed_text(), Some(partial.as_str()));

        h.advance_to(len * 30 + 299);
        assert_eq!(h.flow.typed_text(), Some(transcript.as_str()));

        h.advance_to(len * 30 + 300);
        assert!(h.flow.is_success());
        assert!(h.flow.is_open());

        h.advance_to(len * 30 + 2299);
        assert!(h.flow.is_success());

        h.run_to_completion();
        assert_eq!(h.now, len * 30 + 2300);
        assert_eq!(h.now, FlowTiming::default().total_ms(len as usize));
        assert!(!h.flow.is_open());
        assert_eq!(h.flow.phase(), &Phase::Idle);
        assert_eq!(h.flow.draft(), &ApplicationDraft::default());
        assert!(h.failures.is_empty());
    }

    #[test]
    fn rejection_keeps_draft_and_modal_for_retry() {
        let mut h = submitted();
        let run = h.last_run();
        h.send(FlowEvent::Rejected {
            run_id: run,
            detail: "HTTP 500".into(),
        });

        assert_eq!(h.failures, vec!["HTTP 500".to_string()]);
        assert!(h.flow.is_open());
        assert!(!h.flow.is_submitting());
        assert_eq!(h.flow.last_error(), Some("HTTP 500"));
        assert_eq!(h.flow.draft().full_name, "Ali Valiyev");

        h.send(FlowEvent::Submit);
        assert_eq!(h.transmitted.len(), 2);
        assert!(h.last_run() > run);
        assert_eq!(h.flow.last_error(), None);
    }

    #[test]
    fn close_while_sending_ignores_late_response() {
        let mut h = submitted();
        let run = h.last_run();
        h.send(FlowEvent::Close);
        h.send(FlowEvent::Delivered { run_id: run });

        assert!(!h.flow.is_open());
        assert_eq!(h.flow.phase(), &Phase::Idle);
        assert!(h.timers.is_empty());
    }

    #[test]
    fn close_while_typing_cancels_timers() {
        let mut h = submitted();
        let run = h.last_run();
        h.send(FlowEvent::Delivered { run_id: run });
        h.advance_to(90);
        h.send(FlowEvent::Close);

        h.run_to_completion();
        assert!(!h.flow.is_open());
        assert_eq!(h.flow.phase(), &Phase::Idle);
        assert_eq!(h.flow.draft(), &ApplicationDraft::default());
    }

    #[test]
    fn close_during_success_then_reopen_is_unaffected_by_old_dwell() {
        let mut h = submitted();
        let run = h.last_run();
        h.send(FlowEvent::Delivered { run_id: run });
        let len = compose(h.flow.draft()).chars().count() as u64;
        h.advance_to(len * 30 + 300);
        assert!(h.flow.is_success());

        h.send(FlowEvent::Close);
        h.fill("Madina", "+998 91 000 00 00", "Yana savol");
        h.run_to_completion();

        assert!(h.flow.is_open());
        assert_eq!(h.flow.draft().full_name, "Madina");
    }

    #[test]
    fn stale_rejection_does_not_report() {
        let mut h = submitted();
        let run = h.last_run();
        h.send(FlowEvent::Close);
        h.send(FlowEvent::Rejected {
            run_id: run,
            detail: "timeout".into(),
        });
        assert!(h.failures.is_empty());
        assert_eq!(h.flow.last_error(), None);
    }

    #[test]
    fn open_resets_a_previously_closed_draft() {
        let mut h = Harness::new();
        h.fill("Ali", "1", "q");
        h.send(FlowEvent::Close);
        h.send(FlowEvent::Open);
        assert!(h.flow.is_open());
        assert_eq!(h.flow.draft(), &ApplicationDraft::default());
    }

    #[test]
    fn timing_helpers_add_up() {
        let timing = FlowTiming::default();
        assert_eq!(timing.reveal_duration_ms(10), 600);
        assert_eq!(timing.total_ms(10), 2600);
    }
}
