//! Deterministic Bengali horoscope text.
//!
//! Every sign's text is a pure function of `(date key, sign, city)` plus
//! the day's [`CalendarInfo`](rashifal_vedic::CalendarInfo): the same
//! triple always yields the same bytes, in any process, on any machine.

pub mod seeded;
pub mod synth;
pub mod templates;

pub use seeded::SeededSequence;
pub use synth::{SignContent, sign_seed, synthesize_all, synthesize_sign};
pub use templates::{ADVICE, HEALTH, LEAD};
