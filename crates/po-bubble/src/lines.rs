//! Phrase pools, one per bubble context.
//!
//! Pool lengths are deliberately coprime-ish with the cycle counts so long
//! sessions do not settle into the same phrase at the same wall-clock minute
//! for every actor.  Content is pure flavor text.

/// Desk musing — private thoughts while working.
pub const MUSING: &[&str] = &[
    "hmm...",
    "needs a refactor",
    "what if I cached this?",
    "tests first, tests first",
    "why is CI red again",
    "one more compile",
    "that name is wrong",
    "ship it?",
    "coffee soon",
    "almost there...",
    "is that a race?",
];

/// Water-cooler and visit small talk.
pub const BANTER: &[&str] = &[
    "did you see the deploy?",
    "standup ran long again",
    "nice fix yesterday!",
    "the build is green!",
    "have you tried turning it off?",
    "lunch later?",
    "that bug was wild",
];

/// Meeting-table chatter.
pub const MEETING: &[&str] = &[
    "let's sync on this",
    "action items?",
    "we should timebox it",
    "next slide",
    "good point",
    "let's take it offline",
    "who owns this?",
    "shipping friday",
];
