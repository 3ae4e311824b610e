//! One-shot prompt sessions bridging a read request to its eventual value.
//!
//! A [`PromptSession`] is created when a read is requested and settled later
//! by the keystroke dispatcher: exactly one of `resolve` or `reject` takes
//! effect, and any further settle calls are no-ops. The tty never blocks on
//! a session it created; the code that requested the read calls [`wait`]
//! (or [`try_result`]) to pick up the value.
//!
//! [`wait`]: PromptSession::wait
//! [`try_result`]: PromptSession::try_result

use std::sync::{Arc, Condvar, Mutex};

use crate::error::SessionError;

/// Observable lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Awaiting `resolve` or `reject`.
    Pending,
    /// Settled with a value that has not been taken yet.
    Resolved,
    /// Settled with a rejection.
    Rejected,
    /// The resolved value was consumed by `wait`/`try_result`.
    Taken,
}

enum State<T> {
    Pending,
    Resolved(T),
    Rejected(SessionError),
    Taken,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    settled: Condvar,
    // First-fire hook run when the session resolves (not when it rejects);
    // the tty installs one that clears its stored prompt prefixes.
    on_resolve: Mutex<Option<Box<dyn FnOnce() + Send>>>,
}

/// A single-producer, single-consumer deferred result.
///
/// Clones share the same underlying slot: typically the dispatcher keeps
/// one clone to settle and the read requester keeps another to wait on.
/// This is intentionally not a general pub/sub primitive: there is one
/// value and one consumer.
pub struct PromptSession<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for PromptSession<T> {
    fn clone(&self) -> Self {
        PromptSession {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for PromptSession<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PromptSession<T> {
    /// Create a pending session.
    pub fn new() -> Self {
        PromptSession {
            shared: Arc::new(Shared {
                state: Mutex::new(State::Pending),
                settled: Condvar::new(),
                on_resolve: Mutex::new(None),
            }),
        }
    }

    /// Create a pending session that runs `hook` once, on resolution only.
    pub(crate) fn with_resolve_hook(hook: impl FnOnce() + Send + 'static) -> Self {
        let session = Self::new();
        *session.shared.on_resolve.lock().unwrap() = Some(Box::new(hook));
        session
    }

    /// Settle the session with `value`.
    ///
    /// The first settle call wins; resolving an already-settled session
    /// does nothing.
    pub fn resolve(&self, value: T) {
        {
            let mut state = self.shared.state.lock().unwrap();
            if !matches!(*state, State::Pending) {
                return;
            }
            *state = State::Resolved(value);
        }
        if let Some(hook) = self.shared.on_resolve.lock().unwrap().take() {
            hook();
        }
        self.shared.settled.notify_all();
    }

    /// Settle the session as an abandoned read.
    ///
    /// Like [`resolve`](Self::resolve), only the first settle call takes
    /// effect. The resolve hook is not run on rejection.
    pub fn reject(&self, reason: impl Into<String>) {
        {
            let mut state = self.shared.state.lock().unwrap();
            if !matches!(*state, State::Pending) {
                return;
            }
            *state = State::Rejected(SessionError::abandoned(reason));
        }
        self.shared.settled.notify_all();
    }

    /// Block until the session settles and take the value.
    ///
    /// A second `wait` after the value was taken returns
    /// [`SessionError::AlreadyTaken`]; waiting on a rejected session keeps
    /// returning the rejection.
    pub fn wait(&self) -> Result<T, SessionError> {
        let mut state = self.shared.state.lock().unwrap();
        while matches!(*state, State::Pending) {
            state = self.shared.settled.wait(state).unwrap();
        }
        Self::take(&mut state)
    }

    /// Non-blocking variant of [`wait`](Self::wait): `None` while pending.
    pub fn try_result(&self) -> Option<Result<T, SessionError>> {
        let mut state = self.shared.state.lock().unwrap();
        if matches!(*state, State::Pending) {
            return None;
        }
        Some(Self::take(&mut state))
    }

    /// Current lifecycle state, without consuming anything.
    pub fn status(&self) -> SessionStatus {
        match *self.shared.state.lock().unwrap() {
            State::Pending => SessionStatus::Pending,
            State::Resolved(_) => SessionStatus::Resolved,
            State::Rejected(_) => SessionStatus::Rejected,
            State::Taken => SessionStatus::Taken,
        }
    }

    /// Whether the session is still awaiting settlement.
    pub fn is_pending(&self) -> bool {
        self.status() == SessionStatus::Pending
    }

    fn take(state: &mut State<T>) -> Result<T, SessionError> {
        match std::mem::replace(state, State::Taken) {
            State::Resolved(value) => Ok(value),
            State::Rejected(err) => {
                // Rejections stay observable on repeat waits.
                *state = State::Rejected(err.clone());
                Err(err)
            }
            State::Taken => Err(SessionError::AlreadyTaken),
            State::Pending => unreachable!("take() called on a pending session"),
        }
    }
}

/// Handle returned by a line read: the prefixes in effect plus the session
/// the dispatcher settles with the completed line.
pub struct ActivePrompt {
    pub prompt_prefix: String,
    pub continuation_prompt_prefix: String,
    pub session: PromptSession<String>,
}

/// Handle returned by a single-character read.
///
/// A pending char read takes keystroke priority over a pending line read;
/// the dispatcher must feed the next key here first.
pub struct ActiveCharPrompt {
    pub prompt_prefix: String,
    pub session: PromptSession<char>,
}
