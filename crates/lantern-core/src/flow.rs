/// Early exit from a command handler.
///
/// Handlers return [`TurnResult`] and use `?` to unwind: `AbortTurn` ends the
/// current turn only, `Quit` ends the whole session. Neither can outlive the
/// turn that produced it, because each turn gets a fresh result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// Stop the current turn; the session continues with the next one.
    AbortTurn,
    /// Stop the session.
    Quit,
}

/// Result of running a command handler.
pub type TurnResult = Result<(), Interrupt>;
