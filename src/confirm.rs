//! Two-phase confirm: the first click arms, a second click on the same
//! control confirms.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmState {
    #[default]
    Idle,
    Armed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// First click: waiting for the second
    Armed,
    /// Second click while armed: perform the action
    Confirmed,
}

impl ConfirmState {
    pub fn click(&mut self) -> ConfirmOutcome {
        match self {
            ConfirmState::Idle => {
                *self = ConfirmState::Armed;
                ConfirmOutcome::Armed
            }
            ConfirmState::Armed => {
                *self = ConfirmState::Idle;
                ConfirmOutcome::Confirmed
            }
        }
    }

    pub fn reset(&mut self) {
        *self = ConfirmState::Idle;
    }

    pub fn is_armed(self) -> bool {
        self == ConfirmState::Armed
    }
}
