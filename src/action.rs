//! Player actions and their effect on a hand.

use core::str::FromStr;

use crate::error::ActionError;
use crate::hand::{Evaluation, evaluate};
use crate::participant::Participant;
use crate::shoe::Shoe;

/// A canonical player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the bet, take exactly one card, then stand.
    DoubleDown,
    /// Split a pair into two hands. Always rejected.
    Split,
}

impl Action {
    /// Parses a raw action token.
    ///
    /// Tokens are case-insensitive and surrounding whitespace is ignored.
    /// Accepts `1`..`4` or `hit`, `stand`, `double down` and `split`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotMapped`] for any other token.
    ///
    /// ```
    /// use bjtable::{Action, ActionError};
    ///
    /// assert_eq!(Action::parse("Double Down"), Ok(Action::DoubleDown));
    /// assert_eq!(Action::parse("2"), Ok(Action::Stand));
    /// assert_eq!(Action::parse("fold"), Err(ActionError::NotMapped));
    /// ```
    pub fn parse(token: &str) -> Result<Self, ActionError> {
        let token = token.trim();
        let action = match token {
            "1" => Self::Hit,
            "2" => Self::Stand,
            "3" => Self::DoubleDown,
            "4" => Self::Split,
            _ if token.eq_ignore_ascii_case("hit") => Self::Hit,
            _ if token.eq_ignore_ascii_case("stand") => Self::Stand,
            _ if token.eq_ignore_ascii_case("double down") => Self::DoubleDown,
            _ if token.eq_ignore_ascii_case("split") => Self::Split,
            _ => return Err(ActionError::NotMapped),
        };
        Ok(action)
    }

    /// Checks the action against the participant and describes its effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is no longer active, if a double down is
    /// not covered by the balance, or for any split.
    pub const fn plan(self, participant: &Participant) -> Result<Step, ActionError> {
        if participant.stand() {
            return Err(ActionError::HandNotActive);
        }

        match self {
            Self::Hit => Ok(Step {
                draws: true,
                double_bet: false,
                stand: false,
            }),
            Self::Stand => Ok(Step {
                draws: false,
                double_bet: false,
                stand: true,
            }),
            Self::DoubleDown => match participant.bet().checked_mul(2) {
                Some(doubled) if doubled <= participant.money() => Ok(Step {
                    draws: true,
                    double_bet: true,
                    stand: true,
                }),
                _ => Err(ActionError::InsufficientFunds),
            },
            Self::Split => Err(ActionError::SplitUnsupported),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The effect of an accepted action on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// Whether one card is drawn into the hand.
    pub draws: bool,
    /// Whether the bet is doubled.
    pub double_bet: bool,
    /// Whether the turn ends regardless of the resulting score.
    pub stand: bool,
}

/// Parses `token` and applies the action to `participant`.
///
/// The hand is re-evaluated after every accepted action, so a bust is
/// settled before this returns. On error the participant and the shoe are
/// unchanged.
///
/// # Errors
///
/// Returns an error if the token is not recognised, the action is rejected
/// by [`Action::plan`], or the shoe is empty.
pub fn apply_action(
    token: &str,
    participant: &mut Participant,
    shoe: &mut Shoe,
) -> Result<Evaluation, ActionError> {
    let action = Action::parse(token).inspect_err(|_| {
        tracing::warn!(player = participant.id(), token, "unrecognised action");
    })?;
    apply(action, participant, shoe)
}

/// Applies an already parsed action to `participant`.
///
/// # Errors
///
/// See [`apply_action`].
pub fn apply(
    action: Action,
    participant: &mut Participant,
    shoe: &mut Shoe,
) -> Result<Evaluation, ActionError> {
    let step = action.plan(participant).inspect_err(|err| {
        tracing::warn!(player = participant.id(), ?action, %err, "action rejected");
    })?;
    let card = if step.draws {
        Some(shoe.draw_one()?)
    } else {
        None
    };

    *participant = participant.transition(step, card);
    tracing::debug!(
        player = participant.id(),
        ?action,
        score = ?participant.score(),
        bet = participant.bet(),
        "action applied"
    );

    Ok(evaluate(participant.cards()))
}
