//! Simulator state and its transition function.
//!
//! A host front end keeps a [`SimulatorState`] and feeds it actions: a tag
//! plus an optional text payload. [`transition`] is the pure
//! `(state, command) -> state` step; [`dispatch`] is the lenient entry point
//! that turns unknown actions into no-ops. An update without a value stores
//! NaN, the same as one whose text holds no number.
//!
//! The only lifecycle is "uncalculated → calculated". Field updates do not
//! clear a previous result; it stays visible, stale, until the next
//! [`Command::Calculate`] replaces it wholesale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::SimError;
use crate::parse::FieldKind;
use crate::projector::{FixedHorizonProjector, RewardProjector};
use crate::types::{SimulationInput, SimulationResult};

/// An editable input field.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PoolApr,
    StakeApr,
    InitialPrincipal,
    TotalUnits,
    CommunityStakeDays,
    YourStakeDays,
    YourUnits,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::PoolApr,
        Field::StakeApr,
        Field::InitialPrincipal,
        Field::TotalUnits,
        Field::CommunityStakeDays,
        Field::YourStakeDays,
        Field::YourUnits,
    ];

    /// Action tag that updates this field.
    pub fn action_tag(self) -> &'static str {
        match self {
            Self::PoolApr => "update-pool-apr",
            Self::StakeApr => "update-stake-apr",
            Self::InitialPrincipal => "update-initial-principal",
            Self::TotalUnits => "update-total-units",
            Self::CommunityStakeDays => "update-community-stake-days",
            Self::YourStakeDays => "update-your-stake-days",
            Self::YourUnits => "update-your-units",
        }
    }

    /// Rates and amounts parse as floats; counts and durations as integers.
    pub fn kind(self) -> FieldKind {
        match self {
            Self::PoolApr | Self::StakeApr | Self::InitialPrincipal => FieldKind::Float,
            Self::TotalUnits | Self::CommunityStakeDays | Self::YourStakeDays | Self::YourUnits => {
                FieldKind::Integer
            }
        }
    }

    pub fn get(self, input: &SimulationInput) -> f64 {
        match self {
            Self::PoolApr => input.pool_apr_percent,
            Self::StakeApr => input.stake_apr_percent,
            Self::InitialPrincipal => input.initial_principal,
            Self::TotalUnits => input.total_participant_units,
            Self::CommunityStakeDays => input.community_stake_days,
            Self::YourStakeDays => input.your_stake_days,
            Self::YourUnits => input.your_units,
        }
    }

    pub fn set(self, input: &mut SimulationInput, value: f64) {
        let slot = match self {
            Self::PoolApr => &mut input.pool_apr_percent,
            Self::StakeApr => &mut input.stake_apr_percent,
            Self::InitialPrincipal => &mut input.initial_principal,
            Self::TotalUnits => &mut input.total_participant_units,
            Self::CommunityStakeDays => &mut input.community_stake_days,
            Self::YourStakeDays => &mut input.your_stake_days,
            Self::YourUnits => &mut input.your_units,
        };
        *slot = value;
    }

    fn from_action_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.action_tag() == tag)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.action_tag();
        f.write_str(tag.strip_prefix("update-").unwrap_or(tag))
    }
}

impl FromStr for Field {
    type Err = SimError;

    /// Parse a field name as printed by `Display` (e.g. `pool-apr`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.to_string() == s)
            .ok_or_else(|| SimError::UnknownField(s.to_string()))
    }
}

/// A state-changing request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Recompute the result from the current input.
    Calculate,
    /// Replace one field with the parsed text value.
    Update { field: Field, value: String },
}

impl Command {
    /// Tag of the calculate action.
    pub const CALCULATE_TAG: &'static str = "calculate";

    /// Build a command from a host action tag and payload.
    ///
    /// A missing payload on an update becomes empty text, which parses to NaN.
    pub fn from_action(tag: &str, value: Option<&str>) -> Result<Self, SimError> {
        if tag == Self::CALCULATE_TAG {
            return Ok(Self::Calculate);
        }
        let field =
            Field::from_action_tag(tag).ok_or_else(|| SimError::UnknownAction(tag.to_string()))?;
        Ok(Self::Update {
            field,
            value: value.unwrap_or_default().to_string(),
        })
    }

    /// The host action tag for this command.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Calculate => Self::CALCULATE_TAG,
            Self::Update { field, .. } => field.action_tag(),
        }
    }
}

/// Current input snapshot plus the last computed result, if any.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SimulatorState {
    pub input: SimulationInput,
    pub result: Option<SimulationResult>,
}

impl SimulatorState {
    pub fn new(input: SimulationInput) -> Self {
        Self {
            input,
            result: None,
        }
    }

    /// Whether a result is available (the `showResults` flag).
    pub fn is_calculated(&self) -> bool {
        self.result.is_some()
    }
}

fn transition_with<P: RewardProjector + ?Sized>(
    projector: &P,
    state: &SimulatorState,
    command: &Command,
) -> SimulatorState {
    trace!(action = command.tag(), "transition");
    match command {
        Command::Calculate => SimulatorState {
            input: state.input,
            result: Some(projector.project(&state.input)),
        },
        Command::Update { field, value } => {
            let mut next = state.clone();
            field.set(&mut next.input, field.kind().parse(value));
            next
        }
    }
}

/// Apply `command` to `state` using the fixed-horizon projector.
pub fn transition(state: &SimulatorState, command: &Command) -> SimulatorState {
    transition_with(&FixedHorizonProjector, state, command)
}

/// Parse a host action, logging and discarding the ones that are not understood.
fn accepted_command(tag: &str, value: Option<&str>) -> Option<Command> {
    Command::from_action(tag, value)
        .inspect_err(|e| debug!("ignoring action: {e}"))
        .ok()
}

/// Apply a raw host action. Unknown tags leave the state unchanged.
pub fn dispatch(state: &SimulatorState, tag: &str, value: Option<&str>) -> SimulatorState {
    match accepted_command(tag, value) {
        Some(command) => transition(state, &command),
        None => state.clone(),
    }
}

/// A raw host action as recorded by a front end: a tag and optional text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub action: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Action {
    pub fn new(action: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            action: action.into(),
            value: value.map(str::to_string),
        }
    }
}

/// Fold a sequence of host actions through [`dispatch`].
pub fn replay<'a, I>(state: &SimulatorState, actions: I) -> SimulatorState
where
    I: IntoIterator<Item = &'a Action>,
{
    actions.into_iter().fold(state.clone(), |acc, a| {
        dispatch(&acc, &a.action, a.value.as_deref())
    })
}

/// A state owner that applies commands in place with a chosen projector.
#[derive(Debug, Clone, Default)]
pub struct Simulator<P = FixedHorizonProjector> {
    projector: P,
    state: SimulatorState,
}

impl Simulator<FixedHorizonProjector> {
    /// Fixed-horizon simulator starting from `input`.
    pub fn new(input: SimulationInput) -> Self {
        Self::with_projector(FixedHorizonProjector, input)
    }
}

impl<P: RewardProjector> Simulator<P> {
    pub fn with_projector(projector: P, input: SimulationInput) -> Self {
        Self {
            projector,
            state: SimulatorState::new(input),
        }
    }

    pub fn state(&self) -> &SimulatorState {
        &self.state
    }

    pub fn into_state(self) -> SimulatorState {
        self.state
    }

    pub fn apply(&mut self, command: &Command) -> &SimulatorState {
        self.state = transition_with(&self.projector, &self.state, command);
        &self.state
    }

    /// Apply a raw host action; see [`dispatch`].
    pub fn dispatch(&mut self, tag: &str, value: Option<&str>) -> &SimulatorState {
        match accepted_command(tag, value) {
            Some(command) => self.apply(&command),
            None => &self.state,
        }
    }
}
