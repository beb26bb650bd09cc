use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::components::CharacterMovement;
use super::intent::MovementIntent;
use crate::config::tuning::Tuning;

/// The single active movement mode; selects the character's max speed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Run,
    Walk,
    Aim,
    AimWalk,
    SprintRun,
}

impl MovementState {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Run => "Run",
            Self::Walk => "Walk",
            Self::Aim => "Aim",
            Self::AimWalk => "Aim Walk",
            Self::SprintRun => "Sprint",
        }
    }
}

/// Max speed for every movement state, in world units per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSpeedTable {
    pub run: f32,
    pub walk: f32,
    pub sprint: f32,
    pub aim: f32,
    pub aim_walk: f32,
}

impl Default for MovementSpeedTable {
    fn default() -> Self {
        Self {
            run: 600.0,
            walk: 200.0,
            sprint: 800.0,
            aim: 300.0,
            aim_walk: 100.0,
        }
    }
}

impl MovementSpeedTable {
    pub fn speed_for(&self, state: MovementState) -> f32 {
        match state {
            MovementState::Run => self.run,
            MovementState::Walk => self.walk,
            MovementState::Aim => self.aim,
            MovementState::AimWalk => self.aim_walk,
            MovementState::SprintRun => self.sprint,
        }
    }
}

// ── Resolution ──────────────────────────────────────────────────────

/// One entry of the priority list used by [`resolve`].
pub struct ResolutionRule {
    pub state: MovementState,
    pub applies: fn(&MovementIntent) -> bool,
    /// Matching this rule drops any held walk / aim intent.
    pub exclusive: bool,
}

/// Checked top to bottom, first match wins.
pub const RESOLUTION_RULES: [ResolutionRule; 5] = [
    ResolutionRule {
        state: MovementState::Run,
        applies: |i| !i.walk_held && !i.sprint_held && !i.aim_held,
        exclusive: false,
    },
    ResolutionRule {
        state: MovementState::SprintRun,
        applies: |i| i.sprint_held,
        exclusive: true,
    },
    ResolutionRule {
        state: MovementState::AimWalk,
        applies: |i| i.walk_held && i.aim_held,
        exclusive: false,
    },
    ResolutionRule {
        state: MovementState::Walk,
        applies: |i| i.walk_held && !i.aim_held,
        exclusive: false,
    },
    ResolutionRule {
        state: MovementState::Aim,
        applies: |i| i.aim_held && !i.walk_held,
        exclusive: false,
    },
];

/// Map the held intents to a state. Sprint clears walk and aim on `intent`.
pub fn resolve(intent: &mut MovementIntent) -> MovementState {
    let Some(rule) = RESOLUTION_RULES.iter().find(|rule| (rule.applies)(intent)) else {
        // The rules cover every flag combination; Run is the fallback default.
        return MovementState::Run;
    };
    if rule.exclusive {
        intent.walk_held = false;
        intent.aim_held = false;
    }
    rule.state
}

/// Resolve the state and push its speed to the actuator.
///
/// The speed is pushed on every call, even when the state did not change.
/// Returns the previous state when a transition happened.
pub fn change_movement_state(
    intent: &mut MovementIntent,
    state: &mut MovementState,
    movement: &mut CharacterMovement,
    speeds: &MovementSpeedTable,
) -> Option<MovementState> {
    let previous = *state;
    *state = resolve(intent);
    movement.max_speed = speeds.speed_for(*state);
    (previous != *state).then_some(previous)
}

/// Re-push the current state's speed after the tuning table changed.
pub fn refresh_speeds_on_tuning_change(
    tuning: Res<Tuning>,
    mut query: Query<(&MovementState, &mut CharacterMovement)>,
) {
    for (state, mut movement) in &mut query {
        movement.max_speed = tuning.speeds.speed_for(*state);
    }
    debug!("Movement speeds refreshed from tuning");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent(walk: bool, sprint: bool, aim: bool) -> MovementIntent {
        MovementIntent {
            walk_held: walk,
            sprint_held: sprint,
            aim_held: aim,
            ..default()
        }
    }

    #[test]
    fn no_modifier_runs() {
        assert_eq!(resolve(&mut intent(false, false, false)), MovementState::Run);
    }

    #[test]
    fn sprint_wins_and_clears_other_modifiers() {
        for (walk, aim) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut i = intent(walk, true, aim);
            assert_eq!(resolve(&mut i), MovementState::SprintRun);
            assert!(!i.walk_held);
            assert!(!i.aim_held);
            assert!(i.sprint_held);
        }
    }

    #[test]
    fn walk_and_aim_combinations() {
        assert_eq!(resolve(&mut intent(true, false, true)), MovementState::AimWalk);
        assert_eq!(resolve(&mut intent(true, false, false)), MovementState::Walk);
        assert_eq!(resolve(&mut intent(false, false, true)), MovementState::Aim);
    }

    #[test]
    fn non_sprint_states_keep_intents() {
        let mut i = intent(true, false, true);
        resolve(&mut i);
        assert!(i.walk_held && i.aim_held);
    }

    #[test]
    fn every_combination_matches_a_rule() {
        for bits in 0..8u8 {
            let i = intent(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
            assert!(RESOLUTION_RULES.iter().any(|rule| (rule.applies)(&i)));
        }
    }

    #[test]
    fn speed_table_lookup() {
        let speeds = MovementSpeedTable::default();
        assert_eq!(speeds.speed_for(MovementState::Run), 600.0);
        assert_eq!(speeds.speed_for(MovementState::Walk), speeds.walk);
        assert_eq!(speeds.speed_for(MovementState::Aim), speeds.aim);
        assert_eq!(speeds.speed_for(MovementState::AimWalk), speeds.aim_walk);
        assert_eq!(speeds.speed_for(MovementState::SprintRun), speeds.sprint);
    }

    #[test]
    fn recompute_is_idempotent() {
        let speeds = MovementSpeedTable::default();
        let mut i = intent(true, false, false);
        let mut state = MovementState::Run;
        let mut movement = CharacterMovement::new(speeds.run);

        assert_eq!(
            change_movement_state(&mut i, &mut state, &mut movement, &speeds),
            Some(MovementState::Run)
        );
        assert_eq!(state, MovementState::Walk);
        assert_eq!(movement.max_speed, speeds.walk);

        movement.max_speed = 0.0;
        assert_eq!(change_movement_state(&mut i, &mut state, &mut movement, &speeds), None);
        assert_eq!(state, MovementState::Walk);
        assert_eq!(movement.max_speed, speeds.walk);
    }
}
