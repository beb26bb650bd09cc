pub mod components;
pub mod events;
pub mod facing;
pub mod intent;
pub mod movement_state;
pub mod physics;
