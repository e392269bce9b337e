//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Input (PreUpdate: raw input -> named actions)
//! 2. BallTick (FixedUpdate: one animation tick per fixed step)
//! 3. BounceCue (Update: react to bounces emitted by the tick)
//! 4. BallSync (Update: copy simulation state onto visible entities)
//! 5. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BallTickSet; // position/velocity integration + reflection

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BounceCueSet; // consumers of BallBounced

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BallSyncSet; // transforms follow BallState
