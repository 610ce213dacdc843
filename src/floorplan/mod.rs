//! Residential floor-plan layout.
//!
//! Seven rooms (living, kitchen, bath, hall and three bedrooms), each with
//! a length, width and position. The objective is total construction cost:
//! area times the category's cost factor for every valid room, plus a
//! fixed penalty for every room that breaks its category's constraints.
//!
//! # Key Types
//!
//! - [`RoomType`] / [`RoomConstraints`]: categories and their rules
//! - [`Room`] / [`FloorPlan`]: decoded layouts
//! - [`FloorPlanProblem`]: the layout as a [`BinaryProblem`](crate::ga::BinaryProblem)

mod problem;
mod rooms;

pub use problem::{
    worst_objective, FloorPlan, FloorPlanProblem, DEFAULT_BEST_OBJECTIVE, ROOM_ATTRIBUTES,
    ROOM_COUNT,
};
pub use rooms::{Aspect, Range, Room, RoomConstraints, RoomType, RoomValidity, Side, TOLERANCE};
