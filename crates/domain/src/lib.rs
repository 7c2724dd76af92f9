//! # quickaction-domain
//!
//! Pure domain model for quick action presets.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Quick actions** (what to launch, how, and when it is relevant)
//! - Define **Categories** (payment, navigation, communication, …)
//! - Define **Actions** (app launch by package, deep link by URI)
//! - Define **Context triggers** (scene tags and daily time ranges)
//! - Contain all shape validation
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never performs IO; the catalogue and any executor live elsewhere.

pub mod error;
pub mod id;

pub mod action;
pub mod category;
pub mod quick_action;
pub mod trigger;
