//! Reusable view components.

pub mod strategy_card;
