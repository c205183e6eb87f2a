//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod recommendation_service;
pub mod selection_service;

// Re-export for convenience
pub use recommendation_service::{Recommendation, RecommendationService};
pub use selection_service::{Selection, SelectionEngine, pick_next};
