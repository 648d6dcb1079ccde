//! Structural validation of a parsed draft fragment.
//!
//! serde already guarantees field presence; this layer enforces the counts
//! and non-emptiness the schema prescribes: exactly 3 pillars, exactly 3
//! initiatives per pillar, every text field filled. A fragment that fails
//! here is never returned to the caller as success.

use crate::models::strategy::{Pillar, StrategyFragment};

/// A valid draft carries exactly this many pillars.
pub const EXPECTED_PILLARS: usize = 3;

/// Each pillar carries exactly this many initiatives.
pub const EXPECTED_INITIATIVES: usize = 3;

/// Checks a parsed fragment against the expected shape.
/// Returns the first violation found, phrased for the failure detail message.
pub fn validate_fragment(fragment: &StrategyFragment) -> Result<(), String> {
    if fragment.vision_clients.trim().is_empty() {
        return Err("visionClients is empty".to_string());
    }
    if fragment.vision_people.trim().is_empty() {
        return Err("visionPeople is empty".to_string());
    }
    if fragment.vision_stakeholders.trim().is_empty() {
        return Err("visionStakeholders is empty".to_string());
    }

    if fragment.pillars.len() != EXPECTED_PILLARS {
        return Err(format!(
            "expected exactly {} pillars, got {}",
            EXPECTED_PILLARS,
            fragment.pillars.len()
        ));
    }

    for (i, pillar) in fragment.pillars.iter().enumerate() {
        validate_pillar(pillar).map_err(|e| format!("pillar {}: {e}", i + 1))?;
    }

    Ok(())
}

fn validate_pillar(pillar: &Pillar) -> Result<(), String> {
    if pillar.id.trim().is_empty() {
        return Err("id is empty".to_string());
    }
    if pillar.name.trim().is_empty() {
        return Err("name is empty".to_string());
    }
    if pillar.description.trim().is_empty() {
        return Err("description is empty".to_string());
    }

    if pillar.initiatives.len() != EXPECTED_INITIATIVES {
        return Err(format!(
            "expected exactly {} initiatives, got {}",
            EXPECTED_INITIATIVES,
            pillar.initiatives.len()
        ));
    }
    if pillar.initiatives.iter().any(|i| i.trim().is_empty()) {
        return Err("initiative text is empty".to_string());
    }

    if pillar.stories.communication.trim().is_empty()
        || pillar.stories.connection.trim().is_empty()
        || pillar.stories.consistency.trim().is_empty()
    {
        return Err("stories must fill communication, connection, and consistency".to_string());
    }

    Ok(())
}
