#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three narrative fields attached to every pillar (3Cs framework:
/// Communication, Connection, Consistency).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PillarStories {
    pub communication: String,
    pub connection: String,
    pub consistency: String,
}

/// A strategic pillar. `id` is opaque and stable for the pillar's lifetime;
/// the wizard uses it for keying and targeted updates. Initiative order is
/// display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub id: String,
    pub name: String,
    pub description: String,
    pub initiatives: Vec<String>,
    pub stories: PillarStories,
}

/// The subset of a `StrategyDocument` producible by the AI draft pipeline.
/// This is the response body of `POST /api/generate`. Every field is
/// required: a completion missing any of them fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyFragment {
    pub vision_clients: String,
    pub vision_people: String,
    pub vision_stakeholders: String,
    pub pillars: Vec<Pillar>,
}

/// The full working document the wizard edits. Pure data: "required" rules
/// (minimum pillar count, filled vision fields) are wizard gating, not model
/// invariants. `updated_at` is refreshed by the wizard on every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDocument {
    pub company_name: String,
    pub industry: String,
    pub business_background: String,
    pub vision_clients: String,
    pub vision_people: String,
    pub vision_stakeholders: String,
    pub pillars: Vec<Pillar>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StrategyDocument {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            company_name: String::new(),
            industry: String::new(),
            business_background: String::new(),
            vision_clients: String::new(),
            vision_people: String::new(),
            vision_stakeholders: String::new(),
            pillars: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for StrategyDocument {
    fn default() -> Self {
        Self::new()
    }
}
