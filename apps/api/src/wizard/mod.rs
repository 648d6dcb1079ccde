#![allow(dead_code)]

//! Wizard controller: the step machine that edits a strategy document.
//!
//! Seven linear steps; a step's gate must pass before advancing. The AI draft
//! merges into the working document and jumps straight to the output step.
//! Required-field rules live here, not in the data model.

pub mod store;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::strategy::{Pillar, StrategyDocument, StrategyFragment};

/// Pillar count cap applied on manual add. Drafted pillars always come in
/// threes, below the cap.
pub const MAX_PILLARS: usize = 4;

/// Initiatives cap per pillar, applied on manual add.
pub const MAX_INITIATIVES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepInfo {
    pub number: u8,
    pub name: &'static str,
    pub key: &'static str,
}

/// The wizard's ordered steps. `number` is 1-based and is what gets persisted.
pub const STEPS: [StepInfo; 7] = [
    StepInfo { number: 1, name: "Welcome", key: "welcome" },
    StepInfo { number: 2, name: "Context", key: "context" },
    StepInfo { number: 3, name: "Vision", key: "vision" },
    StepInfo { number: 4, name: "Pillars", key: "pillars" },
    StepInfo { number: 5, name: "Initiatives", key: "initiatives" },
    StepInfo { number: 6, name: "Stories", key: "stories" },
    StepInfo { number: 7, name: "Output", key: "output" },
];

const FIRST_STEP: u8 = 1;
const OUTPUT_STEP: u8 = STEPS.len() as u8;

/// The full persisted wizard state: current position plus the working
/// document. This is the exact JSON shape the cache store writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardState {
    pub current_step: u8,
    pub strategy: StrategyDocument,
    pub is_complete: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            strategy: StrategyDocument::new(),
            is_complete: false,
        }
    }

    /// Info for the current step. A step number outside the table (possible
    /// only via a hand-edited cache) is clamped into range.
    pub fn step_info(&self) -> &'static StepInfo {
        let step = self.current_step.clamp(FIRST_STEP, OUTPUT_STEP);
        &STEPS[(step - 1) as usize]
    }

    /// Whether the current step's required fields are filled.
    pub fn can_advance(&self) -> bool {
        let s = &self.strategy;
        match self.current_step {
            2 => !s.company_name.is_empty() && !s.industry.is_empty(),
            3 => {
                !s.vision_clients.is_empty()
                    && !s.vision_people.is_empty()
                    && !s.vision_stakeholders.is_empty()
            }
            4 => s.pillars.len() >= 2,
            5 => s.pillars.iter().all(|p| !p.initiatives.is_empty()),
            6 => s.pillars.iter().all(|p| {
                !p.stories.communication.is_empty()
                    && !p.stories.connection.is_empty()
                    && !p.stories.consistency.is_empty()
            }),
            _ => true,
        }
    }

    /// Advances one step when the gate passes. Returns false at the last step
    /// or when the current step is incomplete.
    pub fn next_step(&mut self) -> bool {
        if self.current_step < OUTPUT_STEP && self.can_advance() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_step(&mut self) -> bool {
        if self.current_step > FIRST_STEP {
            self.current_step -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to a step by number; out-of-range numbers are ignored.
    pub fn go_to_step(&mut self, step: u8) -> bool {
        if (FIRST_STEP..=OUTPUT_STEP).contains(&step) {
            self.current_step = step;
            true
        } else {
            false
        }
    }

    /// Mutates the working document and refreshes `updated_at`.
    pub fn edit(&mut self, f: impl FnOnce(&mut StrategyDocument)) {
        f(&mut self.strategy);
        self.strategy.updated_at = Utc::now();
    }

    /// Merges an AI draft into the document (vision fields and pillars are
    /// replaced wholesale) and jumps to the output step for review.
    pub fn apply_draft(&mut self, fragment: StrategyFragment) {
        self.edit(|s| {
            s.vision_clients = fragment.vision_clients;
            s.vision_people = fragment.vision_people;
            s.vision_stakeholders = fragment.vision_stakeholders;
            s.pillars = fragment.pillars;
        });
        self.current_step = OUTPUT_STEP;
    }

    /// Adds an empty pillar with a fresh opaque id. Returns its id, or None
    /// once the pillar cap is reached.
    pub fn add_pillar(&mut self) -> Option<String> {
        if self.strategy.pillars.len() >= MAX_PILLARS {
            return None;
        }
        let id = Uuid::new_v4().to_string();
        let pillar = Pillar {
            id: id.clone(),
            ..Pillar::default()
        };
        self.edit(|s| s.pillars.push(pillar));
        Some(id)
    }

    /// Removes the pillar with the given id. Returns false if absent.
    pub fn remove_pillar(&mut self, id: &str) -> bool {
        let before = self.strategy.pillars.len();
        self.edit(|s| s.pillars.retain(|p| p.id != id));
        self.strategy.pillars.len() != before
    }

    /// Appends an initiative to the identified pillar, respecting the
    /// per-pillar cap. Returns false for an unknown pillar or a full list.
    pub fn add_initiative(&mut self, pillar_id: &str, text: impl Into<String>) -> bool {
        let Some(index) = self.strategy.pillars.iter().position(|p| p.id == pillar_id) else {
            return false;
        };
        if self.strategy.pillars[index].initiatives.len() >= MAX_INITIATIVES {
            return false;
        }
        let text = text.into();
        self.edit(|s| s.pillars[index].initiatives.push(text));
        true
    }

    pub fn complete(&mut self) {
        self.is_complete = true;
    }

    /// Discards all work and returns to the welcome step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
