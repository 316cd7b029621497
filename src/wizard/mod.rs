// ABOUTME: Onboarding wizard model for the buyer and seller personas
// One generic controller driven by per-persona step configuration

pub mod controller;
pub mod form;
pub mod persona;

pub use controller::{StepTransition, WizardController};
pub use form::{FieldValue, FormState, WizardError};
pub use persona::{
    fields, FieldKind, FieldSpec, Persona, PersonaConfig, Requirement, StepSpec, BUYER, SELLER,
};
