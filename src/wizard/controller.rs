// ABOUTME: Generic onboarding step controller shared by the buyer and seller flows
// Owns the current step and the form answers, gates "Next" on the persona's requirements

use tracing::{debug, info};

use super::form::{FormState, WizardError};
use super::persona::{Persona, PersonaConfig, StepSpec};

/// Result of pressing "Next"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTransition {
    /// Moved forward to the given 1-based step
    Advanced(usize),
    /// "Next" pressed on the last step; the caller leaves the wizard
    Completed,
}

#[derive(Debug, Clone)]
pub struct WizardController {
    config: &'static PersonaConfig,
    form: FormState,
    current_step: usize,
}

impl WizardController {
    pub fn new(config: &'static PersonaConfig) -> Self {
        Self {
            config,
            form: FormState::for_persona(config),
            current_step: 1,
        }
    }

    pub fn for_persona(persona: Persona) -> Self {
        Self::new(persona.config())
    }

    pub fn persona(&self) -> Persona {
        self.config.persona
    }

    pub fn config(&self) -> &'static PersonaConfig {
        self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Current 1-based step
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.config.total_steps()
    }

    pub fn step_spec(&self) -> &'static StepSpec {
        // current_step is kept within 1..=total_steps
        &self.config.steps[self.current_step - 1]
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step > 1
    }

    /// Progress through the wizard as a percentage
    pub fn progress_percent(&self) -> u16 {
        let percent = self.current_step * 100 / self.total_steps().max(1);
        u16::try_from(percent).unwrap_or(100)
    }

    /// Whether "Next" may be pressed on the given step with the given answers
    pub fn can_proceed_at(&self, step: usize, form: &FormState) -> bool {
        self.config.can_proceed(step, form)
    }

    /// Whether "Next" may be pressed right now
    pub fn can_proceed(&self) -> bool {
        self.can_proceed_at(self.current_step, &self.form)
    }

    /// Move forward, or report completion on the last step.
    /// Not gated here; callers check `can_proceed` first.
    pub fn advance(&mut self) -> StepTransition {
        if self.current_step < self.total_steps() {
            self.current_step += 1;
            debug!(
                persona = ?self.config.persona,
                step = self.current_step,
                "Advanced onboarding step"
            );
            StepTransition::Advanced(self.current_step)
        } else {
            info!(persona = ?self.config.persona, "Onboarding complete");
            StepTransition::Completed
        }
    }

    /// Move back one step; no-op on the first step
    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
            debug!(
                persona = ?self.config.persona,
                step = self.current_step,
                "Retreated onboarding step"
            );
        }
    }

    pub fn toggle_multi_select(&mut self, field: &str, value: &str) -> Result<bool, WizardError> {
        self.form.toggle_multi_select(field, value)
    }

    pub fn set_single_value(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.form.set_single_value(field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::persona::{fields, BUYER, SELLER};

    #[test]
    fn test_starts_on_first_step() {
        let wizard = WizardController::new(&BUYER);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.total_steps(), 5);
        assert!(!wizard.can_go_back());
        assert_eq!(wizard.progress_percent(), 20);
    }

    #[test]
    fn test_advance_stops_at_last_step() {
        let mut wizard = WizardController::new(&SELLER);
        for expected in 2..=5 {
            assert_eq!(wizard.advance(), StepTransition::Advanced(expected));
        }
        assert!(wizard.is_final_step());
        assert_eq!(wizard.advance(), StepTransition::Completed);
        assert_eq!(wizard.advance(), StepTransition::Completed);
        assert_eq!(wizard.current_step(), 5);
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_retreat_stops_at_first_step() {
        let mut wizard = WizardController::new(&BUYER);
        wizard.retreat();
        assert_eq!(wizard.current_step(), 1);
        wizard.advance();
        wizard.advance();
        wizard.retreat();
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_buyer_requirements_per_step() {
        let mut wizard = WizardController::new(&BUYER);
        let gates: [(usize, &dyn Fn(&mut WizardController)); 5] = [
            (1, &|w| w.set_single_value(fields::FULL_NAME, "Sarah Chen").unwrap()),
            (2, &|w| {
                w.toggle_multi_select(fields::INDUSTRIES, "Technology").unwrap();
            }),
            (3, &|w| w.set_single_value(fields::BUDGET_RANGE, "$1M - $5M").unwrap()),
            (4, &|w| w.set_single_value(fields::LOCATION, "Austin, TX").unwrap()),
            (5, &|w| {
                w.set_single_value(fields::TIMELINE, "Immediate (0-3 months)").unwrap();
            }),
        ];

        for (step, satisfy) in gates {
            assert!(!wizard.can_proceed_at(step, wizard.form()), "step {step} open too early");
            satisfy(&mut wizard);
            assert!(wizard.can_proceed_at(step, wizard.form()), "step {step} still closed");
        }
    }

    #[test]
    fn test_buyer_location_must_not_be_whitespace() {
        let mut wizard = WizardController::new(&BUYER);
        wizard.set_single_value(fields::LOCATION, "   ").unwrap();
        assert!(!wizard.can_proceed_at(4, wizard.form()));
    }

    #[test]
    fn test_seller_requirements_per_step() {
        let mut wizard = WizardController::new(&SELLER);
        assert!(!wizard.can_proceed_at(2, wizard.form()));
        wizard.set_single_value(fields::BUSINESS_TYPE, "E-commerce").unwrap();
        assert!(wizard.can_proceed_at(2, wizard.form()));

        assert!(!wizard.can_proceed_at(3, wizard.form()));
        wizard.set_single_value(fields::ANNUAL_REVENUE, "$1M - $5M").unwrap();
        assert!(wizard.can_proceed_at(3, wizard.form()));

        assert!(!wizard.can_proceed_at(4, wizard.form()));
        wizard.set_single_value(fields::ASKING_PRICE, "$2,500,000").unwrap();
        assert!(wizard.can_proceed_at(4, wizard.form()));

        assert!(!wizard.can_proceed_at(5, wizard.form()));
        wizard.toggle_multi_select(fields::BUYER_TRAITS, "Private Equity").unwrap();
        assert!(wizard.can_proceed_at(5, wizard.form()));
    }
}
