// ABOUTME: Onboarding wizard page: focus handling and key input over a WizardController
// Leaving the last step navigates to the dashboard exactly once

use tracing::{debug, warn};

use super::{step_cursor, PageAction, PageContext};
use crate::router::Route;
use crate::wizard::{FieldKind, FieldSpec, Persona, StepTransition, WizardController};

/// One focusable line on the current step
#[derive(Debug, Clone, Copy)]
pub enum StepRow {
    /// Text input for a field
    Input(&'static FieldSpec),
    /// Preset option `index` of a choice field
    Choice(&'static FieldSpec, usize),
}

impl StepRow {
    pub fn field(&self) -> &'static FieldSpec {
        match self {
            Self::Input(spec) | Self::Choice(spec, _) => spec,
        }
    }
}

/// Focusable rows for a step's fields, in display order
pub fn step_rows(fields: &'static [FieldSpec]) -> Vec<StepRow> {
    let mut rows = Vec::new();
    for spec in fields {
        match spec.kind {
            FieldKind::Text | FieldKind::LongText => rows.push(StepRow::Input(spec)),
            FieldKind::SingleChoice(options) | FieldKind::MultiChoice(options) => {
                rows.extend((0..options.len()).map(|i| StepRow::Choice(spec, i)));
            }
            FieldKind::ChoiceOrCustom(options) => {
                rows.extend((0..options.len()).map(|i| StepRow::Choice(spec, i)));
                rows.push(StepRow::Input(spec));
            }
        }
    }
    rows
}

#[derive(Debug, Clone)]
pub struct WizardPage {
    controller: WizardController,
    /// Index into `rows()`
    pub cursor: usize,
    /// A preset amount was just picked; the next typed character starts a new custom amount
    preset_picked: bool,
}

impl WizardPage {
    pub fn new(persona: Persona) -> Self {
        Self {
            controller: WizardController::for_persona(persona),
            cursor: 0,
            preset_picked: false,
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn rows(&self) -> Vec<StepRow> {
        step_rows(self.controller.step_spec().fields)
    }

    pub fn focused_row(&self) -> Option<StepRow> {
        self.rows().get(self.cursor).copied()
    }

    pub fn wants_text_input(&self) -> bool {
        matches!(self.focused_row(), Some(StepRow::Input(_)))
    }

    /// Text shown in a field's input box. A custom amount box only echoes values
    /// starting with '$'.
    pub fn input_text(&self, spec: &FieldSpec) -> String {
        let value = self.controller.form().text(spec.key);
        match spec.kind {
            FieldKind::ChoiceOrCustom(_) if !value.starts_with('$') => String::new(),
            _ => value.to_string(),
        }
    }

    /// Avatar preview on the first step
    pub fn avatar_initial(&self) -> char {
        self.controller
            .form()
            .text(crate::wizard::fields::FULL_NAME)
            .trim()
            .chars()
            .next()
            .map_or('?', |c| c.to_ascii_uppercase())
    }

    pub fn primary_label(&self) -> &'static str {
        if self.controller.is_final_step() {
            "Complete Setup"
        } else {
            "Continue"
        }
    }

    pub fn handle(&mut self, action: PageAction, ctx: &mut PageContext<'_>) {
        match action {
            PageAction::Up => self.cursor = step_cursor(self.cursor, self.rows().len(), false),
            PageAction::Down => self.cursor = step_cursor(self.cursor, self.rows().len(), true),
            PageAction::Confirm => self.next(ctx),
            PageAction::Cancel => self.back(),
            PageAction::Toggle => self.choose_focused(),
            PageAction::Char(c) => self.type_char(c),
            PageAction::Backspace => self.erase_char(),
            PageAction::Left | PageAction::Right => {}
        }
    }

    /// "Next": ignored while the step's requirement is unmet
    pub fn next(&mut self, ctx: &mut PageContext<'_>) {
        if !self.controller.can_proceed() {
            debug!(step = self.controller.current_step(), "Next pressed on incomplete step");
            return;
        }
        match self.controller.advance() {
            StepTransition::Advanced(_) => {
                self.cursor = 0;
                self.preset_picked = false;
            }
            StepTransition::Completed => ctx.navigator.push(Route::Dashboard),
        }
    }

    pub fn back(&mut self) {
        if self.controller.can_go_back() {
            self.controller.retreat();
            self.cursor = 0;
            self.preset_picked = false;
        }
    }

    fn choose_focused(&mut self) {
        let Some(StepRow::Choice(spec, index)) = self.focused_row() else {
            return;
        };
        let option = spec.kind.options()[index];
        let result = match spec.kind {
            FieldKind::MultiChoice(_) => self
                .controller
                .toggle_multi_select(spec.key, option)
                .map(|_| ()),
            _ => self.controller.set_single_value(spec.key, option),
        };
        match result {
            Ok(()) => self.preset_picked = matches!(spec.kind, FieldKind::ChoiceOrCustom(_)),
            Err(e) => warn!("Rejected wizard input: {}", e),
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(StepRow::Input(spec)) = self.focused_row() else {
            return;
        };
        let mut text = if self.preset_picked {
            String::new()
        } else {
            self.input_text(spec)
        };
        edit(&mut text);
        match self.controller.set_single_value(spec.key, text) {
            Ok(()) => self.preset_picked = false,
            Err(e) => warn!("Rejected wizard input: {}", e),
        }
    }

    fn type_char(&mut self, c: char) {
        self.edit_focused(|text| text.push(c));
    }

    /// Backspace never clears a picked preset; an empty box has nothing to erase.
    fn erase_char(&mut self) {
        let Some(StepRow::Input(spec)) = self.focused_row() else {
            return;
        };
        if self.preset_picked || self.input_text(spec).is_empty() {
            return;
        }
        self.edit_focused(|text| {
            text.pop();
        });
    }
}
