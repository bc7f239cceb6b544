//! Profile wizard: three ordered form sections with per-section validation.
//!
//! Values survive stepping backward. A section only advances when all of its
//! fields are filled, and the finished `Profile` is handed to the completion
//! callback only when every field is filled.

pub mod handlers;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::profile::{Profile, ProfileField};

const INCOMPLETE_TITLE: &str = "Please complete all fields";
const ADVANCE_HINT: &str = "Fill in all required information to continue.";
const SUBMIT_HINT: &str = "Fill in all required information to generate your career plan.";

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [ProfileField],
}

pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Personal Info",
        fields: &[ProfileField::Name, ProfileField::Education],
    },
    Section {
        title: "Experience",
        fields: &[ProfileField::Experience, ProfileField::Skills],
    },
    Section {
        title: "Goals",
        fields: &[ProfileField::Interests, ProfileField::Goals],
    },
];

/// User-facing rejection. The wizard state is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{title}: {description}")]
pub struct WizardError {
    pub title: &'static str,
    pub description: &'static str,
    pub missing: Vec<ProfileField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "section", rename_all = "snake_case")]
pub enum WizardStep {
    /// Moved to the section at this index.
    Section(usize),
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileWizard {
    current: usize,
    draft: Profile,
}

impl ProfileWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn section(&self) -> &'static Section {
        &SECTIONS[self.current]
    }

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn is_last_section(&self) -> bool {
        self.current + 1 == SECTIONS.len()
    }

    /// Stores a value regardless of which section is active.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Advances one section, or submits from the last one.
    pub fn advance<F>(&mut self, on_complete: F) -> Result<WizardStep, WizardError>
    where
        F: FnOnce(Profile),
    {
        let missing: Vec<ProfileField> = self
            .section()
            .fields
            .iter()
            .copied()
            .filter(|&f| self.draft.field(f).is_empty())
            .collect();

        if !missing.is_empty() {
            debug!(section = self.current, ?missing, "wizard advance rejected");
            return Err(WizardError {
                title: INCOMPLETE_TITLE,
                description: ADVANCE_HINT,
                missing,
            });
        }

        if self.is_last_section() {
            self.submit(on_complete)
        } else {
            self.current += 1;
            Ok(WizardStep::Section(self.current))
        }
    }

    /// Steps back one section. Entered values are kept.
    pub fn back(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Validates every field and hands a copy of the profile to `on_complete`.
    pub fn submit<F>(&self, on_complete: F) -> Result<WizardStep, WizardError>
    where
        F: FnOnce(Profile),
    {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError {
                title: INCOMPLETE_TITLE,
                description: SUBMIT_HINT,
                missing,
            });
        }

        on_complete(self.draft.clone());
        Ok(WizardStep::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn fill_section(wizard: &mut ProfileWizard, index: usize) {
        for &field in SECTIONS[index].fields {
            let value = match field {
                ProfileField::Education => "phd",
                ProfileField::Experience => "3-5",
                ProfileField::Interests => "data-ai",
                _ => "filled",
            };
            wizard.set_field(field, value);
        }
    }

    #[test]
    fn test_empty_section_does_not_advance_or_complete() {
        let mut wizard = ProfileWizard::new();
        let calls = Cell::new(0);
        let err = wizard.advance(|_| calls.set(calls.get() + 1)).unwrap_err();

        assert_eq!(wizard.current_section(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(err.title, "Please complete all fields");
        assert_eq!(err.missing, vec![ProfileField::Name, ProfileField::Education]);
    }

    #[test]
    fn test_partially_filled_section_is_rejected() {
        let mut wizard = ProfileWizard::new();
        wizard.set_field(ProfileField::Name, "Ada");
        let err = wizard.advance(|_| {}).unwrap_err();
        assert_eq!(err.missing, vec![ProfileField::Education]);
        assert_eq!(wizard.current_section(), 0);
    }

    #[test]
    fn test_filled_section_advances() {
        let mut wizard = ProfileWizard::new();
        fill_section(&mut wizard, 0);
        assert_eq!(wizard.advance(|_| {}), Ok(WizardStep::Section(1)));
        assert_eq!(wizard.section().title, "Experience");
    }

    #[test]
    fn test_back_keeps_values() {
        let mut wizard = ProfileWizard::new();
        fill_section(&mut wizard, 0);
        wizard.advance(|_| {}).unwrap();
        wizard.set_field(ProfileField::Skills, "Rust");
        assert_eq!(wizard.back(), 0);
        assert_eq!(wizard.draft().name, "filled");
        assert_eq!(wizard.draft().skills, "Rust");
        assert_eq!(wizard.back(), 0, "back from the first section stays put");
    }

    #[test]
    fn test_full_walk_invokes_callback_once_with_profile() {
        let mut wizard = ProfileWizard::new();
        let received = RefCell::new(Vec::new());

        for index in 0..SECTIONS.len() {
            fill_section(&mut wizard, index);
            wizard.advance(|p| received.borrow_mut().push(p)).unwrap();
        }

        let received = received.into_inner();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].interests, "data-ai");
        assert_eq!(received[0].experience, "3-5");
    }

    #[test]
    fn test_submit_rejects_when_earlier_field_cleared() {
        let mut wizard = ProfileWizard::new();
        for index in 0..2 {
            fill_section(&mut wizard, index);
            wizard.advance(|_| {}).unwrap();
        }
        fill_section(&mut wizard, 2);
        wizard.set_field(ProfileField::Name, "");

        let calls = Cell::new(0);
        let err = wizard.advance(|_| calls.set(calls.get() + 1)).unwrap_err();
        assert_eq!(calls.get(), 0);
        assert_eq!(err.description, SUBMIT_HINT);
        assert_eq!(err.missing, vec![ProfileField::Name]);
        assert_eq!(wizard.current_section(), 2);
    }

    #[test]
    fn test_error_message_reads_as_notification() {
        let err = ProfileWizard::new().advance(|_| {}).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please complete all fields: Fill in all required information to continue."
        );
    }
}
