//! Client-side draft validation.
//!
//! These checks run before any request is sent; a draft that fails them never
//! reaches the API client or the store. The rules and messages mirror the
//! admin panel's forms.

use crate::{NewState, NewTask, TaskUpdate};
use thiserror::Error;

/// A per-field validation failure, rendered inline next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn check_task_fields(
    title: &str,
    description: &str,
    due_date: &str,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let title = title.trim();
    if title.is_empty() {
        errors.push(ValidationError::new("title", "El título es obligatorio"));
    } else if title.chars().count() < 3 {
        errors.push(ValidationError::new(
            "title",
            "El título debe tener al menos 3 caracteres",
        ));
    }

    let description = description.trim();
    if description.is_empty() {
        errors.push(ValidationError::new(
            "description",
            "La descripción es obligatoria",
        ));
    } else if description.chars().count() < 5 {
        errors.push(ValidationError::new(
            "description",
            "La descripción debe tener al menos 5 caracteres",
        ));
    }

    if due_date.trim().is_empty() {
        errors.push(ValidationError::new(
            "due_date",
            "La fecha de vencimiento es obligatoria",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl NewTask {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        check_task_fields(&self.title, &self.description, &self.due_date)
    }
}

impl TaskUpdate {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        check_task_fields(&self.title, &self.description, &self.due_date)
    }
}

impl NewState {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(vec![ValidationError::new(
                "name",
                "El nombre es obligatorio",
            )]);
        }
        if name.chars().count() < 2 {
            return Err(vec![ValidationError::new(
                "name",
                "El nombre debe tener al menos 2 caracteres",
            )]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewTask {
        NewTask {
            title: "Actualizar documentación".to_string(),
            description: "Revisar la guía del panel".to_string(),
            due_date: "2026-09-01".to_string(),
            state_id: 1,
        }
    }

    #[test]
    fn test_valid_task_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut d = draft();
        d.title = "  ".to_string();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[0].message, "El título es obligatorio");
    }

    #[test]
    fn test_short_title_rejected() {
        let mut d = draft();
        d.title = "ab".to_string();
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors[0].message,
            "El título debe tener al menos 3 caracteres"
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let mut d = draft();
        d.description = "abcd".to_string();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn test_missing_due_date_rejected() {
        let mut d = draft();
        d.due_date = String::new();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors[0].field, "due_date");
    }

    #[test]
    fn test_all_failures_reported_together() {
        let d = NewTask {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            state_id: 1,
        };
        assert_eq!(d.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn test_state_name_min_length() {
        let short = NewState {
            name: "P".to_string(),
            is_active: true,
        };
        let errors = short.validate().unwrap_err();
        assert_eq!(
            errors[0].message,
            "El nombre debe tener al menos 2 caracteres"
        );

        let ok = NewState {
            name: "En curso".to_string(),
            is_active: true,
        };
        assert!(ok.validate().is_ok());
    }
}
