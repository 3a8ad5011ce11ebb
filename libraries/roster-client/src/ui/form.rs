//! Add/edit form values and their validation rules.

use chrono::NaiveDate;
use roster_core::{Birthdate, CreateUser, Role, User, UserStatus};

/// Which dialog a form belongs to. The two dialogs word some messages
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Add,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Role,
    Status,
    Birthdate,
}

/// A failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Values currently entered in a user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormValues {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
    pub birthdate: Option<NaiveDate>,
}

impl UserFormValues {
    /// Prefill from an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: Some(user.role),
            status: Some(user.status),
            birthdate: Some(user.birthdate.date()),
        }
    }

    /// Check every rule, returning the submittable input or all failures.
    pub fn validate(&self, kind: FormKind) -> Result<CreateUser, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        if self.name.trim().is_empty() {
            fail(
                FormField::Name,
                match kind {
                    FormKind::Add => "Please input the user name!",
                    FormKind::Edit => "Please input the name!",
                },
            );
        }

        let email = self.email.trim();
        match kind {
            FormKind::Add if email.is_empty() => fail(FormField::Email, "Please input the email!"),
            FormKind::Add if !is_valid_email(email) => {
                fail(FormField::Email, "Please enter a valid email!");
            }
            FormKind::Edit if email.is_empty() || !is_valid_email(email) => {
                fail(FormField::Email, "Please input a valid email!");
            }
            _ => {}
        }

        if self.role.is_none() {
            fail(FormField::Role, "Please select a role!");
        }
        if self.status.is_none() {
            fail(FormField::Status, "Please select a status!");
        }
        let birthdate = self.birthdate.and_then(|date| Birthdate::from_date(date).ok());
        if birthdate.is_none() {
            fail(
                FormField::Birthdate,
                match kind {
                    FormKind::Add => "Please select a date of birth!",
                    FormKind::Edit => "Please select a birthdate!",
                },
            );
        }

        match (self.role, self.status, birthdate) {
            (Some(role), Some(status), Some(birthdate)) if errors.is_empty() => Ok(CreateUser {
                name: self.name.trim().to_string(),
                email: email.to_string(),
                role,
                status,
                birthdate,
            }),
            _ => Err(errors),
        }
    }
}

/// Loose address check: one `@`, a non-empty local part, and a dotted
/// domain without empty labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}
