//! User Form Controller
//!
//! Field values, validation and the create-or-update decision for the
//! add-user page. Browser glue lives in `pages::add_user`; everything here is
//! plain data so the state machine can be exercised directly.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::api::{ApiResult, UserApi};
use crate::state::models::UserRecord;

/// Minimum length for first and last names
pub const MIN_NAME_LEN: usize = 2;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Editable fields of the user form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    Rfid,
    Role,
    Department,
    Fleet,
}

impl UserField {
    pub const ALL: [UserField; 9] = [
        UserField::FirstName,
        UserField::MiddleName,
        UserField::LastName,
        UserField::Email,
        UserField::Phone,
        UserField::Rfid,
        UserField::Role,
        UserField::Department,
        UserField::Fleet,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserField::FirstName => "First name",
            UserField::MiddleName => "Middle name",
            UserField::LastName => "Last name",
            UserField::Email => "Email",
            UserField::Phone => "Phone",
            UserField::Rfid => "RFID",
            UserField::Role => "Role",
            UserField::Department => "Department",
            UserField::Fleet => "Fleet",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            UserField::FirstName
                | UserField::LastName
                | UserField::Email
                | UserField::Role
                | UserField::Department
        )
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation failures; these block submission without any inline message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(UserField),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: UserField, min: usize },

    #[error("Email address is malformed")]
    InvalidEmail,
}

/// Why a submission did not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("A submission is already in flight")]
    AlreadySubmitting,
}

/// Current field values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub rfid: String,
    pub role: String,
    pub department: String,
    pub fleet: String,
}

impl UserForm {
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            rfid: user.rfid.clone(),
            role: user.role.clone(),
            department: user.department.clone(),
            fleet: user.fleet.clone(),
        }
    }

    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::MiddleName => &self.middle_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Rfid => &self.rfid,
            UserField::Role => &self.role,
            UserField::Department => &self.department,
            UserField::Fleet => &self.fleet,
        }
    }

    pub fn set(&mut self, field: UserField, value: String) {
        let slot = match field {
            UserField::FirstName => &mut self.first_name,
            UserField::MiddleName => &mut self.middle_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::Rfid => &mut self.rfid,
            UserField::Role => &mut self.role,
            UserField::Department => &mut self.department,
            UserField::Fleet => &mut self.fleet,
        };
        *slot = value;
    }

    /// Check required fields, name lengths and email shape
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in UserField::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                return Err(ValidationError::Required(field));
            }
        }

        for field in [UserField::FirstName, UserField::LastName] {
            if self.get(field).trim().chars().count() < MIN_NAME_LEN {
                return Err(ValidationError::TooShort {
                    field,
                    min: MIN_NAME_LEN,
                });
            }
        }

        if !email_pattern().is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }

    /// Build the record sent to the backend
    pub fn to_record(&self, id: String, image: Option<&str>) -> UserRecord {
        UserRecord {
            id,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            rfid: self.rfid.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
            fleet: self.fleet.clone(),
            image: image.unwrap_or_default().to_string(),
        }
    }
}

/// Lifecycle of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    /// No existing record located
    Empty,
    /// First fetched record loaded into the form
    Prefilled,
    Submitting,
    /// Saved; the page navigates away
    Done,
    /// Save failed; form stays editable
    Error,
}

/// Request produced by a valid submit
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(UserRecord),
    Update { id: String, record: UserRecord },
}

impl Submission {
    pub fn record(&self) -> &UserRecord {
        match self {
            Submission::Create(record) => record,
            Submission::Update { record, .. } => record,
        }
    }
}

/// Form state machine
#[derive(Clone, Debug)]
pub struct UserFormController {
    form: UserForm,
    user_id: Option<String>,
    image: Option<String>,
    phase: FormPhase,
    /// Last id handed out for a create
    last_minted: Option<i64>,
}

impl Default for UserFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl UserFormController {
    pub fn new() -> Self {
        Self {
            form: UserForm::default(),
            user_id: None,
            image: None,
            phase: FormPhase::Empty,
            last_minted: None,
        }
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Load the first user, if any. Returns whether the form was prefilled.
    pub fn prefill(&mut self, users: &[UserRecord]) -> bool {
        let Some(user) = users.first() else {
            return false;
        };

        self.user_id = Some(user.id.clone()).filter(|id| !id.is_empty());
        self.form = UserForm::from_record(user);
        self.image = Some(user.image.clone()).filter(|image| !image.is_empty());
        self.phase = FormPhase::Prefilled;
        true
    }

    pub fn set_field(&mut self, field: UserField, value: String) {
        self.form.set(field, value);
    }

    pub fn set_image(&mut self, data_uri: String) {
        self.image = Some(data_uri);
    }

    /// Validate and decide between create and update.
    ///
    /// On success the controller moves to [`FormPhase::Submitting`]; the
    /// caller dispatches the returned submission and reports back through
    /// [`finish`](Self::finish).
    pub fn begin_submit(&mut self, now_ms: i64) -> Result<Submission, FormError> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.form.validate()?;

        let submission = match self.user_id.clone() {
            Some(id) => Submission::Update {
                record: self.form.to_record(id.clone(), self.image()),
                id,
            },
            None => {
                let id = self.mint_id(now_ms);
                Submission::Create(self.form.to_record(id, self.image()))
            }
        };

        self.phase = FormPhase::Submitting;
        Ok(submission)
    }

    /// Record the outcome of a dispatched submission
    pub fn finish(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            FormPhase::Done
        } else {
            FormPhase::Error
        };
    }

    /// Time-derived id, strictly greater than any minted before
    fn mint_id(&mut self, now_ms: i64) -> String {
        let id = match self.last_minted {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_minted = Some(id);
        id.to_string()
    }
}

/// Send a submission to the backend
pub async fn dispatch<A: UserApi + ?Sized>(api: &A, submission: &Submission) -> ApiResult<UserRecord> {
    match submission {
        Submission::Create(record) => api.create_user(record).await,
        Submission::Update { id, record } => api.update_user(id, record).await,
    }
}
