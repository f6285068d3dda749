use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tracing::{info, warn};

use crate::database::{ActivityDirectory, EnrollError};
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("activity '{0}' not found")]
    ActivityNotFound(String),
    #[error("{email} is already signed up for '{activity}'")]
    AlreadyEnrolled { activity: String, email: String },
    #[error("no email parameter given")]
    MissingEmail,
}

impl From<EnrollError> for SignupError {
    fn from(err: EnrollError) -> Self {
        match err {
            EnrollError::NotFound(activity) => SignupError::ActivityNotFound(activity),
            EnrollError::AlreadyEnrolled { activity, email } => {
                SignupError::AlreadyEnrolled { activity, email }
            }
        }
    }
}

/// All activities keyed by name. Serializes as a JSON object whose keys keep
/// the directory's definition order.
#[derive(Debug, Clone)]
pub struct ActivityListing {
    pub activities: Vec<Activity>,
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SignupConfirmation {
    pub message: String,
    #[serde(skip)]
    pub participant_count: usize,
}

pub fn list_activities(directory: &ActivityDirectory) -> ActivityListing {
    ActivityListing {
        activities: directory.list(),
    }
}

pub fn get_activity(directory: &ActivityDirectory, name: &str) -> Result<Activity, SignupError> {
    directory
        .get(name)
        .ok_or_else(|| SignupError::ActivityNotFound(name.to_string()))
}

pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<SignupConfirmation, SignupError> {
    match directory.enroll(activity_name, email) {
        Ok(participant_count) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = participant_count,
                "student signed up"
            );
            Ok(SignupConfirmation {
                message: format!("Signed up {} for {}", email, activity_name),
                participant_count,
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}
