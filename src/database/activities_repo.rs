use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;

use crate::database::seed::seed_activities;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollError {
    #[error("activity '{0}' does not exist")]
    NotFound(String),
    #[error("{email} is already enrolled in '{activity}'")]
    AlreadyEnrolled { activity: String, email: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("activity '{0}' is defined more than once")]
pub struct DuplicateActivityError(pub String);

struct ActivityEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    // Signup order. Guarded per activity so check-then-append is atomic.
    participants: Mutex<Vec<String>>,
}

impl ActivityEntry {
    fn snapshot(&self) -> Activity {
        Activity {
            name: self.name.clone(),
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.lock().clone(),
        }
    }
}

/// In-memory set of activities and their enrollments.
///
/// The set of activities is fixed at construction; only participant lists
/// change afterwards. Each activity carries its own lock, so signups for
/// different activities never contend.
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
    index: HashMap<String, usize>,
}

impl ActivityDirectory {
    /// Directory holding the school's fixed activity list.
    pub fn seeded() -> Result<Self, DuplicateActivityError> {
        Self::from_activities(seed_activities())
    }

    pub fn from_activities(
        activities: impl IntoIterator<Item = Activity>,
    ) -> Result<Self, DuplicateActivityError> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for activity in activities {
            if index.contains_key(&activity.name) {
                return Err(DuplicateActivityError(activity.name));
            }

            // Keep the no-duplicates invariant even for pre-filled lists.
            let mut participants: Vec<String> = Vec::with_capacity(activity.participants.len());
            for email in activity.participants {
                if !participants.contains(&email) {
                    participants.push(email);
                }
            }

            index.insert(activity.name.clone(), entries.len());
            entries.push(ActivityEntry {
                name: activity.name,
                description: activity.description,
                schedule: activity.schedule,
                max_participants: activity.max_participants,
                participants: Mutex::new(participants),
            });
        }

        Ok(Self { entries, index })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Snapshot of every activity, in the order they were defined.
    pub fn list(&self) -> Vec<Activity> {
        self.entries.iter().map(ActivityEntry::snapshot).collect()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.entry(name).map(ActivityEntry::snapshot)
    }

    /// Appends `email` to the activity's participants and returns the new
    /// participant count.
    ///
    /// `max_participants` is informational only and is not checked here.
    pub fn enroll(&self, name: &str, email: &str) -> Result<usize, EnrollError> {
        let entry = self
            .entry(name)
            .ok_or_else(|| EnrollError::NotFound(name.to_string()))?;

        let mut participants = entry.participants.lock();
        if participants.iter().any(|p| p == email) {
            return Err(EnrollError::AlreadyEnrolled {
                activity: entry.name.clone(),
                email: email.to_string(),
            });
        }
        participants.push(email.to_string());
        Ok(participants.len())
    }

    fn entry(&self, name: &str) -> Option<&ActivityEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }
}
