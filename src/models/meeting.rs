//! Meeting and meeting registry models.
//!
//! A meeting is a named group of participants. The registry accumulates
//! meetings in first-seen order; that order fixes node indices in the
//! conflict graph built from it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Result, TimetableError};

/// A meeting to be placed in a time slot.
///
/// Participants keep their registration order. Duplicates are allowed and
/// harmless: conflicts are computed over the participant *set*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique meeting identifier.
    pub id: String,
    /// Participant identifiers, in registration order.
    pub participants: Vec<String>,
}

impl Meeting {
    /// Creates a meeting with no participants.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            participants: Vec::new(),
        }
    }

    /// Adds a participant.
    pub fn with_participant(mut self, participant: impl Into<String>) -> Self {
        self.participants.push(participant.into());
        self
    }

    /// Adds several participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants
            .extend(participants.into_iter().map(Into::into));
        self
    }

    /// Distinct participants, sorted.
    pub fn participant_set(&self) -> BTreeSet<&str> {
        self.participants.iter().map(String::as_str).collect()
    }

    /// Participants attending both meetings, sorted and unique.
    pub fn shared_participants(&self, other: &Meeting) -> Vec<String> {
        let mine = self.participant_set();
        let theirs = other.participant_set();
        mine.intersection(&theirs).map(|p| p.to_string()).collect()
    }

    /// Whether `participant` attends this meeting.
    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }
}

/// Ordered collection of meeting registrations.
///
/// Registering an existing identifier extends its participant list
/// instead of replacing it. Deserialization goes through the same path,
/// so repeated ids in input data merge and empty ids are rejected.
///
/// # Example
///
/// ```
/// use u_timetable::models::MeetingRegistry;
///
/// let mut registry = MeetingRegistry::new();
/// registry.add_participants("standup", ["Ana", "Bo"]).unwrap();
/// registry.add_participants("standup", ["Cy"]).unwrap();
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("standup").unwrap().participants.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Meeting>", into = "Vec<Meeting>")]
pub struct MeetingRegistry {
    meetings: Vec<Meeting>,
}

impl MeetingRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers participants for a meeting.
    ///
    /// A new identifier creates a meeting; a known one has `participants`
    /// appended. Rejects an empty identifier.
    pub fn add_participants<I, S>(&mut self, meeting_id: &str, participants: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if meeting_id.is_empty() {
            return Err(TimetableError::EmptyMeetingId);
        }
        let participants: Vec<String> = participants.into_iter().map(Into::into).collect();
        match self.meetings.iter_mut().find(|m| m.id == meeting_id) {
            Some(meeting) => meeting.participants.extend(participants),
            None => self
                .meetings
                .push(Meeting::new(meeting_id).with_participants(participants)),
        }
        Ok(())
    }

    /// Registers a whole meeting, merging with any existing one of the same id.
    pub fn add_meeting(&mut self, meeting: Meeting) -> Result<()> {
        let Meeting { id, participants } = meeting;
        self.add_participants(&id, participants)
    }

    /// Builder form of [`add_meeting`](Self::add_meeting).
    pub fn with_meeting(mut self, meeting: Meeting) -> Result<Self> {
        self.add_meeting(meeting)?;
        Ok(self)
    }

    /// Looks up a meeting by id.
    pub fn get(&self, meeting_id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == meeting_id)
    }

    /// Meetings in registration order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    /// Number of registered meetings.
    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Whether no meeting has been registered.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }
}

impl TryFrom<Vec<Meeting>> for MeetingRegistry {
    type Error = TimetableError;

    fn try_from(meetings: Vec<Meeting>) -> Result<Self> {
        let mut registry = Self::new();
        for meeting in meetings {
            registry.add_meeting(meeting)?;
        }
        Ok(registry)
    }
}

impl From<MeetingRegistry> for Vec<Meeting> {
    fn from(registry: MeetingRegistry) -> Self {
        registry.meetings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_builder() {
        let m = Meeting::new("review")
            .with_participant("Ana")
            .with_participants(["Bo", "Ana"]);
        assert_eq!(m.participants, vec!["Ana", "Bo", "Ana"]);
        assert_eq!(m.participant_set().len(), 2);
        assert!(m.has_participant("Bo"));
        assert!(!m.has_participant("Cy"));
    }

    #[test]
    fn test_shared_participants() {
        let a = Meeting::new("a").with_participants(["Sanja", "Graham", "Edmund"]);
        let b = Meeting::new("b").with_participants(["Kath", "Sanja", "Graham", "Graham"]);
        assert_eq!(a.shared_participants(&b), vec!["Graham", "Sanja"]);

        let c = Meeting::new("c").with_participant("Kath");
        assert!(a.shared_participants(&c).is_empty());
    }

    #[test]
    fn test_registry_appends_on_repeat() {
        let mut r = MeetingRegistry::new();
        r.add_participants("1", ["Edmund"]).unwrap();
        r.add_participants("2", ["Graham"]).unwrap();
        r.add_participants("1", ["Sanja", "Edmund"]).unwrap();

        assert_eq!(r.len(), 2);
        assert_eq!(r.meetings()[0].id, "1");
        assert_eq!(r.meetings()[1].id, "2");
        assert_eq!(r.get("1").unwrap().participants, vec!["Edmund", "Sanja", "Edmund"]);
    }

    #[test]
    fn test_registry_rejects_empty_id() {
        let mut r = MeetingRegistry::new();
        let err = r.add_participants("", ["Ana"]).unwrap_err();
        assert_eq!(err, TimetableError::EmptyMeetingId);
        assert!(r.is_empty());
    }

    #[test]
    fn test_registry_allows_empty_participants() {
        let mut r = MeetingRegistry::new();
        r.add_participants("solo", Vec::<String>::new()).unwrap();
        assert_eq!(r.len(), 1);
        assert!(r.get("solo").unwrap().participants.is_empty());
    }

    #[test]
    fn test_with_meeting_merges() {
        let r = MeetingRegistry::new()
            .with_meeting(Meeting::new("x").with_participant("Ana"))
            .unwrap()
            .with_meeting(Meeting::new("x").with_participant("Bo"))
            .unwrap();
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("x").unwrap().participants, vec!["Ana", "Bo"]);
    }
}
