//! Attendance status as a tagged variant.
//!
//! The store and the wire both use the canonical note strings ("Geldi",
//! "Gelmedi", "Mazeretli: <reason>"); this type is the single source of
//! truth they are derived from. The `attended` boolean exposed in responses
//! is computed from the variant, never stored separately.

pub const LABEL_CAME: &str = "Geldi";
pub const LABEL_ABSENT: &str = "Gelmedi";
pub const LABEL_UNDETERMINED: &str = "Belirsiz";
pub const EXCUSED_PREFIX: &str = "Mazeretli";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceStatus {
    Undetermined,
    Came,
    Absent,
    Excused(String),
}

impl AttendanceStatus {
    pub fn attended(&self) -> bool {
        matches!(self, AttendanceStatus::Came)
    }

    /// Canonical note string for this status.
    pub fn label(&self) -> String {
        match self {
            AttendanceStatus::Came => LABEL_CAME.to_string(),
            AttendanceStatus::Absent => LABEL_ABSENT.to_string(),
            AttendanceStatus::Excused(reason) => format!("{EXCUSED_PREFIX}: {reason}"),
            AttendanceStatus::Undetermined => LABEL_UNDETERMINED.to_string(),
        }
    }

    /// Parse a stored note. Anything outside the recognized forms reads as
    /// undetermined rather than failing.
    pub fn from_note(note: &str) -> Self {
        if note == LABEL_CAME {
            AttendanceStatus::Came
        } else if note == LABEL_ABSENT {
            AttendanceStatus::Absent
        } else if let Some(rest) = note.strip_prefix(EXCUSED_PREFIX) {
            AttendanceStatus::Excused(rest.trim_start_matches(':').trim().to_string())
        } else {
            AttendanceStatus::Undetermined
        }
    }

    /// Validate a caller-supplied status label. An excusal requires a
    /// non-blank reason, either in the separate `reason` field or inline
    /// after a colon ("Mazeretli: Hastalık").
    pub fn from_request(status: &str, reason: Option<&str>) -> Result<Self, String> {
        let status = status.trim();
        match status {
            LABEL_CAME => Ok(AttendanceStatus::Came),
            LABEL_ABSENT => Ok(AttendanceStatus::Absent),
            EXCUSED_PREFIX => match reason.map(str::trim).filter(|r| !r.is_empty()) {
                Some(r) => Ok(AttendanceStatus::Excused(r.to_string())),
                None => Err("An excuse reason is required for status \"Mazeretli\"".to_string()),
            },
            _ => {
                if let Some(rest) = status.strip_prefix(EXCUSED_PREFIX) {
                    let inline = rest.trim_start_matches(':').trim();
                    if !inline.is_empty() {
                        return Ok(AttendanceStatus::Excused(inline.to_string()));
                    }
                    return Err(
                        "An excuse reason is required for status \"Mazeretli\"".to_string()
                    );
                }
                Err(format!("Unknown attendance status: {status}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_round_trip() {
        for status in [
            AttendanceStatus::Came,
            AttendanceStatus::Absent,
            AttendanceStatus::Excused("Hastalık".to_string()),
        ] {
            assert_eq!(AttendanceStatus::from_note(&status.label()), status);
        }
    }

    #[test]
    fn excused_label_carries_the_reason() {
        let status = AttendanceStatus::Excused("Hastalık".to_string());
        assert_eq!(status.label(), "Mazeretli: Hastalık");
        assert!(!status.attended());
    }

    #[test]
    fn unknown_notes_read_as_undetermined() {
        assert_eq!(
            AttendanceStatus::from_note("geldi"),
            AttendanceStatus::Undetermined
        );
        assert_eq!(
            AttendanceStatus::from_note(""),
            AttendanceStatus::Undetermined
        );
    }

    #[test]
    fn request_parsing_requires_a_reason_for_excusals() {
        assert!(AttendanceStatus::from_request("Mazeretli", None).is_err());
        assert!(AttendanceStatus::from_request("Mazeretli", Some("   ")).is_err());
        assert_eq!(
            AttendanceStatus::from_request("Mazeretli", Some("İzinli")).unwrap(),
            AttendanceStatus::Excused("İzinli".to_string())
        );
        assert_eq!(
            AttendanceStatus::from_request("Mazeretli: Hastalık", None).unwrap(),
            AttendanceStatus::Excused("Hastalık".to_string())
        );
    }

    #[test]
    fn request_parsing_rejects_unknown_labels() {
        assert!(AttendanceStatus::from_request("Belki", None).is_err());
        assert!(AttendanceStatus::from_request("", None).is_err());
    }

    #[test]
    fn only_came_counts_as_attended() {
        assert!(AttendanceStatus::Came.attended());
        assert!(!AttendanceStatus::Absent.attended());
        assert!(!AttendanceStatus::Undetermined.attended());
    }
}
