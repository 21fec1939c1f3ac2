//! Notification drafts for the in-app notification feed.
//!
//! Each builder returns a [`NotificationDraft`] that the caller persists in the
//! same transaction as the change that triggered it. Delivery is by polling
//! the `notifications` table; nothing here sends anything.

use serde::Serialize;

use crate::glucose::GlucoseCategory;
use crate::types::DbId;

/// Name used when a patient or sender cannot be found.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Name used when a prescribing doctor cannot be found.
pub const FALLBACK_DOCTOR_NAME: &str = "Your doctor";

/// Status value that, on an appointment update, also alerts the doctor.
pub const STATUS_RESCHEDULED: &str = "rescheduled";

/// Feed category stored in `notifications.kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Glucose,
    Medication,
    Message,
    Appointment,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Glucose => "glucose",
            NotificationKind::Medication => "medication",
            NotificationKind::Message => "message",
            NotificationKind::Appointment => "appointment",
        }
    }
}

/// A notification ready to be inserted for `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationDraft {
    pub user_id: DbId,
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
}

impl NotificationDraft {
    fn new(
        user_id: DbId,
        kind: NotificationKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Glucose
// ---------------------------------------------------------------------------

/// Drafts for the assigned doctor after a patient logs a reading.
///
/// Always contains the routine "new value" notice. A second, urgent draft is
/// appended when the reading is hypo- or hyperglycemic.
pub fn glucose_logged(
    doctor_id: DbId,
    patient_name: &str,
    glucose_level: f64,
    context: &str,
    category: GlucoseCategory,
) -> Vec<NotificationDraft> {
    let mut drafts = vec![NotificationDraft::new(
        doctor_id,
        NotificationKind::Glucose,
        format!("{patient_name} has logged a new blood glucose value"),
        format!(
            "{patient_name} has logged {glucose_level} mg/dL ({context}) for today, check it out!"
        ),
    )];

    if category.is_alert() {
        let label = category.as_str().to_lowercase();
        drafts.push(NotificationDraft::new(
            doctor_id,
            NotificationKind::Glucose,
            format!("ALERT: {patient_name} has had a {label}!"),
            format!(
                "{patient_name} logged {label} ({glucose_level} mg/dL, {context}). \
                 Immediate attention may be needed."
            ),
        ));
    }

    drafts
}

// ---------------------------------------------------------------------------
// Medications
// ---------------------------------------------------------------------------

/// Medication fields quoted in patient notifications.
#[derive(Debug, Clone, Copy)]
pub struct MedicationRef<'a> {
    pub name: &'a str,
    pub med_type: &'a str,
}

pub fn prescription_added(
    patient_id: DbId,
    doctor_name: &str,
    medication: MedicationRef<'_>,
    dosage: &str,
) -> NotificationDraft {
    NotificationDraft::new(
        patient_id,
        NotificationKind::Medication,
        format!("New prescription from {doctor_name}"),
        format!(
            "{doctor_name} prescribed {} ({}), dosage: {dosage}",
            medication.name, medication.med_type
        ),
    )
}

pub fn dosage_updated(
    patient_id: DbId,
    doctor_name: &str,
    medication: MedicationRef<'_>,
    old_dosage: &str,
    new_dosage: &str,
) -> NotificationDraft {
    NotificationDraft::new(
        patient_id,
        NotificationKind::Medication,
        format!("Medication dosage updated by {doctor_name}"),
        format!(
            "{doctor_name} updated {} ({}) dosage: {old_dosage} → {new_dosage}",
            medication.name, medication.med_type
        ),
    )
}

pub fn medication_removed(
    patient_id: DbId,
    doctor_name: &str,
    medication: MedicationRef<'_>,
    old_dosage: &str,
) -> NotificationDraft {
    NotificationDraft::new(
        patient_id,
        NotificationKind::Medication,
        format!("Medication removed by {doctor_name}"),
        format!(
            "{doctor_name} removed {} ({}), dosage: {old_dosage}",
            medication.name, medication.med_type
        ),
    )
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Draft for the receiver of a chat message.
///
/// Doctors get the sender's name in the title and body; everyone else gets a
/// generic title with the raw message as body.
pub fn message_received(
    receiver_id: DbId,
    receiver_is_doctor: bool,
    sender_name: &str,
    message: &str,
) -> NotificationDraft {
    if receiver_is_doctor {
        NotificationDraft::new(
            receiver_id,
            NotificationKind::Message,
            format!("New message from {sender_name}"),
            format!("{sender_name}: {message}"),
        )
    } else {
        NotificationDraft::new(receiver_id, NotificationKind::Message, "New Message", message)
    }
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

pub fn appointment_created(patient_id: DbId) -> NotificationDraft {
    NotificationDraft::new(
        patient_id,
        NotificationKind::Appointment,
        "New Appointment",
        "You have a new appointment scheduled.",
    )
}

/// Drafts after an appointment update.
///
/// The patient is always told. The doctor is told as well when the new status
/// is "rescheduled" (case-insensitive).
pub fn appointment_updated(
    patient_id: DbId,
    doctor_id: DbId,
    patient_name: &str,
    status: Option<&str>,
) -> Vec<NotificationDraft> {
    let mut drafts = vec![NotificationDraft::new(
        patient_id,
        NotificationKind::Appointment,
        "Appointment Updated",
        "Your appointment was updated.",
    )];

    if status.is_some_and(|s| s.eq_ignore_ascii_case(STATUS_RESCHEDULED)) {
        drafts.push(NotificationDraft::new(
            doctor_id,
            NotificationKind::Appointment,
            format!("{patient_name} rescheduled an appointment"),
            format!("{patient_name} has rescheduled their appointment. Please review."),
        ));
    }

    drafts
}

/// Drafts for both parties after an appointment is cancelled.
pub fn appointment_cancelled(
    patient_id: DbId,
    doctor_id: DbId,
    patient_name: &str,
) -> Vec<NotificationDraft> {
    vec![
        NotificationDraft::new(
            patient_id,
            NotificationKind::Appointment,
            "Appointment Cancelled",
            "Your appointment was cancelled.",
        ),
        NotificationDraft::new(
            doctor_id,
            NotificationKind::Appointment,
            format!("{patient_name} cancelled an appointment"),
            format!("{patient_name} has cancelled their appointment."),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_reading_sends_single_routine_notice() {
        let drafts = glucose_logged(7, "Alice", 120.0, "Fasting", GlucoseCategory::Normal);

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].user_id, 7);
        assert_eq!(drafts[0].kind, NotificationKind::Glucose);
        assert_eq!(
            drafts[0].title,
            "Alice has logged a new blood glucose value"
        );
        assert_eq!(
            drafts[0].body,
            "Alice has logged 120 mg/dL (Fasting) for today, check it out!"
        );
    }

    #[test]
    fn abnormal_reading_adds_alert() {
        let drafts = glucose_logged(7, "Alice", 55.5, "Other", GlucoseCategory::Hypoglycemia);

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].title, "ALERT: Alice has had a hypoglycemia!");
        assert_eq!(
            drafts[1].body,
            "Alice logged hypoglycemia (55.5 mg/dL, Other). Immediate attention may be needed."
        );

        let drafts = glucose_logged(7, "Bob", 250.0, "Post-meal", GlucoseCategory::Hyperglycemia);
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].title, "ALERT: Bob has had a hyperglycemia!");
    }

    #[test]
    fn medication_texts() {
        let med = MedicationRef {
            name: "Metformin",
            med_type: "tablet",
        };

        let added = prescription_added(3, "Dr. Who", med, "500mg");
        assert_eq!(added.user_id, 3);
        assert_eq!(added.kind, NotificationKind::Medication);
        assert_eq!(added.title, "New prescription from Dr. Who");
        assert_eq!(added.body, "Dr. Who prescribed Metformin (tablet), dosage: 500mg");

        let updated = dosage_updated(3, "Dr. Who", med, "500mg", "850mg");
        assert_eq!(updated.title, "Medication dosage updated by Dr. Who");
        assert_eq!(
            updated.body,
            "Dr. Who updated Metformin (tablet) dosage: 500mg → 850mg"
        );

        let removed = medication_removed(3, "Dr. Who", med, "850mg");
        assert_eq!(removed.title, "Medication removed by Dr. Who");
        assert_eq!(removed.body, "Dr. Who removed Metformin (tablet), dosage: 850mg");
    }

    #[test]
    fn message_to_doctor_names_sender() {
        let draft = message_received(9, true, "Alice", "Hello doc");
        assert_eq!(draft.title, "New message from Alice");
        assert_eq!(draft.body, "Alice: Hello doc");
    }

    #[test]
    fn message_to_patient_is_generic() {
        let draft = message_received(9, false, "Dr. Who", "Take care");
        assert_eq!(draft.kind, NotificationKind::Message);
        assert_eq!(draft.title, "New Message");
        assert_eq!(draft.body, "Take care");
    }

    #[test]
    fn reschedule_notifies_doctor_case_insensitively() {
        assert_eq!(appointment_updated(1, 2, "Alice", None).len(), 1);
        assert_eq!(appointment_updated(1, 2, "Alice", Some("confirmed")).len(), 1);

        let drafts = appointment_updated(1, 2, "Alice", Some("Rescheduled"));
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].user_id, 1);
        assert_eq!(drafts[1].user_id, 2);
        assert_eq!(drafts[1].title, "Alice rescheduled an appointment");
    }

    #[test]
    fn cancellation_notifies_both_parties() {
        let drafts = appointment_cancelled(1, 2, "Alice");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "Appointment Cancelled");
        assert_eq!(drafts[1].body, "Alice has cancelled their appointment.");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(NotificationKind::Appointment).unwrap(),
            serde_json::json!("appointment")
        );
        assert_eq!(NotificationKind::Glucose.as_str(), "glucose");
    }
}
