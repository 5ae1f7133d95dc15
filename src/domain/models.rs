use serde::{Deserialize, Serialize};

/// The current screen of the booking flow.
///
/// The flow only moves forward: picking a day from any step restarts it
/// at `Time`, and there is no other backward transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Picking a day on the month calendar
    Calendar,
    /// Picking a time slot for the chosen day
    Time,
    /// Entering contact details
    Details,
    /// Confirmation screen
    Done,
}

/// Contact details collected on the details screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub guest_email: String,
    pub notes: String,
}

/// Addressable fields of [`BookingForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    GuestEmail,
    Notes,
}

impl BookingForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::GuestEmail => &self.guest_email,
            FormField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::GuestEmail => self.guest_email = value,
            FormField::Notes => self.notes = value,
        }
    }
}

/// Bookable schedule configuration: the slot catalog and display labels.
///
/// The core treats every list as an opaque ordered sequence. The defaults
/// below are the production schedule; a `tbook.json` file in the working
/// directory overrides them (see `infrastructure::config`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Bookable start times in display order. Not necessarily contiguous:
    /// the default catalog skips the 11:00-12:00 lunch hour.
    pub slots: Vec<String>,
    /// Column headers of the day grid, Monday first
    pub weekday_labels: Vec<String>,
    /// Display names for months 1-12
    pub month_names: Vec<String>,
    /// Slot length in minutes, used to compute end times
    pub slot_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            slots: [
                "8:00", "8:30", "9:00", "9:30", "10:00", "10:30", "11:00",
                "12:00", "12:30", "13:00", "13:30", "14:00", "14:30",
                "15:00", "15:30", "16:00", "16:30", "17:00",
            ]
            .map(String::from)
            .to_vec(),
            weekday_labels: ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"]
                .map(String::from)
                .to_vec(),
            month_names: [
                "January", "February", "March", "April", "May", "June",
                "July", "August", "September", "October", "November",
                "December",
            ]
            .map(String::from)
            .to_vec(),
            slot_minutes: 30,
        }
    }
}

impl ScheduleConfig {
    /// Membership test used to validate a time selection.
    pub fn has_slot(&self, time: &str) -> bool {
        self.slots.iter().any(|s| s == time)
    }

    /// Display name for a month in [1,12], or "" out of range.
    pub fn month_name(&self, month: u32) -> &str {
        month
            .checked_sub(1)
            .and_then(|i| self.month_names.get(i as usize))
            .map(|s| s.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_catalog() {
        let config = ScheduleConfig::default();

        assert_eq!(config.slots.len(), 18);
        assert_eq!(config.slots.first().unwrap(), "8:00");
        assert_eq!(config.slots.last().unwrap(), "17:00");
    }

    #[test]
    fn test_slot_catalog_lunch_gap() {
        let config = ScheduleConfig::default();

        // The lunch hour is not bookable
        assert!(config.has_slot("11:00"));
        assert!(!config.has_slot("11:30"));
        assert!(config.has_slot("12:00"));

        // "11:00" is immediately followed by "12:00" in display order
        let pos = config.slots.iter().position(|s| s == "11:00").unwrap();
        assert_eq!(config.slots[pos + 1], "12:00");
    }

    #[test]
    fn test_has_slot() {
        let config = ScheduleConfig::default();

        assert!(config.has_slot("9:00"));
        assert!(config.has_slot("16:30"));
        assert!(!config.has_slot("7:30"));
        assert!(!config.has_slot("17:30"));
        assert!(!config.has_slot("9:15"));
        assert!(!config.has_slot(""));
    }

    #[test]
    fn test_labels() {
        let config = ScheduleConfig::default();

        assert_eq!(config.weekday_labels.len(), 7);
        assert_eq!(config.weekday_labels[0], "MON");
        assert_eq!(config.weekday_labels[6], "SUN");

        assert_eq!(config.month_names.len(), 12);
        assert_eq!(config.month_name(1), "January");
        assert_eq!(config.month_name(12), "December");
        assert_eq!(config.month_name(0), "");
        assert_eq!(config.month_name(13), "");
    }

    #[test]
    fn test_form_field_access() {
        let mut form = BookingForm::default();
        assert!(form.get(FormField::Name).is_empty());

        form.set(FormField::Name, "Ada".to_string());
        form.set(FormField::Email, "ada@example.com".to_string());
        form.set(FormField::GuestEmail, "guest@example.com".to_string());
        form.set(FormField::Notes, "Bring the contract".to_string());

        assert_eq!(form.get(FormField::Name), "Ada");
        assert_eq!(form.get(FormField::Email), "ada@example.com");
        assert_eq!(form.get(FormField::GuestEmail), "guest@example.com");
        assert_eq!(form.get(FormField::Notes), "Bring the contract");
    }
}
