//! Application state management for the terminal booking flow.
//!
//! This module contains the booking state machine driving the
//! calendar / time / details / done screens, plus the surrounding UI
//! state (cursors, focus, status message) for the terminal interface.

use crate::domain::{add_minutes, BookingForm, Calendar, FormField, ScheduleConfig, Step};
use chrono::Datelike;

/// The booking state machine: one instance per session.
///
/// Holds the visible calendar page, the current selections and the
/// contact form, and enforces the legal step transitions. Illegal
/// operations are silently ignored rather than surfaced; the flow has
/// no error states. The presentation layer mutates a `Booking` only
/// through the intent methods below and re-reads the public fields
/// after each one.
///
/// # Examples
///
/// ```
/// use tbook::application::Booking;
/// use tbook::domain::Step;
///
/// let booking = Booking::default();
/// assert_eq!(booking.step, Step::Calendar);
/// assert!(booking.selected_day.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Booking {
    /// Year of the visible calendar page
    pub year: i32,
    /// Month of the visible calendar page, 1-12
    pub month: u32,
    /// Day picked on the visible (or most recently visible) page.
    /// Keyed by day-of-month number only, so it also renders as
    /// selected on another month's page with the same day number.
    pub selected_day: Option<u32>,
    /// Picked time slot, always a member of the catalog once set
    pub selected_time: Option<String>,
    /// Current screen of the flow
    pub step: Step,
    /// Contact details entered on the details screen
    pub form: BookingForm,
    /// Whether the guest email input is shown; independent of the
    /// guest email content
    pub show_guest_field: bool,
    /// Slot catalog and display labels
    pub config: ScheduleConfig,
    /// Calendar math anchored to this session's today
    pub calendar: Calendar,
}

impl Default for Booking {
    fn default() -> Self {
        Self::new(ScheduleConfig::default(), Calendar::new())
    }
}

impl Booking {
    /// Creates a fresh booking session showing today's month.
    pub fn new(config: ScheduleConfig, calendar: Calendar) -> Self {
        let today = calendar.today();
        Self {
            year: today.year(),
            month: today.month(),
            selected_day: None,
            selected_time: None,
            step: Step::Calendar,
            form: BookingForm::default(),
            show_guest_field: false,
            config,
            calendar,
        }
    }

    /// Moves the visible page one month back, rolling December into the
    /// previous year. Never touches the step or the selections.
    pub fn prev_month(&mut self) {
        if self.month == 1 {
            self.month = 12;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Moves the visible page one month forward, rolling January into
    /// the next year. Never touches the step or the selections.
    pub fn next_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// Picks a day on the visible page.
    ///
    /// Ignored unless the day is available. Accepting a day clears any
    /// previously picked time and moves to the time screen, from any
    /// step: re-selecting a day mid-flow restarts the flow there.
    pub fn select_day(&mut self, day: u32) {
        if !self.is_available_day(day) {
            return;
        }
        self.selected_day = Some(day);
        self.selected_time = None;
        self.step = Step::Time;
    }

    /// Picks a time slot on the time screen.
    ///
    /// Ignored outside the time step or for a time that is not in the
    /// catalog. Does not advance the flow; that takes an explicit
    /// [`confirm_time`](Self::confirm_time).
    pub fn select_time(&mut self, time: &str) {
        if self.step != Step::Time || !self.config.has_slot(time) {
            return;
        }
        self.selected_time = Some(time.to_string());
    }

    /// Confirms the picked time and moves to the details screen.
    /// Ignored unless a time is selected on the time step.
    pub fn confirm_time(&mut self) {
        if self.step != Step::Time || self.selected_time.is_none() {
            return;
        }
        self.step = Step::Details;
    }

    /// Shows or hides the guest email input. Only wired on the details
    /// screen; ignored elsewhere.
    pub fn toggle_guest_field(&mut self) {
        if self.step != Step::Details {
            return;
        }
        self.show_guest_field = !self.show_guest_field;
    }

    /// Replaces a form field's content. Only wired on the details
    /// screen; ignored elsewhere.
    pub fn update_form(&mut self, field: FormField, value: String) {
        if self.step != Step::Details {
            return;
        }
        self.form.set(field, value);
    }

    /// Schedules the event and moves to the confirmation screen.
    /// Ignored unless on the details screen with a name and email.
    pub fn submit(&mut self) {
        if self.step != Step::Details || self.form.name.is_empty() || self.form.email.is_empty() {
            return;
        }
        self.step = Step::Done;
    }

    /// Restarts the flow: back to today's month with empty selections
    /// and a blank form. The catalog and calendar are kept.
    pub fn reset(&mut self) {
        let config = self.config.clone();
        let calendar = self.calendar.clone();
        *self = Self::new(config, calendar);
    }

    /// Whether a day of the visible page can be booked.
    pub fn is_available_day(&self, day: u32) -> bool {
        self.calendar.is_available_day(self.year, self.month, day)
    }

    /// Number of days in the visible month.
    pub fn days_in_month(&self) -> u32 {
        Calendar::days_in_month(self.year, self.month)
    }

    /// Leading empty cells before day 1 of the visible month.
    pub fn month_start_offset(&self) -> u32 {
        Calendar::month_start_offset(self.year, self.month)
    }

    /// Full weekday name of a day on the visible page.
    pub fn day_name(&self, day: u32) -> &'static str {
        Calendar::day_name(self.year, self.month, day)
    }

    /// Display name of the visible month.
    pub fn month_name(&self) -> &str {
        self.config.month_name(self.month)
    }

    /// The visible page as a Monday-first grid: leading `None` padding,
    /// then `Some(1..=days_in_month)`.
    pub fn day_cells(&self) -> Vec<Option<u32>> {
        let mut cells: Vec<Option<u32>> =
            vec![None; self.month_start_offset() as usize];
        cells.extend((1..=self.days_in_month()).map(Some));
        cells
    }

    /// End time of a slot, per the catalog's slot length.
    pub fn slot_end(&self, time: &str) -> String {
        add_minutes(time, self.config.slot_minutes)
    }

    /// Confirmation line shown in the booking bar, on the done card and
    /// on clipboard copy: "9:00 - 9:30, Monday, January 15, 2024".
    /// `None` until both a day and a time are picked.
    pub fn summary(&self) -> Option<String> {
        let day = self.selected_day?;
        let time = self.selected_time.as_deref()?;
        Some(format!(
            "{} - {}, {}, {} {}, {}",
            time,
            self.slot_end(time),
            self.day_name(day),
            self.month_name(),
            day,
            self.year
        ))
    }
}

/// Terminal UI state wrapping the booking session.
///
/// Keeps the keyboard cursors and input focus the TUI needs on top of
/// the state machine, and the transient status-bar message. The status
/// message is presentation-side feedback; the underlying booking
/// operations stay silent when they ignore an intent.
///
/// # Examples
///
/// ```
/// use tbook::application::App;
///
/// let app = App::default();
/// assert!(app.status_message.is_none());
/// ```
#[derive(Debug)]
pub struct App {
    /// The booking session being driven
    pub booking: Booking,
    /// Keyboard cursor on the day grid, 1-based day of the visible month
    pub cursor_day: u32,
    /// Keyboard cursor on the slot list
    pub slot_cursor: usize,
    /// Focused input on the details screen
    pub focused_field: FormField,
    /// Text cursor within the focused input
    pub cursor_position: usize,
    /// Transient status message for the status bar
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Booking::default())
    }
}

impl App {
    /// Wraps a booking session, starting the day cursor on today.
    pub fn new(booking: Booking) -> Self {
        let cursor_day = booking.calendar.today().day();
        Self {
            booking,
            cursor_day,
            slot_cursor: 0,
            focused_field: FormField::Name,
            cursor_position: 0,
            status_message: None,
        }
    }

    /// Moves the day cursor by a signed number of days, clamped to the
    /// visible month.
    pub fn move_cursor_day(&mut self, delta: i64) {
        let days = self.booking.days_in_month() as i64;
        let moved = (self.cursor_day as i64 + delta).clamp(1, days);
        self.cursor_day = moved as u32;
    }

    /// Shows the previous month, keeping the day cursor in range.
    pub fn prev_month(&mut self) {
        self.booking.prev_month();
        self.clamp_cursor_day();
    }

    /// Shows the next month, keeping the day cursor in range.
    pub fn next_month(&mut self) {
        self.booking.next_month();
        self.clamp_cursor_day();
    }

    fn clamp_cursor_day(&mut self) {
        self.cursor_day = self.cursor_day.min(self.booking.days_in_month()).max(1);
    }

    /// Tries to book the day under the cursor. Explains an ignored
    /// intent in the status bar; the booking itself stays silent.
    pub fn select_cursor_day(&mut self) {
        if self.booking.is_available_day(self.cursor_day) {
            self.booking.select_day(self.cursor_day);
            self.slot_cursor = 0;
            self.status_message = None;
        } else {
            self.status_message = Some(format!(
                "{} {} is not available",
                self.booking.month_name(),
                self.cursor_day
            ));
        }
    }

    /// Moves the slot cursor up.
    pub fn slot_cursor_up(&mut self) {
        self.slot_cursor = self.slot_cursor.saturating_sub(1);
    }

    /// Moves the slot cursor down.
    pub fn slot_cursor_down(&mut self) {
        let last = self.booking.config.slots.len().saturating_sub(1);
        self.slot_cursor = (self.slot_cursor + 1).min(last);
    }

    /// Picks the slot under the cursor, or confirms it when it is
    /// already the picked one (Enter twice walks forward).
    pub fn select_or_confirm_slot(&mut self) {
        let slot = match self.booking.config.slots.get(self.slot_cursor) {
            Some(slot) => slot.clone(),
            None => return,
        };
        if self.booking.selected_time.as_deref() == Some(slot.as_str()) {
            self.confirm_slot();
        } else {
            self.booking.select_time(&slot);
            self.status_message = None;
        }
    }

    /// Confirms the picked slot and moves to the details screen.
    pub fn confirm_slot(&mut self) {
        if self.booking.selected_time.is_none() {
            self.status_message = Some("Pick a time slot first".to_string());
            return;
        }
        self.booking.confirm_time();
        self.focused_field = FormField::Name;
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// The form inputs in focus order, skipping the guest email while
    /// it is hidden.
    fn field_order(&self) -> Vec<FormField> {
        if self.booking.show_guest_field {
            vec![
                FormField::Name,
                FormField::Email,
                FormField::GuestEmail,
                FormField::Notes,
            ]
        } else {
            vec![FormField::Name, FormField::Email, FormField::Notes]
        }
    }

    /// Focuses the next form input.
    pub fn focus_next_field(&mut self) {
        self.cycle_focus(1);
    }

    /// Focuses the previous form input.
    pub fn focus_prev_field(&mut self) {
        self.cycle_focus(-1);
    }

    fn cycle_focus(&mut self, direction: isize) {
        let order = self.field_order();
        let len = order.len() as isize;
        let current = order
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0) as isize;
        let next = (current + direction).rem_euclid(len) as usize;
        self.focused_field = order[next];
        self.cursor_position = self.booking.form.get(self.focused_field).len();
    }

    /// Shows or hides the guest email input, moving focus off it when
    /// it disappears.
    pub fn toggle_guest_field(&mut self) {
        self.booking.toggle_guest_field();
        if !self.booking.show_guest_field && self.focused_field == FormField::GuestEmail {
            self.focused_field = FormField::Notes;
            self.cursor_position = self.booking.form.get(self.focused_field).len();
        }
    }

    /// Inserts a character at the text cursor of the focused input.
    pub fn insert_char(&mut self, c: char) {
        let mut value = self.booking.form.get(self.focused_field).to_string();
        let at = self.cursor_position.min(value.len());
        value.insert(at, c);
        self.booking.update_form(self.focused_field, value);
        self.cursor_position = at + c.len_utf8();
    }

    /// Deletes the character before the text cursor.
    pub fn delete_char_before(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let mut value = self.booking.form.get(self.focused_field).to_string();
        let at = self.cursor_position.min(value.len());
        let Some((start, _)) = value[..at].char_indices().next_back() else {
            return;
        };
        value.remove(start);
        self.booking.update_form(self.focused_field, value);
        self.cursor_position = start;
    }

    /// Deletes the character under the text cursor.
    pub fn delete_char_at(&mut self) {
        let mut value = self.booking.form.get(self.focused_field).to_string();
        if self.cursor_position < value.len() {
            value.remove(self.cursor_position);
            self.booking.update_form(self.focused_field, value);
        }
    }

    /// Moves the text cursor one character left.
    pub fn cursor_left(&mut self) {
        let value = self.booking.form.get(self.focused_field);
        let at = self.cursor_position.min(value.len());
        if let Some((start, _)) = value[..at].char_indices().next_back() {
            self.cursor_position = start;
        }
    }

    /// Moves the text cursor one character right.
    pub fn cursor_right(&mut self) {
        let value = self.booking.form.get(self.focused_field);
        let at = self.cursor_position.min(value.len());
        if let Some(c) = value[at..].chars().next() {
            self.cursor_position = at + c.len_utf8();
        }
    }

    /// Moves the text cursor to the start of the focused input.
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Moves the text cursor to the end of the focused input.
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.booking.form.get(self.focused_field).len();
    }

    /// Submits the form. Explains the ignored intent in the status bar
    /// when the required fields are still empty.
    pub fn submit(&mut self) {
        self.booking.submit();
        if self.booking.step == Step::Done {
            self.status_message = None;
        } else {
            self.status_message = Some("Name and email are required".to_string());
        }
    }

    /// Restarts the flow after a completed booking.
    pub fn restart(&mut self) {
        self.booking.reset();
        self.cursor_day = self.booking.calendar.today().day();
        self.slot_cursor = 0;
        self.focused_field = FormField::Name;
        self.cursor_position = 0;
        self.status_message = None;
    }
}
