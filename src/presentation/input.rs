use crate::application::App;
use crate::domain::Step;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.booking.step {
            Step::Calendar => Self::handle_calendar_step(app, key),
            Step::Time => Self::handle_time_step(app, key),
            Step::Details => Self::handle_details_step(app, key, modifiers),
            Step::Done => Self::handle_done_step(app, key),
        }
    }

    fn handle_calendar_step(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_cursor_day(-7);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_cursor_day(7);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.move_cursor_day(-1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.move_cursor_day(1);
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                app.prev_month();
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                app.next_month();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.select_cursor_day();
            }
            _ => {}
        }
    }

    fn handle_time_step(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.slot_cursor_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.slot_cursor_down();
            }
            KeyCode::Enter => {
                app.select_or_confirm_slot();
            }
            KeyCode::Tab => {
                app.confirm_slot();
            }
            // The calendar stays interactive while picking a time
            KeyCode::Left | KeyCode::Char('h') => {
                app.move_cursor_day(-1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.move_cursor_day(1);
            }
            KeyCode::PageUp | KeyCode::Char('[') => {
                app.prev_month();
            }
            KeyCode::PageDown | KeyCode::Char(']') => {
                app.next_month();
            }
            KeyCode::Char(' ') => {
                app.select_cursor_day();
            }
            _ => {}
        }
    }

    fn handle_details_step(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('g') = key {
                app.toggle_guest_field();
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                app.submit();
            }
            KeyCode::Tab => {
                app.focus_next_field();
            }
            KeyCode::BackTab => {
                app.focus_prev_field();
            }
            KeyCode::Backspace => {
                app.delete_char_before();
            }
            KeyCode::Delete => {
                app.delete_char_at();
            }
            KeyCode::Left => {
                app.cursor_left();
            }
            KeyCode::Right => {
                app.cursor_right();
            }
            KeyCode::Home => {
                app.cursor_home();
            }
            KeyCode::End => {
                app.cursor_end();
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_done_step(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('r') => {
                app.restart();
            }
            KeyCode::Char('c') => {
                Self::copy_summary(app);
            }
            _ => {}
        }
    }

    fn copy_summary(app: &mut App) {
        let Some(summary) = app.booking.summary() else {
            return;
        };
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(summary));
        app.status_message = Some(match result {
            Ok(_) => "Booking details copied to clipboard".to_string(),
            Err(e) => format!("Copy failed: {}", e),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, Booking};
    use crate::domain::{Calendar, FormField, ScheduleConfig};
    use chrono::NaiveDate;

    fn fixed_app() -> App {
        // Monday, January 15th 2024
        let calendar =
            Calendar::with_today(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        App::new(Booking::new(ScheduleConfig::default(), calendar))
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_calendar_cursor_keys() {
        let mut app = fixed_app();
        assert_eq!(app.cursor_day, 15);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.cursor_day, 16);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor_day, 23);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.cursor_day, 22);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor_day, 15);
    }

    #[test]
    fn test_calendar_month_keys() {
        let mut app = fixed_app();

        press(&mut app, KeyCode::Char(']'));
        assert_eq!((app.booking.year, app.booking.month), (2024, 2));
        press(&mut app, KeyCode::Char('['));
        assert_eq!((app.booking.year, app.booking.month), (2024, 1));
        press(&mut app, KeyCode::PageUp);
        assert_eq!((app.booking.year, app.booking.month), (2023, 12));
    }

    #[test]
    fn test_enter_selects_day() {
        let mut app = fixed_app();
        press(&mut app, KeyCode::Right); // Tuesday the 16th
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.booking.step, Step::Time);
        assert_eq!(app.booking.selected_day, Some(16));
    }

    #[test]
    fn test_enter_on_weekend_is_ignored() {
        let mut app = fixed_app();
        app.cursor_day = 20; // Saturday
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.booking.step, Step::Calendar);
        assert!(app.booking.selected_day.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_time_step_pick_and_confirm() {
        let mut app = fixed_app();
        app.cursor_day = 16;
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.selected_time.as_deref(), Some("9:00"));
        assert_eq!(app.booking.step, Step::Time);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.booking.step, Step::Details);
    }

    #[test]
    fn test_time_step_space_reselects_day() {
        let mut app = fixed_app();
        app.cursor_day = 16;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // picks "8:00"
        assert!(app.booking.selected_time.is_some());

        press(&mut app, KeyCode::Right); // Wednesday the 17th
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.booking.selected_day, Some(17));
        assert!(app.booking.selected_time.is_none());
        assert_eq!(app.booking.step, Step::Time);
    }

    fn app_at_details() -> App {
        let mut app = fixed_app();
        app.cursor_day = 16;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        app
    }

    #[test]
    fn test_details_typing_fills_focused_field() {
        let mut app = app_at_details();

        for c in "Ada".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.booking.form.name, "Ada");

        press(&mut app, KeyCode::Tab);
        for c in "a@b.com".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.booking.form.email, "a@b.com");
        assert_eq!(app.booking.form.name, "Ada");
    }

    #[test]
    fn test_details_guest_toggle_binding() {
        let mut app = app_at_details();
        assert!(!app.booking.show_guest_field);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert!(app.booking.show_guest_field);

        // A plain 'g' types into the focused field instead
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.booking.form.name, "g");
        assert!(app.booking.show_guest_field);
    }

    #[test]
    fn test_details_submit_binding() {
        let mut app = app_at_details();

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.step, Step::Details);

        app.booking.update_form(FormField::Name, "Ada".to_string());
        app.booking.update_form(FormField::Email, "a@b.com".to_string());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.step, Step::Done);
    }

    #[test]
    fn test_done_restart_binding() {
        let mut app = app_at_details();
        app.booking.update_form(FormField::Name, "Ada".to_string());
        app.booking.update_form(FormField::Email, "a@b.com".to_string());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.booking.step, Step::Done);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.booking.step, Step::Calendar);
        assert!(app.booking.selected_day.is_none());
        assert!(app.booking.form.name.is_empty());
    }
}
