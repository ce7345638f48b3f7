//! Modal picker dialogs: date picker and document picker

use crate::state::wizard::{DocumentDescriptor, PickerOutcome};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeSet;

/// Date component the arrow keys currently adjust
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePart {
    Year,
    Month,
    #[default]
    Day,
}

impl DatePart {
    pub fn next(&self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month => Self::Day,
            Self::Day => Self::Year,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Year => Self::Day,
            Self::Month => Self::Year,
            Self::Day => Self::Month,
        }
    }
}

/// Date picker bound to one wizard field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerDialog {
    /// Field the confirmed date is written to
    pub field: String,
    pub date: NaiveDate,
    /// Latest date offered as a hint; not enforced here
    pub max_date: NaiveDate,
    pub part: DatePart,
}

impl DatePickerDialog {
    /// Open on the field's current value, or on `today` when it has none
    pub fn open(field: &str, current: &str, today: NaiveDate) -> Self {
        let date = NaiveDate::parse_from_str(current.trim(), "%Y-%m-%d").unwrap_or(today);
        Self {
            field: field.to_string(),
            date,
            max_date: today,
            part: DatePart::default(),
        }
    }

    pub fn increment(&mut self) {
        let stepped = match self.part {
            DatePart::Year => self.date.checked_add_months(Months::new(12)),
            DatePart::Month => self.date.checked_add_months(Months::new(1)),
            DatePart::Day => self.date.checked_add_days(Days::new(1)),
        };
        if let Some(date) = stepped {
            self.date = date;
        }
    }

    pub fn decrement(&mut self) {
        let stepped = match self.part {
            DatePart::Year => self.date.checked_sub_months(Months::new(12)),
            DatePart::Month => self.date.checked_sub_months(Months::new(1)),
            DatePart::Day => self.date.checked_sub_days(Days::new(1)),
        };
        if let Some(date) = stepped {
            self.date = date;
        }
    }

    /// Components as displayed, paired with whether each is being edited
    pub fn parts(&self) -> [(String, bool); 3] {
        [
            (format!("{:04}", self.date.year()), self.part == DatePart::Year),
            (format!("{:02}", self.date.month()), self.part == DatePart::Month),
            (format!("{:02}", self.date.day()), self.part == DatePart::Day),
        ]
    }
}

/// Document picker listing candidate files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPickerDialog {
    pub candidates: Vec<DocumentDescriptor>,
    pub cursor: usize,
    pub selected: BTreeSet<usize>,
    pub allow_multiple: bool,
}

impl DocumentPickerDialog {
    pub fn new(candidates: Vec<DocumentDescriptor>, allow_multiple: bool) -> Self {
        Self {
            candidates,
            cursor: 0,
            selected: BTreeSet::new(),
            allow_multiple,
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle the candidate under the cursor
    pub fn toggle(&mut self) {
        if self.cursor >= self.candidates.len() {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            if !self.allow_multiple {
                self.selected.clear();
            }
            self.selected.insert(self.cursor);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Confirm: the marked files in list order, or the one under the cursor
    /// when nothing is marked. An empty list confirms as a cancellation.
    pub fn confirm(self) -> PickerOutcome {
        let Self {
            candidates,
            cursor,
            selected,
            ..
        } = self;
        if candidates.is_empty() {
            return PickerOutcome::Cancelled;
        }
        if selected.is_empty() {
            return candidates
                .into_iter()
                .nth(cursor)
                .map_or(PickerOutcome::Cancelled, |doc| PickerOutcome::Selected(vec![doc]));
        }
        PickerOutcome::Selected(
            candidates
                .into_iter()
                .enumerate()
                .filter(|(i, _)| selected.contains(i))
                .map(|(_, doc)| doc)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn doc(name: &str) -> DocumentDescriptor {
        DocumentDescriptor {
            uri: format!("file:///tmp/{name}"),
            name: name.to_string(),
            mime_type: "image/png".to_string(),
            size: 5,
        }
    }

    mod date_picker {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_open_uses_current_value() {
            let dialog = DatePickerDialog::open("dateOfBirth", "2000-02-29", date(2024, 6, 15));
            assert_eq!(dialog.date, date(2000, 2, 29));
            assert_eq!(dialog.max_date, date(2024, 6, 15));
            assert_eq!(dialog.part, DatePart::Day);
        }

        #[test]
        fn test_open_falls_back_to_today() {
            let dialog = DatePickerDialog::open("dateOfBirth", "", date(2024, 6, 15));
            assert_eq!(dialog.date, date(2024, 6, 15));
        }

        #[test]
        fn test_step_day_across_month() {
            let mut dialog = DatePickerDialog::open("dateOfBirth", "2024-01-31", date(2024, 6, 15));
            dialog.increment();
            assert_eq!(dialog.date, date(2024, 2, 1));
            dialog.decrement();
            assert_eq!(dialog.date, date(2024, 1, 31));
        }

        #[test]
        fn test_step_month_clamps_day() {
            let mut dialog = DatePickerDialog::open("dateOfBirth", "2024-01-31", date(2024, 6, 15));
            dialog.part = DatePart::Month;
            dialog.increment();
            assert_eq!(dialog.date, date(2024, 2, 29));
        }

        #[test]
        fn test_step_year() {
            let mut dialog = DatePickerDialog::open("dateOfBirth", "2000-05-05", date(2024, 6, 15));
            dialog.part = DatePart::Year;
            dialog.decrement();
            assert_eq!(dialog.date, date(1999, 5, 5));
        }

        #[test]
        fn test_date_part_cycles() {
            assert_eq!(DatePart::Day.next(), DatePart::Year);
            assert_eq!(DatePart::Year.prev(), DatePart::Day);
            assert_eq!(DatePart::Month.next().prev(), DatePart::Month);
        }

        #[test]
        fn test_parts_mark_active_component() {
            let dialog = DatePickerDialog::open("dateOfBirth", "2001-03-07", date(2024, 6, 15));
            let parts = dialog.parts();
            assert_eq!(parts[0], ("2001".to_string(), false));
            assert_eq!(parts[1], ("03".to_string(), false));
            assert_eq!(parts[2], ("07".to_string(), true));
        }
    }

    mod document_picker {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_confirm_marked_in_list_order() {
            let mut dialog = DocumentPickerDialog::new(vec![doc("a"), doc("b"), doc("c")], true);
            dialog.cursor = 2;
            dialog.toggle();
            dialog.cursor = 0;
            dialog.toggle();
            assert_eq!(
                dialog.confirm(),
                PickerOutcome::Selected(vec![doc("a"), doc("c")])
            );
        }

        #[test]
        fn test_confirm_without_marks_takes_cursor() {
            let mut dialog = DocumentPickerDialog::new(vec![doc("a"), doc("b")], true);
            dialog.move_down();
            assert_eq!(dialog.confirm(), PickerOutcome::Selected(vec![doc("b")]));
        }

        #[test]
        fn test_confirm_empty_list_is_cancel() {
            let dialog = DocumentPickerDialog::new(vec![], true);
            assert_eq!(dialog.confirm(), PickerOutcome::Cancelled);
        }

        #[test]
        fn test_toggle_twice_unmarks() {
            let mut dialog = DocumentPickerDialog::new(vec![doc("a")], true);
            dialog.toggle();
            dialog.toggle();
            assert!(!dialog.is_selected(0));
        }

        #[test]
        fn test_single_selection_replaces_mark() {
            let mut dialog = DocumentPickerDialog::new(vec![doc("a"), doc("b")], false);
            dialog.toggle();
            dialog.move_down();
            dialog.toggle();
            assert!(!dialog.is_selected(0));
            assert!(dialog.is_selected(1));
        }

        #[test]
        fn test_cursor_bounds() {
            let mut dialog = DocumentPickerDialog::new(vec![doc("a"), doc("b")], true);
            dialog.move_up();
            assert_eq!(dialog.cursor, 0);
            dialog.move_down();
            dialog.move_down();
            assert_eq!(dialog.cursor, 1);
        }
    }
}
