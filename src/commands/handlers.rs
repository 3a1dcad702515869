//! Command handlers for the assistant bot.
//!
//! Each handler takes the raw argument list of one command, calls into the
//! address book, and produces the reply text. Handlers are the single
//! error-translation boundary: core errors come back typed and the REPL
//! renders their `Display`. The core never catches its own errors.

use crate::book::{AddressBook, Record};
use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, CommandError, CommandResult};
use chrono::NaiveDate;
use tracing::debug;

/// Add a new contact, or a new phone to an existing contact.
///
/// Field values are validated before anything is stored, so a bad phone
/// never leaves behind an empty record.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Give me name and phone please.".to_string(),
        ));
    };

    let phone = Phone::new(*phone)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone);
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(Name::new(*name)?);
    record.add_phone(phone);
    book.add_record(record)?;
    debug!(name, "contact created");
    Ok("Contact added.".to_string())
}

/// Replace one of a contact's phone numbers.
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Give me name, old phone and new phone please.".to_string(),
        ));
    };

    let new_phone = Phone::new(*new_phone)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

/// Show all phone numbers of one contact.
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Enter the argument for the command".to_string(),
        ));
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    if record.phones().is_empty() {
        return Ok(format!("Contact '{}' has no phone numbers.", name));
    }

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(format!("{}: {}", name, phones.join("; ")))
}

/// Show every stored contact, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = book.all().map(|record| record.to_string()).collect();
    Ok(lines.join("\n"))
}

/// Set a contact's birthday, replacing any previous one.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Give me name and birthday please.".to_string(),
        ));
    };

    let birthday = Birthday::new(*birthday)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    record.set_birthday(birthday);
    Ok("Birthday added.".to_string())
}

/// Show one contact's birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name, ..] = args else {
        return Err(CommandError::MissingArguments(
            "Enter the argument for the command".to_string(),
        ));
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    match record.birthday() {
        Some(birthday) => Ok(format!("{}: {}", name, birthday)),
        None => Ok(format!("Contact '{}' has no birthday set.", name)),
    }
}

/// Show every contact whose birthday falls within the horizon, with the
/// date they should be congratulated on.
pub fn birthdays(
    book: &AddressBook,
    today: NaiveDate,
    horizon_days: i64,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(today, horizon_days);
    debug!(count = upcoming.len(), %today, "upcoming birthdays computed");

    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|entry| {
            format!(
                "{}: {}",
                entry.name,
                entry.congratulation_date.format(crate::domain::BIRTHDAY_FORMAT)
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_then_add_merges_phones() {
        let mut book = AddressBook::new();

        let reply = add_contact(&["John", "1234567890"], &mut book).unwrap();
        assert_eq!(reply, "Contact added.");

        let reply = add_contact(&["John", "5555555555"], &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");

        let reply = show_phone(&["John"], &book).unwrap();
        assert_eq!(reply, "John: 1234567890; 5555555555");
    }

    #[test]
    fn test_add_missing_arguments() {
        let mut book = AddressBook::new();
        let err = add_contact(&["John"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Give me name and phone please.");
    }

    #[test]
    fn test_add_invalid_phone_leaves_no_record() {
        let mut book = AddressBook::new();
        let err = add_contact(&["John", "123"], &mut book).unwrap_err();

        assert_eq!(
            err,
            CommandError::Validation(ValidationError::InvalidPhone("123".to_string()))
        );
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_change_contact() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1111111111"], &mut book).unwrap();

        let reply = change_contact(&["John", "1111111111", "2222222222"], &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");
        assert_eq!(show_phone(&["John"], &book).unwrap(), "John: 2222222222");
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let err = change_contact(&["Ghost", "1111111111", "2222222222"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Contact 'Ghost' not found");
    }

    #[test]
    fn test_change_unknown_phone() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1111111111"], &mut book).unwrap();

        let err = change_contact(&["John", "9999999999", "2222222222"], &mut book).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phone '9999999999' not found for contact 'John'"
        );
    }

    #[test]
    fn test_show_phone_requires_argument() {
        let book = AddressBook::new();
        let err = show_phone(&[], &book).unwrap_err();
        assert_eq!(err.to_string(), "Enter the argument for the command");
    }

    #[test]
    fn test_show_all_empty() {
        let book = AddressBook::new();
        assert_eq!(show_all(&book).unwrap(), "No contacts saved.");
    }

    #[test]
    fn test_show_all_renders_records_in_order() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();
        add_contact(&["Ann", "5555555555"], &mut book).unwrap();
        add_birthday(&["Ann", "06.01.1990"], &mut book).unwrap();

        assert_eq!(
            show_all(&book).unwrap(),
            "John: 1234567890\nAnn: 5555555555, birthday: 06.01.1990"
        );
    }

    #[test]
    fn test_add_and_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        let reply = add_birthday(&["John", "01.01.1990"], &mut book).unwrap();
        assert_eq!(reply, "Birthday added.");
        assert_eq!(show_birthday(&["John"], &book).unwrap(), "John: 01.01.1990");
    }

    #[test]
    fn test_show_birthday_unset() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        assert_eq!(
            show_birthday(&["John"], &book).unwrap(),
            "Contact 'John' has no birthday set."
        );
    }

    #[test]
    fn test_add_birthday_invalid_date_surfaces_verbatim() {
        let mut book = AddressBook::new();
        add_contact(&["John", "1234567890"], &mut book).unwrap();

        let err = add_birthday(&["John", "31.02.2020"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Invalid date '31.02.2020': use DD.MM.YYYY");
    }

    #[test]
    fn test_birthdays_empty_window() {
        let book = AddressBook::new();
        assert_eq!(
            birthdays(&book, date(2024, 1, 1), 7).unwrap(),
            "No upcoming birthdays in the next week."
        );
    }

    #[test]
    fn test_birthdays_renders_congratulation_dates() {
        let mut book = AddressBook::new();
        add_contact(&["Ann", "1234567890"], &mut book).unwrap();
        add_birthday(&["Ann", "06.01.1990"], &mut book).unwrap();
        add_contact(&["Bob", "5555555555"], &mut book).unwrap();
        add_birthday(&["Bob", "10.01.1985"], &mut book).unwrap();

        // Ann's Saturday occurrence rolls to Monday; Bob is beyond the horizon.
        assert_eq!(
            birthdays(&book, date(2024, 1, 1), 7).unwrap(),
            "Ann: 08.01.2024"
        );
    }
}
