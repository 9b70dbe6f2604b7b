use crate::console::Console;
use crate::input::InputError;
use tracing::debug;

/// Longest phone number accepted at order time.
pub const MAX_PHONE_DIGITS: usize = 10;

/// True if `name` is non-empty and made only of letters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphabetic)
}

/// True if `phone` is 1 to [`MAX_PHONE_DIGITS`] decimal digits.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone.chars().count() <= MAX_PHONE_DIGITS
        && phone.chars().all(|c| c.is_ascii_digit())
}

/// Asks for a customer name until a valid one is entered.
pub fn read_valid_name<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<String, InputError> {
    loop {
        let name = console.read_line(prompt)?;
        if is_valid_name(&name) {
            return Ok(name);
        }
        debug!(input = %name, "Rejected name");
        console.write_line("Invalid name. Please try again.")?;
    }
}

/// Asks for a phone number until a valid one is entered.
pub fn read_valid_phone<C: Console + ?Sized>(console: &mut C) -> Result<String, InputError> {
    loop {
        let phone = console.read_line("Please enter the customer's phone number: ")?;
        if is_valid_phone(&phone) {
            return Ok(phone);
        }
        debug!(input = %phone, "Rejected phone number");
        console.write_line("Invalid phone number. Please enter up to 10 digits only.")?;
    }
}

/// Asks a yes/no question until the answer is "yes" or "no", ignoring case.
pub fn read_yes_no<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<bool, InputError> {
    loop {
        match console.read_line(prompt)?.to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => console.write_line("Invalid input. Please enter 'yes' or 'no'.")?,
        }
    }
}

/// Reads a whole number. Whitespace around it is ignored.
///
/// # Errors
/// Anything that is not an integer is [`InputError::NotANumber`]. There is no
/// re-prompt here; the error ends the session.
pub fn read_number<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<i64, InputError> {
    let line = console.read_line(prompt)?;
    let parsed: Result<i64, _> = line.trim().parse();
    parsed.map_err(|_| InputError::NotANumber(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::ScriptedConsole;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Amy"));
        assert!(is_valid_name("Zoë"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("Amy2"));
        assert!(!is_valid_name("Amy Lee"));
        assert!(!is_valid_name("O'Neil"));
    }

    #[test]
    fn test_phones() {
        assert!(is_valid_phone("0"));
        assert!(is_valid_phone("0212345678"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("02123456789"));
        assert!(!is_valid_phone("021-234"));
        assert!(!is_valid_phone(" 021"));
    }

    #[test]
    fn test_valid_name_first_try() {
        let mut console = ScriptedConsole::new(["Amy"]);
        let name = read_valid_name(&mut console, "Name: ").unwrap();
        assert_eq!(name, "Amy");
        assert_eq!(console.prompts().len(), 1);
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_name_reprompts_until_valid() {
        let mut console = ScriptedConsole::new(["", "Amy 2", "a.b", "Amy"]);
        let name = read_valid_name(&mut console, "Name: ").unwrap();
        assert_eq!(name, "Amy");
        assert_eq!(console.count_printed("Invalid name"), 3);
    }

    #[test]
    fn test_phone_reprompts_on_empty_and_long() {
        let mut console = ScriptedConsole::new(["", "12345678901", "12ab", "0211234567"]);
        let phone = read_valid_phone(&mut console).unwrap();
        assert_eq!(phone, "0211234567");
        assert_eq!(console.count_printed("Invalid phone number"), 3);
    }

    #[test]
    fn test_yes_no_ignores_case() {
        let mut console = ScriptedConsole::new(["maybe", "YES"]);
        assert!(read_yes_no(&mut console, "Cancel? ").unwrap());
        assert_eq!(console.count_printed("Invalid input"), 1);

        let mut console = ScriptedConsole::new(["No"]);
        assert!(!read_yes_no(&mut console, "Cancel? ").unwrap());
    }

    #[test]
    fn test_read_number_tolerates_whitespace() {
        let mut console = ScriptedConsole::new([" 3 ", "-1"]);
        assert_eq!(read_number(&mut console, "How many? ").unwrap(), 3);
        assert_eq!(read_number(&mut console, "How many? ").unwrap(), -1);
    }

    #[test]
    fn test_read_number_rejects_words() {
        let mut console = ScriptedConsole::new(["three"]);
        let err = read_number(&mut console, "How many? ").unwrap_err();
        assert!(matches!(err, InputError::NotANumber(s) if s == "three"));
    }

    #[test]
    fn test_closed_input_propagates() {
        let mut console = ScriptedConsole::new(["Amy1"]);
        let err = read_valid_name(&mut console, "Name: ").unwrap_err();
        assert!(matches!(err, InputError::Closed(_)));
    }
}
