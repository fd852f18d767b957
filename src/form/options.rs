/// A `<select>` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

pub const COUNTRY_OPTIONS: &[SelectOption] = &[
    opt("us", "United States"),
    opt("ca", "Canada"),
    opt("uk", "United Kingdom"),
    opt("au", "Australia"),
    opt("de", "Germany"),
    opt("fr", "France"),
    opt("jp", "Japan"),
    opt("cn", "China"),
    opt("in", "India"),
    opt("br", "Brazil"),
];

pub const PHONE_COUNTRY_CODES: &[SelectOption] = &[
    opt("+1", "+1 \u{1F1FA}\u{1F1F8}"),
    opt("+44", "+44 \u{1F1EC}\u{1F1E7}"),
    opt("+49", "+49 \u{1F1E9}\u{1F1EA}"),
    opt("+33", "+33 \u{1F1EB}\u{1F1F7}"),
    opt("+39", "+39 \u{1F1EE}\u{1F1F9}"),
    opt("+34", "+34 \u{1F1EA}\u{1F1F8}"),
    opt("+86", "+86 \u{1F1E8}\u{1F1F3}"),
    opt("+81", "+81 \u{1F1EF}\u{1F1F5}"),
    opt("+91", "+91 \u{1F1EE}\u{1F1F3}"),
    opt("+7", "+7 \u{1F1F7}\u{1F1FA}"),
    opt("+55", "+55 \u{1F1E7}\u{1F1F7}"),
    opt("+61", "+61 \u{1F1E6}\u{1F1FA}"),
    opt("+64", "+64 \u{1F1F3}\u{1F1FF}"),
    opt("+880", "+880 \u{1F1E7}\u{1F1E9}"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::DEFAULT_PHONE_COUNTRY_CODE;
    use std::collections::HashSet;

    #[test]
    fn test_option_values_unique() {
        for options in [COUNTRY_OPTIONS, PHONE_COUNTRY_CODES] {
            let values: HashSet<&str> = options.iter().map(|o| o.value).collect();
            assert_eq!(values.len(), options.len());
        }
    }

    #[test]
    fn test_default_country_code_is_offered() {
        assert!(PHONE_COUNTRY_CODES
            .iter()
            .any(|o| o.value == DEFAULT_PHONE_COUNTRY_CODE));
    }

    #[test]
    fn test_phone_labels_start_with_code() {
        for code in PHONE_COUNTRY_CODES {
            assert!(code.label.starts_with(code.value), "{:?}", code);
        }
    }
}
