//! String helpers for console output

use std::borrow::Cow;

/// `word` for a count of one, `word` + "s" otherwise
pub fn pluralize(word: &str, count: usize) -> Cow<'_, str> {
    match count {
        1 => Cow::Borrowed(word),
        _ => Cow::Owned(format!("{word}s")),
    }
}

/// Join names as "A", "A and B", or "A, B and C"
pub fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("exclusion", 0), "exclusions");
        assert_eq!(pluralize("exclusion", 1), "exclusion");
        assert_eq!(pluralize("participant", 5), "participants");
    }

    #[test]
    fn test_join_names() {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(join_names(&[]), "");
        assert_eq!(join_names(&names(&["Opa"])), "Opa");
        assert_eq!(join_names(&names(&["Opa", "Oma"])), "Opa and Oma");
        assert_eq!(join_names(&names(&["Theo", "Els", "Nico"])), "Theo, Els and Nico");
    }
}
