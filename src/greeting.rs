/// Greeting line for `name`.
pub fn generate(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Shouts the text (Unicode-aware upper-casing).
pub fn magical(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(generate("bob"), "Hello, bob!");
    }

    #[test]
    fn magical_upper_cases() {
        assert_eq!(magical("Hello, bob!"), "HELLO, BOB!");
        assert_eq!(magical("straße"), "STRASSE");
    }
}
