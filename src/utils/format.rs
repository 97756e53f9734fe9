// src/utils/format.rs

const MASK_CHAR: char = '•';

// Hide a password behind one mask character per character
pub fn mask_password(password: &str) -> String {
    password.chars().map(|_| MASK_CHAR).collect()
}

// Render a password according to the current visibility setting
pub fn display_password(password: &str, visible: bool) -> String {
    if visible {
        password.to_string()
    } else {
        mask_password(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_keeps_character_count() {
        let masked = mask_password("aB3$~x");
        assert_eq!(masked.chars().count(), 6);
        assert!(masked.chars().all(|c| c == MASK_CHAR));
        assert_eq!(mask_password(""), "");
    }

    #[test]
    fn test_display_respects_visibility() {
        assert_eq!(display_password("hunter22", true), "hunter22");
        assert_eq!(display_password("hunter22", false), "••••••••");
    }
}
