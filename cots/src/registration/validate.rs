use super::FieldError;

/// Check the raw nickname input. Only emptiness (after trimming) is
/// rejected; length and character set are left to the server.
pub fn validate(nickname: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if nickname.trim().is_empty() {
        errors.push(FieldError::nickname_required());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::Field;

    #[test]
    fn test_validate_empty() {
        for input in ["", " ", "\t\n", "   "] {
            let errors = validate(input);
            assert_eq!(errors.len(), 1, "input {:?}", input);
            assert_eq!(errors[0].field(), Field::Nickname);
            assert_eq!(errors[0].message(), "Nickname cannot be null");
        }
    }

    #[test]
    fn test_validate_accepts_anything_else() {
        let long = "x".repeat(4096);
        for input in ["Ripley", " Hicks ", "名前", "a", "<script>", long.as_str()] {
            assert!(validate(input).is_empty(), "input {:?}", input);
        }
    }
}
