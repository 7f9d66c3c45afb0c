//! Validator for reedline - validates line completeness

use reedline::{ValidationResult, Validator};

/// CQL validator for reedline
///
/// A line is incomplete while a quote is open or a bracket is unbalanced.
/// CQL escapes quotes by doubling them (`'it''s'`), which simply closes and
/// reopens the literal here.
pub struct CqlValidator;

impl CqlValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check if input has balanced braces and parentheses
    fn is_balanced(&self, input: &str) -> bool {
        let mut depth = [0u32; 3];
        let mut quote: Option<char> = None;

        for ch in input.chars() {
            if let Some(open) = quote {
                if ch == open {
                    quote = None;
                }
                continue;
            }

            // A stray closer is ignored; it never cancels a later opener
            match ch {
                '\'' | '"' => quote = Some(ch),
                '(' => depth[0] += 1,
                ')' => depth[0] = depth[0].saturating_sub(1),
                '{' => depth[1] += 1,
                '}' => depth[1] = depth[1].saturating_sub(1),
                '[' => depth[2] += 1,
                ']' => depth[2] = depth[2].saturating_sub(1),
                _ => {}
            }
        }

        quote.is_none() && depth.iter().all(|&d| d == 0)
    }
}

impl Default for CqlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for CqlValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        let trimmed = line.trim();

        if trimmed.is_empty() || self.is_balanced(trimmed) {
            ValidationResult::Complete
        } else {
            ValidationResult::Incomplete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // reedline's ValidationResult derives neither PartialEq nor Debug, so
    // shadow assert_eq! with a variant-wise comparison for these tests.
    fn variant_name(v: &ValidationResult) -> &'static str {
        match v {
            ValidationResult::Complete => "Complete",
            ValidationResult::Incomplete => "Incomplete",
        }
    }

    macro_rules! assert_eq {
        ($left:expr, $right:expr $(,)?) => {
            ::std::assert_eq!(variant_name(&$left), variant_name(&$right))
        };
    }

    #[test]
    fn test_empty_input() {
        let validator = CqlValidator::new();
        assert_eq!(validator.validate(""), ValidationResult::Complete);
        assert_eq!(validator.validate("   "), ValidationResult::Complete);
    }

    #[test]
    fn test_simple_statement() {
        let validator = CqlValidator::new();
        assert_eq!(validator.validate("use shop"), ValidationResult::Complete);
        assert_eq!(
            validator.validate("select * from users where id = 1;"),
            ValidationResult::Complete
        );
    }

    #[test]
    fn test_unbalanced_parens() {
        let validator = CqlValidator::new();
        assert_eq!(
            validator.validate("insert into users (id, name"),
            ValidationResult::Incomplete
        );
        assert_eq!(
            validator.validate("create keyspace ks with replication = {'class': 'SimpleStrategy'"),
            ValidationResult::Incomplete
        );
    }

    #[test]
    fn test_string_literals() {
        let validator = CqlValidator::new();
        assert_eq!(
            validator.validate("insert into t (a) values ('(')"),
            ValidationResult::Complete
        );
        assert_eq!(
            validator.validate("insert into t (a) values ('it''s')"),
            ValidationResult::Complete
        );
        assert_eq!(
            validator.validate("select * from t where a = 'open"),
            ValidationResult::Incomplete
        );
    }

    #[test]
    fn test_stray_closer_is_complete() {
        let validator = CqlValidator::new();
        assert_eq!(validator.validate("select a) from t"), ValidationResult::Complete);
    }

    #[test]
    fn test_opener_after_stray_closer_is_incomplete() {
        let validator = CqlValidator::new();
        assert_eq!(validator.validate("a) (b"), ValidationResult::Incomplete);
        assert_eq!(validator.validate("a}) {b"), ValidationResult::Incomplete);
        assert_eq!(validator.validate("a) (b)"), ValidationResult::Complete);
    }
}
