//! Exit code constants for the convergent-prompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or malformed input files)
//! - 2: Validation failure (missing field, rejected marker)
//! - 3: Template error (malformed or incomplete template)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, I/O failure, or unparsable config/scenario.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a required field is missing or a value was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Template error: unmatched brace, empty slot name, or a required slot absent.
pub const TEMPLATE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, TEMPLATE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
