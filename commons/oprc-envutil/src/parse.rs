use crate::error::{EnvError, ValueKind};

const TRUE_VALUES: [&str; 2] = ["true", "1"];
const FALSE_VALUES: [&str; 2] = ["false", "0"];

/// Parses `raw` as a base-10 signed integer. A leading `+` or `-` is
/// accepted, surrounding whitespace is not.
pub fn parse_int(key: &str, raw: &str) -> Result<i64, EnvError> {
    raw.parse::<i64>()
        .map_err(|_| parse_error(key, raw, ValueKind::Integer))
}

/// Parses `raw` against the fixed, case-sensitive boolean lexicon
/// (`true`/`1`, `false`/`0`).
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, EnvError> {
    if TRUE_VALUES.contains(&raw) {
        Ok(true)
    } else if FALSE_VALUES.contains(&raw) {
        Ok(false)
    } else {
        Err(parse_error(key, raw, ValueKind::Boolean))
    }
}

fn parse_error(key: &str, raw: &str, expected: ValueKind) -> EnvError {
    EnvError::ParseError {
        key: key.to_string(),
        value: raw.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_ok() {
        assert_eq!(parse_int("K", "42").unwrap(), 42);
        assert_eq!(parse_int("K", "-17").unwrap(), -17);
        assert_eq!(parse_int("K", "+8").unwrap(), 8);
        assert_eq!(parse_int("K", "007").unwrap(), 7);
        assert_eq!(
            parse_int("K", "9223372036854775807").unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn test_parse_int_invalid() {
        for raw in [
            "not a number",
            "4.2",
            " 42",
            "42 ",
            "0x10",
            "1_000",
            "-",
            "9223372036854775808",
        ] {
            let err = parse_int("PORT", raw).unwrap_err();
            assert_eq!(
                err,
                EnvError::ParseError {
                    key: "PORT".into(),
                    value: raw.into(),
                    expected: ValueKind::Integer,
                },
                "value {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_bool_lexicon() {
        assert!(parse_bool("K", "true").unwrap());
        assert!(parse_bool("K", "1").unwrap());
        assert!(!parse_bool("K", "false").unwrap());
        assert!(!parse_bool("K", "0").unwrap());
    }

    #[test]
    fn test_parse_bool_rejects_other_forms() {
        for raw in ["yes", "no", "TRUE", "False", "T", "F", " 1", "0 ", "2"] {
            assert!(
                matches!(
                    parse_bool("DEBUG", raw),
                    Err(EnvError::ParseError {
                        expected: ValueKind::Boolean,
                        ..
                    })
                ),
                "value {raw:?}"
            );
        }
    }
}
