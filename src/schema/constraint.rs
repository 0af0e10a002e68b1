//! Per-field acceptance rules, represented as data

use super::fields::FieldId;
use chrono::NaiveDate;

/// Input format for the date of birth field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest accepted date of birth.
pub const DOB_EARLIEST: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(d) => d,
    None => panic!("date constant out of range"),
};

/// Latest accepted date of birth.
pub const DOB_LATEST: NaiveDate = match NaiveDate::from_ymd_opt(2022, 12, 1) {
    Some(d) => d,
    None => panic!("date constant out of range"),
};

/// A single acceptance rule with its failure message.
///
/// Lengths count Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub enum Constraint {
    Required {
        message: &'static str,
    },
    MinLength {
        min: usize,
        message: &'static str,
    },
    MaxLength {
        max: usize,
        message: &'static str,
    },
    Email {
        message: &'static str,
    },
    DateWithin {
        earliest: NaiveDate,
        latest: NaiveDate,
        unparsable: &'static str,
        too_early: &'static str,
        too_late: &'static str,
    },
}

impl Constraint {
    /// Check one raw value, returning the failure message on violation
    pub fn check(&self, raw: &str) -> Option<&'static str> {
        match self {
            Self::Required { message } => raw.is_empty().then_some(*message),
            Self::MinLength { min, message } => (raw.chars().count() < *min).then_some(*message),
            Self::MaxLength { max, message } => (raw.chars().count() > *max).then_some(*message),
            Self::Email { message } => (!is_email_shaped(raw)).then_some(*message),
            Self::DateWithin {
                earliest,
                latest,
                unparsable,
                too_early,
                too_late,
            } => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
                Err(_) => Some(*unparsable),
                Ok(date) if date < *earliest => Some(*too_early),
                Ok(date) if date > *latest => Some(*too_late),
                Ok(_) => None,
            },
        }
    }
}

/// Rules attached to one field, checked in order
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: FieldId,
    /// Whether the validated output carries the trimmed value
    pub trim_output: bool,
    pub constraints: Vec<Constraint>,
}

/// The registration schema, one entry per field in declaration order.
///
/// The checkbox carries no constraints; it appears here so the walker
/// and the form agree on the field list.
pub fn registration_rules() -> Vec<FieldRules> {
    vec![
        FieldRules {
            field: FieldId::Name,
            trim_output: false,
            constraints: vec![
                Constraint::MinLength {
                    min: 3,
                    message: "Name must be at least 3 characters long",
                },
                Constraint::MaxLength {
                    max: 25,
                    message: "Name is too long",
                },
            ],
        },
        FieldRules {
            field: FieldId::Email,
            trim_output: true,
            constraints: vec![Constraint::Email {
                message: "Invalid email address",
            }],
        },
        FieldRules {
            field: FieldId::Phone,
            trim_output: true,
            constraints: vec![
                Constraint::MinLength {
                    min: 10,
                    message: "Phone number must be at least 10 digits",
                },
                Constraint::MaxLength {
                    max: 14,
                    message: "Phone number cannot exceed 14 digits",
                },
            ],
        },
        FieldRules {
            field: FieldId::Address,
            trim_output: false,
            constraints: vec![Constraint::MinLength {
                min: 15,
                message: "Address must be at least 15 characters long",
            }],
        },
        FieldRules {
            field: FieldId::DateOfBirth,
            trim_output: false,
            constraints: vec![Constraint::DateWithin {
                earliest: DOB_EARLIEST,
                latest: DOB_LATEST,
                unparsable: "Invalid date",
                too_early: "Pick a valid date",
                too_late: "You must be at least 18 years old",
            }],
        },
        FieldRules {
            field: FieldId::Password,
            trim_output: false,
            constraints: vec![
                Constraint::Required {
                    message: "Password is required",
                },
                Constraint::MinLength {
                    min: 8,
                    message: "Password must be at least 8 characters long",
                },
                Constraint::MaxLength {
                    max: 100,
                    message: "Password is too long",
                },
            ],
        },
        FieldRules {
            field: FieldId::Subscribe,
            trim_output: false,
            constraints: vec![],
        },
    ]
}

/// Structural email check: single `@`, non-empty local part, dotted
/// domain with non-empty labels, no whitespace.
fn is_email_shaped(raw: &str) -> bool {
    if raw.is_empty() || raw.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = raw.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email_shape {
        use super::*;

        #[test]
        fn test_accepts_plain_addresses() {
            assert!(is_email_shaped("a@b.com"));
            assert!(is_email_shaped("first.last@example.co.uk"));
        }

        #[test]
        fn test_rejects_missing_at() {
            assert!(!is_email_shaped("not-an-email"));
        }

        #[test]
        fn test_rejects_empty_parts() {
            assert!(!is_email_shaped("@example.com"));
            assert!(!is_email_shaped("user@"));
            assert!(!is_email_shaped(""));
        }

        #[test]
        fn test_rejects_double_at() {
            assert!(!is_email_shaped("user@@example.com"));
            assert!(!is_email_shaped("us@er@example.com"));
        }

        #[test]
        fn test_rejects_undotted_or_empty_domain_labels() {
            assert!(!is_email_shaped("user@localhost"));
            assert!(!is_email_shaped("user@example."));
            assert!(!is_email_shaped("user@.com"));
        }

        #[test]
        fn test_rejects_whitespace() {
            assert!(!is_email_shaped("us er@example.com"));
            assert!(!is_email_shaped(" user@example.com"));
        }
    }

    mod constraint_check {
        use super::*;

        #[test]
        fn test_required_fires_on_empty_only() {
            let rule = Constraint::Required { message: "needed" };
            assert_eq!(rule.check(""), Some("needed"));
            assert_eq!(rule.check("x"), None);
        }

        #[test]
        fn test_length_bounds_are_inclusive() {
            let min = Constraint::MinLength {
                min: 3,
                message: "short",
            };
            let max = Constraint::MaxLength {
                max: 5,
                message: "long",
            };
            assert_eq!(min.check("ab"), Some("short"));
            assert_eq!(min.check("abc"), None);
            assert_eq!(max.check("abcde"), None);
            assert_eq!(max.check("abcdef"), Some("long"));
        }

        #[test]
        fn test_length_counts_chars_not_bytes() {
            let min = Constraint::MinLength {
                min: 3,
                message: "short",
            };
            // three scalar values, more than three bytes
            assert_eq!(min.check("äöü"), None);
        }

        #[test]
        fn test_date_within_bounds_inclusive() {
            let rule = Constraint::DateWithin {
                earliest: DOB_EARLIEST,
                latest: DOB_LATEST,
                unparsable: "bad",
                too_early: "early",
                too_late: "late",
            };
            assert_eq!(rule.check("1899-12-31"), Some("early"));
            assert_eq!(rule.check("1900-01-01"), None);
            assert_eq!(rule.check("2022-12-01"), None);
            assert_eq!(rule.check("2022-12-02"), Some("late"));
        }

        #[test]
        fn test_date_unparsable() {
            let rule = Constraint::DateWithin {
                earliest: DOB_EARLIEST,
                latest: DOB_LATEST,
                unparsable: "bad",
                too_early: "early",
                too_late: "late",
            };
            assert_eq!(rule.check(""), Some("bad"));
            assert_eq!(rule.check("yesterday"), Some("bad"));
            assert_eq!(rule.check("2000-02-30"), Some("bad"));
        }
    }

    mod rule_list {
        use super::*;

        #[test]
        fn test_one_entry_per_field_in_declaration_order() {
            let rules = registration_rules();
            let order: Vec<FieldId> = rules.iter().map(|r| r.field).collect();
            assert_eq!(order, FieldId::ALL);
        }

        #[test]
        fn test_only_email_and_phone_trim_output() {
            for rules in registration_rules() {
                let expected = matches!(rules.field, FieldId::Email | FieldId::Phone);
                assert_eq!(rules.trim_output, expected, "{}", rules.field);
            }
        }

        #[test]
        fn test_subscribe_has_no_constraints() {
            let rules = registration_rules();
            let subscribe = rules
                .iter()
                .find(|r| r.field == FieldId::Subscribe)
                .unwrap();
            assert!(subscribe.constraints.is_empty());
        }
    }
}
