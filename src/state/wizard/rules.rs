//! Validation rule table for the onboarding form

/// Shape a field's value must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Text,
    Email,
    /// Calendar date written as `YYYY-MM-DD`
    Date,
    Number,
    /// Selections or documents
    Collection,
}

/// Extra checks applied once the value has the right shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    /// Date must not be after today
    pub not_in_future: bool,
    /// Number must be greater than zero
    pub positive: bool,
    /// Collection must hold at least this many items
    pub min_selected: usize,
}

/// Messages reported for each failure mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// Value missing (or collection too small)
    pub required: &'static str,
    /// Value present but malformed
    pub invalid: &'static str,
    /// Value well formed but violating a constraint
    pub constraint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRule {
    pub field: &'static str,
    pub required: bool,
    pub kind: RuleKind,
    pub constraints: Constraints,
    pub messages: Messages,
}

const NO_CONSTRAINTS: Constraints = Constraints {
    not_in_future: false,
    positive: false,
    min_selected: 0,
};

const fn required_text(field: &'static str, message: &'static str) -> ValidationRule {
    ValidationRule {
        field,
        required: true,
        kind: RuleKind::Text,
        constraints: NO_CONSTRAINTS,
        messages: Messages {
            required: message,
            invalid: message,
            constraint: message,
        },
    }
}

const fn at_least_one(field: &'static str, message: &'static str) -> ValidationRule {
    ValidationRule {
        field,
        required: true,
        kind: RuleKind::Collection,
        constraints: Constraints {
            min_selected: 1,
            ..NO_CONSTRAINTS
        },
        messages: Messages {
            required: message,
            invalid: message,
            constraint: message,
        },
    }
}

pub const RULES: &[ValidationRule] = &[
    required_text("fullName", "Full Name is required"),
    ValidationRule {
        field: "dateOfBirth",
        required: true,
        kind: RuleKind::Date,
        constraints: Constraints {
            not_in_future: true,
            ..NO_CONSTRAINTS
        },
        messages: Messages {
            required: "Date of Birth is required",
            invalid: "Date of Birth must be a valid date",
            constraint: "Date of Birth cannot be in the future",
        },
    },
    required_text("gender", "Gender is required"),
    required_text("nationality", "Nationality is required"),
    required_text("contactNumber", "Contact Number is required"),
    ValidationRule {
        field: "email",
        required: true,
        kind: RuleKind::Email,
        constraints: NO_CONSTRAINTS,
        messages: Messages {
            required: "Email is required",
            invalid: "Invalid email",
            constraint: "Invalid email",
        },
    },
    required_text("address", "Address is required"),
    required_text("currentEducationLevel", "Education Level is required"),
    required_text("institutionsAttended", "Institutions Attended is required"),
    required_text("academicPerformance", "Academic Performance is required"),
    required_text("major", "Major is required"),
    required_text("standardizedTests", "Standardized Test Scores are required"),
    at_least_one("preferredCountries", "At least one country must be selected"),
    at_least_one(
        "preferredUniversities",
        "At least one university must be selected",
    ),
    ValidationRule {
        field: "programStartDate",
        required: true,
        kind: RuleKind::Date,
        constraints: NO_CONSTRAINTS,
        messages: Messages {
            required: "Program Start Date is required",
            invalid: "Program Start Date must be a valid date",
            constraint: "Program Start Date must be a valid date",
        },
    },
    ValidationRule {
        field: "budget",
        required: true,
        kind: RuleKind::Number,
        constraints: Constraints {
            positive: true,
            ..NO_CONSTRAINTS
        },
        messages: Messages {
            required: "Budget is required",
            invalid: "Budget must be a number",
            constraint: "Budget must be positive",
        },
    },
    required_text("healthInsurance", "Health Insurance is required"),
    at_least_one("documents", "At least one document must be uploaded"),
];

/// Look up the rule for a field
pub fn rule_for(field: &str) -> Option<&'static ValidationRule> {
    RULES.iter().find(|rule| rule.field == field)
}
