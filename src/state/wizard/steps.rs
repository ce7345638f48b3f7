//! Step layout of the onboarding wizard

/// How a field is edited on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Typed text
    Text,
    /// Opens the date picker, not typeable
    DatePicker,
    /// Multi-select list over fixed options
    MultiSelect(&'static [&'static str]),
    /// Opens the document picker
    Documents,
}

/// A field as laid out on a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, input: InputKind) -> Self {
        Self { name, label, input }
    }
}

/// One page of the wizard
#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const COUNTRY_OPTIONS: &[&str] = &[
    "Australia",
    "Canada",
    "France",
    "Germany",
    "Ireland",
    "Netherlands",
    "United Kingdom",
    "United States",
];

pub const UNIVERSITY_OPTIONS: &[&str] = &[
    "ETH Zurich",
    "McGill University",
    "Sorbonne University",
    "Technical University of Munich",
    "University of Melbourne",
    "University of Oxford",
    "University of Toronto",
];

pub const STEPS: &[StepSpec] = &[
    StepSpec {
        title: "Personal",
        fields: &[
            FieldSpec::new("fullName", "Full Name", InputKind::Text),
            FieldSpec::new("dateOfBirth", "Date of Birth", InputKind::DatePicker),
            FieldSpec::new("gender", "Gender", InputKind::Text),
            FieldSpec::new("nationality", "Nationality", InputKind::Text),
            FieldSpec::new("contactNumber", "Contact Number", InputKind::Text),
            FieldSpec::new("email", "Email", InputKind::Text),
            FieldSpec::new("address", "Address", InputKind::Text),
        ],
    },
    StepSpec {
        title: "Education",
        fields: &[
            FieldSpec::new(
                "currentEducationLevel",
                "Current Education Level",
                InputKind::Text,
            ),
            FieldSpec::new(
                "institutionsAttended",
                "Institutions Attended",
                InputKind::Text,
            ),
            FieldSpec::new(
                "academicPerformance",
                "Academic Performance",
                InputKind::Text,
            ),
            FieldSpec::new("major", "Major", InputKind::Text),
            FieldSpec::new("standardizedTests", "Standardized Tests", InputKind::Text),
            FieldSpec::new(
                "preferredCountries",
                "Preferred Countries",
                InputKind::MultiSelect(COUNTRY_OPTIONS),
            ),
            FieldSpec::new(
                "preferredUniversities",
                "Preferred Universities",
                InputKind::MultiSelect(UNIVERSITY_OPTIONS),
            ),
        ],
    },
    StepSpec {
        title: "Program",
        fields: &[
            FieldSpec::new(
                "programStartDate",
                "Program Start Date (YYYY-MM-DD)",
                InputKind::Text,
            ),
            FieldSpec::new("budget", "Budget", InputKind::Text),
            FieldSpec::new("healthInsurance", "Health Insurance", InputKind::Text),
        ],
    },
    StepSpec {
        title: "Documents",
        fields: &[FieldSpec::new("documents", "Documents", InputKind::Documents)],
    },
];

/// Index of the step a field is laid out on
pub fn step_of(field: &str) -> Option<usize> {
    STEPS
        .iter()
        .position(|step| step.fields.iter().any(|f| f.name == field))
}
