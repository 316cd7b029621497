// ABOUTME: Persona-specific onboarding configuration
// Each persona declares its ordered steps, the fields on each step and the gate for "Next"

use serde::{Deserialize, Serialize};

use super::form::FormState;

/// Which side of the marketplace the user is onboarding as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Buyer,
    Seller,
}

impl Persona {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buyer => "Buyer",
            Self::Seller => "Seller",
        }
    }

    pub fn config(&self) -> &'static PersonaConfig {
        match self {
            Self::Buyer => &BUYER,
            Self::Seller => &SELLER,
        }
    }
}

/// Field names shared by the persona configurations and the pages that edit them
pub mod fields {
    pub const FULL_NAME: &str = "full_name";
    // Buyer
    pub const COMPANY: &str = "company";
    pub const INDUSTRIES: &str = "industries";
    pub const BUDGET_RANGE: &str = "budget_range";
    pub const LOCATION: &str = "location";
    pub const ACQUISITION_GOALS: &str = "acquisition_goals";
    pub const TIMELINE: &str = "timeline";
    // Seller
    pub const BUSINESS_NAME: &str = "business_name";
    pub const BUSINESS_TYPE: &str = "business_type";
    pub const ANNUAL_REVENUE: &str = "annual_revenue";
    pub const ASKING_PRICE: &str = "asking_price";
    pub const BUYER_TRAITS: &str = "buyer_traits";
    pub const BUSINESS_DESCRIPTION: &str = "business_description";
}

pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Manufacturing",
    "Healthcare",
    "Retail",
    "Hospitality",
    "Professional Services",
    "Real Estate",
    "Food & Beverage",
    "Construction",
    "Transportation",
    "Education",
    "Finance",
];

pub const BUDGET_RANGES: &[&str] = &[
    "Under $500K",
    "$500K - $1M",
    "$1M - $5M",
    "$5M - $10M",
    "$10M+",
];

pub const TIMELINES: &[&str] = &[
    "Immediate (0-3 months)",
    "Short-term (3-6 months)",
    "Medium-term (6-12 months)",
    "Long-term (12+ months)",
];

pub const BUSINESS_TYPES: &[&str] = &[
    "Technology/SaaS",
    "E-commerce",
    "Manufacturing",
    "Healthcare",
    "Retail",
    "Professional Services",
    "Real Estate",
    "Food & Beverage",
    "Construction",
    "Transportation",
    "Education",
    "Finance",
    "Hospitality",
    "Other",
];

pub const REVENUE_RANGES: &[&str] = &[
    "Under $500K",
    "$500K - $1M",
    "$1M - $5M",
    "$5M - $10M",
    "$10M - $50M",
    "$50M+",
];

pub const BUYER_TRAITS: &[&str] = &[
    "Experienced Owner",
    "Financially Qualified",
    "Local Buyer",
    "Strategic Acquirer",
    "First-time Buyer",
    "Private Equity",
    "Family Office",
    "Industry Expertise",
];

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Free-form notes
    LongText,
    /// Exactly one option from the list
    SingleChoice(&'static [&'static str]),
    /// Any number of options from the list
    MultiChoice(&'static [&'static str]),
    /// One preset option, or a custom typed value
    ChoiceOrCustom(&'static [&'static str]),
}

impl FieldKind {
    /// Preset options, if the field has any
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::SingleChoice(options)
            | Self::MultiChoice(options)
            | Self::ChoiceOrCustom(options) => options,
            Self::Text | Self::LongText => &[],
        }
    }

    /// Whether the field accepts typed characters
    pub fn accepts_text(&self) -> bool {
        matches!(self, Self::Text | Self::LongText | Self::ChoiceOrCustom(_))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Minimum condition for leaving a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Every listed text field is non-empty after trimming
    NotBlank(&'static [&'static str]),
    /// The field holds any value at all
    NotEmpty(&'static str),
    /// At least one value selected
    AnySelected(&'static str),
}

impl Requirement {
    pub fn is_met(&self, form: &FormState) -> bool {
        match self {
            Self::NotBlank(keys) => keys.iter().all(|key| !form.text(key).trim().is_empty()),
            Self::NotEmpty(key) => !form.text(key).is_empty(),
            Self::AnySelected(key) => !form.selections(key).is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StepSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub fields: &'static [FieldSpec],
    pub requirement: Requirement,
}

/// Ordered steps for one persona
#[derive(Debug)]
pub struct PersonaConfig {
    pub persona: Persona,
    pub steps: &'static [StepSpec],
}

impl PersonaConfig {
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Step by 1-based index
    pub fn step(&self, number: usize) -> Option<&'static StepSpec> {
        number.checked_sub(1).and_then(|idx| self.steps.get(idx))
    }

    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .find(|spec| spec.key == key)
    }

    /// Whether "Next" may be pressed on the given 1-based step
    pub fn can_proceed(&self, step: usize, form: &FormState) -> bool {
        self.step(step)
            .is_some_and(|spec| spec.requirement.is_met(form))
    }
}

const fn field(
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
    required: bool,
) -> FieldSpec {
    FieldSpec {
        key,
        label,
        placeholder,
        kind,
        required,
    }
}

pub static BUYER: PersonaConfig = PersonaConfig {
    persona: Persona::Buyer,
    steps: &[
        StepSpec {
            title: "Let's get started!",
            subtitle: "Tell us about yourself to create your buyer profile",
            fields: &[
                field(fields::FULL_NAME, "Full Name", "Enter your full name", FieldKind::Text, true),
                field(
                    fields::COMPANY,
                    "Company (Optional)",
                    "Current company or investment firm",
                    FieldKind::Text,
                    false,
                ),
            ],
            requirement: Requirement::NotBlank(&[fields::FULL_NAME]),
        },
        StepSpec {
            title: "What industries interest you?",
            subtitle: "Select all that apply - you can change this later",
            fields: &[field(
                fields::INDUSTRIES,
                "Industries",
                "",
                FieldKind::MultiChoice(INDUSTRIES),
                true,
            )],
            requirement: Requirement::AnySelected(fields::INDUSTRIES),
        },
        StepSpec {
            title: "What's your budget range?",
            subtitle: "This helps us match you with suitable opportunities",
            fields: &[field(
                fields::BUDGET_RANGE,
                "Budget Range",
                "",
                FieldKind::SingleChoice(BUDGET_RANGES),
                true,
            )],
            requirement: Requirement::NotEmpty(fields::BUDGET_RANGE),
        },
        StepSpec {
            title: "Where are you looking?",
            subtitle: "Preferred location for acquisitions",
            fields: &[
                field(
                    fields::LOCATION,
                    "Location",
                    "e.g., San Francisco, CA or Remote",
                    FieldKind::Text,
                    true,
                ),
                field(
                    fields::ACQUISITION_GOALS,
                    "Tell us about your acquisition goals (Optional)",
                    "What type of businesses are you looking to acquire? Any specific criteria?",
                    FieldKind::LongText,
                    false,
                ),
            ],
            requirement: Requirement::NotBlank(&[fields::LOCATION]),
        },
        StepSpec {
            title: "What's your timeline?",
            subtitle: "When are you looking to complete an acquisition?",
            fields: &[field(
                fields::TIMELINE,
                "Timeline",
                "",
                FieldKind::SingleChoice(TIMELINES),
                true,
            )],
            requirement: Requirement::NotEmpty(fields::TIMELINE),
        },
    ],
};

pub static SELLER: PersonaConfig = PersonaConfig {
    persona: Persona::Seller,
    steps: &[
        StepSpec {
            title: "Tell us about your business",
            subtitle: "Let's start with the basics",
            fields: &[
                field(fields::FULL_NAME, "Your Full Name", "Enter your full name", FieldKind::Text, true),
                field(
                    fields::BUSINESS_NAME,
                    "Business Name",
                    "Your business or company name",
                    FieldKind::Text,
                    true,
                ),
            ],
            requirement: Requirement::NotBlank(&[fields::FULL_NAME, fields::BUSINESS_NAME]),
        },
        StepSpec {
            title: "What type of business is it?",
            subtitle: "Select the category that best describes your business",
            fields: &[field(
                fields::BUSINESS_TYPE,
                "Business Type",
                "",
                FieldKind::SingleChoice(BUSINESS_TYPES),
                true,
            )],
            requirement: Requirement::NotEmpty(fields::BUSINESS_TYPE),
        },
        StepSpec {
            title: "Annual Revenue",
            subtitle: "This helps buyers understand the scale of your business",
            fields: &[field(
                fields::ANNUAL_REVENUE,
                "Annual Revenue",
                "",
                FieldKind::SingleChoice(REVENUE_RANGES),
                true,
            )],
            requirement: Requirement::NotEmpty(fields::ANNUAL_REVENUE),
        },
        StepSpec {
            title: "What's your asking price range?",
            subtitle: "Or enter a custom amount",
            fields: &[field(
                fields::ASKING_PRICE,
                "Custom Amount",
                "e.g., $2,500,000",
                FieldKind::ChoiceOrCustom(REVENUE_RANGES),
                true,
            )],
            requirement: Requirement::NotEmpty(fields::ASKING_PRICE),
        },
        StepSpec {
            title: "What type of buyer are you looking for?",
            subtitle: "Select all that apply",
            fields: &[
                field(
                    fields::BUYER_TRAITS,
                    "Desired Buyer Traits",
                    "",
                    FieldKind::MultiChoice(BUYER_TRAITS),
                    true,
                ),
                field(
                    fields::BUSINESS_DESCRIPTION,
                    "Business Description (Optional)",
                    "Tell potential buyers about your business, its strengths, and what makes it special",
                    FieldKind::LongText,
                    false,
                ),
            ],
            requirement: Requirement::AnySelected(fields::BUYER_TRAITS),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_personas_have_five_steps() {
        assert_eq!(BUYER.total_steps(), 5);
        assert_eq!(SELLER.total_steps(), 5);
    }

    #[test]
    fn test_step_lookup_is_one_based() {
        assert!(BUYER.step(0).is_none());
        assert_eq!(BUYER.step(1).unwrap().title, "Let's get started!");
        assert_eq!(BUYER.step(5).unwrap().title, "What's your timeline?");
        assert!(BUYER.step(6).is_none());
    }

    #[test]
    fn test_field_keys_are_unique_per_persona() {
        for config in [&BUYER, &SELLER] {
            let mut keys: Vec<_> = config
                .steps
                .iter()
                .flat_map(|s| s.fields.iter().map(|f| f.key))
                .collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "{:?} declares a field twice", config.persona);
        }
    }

    #[test]
    fn test_only_asking_price_accepts_custom_choice() {
        let spec = SELLER.field(fields::ASKING_PRICE).unwrap();
        assert!(spec.kind.accepts_text());
        assert_eq!(spec.kind.options(), REVENUE_RANGES);
        assert!(!BUYER.field(fields::BUDGET_RANGE).unwrap().kind.accepts_text());
    }

    #[test]
    fn test_not_blank_requires_every_field() {
        let mut form = FormState::for_persona(&SELLER);
        form.set_single_value(fields::FULL_NAME, "Anne Smith").unwrap();
        assert!(!SELLER.can_proceed(1, &form));
        form.set_single_value(fields::BUSINESS_NAME, "  ").unwrap();
        assert!(!SELLER.can_proceed(1, &form));
        form.set_single_value(fields::BUSINESS_NAME, "TechFlow").unwrap();
        assert!(SELLER.can_proceed(1, &form));
    }

    #[test]
    fn test_out_of_range_step_cannot_proceed() {
        let form = FormState::for_persona(&BUYER);
        assert!(!BUYER.can_proceed(0, &form));
        assert!(!BUYER.can_proceed(6, &form));
    }
}
