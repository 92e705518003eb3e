//! Category resolution from the image classifier's top label.
//!
//! The rule table is evaluated in two passes: an exact match on the
//! normalized label across every rule, then a substring match (label
//! contains keyword, or keyword contains label) in declaration order.
//! Anything unmatched resolves to [`Category::Default`].

use skinsight_core::{Category, normalize_label};
use tracing::debug;

/// Keywords that route a classifier label to a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// How a label was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    Fallback,
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: Category::Inflammatory,
        keywords: &[
            "acne",
            "dermatitis",
            "atopic_dermatitis",
            "contact_dermatitis",
            "seborrheic_dermatitis",
            "psoriasis",
            "acne_keloidalis_nuchae",
            "eczema",
            "rosacea",
        ],
    },
    CategoryRule {
        category: Category::Infectious,
        keywords: &[
            "molluscum_contagiosum",
            "molluscum",
            "ringworm",
            "warts",
            "boils",
            "cellulitis",
            "folliculitis",
            "impetigo",
            "cold_sores",
            "tinea",
            "fungal",
            "herpes",
            "sores",
            "bacterial",
        ],
    },
    CategoryRule {
        category: Category::Autoimmune,
        keywords: &["vitiligo", "lupus", "drug_induced_pigmentation", "lichen"],
    },
    CategoryRule {
        category: Category::BenignGrowth,
        keywords: &["dermatofibroma", "digital_mucous_cyst", "cyst", "lipoma", "keloids"],
    },
    CategoryRule {
        category: Category::SkinCancer,
        keywords: &[
            "cancer",
            "actinic",
            "basal",
            "squamous",
            "melanoma",
            "actinic_keratosis",
            "basal_cell_cancer",
            "squamous_cell_cancer",
            "carcinoma",
            "keratosis",
            "malignant",
            "lesion",
        ],
    },
    CategoryRule {
        category: Category::Pigmentary,
        keywords: &[
            "pigmentary",
            "melasma",
            "hyperpigmentation",
            "age_spots",
            "sunspots",
            "dyschromia",
            "varicose_veins",
        ],
    },
    CategoryRule {
        category: Category::Environmental,
        keywords: &[
            "environmental",
            "poison",
            "razor",
            "dry",
            "sun",
            "poison_ivy",
            "razor_bumps",
            "dry_skin",
            "hyperhidrosis",
            "sun_damage",
            "burn",
        ],
    },
];

/// Resolve a classifier label against the built-in rule table.
pub fn classify(label: &str) -> Category {
    classify_with(CATEGORY_RULES, label).0
}

/// Resolve a label against an arbitrary rule table.
pub fn classify_with(rules: &[CategoryRule], label: &str) -> (Category, MatchKind) {
    let normalized = normalize_label(label);
    if normalized.is_empty() {
        debug!(label, "empty classifier label, using DEFAULT");
        return (Category::Default, MatchKind::Fallback);
    }

    let keywords = |rule: &CategoryRule| {
        rule.keywords
            .iter()
            .map(|k| normalize_label(k))
            .collect::<Vec<_>>()
    };

    for rule in rules {
        if keywords(rule).iter().any(|k| *k == normalized) {
            return (rule.category, MatchKind::Exact);
        }
    }

    for rule in rules {
        if keywords(rule)
            .iter()
            .any(|k| normalized.contains(k.as_str()) || k.contains(normalized.as_str()))
        {
            return (rule.category, MatchKind::Substring);
        }
    }

    debug!(label, "no category rule matched, using DEFAULT");
    (Category::Default, MatchKind::Fallback)
}
