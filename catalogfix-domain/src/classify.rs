use catalogfix_types::fix::FixCategory;

/// One entry of the classification decision list.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub category: FixCategory,
    /// Lowercase substrings; any one of them selects `category`.
    pub keywords: &'static [&'static str],
}

impl ClassificationRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

// Evaluated top to bottom; the first match wins. Keyword sets overlap ("header name" vs
// "handle", "image url" vs "image"), so entries must stay in this order.
const RULES: &[ClassificationRule] = &[
    ClassificationRule {
        category: FixCategory::HeaderNormalisation,
        keywords: &[
            "shopify:",
            "header name",
            "template",
            "canonical",
            "canonicalized",
            "enforced",
        ],
    },
    ClassificationRule {
        category: FixCategory::UrlHandle,
        keywords: &["url handle", "handle"],
    },
    ClassificationRule {
        category: FixCategory::BooleanFields,
        keywords: &["published", "charge tax", "requires shipping", "gift card"],
    },
    ClassificationRule {
        category: FixCategory::StatusVisibility,
        keywords: &["status", "visibility"],
    },
    ClassificationRule {
        category: FixCategory::PriceFields,
        keywords: &["price", "cost per item"],
    },
    ClassificationRule {
        category: FixCategory::Inventory,
        keywords: &["inventory", "stock", "continue selling"],
    },
    ClassificationRule {
        category: FixCategory::OptionsVariants,
        keywords: &["option", "variant", "default title"],
    },
    ClassificationRule {
        category: FixCategory::TagsLists,
        keywords: &["tag", "material", "categor", "image url"],
    },
    ClassificationRule {
        category: FixCategory::Images,
        keywords: &["image"],
    },
    ClassificationRule {
        category: FixCategory::WeightShipping,
        keywords: &["weight", "shipping", "fulfillment"],
    },
    ClassificationRule {
        category: FixCategory::WhitespaceCleanup,
        keywords: &["whitespace", "trimmed"],
    },
    ClassificationRule {
        category: FixCategory::GeneratedValues,
        keywords: &["generated", "filled", "mapped"],
    },
    ClassificationRule {
        category: FixCategory::ListCleanup,
        keywords: &["cleaned", "normalized list", "normalised list"],
    },
];

/// The ordered decision list used by [`classify`], fallback excluded.
pub fn classification_rules() -> &'static [ClassificationRule] {
    RULES
}

/// Map a free-text fix message to its category.
///
/// Matching is a case-insensitive substring search against [`classification_rules`] in order.
/// Messages that match nothing land in [`FixCategory::OtherNormalisation`].
pub fn classify(message: &str) -> FixCategory {
    let lowered = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| rule.category)
        .unwrap_or(FixCategory::OtherNormalisation)
}

/// Like [`classify`], treating an absent message as one that matches nothing.
pub fn classify_opt(message: Option<&str>) -> FixCategory {
    message
        .map(classify)
        .unwrap_or(FixCategory::OtherNormalisation)
}
