//! Fixed vocabularies and keyword tables
//!
//! These tables are process-wide immutable configuration. Everything that
//! reads them borrows `&'static` data, so nothing is rebuilt per call.

use savanna_domain::EcosystemType;

/// Ecology-relevant words kept by the indicator extractor (flora, fauna, crops)
pub const INDICATOR_VOCABULARY: &[&str] = &[
    "grass", "grassy", "savanna", "acacia", "baobab", "elephant", "zebra",
    "giraffe", "wildlife", "wildebeest", "lion", "leopard", "cheetah",
    "tree", "trees", "forest", "woodland", "bush", "scrub", "thorn",
    "palms", "palm", "mango", "banana", "coconut", "cocoa", "coffee",
    "grain", "crops", "maize", "rice", "wheat", "sorghum", "millet",
];

/// Words that mark a passage as describing the past
pub const TEMPORAL_VOCABULARY: &[&str] = &[
    "ancient", "old", "former", "past", "historical", "traditional", "olden",
    "medieval", "colonial", "early", "century", "years",
];

/// Keyword table for the scoring classifier, in table-iteration order
///
/// Wetland, desert and unknown carry no keywords and can never win a
/// keyword classification.
pub const ECOSYSTEM_KEYWORDS: &[(EcosystemType, &[&str])] = &[
    (
        EcosystemType::Savanna,
        &[
            "acacia", "baobab", "elephant", "zebra", "grass", "grassy", "open",
            "scattered", "trees", "tree", "savanna", "kalahari", "veld", "grassland",
        ],
    ),
    (
        EcosystemType::Forest,
        &[
            "dense", "canopy", "timber", "woods", "woodlands", "trees", "tree",
            "jungle", "forest", "understory", "wood",
        ],
    ),
    (
        EcosystemType::Grassland,
        &[
            "grass", "grassy", "prairie", "steppe", "pasture", "meadow", "field",
            "plain", "plains", "grassland", "pampas", "veld", "sward",
        ],
    ),
    (
        EcosystemType::ThornScrub,
        &[
            "thorn", "scrub", "bush", "cactus", "dry", "arid", "semi-arid",
            "drought", "xeric", "thornbush", "acacia", "mangrove", "dryland",
        ],
    ),
    (EcosystemType::Wetland, &[]),
    (EcosystemType::Desert, &[]),
    (EcosystemType::Unknown, &[]),
];

/// Preference order applied when several categories share the top score
pub const TIE_BREAK_ORDER: [EcosystemType; 4] = [
    EcosystemType::Savanna,
    EcosystemType::Forest,
    EcosystemType::Grassland,
    EcosystemType::ThornScrub,
];

/// Jaro-Winkler similarity an indicator must exceed to fuzzy-match a keyword
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Feature keywords used by the trained path to fill `extracted_features`
pub const FEATURE_KEYWORDS: &[(EcosystemType, &[&str])] = &[
    (EcosystemType::Savanna, &["grassy", "scattered", "acacia", "drought"]),
    (EcosystemType::Forest, &["dense", "canopy", "rainforest", "woodland"]),
    (EcosystemType::Grassland, &["grasslands", "wildflowers", "steppe"]),
    (EcosystemType::ThornScrub, &["cacti", "succulents", "desert", "arid"]),
];

/// Labelled sentences the naive Bayes model is trained on, in training order
pub const TRAINING_CORPUS: &[(&str, EcosystemType)] = &[
    ("grassy plains with scattered trees", EcosystemType::Savanna),
    ("open grasslands with acacia trees", EcosystemType::Savanna),
    ("sparse vegetation with drought resistant plants", EcosystemType::Savanna),
    ("dense forest with thick canopy", EcosystemType::Forest),
    ("tropical rainforest with multiple layers", EcosystemType::Forest),
    ("dry woodland with eucalyptus trees", EcosystemType::Forest),
    ("grasslands with wildflowers", EcosystemType::Grassland),
    ("steppe with tall grasses", EcosystemType::Grassland),
    ("arid regions with cacti and succulents", EcosystemType::ThornScrub),
    ("desert with sparse vegetation", EcosystemType::ThornScrub),
];

/// Function words dropped before tokens reach the trained model
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "been", "but", "by", "can", "could", "do", "for", "from", "had", "has",
    "have", "he", "her", "his", "i", "if", "in", "into", "is", "it", "its", "of",
    "on", "or", "our", "she", "so", "some", "that", "the", "their", "them",
    "there", "these", "they", "this", "to", "was", "we", "were", "which",
    "while", "who", "will", "with", "would", "you",
];
