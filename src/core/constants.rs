//! Static vocabulary sources.
//!
//! The vocabulary is rebuilt from these lists every time a tokenizer is
//! constructed. Order matters everywhere in this file: it decides which ID a
//! character or word receives.
//!
//! # ID Layout (default sources)
//!
//! - `1`, `404`: reserved special phrases
//! - `101..=195`: single characters, in [`CHAR_VALUES`] order
//! - `196..`: words, in first-seen order of [`BASE_WORDS`] followed by their
//!   capitalized variants, skipping any reserved special ID

/// First ID handed out to single characters.
pub const LETTER_ID_OFFSET: u32 = 101;

/// Fixed ordered set of characters used for single-character tokens.
pub const CHAR_VALUES: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    " ",
    "`~!@#$%^&*()-_=+[]{}\\|;:'\",.<>/?",
);

/// Reserved IDs for the built-in special phrases.
///
/// These never collide with character or word IDs: the builder skips them
/// while numbering words.
pub mod special_ids {
    pub const PIYUSH_IS_CUTIE: u32 = 1;
    pub const PIYUSH_HAS_GIRLFRIEND: u32 = 404;
}

/// Full-sentence tokens with reserved IDs. Matched case-insensitively.
pub const SPECIAL_PHRASES: &[(&str, u32)] = &[
    (SpecialPhrase::PiyushIsCutie.phrase(), special_ids::PIYUSH_IS_CUTIE),
    (
        SpecialPhrase::PiyushHasGirlfriend.phrase(),
        special_ids::PIYUSH_HAS_GIRLFRIEND,
    ),
];

/// Named handle for each built-in special phrase.
///
/// Presentation code should branch on this instead of comparing raw IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialPhrase {
    PiyushIsCutie,
    PiyushHasGirlfriend,
}

impl SpecialPhrase {
    /// All built-in phrases, in table order.
    pub const ALL: [SpecialPhrase; 2] = [Self::PiyushIsCutie, Self::PiyushHasGirlfriend];

    /// Canonical spelling of the phrase.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::PiyushIsCutie => "Piyush is Cutie",
            Self::PiyushHasGirlfriend => "Piyush has Girlfriend",
        }
    }

    /// Reserved token ID.
    pub const fn id(self) -> u32 {
        match self {
            Self::PiyushIsCutie => special_ids::PIYUSH_IS_CUTIE,
            Self::PiyushHasGirlfriend => special_ids::PIYUSH_HAS_GIRLFRIEND,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Looks a phrase up by text, ignoring ASCII case.
    pub fn from_phrase(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.phrase().eq_ignore_ascii_case(text))
    }
}

/// Curated common words (lowercase). Single-letter words such as "a" or "i"
/// are excluded; duplicates are removed when the word list is assembled.
#[rustfmt::skip]
pub const BASE_WORDS: &[&str] = &[
    // wh-words
    "how", "what", "when", "where", "why", "who", "whom", "whose", "which",
    // articles, pronouns, auxiliaries, conjunctions, prepositions
    "the", "be", "to", "of", "and", "in", "that", "have", "it", "for", "not", "on", "with", "as", "you", "do", "at", "this", "but", "his", "by", "from",
    "they", "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "is", "are", "was", "were", "been", "being",
    "me", "them", "us", "about", "above", "across", "after", "against", "along", "among", "around", "before", "behind", "below", "beneath", "beside",
    "between", "beyond", "concerning", "despite", "down", "during", "except", "inside", "into", "near", "off", "onto", "out", "outside", "over", "past",
    "regarding", "since", "through", "throughout", "toward", "under", "underneath", "until", "upon", "within", "without", "and", "or", "so", "yet", "nor",
    "although", "because", "unless", "while", "whereas", "can", "could", "shall", "should", "will", "would", "may", "might", "must", "do", "does", "did",
    "am", "has", "have", "had", "if", "then", "else", "also", "very", "more", "most", "some", "any", "each", "every", "no", "only", "own", "same", "than",
    "too", "really", "just", "now", "then", "there", "here", "again", "still", "even",
    // greetings & time of day
    "hello", "hi", "hey", "namaste", "thanks", "thank", "welcome", "please", "good", "morning", "evening", "night", "afternoon", "today", "tomorrow", "yesterday", "tonight",
    // names
    "pratik", "hitesh", "piyush", "rahul", "rohit", "amit", "priya", "sneha", "neha", "ankit", "kiran", "aditi", "ravi", "arjun", "vijay", "anita",
    // coding
    "code", "coding", "bug", "fix", "commit", "push", "pull", "merge", "branch", "repo", "repository", "function", "variable", "constant", "class", "interface", "type",
    "array", "object", "loop", "async", "await", "promise", "error", "exception", "test", "unit", "integration", "deploy", "build", "compile", "runtime", "server", "client",
    "api", "endpoint", "request", "response", "json", "package", "module", "import", "export", "require", "return", "switch", "case", "for", "while", "map", "filter", "reduce",
    "try", "catch", "finally", "throw",
    // ai
    "ai", "gpt", "model", "models", "dataset", "training", "train", "inference", "token", "tokens", "tokenize", "tokenizer", "prompt", "prompts", "llm", "embedding", "embeddings",
    "vector", "vectors", "transformer", "attention",
    // javascript ecosystem
    "javascript", "js", "typescript", "ts", "node", "npm", "yarn", "pnpm", "vite", "react", "angular", "vue", "next", "express", "babel", "webpack", "eslint", "prettier",
    "tsconfig", "console", "log", "timeout", "interval", "document", "window", "fetch", "jsx", "tsx",
    // love
    "love", "likes", "loves", "heart", "hearts", "dear", "darling", "crush", "kiss", "hugs", "romance",
];
