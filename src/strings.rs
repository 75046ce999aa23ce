//! Centralized localized strings: the schema and the per-language catalog.
//!
//! `LanguageStrings` is the contract: every language constant must populate
//! every field, so a missing translation is a compile error in the struct
//! literal, not a runtime surprise at render time. Formatter templates use
//! `{placeholder}` slots and are rendered by the formatter methods.

use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operator a math question may ask about.
///
/// The operator set is closed: quiz questions are addition or subtraction
/// only, and the type makes any other operator unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MathOperator {
    /// Addition ("+")
    #[serde(rename = "+")]
    Add,

    /// Subtraction ("-")
    #[serde(rename = "-")]
    Subtract,
}

impl MathOperator {
    /// The symbol inserted into rendered questions.
    pub fn symbol(&self) -> &'static str {
        match self {
            MathOperator::Add => "+",
            MathOperator::Subtract => "-",
        }
    }
}

impl fmt::Display for MathOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// All localized user-facing strings for a language.
///
/// Plain fields are displayed as-is. The `*_template` fields hold formatter
/// templates with `{placeholder}` slots; render them through
/// [`LanguageStrings::damage_question`] and [`LanguageStrings::math_question`]
/// rather than displaying them directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStrings {
    // ==================== App Chrome ====================
    /// Application title shown in the header (brand, untranslated)
    pub app_title: &'static str,

    /// Tagline shown under the title (brand, untranslated)
    pub app_tagline: &'static str,

    /// Title of the quiz screen
    pub quiz_title: &'static str,

    /// Label of the button that starts a quiz
    pub play_quiz: &'static str,

    /// Label of the button that opens the card collection
    pub my_collection: &'static str,

    // ==================== Quiz Setup ====================
    /// Label for the card-set picker
    pub select_set: &'static str,

    /// Label for the language picker
    pub select_language: &'static str,

    /// Label shown next to the set currently being collected
    pub set_info: &'static str,

    /// Label for the grade-level picker
    pub grade_level: &'static str,

    // ==================== Quiz Flow ====================
    /// Placeholder of the answer input
    pub enter_answer: &'static str,

    /// Label of the answer submit button
    pub submit_answer: &'static str,

    /// Label of the button advancing to the next question
    pub next_question: &'static str,

    /// Shown while the next question is being prepared
    pub loading: &'static str,

    // ==================== Answer Feedback ====================
    /// Headline for a correct answer
    pub correct: &'static str,

    /// Headline for an incorrect answer
    pub not_quite: &'static str,

    /// Lead-in before the correct answer value (e.g., "Great job! The answer was")
    pub correct_message: &'static str,

    /// Lead-in before the user's own answer value (e.g., "You answered")
    pub incorrect_message: &'static str,

    /// Encouragement shown after an incorrect answer
    pub encouragement: &'static str,

    /// Shown when a correct answer wins a card
    pub you_won_this_card: &'static str,

    // ==================== Collection Stats ====================
    /// Stat label: number of cards collected
    pub cards_collected: &'static str,

    /// Stat label: number of questions answered
    pub questions_answered: &'static str,

    /// Stat label: number of correct answers
    pub correct_answers: &'static str,

    /// Stat label: answer accuracy
    pub accuracy: &'static str,

    /// Heading of the collection screen
    pub your_collection: &'static str,

    // ==================== Empty Collection ====================
    /// Headline shown when the collection is empty
    pub no_cards_yet: &'static str,

    /// Explanation shown when the collection is empty
    pub no_cards_description: &'static str,

    // ==================== Backup & Clear ====================
    /// Label of the backup export button
    pub export_backup: &'static str,

    /// Label of the backup import button
    pub import_backup: &'static str,

    /// Label of the button clearing the current set
    pub clear_this_set: &'static str,

    /// Title of the clear-collection confirmation dialog
    pub clear_collection_title: &'static str,

    /// Body of the clear-collection confirmation dialog
    pub clear_collection_message: &'static str,

    /// Label of the dialog cancel button
    pub cancel: &'static str,

    /// Label of the dialog confirm button
    pub clear_collection: &'static str,

    // ==================== Toasts ====================
    /// Toast: backup export succeeded
    pub collection_exported: &'static str,

    /// Toast: backup import succeeded
    pub collection_imported: &'static str,

    /// Toast: collection cleared
    pub collection_cleared: &'static str,

    /// Toast: backup export failed
    pub export_failed: &'static str,

    /// Toast: backup import failed
    pub import_failed: &'static str,

    /// Toast: clearing the collection failed
    pub clear_failed: &'static str,

    // ==================== Card Details ====================
    /// Singular unit for a card's hit count
    pub hit: &'static str,

    /// Plural unit for a card's hit count
    pub hits: &'static str,

    /// Label for the language row on a card
    pub language: &'static str,

    // ==================== Formatter Templates ====================
    /// Damage question sentence
    /// Placeholders: {damage}
    pub damage_question_template: &'static str,

    /// Math question sentence
    /// Placeholders: {num1}, {operator}, {num2}
    pub math_question_template: &'static str,
}

impl LanguageStrings {
    /// Render the damage question for a card dealing `damage` per turn.
    ///
    /// Pure: the value is inserted verbatim (digits as-is, no number
    /// localization).
    ///
    /// # Example
    /// ```
    /// use cardcrunch_i18n::{get_translations, Language};
    ///
    /// let question = get_translations(Language::Norwegian).damage_question(7);
    /// assert!(question.contains("7 skade"));
    /// ```
    pub fn damage_question(&self, damage: u32) -> String {
        self.damage_question_template
            .replace("{damage}", &damage.to_string())
    }

    /// Render the math question `num1 <op> num2`.
    ///
    /// Pure: operands are inserted verbatim. The operator is constrained to
    /// the closed [`MathOperator`] set; anything else is rejected at
    /// compile time:
    ///
    /// ```compile_fail
    /// use cardcrunch_i18n::{get_translations, Language};
    ///
    /// let t = get_translations(Language::English);
    /// t.math_question(3, 4, "*"); // not a MathOperator
    /// ```
    ///
    /// # Example
    /// ```
    /// use cardcrunch_i18n::{get_translations, Language, MathOperator};
    ///
    /// let t = get_translations(Language::English);
    /// assert_eq!(t.math_question(3, 4, MathOperator::Add), "What is 3 + 4?");
    /// ```
    pub fn math_question(&self, num1: i64, num2: i64, operator: MathOperator) -> String {
        self.math_question_template
            .replace("{num1}", &num1.to_string())
            .replace("{operator}", operator.symbol())
            .replace("{num2}", &num2.to_string())
    }

    /// Enumerate every schema field as a (name, raw value) pair.
    ///
    /// Formatter templates appear with their placeholders unrendered. The
    /// order is the schema order and is identical for every language; the
    /// validator and the schema-parity tests are built on this.
    pub fn fields(&self) -> [(&'static str, &'static str); 44] {
        [
            ("app_title", self.app_title),
            ("app_tagline", self.app_tagline),
            ("quiz_title", self.quiz_title),
            ("play_quiz", self.play_quiz),
            ("my_collection", self.my_collection),
            ("select_set", self.select_set),
            ("select_language", self.select_language),
            ("set_info", self.set_info),
            ("grade_level", self.grade_level),
            ("enter_answer", self.enter_answer),
            ("submit_answer", self.submit_answer),
            ("next_question", self.next_question),
            ("loading", self.loading),
            ("correct", self.correct),
            ("not_quite", self.not_quite),
            ("correct_message", self.correct_message),
            ("incorrect_message", self.incorrect_message),
            ("encouragement", self.encouragement),
            ("you_won_this_card", self.you_won_this_card),
            ("cards_collected", self.cards_collected),
            ("questions_answered", self.questions_answered),
            ("correct_answers", self.correct_answers),
            ("accuracy", self.accuracy),
            ("your_collection", self.your_collection),
            ("no_cards_yet", self.no_cards_yet),
            ("no_cards_description", self.no_cards_description),
            ("export_backup", self.export_backup),
            ("import_backup", self.import_backup),
            ("clear_this_set", self.clear_this_set),
            ("clear_collection_title", self.clear_collection_title),
            ("clear_collection_message", self.clear_collection_message),
            ("cancel", self.cancel),
            ("clear_collection", self.clear_collection),
            ("collection_exported", self.collection_exported),
            ("collection_imported", self.collection_imported),
            ("collection_cleared", self.collection_cleared),
            ("export_failed", self.export_failed),
            ("import_failed", self.import_failed),
            ("clear_failed", self.clear_failed),
            ("hit", self.hit),
            ("hits", self.hits),
            ("language", self.language),
            ("damage_question_template", self.damage_question_template),
            ("math_question_template", self.math_question_template),
        ]
    }
}

/// Get the full set of strings for a language.
///
/// Total over [`Language`]: the match is exhaustive and every entry is a
/// fully populated constant, so there is no missing-field or fallback path.
pub fn get_translations(language: Language) -> &'static LanguageStrings {
    match language {
        Language::English => &ENGLISH_STRINGS,
        Language::Norwegian => &NORWEGIAN_STRINGS,
    }
}

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    // App chrome
    app_title: "cardCrun.ch",
    app_tagline: "Crunch Numbers. Collect Cards.",
    quiz_title: "TCG Math Challenge",
    play_quiz: "Play Quiz",
    my_collection: "My Collection",

    // Quiz setup
    select_set: "Select Set",
    select_language: "Language",
    set_info: "Collecting Set",
    grade_level: "Grade Level",

    // Quiz flow
    enter_answer: "Enter your answer",
    submit_answer: "Submit Answer",
    next_question: "Next Question",
    loading: "Loading new question...",

    // Answer feedback
    correct: "Correct!",
    not_quite: "Not quite!",
    correct_message: "Great job! The answer was",
    incorrect_message: "You answered",
    encouragement: "Try again with the next question!",
    you_won_this_card: "You won this card!",

    // Collection stats
    cards_collected: "Cards Collected",
    questions_answered: "Questions Answered",
    correct_answers: "Correct Answers",
    accuracy: "Accuracy",
    your_collection: "Your Collection",

    // Empty collection
    no_cards_yet: "No cards yet!",
    no_cards_description: "Answer questions correctly to start building your collection.",

    // Backup & clear
    export_backup: "Export Backup",
    import_backup: "Import Backup",
    clear_this_set: "Clear This Set",
    clear_collection_title: "Clear Collection?",
    clear_collection_message:
        "Are you sure you want to clear your entire collection? This action cannot be undone.",
    cancel: "Cancel",
    clear_collection: "Clear Collection",

    // Toasts
    collection_exported: "Collection exported successfully!",
    collection_imported: "Collection imported successfully!",
    collection_cleared: "Collection cleared successfully!",
    export_failed: "Failed to export collection",
    import_failed: "Failed to import collection",
    clear_failed: "Failed to clear collection",

    // Card details
    hit: "hit",
    hits: "hits",
    language: "Language",

    // Formatter templates
    damage_question_template:
        "Your Pokémon deals {damage} damage each turn. How many turns does it take to defeat this Pokémon?",
    math_question_template: "What is {num1} {operator} {num2}?",
};

// ==================== Norwegian Strings ====================

/// Norwegian (Bokmål) language strings
pub const NORWEGIAN_STRINGS: LanguageStrings = LanguageStrings {
    // App chrome
    app_title: "cardCrun.ch",
    app_tagline: "Crunch Numbers. Collect Cards.",
    quiz_title: "TCG Matte Utfordring",
    play_quiz: "Spill Quiz",
    my_collection: "Min Samling",

    // Quiz setup
    select_set: "Velg Sett",
    select_language: "Språk",
    set_info: "Samler Sett",
    grade_level: "Klassetrinn",

    // Quiz flow
    enter_answer: "Skriv inn svaret ditt",
    submit_answer: "Send Inn Svar",
    next_question: "Neste Spørsmål",
    loading: "Laster nytt spørsmål...",

    // Answer feedback
    correct: "Riktig!",
    not_quite: "Ikke helt!",
    correct_message: "Bra jobbet! Svaret var",
    incorrect_message: "Du svarte",
    encouragement: "Prøv igjen med neste spørsmål!",
    you_won_this_card: "Du vant dette kortet!",

    // Collection stats
    cards_collected: "Kort Samlet",
    questions_answered: "Spørsmål Besvart",
    correct_answers: "Riktige Svar",
    accuracy: "Nøyaktighet",
    your_collection: "Din Samling",

    // Empty collection
    no_cards_yet: "Ingen kort ennå!",
    no_cards_description: "Svar riktig på spørsmål for å begynne å bygge samlingen din.",

    // Backup & clear
    export_backup: "Eksporter Backup",
    import_backup: "Importer Backup",
    clear_this_set: "Tøm Dette Settet",
    clear_collection_title: "Tøm Samling?",
    clear_collection_message:
        "Er du sikker på at du vil tømme hele samlingen din? Denne handlingen kan ikke angres.",
    cancel: "Avbryt",
    clear_collection: "Tøm Samling",

    // Toasts
    collection_exported: "Samling eksportert!",
    collection_imported: "Samling importert!",
    collection_cleared: "Samling tømt!",
    export_failed: "Kunne ikke eksportere samling",
    import_failed: "Kunne ikke importere samling",
    clear_failed: "Kunne ikke tømme samling",

    // Card details
    hit: "treff",
    hits: "treff",
    language: "Språk",

    // Formatter templates
    damage_question_template:
        "Din Pokémon gjør {damage} skade hver runde. Hvor mange runder tar det å beseire denne Pokémonen?",
    math_question_template: "Hva er {num1} {operator} {num2}?",
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Accessor Tests ====================

    #[test]
    fn test_get_translations_english() {
        let t = get_translations(Language::English);
        assert_eq!(t.correct, "Correct!");
        assert_eq!(t.play_quiz, "Play Quiz");
    }

    #[test]
    fn test_get_translations_norwegian() {
        let t = get_translations(Language::Norwegian);
        assert_eq!(t.cancel, "Avbryt");
        assert_eq!(t.correct, "Riktig!");
    }

    #[test]
    fn test_get_translations_returns_static_data() {
        let t1 = get_translations(Language::English);
        let t2 = get_translations(Language::English);
        assert!(std::ptr::eq(t1, t2));
    }

    // ==================== Schema Tests ====================

    #[test]
    fn test_field_names_match_across_languages() {
        let en: Vec<_> = ENGLISH_STRINGS.fields().iter().map(|(n, _)| *n).collect();
        let no: Vec<_> = NORWEGIAN_STRINGS.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(en, no);
    }

    #[test]
    fn test_no_empty_fields() {
        for lang in Language::ALL {
            for (name, value) in get_translations(lang).fields() {
                assert!(!value.is_empty(), "{}: field '{}' is empty", lang, name);
            }
        }
    }

    #[test]
    fn test_templates_carry_placeholders() {
        for lang in Language::ALL {
            let t = get_translations(lang);
            assert!(t.damage_question_template.contains("{damage}"));
            assert!(t.math_question_template.contains("{num1}"));
            assert!(t.math_question_template.contains("{operator}"));
            assert!(t.math_question_template.contains("{num2}"));
        }
    }

    // ==================== Formatter Tests ====================

    #[test]
    fn test_math_question_english_addition() {
        let t = get_translations(Language::English);
        assert_eq!(t.math_question(3, 4, MathOperator::Add), "What is 3 + 4?");
    }

    #[test]
    fn test_math_question_english_subtraction() {
        let t = get_translations(Language::English);
        assert_eq!(
            t.math_question(10, 7, MathOperator::Subtract),
            "What is 10 - 7?"
        );
    }

    #[test]
    fn test_math_question_norwegian() {
        let t = get_translations(Language::Norwegian);
        assert_eq!(t.math_question(2, 5, MathOperator::Add), "Hva er 2 + 5?");
    }

    #[test]
    fn test_math_question_negative_operands_verbatim() {
        let t = get_translations(Language::English);
        assert_eq!(
            t.math_question(-3, -4, MathOperator::Add),
            "What is -3 + -4?"
        );
    }

    #[test]
    fn test_damage_question_english() {
        let t = get_translations(Language::English);
        let question = t.damage_question(30);
        assert!(question.contains("30 damage"));
        assert!(!question.contains("{damage}"));
    }

    #[test]
    fn test_damage_question_norwegian() {
        let t = get_translations(Language::Norwegian);
        assert!(t.damage_question(7).contains("7 skade"));
    }

    #[test]
    fn test_damage_question_zero() {
        let t = get_translations(Language::English);
        assert!(t.damage_question(0).contains("0 damage"));
    }

    #[test]
    fn test_formatters_are_deterministic() {
        let t = get_translations(Language::Norwegian);
        assert_eq!(t.damage_question(12), t.damage_question(12));
        assert_eq!(
            t.math_question(8, 3, MathOperator::Subtract),
            t.math_question(8, 3, MathOperator::Subtract)
        );
    }

    // ==================== Operator Tests ====================

    #[test]
    fn test_operator_symbols() {
        assert_eq!(MathOperator::Add.symbol(), "+");
        assert_eq!(MathOperator::Subtract.symbol(), "-");
        assert_eq!(MathOperator::Add.to_string(), "+");
    }

    #[test]
    fn test_operator_serde() {
        assert_eq!(serde_json::to_string(&MathOperator::Add).unwrap(), "\"+\"");
        let op: MathOperator = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(op, MathOperator::Subtract);
        assert!(serde_json::from_str::<MathOperator>("\"*\"").is_err());
    }

    // ==================== Content Tests ====================

    #[test]
    fn test_brand_strings_shared_across_languages() {
        assert_eq!(ENGLISH_STRINGS.app_title, NORWEGIAN_STRINGS.app_title);
        assert_eq!(ENGLISH_STRINGS.app_tagline, NORWEGIAN_STRINGS.app_tagline);
    }

    #[test]
    fn test_norwegian_hit_units_collapse() {
        // Norwegian uses the same word for singular and plural
        assert_eq!(NORWEGIAN_STRINGS.hit, "treff");
        assert_eq!(NORWEGIAN_STRINGS.hits, "treff");
        assert_ne!(ENGLISH_STRINGS.hit, ENGLISH_STRINGS.hits);
    }
}
