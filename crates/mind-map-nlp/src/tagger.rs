//! Lexicon and suffix driven part-of-speech tagging.
//!
//! Tagging runs in three passes. The first pass assigns each word its
//! lexicon tag or, for unknown words, a guess from its shape and suffix. The
//! second pass revisits the guesses using the already-final tag of the
//! previous word and the first-pass tag of the next one. The last pass looks
//! at whole clauses: a clause without a finite verb gets one, picked from the
//! guessed nouns that directly follow a subject and agree with it.

use std::ops::Range;

use crate::lexicon::Lexicon;
use crate::types::{PosTag, Token};
use crate::verbs::{Number, VerbTable};

const MODALS: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must", "do", "does",
    "did",
];

const NOUN_SUFFIXES: &[&str] = &[
    "ics", "ness", "ment", "ments", "tion", "tions", "sion", "sions", "ity", "ities", "ism",
    "isms", "ist", "ists", "ance", "ances", "ence", "ences", "ship", "ships", "hood", "dom",
];

const ADJ_SUFFIXES: &[&str] = &[
    "al", "ic", "ous", "ive", "ful", "able", "ible", "less", "ish", "ent", "ant",
];

const RELATIVES: &[&str] = &["that", "which", "who", "whom", "whose"];

const SINGULAR_PRONOUNS: &[&str] = &[
    "he", "she", "it", "this", "one", "someone", "somebody", "something", "everyone",
    "everybody", "everything", "anyone", "anything", "nobody", "nothing", "each",
];

const PLURAL_PRONOUNS: &[&str] = &["i", "you", "we", "they", "these", "those"];

const IRREGULAR_PLURALS: &[&str] = &["people", "children", "men", "women", "mice", "feet", "teeth"];

const MASS_NOUNS: &[&str] = &["data", "media", "staff", "police"];

/// How a tag was obtained for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Lexicon,
    Shape,
    Suffix,
    Default,
}

/// Rule-based tagger over a [`Lexicon`] and a [`VerbTable`].
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: Lexicon,
    verbs: VerbTable,
}

impl RuleTagger {
    /// Tagger over `lexicon` and the built-in English verb table.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            verbs: VerbTable::english(),
        }
    }

    pub fn with_verbs(mut self, verbs: VerbTable) -> Self {
        self.verbs = verbs;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn verbs(&self) -> &VerbTable {
        &self.verbs
    }

    /// Assign a tag to every non-punctuation token in place.
    pub fn tag(&self, tokens: &mut [Token]) {
        let mut origins = Vec::with_capacity(tokens.len());

        for i in 0..tokens.len() {
            if tokens[i].pos == PosTag::Punctuation {
                origins.push(Origin::Lexicon);
                continue;
            }
            let sentence_initial = i == 0 || tokens[i - 1].sentence_idx != tokens[i].sentence_idx;
            let (pos, origin) = self.initial_tag(&tokens[i].text, sentence_initial);
            tokens[i].pos = pos;
            origins.push(origin);
        }

        for i in 0..tokens.len() {
            if matches!(origins[i], Origin::Lexicon | Origin::Shape) {
                continue;
            }
            let same_sentence = |j: usize| tokens[j].sentence_idx == tokens[i].sentence_idx;
            let prev = (i > 0 && same_sentence(i - 1)).then(|| &tokens[i - 1]);
            let next = (i + 1 < tokens.len() && same_sentence(i + 1)).then(|| tokens[i + 1].pos);
            let revised = revise(&tokens[i], origins[i], prev, next);
            tokens[i].pos = revised;
        }

        for clause in clauses(tokens) {
            if let Some(i) = self.finite_verb(tokens, &origins, clause) {
                tokens[i].pos = PosTag::Verb;
            }
        }
    }

    /// Index of the word to retag as the verb of a clause that has none.
    ///
    /// Candidates are guessed nouns right after a nominal subject (adverbs
    /// may sit in between) whose form agrees with it. Words that are almost
    /// always verbs win over verbs that double as common nouns, which win
    /// over unknown words. Noun-like verbs must be followed by something
    /// other than a preposition ("models for vision" stays a noun phrase).
    /// Unknown words must be followed by the start of an object.
    fn finite_verb(
        &self,
        tokens: &[Token],
        origins: &[Origin],
        clause: Range<usize>,
    ) -> Option<usize> {
        if clause.clone().any(|i| is_finite(tokens, clause.start, i)) {
            return None;
        }

        let mut best: Option<(u8, usize)> = None;
        for i in clause.clone() {
            let token = &tokens[i];
            let guessed = matches!(origins[i], Origin::Default | Origin::Suffix);
            if token.pos != PosTag::Noun || !guessed {
                continue;
            }
            let Some(number) = subject_number(tokens, clause.start, i) else {
                continue;
            };
            let next = (i + 1 < clause.end).then(|| tokens[i + 1].pos);

            let rank = match self.verbs.get(&token.text) {
                Some(forms) if !forms.agrees_with(number) => continue,
                Some(forms) if !forms.noun_like => 0,
                Some(_) if next.is_some_and(|p| p != PosTag::Preposition) => 1,
                Some(_) => continue,
                None if origins[i] == Origin::Default
                    && shape_agrees(&token.text, number)
                    && next.is_some_and(opens_object) =>
                {
                    2
                }
                None => continue,
            };
            match best {
                Some((kept, _)) if kept <= rank => {}
                _ => best = Some((rank, i)),
            }
        }
        best.map(|(_, i)| i)
    }

    fn initial_tag(&self, word: &str, sentence_initial: bool) -> (PosTag, Origin) {
        if let Some(tag) = self.lexicon.get(word) {
            return (tag, Origin::Lexicon);
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return (PosTag::Numeral, Origin::Shape);
        }
        if is_acronym(word) {
            return (PosTag::ProperNoun, Origin::Shape);
        }
        if !sentence_initial && word.chars().next().is_some_and(char::is_uppercase) {
            return (PosTag::ProperNoun, Origin::Shape);
        }
        match suffix_tag(&word.to_lowercase()) {
            Some(tag) => (tag, Origin::Suffix),
            None => (PosTag::Noun, Origin::Default),
        }
    }
}

fn is_acronym(word: &str) -> bool {
    let letters = word.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2
        && word
            .chars()
            .all(|c| c.is_uppercase() || c.is_ascii_digit() || c == 's')
        && word.chars().filter(|c| c.is_uppercase()).count() >= 2
}

fn suffix_tag(word: &str) -> Option<PosTag> {
    let long_enough = |suffix: &str| word.len() > suffix.len() + 2 && word.ends_with(suffix);

    if long_enough("ly") {
        return Some(PosTag::Adverb);
    }
    if long_enough("ing") || long_enough("ed") {
        return Some(PosTag::Verb);
    }
    if NOUN_SUFFIXES.iter().any(|s| long_enough(s)) {
        return Some(PosTag::Noun);
    }
    if ADJ_SUFFIXES.iter().any(|s| long_enough(s)) {
        return Some(PosTag::Adjective);
    }
    None
}

/// Token ranges of the clauses in `tokens`.
///
/// Clauses end at punctuation, conjunctions and sentence boundaries. A
/// relative pronoun opens a new clause and acts as its subject.
fn clauses(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        let is_break = matches!(
            token.pos,
            PosTag::Punctuation
                | PosTag::CoordinatingConjunction
                | PosTag::SubordinatingConjunction
        );
        let new_sentence = i > 0 && tokens[i - 1].sentence_idx != token.sentence_idx;
        let relative = RELATIVES.contains(&token.text.to_lowercase().as_str());

        if is_break || new_sentence || relative {
            if start < i {
                ranges.push(start..i);
            }
            start = if is_break { i + 1 } else { i };
        }
    }
    if start < tokens.len() {
        ranges.push(start..tokens.len());
    }
    ranges
}

/// Whether token `i` is a finite verb or auxiliary of its clause.
fn is_finite(tokens: &[Token], clause_start: usize, i: usize) -> bool {
    let token = &tokens[i];
    let after_to = i > clause_start && tokens[i - 1].text.eq_ignore_ascii_case("to");
    match token.pos {
        PosTag::Auxiliary => !after_to,
        PosTag::Verb => !after_to && !token.text.to_lowercase().ends_with("ing"),
        _ => false,
    }
}

/// Number of the subject right before token `i`, skipping adverbs.
fn subject_number(tokens: &[Token], clause_start: usize, i: usize) -> Option<Number> {
    let mut j = i;
    while j > clause_start {
        j -= 1;
        let token = &tokens[j];
        if token.pos == PosTag::Adverb {
            continue;
        }
        let word = token.text.to_lowercase();
        return match token.pos {
            PosTag::Pronoun if SINGULAR_PRONOUNS.contains(&word.as_str()) => Some(Number::Singular),
            PosTag::Pronoun if PLURAL_PRONOUNS.contains(&word.as_str()) => Some(Number::Plural),
            PosTag::Pronoun => Some(Number::Either),
            PosTag::Noun | PosTag::ProperNoun => Some(noun_number(&word)),
            _ => None,
        };
    }
    None
}

fn noun_number(word: &str) -> Number {
    if MASS_NOUNS.contains(&word) {
        Number::Either
    } else if IRREGULAR_PLURALS.contains(&word) || looks_plural(word) {
        Number::Plural
    } else {
        Number::Singular
    }
}

fn looks_plural(word: &str) -> bool {
    word.ends_with('s') && !["ss", "us", "is", "ics"].iter().any(|s| word.ends_with(s))
}

/// Agreement for a word not in the verb table, judged by its ending.
fn shape_agrees(word: &str, number: Number) -> bool {
    let third = looks_plural(&word.to_lowercase());
    match number {
        Number::Either => true,
        Number::Singular => third,
        Number::Plural => !third,
    }
}

/// Tags that can start the object of a verb.
fn opens_object(pos: PosTag) -> bool {
    matches!(
        pos,
        PosTag::Determiner | PosTag::Pronoun | PosTag::Numeral | PosTag::Adjective | PosTag::Adverb
    )
}

fn revise(token: &Token, origin: Origin, prev: Option<&Token>, next: Option<PosTag>) -> PosTag {
    let word = token.text.to_lowercase();
    let prev_pos = prev.map(|t| t.pos);
    let prev_word = prev.map(|t| t.text.to_lowercase());

    if origin == Origin::Default && token.pos == PosTag::Noun {
        let after_to = prev_word.as_deref() == Some("to") && prev_pos == Some(PosTag::Particle);
        let after_modal = prev_word.as_deref().is_some_and(|w| MODALS.contains(&w));
        if (after_to || after_modal) && !word.ends_with('s') {
            return PosTag::Verb;
        }
        let third_person = word.ends_with('s') && !word.ends_with("ss");
        if third_person && prev_pos == Some(PosTag::Pronoun) {
            return PosTag::Verb;
        }
    }

    if origin == Origin::Suffix && token.pos == PosTag::Verb {
        let after_nominal = matches!(
            prev_pos,
            Some(
                PosTag::Determiner
                    | PosTag::Adjective
                    | PosTag::Noun
                    | PosTag::ProperNoun
                    | PosTag::Numeral
            )
        );
        if word.ends_with("ing") && after_nominal {
            return PosTag::Noun;
        }
        if word.ends_with("ed") {
            let after_subject = matches!(
                prev_pos,
                Some(PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun)
            );
            let before_noun = next.is_some_and(PosTag::is_noun);
            if prev_pos == Some(PosTag::Determiner) || (before_noun && !after_subject) {
                return PosTag::Adjective;
            }
        }
    }

    token.pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        let tagger = RuleTagger::new(Lexicon::english().unwrap());
        let mut tokens = tokenize(text);
        tagger.tag(&mut tokens);
        tokens.into_iter().map(|t| (t.text, t.pos)).collect()
    }

    fn tag_of(tagged: &[(String, PosTag)], word: &str) -> PosTag {
        tagged
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| *t)
            .unwrap_or_else(|| panic!("{word} not tokenized"))
    }

    #[test]
    fn test_reference_sentence() {
        let tagged = tags("Artificial intelligence is a branch of computer science.");
        assert_eq!(tag_of(&tagged, "Artificial"), PosTag::Adjective);
        assert_eq!(tag_of(&tagged, "intelligence"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "is"), PosTag::Auxiliary);
        assert_eq!(tag_of(&tagged, "a"), PosTag::Determiner);
        assert_eq!(tag_of(&tagged, "branch"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "of"), PosTag::Preposition);
        assert_eq!(tag_of(&tagged, "."), PosTag::Punctuation);
    }

    #[test]
    fn test_verb_after_to_and_pronoun() {
        let tagged = tags("It tends to summarize intelligent machines.");
        assert_eq!(tag_of(&tagged, "tends"), PosTag::Verb);
        assert_eq!(tag_of(&tagged, "summarize"), PosTag::Verb);
        assert_eq!(tag_of(&tagged, "intelligent"), PosTag::Adjective);
        assert_eq!(tag_of(&tagged, "machines"), PosTag::Noun);
    }

    #[test]
    fn test_gerund_after_noun_is_noun() {
        let tagged = tags("We like language processing and data crunching.");
        assert_eq!(tag_of(&tagged, "processing"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "crunching"), PosTag::Noun);
    }

    #[test]
    fn test_participle_before_noun_is_adjective() {
        let tagged = tags("Supervised models need labelled examples.");
        assert_eq!(tag_of(&tagged, "Supervised"), PosTag::Adjective);
        assert_eq!(tag_of(&tagged, "labelled"), PosTag::Adjective);
    }

    #[test]
    fn test_participle_after_subject_stays_verb() {
        let tagged = tags("The robot lifted boxes.");
        assert_eq!(tag_of(&tagged, "lifted"), PosTag::Verb);
    }

    #[test]
    fn test_capitalised_mid_sentence_is_proper_noun() {
        let tagged = tags("We visited New Zealand and NASA.");
        assert_eq!(tag_of(&tagged, "Zealand"), PosTag::ProperNoun);
        assert_eq!(tag_of(&tagged, "NASA"), PosTag::ProperNoun);
    }

    #[test]
    fn test_clause_gets_a_finite_verb() {
        let tagged = tags("The cat sat on the mat.");
        assert_eq!(tag_of(&tagged, "sat"), PosTag::Verb);
        assert_eq!(tag_of(&tagged, "mat"), PosTag::Noun);

        let tagged = tags("Climate change affects global food production.");
        assert_eq!(tag_of(&tagged, "change"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "affects"), PosTag::Verb);
        assert_eq!(tag_of(&tagged, "food"), PosTag::Noun);
    }

    #[test]
    fn test_verb_agrees_with_subject() {
        let tagged = tags("Machine learning models predict customer behaviour.");
        assert_eq!(tag_of(&tagged, "models"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "predict"), PosTag::Verb);

        let tagged = tags("Renewable energy sources reduce carbon emissions significantly.");
        assert_eq!(tag_of(&tagged, "sources"), PosTag::Noun);
        assert_eq!(tag_of(&tagged, "reduce"), PosTag::Verb);
    }

    #[test]
    fn test_noun_like_verb_before_preposition_stays_noun() {
        let tagged = tags("Deep learning models for vision.");
        assert_eq!(tag_of(&tagged, "models"), PosTag::Noun);

        let tagged = tags("The company plans new factories.");
        assert_eq!(tag_of(&tagged, "plans"), PosTag::Verb);
    }

    #[test]
    fn test_one_finite_verb_per_clause() {
        let tagged = tags("Engineers want to build faster robots.");
        assert_eq!(tag_of(&tagged, "want"), PosTag::Verb);
        assert_eq!(tag_of(&tagged, "robots"), PosTag::Noun);

        // "aims" already makes the clause finite
        let tagged = tags("A system that aims to create intelligent machines.");
        assert_eq!(tag_of(&tagged, "machines"), PosTag::Noun);
    }

    #[test]
    fn test_clause_ranges() {
        let tagger = RuleTagger::new(Lexicon::english().unwrap());
        let mut tokens = tokenize("Robots sort parcels, and drones deliver them.");
        tagger.tag(&mut tokens);
        let words: Vec<Vec<&str>> = clauses(&tokens)
            .into_iter()
            .map(|r| tokens[r].iter().map(|t| t.text.as_str()).collect())
            .collect();
        assert_eq!(
            words,
            vec![
                vec!["Robots", "sort", "parcels"],
                vec!["drones", "deliver", "them"],
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tagged = tags("About 3.5 million robots.");
        assert_eq!(tag_of(&tagged, "3.5"), PosTag::Numeral);
        assert_eq!(tag_of(&tagged, "million"), PosTag::Numeral);
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(suffix_tag("robotics"), Some(PosTag::Noun));
        assert_eq!(suffix_tag("quickly"), Some(PosTag::Adverb));
        assert_eq!(suffix_tag("natural"), Some(PosTag::Adjective));
        assert_eq!(suffix_tag("intelligence"), Some(PosTag::Noun));
        assert_eq!(suffix_tag("intelligent"), Some(PosTag::Adjective));
        assert_eq!(suffix_tag("branch"), None);
        assert_eq!(suffix_tag("sing"), None);
    }
}
