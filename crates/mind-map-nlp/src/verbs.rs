//! Verb paradigms for finding the finite verb of a clause.
//!
//! The table maps every known verb form to the grammatical slots it can
//! fill. Only base forms and irregular pasts are listed in
//! `lexicon/verbs.txt`; third person and regular past forms are derived.

use rustc_hash::FxHashMap;

/// The built-in English verb list.
pub const ENGLISH_VERBS: &str = include_str!("../lexicon/verbs.txt");

const NOUN_SECTION: &str = "[verb-noun]";
const VERB_SECTION: &str = "[verb]";

/// Grammatical number of a clause subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    Singular,
    Plural,
    /// Mass nouns and relative pronouns take either verb form.
    Either,
}

/// Which verb slots one word form can fill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerbForms {
    /// Plain present, e.g. "reduce".
    pub base: bool,
    /// Third person singular present, e.g. "reduces".
    pub third: bool,
    /// Simple past, e.g. "reduced" or "sat".
    pub past: bool,
    /// The word is at least as common as a noun.
    pub noun_like: bool,
}

impl VerbForms {
    /// Whether this form can follow a subject of the given number.
    pub fn agrees_with(self, number: Number) -> bool {
        self.past
            || (self.third && number != Number::Plural)
            || (self.base && number != Number::Singular)
    }

    fn merge(&mut self, other: VerbForms) {
        self.base |= other.base;
        self.third |= other.third;
        self.past |= other.past;
        self.noun_like |= other.noun_like;
    }
}

/// Lookup table from verb form to [`VerbForms`].
#[derive(Debug, Clone, Default)]
pub struct VerbTable {
    forms: FxHashMap<String, VerbForms>,
}

impl VerbTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English table.
    pub fn english() -> Self {
        Self::parse(ENGLISH_VERBS)
    }

    /// Parse `base [past]` lines, grouped under `[verb]` and `[verb-noun]`.
    ///
    /// Blank lines and `#` comments are skipped. Lines before any section
    /// header count as `[verb]`.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::new();
        let mut noun_like = false;

        for line in source.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line {
                VERB_SECTION => noun_like = false,
                NOUN_SECTION => noun_like = true,
                _ => {
                    let mut words = line.split_whitespace();
                    if let Some(base) = words.next() {
                        table.insert(base, words.next(), noun_like);
                    }
                }
            }
        }
        table
    }

    /// Add a verb by its base form and, if irregular, its simple past.
    pub fn insert(&mut self, base: &str, past: Option<&str>, noun_like: bool) {
        let base = base.to_lowercase();
        let past = past.map_or_else(|| regular_past(&base), str::to_lowercase);
        let forms = VerbForms {
            noun_like,
            ..VerbForms::default()
        };

        self.add(
            third_person(&base),
            VerbForms {
                third: true,
                ..forms
            },
        );
        self.add(past, VerbForms { past: true, ..forms });
        self.add(base, VerbForms { base: true, ..forms });
    }

    fn add(&mut self, word: String, forms: VerbForms) {
        self.forms.entry(word).or_default().merge(forms);
    }

    /// Forms of `word`, case-insensitively.
    pub fn get(&self, word: &str) -> Option<VerbForms> {
        self.forms
            .get(word)
            .or_else(|| self.forms.get(&word.to_lowercase()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// The stem of a word ending in consonant + `y`.
fn consonant_y_stem(word: &str) -> Option<&str> {
    let stem = word.strip_suffix('y')?;
    stem.chars()
        .last()
        .filter(|c| !"aeiou".contains(*c))
        .map(|_| stem)
}

fn third_person(base: &str) -> String {
    if ["s", "sh", "ch", "x", "z", "o"]
        .iter()
        .any(|suffix| base.ends_with(suffix))
    {
        format!("{base}es")
    } else if let Some(stem) = consonant_y_stem(base) {
        format!("{stem}ies")
    } else {
        format!("{base}s")
    }
}

fn regular_past(base: &str) -> String {
    if base.ends_with('e') {
        format!("{base}d")
    } else if let Some(stem) = consonant_y_stem(base) {
        format!("{stem}ied")
    } else {
        format!("{base}ed")
    }
}
