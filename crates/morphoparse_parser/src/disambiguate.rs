//! Morpheme splitting and homograph disambiguation.
//!
//! The original implementation defines `morpheme_splitter` (keeps
//! delimiters as alternating elements) and `morpheme_only_splitter` (drops
//! them), but a copy-paste bug makes the latter cache into the same
//! instance attribute as the former, so after first use the two become
//! aliased. This port keeps them as two independent functions with no
//! shared cache, so each always does what its name says regardless of call
//! order.

use crate::snapshot::MorphologySnapshot;
use morphoparse_base::Delimiters;
use std::collections::HashSet;

/// Splits `word` on any of `delimiters.morpheme_delimiters`, keeping each
/// delimiter as its own element between the morphemes it separated — so
/// morphemes sit at even indices and the delimiters that joined them sit at
/// odd indices, e.g. `"chien-s"` with delimiter `'-'` becomes
/// `["chien", "-", "s"]`.
pub fn split_with_delimiters(word: &str, delimiters: &Delimiters) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        if delimiters.is_morpheme_delimiter(c) {
            out.push(std::mem::take(&mut current));
            out.push(c.to_string());
        } else {
            current.push(c);
        }
    }
    out.push(current);
    out
}

/// The morphemes of `word` only, in order, with delimiters dropped —
/// equivalent to `split_with_delimiters(word, delimiters)[::2]`.
pub fn split_morphemes_only(word: &str, delimiters: &Delimiters) -> Vec<String> {
    split_with_delimiters(word, delimiters).into_iter().step_by(2).collect()
}

/// One slot of a candidate parse once expanded against the dictionary: a
/// literal delimiter, unchanged, or one of a morpheme's attested
/// `(gloss, category)` homograph readings.
#[derive(Debug, Clone)]
enum Piece {
    Delimiter(String),
    Morpheme { form: String, gloss: String, category: String },
}

impl Piece {
    fn category_piece(&self) -> &str {
        match self {
            Piece::Delimiter(d) => d,
            Piece::Morpheme { category, .. } => category,
        }
    }

    fn rich_token(&self, rare_delimiter: char) -> String {
        match self {
            Piece::Delimiter(d) => d.clone(),
            Piece::Morpheme { form, gloss, category } => {
                format!("{form}{rare_delimiter}{gloss}{rare_delimiter}{category}")
            }
        }
    }
}

/// The Cartesian product of `slots`, built by hand (no `itertools`
/// dependency) since the domain only ever needs it here.
fn cartesian_product(slots: &[Vec<Piece>]) -> Vec<Vec<Piece>> {
    let mut result: Vec<Vec<Piece>> = vec![Vec::new()];
    for slot in slots {
        let mut next = Vec::with_capacity(result.len() * slot.len().max(1));
        for prefix in &result {
            for item in slot {
                let mut combo = prefix.clone();
                combo.push(item.clone());
                next.push(combo);
            }
        }
        result = next;
    }
    result
}

/// Expands bare-form candidate parses (e.g. `"chien-s"`) into every
/// dictionary-licensed rich-morpheme reading (e.g. `"chien⦀dog⦀N-s⦀PL⦀PHI"`),
/// keeping only combinations whose joined category sequence (each
/// morpheme's category interleaved with the delimiters that joined it,
/// e.g. `"N-PHI"`) matches one of the morphology's observed rules.
///
/// A candidate with a morpheme absent from the dictionary is dropped
/// instead of aborting the whole batch — deliberately more forgiving than
/// the original, which catches any exception raised anywhere in this
/// function (including a missing-key lookup) and discards every candidate
/// in the batch.
pub fn disambiguate(candidates: &[String], delimiters: &Delimiters, morphology: &MorphologySnapshot) -> Vec<String> {
    let rules: HashSet<&str> = morphology.rules.iter().map(|r| r.category_sequence.as_str()).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    'candidates: for candidate in candidates {
        let morphemes = split_with_delimiters(candidate, delimiters);
        let mut slots: Vec<Vec<Piece>> = Vec::with_capacity(morphemes.len());
        for (index, morpheme) in morphemes.iter().enumerate() {
            if index % 2 == 0 {
                let homographs = morphology.dictionary.analyses(morpheme);
                if homographs.is_empty() {
                    continue 'candidates;
                }
                slots.push(
                    homographs
                        .iter()
                        .map(|(gloss, category)| Piece::Morpheme {
                            form: morpheme.clone(),
                            gloss: gloss.clone(),
                            category: category.clone(),
                        })
                        .collect(),
                );
            } else {
                slots.push(vec![Piece::Delimiter(morpheme.clone())]);
            }
        }

        for combo in cartesian_product(&slots) {
            let category_sequence: String = combo.iter().map(Piece::category_piece).collect();
            if !rules.contains(category_sequence.as_str()) {
                continue;
            }
            let rich: String = combo.iter().map(|p| p.rich_token(morphology.rare_delimiter)).collect();
            if seen.insert(rich.clone()) {
                out.push(rich);
            }
        }
    }
    out
}
