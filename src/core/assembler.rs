// src/core/assembler.rs
use crate::core::resolver::ResolvedWord;
use crate::core::types::{
    DropReason, DroppedSymbol, SignKind, SignUnit, Token, TokenKind, UnitOrigin, WordBreakdown,
    WordOrigin,
};

/// The linear sequence for a text input plus its per-word accounting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub sequence: Vec<SignUnit>,
    pub breakdown: Vec<WordBreakdown>,
    pub dropped: Vec<DroppedSymbol>,
}

fn punctuation_unit(c: &str) -> Option<SignUnit> {
    let (symbol, note) = match c {
        "?" => ("QUESTION", "Question mark - use questioning facial expression"),
        "!" => ("EXCLAMATION", "Exclamation mark - use emphatic expression"),
        "." => ("PERIOD", "Period - pause briefly"),
        "," => ("COMMA", "Comma - brief pause"),
        _ => return None,
    };
    Some(SignUnit {
        kind: SignKind::Punctuation,
        symbol: symbol.to_string(),
        image_ref: None,
        video_ref: None,
        note: Some(note.to_string()),
        origin: UnitOrigin::Structural,
    })
}

/// Lays out resolved words and punctuation in token order.
///
/// `slots` is indexed by token rank; word tokens take their resolution from
/// their slot. A word with no slot contributes no signs.
pub fn assemble(tokens: &[Token], mut slots: Vec<Option<ResolvedWord>>) -> Assembly {
    let mut out = Assembly::default();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Word => {
                let resolved = slots.get_mut(token.rank).and_then(Option::take);
                let start_index = out.sequence.len();
                out.sequence.push(SignUnit::word_start(&token.text));

                let (sign_count, origin, note) = match resolved {
                    Some(word) => {
                        let count = word.signs.len();
                        out.sequence.extend(word.signs);
                        out.dropped.extend(word.dropped);
                        (count, word.origin, word.note)
                    }
                    None => (
                        0,
                        WordOrigin::Spelling,
                        format!("Spelled letter by letter: {}", token.text),
                    ),
                };

                out.breakdown.push(WordBreakdown {
                    word: token.text.clone(),
                    sign_count,
                    origin,
                    note,
                    start_index,
                    end_index: out.sequence.len() - 1,
                });

                if tokens.get(i + 1).is_some_and(Token::is_word) {
                    out.sequence.push(SignUnit::space());
                }
            }
            TokenKind::Punctuation => match punctuation_unit(&token.text) {
                Some(unit) => out.sequence.push(unit),
                None => out.dropped.push(DroppedSymbol {
                    word: String::new(),
                    symbol: token.text.clone(),
                    reason: DropReason::UnsupportedPunctuation,
                }),
            },
        }
    }

    out
}
