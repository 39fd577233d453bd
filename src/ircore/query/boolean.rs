use std::collections::HashSet;
use crate::ircore::common::DocId;
use crate::ircore::error::{Error, Result};
use crate::ircore::index::CorpusIndex;
use crate::ircore::token::analyzer::Analyzer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanToken {
    // a stemmed operand
    Term(String),
    And,
    Or,
    Not,
    LeftParen,
    RightParen,
}

impl BooleanToken {
    fn from_word(word: &str, analyzer: &Analyzer) -> Self {
        match word {
            "and" => BooleanToken::And,
            "or" => BooleanToken::Or,
            "not" => BooleanToken::Not,
            "(" => BooleanToken::LeftParen,
            ")" => BooleanToken::RightParen,
            _ => BooleanToken::Term(analyzer.stem(word)),
        }
    }

    fn precedence(&self) -> Option<u8> {
        match self {
            BooleanToken::Not => Some(3),
            BooleanToken::And => Some(2),
            BooleanToken::Or => Some(1),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        match self {
            BooleanToken::Term(t) => t,
            BooleanToken::And => "and",
            BooleanToken::Or => "or",
            BooleanToken::Not => "not",
            BooleanToken::LeftParen => "(",
            BooleanToken::RightParen => ")",
        }
    }
}

/// A boolean expression over AND, OR, NOT and parentheses, held in postfix order.
///
/// Operators are case-insensitive, every other word is stemmed the way indexed
/// text is. NOT binds tighter than AND, which binds tighter than OR; equal
/// precedence groups left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanQuery {
    postfix: Vec<BooleanToken>,
}

impl BooleanQuery {
    pub fn parse(query: &str, analyzer: &Analyzer) -> Result<Self> {
        let tokens = Self::tokenize(query, analyzer);
        let postfix = Self::to_postfix(tokens)?;
        Ok(BooleanQuery { postfix })
    }

    pub fn tokenize(query: &str, analyzer: &Analyzer) -> Vec<BooleanToken> {
        let seg = analyzer.get_segmentator();
        let query_normalized = seg.normalize(query);
        seg.parse_query_tokens(&query_normalized)
            .into_iter()
            .map(|word| BooleanToken::from_word(word, analyzer))
            .collect()
    }

    // shunting-yard
    pub fn to_postfix(tokens: Vec<BooleanToken>) -> Result<Vec<BooleanToken>> {
        let mut output = vec![];
        let mut stack: Vec<BooleanToken> = vec![];
        for token in tokens {
            match token {
                BooleanToken::Term(_) => output.push(token),
                BooleanToken::LeftParen => stack.push(token),
                BooleanToken::RightParen => loop {
                    match stack.pop() {
                        Some(BooleanToken::LeftParen) => break,
                        Some(op) => output.push(op),
                        None => return Err(Error::MalformedQuery(
                            "')' without a matching '('".to_string())),
                    }
                },
                _ => {
                    let precedence = token.precedence();
                    while stack.last().and_then(|top| top.precedence()) >= precedence {
                        if let Some(top) = stack.pop() {
                            output.push(top);
                        }
                    }
                    stack.push(token);
                },
            }
        }
        while let Some(op) = stack.pop() {
            if op == BooleanToken::LeftParen {
                log::debug!("unclosed '(' dropped");
                continue;
            }
            output.push(op);
        }
        Ok(output)
    }

    pub fn get_postfix(&self) -> &[BooleanToken] {
        &self.postfix
    }

    /// Matching document ids, ascending. Unknown terms match nothing.
    pub fn evaluate(&self, index: &CorpusIndex) -> Result<Vec<DocId>> {
        let mut stack: Vec<HashSet<DocId>> = vec![];
        for token in &self.postfix {
            match token {
                BooleanToken::Term(term) => {
                    let docs = index.get_inverted_index().docs(term).cloned().unwrap_or_default();
                    stack.push(docs);
                },
                BooleanToken::Not => {
                    let operand = Self::pop_operand(&mut stack, token)?;
                    let complement = index.get_universe()
                        .filter(|doc| !operand.contains(doc))
                        .collect();
                    stack.push(complement);
                },
                BooleanToken::And | BooleanToken::Or => {
                    let right = Self::pop_operand(&mut stack, token)?;
                    let left = Self::pop_operand(&mut stack, token)?;
                    if *token == BooleanToken::And {
                        stack.push(&left & &right);
                    }else{
                        stack.push(&left | &right);
                    }
                },
                BooleanToken::LeftParen | BooleanToken::RightParen => {
                    return Err(Error::MalformedQuery(
                        format!("unexpected '{}' in postfix expression", token.name())));
                },
            }
        }
        if stack.len() > 1 {
            log::debug!("{} operands left without an operator, keeping the first", stack.len());
        }
        let mut docs: Vec<DocId> = stack.into_iter().next().unwrap_or_default().into_iter().collect();
        docs.sort_unstable();
        Ok(docs)
    }

    fn pop_operand(stack: &mut Vec<HashSet<DocId>>, op: &BooleanToken) -> Result<HashSet<DocId>> {
        stack.pop().ok_or_else(|| Error::MalformedQuery(
            format!("operator '{}' is missing an operand", op.name())))
    }
}
