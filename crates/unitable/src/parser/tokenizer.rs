//! Term tokenizer implementation using nom
//!
//! Supported syntax:
//! - Variables: `X`, `Foo_1`, `_Tail` (the lone `_` is a Void term)
//! - Atoms: `mary`, `'Moby Dick'`
//! - Numbers: `42`, `-7`, `3.14`, `1e10`
//! - Strings: `"text"`
//! - Compound terms: `f(t1, ..., tn)` with n >= 1
//!
//! Whitespace outside quotes is dropped from the literal text, so `f(a, b)`
//! and `f(a,b)` denote the same term.

use crate::error::{Result, UnitableError};
use crate::term::{TermKind, Token};
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0, one_of, satisfy},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};

/// Parsed term; arguments are indices into the node arena
#[derive(Debug)]
struct Node {
    text: String,
    functor: String,
    kind: TermKind,
    args: Vec<usize>,
}

impl Node {
    fn leaf(text: &str, kind: TermKind) -> Self {
        Node {
            text: text.to_string(),
            functor: text.to_string(),
            kind,
            args: Vec::new(),
        }
    }
}

/// A compound whose closing parenthesis has not been read yet
struct OpenCompound<'a> {
    name: &'a str,
    args: Vec<usize>,
}

/// Tokenize a pair of terms, left term first
pub fn tokenize(x: &str, y: &str) -> Result<Vec<Token>> {
    let mut tokens = tokenize_term(x)?;
    tokens.extend(tokenize_term(y)?);
    Ok(tokens)
}

/// Tokenize a single term; the root token comes first
///
/// Nesting is tracked on an explicit stack, so depth is bounded by memory
/// rather than by the call stack.
pub fn tokenize_term(text: &str) -> Result<Vec<Token>> {
    let (nodes, root) = parse_nodes(text)?;
    Ok(flatten(nodes, root))
}

fn parse_error(text: &str, rest: &str, expected: &str) -> UnitableError {
    let at = rest.trim_start();
    let at = if at.is_empty() { "end of input" } else { at };
    UnitableError::ParseError(format!(
        "cannot read term `{}`: expected {} at `{}`",
        text, expected, at
    ))
}

/// Parse `text` into a node arena and return it with the root index
fn parse_nodes(text: &str) -> Result<(Vec<Node>, usize)> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut open: Vec<OpenCompound> = Vec::new();
    let mut input = text;

    loop {
        // A term starts here
        let (rest, _) = multispace0::<_, nom::error::Error<&str>>(input)
            .map_err(|_| parse_error(text, input, "a term"))?;
        let mut done = if let Ok((rest, node)) = parse_leaf(rest) {
            input = rest;
            nodes.push(node);
            nodes.len() - 1
        } else {
            let (rest, name) = parse_name(rest).map_err(|_| parse_error(text, rest, "a term"))?;
            if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>('(')(rest) {
                input = rest;
                open.push(OpenCompound {
                    name,
                    args: Vec::new(),
                });
                continue;
            }
            input = rest;
            nodes.push(Node::leaf(name, TermKind::Atom));
            nodes.len() - 1
        };

        // Attach the finished term, closing compounds as far as possible
        loop {
            let Some(frame) = open.last_mut() else {
                let rest = input.trim();
                if !rest.is_empty() {
                    return Err(UnitableError::ParseError(format!(
                        "unexpected input `{}` after term `{}`",
                        rest, nodes[done].text
                    )));
                }
                return Ok((nodes, done));
            };
            frame.args.push(done);

            if let Ok((rest, _)) = parse_separator(input, ',') {
                input = rest;
                break;
            }
            let (rest, _) =
                parse_separator(input, ')').map_err(|_| parse_error(text, input, "`,` or `)`"))?;
            input = rest;

            let Some(frame) = open.pop() else {
                break;
            };
            let inner: Vec<&str> = frame.args.iter().map(|&a| nodes[a].text.as_str()).collect();
            let node = Node {
                text: format!("{}({})", frame.name, inner.join(",")),
                functor: frame.name.to_string(),
                kind: TermKind::Functor,
                args: frame.args,
            };
            nodes.push(node);
            done = nodes.len() - 1;
        }
    }
}

/// Emit tokens in pre-order, one per occurrence
fn flatten(mut nodes: Vec<Node>, root: usize) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut work = vec![root];

    while let Some(idx) = work.pop() {
        let components = nodes[idx]
            .args
            .iter()
            .map(|&a| nodes[a].text.clone())
            .collect();
        let node = &mut nodes[idx];
        work.extend(node.args.iter().rev());
        tokens.push(Token {
            term: std::mem::take(&mut node.text),
            functor: std::mem::take(&mut node.functor),
            kind: node.kind,
            components,
        });
    }
    tokens
}

/// Parse a number, string or variable
fn parse_leaf(input: &str) -> IResult<&str, Node> {
    alt((parse_number, parse_string, parse_variable))(input)
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    alt((parse_quoted_atom, parse_lower_word))(input)
}

fn parse_separator(input: &str, sep: char) -> IResult<&str, char> {
    preceded(multispace0, char(sep))(input)
}

fn parse_variable(input: &str) -> IResult<&str, Node> {
    let (input, name) = recognize(pair(
        satisfy(|c| c.is_uppercase() || c == '_'),
        take_while(is_ident_char),
    ))(input)?;

    let kind = if name == "_" {
        TermKind::Void
    } else {
        TermKind::Variable
    };
    Ok((input, Node::leaf(name, kind)))
}

fn parse_number(input: &str) -> IResult<&str, Node> {
    let (input, text) = recognize(tuple((
        opt(char('-')),
        digit1,
        opt(pair(char('.'), digit1)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)?;

    let kind = if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
        TermKind::Float
    } else {
        TermKind::Int
    };
    Ok((input, Node::leaf(text, kind)))
}

fn parse_string(input: &str) -> IResult<&str, Node> {
    let (input, text) = parse_quoted(input, '"')?;
    Ok((input, Node::leaf(text, TermKind::String)))
}

fn parse_quoted_atom(input: &str) -> IResult<&str, &str> {
    parse_quoted(input, '\'')
}

/// Parse a quoted literal, keeping the quotes
///
/// A doubled quote or a backslash escape does not end the literal.
fn parse_quoted(input: &str, quote: char) -> IResult<&str, &str> {
    let mut chars = input.char_indices().peekable();
    match chars.next() {
        Some((_, c)) if c == quote => {}
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Char,
            )))
        }
    }

    while let Some((pos, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            if matches!(chars.peek(), Some(&(_, next)) if next == quote) {
                chars.next();
                continue;
            }
            let end = pos + c.len_utf8();
            return Ok((&input[end..], &input[..end]));
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Parse a lower word (starts with lowercase)
fn parse_lower_word(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(|c| c.is_lowercase()), take_while(is_ident_char)))(input)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
