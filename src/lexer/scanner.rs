use log::debug;

use crate::MK_TOKEN;

use super::{
    classifier::{is_digit, is_letter},
    tokens::{
        Category, Token, COMMENT_MARKER, DELIMITER_LOOKUP, OPERATOR_LOOKUP, STRING_QUOTE,
        UNTERMINATED_STRING,
    },
};

/// Which handler owns the character under the cursor. Variants are listed
/// in dispatch priority order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum CharClass {
    Comment,
    Whitespace,
    Quote,
    Letter,
    Digit,
    Delimiter,
    Other,
}

fn char_class(c: char) -> CharClass {
    match c {
        COMMENT_MARKER => CharClass::Comment,
        c if c.is_whitespace() => CharClass::Whitespace,
        STRING_QUOTE => CharClass::Quote,
        c if is_letter(c) => CharClass::Letter,
        c if is_digit(c) => CharClass::Digit,
        c if DELIMITER_LOOKUP.contains_key(&c) => CharClass::Delimiter,
        _ => CharClass::Other,
    }
}

enum Flow {
    Continue,
    EndOfLine,
}

pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    pos: usize,
    line_number: usize,
}

impl Scanner {
    pub fn new(line: &str, line_number: usize) -> Scanner {
        Scanner {
            source: line.chars().collect(),
            tokens: vec![],
            pos: 0,
            line_number,
        }
    }

    pub fn scan(mut self) -> Vec<Token> {
        debug!("scanning line {} ({} chars)", self.line_number, self.source.len());

        while !self.at_eol() {
            let flow = match char_class(self.at()) {
                CharClass::Comment => comment_handler(&mut self),
                CharClass::Whitespace => skip_handler(&mut self),
                CharClass::Quote => string_handler(&mut self),
                CharClass::Letter => symbol_handler(&mut self),
                CharClass::Digit => number_handler(&mut self),
                CharClass::Delimiter => delimiter_handler(&mut self),
                CharClass::Other => operator_handler(&mut self),
            };

            if let Flow::EndOfLine = flow {
                break;
            }
        }

        self.tokens
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, token: Token) {
        debug!("emit {}", token);
        self.tokens.push(token);
    }

    fn at(&self) -> char {
        self.source[self.pos]
    }

    fn at_eol(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn column(&self) -> usize {
        self.pos + 1
    }

    fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.source.len());
        self.source[start..end].iter().collect()
    }

    fn find_from(&self, start: usize, target: char) -> Option<usize> {
        self.source[start..]
            .iter()
            .position(|c| *c == target)
            .map(|offset| start + offset)
    }
}

fn comment_handler(scanner: &mut Scanner) -> Flow {
    let token = MK_TOKEN!(scanner.line_number, scanner.column(), COMMENT_MARKER.to_string());
    scanner.push(token);
    Flow::EndOfLine
}

fn skip_handler(scanner: &mut Scanner) -> Flow {
    scanner.advance_n(1);
    Flow::Continue
}

fn string_handler(scanner: &mut Scanner) -> Flow {
    let start = scanner.pos;

    match scanner.find_from(start + 1, STRING_QUOTE) {
        Some(close) => {
            let token = MK_TOKEN!(
                scanner.line_number,
                scanner.column(),
                scanner.slice(start, close + 1)
            );
            scanner.push(token);
            scanner.advance_n(close + 1 - start);
            Flow::Continue
        }
        None => {
            let token = MK_TOKEN!(
                scanner.line_number,
                scanner.column(),
                String::from(UNTERMINATED_STRING),
                Category::Error,
                None
            );
            scanner.push(token);
            Flow::EndOfLine
        }
    }
}

fn symbol_handler(scanner: &mut Scanner) -> Flow {
    let start = scanner.pos;
    let mut end = start;

    while end < scanner.source.len() {
        let c = scanner.source[end];
        if !(is_letter(c) || is_digit(c)) {
            break;
        }
        end += 1;
    }

    let token = MK_TOKEN!(scanner.line_number, scanner.column(), scanner.slice(start, end));
    scanner.push(token);
    scanner.advance_n(end - start);
    Flow::Continue
}

fn number_handler(scanner: &mut Scanner) -> Flow {
    let start = scanner.pos;
    let mut end = start;
    let mut seen_dot = false;

    while end < scanner.source.len() {
        let c = scanner.source[end];
        if is_digit(c) {
            end += 1;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }

    let token = MK_TOKEN!(scanner.line_number, scanner.column(), scanner.slice(start, end));
    scanner.push(token);
    scanner.advance_n(end - start);
    Flow::Continue
}

fn delimiter_handler(scanner: &mut Scanner) -> Flow {
    let token = MK_TOKEN!(scanner.line_number, scanner.column(), scanner.at().to_string());
    scanner.push(token);
    scanner.advance_n(1);
    Flow::Continue
}

fn operator_handler(scanner: &mut Scanner) -> Flow {
    let pair = scanner.slice(scanner.pos, scanner.pos + 2);

    if pair.chars().count() == 2 && OPERATOR_LOOKUP.contains_key(pair.as_str()) {
        let token = MK_TOKEN!(scanner.line_number, scanner.column(), pair);
        scanner.push(token);
        scanner.advance_n(2);
        return Flow::Continue;
    }

    let single = scanner.at().to_string();
    let token = if OPERATOR_LOOKUP.contains_key(single.as_str()) {
        MK_TOKEN!(scanner.line_number, scanner.column(), single)
    } else {
        MK_TOKEN!(scanner.line_number, scanner.column(), single, Category::Error, None)
    };
    scanner.push(token);
    scanner.advance_n(1);
    Flow::Continue
}

/// Scans a single line (without its terminator) into classified tokens.
pub fn scan_line(line: &str, line_number: usize) -> Vec<Token> {
    Scanner::new(line, line_number).scan()
}

/// Scans consecutive lines, numbering them from 1.
pub fn scan_lines<I, S>(lines: I) -> Vec<Token>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(index, line)| scan_line(line.as_ref(), index + 1))
        .collect()
}

pub fn scan_source(source: &str) -> Vec<Token> {
    scan_lines(source.lines())
}
