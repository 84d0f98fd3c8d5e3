use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("function");
        set.insert("return");
        set.insert("class");
        set.insert("for");
        set.insert("while");
        set.insert("true");
        set.insert("false");
        set
    };

    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, State> = {
        let mut map = HashMap::new();
        map.insert("&&", State::Q11);
        map.insert("||", State::Q14);
        map.insert("<", State::Q6);
        map.insert(">", State::Q6);
        map.insert("=", State::Q6);
        map.insert("==", State::Q7);
        map.insert("!=", State::Q7);
        map.insert("<=", State::Q7);
        map.insert(">=", State::Q7);
        map.insert("+", State::Q1);
        map.insert("-", State::Q1);
        map.insert("*", State::Q1);
        map.insert("/", State::Q1);
        map.insert("^", State::Q1);
        map.insert("%", State::Q1);
        map.insert("+=", State::Q10);
        map.insert("-=", State::Q10);
        map
    };

    pub static ref DELIMITER_LOOKUP: HashMap<char, State> = {
        let mut map = HashMap::new();
        map.insert('(', State::Q13);
        map.insert(')', State::Q13);
        map.insert('{', State::Q13);
        map.insert('}', State::Q13);
        map.insert(',', State::Q16);
        map.insert(';', State::Q18);
        map
    };
}

pub const COMMENT_MARKER: char = '$';
pub const STRING_QUOTE: char = '"';
pub const UNTERMINATED_STRING: &str = "<cadena no cerrada>";

/// Rendering used wherever a token has no accepting state.
pub const NO_STATE: &str = "---";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Category {
    ReservedWord,
    Operator,
    Delimiter,
    Number,
    String,
    Identifier,
    Comment,
    Error,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ReservedWord => "PALABRA_RESERVADA",
            Category::Operator => "OPERADOR",
            Category::Delimiter => "DELIMITADOR",
            Category::Number => "NUMERO",
            Category::String => "CADENA",
            Category::Identifier => "IDENTIFICADOR",
            Category::Comment => "COMENTARIO",
            Category::Error => "ERROR",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accepting states of the scanner automaton.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    Q0,  // reserved words, strings
    Q1,  // arithmetic operators
    Q2,  // integers
    Q3,  // decimals
    Q6,  // relational / assignment
    Q7,  // comparison
    Q9,  // identifiers
    Q10, // compound assignment
    Q11, // &&
    Q13, // brackets
    Q14, // ||
    Q15, // identifiers containing digits
    Q16, // ,
    Q17, // comment marker
    Q18, // ;
}

impl State {
    pub fn as_str(&self) -> &'static str {
        match self {
            State::Q0 => "q0",
            State::Q1 => "q1",
            State::Q2 => "q2",
            State::Q3 => "q3",
            State::Q6 => "q6",
            State::Q7 => "q7",
            State::Q9 => "q9",
            State::Q10 => "q10",
            State::Q11 => "q11",
            State::Q13 => "q13",
            State::Q14 => "q14",
            State::Q15 => "q15",
            State::Q16 => "q16",
            State::Q17 => "q17",
            State::Q18 => "q18",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn state_label(state: Option<State>) -> &'static str {
    match state {
        Some(state) => state.as_str(),
        None => NO_STATE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub line_number: usize,
    pub column: usize,
    pub lexeme: String,
    pub category: Category,
    pub state: Option<State>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {:?}, {}, {})",
            self.line_number,
            self.lexeme,
            self.category,
            state_label(self.state)
        )
    }
}

impl Token {
    pub fn is_error(&self) -> bool {
        self.category == Category::Error
    }
}
