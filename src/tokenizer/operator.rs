//! Fixed operator descriptor table.

/// Grouping direction for equal-precedence operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// Groups left to right.
    Left,
    /// Groups right to left.
    Right,
}

/// The recognized operator symbols in table order.
pub const OPERATOR_SYMBOLS: &str = "!^*/%+-=";

/// Binding strength and grouping direction per symbol.
///
/// Shared read-only by every operator token resolved from it.
const OPERATOR_TABLE: [(char, u8, Associativity); 8] = [
    ('!', 5, Associativity::Right),
    ('^', 4, Associativity::Right),
    ('*', 3, Associativity::Left),
    ('/', 3, Associativity::Left),
    ('%', 3, Associativity::Left),
    ('+', 2, Associativity::Left),
    ('-', 2, Associativity::Left),
    ('=', 1, Associativity::Right),
];

/// A resolved mathematical operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    symbol: char,
    precedence: u8,
    associativity: Associativity,
}

impl Operator {
    /// Resolves a symbol against the operator table.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        OPERATOR_TABLE
            .iter()
            .find(|(candidate, _, _)| *candidate == symbol)
            .map(|&(symbol, precedence, associativity)| Self {
                symbol,
                precedence,
                associativity,
            })
    }

    /// Returns the original symbol character.
    pub fn symbol(self) -> char {
        self.symbol
    }

    /// Returns the binding strength.
    pub fn precedence(self) -> u8 {
        self.precedence
    }

    /// Returns `true` when the operator groups left to right.
    pub fn is_left_associative(self) -> bool {
        self.associativity == Associativity::Left
    }

    /// Returns `true` when the operator groups right to left.
    pub fn is_right_associative(self) -> bool {
        self.associativity == Associativity::Right
    }
}
