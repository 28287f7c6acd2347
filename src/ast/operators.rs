/// Operators recognized in targeting query expressions.
///
/// Node values remain plain string tokens; this enum is the canonical
/// vocabulary for collaborators that build or inspect trees, not a
/// structural constraint enforced by the node model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Logical
    /// Negation (`not`) - the one single-operand operator
    Not,
    /// Conjunction (`and`)
    And,
    /// Disjunction (`or`)
    Or,

    // Comparison
    /// Less than (`<`)
    LessThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    GreaterThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal (`=`)
    Equal,
    /// Not equal (`<>`)
    NotEqual,
}

impl Operator {
    /// The canonical token for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::LessThan => "<",
            Operator::LessEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterEqual => ">=",
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
        }
    }

    /// Looks up an operator from its token, case-insensitively.
    ///
    /// Tree builders conventionally use uppercase keywords (`"AND"`,
    /// `"NOT"`) as node values; both cases resolve here.
    ///
    /// # Examples
    ///
    /// ```
    /// use adsquery::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("AND"), Some(Operator::And));
    /// assert_eq!(Operator::from_symbol("<="), Some(Operator::LessEqual));
    /// assert_eq!(Operator::from_symbol("female"), None);
    /// ```
    pub fn from_symbol(token: &str) -> Option<Self> {
        let op = match token.to_ascii_lowercase().as_str() {
            "not" => Operator::Not,
            "and" => Operator::And,
            "or" => Operator::Or,
            "<" => Operator::LessThan,
            "<=" => Operator::LessEqual,
            ">" => Operator::GreaterThan,
            ">=" => Operator::GreaterEqual,
            "=" => Operator::Equal,
            "<>" => Operator::NotEqual,
            _ => return None,
        };
        Some(op)
    }

    /// True for `not`, `and`, and `or`.
    pub fn is_logical(&self) -> bool {
        matches!(self, Operator::Not | Operator::And | Operator::Or)
    }

    /// True for the six comparison operators.
    pub fn is_comparison(&self) -> bool {
        !self.is_logical()
    }

    /// How many operands this operator takes: 1 for `not`, 2 for the rest.
    ///
    /// Matches the node variant that carries the operator: `not` belongs on
    /// a `UnaryNode`, everything else on a `BinaryNode`.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Not => 1,
            _ => 2,
        }
    }
}
