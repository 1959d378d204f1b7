use std::mem;

use log::trace;

use crate::{
    ast::Expr,
    error::{ParseError, SyntaxError},
    interpreter::lexer::{Token, Tokenizer},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of nested factors (parentheses and unary signs) the parser
/// accepts before giving up with [`SyntaxError::TooDeep`].
pub const MAX_DEPTH: usize = 256;

/// A recursive-descent parser over a lazily tokenized source.
///
/// The parser holds exactly one lookahead token, `current`, drawn from the
/// tokenizer when the parser is created and replaced every time a token is
/// consumed. Each grammar rule is a method:
///
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := ("+" | "-") factor
///                 | NUMBER
///                 | "(" expression ")"
/// ```
///
/// There is no error recovery: the first lexical or syntax error aborts the
/// parse and no partial tree is returned.
///
/// # Example
/// ```
/// use exprcalc::{ast::{BinaryOperator, Expr}, interpreter::parser::Parser};
///
/// let expr = Parser::new("1 + 2").and_then(Parser::parse).unwrap();
/// assert_eq!(expr,
///            Expr::binary(Expr::literal(1.0), BinaryOperator::Add, Expr::literal(2.0)));
/// ```
pub struct Parser<'src> {
    tokens:   Tokenizer<'src>,
    /// The lookahead token.
    current:  Token,
    /// Byte offset of the lookahead token.
    position: usize,
    /// Number of factors currently being parsed.
    depth:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and draws the first lookahead token.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be read.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut tokens = Tokenizer::new(source);
        let (current, span) = tokens.next_spanned()?;

        Ok(Self { tokens,
                  current,
                  position: span.start,
                  depth: 0 })
    }

    /// Parses the whole source as a single expression.
    ///
    /// The expression must be followed by the end of input.
    ///
    /// # Errors
    /// - A lexical error met while reading tokens.
    /// - [`SyntaxError::UnexpectedToken`] when a token does not fit the
    ///   grammar.
    /// - [`SyntaxError::TrailingInput`] when tokens remain after a complete
    ///   expression.
    /// - [`SyntaxError::TooDeep`] when nesting exceeds [`MAX_DEPTH`].
    pub fn parse(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;

        if self.current != Token::EndOfInput {
            return Err(SyntaxError::TrailingInput { found:    self.current,
                                                    position: self.position, }.into());
        }

        trace!("parsed {expr}");
        Ok(expr)
    }

    /// Returns the lookahead token.
    pub(in crate::interpreter::parser) const fn current(&self) -> Token {
        self.current
    }

    /// Consumes the lookahead token, draws the next one and returns the
    /// consumed token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let (next, span) = self.tokens.next_spanned()?;
        self.position = span.start;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Consumes the lookahead token if it has the same kind as `expected`.
    ///
    /// Only the variant is compared, so any number matches
    /// `Token::Number(_)`.
    ///
    /// # Errors
    /// [`SyntaxError::UnexpectedToken`] naming `description` when the
    /// lookahead is of a different kind.
    pub(in crate::interpreter::parser) fn eat(&mut self,
                                              expected: Token,
                                              description: &'static str)
                                              -> ParseResult<Token> {
        if mem::discriminant(&self.current) == mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(self.unexpected(description))
        }
    }

    /// Builds the error for a lookahead the grammar cannot accept here.
    pub(in crate::interpreter::parser) fn unexpected(&self,
                                                     expected: &'static str)
                                                     -> ParseError {
        SyntaxError::UnexpectedToken { expected,
                                       found: self.current,
                                       position: self.position }.into()
    }

    /// Records entry into one more nested factor.
    ///
    /// # Errors
    /// [`SyntaxError::TooDeep`] once [`MAX_DEPTH`] factors are open.
    pub(in crate::interpreter::parser) fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::TooDeep { position: self.position }.into());
        }
        self.depth += 1;
        Ok(())
    }

    /// Records leaving a nested factor.
    pub(in crate::interpreter::parser) const fn ascend(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, UnaryOperator},
        error::LexError,
    };

    fn parse(source: &str) -> ParseResult<Expr> {
        Parser::new(source)?.parse()
    }

    fn num(value: f64) -> Expr {
        Expr::literal(value)
    }

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(parse("2 + 3 * 4").unwrap(),
                   Expr::binary(num(2.0),
                                BinaryOperator::Add,
                                Expr::binary(num(3.0), BinaryOperator::Mul, num(4.0))));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse("(2 + 3) * 4").unwrap(),
                   Expr::binary(Expr::binary(num(2.0), BinaryOperator::Add, num(3.0)),
                                BinaryOperator::Mul,
                                num(4.0)));
    }

    #[test]
    fn same_level_operators_lean_left() {
        assert_eq!(parse("10 - 5 - 2").unwrap().to_string(), "((10 - 5) - 2)");
        assert_eq!(parse("8 / 4 * 2 / 1").unwrap().to_string(), "(((8 / 4) * 2) / 1)");
        assert_eq!(parse("1 + 2 - 3 + 4").unwrap().to_string(), "(((1 + 2) - 3) + 4)");
    }

    #[test]
    fn signs_nest() {
        assert_eq!(parse("--3").unwrap(),
                   Expr::unary(UnaryOperator::Minus,
                               Expr::unary(UnaryOperator::Minus, num(3.0))));
        assert_eq!(parse("+-3").unwrap().to_string(), "(+(-3))");
        assert_eq!(parse("-3 + 4").unwrap().to_string(), "((-3) + 4)");
        assert_eq!(parse("2 * -(1)").unwrap().to_string(), "(2 * (-1))");
    }

    #[test]
    fn missing_operand() {
        match parse("2 +") {
            Err(ParseError::Syntax(SyntaxError::UnexpectedToken { found, position, .. })) => {
                assert_eq!(found, Token::EndOfInput);
                assert_eq!(position, 3);
            },
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unbalanced_parenthesis() {
        assert!(matches!(parse("(2 + 3"),
                         Err(ParseError::Syntax(SyntaxError::UnexpectedToken { expected: "')'",
                                                                               found: Token::EndOfInput,
                                                                               .. }))));
    }

    #[test]
    fn trailing_input() {
        assert!(matches!(parse("2 3"),
                         Err(ParseError::Syntax(SyntaxError::TrailingInput { found: Token::Number(_),
                                                                             position: 2 }))));
        assert!(matches!(parse("(1))"),
                         Err(ParseError::Syntax(SyntaxError::TrailingInput { found: Token::RParen,
                                                                             .. }))));
    }

    #[test]
    fn empty_input_is_a_syntax_error() {
        assert!(matches!(parse(""),
                         Err(ParseError::Syntax(SyntaxError::UnexpectedToken { found: Token::EndOfInput,
                                                                               .. }))));
        assert!(matches!(parse("()"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn lexical_errors_abort_the_parse() {
        assert!(matches!(parse("2 + @"),
                         Err(ParseError::Lex(LexError::UnexpectedCharacter { character: '@',
                                                                             .. }))));
        assert!(matches!(parse("#"), Err(ParseError::Lex(_))));
    }

    #[test]
    fn flat_chains_are_not_bounded_by_depth() {
        let sum = vec!["1"; 100_000].join("+");
        let tree = parse(&sum).unwrap();
        assert!(matches!(tree, Expr::Binary { op: BinaryOperator::Add, .. }));
        drop(tree);

        let product = vec!["2"; 100_000].join(" * ");
        assert!(parse(&product).is_ok());
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 10), ")".repeat(MAX_DEPTH + 10));
        assert!(matches!(parse(&deep), Err(ParseError::Syntax(SyntaxError::TooDeep { .. }))));

        let signs = format!("{}1", "-".repeat(MAX_DEPTH + 1));
        assert!(matches!(parse(&signs), Err(ParseError::Syntax(SyntaxError::TooDeep { .. }))));

        let fits = format!("{}1{}", "(".repeat(MAX_DEPTH - 1), ")".repeat(MAX_DEPTH - 1));
        assert!(parse(&fits).is_ok());
    }
}
