use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Supports prefix signs `+` and `-`. Signs are right-recursive, so `--3`
    /// parses as `-(-3)` and `+-3` as `+(-3)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | NUMBER
    ///             | "(" expression ")"
    /// ```
    ///
    /// Every factor counts towards the nesting limit while it is being parsed.
    pub(crate) fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.descend()?;
        let factor = self.parse_signed();
        self.ascend();
        factor
    }

    fn parse_signed(&mut self) -> ParseResult<Expr> {
        let op = match self.current() {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_primary(),
        };
        self.advance()?;
        let expr = self.parse_factor()?;
        Ok(Expr::unary(op, expr))
    }

    /// Parses a numeric literal or a parenthesized expression.
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Token::Number(value) => {
                self.advance()?;
                Ok(Expr::literal(value))
            },
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected("a number, '(' or a sign")),
        }
    }

    /// Parses `"(" expression ")"`, returning the inner expression.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.eat(Token::LParen, "'('")?;
        let expr = self.parse_expression()?;
        self.eat(Token::RParen, "')'")?;
        Ok(expr)
    }
}
