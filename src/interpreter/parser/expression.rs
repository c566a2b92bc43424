use crate::{
    ast::{BinaryOperator, Expr, Literal, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::Parser, precedence::Precedence},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for kinds that have no infix role; the expression loop
/// stops in front of those.
#[must_use]
pub const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Modulo => Some(BinaryOperator::Mod),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Gt => Some(BinaryOperator::Greater),
        TokenKind::Lte => Some(BinaryOperator::LessEqual),
        TokenKind::Gte => Some(BinaryOperator::GreaterEqual),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::NotEq => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

impl Parser<'_> {
    /// Parses one expression at the given precedence level.
    ///
    /// The current token must begin the expression. The loop keeps folding
    /// infix operators into the left side while the next operator binds
    /// tighter than `precedence`; a semicolon always ends the expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_token_is(TokenKind::Semicolon)
              && precedence < Precedence::of(self.peek_token.kind)
        {
            left = match self.peek_token.kind {
                TokenKind::LParen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                },
                TokenKind::LBracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                },
                kind => {
                    let Some(op) = binary_operator(kind) else {
                        return Some(left);
                    };
                    self.next_token();
                    self.parse_binary_expression(op, left)?
                },
            };
        }

        Some(left)
    }

    /// Dispatches on the current token to the prefix rule that can begin an
    /// expression with it.
    ///
    /// A token kind with no prefix rule records a
    /// `no prefix parse function for ...` error and yields `None`.
    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur_token.kind {
            TokenKind::Ident => Some(Expr::Variable(self.cur_token.literal.clone())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => {
                Some(Expr::Literal(Literal::String(self.cur_token.literal.clone())))
            },
            TokenKind::True => Some(Expr::Literal(Literal::Boolean(true))),
            TokenKind::False => Some(Expr::Literal(Literal::Boolean(false))),
            TokenKind::Bang => self.parse_unary_expression(UnaryOperator::Not),
            TokenKind::Minus => self.parse_unary_expression(UnaryOperator::Negate),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => {
                let elements = self.parse_expression_list(TokenKind::RBracket)?;
                Some(Expr::ArrayLiteral { elements })
            },
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixRule { kind });
                None
            },
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Literal(Literal::Integer(value))),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidIntegerLiteral { literal:
                                                                  self.cur_token.literal.clone(), });
                None
            },
        }
    }

    fn parse_unary_expression(&mut self, op: UnaryOperator) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::UnaryOp { op,
                             expr: Box::new(expr) })
    }

    fn parse_binary_expression(&mut self, op: BinaryOperator, left: Expr) -> Option<Expr> {
        let precedence = Precedence::of(self.cur_token.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::BinaryOp { left: Box::new(left),
                              op,
                              right: Box::new(right) })
    }

    /// Parses `(<expression>)`. Grouping carries no AST node of its own; the
    /// inner expression is returned directly.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let then_branch = self.parse_block();

        let else_branch = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::IfExpr { condition: Box::new(condition),
                            then_branch,
                            else_branch })
    }

    /// Parses `fn(<params>) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses the comma-separated identifier list of a function literal, with
    /// the opening parenthesis current. Every parameter must be a plain
    /// identifier.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(Vec::new());
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let mut parameters = vec![self.cur_token.literal.clone()];

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            parameters.push(self.cur_token.literal.clone());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::FunctionCall { function: Box::new(function),
                                  arguments })
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expr::Index { left:  Box::new(left),
                           index: Box::new(index), })
    }

    /// Parses a comma-separated expression list until the closing token.
    ///
    /// Shared by array literals and call argument lists. An immediately
    /// encountered closing token produces an empty list.
    fn parse_expression_list(&mut self, closing: TokenKind) -> Option<Vec<Expr>> {
        if self.peek_token_is(closing) {
            self.next_token();
            return Some(Vec::new());
        }

        self.next_token();
        let mut list = vec![self.parse_expression(Precedence::Lowest)?];

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }
        Some(list)
    }

    /// Parses `{<expr>: <expr>, ...}` into a hash literal, with the opening
    /// brace current. An empty `{}` is accepted.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_token_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }
        Some(Expr::HashLiteral { pairs })
    }
}
