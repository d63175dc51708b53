use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    ADDITIVE_OPERATORS, EXPR_RECOVERY, LITERALS, MULTIPLICATIVE_OPERATORS,
};

impl Parser<'_> {
    /// True when no expression can start here and the current token must be left to a caller.
    pub(crate) fn at_expression_recovery(&mut self) -> bool {
        self.should_stop() || self.currently_is_one_of(EXPR_RECOVERY)
    }

    /// `term {(+|-) term}`. Wraps in `SimpleArithmeticExpression` only when an operator follows.
    pub(crate) fn parse_arithmetic_expression(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_arithmetic_term();
        while self.currently_is_one_of(ADDITIVE_OPERATORS) {
            self.start_node_at(checkpoint, SyntaxKind::SimpleArithmeticExpression);
            self.bump();
            self.parse_arithmetic_term();
            self.finish_node();
        }

        self.exit_recursion();
    }

    /// `factor {(*|/) factor}`
    fn parse_arithmetic_term(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_arithmetic_factor();
        while self.currently_is_one_of(MULTIPLICATIVE_OPERATORS) {
            self.start_node_at(checkpoint, SyntaxKind::ArithmeticTerm);
            self.bump();
            self.parse_arithmetic_factor();
            self.finish_node();
        }
    }

    /// `[+|-] primary`
    fn parse_arithmetic_factor(&mut self) {
        if self.currently_is_one_of(ADDITIVE_OPERATORS) {
            self.start_node(SyntaxKind::ArithmeticFactor);
            self.bump();
            self.parse_arithmetic_primary();
            self.finish_node();
            return;
        }
        self.parse_arithmetic_primary();
    }

    pub(crate) fn parse_arithmetic_primary(&mut self) {
        match self.current() {
            SyntaxKind::ParenOpen => self.parse_parenthesized_operand(),
            SyntaxKind::Ident => self.parse_identifier_primary(),
            SyntaxKind::KwCase => self.parse_case_expression(),
            kind if LITERALS.contains(kind) => self.parse_literal(),
            SyntaxKind::UnterminatedString => self.parse_unterminated_string(),
            SyntaxKind::Question => self.parse_positional_parameter(),
            SyntaxKind::Colon => self.parse_named_parameter(),
            _ => self.error_expected_expression(),
        }
    }

    /// `( subselect )` or `( arithmetic )`
    fn parse_parenthesized_operand(&mut self) {
        self.start_node(SyntaxKind::ArithmeticPrimary);
        if self.next_is(SyntaxKind::KwSelect) {
            self.parse_parenthesized_subselect();
        } else {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_arithmetic_expression();
            self.close_delimiter(SyntaxKind::ParenClose);
        }
        self.finish_node();
    }

    /// Path, function call, or bare identification variable.
    fn parse_identifier_primary(&mut self) {
        if self.next_is(SyntaxKind::Dot) {
            self.parse_path_expression();
            return;
        }

        if let Some(keyword) = self.current_contextual_keyword()
            && self.try_parse_function(keyword)
        {
            return;
        }

        self.parse_identification_variable();
    }

    pub(crate) fn error_expected_expression(&mut self) {
        if self.at_expression_recovery() {
            let found = if self.eof() {
                "reached end of input".to_string()
            } else {
                format!("found `{}`", self.current_text())
            };
            self.error_msg(DiagnosticKind::ExpectedExpression, found);
            return;
        }
        let found = format!("found `{}`", self.current_text());
        self.error_and_bump_msg(DiagnosticKind::ExpectedExpression, found);
    }
}
