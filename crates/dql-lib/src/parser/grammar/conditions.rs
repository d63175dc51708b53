//! Conditional expressions: `OR`/`AND`/`NOT` layers and the simple predicates.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{COMPARISON_OPERATORS, OPERAND_FOLLOW};

impl Parser<'_> {
    /// `term {OR term}`
    pub(crate) fn parse_conditional_expression(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        let checkpoint = self.checkpoint();
        self.parse_conditional_term();
        while self.currently_is(SyntaxKind::KwOr) {
            self.start_node_at(checkpoint, SyntaxKind::ConditionalExpression);
            self.bump();
            self.parse_conditional_term();
            self.finish_node();
        }

        self.exit_recursion();
    }

    /// `factor {AND factor}`
    fn parse_conditional_term(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_conditional_factor();
        while self.currently_is(SyntaxKind::KwAnd) {
            self.start_node_at(checkpoint, SyntaxKind::ConditionalTerm);
            self.bump();
            self.parse_conditional_factor();
            self.finish_node();
        }
    }

    /// `[NOT] primary`. `NOT EXISTS` belongs to the exists expression.
    fn parse_conditional_factor(&mut self) {
        if self.currently_is(SyntaxKind::KwNot) && !self.next_is(SyntaxKind::KwExists) {
            self.start_node(SyntaxKind::ConditionalFactor);
            self.bump();
            self.parse_conditional_factor_operand();
            self.finish_node();
            return;
        }
        self.parse_conditional_primary();
    }

    fn parse_conditional_factor_operand(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }
        self.parse_conditional_factor();
        self.exit_recursion();
    }

    fn parse_conditional_primary(&mut self) {
        if self.at_expression_recovery() {
            self.error_expected_expression();
            return;
        }

        match self.current() {
            SyntaxKind::KwExists => self.parse_exists_expression(),
            SyntaxKind::KwNot if self.next_is(SyntaxKind::KwExists) => {
                self.parse_exists_expression();
            }
            SyntaxKind::ParenOpen if self.parenthesized_condition_ahead() => {
                self.start_node(SyntaxKind::ConditionalPrimary);
                self.push_delimiter(SyntaxKind::ParenOpen);
                self.bump();
                self.parse_conditional_expression();
                self.close_delimiter(SyntaxKind::ParenClose);
                self.finish_node();
            }
            _ => self.parse_simple_conditional_expression(),
        }
    }

    /// At `(`: a nested condition, unless it is a subquery or an operand of a predicate.
    fn parenthesized_condition_ahead(&mut self) -> bool {
        if self.next_is(SyntaxKind::KwSelect) {
            return false;
        }
        !OPERAND_FOLLOW.contains(self.kind_after_parens())
    }

    /// `[NOT] EXISTS ( subselect )`
    fn parse_exists_expression(&mut self) {
        self.start_node(SyntaxKind::ExistsExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.assert_current(SyntaxKind::KwExists);
        self.bump();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_parenthesized_subselect();
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(` before the subquery");
        }
        self.finish_node();
    }

    /// Operand followed by a predicate: comparison, `BETWEEN`, `LIKE`, `IN`, `IS`, `MEMBER OF`,
    /// `INSTANCE OF`.
    fn parse_simple_conditional_expression(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_arithmetic_expression();

        let negated = self.currently_is(SyntaxKind::KwNot);
        let predicate = if negated { self.nth(1) } else { self.current() };

        match predicate {
            kind if COMPARISON_OPERATORS.contains(kind) && !negated => {
                self.parse_comparison(checkpoint);
            }
            SyntaxKind::KwBetween => self.parse_between(checkpoint),
            SyntaxKind::KwLike => self.parse_like(checkpoint),
            SyntaxKind::KwIn => self.parse_in(checkpoint),
            SyntaxKind::KwIs if !negated => self.parse_is(checkpoint),
            SyntaxKind::KwMember => self.parse_member_of(checkpoint),
            SyntaxKind::KwInstance => self.parse_instance_of(checkpoint),
            _ => {
                let found = if self.eof() {
                    "reached end of input".to_string()
                } else {
                    format!("found `{}`", self.current_text())
                };
                self.error_msg(DiagnosticKind::ExpectedConditionOperator, found);
            }
        }
    }

    /// `lhs op (ALL | ANY | SOME) ( subselect )` or `lhs op rhs`
    fn parse_comparison(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ComparisonExpression);
        self.parse_comparison_operator();
        match self.current() {
            SyntaxKind::KwAll | SyntaxKind::KwAny | SyntaxKind::KwSome => {
                self.start_node(SyntaxKind::QuantifiedExpression);
                self.bump();
                if self.currently_is(SyntaxKind::ParenOpen) {
                    self.parse_parenthesized_subselect();
                } else {
                    self.error_msg(
                        DiagnosticKind::UnexpectedToken,
                        "expected `(` before the subquery",
                    );
                }
                self.finish_node();
            }
            _ => self.parse_arithmetic_expression(),
        }
        self.finish_node();
    }

    fn parse_comparison_operator(&mut self) {
        self.start_node(SyntaxKind::ComparisonOperator);
        if self.currently_is(SyntaxKind::BangEq) {
            let span = self.current_span();
            self.diagnostics
                .report(DiagnosticKind::DeprecatedNotEquals, span)
                .fix("use `<>`", "<>")
                .emit();
        }
        self.bump();
        self.finish_node();
    }

    /// `lhs [NOT] BETWEEN low AND high`
    fn parse_between(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::BetweenExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.bump();
        self.parse_arithmetic_expression();
        if self.expect_keyword(SyntaxKind::KwAnd) {
            self.parse_arithmetic_expression();
        }
        self.finish_node();
    }

    /// `lhs [NOT] LIKE pattern [ESCAPE 'c']`
    fn parse_like(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::LikeExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.bump();
        self.parse_arithmetic_expression();
        if self.eat_token(SyntaxKind::KwEscape) {
            self.parse_char_literal();
        }
        self.finish_node();
    }

    /// `lhs [NOT] IN ( subselect )` or `lhs [NOT] IN ( value {, value} )`
    fn parse_in(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::InExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.bump();

        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(` after `IN`");
        } else if self.next_is(SyntaxKind::KwSelect) {
            self.parse_parenthesized_subselect();
        } else {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_arithmetic_expression();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_arithmetic_expression();
            }
            self.close_delimiter(SyntaxKind::ParenClose);
        }

        self.finish_node();
    }

    /// `lhs IS [NOT] NULL` or `lhs IS [NOT] EMPTY`
    fn parse_is(&mut self, checkpoint: Checkpoint) {
        let lookahead = if self.nth(1) == SyntaxKind::KwNot { 2 } else { 1 };
        let kind = match self.nth(lookahead) {
            SyntaxKind::KwEmpty => SyntaxKind::EmptyCollectionComparisonExpression,
            _ => SyntaxKind::NullComparisonExpression,
        };

        self.start_node_at(checkpoint, kind);
        self.bump();
        self.eat_token(SyntaxKind::KwNot);
        if kind == SyntaxKind::EmptyCollectionComparisonExpression {
            self.bump();
        } else {
            self.expect_keyword(SyntaxKind::KwNull);
        }
        self.finish_node();
    }

    /// `lhs [NOT] MEMBER [OF] u.collection`
    fn parse_member_of(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::CollectionMemberExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.bump();
        self.eat_token(SyntaxKind::KwOf);
        self.parse_path_expression_or_error();
        self.finish_node();
    }

    /// `lhs [NOT] INSTANCE [OF] (Entity | :param | ( Entity, ... ))`
    pub(crate) fn parse_instance_of(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::InstanceOfExpression);
        self.eat_token(SyntaxKind::KwNot);
        self.bump();
        self.eat_token(SyntaxKind::KwOf);

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.parse_instance_of_parameter();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_instance_of_parameter();
            }
            self.close_delimiter(SyntaxKind::ParenClose);
        } else {
            self.parse_instance_of_parameter();
        }

        self.finish_node();
    }

    fn parse_instance_of_parameter(&mut self) {
        match self.current() {
            SyntaxKind::Question => self.parse_positional_parameter(),
            SyntaxKind::Colon => self.parse_named_parameter(),
            _ => self.parse_abstract_schema_name(true),
        }
    }
}
