use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `SELECT [DISTINCT] expr {, expr}`
    pub(crate) fn parse_select_clause(&mut self) {
        self.start_node(SyntaxKind::SelectClause);
        self.assert_current(SyntaxKind::KwSelect);
        self.bump();
        self.eat_token(SyntaxKind::KwDistinct);

        self.parse_select_expression();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_select_expression();
        }

        self.finish_node();
    }

    /// Selected value with optional `[AS] [HIDDEN] alias`.
    fn parse_select_expression(&mut self) {
        if self.at_expression_recovery() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "nothing selected");
            return;
        }

        self.start_node(SyntaxKind::SelectExpression);

        match self.current() {
            SyntaxKind::KwPartial => self.parse_partial_object_expression(),
            SyntaxKind::KwNew => self.parse_new_object_expression(),
            SyntaxKind::ParenOpen if self.next_is(SyntaxKind::KwSelect) => {
                self.parse_parenthesized_subselect();
            }
            _ => {
                let checkpoint = self.checkpoint();
                self.parse_arithmetic_expression();
                let negated = self.currently_is(SyntaxKind::KwNot);
                let predicate = if negated { self.nth(1) } else { self.current() };
                if predicate == SyntaxKind::KwInstance {
                    self.parse_instance_of(checkpoint);
                }
            }
        }

        if self.eat_token(SyntaxKind::KwAs) {
            self.eat_hidden();
            self.parse_alias(SyntaxKind::AliasResultVariable);
        } else if self.currently_is(SyntaxKind::Ident) {
            self.eat_hidden();
            self.parse_alias(SyntaxKind::AliasResultVariable);
        }

        self.finish_node();
    }

    /// `HIDDEN` only counts as a keyword when an alias follows it.
    fn eat_hidden(&mut self) {
        if self.at_keyword(SyntaxKind::KwHidden) && self.next_is(SyntaxKind::Ident) {
            self.bump_remap(SyntaxKind::KwHidden);
        }
    }

    /// `PARTIAL u.{id, name}`
    fn parse_partial_object_expression(&mut self) {
        self.start_node(SyntaxKind::PartialObjectExpression);
        self.assert_current(SyntaxKind::KwPartial);
        self.bump();

        if self.currently_is(SyntaxKind::Ident) {
            self.start_node(SyntaxKind::IdentificationVariable);
            self.bump();
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedAlias, "identification variable after `PARTIAL`");
        }

        if self.expect(SyntaxKind::Dot, "`.` before the field set") {
            if self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_partial_field_set();
            } else {
                self.error_msg(DiagnosticKind::ExpectedFieldName, "field set such as `{id, name}`");
            }
        }

        self.finish_node();
    }

    fn parse_partial_field_set(&mut self) {
        self.start_node(SyntaxKind::PartialFieldSet);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        self.parse_field_name();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_field_name();
        }

        self.close_delimiter(SyntaxKind::BraceClose);
        self.finish_node();
    }

    /// `NEW [NAMED] Dto(arg [AS alias], ...)`
    pub(crate) fn parse_new_object_expression(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        self.start_node(SyntaxKind::NewObjectExpression);
        self.assert_current(SyntaxKind::KwNew);
        self.bump();
        if self.at_keyword(SyntaxKind::KwNamed) && self.next_is_schema_name() {
            self.bump_remap(SyntaxKind::KwNamed);
        }
        self.parse_abstract_schema_name(true);

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            if !self.currently_is(SyntaxKind::ParenClose) {
                self.parse_new_object_arg();
                while self.eat_token(SyntaxKind::Comma) {
                    self.parse_new_object_arg();
                }
            }
            self.close_delimiter(SyntaxKind::ParenClose);
        } else {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `(` after the class name");
        }

        self.finish_node();
        self.exit_recursion();
    }

    fn next_is_schema_name(&mut self) -> bool {
        let next = self.nth(1);
        matches!(next, SyntaxKind::Ident | SyntaxKind::Backslash) || next.is_keyword()
    }

    fn parse_new_object_arg(&mut self) {
        if self.at_expression_recovery() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "constructor argument");
            return;
        }

        self.start_node(SyntaxKind::NewObjectArg);
        match self.current() {
            SyntaxKind::KwNew => self.parse_new_object_expression(),
            SyntaxKind::ParenOpen if self.next_is(SyntaxKind::KwSelect) => {
                self.parse_parenthesized_subselect();
            }
            _ => self.parse_arithmetic_expression(),
        }
        if self.eat_token(SyntaxKind::KwAs) {
            self.parse_alias(SyntaxKind::AliasResultVariable);
        }
        self.finish_node();
    }
}
