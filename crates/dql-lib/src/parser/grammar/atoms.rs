use rowan::{TextRange, TextSize};

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `'text'`, `42`, `1.5e3`, `TRUE`, `FALSE`
    pub(crate) fn parse_literal(&mut self) {
        self.start_node(SyntaxKind::Literal);
        self.bump();
        self.finish_node();
    }

    /// String missing its closing quote. Kept as a literal so the tree stays lossless.
    pub(crate) fn parse_unterminated_string(&mut self) {
        let span = self.current_span();
        let text = self.current_text();
        self.start_node(SyntaxKind::Literal);
        self.error_with_fix(
            DiagnosticKind::UnterminatedString,
            span,
            "missing closing `'`",
            "close the string",
            format!("{}'", text),
        );
        self.bump();
        self.finish_node();
    }

    /// `'c'`: a string literal holding exactly one character, backslash forms excluded.
    pub(crate) fn parse_char_literal(&mut self) {
        if !self.currently_is(SyntaxKind::StringLit) {
            self.error_msg(DiagnosticKind::ExpectedExpression, "character literal such as `'!'`");
            return;
        }

        let span = self.current_span();
        let text = self.current_text();
        let inner = &text[1..text.len() - 1];
        if inner.chars().count() != 1 {
            self.diagnostics
                .report(DiagnosticKind::InvalidEscapeChar, span)
                .message(format!("found `{}`", text))
                .emit();
        }

        self.start_node(SyntaxKind::CharLiteral);
        self.bump();
        self.finish_node();
    }

    /// `?1`
    pub(crate) fn parse_positional_parameter(&mut self) {
        self.start_node(SyntaxKind::PositionalParameter);
        self.assert_current(SyntaxKind::Question);
        let question = self.current_span();
        self.bump();
        if self.currently_is(SyntaxKind::IntegerLit) && self.is_adjacent(question.end()) {
            self.bump();
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "parameter position such as `?1`");
        }
        self.finish_node();
    }

    /// `:name`. Any word is a valid parameter name, keywords included.
    pub(crate) fn parse_named_parameter(&mut self) {
        self.start_node(SyntaxKind::NamedParameter);
        self.assert_current(SyntaxKind::Colon);
        let colon = self.current_span();
        self.bump();
        if self.at_word() && self.is_adjacent(colon.end()) {
            self.bump_remap(SyntaxKind::Ident);
        } else {
            self.error_msg(DiagnosticKind::ExpectedExpression, "parameter name such as `:id`");
        }
        self.finish_node();
    }

    fn is_adjacent(&mut self, offset: TextSize) -> bool {
        self.current_span().start() == offset
    }

    pub(crate) fn at_word(&mut self) -> bool {
        let kind = self.current();
        kind == SyntaxKind::Ident || kind.is_keyword()
    }

    pub(crate) fn parse_identification_variable(&mut self) {
        self.start_node(SyntaxKind::IdentificationVariable);
        self.assert_current(SyntaxKind::Ident);
        self.bump();
        self.finish_node();
    }

    /// `u.field {.field}`. Caller guarantees `Ident .` at the current position.
    pub(crate) fn parse_path_expression(&mut self) {
        self.start_node(SyntaxKind::PathExpression);
        self.parse_identification_variable();
        while self.currently_is(SyntaxKind::Dot) {
            self.bump();
            if !self.parse_field_name() {
                break;
            }
        }
        self.finish_node();
    }

    pub(crate) fn parse_path_expression_or_error(&mut self) {
        if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::Dot) {
            self.parse_path_expression();
            return;
        }
        let found = if self.eof() {
            "reached end of input".to_string()
        } else {
            format!("found `{}`", self.current_text())
        };
        self.error_msg(
            DiagnosticKind::ExpectedExpression,
            format!("path expression such as `u.id`, {}", found),
        );
    }

    /// Field names may spell keywords: `u.order`, `u.from`.
    pub(crate) fn parse_field_name(&mut self) -> bool {
        if !self.at_word() {
            let range = self.field_name_error_range();
            self.diagnostics
                .report(DiagnosticKind::ExpectedFieldName, range)
                .emit();
            return false;
        }
        self.start_node(SyntaxKind::FieldIdentificationVariable);
        self.bump_remap(SyntaxKind::Ident);
        self.finish_node();
        true
    }

    fn field_name_error_range(&mut self) -> TextRange {
        match self.last_non_trivia_end() {
            Some(end) if self.eof() => TextRange::empty(end),
            _ => self.current_span(),
        }
    }
}
