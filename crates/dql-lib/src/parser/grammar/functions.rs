//! Aggregates, built-in functions and case expressions.

use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

/// Accepted argument counts for a built-in function. `max: None` is variadic.
#[derive(Debug, Clone, Copy)]
struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    const fn exactly(n: usize) -> Self {
        Self {
            min: n,
            max: Some(n),
        }
    }

    const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) if max == self.min => format!("{}", self.min),
            Some(max) => format!("{} to {}", self.min, max),
            None => format!("at least {}", self.min),
        }
    }
}

/// Node kind and arity of the parenthesized built-ins.
fn function_signature(keyword: SyntaxKind) -> Option<(SyntaxKind, Arity)> {
    use SyntaxKind::*;
    let signature = match keyword {
        KwLength | KwAbs | KwSqrt | KwSize => (FunctionsReturningNumerics, Arity::exactly(1)),
        KwLocate => (FunctionsReturningNumerics, Arity::between(2, 3)),
        KwMod | KwDateDiff | KwBitAnd | KwBitOr => {
            (FunctionsReturningNumerics, Arity::exactly(2))
        }
        KwConcat => (FunctionsReturningStrings, Arity::at_least(2)),
        KwSubstring => (FunctionsReturningStrings, Arity::between(2, 3)),
        KwLower | KwUpper => (FunctionsReturningStrings, Arity::exactly(1)),
        KwIdentity => (FunctionsReturningStrings, Arity::between(1, 2)),
        KwDateAdd | KwDateSub => (FunctionsReturningDatetime, Arity::exactly(3)),
        KwCoalesce => (CoalesceExpression, Arity::at_least(1)),
        KwNullif => (NullifExpression, Arity::exactly(2)),
        _ => return None,
    };
    Some(signature)
}

impl Parser<'_> {
    /// Parses a built-in spelled by the current `Ident`. Returns `false` if it is not a call.
    pub(crate) fn try_parse_function(&mut self, keyword: SyntaxKind) -> bool {
        match keyword {
            SyntaxKind::KwCurrentDate | SyntaxKind::KwCurrentTime | SyntaxKind::KwCurrentTimestamp => {
                self.start_node(SyntaxKind::FunctionsReturningDatetime);
                self.bump_remap(keyword);
                self.finish_node();
                true
            }
            _ if !self.next_is(SyntaxKind::ParenOpen) => false,
            SyntaxKind::KwAvg
            | SyntaxKind::KwMax
            | SyntaxKind::KwMin
            | SyntaxKind::KwSum
            | SyntaxKind::KwCount => {
                self.parse_aggregate_expression(keyword);
                true
            }
            SyntaxKind::KwTrim => {
                self.parse_trim(keyword);
                true
            }
            _ => match function_signature(keyword) {
                Some((kind, arity)) => {
                    self.parse_function_call(kind, keyword, arity);
                    true
                }
                None => false,
            },
        }
    }

    /// `COUNT([DISTINCT] expr)`, `COUNT(*)`
    fn parse_aggregate_expression(&mut self, keyword: SyntaxKind) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        self.start_node(SyntaxKind::AggregateExpression);
        self.bump_remap(keyword);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        self.eat_token(SyntaxKind::KwDistinct);
        if !self.eat_token(SyntaxKind::Star) {
            self.parse_arithmetic_expression();
        }

        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
        self.exit_recursion();
    }

    /// `NAME(arg, ...)` with an argument count check.
    fn parse_function_call(&mut self, kind: SyntaxKind, keyword: SyntaxKind, arity: Arity) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        self.start_node(kind);
        self.bump_remap(keyword);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        let mut count = 0;
        if !self.currently_is(SyntaxKind::ParenClose) {
            loop {
                self.parse_arithmetic_expression();
                count += 1;
                if !self.eat_token(SyntaxKind::Comma) {
                    break;
                }
            }
        }

        let close = self.current_span();
        let closed = self.close_delimiter(SyntaxKind::ParenClose);
        if closed && !arity.accepts(count) {
            let name = keyword.keyword_text().unwrap_or("function");
            self.diagnostics
                .report(
                    DiagnosticKind::WrongArgumentCount,
                    TextRange::new(open.start(), close.end()),
                )
                .message(format!(
                    "`{}` expects {}, found {}",
                    name,
                    arity.describe(),
                    count
                ))
                .emit();
        }

        self.finish_node();
        self.exit_recursion();
    }

    /// `TRIM([[LEADING | TRAILING | BOTH] ['c'] FROM] str)`
    fn parse_trim(&mut self, keyword: SyntaxKind) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        self.start_node(SyntaxKind::FunctionsReturningStrings);
        self.bump_remap(keyword);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        let mut has_specification = false;
        if let Some(mode @ (SyntaxKind::KwLeading | SyntaxKind::KwTrailing | SyntaxKind::KwBoth)) =
            self.current_contextual_keyword()
        {
            self.bump_remap(mode);
            has_specification = true;
        }
        if self.currently_is(SyntaxKind::StringLit) && self.next_is(SyntaxKind::KwFrom) {
            self.parse_char_literal();
            has_specification = true;
        }
        if has_specification {
            self.expect_keyword(SyntaxKind::KwFrom);
        } else {
            self.eat_token(SyntaxKind::KwFrom);
        }

        self.parse_arithmetic_expression();

        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
        self.exit_recursion();
    }

    /// `CASE WHEN cond THEN x ... ELSE y END` or `CASE operand WHEN x THEN y ... ELSE z END`
    pub(crate) fn parse_case_expression(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        let checkpoint = self.checkpoint();
        self.assert_current(SyntaxKind::KwCase);
        self.bump();

        if self.currently_is(SyntaxKind::KwWhen) {
            self.start_node_at(checkpoint, SyntaxKind::GeneralCaseExpression);
            while self.currently_is(SyntaxKind::KwWhen) {
                self.parse_when_clause(SyntaxKind::WhenClause);
            }
        } else {
            self.start_node_at(checkpoint, SyntaxKind::SimpleCaseExpression);
            self.parse_arithmetic_expression();
            if !self.currently_is(SyntaxKind::KwWhen) {
                self.error_msg(DiagnosticKind::ExpectedKeyword, "`WHEN`");
            }
            while self.currently_is(SyntaxKind::KwWhen) {
                self.parse_when_clause(SyntaxKind::SimpleWhenClause);
            }
        }

        if self.expect_keyword(SyntaxKind::KwElse) {
            self.parse_arithmetic_expression();
        }
        self.expect_keyword(SyntaxKind::KwEnd);

        self.finish_node();
        self.exit_recursion();
    }

    /// `WHEN cond THEN x` (general) or `WHEN x THEN y` (simple)
    fn parse_when_clause(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        if kind == SyntaxKind::WhenClause {
            self.parse_conditional_expression();
        } else {
            self.parse_arithmetic_expression();
        }
        if self.expect_keyword(SyntaxKind::KwThen) {
            self.parse_arithmetic_expression();
        }
        self.finish_node();
    }
}
