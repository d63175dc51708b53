use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CLAUSE_KEYWORDS, STATEMENT_FIRST, STATEMENT_RECOVERY};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::SourceFile);

        while !self.should_stop() {
            match self.current() {
                SyntaxKind::KwSelect => self.parse_select_statement(),
                SyntaxKind::KwUpdate => self.parse_update_statement(),
                SyntaxKind::KwDelete => self.parse_delete_statement(),
                _ => self.error_until_next_statement(),
            }
        }

        self.eat_trivia();
        self.finish_node();
    }

    pub(crate) fn error_until_next_statement(&mut self) {
        if self.should_stop() || self.currently_is_one_of(STATEMENT_FIRST) {
            return;
        }

        let message = match self.current() {
            kind if CLAUSE_KEYWORDS.contains(kind) => {
                format!("`{}` outside of a statement", self.current_text())
            }
            _ => format!("found `{}`", self.current_text()),
        };
        self.error_recover(DiagnosticKind::ExpectedStatement, &message, STATEMENT_RECOVERY);
    }

    /// `SELECT ... FROM ... [WHERE] [GROUP BY] [HAVING] [ORDER BY]`
    fn parse_select_statement(&mut self) {
        self.start_node(SyntaxKind::SelectStatement);
        self.parse_select_body();
        self.finish_node();
    }

    /// Parenthesized subquery: `( SELECT ... )`. The parentheses belong to the caller's node.
    pub(crate) fn parse_parenthesized_subselect(&mut self) {
        self.assert_current(SyntaxKind::ParenOpen);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        if self.currently_is(SyntaxKind::KwSelect) {
            self.parse_subselect();
        } else {
            self.error_msg(DiagnosticKind::ExpectedKeyword, "`SELECT`");
        }

        self.close_delimiter(SyntaxKind::ParenClose);
    }

    fn parse_subselect(&mut self) {
        if !self.enter_recursion() {
            self.recursion_overflow();
            return;
        }

        self.start_node(SyntaxKind::Subselect);
        self.parse_select_body();
        self.finish_node();

        self.exit_recursion();
    }

    fn parse_select_body(&mut self) {
        self.parse_select_clause();

        if self.currently_is(SyntaxKind::KwFrom) {
            self.parse_from_clause();
        } else {
            self.error(DiagnosticKind::ExpectedFromClause);
        }

        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_condition_clause(SyntaxKind::WhereClause);
        }
        if self.currently_is(SyntaxKind::KwGroup) {
            self.parse_group_by_clause();
        }
        if self.currently_is(SyntaxKind::KwHaving) {
            self.parse_condition_clause(SyntaxKind::HavingClause);
        }
        if self.currently_is(SyntaxKind::KwOrder) {
            self.parse_order_by_clause();
        }
    }

    /// `UPDATE Entity [AS] alias SET item {, item} [WHERE]`
    fn parse_update_statement(&mut self) {
        self.start_node(SyntaxKind::UpdateStatement);

        self.start_node(SyntaxKind::UpdateClause);
        self.assert_current(SyntaxKind::KwUpdate);
        self.bump();
        self.parse_abstract_schema_name(false);
        self.eat_token(SyntaxKind::KwAs);
        self.parse_alias(SyntaxKind::AliasIdentificationVariable);
        if self.expect_keyword(SyntaxKind::KwSet) {
            self.parse_update_item();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_update_item();
            }
        }
        self.finish_node();

        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_condition_clause(SyntaxKind::WhereClause);
        }

        self.finish_node();
    }

    /// `u.field = (arithmetic | NULL)`
    fn parse_update_item(&mut self) {
        if self.at_expression_recovery() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "update item such as `u.name = 'x'`");
            return;
        }

        self.start_node(SyntaxKind::UpdateItem);
        self.parse_path_expression_or_error();
        if self.expect(SyntaxKind::Equals, "`=`") && !self.eat_token(SyntaxKind::KwNull) {
            self.parse_arithmetic_expression();
        }
        self.finish_node();
    }

    /// `DELETE [FROM] Entity [AS] alias [WHERE]`
    fn parse_delete_statement(&mut self) {
        self.start_node(SyntaxKind::DeleteStatement);

        self.start_node(SyntaxKind::DeleteClause);
        self.assert_current(SyntaxKind::KwDelete);
        self.bump();
        self.eat_token(SyntaxKind::KwFrom);
        self.parse_abstract_schema_name(false);
        self.eat_token(SyntaxKind::KwAs);
        self.parse_alias(SyntaxKind::AliasIdentificationVariable);
        self.finish_node();

        if self.currently_is(SyntaxKind::KwWhere) {
            self.parse_condition_clause(SyntaxKind::WhereClause);
        }

        self.finish_node();
    }

    /// `WHERE cond` or `HAVING cond`
    fn parse_condition_clause(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.parse_conditional_expression();
        self.finish_node();
    }

    /// `GROUP BY item {, item}`
    fn parse_group_by_clause(&mut self) {
        self.start_node(SyntaxKind::GroupByClause);
        self.assert_current(SyntaxKind::KwGroup);
        self.bump();
        if self.expect_keyword(SyntaxKind::KwBy) {
            self.parse_group_by_item();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_group_by_item();
            }
        }
        self.finish_node();
    }

    fn parse_group_by_item(&mut self) {
        if self.at_expression_recovery() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "grouping item");
            return;
        }
        self.start_node(SyntaxKind::GroupByItem);
        self.parse_arithmetic_expression();
        self.finish_node();
    }

    /// `ORDER BY item [ASC | DESC] {, ...}`
    fn parse_order_by_clause(&mut self) {
        self.start_node(SyntaxKind::OrderByClause);
        self.assert_current(SyntaxKind::KwOrder);
        self.bump();
        if self.expect_keyword(SyntaxKind::KwBy) {
            self.parse_order_by_item();
            while self.eat_token(SyntaxKind::Comma) {
                self.parse_order_by_item();
            }
        }
        self.finish_node();
    }

    fn parse_order_by_item(&mut self) {
        if self.at_expression_recovery() {
            self.error_msg(DiagnosticKind::ExpectedExpression, "ordering item");
            return;
        }
        self.start_node(SyntaxKind::OrderByItem);
        self.parse_arithmetic_expression();
        if !self.eat_token(SyntaxKind::KwAsc) {
            self.eat_token(SyntaxKind::KwDesc);
        }
        self.finish_node();
    }

    /// Recursion limit hit: swallow the remaining input into one `Error` node.
    pub(crate) fn recursion_overflow(&mut self) {
        self.start_node(SyntaxKind::Error);
        while !self.eof() {
            self.bump();
        }
        self.finish_node();
    }
}
