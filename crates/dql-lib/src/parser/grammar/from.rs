use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::JOIN_FIRST;

impl Parser<'_> {
    /// `FROM decl {, decl}`
    pub(crate) fn parse_from_clause(&mut self) {
        self.start_node(SyntaxKind::FromClause);
        self.assert_current(SyntaxKind::KwFrom);
        self.bump();

        self.parse_identification_variable_declaration();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_identification_variable_declaration();
        }

        self.finish_node();
    }

    /// `Entity [AS] alias [INDEX BY path] {join}`
    fn parse_identification_variable_declaration(&mut self) {
        if !self.at_schema_name(false) {
            self.error(DiagnosticKind::ExpectedEntityName);
            return;
        }

        self.start_node(SyntaxKind::IdentificationVariableDeclaration);
        self.parse_range_variable_declaration();
        if self.currently_is(SyntaxKind::KwIndex) {
            self.parse_index_by();
        }
        while self.currently_is_one_of(JOIN_FIRST) {
            self.parse_join();
        }
        self.finish_node();
    }

    fn parse_range_variable_declaration(&mut self) {
        self.start_node(SyntaxKind::RangeVariableDeclaration);
        self.parse_abstract_schema_name(false);
        self.eat_token(SyntaxKind::KwAs);
        self.parse_alias(SyntaxKind::AliasIdentificationVariable);
        self.finish_node();
    }

    /// `INDEX BY u.id`
    fn parse_index_by(&mut self) {
        self.start_node(SyntaxKind::IndexBy);
        self.assert_current(SyntaxKind::KwIndex);
        self.bump();
        if self.expect_keyword(SyntaxKind::KwBy) {
            self.parse_path_expression_or_error();
        }
        self.finish_node();
    }

    /// `[LEFT [OUTER] | INNER] JOIN (u.assoc [AS] a [INDEX BY] | Entity [AS] a) [WITH cond]`
    fn parse_join(&mut self) {
        self.start_node(SyntaxKind::Join);

        if self.eat_token(SyntaxKind::KwLeft) {
            self.eat_token(SyntaxKind::KwOuter);
        } else {
            self.eat_token(SyntaxKind::KwInner);
        }

        if self.expect_keyword(SyntaxKind::KwJoin) {
            if self.currently_is(SyntaxKind::Ident) && self.next_is(SyntaxKind::Dot) {
                self.parse_join_association_declaration();
            } else if self.at_schema_name(false) {
                self.parse_range_variable_declaration();
            } else {
                self.error(DiagnosticKind::ExpectedEntityName);
            }

            if self.eat_token(SyntaxKind::KwWith) {
                self.parse_conditional_expression();
            }
        }

        self.finish_node();
    }

    fn parse_join_association_declaration(&mut self) {
        self.start_node(SyntaxKind::JoinAssociationDeclaration);
        self.parse_path_expression();
        self.eat_token(SyntaxKind::KwAs);
        self.parse_alias(SyntaxKind::AliasIdentificationVariable);
        if self.currently_is(SyntaxKind::KwIndex) {
            self.parse_index_by();
        }
        self.finish_node();
    }

    /// Whether an entity name starts here. Reserved words such as `Order` only count when
    /// namespaced or followed by an alias, unless `any_word` is set.
    pub(crate) fn at_schema_name(&mut self, any_word: bool) -> bool {
        match self.current() {
            SyntaxKind::Ident | SyntaxKind::Backslash => true,
            SyntaxKind::KwAs => false,
            kind if kind.is_keyword() => {
                any_word
                    || match self.nth(1) {
                        SyntaxKind::Backslash | SyntaxKind::KwAs => true,
                        SyntaxKind::Ident => self.nth(2) != SyntaxKind::Dot,
                        _ => false,
                    }
            }
            _ => false,
        }
    }

    /// `User`, `App\Entity\User` or `\App\Entity\User`. Segments may spell keywords.
    pub(crate) fn parse_abstract_schema_name(&mut self, any_word: bool) {
        if !self.at_schema_name(any_word) {
            self.error(DiagnosticKind::ExpectedEntityName);
            return;
        }

        self.start_node(SyntaxKind::AbstractSchemaName);
        if self.eat_token(SyntaxKind::Backslash) && !self.at_word() {
            self.error(DiagnosticKind::ExpectedEntityName);
        }
        if self.at_word() {
            self.bump_remap(SyntaxKind::Ident);
        }
        while self.currently_is(SyntaxKind::Backslash) {
            self.bump();
            if !self.at_word() {
                self.error_msg(DiagnosticKind::ExpectedEntityName, "after `\\`");
                break;
            }
            self.bump_remap(SyntaxKind::Ident);
        }
        self.finish_node();
    }

    /// Alias identifier wrapped in `kind`. Reserved keywords are never aliases.
    pub(crate) fn parse_alias(&mut self, kind: SyntaxKind) {
        if !self.currently_is(SyntaxKind::Ident) {
            let found = match self.current() {
                _ if self.eof() => "reached end of input".to_string(),
                k if k.is_keyword() => format!("`{}` is a reserved keyword", self.current_text()),
                _ => format!("found `{}`", self.current_text()),
            };
            self.error_msg(DiagnosticKind::ExpectedAlias, found);
            return;
        }

        self.start_node(kind);
        self.bump();
        self.finish_node();
    }
}
