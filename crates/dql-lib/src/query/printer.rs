use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::ast::{
    self, DeleteStatement, FromClause, SelectStatement, Statement, UpdateStatement, WhereClause,
};
use crate::parser::{SyntaxNode, SyntaxToken};

use super::Query;

/// Renders a query either as a raw CST dump or as a statement outline.
pub struct QueryPrinter<'q, 'src> {
    query: &'q Query<'src>,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'q, 'src> QueryPrinter<'q, 'src> {
    pub fn new(query: &'q Query<'src>) -> Self {
        Self {
            query,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_cst(self.query.syntax(), 0, w)
        } else {
            self.format_root(self.query.root(), w)
        }
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_root(&self, root: &ast::Root, w: &mut impl Write) -> std::fmt::Result {
        let span = self.span_str(root.as_cst().text_range());
        writeln!(w, "Root{}", span)?;

        for statement in root.statements() {
            match &statement {
                Statement::Select(s) => self.format_select(s, 1, w)?,
                Statement::Update(s) => self.format_update(s, 1, w)?,
                Statement::Delete(s) => self.format_delete(s, 1, w)?,
            }
        }
        Ok(())
    }

    fn format_select(
        &self,
        stmt: &SelectStatement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(stmt.as_cst().text_range());
        let select = stmt.select_clause();
        let distinct = select.as_ref().is_some_and(|c| c.is_distinct());

        if distinct {
            writeln!(w, "{}Select{} DISTINCT", prefix, span)?;
        } else {
            writeln!(w, "{}Select{}", prefix, span)?;
        }

        let inner = "  ".repeat(indent + 1);
        for expr in select.iter().flat_map(|c| c.expressions()) {
            let span = self.span_str(expr.as_cst().text_range());
            let value = expr.value().map(|v| compact_text(&v)).unwrap_or_default();
            match (expr.alias(), expr.is_hidden()) {
                (Some(alias), true) => writeln!(
                    w,
                    "{}Expr{} {} AS HIDDEN {}",
                    inner,
                    span,
                    value,
                    alias.text()
                )?,
                (Some(alias), false) => {
                    writeln!(w, "{}Expr{} {} AS {}", inner, span, value, alias.text())?
                }
                (None, _) => writeln!(w, "{}Expr{} {}", inner, span, value)?,
            }
        }

        if let Some(from) = stmt.from_clause() {
            self.format_from(&from, indent + 1, w)?;
        }
        if let Some(clause) = stmt.where_clause() {
            self.format_where(&clause, indent + 1, w)?;
        }
        if let Some(group_by) = stmt.group_by_clause() {
            for item in group_by.items() {
                let span = self.span_str(item.text_range());
                writeln!(w, "{}GroupBy{} {}", inner, span, compact_text(&item))?;
            }
        }
        if let Some(having) = stmt.having_clause() {
            let span = self.span_str(having.as_cst().text_range());
            let condition = having
                .condition()
                .map(|c| compact_text(&c))
                .unwrap_or_default();
            writeln!(w, "{}Having{} {}", inner, span, condition)?;
        }
        if let Some(order_by) = stmt.order_by_clause() {
            for item in order_by.items() {
                let span = self.span_str(item.as_cst().text_range());
                let expr = item
                    .expression()
                    .map(|e| compact_text(&e))
                    .unwrap_or_default();
                let direction = match item.direction() {
                    ast::Direction::Asc => "ASC",
                    ast::Direction::Desc => "DESC",
                };
                writeln!(w, "{}OrderBy{} {} {}", inner, span, expr, direction)?;
            }
        }
        Ok(())
    }

    fn format_from(&self, from: &FromClause, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let inner = "  ".repeat(indent + 1);

        for decl in from.declarations() {
            let span = self.span_str(decl.as_cst().text_range());
            let range = decl.range();
            let entity = range.as_ref().and_then(|r| r.entity()).map(|e| e.name());
            let alias = range.as_ref().and_then(|r| r.alias());
            writeln!(
                w,
                "{}From{} {} {}",
                prefix,
                span,
                entity.as_deref().unwrap_or("?"),
                token_or_missing(alias.as_ref())
            )?;

            if let Some(index_by) = decl.index_by() {
                let path = index_by.path().map(|p| compact_text(p.as_cst()));
                writeln!(w, "{}IndexBy {}", inner, path.as_deref().unwrap_or("?"))?;
            }

            for join in decl.joins() {
                let span = self.span_str(join.as_cst().text_range());
                let label = match join.kind() {
                    ast::JoinKind::Inner => "Join",
                    ast::JoinKind::Left => "LeftJoin",
                };
                let (target, alias) = if let Some(assoc) = join.association() {
                    (
                        assoc.path().map(|p| compact_text(p.as_cst())),
                        assoc.alias(),
                    )
                } else if let Some(range) = join.range() {
                    (range.entity().map(|e| e.name()), range.alias())
                } else {
                    (None, None)
                };
                write!(
                    w,
                    "{}{}{} {} {}",
                    inner,
                    label,
                    span,
                    target.as_deref().unwrap_or("?"),
                    token_or_missing(alias.as_ref())
                )?;
                match join.condition() {
                    Some(condition) => writeln!(w, " WITH {}", compact_text(&condition))?,
                    None => writeln!(w)?,
                }
            }
        }
        Ok(())
    }

    fn format_where(
        &self,
        clause: &WhereClause,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(clause.as_cst().text_range());
        let condition = clause
            .condition()
            .map(|c| compact_text(&c))
            .unwrap_or_default();
        writeln!(w, "{}Where{} {}", prefix, span, condition)
    }

    fn format_update(
        &self,
        stmt: &UpdateStatement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let inner = "  ".repeat(indent + 1);
        let span = self.span_str(stmt.as_cst().text_range());
        let clause = stmt.update_clause();
        let entity = clause.as_ref().and_then(|c| c.entity()).map(|e| e.name());
        let alias = clause.as_ref().and_then(|c| c.alias());

        writeln!(
            w,
            "{}Update{} {} {}",
            prefix,
            span,
            entity.as_deref().unwrap_or("?"),
            token_or_missing(alias.as_ref())
        )?;

        for item in clause.iter().flat_map(|c| c.items()) {
            let span = self.span_str(item.as_cst().text_range());
            let target = item.target().map(|t| compact_text(t.as_cst()));
            let value = if item.is_null() {
                Some("NULL".to_string())
            } else {
                item.value().map(|v| compact_text(&v))
            };
            writeln!(
                w,
                "{}Set{} {} = {}",
                inner,
                span,
                target.as_deref().unwrap_or("?"),
                value.as_deref().unwrap_or("?")
            )?;
        }

        if let Some(clause) = stmt.where_clause() {
            self.format_where(&clause, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_delete(
        &self,
        stmt: &DeleteStatement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(stmt.as_cst().text_range());
        let clause = stmt.delete_clause();
        let entity = clause.as_ref().and_then(|c| c.entity()).map(|e| e.name());
        let alias = clause.as_ref().and_then(|c| c.alias());

        writeln!(
            w,
            "{}Delete{} {} {}",
            prefix,
            span,
            entity.as_deref().unwrap_or("?"),
            token_or_missing(alias.as_ref())
        )?;

        if let Some(clause) = stmt.where_clause() {
            self.format_where(&clause, indent + 1, w)?;
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

fn token_or_missing(token: Option<&SyntaxToken>) -> &str {
    token.map_or("?", |t| t.text())
}

/// Source text of a node with trivia collapsed to single spaces.
fn compact_text(node: &SyntaxNode) -> String {
    let mut out = String::new();
    for token in node
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
    {
        if token.kind().is_trivia() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push_str(token.text());
        }
    }
    out.truncate(out.trim_end().len());
    out
}

impl Query<'_> {
    pub fn printer(&self) -> QueryPrinter<'_, '_> {
        QueryPrinter::new(self)
    }
}
