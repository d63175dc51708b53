//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, SourceFile);
ast_node!(SelectStatement, SelectStatement);
ast_node!(UpdateStatement, UpdateStatement);
ast_node!(DeleteStatement, DeleteStatement);
ast_node!(Subselect, Subselect);
ast_node!(SelectClause, SelectClause);
ast_node!(SelectExpression, SelectExpression);
ast_node!(FromClause, FromClause);
ast_node!(IdentificationVariableDeclaration, IdentificationVariableDeclaration);
ast_node!(RangeVariableDeclaration, RangeVariableDeclaration);
ast_node!(JoinAssociationDeclaration, JoinAssociationDeclaration);
ast_node!(IndexBy, IndexBy);
ast_node!(Join, Join);
ast_node!(WhereClause, WhereClause);
ast_node!(HavingClause, HavingClause);
ast_node!(GroupByClause, GroupByClause);
ast_node!(OrderByClause, OrderByClause);
ast_node!(OrderByItem, OrderByItem);
ast_node!(UpdateClause, UpdateClause);
ast_node!(UpdateItem, UpdateItem);
ast_node!(DeleteClause, DeleteClause);
ast_node!(AbstractSchemaName, AbstractSchemaName);
ast_node!(PathExpression, PathExpression);
ast_node!(NamedParameter, NamedParameter);
ast_node!(PositionalParameter, PositionalParameter);

/// Top-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Select(SelectStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SelectStatement => SelectStatement::cast(node).map(Statement::Select),
            SyntaxKind::UpdateStatement => UpdateStatement::cast(node).map(Statement::Update),
            SyntaxKind::DeleteStatement => DeleteStatement::cast(node).map(Statement::Delete),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::Select(s) => s.as_cst(),
            Statement::Update(s) => s.as_cst(),
            Statement::Delete(s) => s.as_cst(),
        }
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.as_cst().children().find_map(WhereClause::cast)
    }
}

/// How rows of a joined entity are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// `JOIN` or `INNER JOIN`
    Inner,
    /// `LEFT JOIN` or `LEFT OUTER JOIN`
    Left,
}

/// Ordering direction of an `ORDER BY` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Input parameter: `?1` or `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parameter {
    Positional(PositionalParameter),
    Named(NamedParameter),
}

impl Parameter {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::PositionalParameter => {
                PositionalParameter::cast(node).map(Parameter::Positional)
            }
            SyntaxKind::NamedParameter => NamedParameter::cast(node).map(Parameter::Named),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Parameter::Positional(p) => p.as_cst(),
            Parameter::Named(p) => p.as_cst(),
        }
    }
}

/// First token of `kind` among the direct children of `node`.
fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|it| it.kind() == kind)
}

/// Identifier token inside a single-identifier wrapper node (alias, variable, field).
fn ident_of(node: &SyntaxNode) -> Option<SyntaxToken> {
    token(node, SyntaxKind::Ident)
}

/// First non-error child node: the operand of a clause or item.
fn expression_child(node: &SyntaxNode) -> Option<SyntaxNode> {
    node.children().find(|child| child.kind() != SyntaxKind::Error)
}

impl Root {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl SelectStatement {
    pub fn select_clause(&self) -> Option<SelectClause> {
        self.0.children().find_map(SelectClause::cast)
    }

    pub fn from_clause(&self) -> Option<FromClause> {
        self.0.children().find_map(FromClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }

    pub fn group_by_clause(&self) -> Option<GroupByClause> {
        self.0.children().find_map(GroupByClause::cast)
    }

    pub fn having_clause(&self) -> Option<HavingClause> {
        self.0.children().find_map(HavingClause::cast)
    }

    pub fn order_by_clause(&self) -> Option<OrderByClause> {
        self.0.children().find_map(OrderByClause::cast)
    }
}

impl Subselect {
    pub fn select_clause(&self) -> Option<SelectClause> {
        self.0.children().find_map(SelectClause::cast)
    }

    pub fn from_clause(&self) -> Option<FromClause> {
        self.0.children().find_map(FromClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }
}

impl SelectClause {
    pub fn is_distinct(&self) -> bool {
        token(&self.0, SyntaxKind::KwDistinct).is_some()
    }

    pub fn expressions(&self) -> impl Iterator<Item = SelectExpression> + '_ {
        self.0.children().filter_map(SelectExpression::cast)
    }
}

impl SelectExpression {
    /// The selected value, without its alias.
    pub fn value(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .find(|child| child.kind() != SyntaxKind::AliasResultVariable)
    }

    pub fn alias(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|child| child.kind() == SyntaxKind::AliasResultVariable)
            .and_then(|alias| ident_of(&alias))
    }

    pub fn is_hidden(&self) -> bool {
        token(&self.0, SyntaxKind::KwHidden).is_some()
    }
}

impl FromClause {
    pub fn declarations(&self) -> impl Iterator<Item = IdentificationVariableDeclaration> + '_ {
        self.0
            .children()
            .filter_map(IdentificationVariableDeclaration::cast)
    }
}

impl IdentificationVariableDeclaration {
    pub fn range(&self) -> Option<RangeVariableDeclaration> {
        self.0.children().find_map(RangeVariableDeclaration::cast)
    }

    pub fn index_by(&self) -> Option<IndexBy> {
        self.0.children().find_map(IndexBy::cast)
    }

    pub fn joins(&self) -> impl Iterator<Item = Join> + '_ {
        self.0.children().filter_map(Join::cast)
    }
}

impl RangeVariableDeclaration {
    pub fn entity(&self) -> Option<AbstractSchemaName> {
        self.0.children().find_map(AbstractSchemaName::cast)
    }

    pub fn alias(&self) -> Option<SyntaxToken> {
        alias_identification_variable(&self.0)
    }
}

impl JoinAssociationDeclaration {
    pub fn path(&self) -> Option<PathExpression> {
        self.0.children().find_map(PathExpression::cast)
    }

    pub fn alias(&self) -> Option<SyntaxToken> {
        alias_identification_variable(&self.0)
    }

    pub fn index_by(&self) -> Option<IndexBy> {
        self.0.children().find_map(IndexBy::cast)
    }
}

fn alias_identification_variable(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children()
        .find(|child| child.kind() == SyntaxKind::AliasIdentificationVariable)
        .and_then(|alias| ident_of(&alias))
}

impl IndexBy {
    pub fn path(&self) -> Option<PathExpression> {
        self.0.children().find_map(PathExpression::cast)
    }
}

impl Join {
    pub fn kind(&self) -> JoinKind {
        if token(&self.0, SyntaxKind::KwLeft).is_some() {
            JoinKind::Left
        } else {
            JoinKind::Inner
        }
    }

    pub fn association(&self) -> Option<JoinAssociationDeclaration> {
        self.0.children().find_map(JoinAssociationDeclaration::cast)
    }

    pub fn range(&self) -> Option<RangeVariableDeclaration> {
        self.0.children().find_map(RangeVariableDeclaration::cast)
    }

    /// Join condition after `WITH`.
    pub fn condition(&self) -> Option<SyntaxNode> {
        token(&self.0, SyntaxKind::KwWith)?;
        self.0.children().find(|child| {
            !matches!(
                child.kind(),
                SyntaxKind::JoinAssociationDeclaration | SyntaxKind::RangeVariableDeclaration
            )
        })
    }
}

impl WhereClause {
    pub fn condition(&self) -> Option<SyntaxNode> {
        expression_child(&self.0)
    }
}

impl HavingClause {
    pub fn condition(&self) -> Option<SyntaxNode> {
        expression_child(&self.0)
    }
}

impl GroupByClause {
    pub fn items(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.0
            .children()
            .filter(|child| child.kind() == SyntaxKind::GroupByItem)
            .filter_map(|item| expression_child(&item))
    }
}

impl OrderByClause {
    pub fn items(&self) -> impl Iterator<Item = OrderByItem> + '_ {
        self.0.children().filter_map(OrderByItem::cast)
    }
}

impl OrderByItem {
    pub fn expression(&self) -> Option<SyntaxNode> {
        expression_child(&self.0)
    }

    pub fn direction(&self) -> Direction {
        if token(&self.0, SyntaxKind::KwDesc).is_some() {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

impl UpdateStatement {
    pub fn update_clause(&self) -> Option<UpdateClause> {
        self.0.children().find_map(UpdateClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }
}

impl UpdateClause {
    pub fn entity(&self) -> Option<AbstractSchemaName> {
        self.0.children().find_map(AbstractSchemaName::cast)
    }

    pub fn alias(&self) -> Option<SyntaxToken> {
        alias_identification_variable(&self.0)
    }

    pub fn items(&self) -> impl Iterator<Item = UpdateItem> + '_ {
        self.0.children().filter_map(UpdateItem::cast)
    }
}

impl UpdateItem {
    pub fn target(&self) -> Option<PathExpression> {
        self.0.children().find_map(PathExpression::cast)
    }

    /// Assigned value. `None` for `= NULL` and for a missing value.
    pub fn value(&self) -> Option<SyntaxNode> {
        self.0
            .children()
            .filter(|child| child.kind() != SyntaxKind::Error)
            .nth(1)
    }

    pub fn is_null(&self) -> bool {
        token(&self.0, SyntaxKind::KwNull).is_some()
    }
}

impl DeleteStatement {
    pub fn delete_clause(&self) -> Option<DeleteClause> {
        self.0.children().find_map(DeleteClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        self.0.children().find_map(WhereClause::cast)
    }
}

impl DeleteClause {
    pub fn entity(&self) -> Option<AbstractSchemaName> {
        self.0.children().find_map(AbstractSchemaName::cast)
    }

    pub fn alias(&self) -> Option<SyntaxToken> {
        alias_identification_variable(&self.0)
    }
}

impl AbstractSchemaName {
    /// Class name as written, trivia stripped: `App\Entity\User`.
    pub fn name(&self) -> String {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| !t.kind().is_trivia())
            .map(|t| t.text().to_string())
            .collect()
    }

    pub fn is_fully_qualified(&self) -> bool {
        token(&self.0, SyntaxKind::Backslash).is_some()
    }
}

impl PathExpression {
    /// The identification variable the path starts from: `u` in `u.address.city`.
    pub fn variable(&self) -> Option<SyntaxToken> {
        self.0
            .children()
            .find(|child| child.kind() == SyntaxKind::IdentificationVariable)
            .and_then(|var| ident_of(&var))
    }

    /// Field names after the variable: `address`, `city` in `u.address.city`.
    pub fn fields(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children()
            .filter(|child| child.kind() == SyntaxKind::FieldIdentificationVariable)
            .filter_map(|field| ident_of(&field))
    }
}

impl NamedParameter {
    pub fn name(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ident)
    }
}

impl PositionalParameter {
    pub fn position(&self) -> Option<u32> {
        token(&self.0, SyntaxKind::IntegerLit).and_then(|t| t.text().parse().ok())
    }
}
