//! Syntax kinds for the Doctrine Query Language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; keyword and node kinds lack token/regex attributes.
//! Words are always lexed as `Ident` and re-tagged as keywords afterwards, so the
//! keyword table lives in one place (the grammar descriptor).
//! `DqlLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("=")]
    Equals,

    #[token("<")]
    Lt,

    #[token("<=")]
    LtEq,

    #[token("<>")]
    LtGt,

    #[token(">")]
    Gt,

    #[token(">=")]
    GtEq,

    /// Accepted for compatibility, `<>` is the canonical spelling.
    #[token("!=")]
    BangEq,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    /// Positional parameter prefix: `?1`
    #[token("?")]
    Question,

    /// Named parameter prefix: `:name`
    #[token(":")]
    Colon,

    /// PHP namespace separator in entity names: `App\Entity\User`
    #[token("\\")]
    Backslash,

    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLit,

    /// String literal missing its closing quote.
    #[regex(r"'(?:[^'\\]|\\.)*")]
    UnterminatedString,

    #[regex(r"[0-9]+\.[0-9]+(?:[eE][+-]?[0-9]+)?")]
    FloatLit,

    #[regex(r"[0-9]+")]
    IntegerLit,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"--[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // --- Reserved keywords (re-tagged by the lexer) ---
    KwSelect,
    KwDistinct,
    KwFrom,
    KwWhere,
    KwGroup,
    KwBy,
    KwHaving,
    KwOrder,
    KwUpdate,
    KwSet,
    KwDelete,
    KwAs,
    KwIndex,
    KwLeft,
    KwOuter,
    KwInner,
    KwJoin,
    KwWith,
    KwPartial,
    KwNew,
    KwNull,
    KwAsc,
    KwDesc,
    KwOr,
    KwAnd,
    KwNot,
    KwBetween,
    KwLike,
    KwEscape,
    KwIn,
    KwIs,
    KwExists,
    KwEmpty,
    KwMember,
    KwOf,
    KwInstance,
    KwAll,
    KwAny,
    KwSome,
    KwTrue,
    KwFalse,
    KwCase,
    KwWhen,
    KwThen,
    KwElse,
    KwEnd,

    // --- Contextual keywords (re-tagged by the parser) ---
    KwHidden,
    KwNamed,
    KwAvg,
    KwMax,
    KwMin,
    KwSum,
    KwCount,
    KwCoalesce,
    KwNullif,
    KwLength,
    KwLocate,
    KwAbs,
    KwSqrt,
    KwMod,
    KwSize,
    KwDateDiff,
    KwBitAnd,
    KwBitOr,
    KwConcat,
    KwSubstring,
    KwTrim,
    KwLeading,
    KwTrailing,
    KwBoth,
    KwLower,
    KwUpper,
    KwIdentity,
    KwCurrentDate,
    KwCurrentTime,
    KwCurrentTimestamp,
    KwDateAdd,
    KwDateSub,

    /// Coalesced unrecognized characters
    Garbage,
    Error,

    // --- Node kinds (non-terminals) ---
    SourceFile,
    SelectStatement,
    UpdateStatement,
    DeleteStatement,
    Subselect,

    SelectClause,
    FromClause,
    WhereClause,
    GroupByClause,
    HavingClause,
    OrderByClause,
    UpdateClause,
    DeleteClause,

    AbstractSchemaName,
    IdentificationVariable,
    AliasIdentificationVariable,
    AliasResultVariable,
    FieldIdentificationVariable,
    PathExpression,

    IdentificationVariableDeclaration,
    RangeVariableDeclaration,
    IndexBy,
    Join,
    JoinAssociationDeclaration,

    SelectExpression,
    PartialObjectExpression,
    PartialFieldSet,
    NewObjectExpression,
    NewObjectArg,

    UpdateItem,
    OrderByItem,
    GroupByItem,

    ConditionalExpression,
    ConditionalTerm,
    ConditionalFactor,
    ConditionalPrimary,

    ComparisonExpression,
    ComparisonOperator,
    BetweenExpression,
    LikeExpression,
    InExpression,
    NullComparisonExpression,
    ExistsExpression,
    EmptyCollectionComparisonExpression,
    CollectionMemberExpression,
    InstanceOfExpression,
    QuantifiedExpression,

    SimpleArithmeticExpression,
    ArithmeticTerm,
    ArithmeticFactor,
    ArithmeticPrimary,

    Literal,
    CharLiteral,
    PositionalParameter,
    NamedParameter,

    AggregateExpression,
    GeneralCaseExpression,
    SimpleCaseExpression,
    WhenClause,
    SimpleWhenClause,
    CoalesceExpression,
    NullifExpression,

    FunctionsReturningNumerics,
    FunctionsReturningStrings,
    FunctionsReturningDatetime,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Every kind in discriminant order, `__LAST` excluded.
    pub fn all() -> impl Iterator<Item = SyntaxKind> {
        (0..__LAST as u16).map(|raw| DqlLang::kind_from_raw(rowan::SyntaxKind(raw)))
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | Garbage | UnterminatedString)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        self < SourceFile
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self >= SourceFile && self < __LAST
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self >= KwSelect && self <= KwDateSub
    }

    /// Reserved keywords never act as identifiers, except as field names after `.`.
    #[inline]
    pub fn is_reserved(self) -> bool {
        self >= KwSelect && self <= KwEnd
    }

    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        self >= KwHidden && self <= KwDateSub
    }

    /// Canonical (uppercase) spelling of a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        let text = match self {
            KwSelect => "SELECT",
            KwDistinct => "DISTINCT",
            KwFrom => "FROM",
            KwWhere => "WHERE",
            KwGroup => "GROUP",
            KwBy => "BY",
            KwHaving => "HAVING",
            KwOrder => "ORDER",
            KwUpdate => "UPDATE",
            KwSet => "SET",
            KwDelete => "DELETE",
            KwAs => "AS",
            KwIndex => "INDEX",
            KwLeft => "LEFT",
            KwOuter => "OUTER",
            KwInner => "INNER",
            KwJoin => "JOIN",
            KwWith => "WITH",
            KwPartial => "PARTIAL",
            KwNew => "NEW",
            KwNull => "NULL",
            KwAsc => "ASC",
            KwDesc => "DESC",
            KwOr => "OR",
            KwAnd => "AND",
            KwNot => "NOT",
            KwBetween => "BETWEEN",
            KwLike => "LIKE",
            KwEscape => "ESCAPE",
            KwIn => "IN",
            KwIs => "IS",
            KwExists => "EXISTS",
            KwEmpty => "EMPTY",
            KwMember => "MEMBER",
            KwOf => "OF",
            KwInstance => "INSTANCE",
            KwAll => "ALL",
            KwAny => "ANY",
            KwSome => "SOME",
            KwTrue => "TRUE",
            KwFalse => "FALSE",
            KwCase => "CASE",
            KwWhen => "WHEN",
            KwThen => "THEN",
            KwElse => "ELSE",
            KwEnd => "END",
            KwHidden => "HIDDEN",
            KwNamed => "NAMED",
            KwAvg => "AVG",
            KwMax => "MAX",
            KwMin => "MIN",
            KwSum => "SUM",
            KwCount => "COUNT",
            KwCoalesce => "COALESCE",
            KwNullif => "NULLIF",
            KwLength => "LENGTH",
            KwLocate => "LOCATE",
            KwAbs => "ABS",
            KwSqrt => "SQRT",
            KwMod => "MOD",
            KwSize => "SIZE",
            KwDateDiff => "DATE_DIFF",
            KwBitAnd => "BIT_AND",
            KwBitOr => "BIT_OR",
            KwConcat => "CONCAT",
            KwSubstring => "SUBSTRING",
            KwTrim => "TRIM",
            KwLeading => "LEADING",
            KwTrailing => "TRAILING",
            KwBoth => "BOTH",
            KwLower => "LOWER",
            KwUpper => "UPPER",
            KwIdentity => "IDENTITY",
            KwCurrentDate => "CURRENT_DATE",
            KwCurrentTime => "CURRENT_TIME",
            KwCurrentTimestamp => "CURRENT_TIMESTAMP",
            KwDateAdd => "DATE_ADD",
            KwDateSub => "DATE_SUB",
            _ => return None,
        };
        Some(text)
    }

    /// Name of this kind in the DQL grammar.
    ///
    /// Named kinds use the snake_case rule name, anonymous tokens their literal text.
    pub fn grammar_name(self) -> &'static str {
        if let Some(text) = self.keyword_text() {
            return text;
        }
        match self {
            ParenOpen => "(",
            ParenClose => ")",
            BraceOpen => "{",
            BraceClose => "}",
            Comma => ",",
            Dot => ".",
            Equals => "=",
            Lt => "<",
            LtEq => "<=",
            LtGt => "<>",
            Gt => ">",
            GtEq => ">=",
            BangEq => "!=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Question => "?",
            Colon => ":",
            Backslash => "\\",
            StringLit => "string_literal",
            FloatLit => "float_literal",
            IntegerLit => "integer_literal",
            Ident => "identifier",
            Whitespace => "whitespace",
            LineComment | BlockComment => "comment",
            UnterminatedString | Garbage | Error => "ERROR",
            SourceFile => "source_file",
            SelectStatement => "select_statement",
            UpdateStatement => "update_statement",
            DeleteStatement => "delete_statement",
            Subselect => "subselect",
            SelectClause => "select_clause",
            FromClause => "from_clause",
            WhereClause => "where_clause",
            GroupByClause => "group_by_clause",
            HavingClause => "having_clause",
            OrderByClause => "order_by_clause",
            UpdateClause => "update_clause",
            DeleteClause => "delete_clause",
            AbstractSchemaName => "abstract_schema_name",
            IdentificationVariable => "identification_variable",
            AliasIdentificationVariable => "alias_identification_variable",
            AliasResultVariable => "alias_result_variable",
            FieldIdentificationVariable => "field_identification_variable",
            PathExpression => "path_expression",
            IdentificationVariableDeclaration => "identification_variable_declaration",
            RangeVariableDeclaration => "range_variable_declaration",
            IndexBy => "index_by",
            Join => "join",
            JoinAssociationDeclaration => "join_association_declaration",
            SelectExpression => "select_expression",
            PartialObjectExpression => "partial_object_expression",
            PartialFieldSet => "partial_field_set",
            NewObjectExpression => "new_object_expression",
            NewObjectArg => "new_object_arg",
            UpdateItem => "update_item",
            OrderByItem => "order_by_item",
            GroupByItem => "group_by_item",
            ConditionalExpression => "conditional_expression",
            ConditionalTerm => "conditional_term",
            ConditionalFactor => "conditional_factor",
            ConditionalPrimary => "conditional_primary",
            ComparisonExpression => "comparison_expression",
            ComparisonOperator => "comparison_operator",
            BetweenExpression => "between_expression",
            LikeExpression => "like_expression",
            InExpression => "in_expression",
            NullComparisonExpression => "null_comparison_expression",
            ExistsExpression => "exists_expression",
            EmptyCollectionComparisonExpression => "empty_collection_comparison_expression",
            CollectionMemberExpression => "collection_member_expression",
            InstanceOfExpression => "instance_of_expression",
            QuantifiedExpression => "quantified_expression",
            SimpleArithmeticExpression => "simple_arithmetic_expression",
            ArithmeticTerm => "arithmetic_term",
            ArithmeticFactor => "arithmetic_factor",
            ArithmeticPrimary => "arithmetic_primary",
            Literal => "literal",
            CharLiteral => "char_literal",
            PositionalParameter => "positional_parameter",
            NamedParameter => "named_parameter",
            AggregateExpression => "aggregate_expression",
            GeneralCaseExpression => "general_case_expression",
            SimpleCaseExpression => "simple_case_expression",
            WhenClause => "when_clause",
            SimpleWhenClause => "simple_when_clause",
            CoalesceExpression => "coalesce_expression",
            NullifExpression => "nullif_expression",
            FunctionsReturningNumerics => "functions_returning_numerics",
            FunctionsReturningStrings => "functions_returning_strings",
            FunctionsReturningDatetime => "functions_returning_datetime",
            _ => "__LAST",
        }
    }

    /// Named kinds are rules and regex tokens; anonymous kinds are punctuation and keywords.
    pub fn is_named(self) -> bool {
        if self.is_node() {
            return true;
        }
        matches!(
            self,
            StringLit
                | UnterminatedString
                | FloatLit
                | IntegerLit
                | Ident
                | LineComment
                | BlockComment
                | Garbage
                | Error
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DqlLang {}

impl Language for DqlLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<DqlLang>;
pub type SyntaxToken = rowan::SyntaxToken<DqlLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 128-bit bitset of token `SyntaxKind`s for O(1) membership testing.
///
/// Only token kinds fit; node kinds never appear in lookahead.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Creates an empty token set.
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 128.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u128;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 128, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 128 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for kind in SyntaxKind::all().take_while(|k| (*k as u16) < 128) {
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    pub const STATEMENT_FIRST: TokenSet = TokenSet::new(&[KwSelect, KwUpdate, KwDelete]);

    pub const TRIVIA: TokenSet = TokenSet::new(&[Whitespace, LineComment, BlockComment]);

    pub const COMPARISON_OPERATORS: TokenSet =
        TokenSet::new(&[Equals, Lt, LtEq, LtGt, Gt, GtEq, BangEq]);

    pub const ADDITIVE_OPERATORS: TokenSet = TokenSet::new(&[Plus, Minus]);

    pub const MULTIPLICATIVE_OPERATORS: TokenSet = TokenSet::new(&[Star, Slash]);

    /// Tokens that may follow the left operand of a simple conditional expression.
    pub const CONDITION_SUFFIX: TokenSet = COMPARISON_OPERATORS.union(TokenSet::new(&[
        KwNot, KwBetween, KwLike, KwIn, KwIs, KwMember, KwInstance,
    ]));

    /// Tokens that may follow a parenthesized arithmetic operand.
    pub const OPERAND_FOLLOW: TokenSet = CONDITION_SUFFIX
        .union(ADDITIVE_OPERATORS)
        .union(MULTIPLICATIVE_OPERATORS);

    pub const LITERALS: TokenSet = TokenSet::new(&[StringLit, IntegerLit, FloatLit, KwTrue, KwFalse]);

    pub const CLAUSE_KEYWORDS: TokenSet = TokenSet::new(&[
        KwFrom, KwWhere, KwGroup, KwHaving, KwOrder, KwSet,
    ]);

    pub const JOIN_FIRST: TokenSet = TokenSet::new(&[KwLeft, KwInner, KwJoin]);

    /// Synchronization points: an expression parser never consumes these on error.
    pub const EXPR_RECOVERY: TokenSet = STATEMENT_FIRST
        .union(CLAUSE_KEYWORDS)
        .union(JOIN_FIRST)
        .union(TokenSet::new(&[
            ParenClose, BraceClose, Comma, KwAs, KwAnd, KwOr, KwWith, KwIndex, KwWhen, KwThen,
            KwElse, KwEnd, KwAsc, KwDesc,
        ]));

    pub const STATEMENT_RECOVERY: TokenSet = STATEMENT_FIRST;
}
