use crate::Query;

#[test]
fn and_binds_tighter_than_or() {
    let input = "DELETE User u WHERE u.a = 1 AND u.b = 2 OR NOT u.c = 3";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ConditionalExpression
            ConditionalTerm
              ComparisonExpression
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "a"
                ComparisonOperator
                  Equals "="
                Literal
                  IntegerLit "1"
              KwAnd "AND"
              ComparisonExpression
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "b"
                ComparisonOperator
                  Equals "="
                Literal
                  IntegerLit "2"
            KwOr "OR"
            ConditionalFactor
              KwNot "NOT"
              ComparisonExpression
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "c"
                ComparisonOperator
                  Equals "="
                Literal
                  IntegerLit "3"
    "#);
}

#[test]
fn parenthesized_condition() {
    let input = "DELETE User u WHERE (u.a = 1 OR u.b = 2) AND u.c = 3";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ConditionalTerm
            ConditionalPrimary
              ParenOpen "("
              ConditionalExpression
                ComparisonExpression
                  PathExpression
                    IdentificationVariable
                      Ident "u"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "a"
                  ComparisonOperator
                    Equals "="
                  Literal
                    IntegerLit "1"
                KwOr "OR"
                ComparisonExpression
                  PathExpression
                    IdentificationVariable
                      Ident "u"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "b"
                  ComparisonOperator
                    Equals "="
                  Literal
                    IntegerLit "2"
              ParenClose ")"
            KwAnd "AND"
            ComparisonExpression
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "c"
              ComparisonOperator
                Equals "="
              Literal
                IntegerLit "3"
    "#);
}

#[test]
fn parenthesized_operand_is_not_a_condition() {
    let input = "DELETE User u WHERE (u.a + 1) * 2 > u.b";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ComparisonExpression
            ArithmeticTerm
              ArithmeticPrimary
                ParenOpen "("
                SimpleArithmeticExpression
                  PathExpression
                    IdentificationVariable
                      Ident "u"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "a"
                  Plus "+"
                  Literal
                    IntegerLit "1"
                ParenClose ")"
              Star "*"
              Literal
                IntegerLit "2"
            ComparisonOperator
              Gt ">"
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "b"
    "#);
}

#[test]
fn between() {
    let input = "DELETE User u WHERE u.age NOT BETWEEN 18 AND 65";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          BetweenExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "age"
            KwNot "NOT"
            KwBetween "BETWEEN"
            Literal
              IntegerLit "18"
            KwAnd "AND"
            Literal
              IntegerLit "65"
    "#);
}

#[test]
fn like_with_escape() {
    let input = "DELETE User u WHERE u.name LIKE 'a!%' ESCAPE '!'";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          LikeExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "name"
            KwLike "LIKE"
            Literal
              StringLit "'a!%'"
            KwEscape "ESCAPE"
            CharLiteral
              StringLit "'!'"
    "#);
}

#[test]
fn in_list() {
    let input = "DELETE User u WHERE u.id IN (1, 2, ?1)";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          InExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "id"
            KwIn "IN"
            ParenOpen "("
            Literal
              IntegerLit "1"
            Comma ","
            Literal
              IntegerLit "2"
            Comma ","
            PositionalParameter
              Question "?"
              IntegerLit "1"
            ParenClose ")"
    "#);
}

#[test]
fn null_and_empty_comparisons() {
    let input = "DELETE User u WHERE u.team IS NOT NULL AND u.roles IS EMPTY";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ConditionalTerm
            NullComparisonExpression
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "team"
              KwIs "IS"
              KwNot "NOT"
              KwNull "NULL"
            KwAnd "AND"
            EmptyCollectionComparisonExpression
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "roles"
              KwIs "IS"
              KwEmpty "EMPTY"
    "#);
}

#[test]
fn member_of_and_instance_of() {
    let input = "DELETE User u WHERE :role MEMBER OF u.roles OR u INSTANCE OF (Admin, :type)";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ConditionalExpression
            CollectionMemberExpression
              NamedParameter
                Colon ":"
                Ident "role"
              KwMember "MEMBER"
              KwOf "OF"
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "roles"
            KwOr "OR"
            InstanceOfExpression
              IdentificationVariable
                Ident "u"
              KwInstance "INSTANCE"
              KwOf "OF"
              ParenOpen "("
              AbstractSchemaName
                Ident "Admin"
              Comma ","
              NamedParameter
                Colon ":"
                Ident "type"
              ParenClose ")"
    "#);
}

#[test]
fn not_exists_subquery() {
    let input = "DELETE User u WHERE NOT EXISTS (SELECT t FROM Team t WHERE t.owner = u)";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ExistsExpression
            KwNot "NOT"
            KwExists "EXISTS"
            ParenOpen "("
            Subselect
              SelectClause
                KwSelect "SELECT"
                SelectExpression
                  IdentificationVariable
                    Ident "t"
              FromClause
                KwFrom "FROM"
                IdentificationVariableDeclaration
                  RangeVariableDeclaration
                    AbstractSchemaName
                      Ident "Team"
                    AliasIdentificationVariable
                      Ident "t"
              WhereClause
                KwWhere "WHERE"
                ComparisonExpression
                  PathExpression
                    IdentificationVariable
                      Ident "t"
                    Dot "."
                    FieldIdentificationVariable
                      Ident "owner"
                  ComparisonOperator
                    Equals "="
                  IdentificationVariable
                    Ident "u"
            ParenClose ")"
    "#);
}

#[test]
fn quantified_comparison() {
    let input = "DELETE User u WHERE u.age > ALL (SELECT t.age FROM Team t)";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      DeleteStatement
        DeleteClause
          KwDelete "DELETE"
          AbstractSchemaName
            Ident "User"
          AliasIdentificationVariable
            Ident "u"
        WhereClause
          KwWhere "WHERE"
          ComparisonExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "age"
            ComparisonOperator
              Gt ">"
            QuantifiedExpression
              KwAll "ALL"
              ParenOpen "("
              Subselect
                SelectClause
                  KwSelect "SELECT"
                  SelectExpression
                    PathExpression
                      IdentificationVariable
                        Ident "t"
                      Dot "."
                      FieldIdentificationVariable
                        Ident "age"
                FromClause
                  KwFrom "FROM"
                  IdentificationVariableDeclaration
                    RangeVariableDeclaration
                      AbstractSchemaName
                        Ident "Team"
                      AliasIdentificationVariable
                        Ident "t"
              ParenClose ")"
    "#);
}

#[test]
fn comparison_operators() {
    for op in ["=", "<", "<=", "<>", ">", ">="] {
        let input = format!("DELETE User u WHERE u.id {} 1", op);
        let query = Query::expect_valid(&input);
        assert!(query.diagnostics().is_empty(), "{}", op);
    }
}

#[test]
fn bang_equals_is_a_warning() {
    let input = "DELETE User u WHERE u.id != 1";

    let query = Query::expect(input);

    assert!(query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"warning at 25..27: `!=` is not standard DQL (fix: use `<>`)"
    );
}

#[test]
fn instance_of_reserved_word_entity() {
    let input = r"SELECT u FROM User u WHERE u INSTANCE OF App\Entity\Member OR u NOT INSTANCE OF Member";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        From User u
        Where u INSTANCE OF App\Entity\Member OR u NOT INSTANCE OF Member
    ");
}
