use crate::Query;
use indoc::indoc;

#[test]
fn index_by() {
    let input = "SELECT u FROM User u INDEX BY u.id";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            IdentificationVariable
              Ident "u"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
            IndexBy
              KwIndex "INDEX"
              KwBy "BY"
              PathExpression
                IdentificationVariable
                  Ident "u"
                Dot "."
                FieldIdentificationVariable
                  Ident "id"
    "#);
}

#[test]
fn fully_qualified_entity() {
    let input = r"SELECT u FROM \App\Entity\User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            IdentificationVariable
              Ident "u"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Backslash "\\"
                Ident "App"
                Backslash "\\"
                Ident "Entity"
                Backslash "\\"
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn association_join_with_condition() {
    let input = "SELECT u FROM User u LEFT JOIN u.address a WITH a.city = :city";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            IdentificationVariable
              Ident "u"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
            Join
              KwLeft "LEFT"
              KwJoin "JOIN"
              JoinAssociationDeclaration
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "address"
                AliasIdentificationVariable
                  Ident "a"
              KwWith "WITH"
              ComparisonExpression
                PathExpression
                  IdentificationVariable
                    Ident "a"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "city"
                ComparisonOperator
                  Equals "="
                NamedParameter
                  Colon ":"
                  Ident "city"
    "#);
}

#[test]
fn several_declarations_and_join_kinds() {
    let input = indoc! {"
    SELECT u
    FROM User AS u
      LEFT OUTER JOIN u.phones p
      JOIN u.address a,
      Team t
      INNER JOIN Role r WITH r.team = t
    "};

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        From User u
          LeftJoin u.phones p
          Join u.address a
        From Team t
          Join Role r WITH r.team = t
    ");
}

#[test]
fn join_association_index_by() {
    let input = "SELECT u FROM User u JOIN u.phones p INDEX BY p.number";

    let query = Query::expect_valid(input);
    let join = query
        .syntax()
        .descendants()
        .find_map(crate::parser::ast::JoinAssociationDeclaration::cast)
        .unwrap();
    let path = join.index_by().unwrap().path().unwrap();
    assert_eq!(path.as_cst().text().to_string(), "p.number");
}

#[test]
fn keyword_field_in_join_path() {
    let input = "SELECT u FROM User u JOIN u.order o";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        From User u
          Join u.order o
    ");
}

#[test]
fn reserved_words_in_namespaced_entity() {
    let input = r"SELECT o FROM App\Entity\Order o";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            IdentificationVariable
              Ident "o"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "App"
                Backslash "\\"
                Ident "Entity"
                Backslash "\\"
                Ident "Order"
              AliasIdentificationVariable
                Ident "o"
    "#);
}

#[test]
fn reserved_word_entity_followed_by_alias() {
    let input = "SELECT o, g FROM Order o, Group AS g";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr o
        Expr g
        From Order o
        From Group g
    ");
}

#[test]
fn reserved_word_entity_in_range_join() {
    let input = r"SELECT u FROM User u JOIN App\Entity\Group g WITH g.owner = u";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        From User u
          Join App\Entity\Group g WITH g.owner = u
    ");
}

#[test]
fn clause_keyword_is_not_an_entity() {
    let input = "SELECT u FROM WHERE u.id = 1";

    let query = Query::expect(input);

    assert!(!query.is_valid());
    let Some(crate::parser::ast::Statement::Select(select)) = query.statements().next() else {
        panic!("expected a select statement");
    };
    assert!(select.where_clause().is_some());
}
