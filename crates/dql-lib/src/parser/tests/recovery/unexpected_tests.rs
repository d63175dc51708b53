use crate::Query;

#[test]
fn clause_outside_statement() {
    let res = Query::expect_invalid("WHERE u.id = 1");

    insta::assert_snapshot!(res, @r"
    error: expected `SELECT`, `UPDATE` or `DELETE`: `WHERE` outside of a statement
      |
    1 | WHERE u.id = 1
      | ^^^^^
    ");
}

#[test]
fn clause_outside_statement_is_one_error_node() {
    let query = Query::expect("WHERE u.id = 1");

    insta::assert_snapshot!(query.dump_cst(), @r#"
    SourceFile
      Error
        KwWhere "WHERE"
        Ident "u"
        Dot "."
        Ident "id"
        Equals "="
        IntegerLit "1"
    "#);
}

#[test]
fn garbage_between_statements() {
    let input = "SELECT u FROM User u WHERE u.id = 1; DELETE FROM User u";

    let query = Query::expect(input);

    insta::assert_snapshot!(query.dump_diagnostics(), @r"
    error: expected `SELECT`, `UPDATE` or `DELETE`: found `;`
      |
    1 | SELECT u FROM User u WHERE u.id = 1; DELETE FROM User u
      |                                    ^
    ");
    insta::assert_snapshot!(query.dump_ast(), @r"
    Root
      Select
        Expr u
        From User u
        Where u.id = 1
      Delete User u
    ");
}

#[test]
fn reserved_keyword_as_alias() {
    let input = "SELECT u FROM User AS from";

    let query = Query::expect(input);

    insta::assert_snapshot!(query.dump_diagnostics(), @r"
    error: expected alias: `from` is a reserved keyword
      |
    1 | SELECT u FROM User AS from
      |                       ^^^^
    ");
    insta::assert_snapshot!(query.dump_cst(), @r#"
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
              KwAs "AS"
      Error
        KwFrom "from"
    "#);
}

#[test]
fn unexpected_token_in_expression() {
    let input = "SELECT u FROM User u WHERE u.id = @";

    let query = Query::expect(input);

    assert!(!query.is_valid());
    insta::assert_snapshot!(
        query.dump_diagnostics_summary(),
        @"error at 34..35: expected an expression: found `@`"
    );
    assert_eq!(query.syntax().text().to_string(), input);
}

#[test]
fn recovers_at_next_statement() {
    let input = "SELECT u FROM User u WHERE ) SELECT t FROM Team t";

    let query = Query::expect(input);

    assert!(!query.is_valid());
    assert_eq!(query.statements().count(), 2);
    assert_eq!(query.syntax().text().to_string(), input);
}
