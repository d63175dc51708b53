use crate::Query;

#[test]
fn simple_select() {
    let input = "SELECT u FROM User u";

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
    "#);
}

#[test]
fn keywords_any_case() {
    let input = "select u from User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "select"
          SelectExpression
            IdentificationVariable
              Ident "u"
        FromClause
          KwFrom "from"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn distinct_with_aliases() {
    let input = "SELECT DISTINCT u.name AS n, u.id AS HIDDEN i FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          KwDistinct "DISTINCT"
          SelectExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "name"
            KwAs "AS"
            AliasResultVariable
              Ident "n"
          Comma ","
          SelectExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "id"
            KwAs "AS"
            KwHidden "HIDDEN"
            AliasResultVariable
              Ident "i"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn hidden_is_an_alias_when_nothing_follows() {
    let input = "SELECT u.id hidden FROM User u";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u.id AS hidden
        From User u
    ");
}

#[test]
fn partial_object() {
    let input = "SELECT PARTIAL u.{id, name} FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            PartialObjectExpression
              KwPartial "PARTIAL"
              IdentificationVariable
                Ident "u"
              Dot "."
              PartialFieldSet
                BraceOpen "{"
                FieldIdentificationVariable
                  Ident "id"
                Comma ","
                FieldIdentificationVariable
                  Ident "name"
                BraceClose "}"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn new_object() {
    let input = r"SELECT NEW App\Dto\UserView(u.id, u.name AS label) FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            NewObjectExpression
              KwNew "NEW"
              AbstractSchemaName
                Ident "App"
                Backslash "\\"
                Ident "Dto"
                Backslash "\\"
                Ident "UserView"
              ParenOpen "("
              NewObjectArg
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "id"
              Comma ","
              NewObjectArg
                PathExpression
                  IdentificationVariable
                    Ident "u"
                  Dot "."
                  FieldIdentificationVariable
                    Ident "name"
                KwAs "AS"
                AliasResultVariable
                  Ident "label"
              ParenClose ")"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn new_named_object() {
    let input = "SELECT NEW NAMED UserView(u.id AS id) FROM User u";

    let query = Query::expect_valid(input);
    let named = query
        .syntax()
        .descendants_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == crate::parser::SyntaxKind::KwNamed);
    assert_eq!(named.unwrap().text(), "NAMED");
}

#[test]
fn subselect_as_select_expression() {
    let input = "SELECT u, (SELECT COUNT(t) FROM Team t) AS teams FROM User u";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u
        Expr SELECT COUNT(t) FROM Team t AS teams
        From User u
    ");
}

#[test]
fn group_having_order() {
    let input = "SELECT u.team, COUNT(u) FROM User u GROUP BY u.team HAVING COUNT(u) > 1 ORDER BY u.team DESC";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "team"
          Comma ","
          SelectExpression
            AggregateExpression
              KwCount "COUNT"
              ParenOpen "("
              IdentificationVariable
                Ident "u"
              ParenClose ")"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
        GroupByClause
          KwGroup "GROUP"
          KwBy "BY"
          GroupByItem
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "team"
        HavingClause
          KwHaving "HAVING"
          ComparisonExpression
            AggregateExpression
              KwCount "COUNT"
              ParenOpen "("
              IdentificationVariable
                Ident "u"
              ParenClose ")"
            ComparisonOperator
              Gt ">"
            Literal
              IntegerLit "1"
        OrderByClause
          KwOrder "ORDER"
          KwBy "BY"
          OrderByItem
            PathExpression
              IdentificationVariable
                Ident "u"
              Dot "."
              FieldIdentificationVariable
                Ident "team"
            KwDesc "DESC"
    "#);
}

#[test]
fn instance_of_as_select_expression() {
    let input = "SELECT u INSTANCE OF Admin AS isAdmin FROM User u";

    let res = Query::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    SourceFile
      SelectStatement
        SelectClause
          KwSelect "SELECT"
          SelectExpression
            InstanceOfExpression
              IdentificationVariable
                Ident "u"
              KwInstance "INSTANCE"
              KwOf "OF"
              AbstractSchemaName
                Ident "Admin"
            KwAs "AS"
            AliasResultVariable
              Ident "isAdmin"
        FromClause
          KwFrom "FROM"
          IdentificationVariableDeclaration
            RangeVariableDeclaration
              AbstractSchemaName
                Ident "User"
              AliasIdentificationVariable
                Ident "u"
    "#);
}

#[test]
fn negated_instance_of_in_select_outline() {
    let input = r"SELECT u NOT INSTANCE OF App\Entity\Member a FROM User u";

    let res = Query::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Root
      Select
        Expr u NOT INSTANCE OF App\Entity\Member AS a
        From User u
    ");
}
